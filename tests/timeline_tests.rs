//! Timeline tests - replaying placement lists into snapshots

use meta_tetris::core::{
    final_points, piece_at, simulate, simulate_history, RulesConfig, SimError, Tetromino,
};
use meta_tetris::types::{GameStatus, PieceKind, Rotation};
use proptest::prelude::*;

fn rules() -> RulesConfig {
    RulesConfig::default()
}

fn sample_placements() -> Vec<Tetromino> {
    vec![
        Tetromino::new(PieceKind::I, Rotation::North, 0, 0),
        Tetromino::new(PieceKind::T, Rotation::South, 5, 0),
        Tetromino::new(PieceKind::I, Rotation::North, 4, 0),
        Tetromino::new(PieceKind::O, Rotation::North, 7, 0),
        Tetromino::new(PieceKind::L, Rotation::East, 0, 0),
    ]
}

#[test]
fn test_replay_is_idempotent() {
    let placements = sample_placements();
    for cursor in 0..=placements.len() {
        let a = simulate(&placements, cursor, 31, &rules()).unwrap();
        let b = simulate(&placements, cursor, 31, &rules()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cursor, cursor);
    }
}

#[test]
fn test_history_matches_each_prefix() {
    let placements = sample_placements();
    let history = simulate_history(&placements, placements.len(), 8, &rules()).unwrap();
    assert_eq!(history.len(), placements.len() + 1);
    for (cursor, game) in history.iter().enumerate() {
        assert_eq!(game, &simulate(&placements, cursor, 8, &rules()).unwrap());
    }
}

#[test]
fn test_partial_history_stops_at_cursor() {
    let placements = sample_placements();
    let history = simulate_history(&placements, 2, 8, &rules()).unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[2], simulate(&placements, 2, 8, &rules()).unwrap());
}

#[test]
fn test_empty_list() {
    let game = simulate(&[], 0, 3, &rules()).unwrap();
    assert_eq!(game.board.filled_count(), 0);
    assert_eq!(game.lines, 0);
    assert_eq!(game.points, 0);
    assert_eq!(game.status, GameStatus::Playing);
    assert_eq!(game.current.map(|p| p.kind), Some(piece_at(0, 3)));
    assert_eq!(
        simulate(&[], 1, 3, &rules()),
        Err(SimError::CursorOutOfRange { cursor: 1, len: 0 })
    );
}

#[test]
fn test_line_clear_awards_points_per_line() {
    let placements = [
        Tetromino::new(PieceKind::I, Rotation::North, 0, 0),
        Tetromino::new(PieceKind::I, Rotation::North, 4, 0),
        Tetromino::new(PieceKind::O, Rotation::North, 7, 0),
    ];
    let before = simulate(&placements, 2, 0, &rules()).unwrap();
    assert_eq!(before.lines, 0);
    assert_eq!(before.board.filled_count(), 8);

    let after = simulate(&placements, 3, 0, &rules()).unwrap();
    assert_eq!(after.lines, 1);
    assert_eq!(after.points, rules().points_per_line);
    assert_eq!(after.board.filled_count(), 2);
}

#[test]
fn test_points_follow_configured_rate() {
    let custom = RulesConfig {
        board_width: 9,
        points_per_line: 40,
        ..RulesConfig::default()
    };
    // On a 9-wide board two flat I pieces leave only column 8 open, and an
    // upright I at x = 6 fills it on four rows.
    let placements = [
        Tetromino::new(PieceKind::I, Rotation::North, 0, 0),
        Tetromino::new(PieceKind::I, Rotation::North, 4, 0),
        Tetromino::new(PieceKind::I, Rotation::East, 6, 0),
    ];
    let game = simulate(&placements, 3, 0, &custom).unwrap();
    assert_eq!(game.lines, 1);
    assert_eq!(game.points, 40);
    assert_eq!(final_points(&placements, &custom), 40);
    assert_eq!(game.board.filled_count(), 3);
}

#[test]
fn test_stacking_until_lost() {
    // Every spawn shape covers (4, 1); O pieces at x = 3 fill columns 4 and 5.
    let placements = vec![Tetromino::new(PieceKind::O, Rotation::North, 3, 0); 12];
    let mut lost_at = None;

    for n in 0..=placements.len() {
        let game = simulate(&placements[..n], n, 19, &rules()).unwrap();
        if let Some(at) = lost_at {
            assert_eq!(game.status, GameStatus::Lost, "lost at {}, revived at {}", at, n);
        } else if game.status == GameStatus::Lost {
            lost_at = Some(n);
        } else {
            assert!(game.playable());
        }
    }

    assert_eq!(lost_at, Some(10));
}

#[test]
fn test_blocked_placement_clears_active_piece() {
    let placements = vec![Tetromino::new(PieceKind::O, Rotation::North, 3, 0); 11];

    let full = simulate(&placements[..10], 10, 19, &rules()).unwrap();
    assert!(full.current.is_some());
    assert_eq!(full.status, GameStatus::Lost);

    let blocked = simulate(&placements, 11, 19, &rules()).unwrap();
    assert_eq!(blocked.current, None);
    assert_eq!(blocked.status, GameStatus::Lost);
    assert_eq!(blocked.board, full.board);
}

#[test]
fn test_placement_off_coordinate_range_is_a_loss() {
    let placements = [Tetromino::new(PieceKind::O, Rotation::North, i8::MAX, 0)];
    let game = simulate(&placements, 1, 0, &rules()).unwrap();
    assert_eq!(game.status, GameStatus::Lost);
    assert_eq!(game.current, None);
    assert_eq!(game.board.filled_count(), 0);
    assert_eq!(final_points(&placements, &rules()), 0);

    // Viewing it before it is placed shows it as the active piece
    let at_start = simulate(&placements, 0, 0, &rules()).unwrap();
    assert_eq!(at_start.current, Some(placements[0]));
    assert_eq!(at_start.status, GameStatus::Lost);
}

#[test]
fn test_viewing_history_keeps_queue_length() {
    let placements = sample_placements();
    for cursor in 0..=placements.len() {
        let game = simulate(&placements, cursor, 2, &rules()).unwrap();
        assert!(game.queue.len() >= rules().lookahead);
        assert_eq!(game.held, None);
    }
}

fn placement_strategy() -> impl Strategy<Value = Tetromino> {
    (0..7usize, 0..4u8, -1..9i8).prop_map(|(k, r, x)| {
        Tetromino::new(
            PieceKind::ALL[k],
            Rotation::from_index(r).unwrap_or_default(),
            x,
            0,
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_direct_simulation_matches_history_tail(
        placements in prop::collection::vec(placement_strategy(), 0..40),
        seed in any::<u32>(),
    ) {
        let rules = rules();
        let direct = simulate(&placements, placements.len(), seed, &rules).unwrap();
        let history = simulate_history(&placements, placements.len(), seed, &rules).unwrap();
        prop_assert_eq!(history.last(), Some(&direct));
        prop_assert_eq!(direct.points, final_points(&placements, &rules));
        prop_assert_eq!(direct.points, direct.lines * rules.points_per_line);
    }

    #[test]
    fn prop_blocked_board_stays_lost(
        placements in prop::collection::vec(placement_strategy(), 0..60),
    ) {
        let history = simulate_history(&placements, placements.len(), 3, &rules()).unwrap();
        if let Some(at) = history.iter().position(|g| g.current.is_none()) {
            for game in &history[at..] {
                prop_assert_eq!(game.status, GameStatus::Lost);
                prop_assert_eq!(game.current, None);
                prop_assert_eq!(&game.board, &history[at].board);
            }
        }
    }
}
