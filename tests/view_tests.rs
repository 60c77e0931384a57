//! View tests - history strip and chart series

use meta_tetris::core::{RulesConfig, Tetromino};
use meta_tetris::engine::{
    boards_after_each_move, last_meta_score_change, meta_score_series, move_strip,
    points_series, previous_timeline_series, take_last, FixedSeed, MetaTimeline, StripMarker,
};
use meta_tetris::types::{PieceKind, Rotation, CHART_WINDOW};

fn played_timeline() -> MetaTimeline<FixedSeed> {
    let mut tl = MetaTimeline::with_seed_source(RulesConfig::default(), 21, FixedSeed(22)).unwrap();
    for (kind, x) in [(PieceKind::I, 0), (PieceKind::I, 4), (PieceKind::O, 7)] {
        tl.drop_piece(Tetromino::new(kind, Rotation::North, x, 0))
            .unwrap();
    }
    tl
}

#[test]
fn test_strip_shows_board_before_each_move() {
    let tl = played_timeline();
    let strip = move_strip(tl.current(), tl.rules()).unwrap();
    assert_eq!(strip.len(), 3);

    assert_eq!(strip[0].board.filled_count(), 0);
    assert_eq!(strip[1].board.filled_count(), 4);
    assert_eq!(strip[2].board.filled_count(), 8);

    // Pieces are shown where they land
    assert_eq!(strip[0].piece.y, 18);
    assert_eq!(strip[2].piece, Tetromino::new(PieceKind::O, Rotation::North, 7, 18));
}

#[test]
fn test_strip_markers_follow_cursor() {
    let mut tl = played_timeline();
    let strip = move_strip(tl.current(), tl.rules()).unwrap();
    let markers: Vec<_> = strip.iter().map(|e| e.marker).collect();
    assert_eq!(
        markers,
        [StripMarker::Normal, StripMarker::Normal, StripMarker::Disallowed]
    );

    tl.time_travel(1).unwrap();
    let strip = move_strip(tl.current(), tl.rules()).unwrap();
    let markers: Vec<_> = strip.iter().map(|e| e.marker).collect();
    assert_eq!(
        markers,
        [StripMarker::Normal, StripMarker::Current, StripMarker::Normal]
    );
}

#[test]
fn test_boards_after_each_move() {
    let tl = played_timeline();
    let boards = boards_after_each_move(tl.current(), tl.rules()).unwrap();
    let filled: Vec<usize> = boards.iter().map(|b| b.filled_count()).collect();
    assert_eq!(filled, [0, 4, 8, 2]);
}

#[test]
fn test_points_series_covers_whole_list() {
    let mut tl = played_timeline();
    tl.time_travel(0).unwrap();
    // Cursor position does not truncate the series.
    let points = points_series(tl.current(), tl.rules()).unwrap();
    assert_eq!(points, [0, 0, 0, 100]);
}

#[test]
fn test_previous_timeline_is_right_padded() {
    let tl = played_timeline();
    let earlier = &tl.history()[0];
    let series = previous_timeline_series(earlier, 4, tl.rules()).unwrap();
    assert_eq!(series, [Some(0), Some(0), None, None]);

    // Longer than requested stays whole
    let series = previous_timeline_series(tl.current(), 2, tl.rules()).unwrap();
    assert_eq!(series.len(), 4);
}

#[test]
fn test_meta_score_chart_window() {
    let tl = played_timeline();
    let scores = meta_score_series(tl.history());
    assert_eq!(scores, [0, 0, 100]);

    let window = take_last(&scores, CHART_WINDOW);
    assert_eq!(window.len(), CHART_WINDOW);
    assert!(window[..CHART_WINDOW - 3].iter().all(Option::is_none));
    assert_eq!(window[CHART_WINDOW - 1], Some(100));

    assert_eq!(last_meta_score_change(tl.history()), 100);
}
