use criterion::{black_box, criterion_group, criterion_main, Criterion};
use meta_tetris::core::{simulate, Board, RulesConfig, Tetromino};
use meta_tetris::engine::{build_meta_history, MetaAction};
use meta_tetris::types::{PieceKind, Rotation};

/// A long list that keeps clearing lines without topping out.
fn long_placements(count: usize) -> Vec<Tetromino> {
    let cycle = [
        Tetromino::new(PieceKind::I, Rotation::North, 0, 0),
        Tetromino::new(PieceKind::I, Rotation::North, 4, 0),
        Tetromino::new(PieceKind::O, Rotation::North, 7, 0),
    ];
    cycle.iter().copied().cycle().take(count).collect()
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let board = Board::default();
    let piece = Tetromino::new(PieceKind::T, Rotation::North, 3, 0);

    c.bench_function("hard_drop_empty_board", |b| {
        b.iter(|| board.hard_drop(black_box(piece)))
    });
}

fn bench_simulate(c: &mut Criterion) {
    let rules = RulesConfig::default();
    let placements = long_placements(300);

    c.bench_function("simulate_300_moves", |b| {
        b.iter(|| simulate(black_box(&placements), placements.len(), 7, &rules))
    });
}

fn bench_meta_fold(c: &mut Criterion) {
    let rules = RulesConfig::default();
    let mut log: Vec<MetaAction> = long_placements(60)
        .into_iter()
        .map(|piece| MetaAction::DropPiece { piece })
        .collect();
    log.push(MetaAction::TimeTravelTo { index: 10 });
    log.push(MetaAction::ReorderMoves {
        old_index: 10,
        new_index: 40,
    });

    c.bench_function("meta_fold_62_actions", |b| {
        b.iter(|| build_meta_history(black_box(&log), 7, &rules))
    });
}

criterion_group!(
    benches,
    bench_line_clear,
    bench_hard_drop,
    bench_simulate,
    bench_meta_fold
);
criterion_main!(benches);
