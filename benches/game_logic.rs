use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_well::core::{fits, resolve_lines, ActivePiece, Board};
use tui_well::engine::{drop_piece, play_game, NullRenderer, ScriptedInput};
use tui_well::term::WellView;
use tui_well::types::{PieceKind, Rotation, FIRST_PLAYABLE_COL, LAST_PLAYABLE_COL};

fn bench_fits(c: &mut Criterion) {
    let mut board = Board::new();
    for col in FIRST_PLAYABLE_COL..LAST_PLAYABLE_COL {
        board.set(21, col, PieceKind::T);
    }

    c.bench_function("fits_sweep", |b| {
        b.iter(|| {
            let mut n = 0;
            for row in 0..22 {
                for col in 0..16 {
                    if fits(&board, PieceKind::J, Rotation::East, (row, col)) {
                        n += 1;
                    }
                }
            }
            black_box(n)
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 18..22 {
                for col in FIRST_PLAYABLE_COL..=LAST_PLAYABLE_COL {
                    board.set(row, col, PieceKind::I);
                }
            }
            black_box(resolve_lines(&mut board, black_box(18)))
        })
    });
}

fn bench_drop_piece(c: &mut Criterion) {
    c.bench_function("drop_piece_gravity_only", |b| {
        b.iter(|| {
            let mut board = Board::new();
            drop_piece(
                &mut board,
                black_box(PieceKind::S),
                Duration::from_secs(1),
                &mut ScriptedInput::default(),
                &mut NullRenderer,
            )
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = Board::new();
    let piece = ActivePiece::spawn(PieceKind::L);

    c.bench_function("rotate_and_check", |b| {
        b.iter(|| {
            let rotated = black_box(piece).rotated();
            black_box(rotated.fits(&board))
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_headless", |b| {
        b.iter(|| play_game(0, black_box(42), &mut ScriptedInput::default(), &mut NullRenderer))
    });
}

fn bench_full_game_rendered(c: &mut Criterion) {
    c.bench_function("full_game_term_view", |b| {
        b.iter(|| {
            let mut view = WellView::with_writer(std::io::sink());
            play_game(0, black_box(42), &mut ScriptedInput::default(), &mut view)
        })
    });
}

criterion_group!(
    benches,
    bench_fits,
    bench_line_clear,
    bench_drop_piece,
    bench_rotate,
    bench_full_game,
    bench_full_game_rendered
);
criterion_main!(benches);
