use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minefield_core::*;
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for difficulty in Difficulty::ALL {
        let config = difficulty.config();
        group.bench_with_input(BenchmarkId::from_parameter(difficulty), &config, |b, &config| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                black_box(RandomBoardGenerator::new(seed).generate(config))
            });
        });
    }
    group.finish();
}

fn bench_open_board(c: &mut Criterion) {
    let board = Board::from_mine_coords((16, 30), &[(15, 29)]).expect("valid layout");
    c.bench_function("reveal/flood_16x30", |b| {
        b.iter_batched(
            || Game::with_board(Difficulty::Hard, board.clone()),
            |mut game| black_box(game.reveal((0, 0))),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_generate, bench_open_board);
criterion_main!(benches);
