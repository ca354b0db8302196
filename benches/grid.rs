use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use duolife::Grid;
use rand::{SeedableRng, rngs::StdRng};

fn make_grid(size: i32) -> Grid {
    let mut grid = Grid::new(size, size).expect("positive size");
    let mut rng = StdRng::seed_from_u64(size as u64);
    grid.randomize(Some(&mut rng)).expect("rng supplied");
    grid
}

fn bench_advance_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_generation");
    for size in [64, 128, 256] {
        let grid = make_grid(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| grid.advance_generation(),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance_generation);
criterion_main!(benches);
