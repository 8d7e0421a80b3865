//! Benchmarks for solver performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use peasant_chess::board::{Setup, START_FEN};
use peasant_chess::search::{SearchConfig, SilentReporter, Solver, Value};

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let start = Setup::START.position;
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| start.perft(black_box(depth)))
        });
    }

    let midgame: Setup = "8/p1p2pp1/1p5p/3pP3/2P5/8/PP3PPP/8 w d6".parse().unwrap();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("midgame", depth), &depth, |b, &depth| {
            b.iter(|| midgame.position.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let positions = [
        ("startpos", START_FEN),
        ("midgame", "8/p1p2pp1/1p5p/3pP3/2P5/8/PP3PPP/8 w d6"),
        ("captures", "8/8/3p1p2/p1p1P1p1/1P1P1P1P/8/8/8 w -"),
    ];

    for (name, fen) in positions {
        let setup: Setup = fen.parse().unwrap();
        group.bench_with_input(BenchmarkId::new("position", name), &setup, |b, setup| {
            b.iter(|| black_box(setup.position.generate_moves()))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    // Fixed-depth search from the start
    for depth in [4, 5, 6] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut solver = Solver::new(SearchConfig::with_hash_mb(16, 4));
                let mut pv = Vec::new();
                solver.search(depth, &Setup::START.position, Value::Loss, Value::Win, &mut pv)
            })
        });
    }

    // Full solve of small endgames
    let endgames = [
        ("two_vs_two", "8/pp6/8/8/8/8/6PP/8 w -"),
        ("three_vs_three", "8/ppp5/8/8/8/8/5PPP/8 w -"),
    ];
    for (name, fen) in endgames {
        let setup: Setup = fen.parse().unwrap();
        group.bench_with_input(BenchmarkId::new("solve", name), &setup, |b, setup| {
            b.iter(|| {
                let mut solver = Solver::new(SearchConfig::with_hash_mb(16, 4));
                solver.solve(setup, &SilentReporter)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_search);
criterion_main!(benches);
