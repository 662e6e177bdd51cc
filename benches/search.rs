//! Search throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use red_blue_nim::core::{GameState, Variant};
use red_blue_nim::rules::Role;
use red_blue_nim::search::{minimax_value, AlphaBeta, SearchConfig};

fn bench_alpha_beta(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha_beta");

    for (red, blue) in [(6, 6), (10, 10), (14, 12)] {
        let state = GameState::new(red, blue);
        for variant in [Variant::Standard, Variant::Misere] {
            group.bench_function(format!("{red}x{blue}/{variant}"), |b| {
                let mut search = AlphaBeta::new(SearchConfig::default());
                b.iter(|| search.analyze(black_box(state), variant, Role::Maximizer))
            });
        }
    }

    group.finish();
}

fn bench_unpruned(c: &mut Criterion) {
    let state = GameState::new(8, 8);
    c.bench_function("minimax/8x8/standard", |b| {
        b.iter(|| minimax_value(black_box(state), Variant::Standard, Role::Maximizer, None))
    });
}

criterion_group!(benches, bench_alpha_beta, bench_unpruned);
criterion_main!(benches);
