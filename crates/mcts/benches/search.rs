//! MCTS search throughput benchmarks.
//!
//! Run with: `cargo bench -p zero_mcts`
//!
//! These benchmarks measure:
//! - Full search from the tic-tac-toe opening with varying simulation counts
//! - Search on a 9×9 board, with and without a reused subtree

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use zero_core::Game;
use zero_gomoku::Gomoku;
use zero_mcts::{Mcts, MctsConfig, Node, RolloutEvaluator, UniformEvaluator};

fn bench_tictactoe_simulations(c: &mut Criterion) {
    let mut group = c.benchmark_group("tictactoe_search");
    let game = Gomoku::tictactoe();

    for sims in [50, 100, 200, 400, 800, 1600] {
        group.throughput(Throughput::Elements(sims as u64));
        group.bench_with_input(BenchmarkId::new("uniform", sims), &sims, |b, &sims| {
            b.iter(|| {
                let mut mcts = Mcts::new(
                    MctsConfig::for_evaluation(sims),
                    UniformEvaluator,
                    ChaCha8Rng::seed_from_u64(42),
                );
                black_box(mcts.search_state(&game, &game.initial_state()).unwrap())
            });
        });
        group.bench_with_input(BenchmarkId::new("rollout", sims), &sims, |b, &sims| {
            b.iter(|| {
                let rng = ChaCha8Rng::seed_from_u64(42);
                let evaluator = RolloutEvaluator::new(rng.clone(), 9);
                let mut mcts = Mcts::new(MctsConfig::for_evaluation(sims), evaluator, rng);
                black_box(mcts.search_state(&game, &game.initial_state()).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_gomoku(c: &mut Criterion) {
    let mut group = c.benchmark_group("gomoku_9x9");
    let game = Gomoku::default();
    let sims = 400;
    group.throughput(Throughput::Elements(sims as u64));

    group.bench_function("fresh_root", |b| {
        b.iter(|| {
            let mut mcts = Mcts::new(
                MctsConfig::with_simulations(sims),
                UniformEvaluator,
                ChaCha8Rng::seed_from_u64(7),
            );
            black_box(mcts.search_state(&game, &game.initial_state()).unwrap())
        });
    });

    group.bench_function("reused_root", |b| {
        let mut mcts = Mcts::new(
            MctsConfig::with_simulations(sims),
            UniformEvaluator,
            ChaCha8Rng::seed_from_u64(7),
        );
        let mut root = Node::root(&game, game.initial_state());
        let first = mcts.search(&game, &mut root).unwrap();
        let reused = root.into_child(&game, first.best_action).unwrap();

        b.iter(|| {
            let mut root = reused.clone();
            black_box(mcts.search(&game, &mut root).unwrap())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tictactoe_simulations, bench_gomoku);
criterion_main!(benches);
