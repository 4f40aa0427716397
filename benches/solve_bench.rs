//! Benchmarks for the backward-induction solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use retrograde_solver::games::tictactoe::output::PolicyTable;
use retrograde_solver::games::tictactoe::TicTacToe;
use retrograde_solver::minimax::{MinimaxSolver, Player};

fn full_solve_benchmark(c: &mut Criterion) {
    c.bench_function("tictactoe_full_solve", |b| {
        b.iter(|| {
            let mut solver = MinimaxSolver::new(TicTacToe::new());
            black_box(solver.solve())
        })
    });
}

fn policy_export_benchmark(c: &mut Criterion) {
    let mut solver = MinimaxSolver::new(TicTacToe::new());
    solver.solve();

    c.bench_function("policy_export", |b| {
        b.iter(|| black_box(PolicyTable::from_solver(&solver, Player::Max)))
    });
}

criterion_group!(benches, full_solve_benchmark, policy_export_benchmark);
criterion_main!(benches);
