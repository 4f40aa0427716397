//! Tic-tac-toe backward-induction solver binary.
//!
//! Solves the full game and writes one policy file per player.
//!
//! Usage:
//!   cargo run --release --bin solve_ttt -- [OPTIONS]
//!
//! Options:
//!   --out-x <FILE>       x policy output (default: policy_x.json)
//!   --out-o <FILE>       o policy output (default: policy_o.json)
//!   --show <N>           Print the first N x strategy entries after solving
//!   --histories <BOARD>  Enumerate move orders producing BOARD and exit
//!                        (BOARD is a 9-char string over x/o/0, e.g. x0ox0o000)

use std::env;
use std::process;

use retrograde_solver::games::tictactoe::output::PolicyTable;
use retrograde_solver::games::tictactoe::{matching_histories, TicTacToe};
use retrograde_solver::minimax::{MinimaxSolver, Player};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    let mut out_x = "policy_x.json".to_string();
    let mut out_o = "policy_o.json".to_string();
    let mut show = 0usize;
    let mut histories: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out-x" => {
                i += 1;
                if i < args.len() {
                    out_x = args[i].clone();
                }
            }
            "--out-o" => {
                i += 1;
                if i < args.len() {
                    out_o = args[i].clone();
                }
            }
            "--show" => {
                i += 1;
                if i < args.len() {
                    show = args[i].parse().unwrap_or(0);
                }
            }
            "--histories" => {
                i += 1;
                if i < args.len() {
                    histories = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                process::exit(2);
            }
        }
        i += 1;
    }

    if let Some(board) = histories {
        let keys = matching_histories(&board);
        println!("{} move order(s) produce board {}", keys.len(), board);
        for key in keys {
            println!("  {}", key);
        }
        return;
    }

    log::info!("solve started");

    let mut solver = MinimaxSolver::new(TicTacToe::new());
    let value = solver.solve();
    let stats = solver.stats();

    log::info!(
        "solve finished: root value {} | {} positions ({} terminal) | {} cache hits | {:.3}s",
        value,
        stats.positions,
        stats.terminal_positions,
        stats.cache_hits,
        stats.elapsed_seconds
    );

    for (player, path) in [(Player::Max, &out_x), (Player::Min, &out_o)] {
        let table = PolicyTable::from_solver(&solver, player);
        match table.save_json(path) {
            Ok(()) => log::info!("wrote {} entries to {}", table.len(), path),
            Err(e) => {
                log::error!("failed to write {}: {}", path, e);
                process::exit(1);
            }
        }
    }

    if show > 0 {
        println!();
        println!("=== Sample x strategies ===");
        let table = PolicyTable::from_solver(&solver, Player::Max);
        for (key, _) in table.iter().take(show) {
            let action = table.chosen(key).unwrap_or(usize::MAX);
            let label = if key.is_empty() { "(root)" } else { key.as_str() };
            println!("  history {:<10} -> play {}", label, action);
        }
    }

    log::info!("done");
}

fn print_help() {
    println!("Tic-tac-toe backward-induction solver");
    println!();
    println!("Usage: solve_ttt [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --out-x <FILE>       x policy output (default: policy_x.json)");
    println!("  --out-o <FILE>       o policy output (default: policy_o.json)");
    println!("  --show <N>           Print the first N x strategy entries");
    println!("  --histories <BOARD>  Enumerate move orders producing BOARD and exit");
    println!("  -h, --help           Show this help");
    println!();
    println!("Examples:");
    println!("  # Solve and write policies next to the working directory");
    println!("  solve_ttt");
    println!();
    println!("  # Which move orders reach this board?");
    println!("  solve_ttt --histories x0ox0o000");
}
