use linesum::prelude::*;
use std::sync::Arc;
use tokio::runtime::Builder;

/// Multi-threaded hotpath profiling
///
/// Profiles parsing of one large in-memory source across a tokio worker pool.
/// Shows the split between tokenizing, integer parsing and dispatch overhead.
///
/// Run with: cargo run --release --bin hotpath_multi_threaded --features profiling
#[hotpath::main]
fn main() {
    println!("=== Multi-Threaded Hotpath Profile ===");
    println!("Workload: 200K lines x 25 tokens = 5M integers");
    println!("Configuration: 8 runtime threads, 8 parser workers");
    println!();

    let runtime = Builder::new_multi_thread()
        .worker_threads(8)
        .enable_all()
        .build()
        .unwrap();

    let lines = build_lines(200_000, 25);

    println!("Starting profiled execution...");
    println!();

    let total = runtime.block_on(run_parser(lines, 8));

    println!();
    println!("Total: {total}");
    println!("Profiling complete. Results above show function-level breakdown including dispatch overhead.");
}

#[hotpath::measure]
fn build_lines(num_lines: usize, tokens_per_line: usize) -> Vec<String> {
    (0..num_lines)
        .map(|line| {
            (0..tokens_per_line)
                .map(|t| {
                    let value = (line + t) % 1_000;
                    if t % 2 == 0 {
                        value.to_string()
                    } else {
                        format!("\u{2212}{value}")
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[hotpath::measure]
async fn run_parser(lines: Vec<String>, workers: usize) -> i64 {
    let sum = Arc::new(ThreadSafeSum::new());
    let state = Arc::new(CancellationState::new());

    let mut parser = Parser::from_lines(lines, Arc::clone(&sum), Arc::clone(&state))
        .with_workers(workers);
    parser.run().await;

    if let Some(failure) = state.failure() {
        println!("Run failed: {failure}");
    }

    sum.value()
}
