//! Collatz Descent with a Budget and Checkpoints
//!
//! Runs the Collatz sequence from 27 in chunks, saving a checkpoint after
//! each chunk, then shows a step budget cutting a long run short.
//!
//! Run with: cargo run --example collatz

use trampoline::budget::Budget;
use trampoline::checkpoint::{resume, Checkpoint};
use trampoline::core::{run, Counted, StepOutcome};

fn collatz(n: u64) -> StepOutcome<u64, u64> {
    if n == 1 {
        StepOutcome::Done(1)
    } else if n % 2 == 0 {
        StepOutcome::Continue(n / 2)
    } else {
        StepOutcome::Continue(3 * n + 1)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Collatz Example ===\n");

    let mut counted = Counted::new(collatz);
    let result = run(|n| counted.call(n), 27);
    println!("27 reaches {result} after {} invocations", counted.count());

    println!("\n--- Chunked with checkpoints ---");
    let mut checkpoint = Checkpoint::new(27u64);
    let result = loop {
        match resume(collatz, checkpoint, 30) {
            StepOutcome::Continue(next) => {
                match next.to_json() {
                    Ok(json) => println!("saved: {json}"),
                    Err(e) => println!("could not save checkpoint: {e}"),
                }
                checkpoint = next;
            }
            StepOutcome::Done(value) => break value,
        }
    };
    println!("resumed run reaches {result}");

    println!("\n--- Budgeted ---");
    match Budget::builder().max_steps(50).build() {
        Ok(budget) => match budget.run(collatz, 27) {
            Ok(value) => println!("finished with {value}"),
            Err(e) => println!("stopped: {e}"),
        },
        Err(errors) => println!("invalid budget: {} problem(s)", errors.len()),
    }

    println!("\n=== Example Complete ===");
}
