//! Parity via Mutual Recursion
//!
//! `is_even` and `is_odd` call each other. Written as plain functions they
//! overflow the stack for large inputs; as a trampoline they run in constant
//! stack.
//!
//! Run with: cargo run --example parity

use trampoline::core::{run, traced, StepOutcome};

#[derive(Clone, Copy, Debug)]
enum Parity {
    Even(u64),
    Odd(u64),
}

fn step(state: Parity) -> StepOutcome<bool, Parity> {
    match state {
        Parity::Even(0) => StepOutcome::Done(true),
        Parity::Odd(0) => StepOutcome::Done(false),
        Parity::Even(n) => StepOutcome::Continue(Parity::Odd(n - 1)),
        Parity::Odd(n) => StepOutcome::Continue(Parity::Even(n - 1)),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Parity Example ===\n");

    // Small input with every step traced
    let small = run(traced("parity", step), Parity::Even(3));
    println!("is_even(3) = {small}");

    for n in [10u64, 1_000_000, 10_000_001] {
        println!("is_even({n}) = {}", run(step, Parity::Even(n)));
    }

    println!("\n=== Example Complete ===");
}
