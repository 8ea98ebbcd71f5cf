//! Property-based tests for the trampoline runners.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use std::panic::{self, AssertUnwindSafe};
use trampoline::budget::{Budget, BudgetError};
use trampoline::core::{run, run_for, try_run, Counted, StepOutcome};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Parity {
    Even(u64),
    Odd(u64),
}

fn parity_step(state: Parity) -> StepOutcome<bool, Parity> {
    match state {
        Parity::Even(0) => StepOutcome::Done(true),
        Parity::Odd(0) => StepOutcome::Done(false),
        Parity::Even(n) => StepOutcome::Continue(Parity::Odd(n - 1)),
        Parity::Odd(n) => StepOutcome::Continue(Parity::Even(n - 1)),
    }
}

// Plain mutual recursion, only safe for small inputs
fn is_even(n: u64) -> bool {
    if n == 0 {
        true
    } else {
        is_odd(n - 1)
    }
}

fn is_odd(n: u64) -> bool {
    if n == 0 {
        false
    } else {
        is_even(n - 1)
    }
}

fn collatz(n: u64) -> StepOutcome<u64, u64> {
    if n == 1 {
        StepOutcome::Done(1)
    } else if n % 2 == 0 {
        StepOutcome::Continue(n / 2)
    } else {
        StepOutcome::Continue(3 * n + 1)
    }
}

/// Continue `k - 1` times, then finish with `k`
fn finish_after(k: u64) -> impl FnMut(u64) -> StepOutcome<u64, u64> {
    move |seen| {
        let seen = seen + 1;
        if seen == k {
            StepOutcome::Done(k)
        } else {
            StepOutcome::Continue(seen)
        }
    }
}

#[test]
fn collatz_from_27_takes_111_transitions() {
    let mut counted = Counted::new(collatz);
    assert_eq!(run(|n| counted.call(n), 27), 1);
    assert_eq!(counted.count(), 112);
}

#[test]
fn parity_of_a_million_does_not_overflow() {
    assert!(run(parity_step, Parity::Even(1_000_000)));
    assert!(!run(parity_step, Parity::Odd(1_000_000)));
}

proptest! {
    #[test]
    fn parity_matches_mutual_recursion(n in 0..100u64) {
        prop_assert_eq!(run(parity_step, Parity::Even(n)), is_even(n));
        prop_assert_eq!(run(parity_step, Parity::Odd(n)), is_odd(n));
    }

    #[test]
    fn done_after_k_steps_invokes_exactly_k_times(k in 1..5_000u64) {
        let mut counted = Counted::new(finish_after(k));
        let result = run(|seen| counted.call(seen), 0);

        prop_assert_eq!(result, k);
        prop_assert_eq!(counted.count() as u64, k);
    }

    #[test]
    fn pure_steps_are_idempotent(start in 1..10_000u64) {
        let mut first = Vec::new();
        let a = run(|n| { first.push(n); collatz(n) }, start);

        let mut second = Vec::new();
        let b = run(|n| { second.push(n); collatz(n) }, start);

        prop_assert_eq!(a, b);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn panic_on_nth_step_escapes_unchanged(n in 1..50u32) {
        let mut calls = 0;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            run(
                |i: u32| -> StepOutcome<(), u32> {
                    calls += 1;
                    if i == n {
                        panic!("fault at step {i}");
                    }
                    StepOutcome::Continue(i + 1)
                },
                1,
            )
        }));

        let payload = outcome.expect_err("run must not return a value");
        let message = payload.downcast_ref::<String>().cloned();
        prop_assert_eq!(message, Some(format!("fault at step {n}")));
        prop_assert_eq!(calls, n);
    }

    #[test]
    fn error_on_nth_step_is_returned(n in 1..50u32) {
        let result: Result<(), u32> = try_run(
            |i: u32| if i == n { Err(i) } else { Ok(StepOutcome::Continue(i + 1)) },
            1,
        );
        prop_assert_eq!(result, Err(n));
    }

    #[test]
    fn split_runs_agree_with_one_run(start in 1..10_000u64, split in 0..200usize) {
        let whole = run(collatz, start);
        let resumed = match run_for(collatz, start, split) {
            StepOutcome::Continue(state) => run(collatz, state),
            StepOutcome::Done(value) => value,
        };
        prop_assert_eq!(whole, resumed);
    }

    #[test]
    fn step_budget_admits_exactly_k(k in 1..500u64, max in 1..1_000usize) {
        let budget = Budget::builder().max_steps(max).build().unwrap();
        let result = budget.run(finish_after(k), 0);

        if max as u64 >= k {
            prop_assert_eq!(result, Ok(k));
        } else {
            prop_assert_eq!(result, Err(BudgetError::StepsExhausted { max }));
        }
    }
}
