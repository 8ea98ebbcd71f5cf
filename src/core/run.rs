//! The trampoline loop.
//!
//! Every runner here drives a step function with an explicit `loop`, so the
//! stack depth of the runner itself never depends on how many steps execute.
//!
//! # Caller obligation
//!
//! The constant-stack guarantee only covers the runner. A step function that
//! recurses, or otherwise grows the stack in proportion to how often it is
//! invoked, can still overflow. This cannot be checked at runtime.

use super::outcome::StepOutcome;

/// Drive `step` from `initial` until it returns [`StepOutcome::Done`].
///
/// Returns the value carried by the first `Done`. Invocations are strictly
/// sequential: each state is moved into `step` and the next invocation starts
/// only after the previous outcome has been inspected.
///
/// A panic raised by `step` unwinds straight through `run`; nothing is caught
/// or retried. A step that never returns `Done` loops forever without growing
/// the stack.
///
/// # Example
///
/// ```rust
/// use trampoline::core::{run, StepOutcome};
///
/// let sum = run(
///     |(n, acc): (u64, u64)| {
///         if n == 0 {
///             StepOutcome::Done(acc)
///         } else {
///             StepOutcome::Continue((n - 1, acc + n))
///         }
///     },
///     (1_000_000, 0),
/// );
///
/// assert_eq!(sum, 500_000_500_000);
/// ```
pub fn run<A, B, F>(mut step: F, initial: A) -> B
where
    F: FnMut(A) -> StepOutcome<B, A>,
{
    let mut current = initial;
    loop {
        match step(current) {
            StepOutcome::Continue(next) => current = next,
            StepOutcome::Done(value) => return value,
        }
    }
}

/// Drive a fallible `step` until it returns `Done` or fails.
///
/// The first `Err` produced by `step` stops the loop and is returned as is.
///
/// # Example
///
/// ```rust
/// use trampoline::core::{try_run, StepOutcome};
///
/// let result: Result<u32, String> = try_run(
///     |n: u32| {
///         if n > 3 {
///             Err(format!("overshot at {n}"))
///         } else {
///             Ok(StepOutcome::Continue(n + 1))
///         }
///     },
///     0,
/// );
///
/// assert_eq!(result, Err("overshot at 4".to_string()));
/// ```
pub fn try_run<A, B, E, F>(mut step: F, initial: A) -> Result<B, E>
where
    F: FnMut(A) -> Result<StepOutcome<B, A>, E>,
{
    let mut current = initial;
    loop {
        match step(current)? {
            StepOutcome::Continue(next) => current = next,
            StepOutcome::Done(value) => return Ok(value),
        }
    }
}

/// Invoke `step` at most `max_steps` times.
///
/// Returns `Done` if the computation finished within the limit. Otherwise
/// returns `Continue` with the state the next invocation would have received,
/// so the caller can pick up exactly where this call stopped.
///
/// ```rust
/// use trampoline::core::{run, run_for, StepOutcome};
///
/// let countdown = |n: u32| {
///     if n == 0 {
///         StepOutcome::Done("liftoff")
///     } else {
///         StepOutcome::Continue(n - 1)
///     }
/// };
///
/// let paused = run_for(countdown, 10, 4);
/// assert_eq!(paused, StepOutcome::Continue(6));
///
/// let state = paused.continue_value().unwrap();
/// assert_eq!(run(countdown, state), "liftoff");
/// ```
pub fn run_for<A, B, F>(mut step: F, initial: A, max_steps: usize) -> StepOutcome<B, A>
where
    F: FnMut(A) -> StepOutcome<B, A>,
{
    let mut current = initial;
    for _ in 0..max_steps {
        match step(current) {
            StepOutcome::Continue(next) => current = next,
            done @ StepOutcome::Done(_) => return done,
        }
    }
    StepOutcome::Continue(current)
}
