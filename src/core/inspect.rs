//! Opt-in wrappers for observing a step function.
//!
//! The runners never log or count on their own. Wrap the step instead.

use super::outcome::StepOutcome;
use tracing::trace;

/// Step function wrapper that counts how often it has been invoked.
///
/// # Example
///
/// ```rust
/// use trampoline::core::{run, Counted, StepOutcome};
///
/// let mut counted = Counted::new(|n: u32| {
///     if n == 0 {
///         StepOutcome::Done("done")
///     } else {
///         StepOutcome::Continue(n - 1)
///     }
/// });
///
/// assert_eq!(run(|n| counted.call(n), 5), "done");
/// assert_eq!(counted.count(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Counted<F> {
    step: F,
    count: usize,
}

impl<F> Counted<F> {
    pub fn new(step: F) -> Self {
        Self { step, count: 0 }
    }

    /// Invoke the wrapped step and bump the counter
    pub fn call<A, B>(&mut self, state: A) -> StepOutcome<B, A>
    where
        F: FnMut(A) -> StepOutcome<B, A>,
    {
        self.count += 1;
        (self.step)(state)
    }

    /// Number of invocations so far
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Drop the counter and hand back the wrapped step
    pub fn into_inner(self) -> F {
        self.step
    }
}

/// Wrap `step` so every invocation emits a `trace` event.
///
/// Each event carries `label`, the 1-based step index, and whether the
/// outcome was `Done`.
pub fn traced<A, B, F>(label: &'static str, mut step: F) -> impl FnMut(A) -> StepOutcome<B, A>
where
    F: FnMut(A) -> StepOutcome<B, A>,
{
    let mut index: u64 = 0;
    move |state| {
        index += 1;
        let outcome = step(state);
        trace!(
            trampoline = label,
            step = index,
            done = outcome.is_done(),
            "step evaluated"
        );
        outcome
    }
}
