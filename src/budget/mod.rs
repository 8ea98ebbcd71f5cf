//! Step budgets layered over a step function.
//!
//! The core runners have no timeout and no cancellation. A [`Budget`] adds
//! them by wrapping the step: before each invocation the wrapper checks the
//! cancellation flag, the step count and the elapsed time, and finishes the
//! run with an error instead of invoking the step when a limit is hit.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use trampoline::budget::{BudgetBuilder, BudgetError};
//! use trampoline::core::StepOutcome;
//!
//! let budget = BudgetBuilder::new()
//!     .max_steps(10)
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! // Never finishes on its own
//! let result: Result<(), _> = budget.run(|n: u64| StepOutcome::Continue(n + 1), 0);
//!
//! assert_eq!(result, Err(BudgetError::StepsExhausted { max: 10 }));
//! ```

pub mod builder;
pub mod context;
pub mod error;

pub use builder::BudgetBuilder;
pub use context::RunContext;
pub use error::BudgetError;

use crate::core::{run, StepOutcome};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Limits applied to a single run.
///
/// A budget is reusable: every call to [`Budget::guard`] or [`Budget::run`]
/// starts a fresh count and clock. The cancellation flag is shared.
#[derive(Clone, Debug, Default)]
pub struct Budget {
    pub(crate) max_steps: Option<usize>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) cancel: Option<Arc<AtomicBool>>,
}

impl Budget {
    /// A budget with no limits; guarded steps behave like the bare step
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn builder() -> BudgetBuilder {
        BudgetBuilder::new()
    }

    pub fn max_steps(&self) -> Option<usize> {
        self.max_steps
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn is_cancellable(&self) -> bool {
        self.cancel.is_some()
    }

    /// Check whether one more step may run given `context`.
    ///
    /// Cancellation is checked first, then the step count, then the timeout.
    pub fn check(&self, context: &RunContext) -> Result<(), BudgetError> {
        if let Some(flag) = &self.cancel {
            if flag.load(Ordering::Acquire) {
                return Err(BudgetError::Cancelled {
                    steps: context.steps,
                });
            }
        }

        if let Some(max) = self.max_steps {
            if context.steps >= max {
                return Err(BudgetError::StepsExhausted { max });
            }
        }

        if let Some(timeout) = self.timeout {
            let elapsed = context.elapsed();
            if elapsed > timeout {
                return Err(BudgetError::TimedOut { timeout, elapsed });
            }
        }

        Ok(())
    }

    /// Wrap `step` so that it finishes with `Err` once the budget is spent.
    ///
    /// The clock starts on the first invocation of the returned step. A
    /// `Done(value)` from `step` becomes `Done(Ok(value))`.
    pub fn guard<A, B, F>(
        &self,
        mut step: F,
    ) -> impl FnMut(A) -> StepOutcome<Result<B, BudgetError>, A>
    where
        F: FnMut(A) -> StepOutcome<B, A>,
    {
        let budget = self.clone();
        let mut context: Option<RunContext> = None;
        move |state| {
            let ctx = context.get_or_insert_with(RunContext::start);
            if let Err(violation) = budget.check(ctx) {
                debug!(steps = ctx.steps, error = %violation, "step budget spent");
                return StepOutcome::Done(Err(violation));
            }
            ctx.steps += 1;
            step(state).map_done(Ok)
        }
    }

    /// Run `step` from `initial` under this budget
    pub fn run<A, B, F>(&self, step: F, initial: A) -> Result<B, BudgetError>
    where
        F: FnMut(A) -> StepOutcome<B, A>,
    {
        run(self.guard(step), initial)
    }
}
