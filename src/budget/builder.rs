//! Builder API for step budgets.

use crate::budget::error::BudgetError;
use crate::budget::Budget;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for [`Budget`].
///
/// `build` validates the whole configuration at once and reports every
/// problem, not just the first one.
#[derive(Debug, Default)]
pub struct BudgetBuilder {
    max_steps: Option<usize>,
    timeout: Option<Duration>,
    cancel: Option<Arc<AtomicBool>>,
}

impl BudgetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow at most `n` invocations of the wrapped step
    pub fn max_steps(mut self, n: usize) -> Self {
        self.max_steps = Some(n);
        self
    }

    /// Give up once the run has taken longer than `duration`
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Stop as soon as `flag` is observed set
    pub fn cancel_on(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn build(self) -> Result<Budget, NonEmptyVec<BudgetError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BudgetError>>> = Vec::new();

        if self.max_steps == Some(0) {
            checks.push(Validation::fail(BudgetError::ZeroSteps));
        }

        if self.timeout == Some(Duration::ZERO) {
            checks.push(Validation::fail(BudgetError::ZeroTimeout));
        }

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(Budget {
                max_steps: self.max_steps,
                timeout: self.timeout,
                cancel: self.cancel,
            }),
            Validation::Failure(errors) => Err(errors),
        }
    }
}
