//! Budget violations and configuration errors.

use std::time::Duration;
use thiserror::Error;

/// Errors produced by a budgeted run or by an invalid budget configuration
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BudgetError {
    #[error("Step budget ({max}) exhausted before completion")]
    StepsExhausted { max: usize },

    #[error("Timeout ({timeout:?}) exceeded (elapsed: {elapsed:?})")]
    TimedOut {
        timeout: Duration,
        elapsed: Duration,
    },

    #[error("Cancelled after {steps} steps")]
    Cancelled { steps: usize },

    #[error("Step budget must allow at least one step")]
    ZeroSteps,

    #[error("Timeout must be greater than zero")]
    ZeroTimeout,
}
