//! Trampoline: stack-safe iteration over step functions
//!
//! Deep recursion overflows the call stack, even when every call is in tail
//! position and even more so for mutual recursion. A trampoline turns such
//! a computation into a step function that says either "continue with this
//! state" or "done with this value", and drives it from a plain loop whose
//! stack depth never depends on the number of steps.
//!
//! # Core Concepts
//!
//! - **StepOutcome**: `Continue(next_state)` or `Done(result)`
//! - **Runners**: `run`, `try_run` and `run_for` loop over a step function
//! - **Budgets**: opt-in step, time and cancellation limits via a wrapped step
//! - **Checkpoints**: serializable snapshots of a paused run
//! - **Effects**: steps that return Stillwater effects
//!
//! A step function must itself be bounded-stack. The runners cannot check
//! this; a step that recurses still overflows.
//!
//! # Example
//!
//! ```rust
//! use trampoline::{run, StepOutcome};
//!
//! // Mutual recursion between "even" and "odd", one hop per step
//! #[derive(Clone, Copy)]
//! enum Parity {
//!     Even(u64),
//!     Odd(u64),
//! }
//!
//! fn step(state: Parity) -> StepOutcome<bool, Parity> {
//!     match state {
//!         Parity::Even(0) => StepOutcome::Done(true),
//!         Parity::Odd(0) => StepOutcome::Done(false),
//!         Parity::Even(n) => StepOutcome::Continue(Parity::Odd(n - 1)),
//!         Parity::Odd(n) => StepOutcome::Continue(Parity::Even(n - 1)),
//!     }
//! }
//!
//! assert!(run(step, Parity::Even(1_000_000)));
//! assert!(!run(step, Parity::Even(1_000_001)));
//! ```

pub mod budget;
pub mod checkpoint;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use budget::{Budget, BudgetBuilder, BudgetError};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use crate::core::{run, run_for, try_run, StepOutcome};
pub use effects::run_effect;
