//! The trampoline core.
//!
//! This module contains the pure loop and its vocabulary:
//! - `StepOutcome`: the two-way result of one step
//! - `run`, `try_run`, `run_for`: constant-stack runners
//! - `Counted`, `traced`: opt-in step wrappers for observation
//!
//! Nothing in here logs, allocates persistent state or performs I/O unless a
//! wrapper asks for it.

mod inspect;
mod outcome;
mod run;

pub use inspect::{traced, Counted};
pub use outcome::StepOutcome;
pub use run::{run, run_for, try_run};
