//! Effectful step functions using Stillwater 0.11.0.
//!
//! The pure runners in [`crate::core`] take a step that returns its outcome
//! directly. Here the step returns an `Effect` instead, so a step can read
//! an environment, perform I/O, or fail, while the loop keeps the same
//! constant-stack shape.
//!
//! # Key Concepts
//!
//! - **Step effects**: build a fresh effect per step, producing a `StepOutcome`
//! - **Environment**: every effect runs against the same borrowed `Env`
//! - **Failure**: the first failed effect ends the run with its error

mod runner;

pub use runner::run_effect;
