//! Checkpoint and resume for long trampoline runs.
//!
//! A paused run is nothing more than its current state, so a checkpoint
//! stores that state with some bookkeeping. Checkpoints serialize to JSON or
//! bincode, letting a computation survive a process restart.
//!
//! # Example
//!
//! ```rust
//! use trampoline::checkpoint::{resume, Checkpoint};
//! use trampoline::core::StepOutcome;
//!
//! let countdown = |n: u32| {
//!     if n == 0 {
//!         StepOutcome::Done("done")
//!     } else {
//!         StepOutcome::Continue(n - 1)
//!     }
//! };
//!
//! let paused = match resume(countdown, Checkpoint::new(100u32), 40) {
//!     StepOutcome::Continue(checkpoint) => checkpoint,
//!     StepOutcome::Done(_) => unreachable!(),
//! };
//! assert_eq!(paused.state, 60);
//!
//! let json = paused.to_json().unwrap();
//! let restored: Checkpoint<u32> = Checkpoint::from_json(&json).unwrap();
//! assert_eq!(resume(countdown, restored, 100), StepOutcome::Done("done"));
//! ```

use crate::core::{run_for, StepOutcome};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a paused run.
/// Does NOT include the step function (not serializable).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint<A> {
    /// Checkpoint format version
    pub version: u32,

    /// Identifier shared by every checkpoint of the same run
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// State the next step invocation will receive
    pub state: A,

    /// Step invocations performed before this checkpoint
    pub steps_taken: u64,
}

impl<A> Checkpoint<A> {
    /// Start a new run at `state`
    pub fn new(state: A) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state,
            steps_taken: 0,
        }
    }

    fn validate(self) -> Result<Self, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(self)
    }
}

impl<A: Serialize> Checkpoint<A> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Compact binary encoding via bincode
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }
}

impl<A: DeserializeOwned> Checkpoint<A> {
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()
    }
}

/// Continue the run captured by `checkpoint` for at most `max_steps` steps.
///
/// Returns `Done` when the run finishes, otherwise a new checkpoint for the
/// same run with `steps_taken` advanced by `max_steps`, saturating at
/// `u64::MAX`.
pub fn resume<A, B, F>(
    step: F,
    checkpoint: Checkpoint<A>,
    max_steps: usize,
) -> StepOutcome<B, Checkpoint<A>>
where
    F: FnMut(A) -> StepOutcome<B, A>,
{
    let Checkpoint {
        id,
        state,
        steps_taken,
        ..
    } = checkpoint;

    run_for(step, state, max_steps).map_continue(|next| Checkpoint {
        version: CHECKPOINT_VERSION,
        id,
        timestamp: Utc::now(),
        state: next,
        steps_taken: steps_taken.saturating_add(max_steps as u64),
    })
}
