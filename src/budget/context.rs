//! Progress of a single budgeted run.

use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

/// Progress a budget is checked against before each step
#[derive(Clone, Debug)]
pub struct RunContext {
    /// Invocations of the wrapped step so far
    pub steps: usize,
    /// Wall-clock start, for display only
    pub started_at: DateTime<Utc>,
    /// Monotonic start; timeouts are measured from here
    pub started: Instant,
}

impl RunContext {
    pub fn start() -> Self {
        Self {
            steps: 0,
            started_at: Utc::now(),
            started: Instant::now(),
        }
    }

    /// Time since the run started, unaffected by wall-clock jumps
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
