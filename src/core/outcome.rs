//! The two-way result of a single trampoline step.

use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;

/// Outcome of one invocation of a step function.
///
/// `B` is the final result type, `A` the state threaded between steps.
/// Neither parameter carries any trait bound; the derived impls only apply
/// when both sides support them.
///
/// # Example
///
/// ```rust
/// use trampoline::core::StepOutcome;
///
/// let next: StepOutcome<&str, u32> = StepOutcome::Continue(4);
/// let done: StepOutcome<&str, u32> = StepOutcome::Done("finished");
///
/// assert!(next.is_continue());
/// assert_eq!(done.done_value(), Some("finished"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepOutcome<B, A> {
    /// Keep going; the payload becomes the state for the next invocation
    Continue(A),
    /// Stop; the payload is the final result
    Done(B),
}

impl<B, A> StepOutcome<B, A> {
    /// Returns `true` if the outcome is `Continue`.
    #[inline]
    pub const fn is_continue(&self) -> bool {
        matches!(self, StepOutcome::Continue(_))
    }

    /// Returns `true` if the outcome is `Done`.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, StepOutcome::Done(_))
    }

    /// Converts into the next state, discarding a final result.
    ///
    /// ```rust
    /// use trampoline::core::StepOutcome;
    ///
    /// let x: StepOutcome<&str, u32> = StepOutcome::Continue(3);
    /// assert_eq!(x.continue_value(), Some(3));
    ///
    /// let y: StepOutcome<&str, u32> = StepOutcome::Done("end");
    /// assert_eq!(y.continue_value(), None);
    /// ```
    #[inline]
    pub fn continue_value(self) -> Option<A> {
        match self {
            StepOutcome::Continue(a) => Some(a),
            StepOutcome::Done(_) => None,
        }
    }

    /// Converts into the final result, discarding a pending state.
    #[inline]
    pub fn done_value(self) -> Option<B> {
        match self {
            StepOutcome::Continue(_) => None,
            StepOutcome::Done(b) => Some(b),
        }
    }

    /// Maps the pending state, leaving a final result untouched.
    ///
    /// ```rust
    /// use trampoline::core::StepOutcome;
    ///
    /// let x: StepOutcome<&str, u32> = StepOutcome::Continue(3);
    /// assert_eq!(x.map_continue(|n| n * 2), StepOutcome::Continue(6));
    /// ```
    #[inline]
    pub fn map_continue<A2, F>(self, f: F) -> StepOutcome<B, A2>
    where
        F: FnOnce(A) -> A2,
    {
        match self {
            StepOutcome::Continue(a) => StepOutcome::Continue(f(a)),
            StepOutcome::Done(b) => StepOutcome::Done(b),
        }
    }

    /// Maps the final result, leaving a pending state untouched.
    #[inline]
    pub fn map_done<B2, F>(self, f: F) -> StepOutcome<B2, A>
    where
        F: FnOnce(B) -> B2,
    {
        match self {
            StepOutcome::Continue(a) => StepOutcome::Continue(a),
            StepOutcome::Done(b) => StepOutcome::Done(f(b)),
        }
    }

    /// Maps both sides at once.
    #[inline]
    pub fn map<B2, A2, FD, FC>(self, fd: FD, fc: FC) -> StepOutcome<B2, A2>
    where
        FD: FnOnce(B) -> B2,
        FC: FnOnce(A) -> A2,
    {
        match self {
            StepOutcome::Continue(a) => StepOutcome::Continue(fc(a)),
            StepOutcome::Done(b) => StepOutcome::Done(fd(b)),
        }
    }

    /// Converts into a [`ControlFlow`], where `Done` becomes `Break`.
    #[inline]
    pub fn into_control_flow(self) -> ControlFlow<B, A> {
        match self {
            StepOutcome::Continue(a) => ControlFlow::Continue(a),
            StepOutcome::Done(b) => ControlFlow::Break(b),
        }
    }

    /// Builds an outcome from a [`ControlFlow`], where `Break` becomes `Done`.
    ///
    /// ```rust
    /// use std::ops::ControlFlow;
    /// use trampoline::core::StepOutcome;
    ///
    /// let flow: ControlFlow<&str, u32> = ControlFlow::Break("stop");
    /// assert_eq!(StepOutcome::from_control_flow(flow), StepOutcome::Done("stop"));
    /// ```
    #[inline]
    pub fn from_control_flow(flow: ControlFlow<B, A>) -> Self {
        match flow {
            ControlFlow::Continue(a) => StepOutcome::Continue(a),
            ControlFlow::Break(b) => StepOutcome::Done(b),
        }
    }
}

impl<B, A> From<ControlFlow<B, A>> for StepOutcome<B, A> {
    fn from(flow: ControlFlow<B, A>) -> Self {
        Self::from_control_flow(flow)
    }
}

impl<B, A> From<StepOutcome<B, A>> for ControlFlow<B, A> {
    fn from(outcome: StepOutcome<B, A>) -> Self {
        outcome.into_control_flow()
    }
}
