//! Movement domain: error type for controller construction and ticking.

use crate::movement::MotionState;

/// Fatal movement conditions. None of these are retried.
#[derive(Debug, Clone, PartialEq)]
pub enum MovementError {
    /// The body has no axis-aligned box to derive half-extents from.
    MissingBodyShape,
    /// No input source is registered with the host.
    MissingInputSource,
    InvalidTuning {
        field: &'static str,
        reason: &'static str,
    },
    /// A state with no defined behavior was entered.
    UnimplementedState(MotionState),
    /// Entry actions kept re-entering without settling.
    ReentryLimit { from: MotionState, limit: usize },
}

impl std::fmt::Display for MovementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingBodyShape => {
                write!(f, "Movement body has no box shape to read half-extents from")
            }
            Self::MissingInputSource => write!(f, "Movement controller has no input source"),
            Self::InvalidTuning { field, reason } => {
                write!(f, "Invalid movement tuning '{}': {}", field, reason)
            }
            Self::UnimplementedState(state) => {
                write!(f, "State {:?} is not implemented and cannot be entered", state)
            }
            Self::ReentryLimit { from, limit } => write!(
                f,
                "State entry starting at {:?} did not settle after {} re-entries",
                from, limit
            ),
        }
    }
}

impl std::error::Error for MovementError {}
