use thiserror::Error;

use crate::timer::{timer::TimerState, tracker::TimerId};

/// Errors that can occur constructing or operating a Timer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimerError {
    /// Initial and target values are equal, so the timer has no span to cover
    /// and no direction of progress
    #[error("Initial and target values cannot be equal (both {value})")]
    EmptySpan { value: f32 },

    /// A bound is NaN or infinite
    #[error("Timer bounds must be finite, got initial {initial} / target {target}")]
    InvalidBound { initial: f32, target: f32 },

    /// A non-repeating timer cannot be restarted or stopped once it finished
    #[error("A non-repeating timer cannot be {operation} after it has finished")]
    Finished { operation: &'static str },

    /// Pause is only valid while the timer is running (or already paused)
    #[error("Cannot pause a timer in the {state:?} state")]
    NotRunning { state: TimerState },
}

/// Errors that can occur registering timers with a TimerTracker
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// Timer has already been registered with a tracker
    #[error("Timer {id:?} has already been added to a tracker")]
    AlreadyTracked { id: Option<TimerId> },

    /// The id was never issued by this tracker
    #[error("Timer {id} was not found in this tracker")]
    UnknownTimer { id: TimerId },

    /// The timer is already staged for removal this tick
    #[error("Timer {id} is already being removed")]
    AlreadyRemoving { id: TimerId },
}
