use crate::timer::{
    error::TimerError,
    tracker::{TimerId, TrackerCommands},
};

/// Invoked synchronously from within `tick` each time the timer completes a
/// span. The [`TrackerCommands`] sink lets the callback stage timer
/// additions/removals without touching the live collection mid-iteration.
pub type CompletionCallback = Box<dyn FnMut(&Timer, &mut TrackerCommands)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    NotStarted,
    Running,
    Paused,
    Completed,
}

/// A countdown/countup tick primitive.
///
/// Progress direction is fixed at construction from the sign of
/// `target - initial`. Repeating timers wrap `current` by the full span on
/// completion so overshoot is carried over exactly; non-repeating timers clamp
/// to `target` and enter the terminal `Completed` state.
pub struct Timer {
    initial: f32,
    target: f32,
    repeating: bool,
    current: f32,
    state: TimerState,
    decrement: bool,
    pub(crate) id: Option<TimerId>,
    pub(crate) tracked: bool,
    on_complete: Option<CompletionCallback>,
}

impl Timer {
    fn new(
        initial: f32,
        target: f32,
        repeating: bool,
        on_complete: CompletionCallback,
    ) -> Result<Self, TimerError> {
        if !initial.is_finite() || !target.is_finite() {
            return Err(TimerError::InvalidBound { initial, target });
        }
        if initial == target {
            return Err(TimerError::EmptySpan { value: initial });
        }

        Ok(Self {
            initial,
            target,
            repeating,
            current: initial,
            state: TimerState::NotStarted,
            decrement: initial > target,
            id: None,
            tracked: false,
            on_complete: Some(on_complete),
        })
    }

    pub fn create_countup(
        on_complete: CompletionCallback,
        target: f32,
        repeating: bool,
    ) -> Result<Self, TimerError> {
        Self::new(0.0, target, repeating, on_complete)
    }

    pub fn create_countup_from(
        on_complete: CompletionCallback,
        initial: f32,
        target: f32,
        repeating: bool,
    ) -> Result<Self, TimerError> {
        Self::new(initial, target, repeating, on_complete)
    }

    pub fn create_countdown(
        on_complete: CompletionCallback,
        initial: f32,
        repeating: bool,
    ) -> Result<Self, TimerError> {
        Self::new(initial, 0.0, repeating, on_complete)
    }

    pub fn create_countdown_from(
        on_complete: CompletionCallback,
        initial: f32,
        target: f32,
        repeating: bool,
    ) -> Result<Self, TimerError> {
        Self::new(initial, target, repeating, on_complete)
    }

    /// Tracker-assigned identity, present once the timer has been registered.
    pub fn id(&self) -> Option<TimerId> {
        self.id
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn initial(&self) -> f32 {
        self.initial
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_repeating(&self) -> bool {
        self.repeating
    }

    /// Resets `current` to `initial` and begins running.
    pub fn start(&mut self) -> Result<(), TimerError> {
        if !self.repeating && self.state == TimerState::Completed {
            return Err(TimerError::Finished {
                operation: "started",
            });
        }
        self.state = TimerState::Running;
        self.current = self.initial;
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), TimerError> {
        if self.state != TimerState::Running && self.state != TimerState::Paused {
            return Err(TimerError::NotRunning { state: self.state });
        }
        self.state = TimerState::Paused;
        Ok(())
    }

    /// Resets the timer back to the `NotStarted` state at `initial`.
    pub fn stop(&mut self) -> Result<(), TimerError> {
        if !self.repeating && self.state == TimerState::Completed {
            return Err(TimerError::Finished {
                operation: "stopped",
            });
        }
        self.state = TimerState::NotStarted;
        self.current = self.initial;
        Ok(())
    }

    fn target_reached(&self) -> bool {
        // Equals case is separated since it will be encountered more often
        self.current == self.target
            || (!self.decrement && self.current > self.target)
            || (self.decrement && self.current < self.target)
    }

    pub(crate) fn tick(&mut self, dt: f32, commands: &mut TrackerCommands) {
        if self.state != TimerState::Running {
            return;
        }

        self.current = if self.decrement {
            self.current - dt
        } else {
            self.current + dt
        };

        if self.repeating {
            // A dt spanning multiple periods fires once per period, with the
            // excess carried into the next iteration
            while self.target_reached() {
                self.current -= self.target - self.initial;
                self.fire(commands);
            }
        } else if self.target_reached() {
            self.current = self.target;
            self.state = TimerState::Completed;
            self.fire(commands);
        }
    }

    fn fire(&mut self, commands: &mut TrackerCommands) {
        if let Some(mut callback) = self.on_complete.take() {
            callback(self, commands);
            self.on_complete = Some(callback);
        }
    }
}

impl std::fmt::Debug for Timer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timer")
            .field("initial", &self.initial)
            .field("target", &self.target)
            .field("repeating", &self.repeating)
            .field("current", &self.current)
            .field("state", &self.state)
            .field("id", &self.id)
            .finish()
    }
}
