use std::collections::{HashMap, VecDeque};

use log::warn;

use crate::{
    collections::{free_list::FreeList, sparse_set::SparseSet},
    timer::{
        error::TrackerError,
        timer::{Timer, TimerState},
    },
};

/// Process-unique timer identity, assigned at registration and never reused.
pub type TimerId = u64;

/// Staging sink for timer additions and removals.
///
/// Mutations always land here first and are applied only after the current
/// tick's iteration completes, so it is safe to schedule or cancel timers from
/// within a completion callback.
pub struct TrackerCommands {
    next_id: TimerId,
    additions: VecDeque<Timer>,
    removals: VecDeque<TimerId>,
}

impl TrackerCommands {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            additions: VecDeque::new(),
            removals: VecDeque::new(),
        }
    }

    /// Assigns a fresh id and stages the timer for insertion at the next
    /// flush point.
    pub fn schedule(&mut self, mut timer: Timer) -> Result<TimerId, TrackerError> {
        if timer.tracked {
            return Err(TrackerError::AlreadyTracked { id: timer.id });
        }
        let id = self.next_id;
        self.next_id += 1;
        timer.id = Some(id);
        timer.tracked = true;
        self.additions.push_back(timer);
        Ok(id)
    }

    /// Stages a removal. Unknown ids are tolerated at flush time (the timer
    /// may have been removed through the checked path in the same tick).
    pub fn cancel(&mut self, id: TimerId) {
        self.removals.push_back(id);
    }

    fn pending_addition_mut(&mut self, id: TimerId) -> Option<&mut Timer> {
        self.additions
            .iter_mut()
            .find(|timer| timer.id == Some(id))
    }
}

impl Default for TrackerCommands {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns a collection of [`Timer`]s and drives them once per tick.
///
/// Within one tick, every timer live at tick-start is ticked first, then all
/// staged additions are applied, then all staged removals — so exactly the
/// callbacks scheduled at tick-start run this tick, and slot indices stay
/// valid across churn.
pub struct TimerTracker {
    timers: FreeList<Timer>,
    indices: SparseSet,
    known: HashMap<TimerId, usize>,
    commands: TrackerCommands,
}

impl TimerTracker {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            timers: FreeList::with_capacity(capacity),
            indices: SparseSet::with_capacity(capacity),
            known: HashMap::new(),
            commands: TrackerCommands::new(),
        }
    }

    /// Registers a timer. The timer is staged and becomes live at this tick's
    /// flush point; the returned id addresses it from then on.
    pub fn add_timer(&mut self, timer: Timer) -> Result<TimerId, TrackerError> {
        self.commands.schedule(timer)
    }

    /// Unregisters a timer, staged until the flush point.
    pub fn remove_timer(&mut self, id: TimerId) -> Result<(), TrackerError> {
        if let Some(&slot) = self.known.get(&id) {
            let timer = self
                .timers
                .get_mut(slot)
                .expect("known timer id maps to an empty slot");
            if !timer.tracked {
                return Err(TrackerError::AlreadyRemoving { id });
            }
            timer.tracked = false;
            self.commands.cancel(id);
            return Ok(());
        }

        if let Some(timer) = self.commands.pending_addition_mut(id) {
            if !timer.tracked {
                return Err(TrackerError::AlreadyRemoving { id });
            }
            timer.tracked = false;
            self.commands.cancel(id);
            return Ok(());
        }

        Err(TrackerError::UnknownTimer { id })
    }

    /// Read access to a tracked timer, live or still pending insertion.
    pub fn timer(&self, id: TimerId) -> Option<&Timer> {
        if let Some(&slot) = self.known.get(&id) {
            return self.timers.get(slot);
        }
        self.commands
            .additions
            .iter()
            .find(|timer| timer.id == Some(id))
    }

    /// Mutable access, for `start`/`pause`/`stop` on a tracked timer.
    pub fn timer_mut(&mut self, id: TimerId) -> Option<&mut Timer> {
        if let Some(&slot) = self.known.get(&id) {
            return self.timers.get_mut(slot);
        }
        self.commands.pending_addition_mut(id)
    }

    /// Number of live timers (staged additions excluded).
    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    pub fn timers(&self) -> impl Iterator<Item = &Timer> {
        self.timers.enumerate(&self.indices)
    }

    /// Ticks every live timer, then flushes staged additions and removals in
    /// that order.
    pub fn tick(&mut self, dt: f32) {
        let Self {
            timers,
            indices,
            commands,
            ..
        } = self;

        for i in 0..indices.dense().len() {
            let slot = indices.dense()[i];
            let Some(timer) = timers.get_mut(slot) else {
                continue;
            };
            timer.tick(dt, commands);

            // Finished one-shots unregister themselves
            if timer.state() == TimerState::Completed && timer.tracked {
                timer.tracked = false;
                let id = timer.id.expect("live timer has no id");
                commands.cancel(id);
            }
        }

        self.flush();
    }

    fn flush(&mut self) {
        while let Some(timer) = self.commands.additions.pop_front() {
            let id = timer.id.expect("staged timer has no id");
            let slot = self.timers.insert(timer);
            self.indices.insert(slot);
            self.known.insert(id, slot);
        }

        while let Some(id) = self.commands.removals.pop_front() {
            match self.known.remove(&id) {
                Some(slot) => {
                    self.timers
                        .remove(slot)
                        .expect("known timer id maps to an empty slot");
                    self.indices.remove(slot);
                }
                None => warn!("Ignoring staged removal of unknown timer {id}"),
            }
        }
    }
}

impl Default for TimerTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::timer::timer::Timer;

    #[test]
    fn additions_go_live_at_flush() {
        let mut tracker = TimerTracker::new();
        let mut timer = Timer::create_countdown(Box::new(|_, _| {}), 2.0, false).unwrap();
        timer.start().unwrap();
        let id = tracker.add_timer(timer).unwrap();

        assert_eq!(tracker.len(), 0);
        assert!(tracker.timer(id).is_some());

        tracker.tick(0.5);
        assert_eq!(tracker.len(), 1);
        // The first tick after staging must not have advanced the timer
        assert_eq!(tracker.timer(id).unwrap().current(), 2.0);

        tracker.tick(0.5);
        assert_eq!(tracker.timer(id).unwrap().current(), 1.5);
    }

    #[test]
    fn one_shot_removes_itself_on_completion() {
        let fired = Rc::new(Cell::new(0u32));
        let fired_in_callback = fired.clone();

        let mut tracker = TimerTracker::new();
        let mut timer = Timer::create_countdown(
            Box::new(move |_, _| fired_in_callback.set(fired_in_callback.get() + 1)),
            1.0,
            false,
        )
        .unwrap();
        timer.start().unwrap();
        let id = tracker.add_timer(timer).unwrap();

        tracker.tick(0.0); // flush the addition
        tracker.tick(1.0);

        assert_eq!(fired.get(), 1);
        assert_eq!(tracker.len(), 0);
        assert!(tracker.timer(id).is_none());
    }

    #[test]
    fn remove_timer_rejects_unknown_and_double_removal() {
        let mut tracker = TimerTracker::new();
        assert_eq!(
            tracker.remove_timer(42),
            Err(TrackerError::UnknownTimer { id: 42 })
        );

        let timer = Timer::create_countdown(Box::new(|_, _| {}), 2.0, false).unwrap();
        let id = tracker.add_timer(timer).unwrap();
        tracker.tick(0.0);

        assert_eq!(tracker.remove_timer(id), Ok(()));
        assert_eq!(
            tracker.remove_timer(id),
            Err(TrackerError::AlreadyRemoving { id })
        );
    }

    #[test]
    fn removing_a_pending_addition_is_allowed() {
        let mut tracker = TimerTracker::new();
        let timer = Timer::create_countdown(Box::new(|_, _| {}), 2.0, false).unwrap();
        let id = tracker.add_timer(timer).unwrap();

        assert_eq!(tracker.remove_timer(id), Ok(()));
        tracker.tick(0.0);
        assert_eq!(tracker.len(), 0);
    }
}
