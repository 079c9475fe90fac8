//! Delayed round tasks.
//!
//! The engine has two fixed delays: concealing the start-of-round peek and
//! concealing a rejected group. Both are queued here against a logical clock
//! that the host advances. Each task carries the generation it was scheduled
//! for. Starting a round discards the queued tasks of earlier rounds, and the
//! controller drops any task whose round is gone by the time it comes due.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::state::Generation;

/// What a scheduled task does when it runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduledAction {
    /// End the start-of-round peek.
    ConcealPeek,
    /// Turn a rejected group face down.
    ConcealRejected,
}

/// A delayed action tagged with its round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Round the task belongs to.
    pub generation: Generation,
    /// Logical time at which the task runs.
    pub due: Duration,
    /// What to do.
    pub action: ScheduledAction,
}

/// Queue of scheduled tasks against a logical clock.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    queue: Vec<ScheduledTask>,
}

impl Scheduler {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `action` to run `delay` from now.
    pub fn schedule(&mut self, generation: Generation, delay: Duration, action: ScheduledAction) -> ScheduledTask {
        let task = ScheduledTask {
            generation,
            due: self.now + delay,
            action,
        };
        self.queue.push(task);
        task
    }

    /// Advance the clock and remove every task now due, earliest first.
    ///
    /// Tasks due at the same time come out in the order they were scheduled.
    pub fn advance(&mut self, by: Duration) -> Vec<ScheduledTask> {
        self.now += by;

        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) = self.queue.drain(..).partition(|task| task.due <= now);
        self.queue = pending;

        due.sort_by_key(|task| task.due);
        due
    }

    /// Drop every queued task not belonging to `generation`.
    ///
    /// Returns how many tasks were dropped.
    pub fn retain_generation(&mut self, generation: Generation) -> usize {
        let before = self.queue.len();
        self.queue.retain(|task| task.generation == generation);
        before - self.queue.len()
    }

    /// Tasks not yet due.
    #[must_use]
    pub fn pending(&self) -> &[ScheduledTask] {
        &self.queue
    }
}
