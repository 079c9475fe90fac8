//! Round timer.
//!
//! Counts whole seconds driven by an external one-second tick. The timer
//! never owns a clock: hosts call `tick` once per second and the timer only
//! counts while armed.
//!
//! `start` and `stop` arm and disarm without touching the count; the round
//! controller decides when to `reset`.

use serde::{Deserialize, Serialize};

use crate::core::Elapsed;

/// Elapsed-seconds counter for one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTimer {
    elapsed_seconds: u64,
    running: bool,
}

impl RoundTimer {
    /// Create a stopped timer at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer. Calling it while running has no effect.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Disarm the timer and return the final elapsed time.
    pub fn stop(&mut self) -> Elapsed {
        self.running = false;
        Elapsed(self.elapsed_seconds)
    }

    /// Count one second.
    ///
    /// Returns the new elapsed time, or `None` if the timer is not running.
    pub fn tick(&mut self) -> Option<Elapsed> {
        if !self.running {
            return None;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        Some(Elapsed(self.elapsed_seconds))
    }

    /// Seconds counted so far.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Zero the count. Does not change whether the timer is running.
    pub fn reset(&mut self) {
        self.elapsed_seconds = 0;
    }

    /// Whether ticks are being counted.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}
