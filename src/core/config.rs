//! Engine configuration.
//!
//! Hosts configure the engine once by providing an `EngineConfig`:
//! - how many cards form a match group
//! - how long the start-of-round peek and the reject reveal last
//! - which grid to deal when no dimensions are supplied
//!
//! Grid bounds are fixed by the grid configurator; the group size is checked
//! against the grid there at every round start.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default number of cards per match group (classic pairs).
pub const DEFAULT_MATCH_GROUP_SIZE: usize = 2;

/// How long every picture stays visible after a round starts.
pub const DEFAULT_PEEK_DELAY: Duration = Duration::from_millis(1200);

/// How long a rejected group stays face up before it is concealed.
pub const DEFAULT_REJECT_DELAY: Duration = Duration::from_millis(900);

/// Engine-wide tunables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cards that must share a picture to match.
    pub match_group_size: usize,

    /// Duration of the start-of-round peek.
    pub peek_delay: Duration,

    /// Duration a rejected group stays revealed.
    pub reject_delay: Duration,

    /// Grid width used by `start_default_round`.
    pub default_width: u32,

    /// Grid height used by `start_default_round`.
    pub default_height: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_group_size: DEFAULT_MATCH_GROUP_SIZE,
            peek_delay: DEFAULT_PEEK_DELAY,
            reject_delay: DEFAULT_REJECT_DELAY,
            default_width: 4,
            default_height: 3,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration (pairs, 4×3 default grid).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the match group size.
    #[must_use]
    pub fn with_match_group_size(mut self, size: usize) -> Self {
        self.match_group_size = size;
        self
    }

    /// Set the peek duration.
    #[must_use]
    pub fn with_peek_delay(mut self, delay: Duration) -> Self {
        self.peek_delay = delay;
        self
    }

    /// Set the reject reveal duration.
    #[must_use]
    pub fn with_reject_delay(mut self, delay: Duration) -> Self {
        self.reject_delay = delay;
        self
    }

    /// Set the grid dealt by `start_default_round`.
    #[must_use]
    pub fn with_default_dimensions(mut self, width: u32, height: u32) -> Self {
        self.default_width = width;
        self.default_height = height;
        self
    }
}
