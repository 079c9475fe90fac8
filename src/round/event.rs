//! Round events and observers.
//!
//! The controller publishes a `RoundEvent` for everything the presentation
//! layer has to render: flips, conceals, timer updates and completion.
//! Observers receive events synchronously, in publication order.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use super::state::Generation;
use crate::core::{CardFace, CardPosition, Elapsed, PictureId};
use crate::grid::GridConfig;

/// Something the presentation layer should react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A new round replaced the previous one.
    RoundStarted {
        generation: Generation,
        config: GridConfig,
    },

    /// Show every picture briefly at round start.
    PeekStarted { faces: Vec<CardFace> },

    /// End of the peek: turn every card face down, whatever its state. Visual only.
    PeekEnded { positions: Vec<CardPosition> },

    /// A card was turned face up by a selection.
    CardRevealed(CardFace),

    /// A full group matched and stays face up.
    GroupMatched {
        picture: PictureId,
        positions: Vec<CardPosition>,
    },

    /// A full group did not match; it will be concealed after the reject delay.
    GroupRejected { faces: Vec<CardFace> },

    /// A rejected group was turned face down.
    CardsConcealed { positions: Vec<CardPosition> },

    /// The timer counted a second.
    TimerTick { elapsed: Elapsed, display: String },

    /// Every card is matched; the timer has stopped.
    RoundComplete {
        generation: Generation,
        elapsed: Elapsed,
    },
}

/// Receives round events.
///
/// Closures taking `&RoundEvent` implement this trait.
pub trait RoundObserver: Send {
    /// Called once per published event.
    fn notify(&mut self, event: &RoundEvent);
}

impl<F> RoundObserver for F
where
    F: FnMut(&RoundEvent) + Send,
{
    fn notify(&mut self, event: &RoundEvent) {
        self(event)
    }
}

/// Observer that keeps every event it receives.
///
/// Clones share the same log, so one clone can be subscribed while another
/// is read.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<RoundEvent>>>,
}

impl EventRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every recorded event.
    #[must_use]
    pub fn events(&self) -> Vec<RoundEvent> {
        self.lock().clone()
    }

    /// Remove and return every recorded event.
    pub fn take(&self) -> Vec<RoundEvent> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of recorded events matching a predicate.
    #[must_use]
    pub fn count(&self, predicate: impl Fn(&RoundEvent) -> bool) -> usize {
        self.lock().iter().filter(|event| predicate(event)).count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RoundEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RoundObserver for EventRecorder {
    fn notify(&mut self, event: &RoundEvent) {
        self.lock().push(event.clone());
    }
}
