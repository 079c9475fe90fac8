//! Round lifecycle: state, scheduled delays, events and the controller.
//!
//! ## Generations
//!
//! Every successful round start bumps the `Generation`. Delayed work (the
//! peek conceal and the reject conceal) is tagged with the generation it was
//! scheduled for, so a task that comes due after a new round started is a
//! no-op instead of touching the new board.

pub mod controller;
pub mod event;
pub mod schedule;
pub mod state;

pub use controller::RoundController;
pub use event::{EventRecorder, RoundEvent, RoundObserver};
pub use schedule::{ScheduledAction, ScheduledTask, Scheduler};
pub use state::{Generation, RoundState};
