//! # memory-match
//!
//! Engine for a memory-matching card game: a grid of face-down cards holds
//! pictures in groups of N identical cards, the player turns cards over one
//! at a time, and a full group showing one picture is matched.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine never renders. It returns
//!    outcomes from `select` and publishes `RoundEvent`s; a UI maps those to
//!    flips, conceals and timer text.
//!
//! 2. **Any Group Size**: Pairs are the default, but every API works for
//!    triples and larger groups.
//!
//! 3. **No Ambient State**: All round state lives in a `RoundState` owned by
//!    a `RoundController`, so independent games coexist.
//!
//! ## Time
//!
//! The engine owns no clock. Hosts call `tick` once per second for the round
//! timer and `advance` as time passes so the fixed peek and reject delays
//! run. Delayed work is tagged with the round's generation and dropped if a
//! new round has started.
//!
//! ## Modules
//!
//! - `core`: Cards, RNG, configuration, time formatting
//! - `grid`: Dimension validation, picture assignment, the card table
//! - `selection`: Pending groups and match evaluation
//! - `timer`: Elapsed-seconds counter
//! - `round`: Round state, scheduled delays, events, the controller
//!
//! ## Example
//!
//! ```
//! use memory_match::{EngineConfig, RoundController, SelectionOutcome};
//!
//! let mut game = RoundController::new(EngineConfig::default(), 7);
//! let grid = game.start_round(4, 3).unwrap();
//! assert_eq!(grid.cell_count(), 12);
//!
//! let first = game.board().unwrap().faces()[0];
//! assert!(matches!(game.select(first.position), SelectionOutcome::Pending(_)));
//! ```

pub mod core;
pub mod grid;
pub mod round;
pub mod selection;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{
    format_elapsed, Card, CardFace, CardPosition, CardState, Elapsed, EngineConfig, GameRng, PictureId,
};

pub use crate::grid::{assign, configure, display_size_hint, Board, ConfigError, GridConfig};

pub use crate::selection::{IgnoreReason, PendingSelection, SelectionOutcome, SelectionStateMachine};

pub use crate::timer::RoundTimer;

pub use crate::round::{
    EventRecorder, Generation, RoundController, RoundEvent, RoundObserver, RoundState, ScheduledAction,
    ScheduledTask,
};
