//! Grid setup: dimension validation, picture assignment and the card table.
//!
//! At round start the controller calls [`configure`] to validate the
//! requested dimensions, [`assign_for`] to deal pictures, and
//! [`Board::deal`] to lay out fresh face-down cards.

pub mod assign;
pub mod board;
pub mod config;
pub mod error;

pub use assign::{assign, assign_for};
pub use board::Board;
pub use config::{configure, display_size_hint, GridConfig, MAX_GRID_SIDE, MIN_GRID_SIDE, MIN_MATCH_GROUP_SIZE};
pub use error::ConfigError;
