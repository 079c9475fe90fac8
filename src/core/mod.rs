//! Core engine types: cards, RNG, configuration, time formatting.
//!
//! Everything here is independent of the round lifecycle and is shared by
//! the grid, selection, timer and round modules.

pub mod card;
pub mod config;
pub mod rng;
pub mod time;

pub use card::{Card, CardFace, CardPosition, CardState, PictureId};
pub use config::EngineConfig;
pub use rng::GameRng;
pub use time::{format_elapsed, format_elapsed_secs_f64, Elapsed};
