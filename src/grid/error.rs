//! Grid configuration errors.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a grid request was refused.
///
/// Each variant carries the offending value and the bounds it violated so a
/// presentation layer can render its own message; `Display` gives the
/// default English text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, Serialize, Deserialize)]
pub enum ConfigError {
    /// Width outside `[min, max]`.
    #[display("Grid width must be between {min} and {max}")]
    InvalidWidth { width: u32, min: u32, max: u32 },

    /// Height outside `[min, max]`.
    #[display("Grid height must be between {min} and {max}")]
    InvalidHeight { height: u32, min: u32, max: u32 },

    /// The cell count cannot be split into whole match groups.
    #[display("Grid size must be divisible by {group_size}")]
    IndivisibleGrid { cell_count: usize, group_size: usize },

    /// The match group size does not fit the grid.
    #[display("Match group size must be between {min} and {max}, got {size}")]
    InvalidGroupSize { size: usize, min: usize, max: usize },
}
