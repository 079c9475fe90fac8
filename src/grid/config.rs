//! Grid validation and derived dimensions.
//!
//! A round starts from a user-supplied width and height. `configure` checks
//! them against the fixed side bounds and against the match group size, and
//! derives the cell count and a display-size hint for the presentation layer.
//!
//! ## Validation Order
//!
//! Width, then height, then group size lower bound, then divisibility, then
//! group size upper bound. The order is part of the contract: callers that
//! send several bad values always get the same error.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::error::ConfigError;

/// Smallest allowed grid side.
pub const MIN_GRID_SIDE: u32 = 2;

/// Largest allowed grid side.
pub const MAX_GRID_SIDE: u32 = 10;

/// Smallest meaningful match group.
pub const MIN_MATCH_GROUP_SIZE: usize = 2;

/// Cell size used for grids four or fewer cards wide.
pub const FALLBACK_DISPLAY_SIZE: &str = "10em";

/// Validated grid layout for one round.
///
/// Immutable once built; a new round builds a new one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridConfig {
    width: u32,
    height: u32,
    cell_count: usize,
    match_group_size: usize,
    display_size_hint: String,
}

impl GridConfig {
    /// Grid width in cards.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cards.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cards (`width * height`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Cards per match group.
    #[must_use]
    pub fn match_group_size(&self) -> usize {
        self.match_group_size
    }

    /// Number of distinct pictures on the board.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.cell_count / self.match_group_size
    }

    /// CSS cell size suggested for this width (e.g. `"5.5em"`).
    #[must_use]
    pub fn display_size_hint(&self) -> &str {
        &self.display_size_hint
    }
}

/// Validate a grid request and derive its layout.
///
/// See the module docs for the order in which checks run.
#[instrument]
pub fn configure(width: u32, height: u32, match_group_size: usize) -> Result<GridConfig, ConfigError> {
    if !(MIN_GRID_SIDE..=MAX_GRID_SIDE).contains(&width) {
        return Err(ConfigError::InvalidWidth {
            width,
            min: MIN_GRID_SIDE,
            max: MAX_GRID_SIDE,
        });
    }

    if !(MIN_GRID_SIDE..=MAX_GRID_SIDE).contains(&height) {
        return Err(ConfigError::InvalidHeight {
            height,
            min: MIN_GRID_SIDE,
            max: MAX_GRID_SIDE,
        });
    }

    let cell_count = (width * height) as usize;
    let max_group = cell_count / 2;

    if match_group_size < MIN_MATCH_GROUP_SIZE {
        return Err(ConfigError::InvalidGroupSize {
            size: match_group_size,
            min: MIN_MATCH_GROUP_SIZE,
            max: max_group,
        });
    }

    if cell_count % match_group_size != 0 {
        return Err(ConfigError::IndivisibleGrid {
            cell_count,
            group_size: match_group_size,
        });
    }

    if match_group_size > max_group {
        return Err(ConfigError::InvalidGroupSize {
            size: match_group_size,
            min: MIN_MATCH_GROUP_SIZE,
            max: max_group,
        });
    }

    Ok(GridConfig {
        width,
        height,
        cell_count,
        match_group_size,
        display_size_hint: display_size_hint(width).to_string(),
    })
}

/// Suggested cell size for a grid of the given width.
///
/// Wider grids get smaller cells; anything four or fewer wide uses
/// [`FALLBACK_DISPLAY_SIZE`].
#[must_use]
pub fn display_size_hint(width: u32) -> &'static str {
    match width {
        10 => "4em",
        9 => "4.5em",
        8 => "5em",
        7 => "5.5em",
        6 => "6em",
        5 => "6.5em",
        _ => FALLBACK_DISPLAY_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_default_grid() {
        let config = configure(4, 3, 2).unwrap();

        assert_eq!(config.width(), 4);
        assert_eq!(config.height(), 3);
        assert_eq!(config.cell_count(), 12);
        assert_eq!(config.match_group_size(), 2);
        assert_eq!(config.group_count(), 6);
        assert_eq!(config.display_size_hint(), "10em");
    }

    #[test]
    fn test_invalid_width() {
        assert_eq!(
            configure(0, 10, 2),
            Err(ConfigError::InvalidWidth { width: 0, min: 2, max: 10 })
        );
        assert_eq!(
            configure(100, 10, 2),
            Err(ConfigError::InvalidWidth { width: 100, min: 2, max: 10 })
        );
    }

    #[test]
    fn test_invalid_height() {
        assert_eq!(
            configure(10, 0, 2),
            Err(ConfigError::InvalidHeight { height: 0, min: 2, max: 10 })
        );
        assert_eq!(
            configure(10, 200, 2),
            Err(ConfigError::InvalidHeight { height: 200, min: 2, max: 10 })
        );
    }

    #[test]
    fn test_width_checked_before_height() {
        assert!(matches!(configure(1, 1, 2), Err(ConfigError::InvalidWidth { .. })));
        assert!(matches!(configure(11, 3, 7), Err(ConfigError::InvalidWidth { .. })));
    }

    #[test]
    fn test_indivisible_grid() {
        assert_eq!(
            configure(3, 3, 2),
            Err(ConfigError::IndivisibleGrid { cell_count: 9, group_size: 2 })
        );
        assert_eq!(
            configure(4, 4, 3),
            Err(ConfigError::IndivisibleGrid { cell_count: 16, group_size: 3 })
        );
    }

    #[test]
    fn test_group_size_bounds() {
        assert_eq!(
            configure(2, 2, 0),
            Err(ConfigError::InvalidGroupSize { size: 0, min: 2, max: 2 })
        );
        assert_eq!(
            configure(2, 2, 1),
            Err(ConfigError::InvalidGroupSize { size: 1, min: 2, max: 2 })
        );
        // 4 divides 4 cells but leaves a single group.
        assert_eq!(
            configure(2, 2, 4),
            Err(ConfigError::InvalidGroupSize { size: 4, min: 2, max: 2 })
        );
        assert!(configure(3, 4, 3).is_ok());
        assert!(configure(10, 10, 50).is_ok());
    }

    #[test]
    fn test_display_size_hint() {
        assert_eq!(display_size_hint(10), "4em");
        assert_eq!(display_size_hint(9), "4.5em");
        assert_eq!(display_size_hint(8), "5em");
        assert_eq!(display_size_hint(7), "5.5em");
        assert_eq!(display_size_hint(6), "6em");
        assert_eq!(display_size_hint(5), "6.5em");
        for width in 0..=4 {
            assert_eq!(display_size_hint(width), "10em");
        }
    }

    #[test]
    fn test_config_carries_hint() {
        assert_eq!(configure(7, 2, 2).unwrap().display_size_hint(), "5.5em");
    }
}
