//! Property tests for assignment, grid validation and time formatting.

use std::collections::HashMap;

use memory_match::{
    assign, configure, format_elapsed, CardPosition, ConfigError, EngineConfig, GameRng, RoundController,
};
use proptest::prelude::*;

proptest! {
    /// Every picture used appears exactly `group_size` times.
    #[test]
    fn prop_assign_multiplicity(group_size in 2usize..=6, groups in 1usize..=25, seed in any::<u64>()) {
        let cell_count = group_size * groups;
        let pictures = assign(cell_count, group_size, &mut GameRng::new(seed));

        prop_assert_eq!(pictures.len(), cell_count);

        let mut counts: HashMap<_, usize> = HashMap::new();
        for picture in &pictures {
            prop_assert!((picture.raw() as usize) < cell_count);
            *counts.entry(*picture).or_default() += 1;
        }
        prop_assert_eq!(counts.len(), groups);
        prop_assert!(counts.values().all(|&n| n == group_size));
    }

    /// Errors follow width, height, divisibility precedence.
    #[test]
    fn prop_configure_precedence(width in 0u32..=14, height in 0u32..=14, group_size in 2usize..=5) {
        let result = configure(width, height, group_size);
        let width_ok = (2..=10).contains(&width);
        let height_ok = (2..=10).contains(&height);
        let cells = (width * height) as usize;

        match result {
            Err(ConfigError::InvalidWidth { .. }) => prop_assert!(!width_ok),
            Err(ConfigError::InvalidHeight { .. }) => prop_assert!(width_ok && !height_ok),
            Err(ConfigError::IndivisibleGrid { .. }) => {
                prop_assert!(width_ok && height_ok && cells % group_size != 0)
            }
            Err(ConfigError::InvalidGroupSize { .. }) => {
                prop_assert!(width_ok && height_ok && cells % group_size == 0 && group_size > cells / 2)
            }
            Ok(grid) => {
                prop_assert!(width_ok && height_ok && cells % group_size == 0);
                prop_assert_eq!(grid.cell_count(), cells);
            }
        }
    }

    /// Formatting round-trips back to the second count.
    #[test]
    fn prop_format_elapsed_parses_back(seconds in 0i64..=400_000) {
        let text = format_elapsed(seconds);
        let parts: Vec<i64> = text.split(':').map(|p| p.parse().unwrap()).collect();

        prop_assert_eq!(parts.len(), 3);
        prop_assert!(text.split(':').all(|p| p.len() >= 2));
        prop_assert!(parts[1] < 60 && parts[2] < 60);
        prop_assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], seconds);
    }

    /// Negative input always renders the default.
    #[test]
    fn prop_format_elapsed_negative(seconds in i64::MIN..0) {
        prop_assert_eq!(format_elapsed(seconds), "00:00:00");
    }

    /// Restarting always yields a clean board, whatever happened before.
    #[test]
    fn prop_restart_is_clean(seed in any::<u64>(), clicks in proptest::collection::vec(0u32..12, 0..30)) {
        let mut controller = RoundController::new(EngineConfig::default(), seed);
        controller.start_round(4, 3).unwrap();
        for click in clicks {
            controller.select(CardPosition::new(click));
            controller.tick();
        }

        controller.start_round(4, 3).unwrap();

        let round = controller.round().unwrap();
        prop_assert_eq!(round.hidden_count(), 12);
        prop_assert_eq!(round.matched_count, 0);
        prop_assert!(round.selection.pending().is_empty());
        prop_assert_eq!(controller.elapsed_seconds(), 0);
    }
}
