//! Picture assignment.
//!
//! Deals `cell_count` pictures such that every picture used appears exactly
//! `group_size` times:
//!
//! 1. Draw `cell_count / group_size` distinct pictures uniformly from
//!    `0..cell_count`, rejecting duplicates.
//! 2. Repeat the distinct set `group_size` times.
//! 3. Deal the multiset by repeatedly removing a uniformly chosen element of
//!    the remaining pool and giving it to the next position.
//!
//! Step 3 picks by plain index into what remains, so every surviving element
//! is equally likely at each step and no position is biased.

use rustc_hash::FxHashSet;

use super::config::GridConfig;
use crate::core::{GameRng, PictureId};

/// Assign one picture per cell.
///
/// # Panics
///
/// Panics if `group_size` is zero or does not divide `cell_count`.
/// A `GridConfig` always satisfies both; prefer [`assign_for`].
#[must_use]
pub fn assign(cell_count: usize, group_size: usize, rng: &mut GameRng) -> Vec<PictureId> {
    assert!(group_size > 0, "Match group size must be positive");
    assert!(
        cell_count % group_size == 0,
        "Cell count {} is not divisible by match group size {}",
        cell_count,
        group_size
    );

    let distinct = draw_distinct(cell_count / group_size, cell_count, rng);

    let mut pool = Vec::with_capacity(cell_count);
    for _ in 0..group_size {
        pool.extend_from_slice(&distinct);
    }

    deal(pool, rng)
}

/// Assign pictures for a validated grid.
#[must_use]
pub fn assign_for(config: &GridConfig, rng: &mut GameRng) -> Vec<PictureId> {
    assign(config.cell_count(), config.match_group_size(), rng)
}

/// Draw `count` distinct pictures from `0..range`, in draw order.
fn draw_distinct(count: usize, range: usize, rng: &mut GameRng) -> Vec<PictureId> {
    debug_assert!(count <= range);

    let mut seen = FxHashSet::default();
    let mut drawn = Vec::with_capacity(count);

    while drawn.len() < count {
        let picture = PictureId::new(rng.gen_index(range) as u32);
        if seen.insert(picture) {
            drawn.push(picture);
        }
    }

    drawn
}

/// Random permutation by repeated uniform removal.
fn deal(mut pool: Vec<PictureId>, rng: &mut GameRng) -> Vec<PictureId> {
    let mut dealt = Vec::with_capacity(pool.len());

    while !pool.is_empty() {
        let index = rng.gen_index(pool.len());
        dealt.push(pool.remove(index));
    }

    dealt
}
