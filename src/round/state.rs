//! Live round state.

use serde::{Deserialize, Serialize};

use crate::core::CardState;
use crate::grid::{Board, GridConfig};
use crate::selection::SelectionStateMachine;
use crate::timer::RoundTimer;

/// Round version number.
///
/// Incremented on every successful round start. Scheduled tasks carry the
/// generation they were created for and are dropped if it is no longer live.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}

/// Everything that belongs to one round.
///
/// Owned by the controller; starting a new round replaces it wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Version of this round.
    pub generation: Generation,

    /// Validated grid layout.
    pub config: GridConfig,

    /// Card table.
    pub board: Board,

    /// Pending-group bookkeeping.
    pub selection: SelectionStateMachine,

    /// Number of matched cards.
    pub matched_count: usize,

    /// Elapsed-time counter.
    pub timer: RoundTimer,

    /// Whether `RoundComplete` has been published.
    pub completed: bool,
}

impl RoundState {
    /// Fresh round: all cards hidden, nothing pending, timer zeroed and stopped.
    #[must_use]
    pub fn new(generation: Generation, config: GridConfig, board: Board) -> Self {
        let selection = SelectionStateMachine::new(config.match_group_size());
        Self {
            generation,
            config,
            board,
            selection,
            matched_count: 0,
            timer: RoundTimer::new(),
            completed: false,
        }
    }

    /// Whether every card has been matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.matched_count == self.config.cell_count()
    }

    /// Number of cards still face down.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.board.count_in(CardState::Hidden)
    }
}
