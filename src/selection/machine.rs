//! The selection state machine.
//!
//! Tracks the pending group and applies card state transitions:
//!
//! - A selected `Hidden` card becomes `Disabled` and joins the pending group.
//! - When the group reaches `match_group_size`, it is evaluated:
//!   - all pictures equal: every card becomes `Matched`, the group is cleared;
//!   - otherwise: every card becomes `Revealed` and the group stays full
//!     until [`SelectionStateMachine::conceal_rejected`] runs.
//! - Whenever a group resolves, no card on the board is left `Disabled`.
//!
//! Keeping a rejected group in the pending slot until it is concealed is what
//! makes selections during the reject delay `Ignored(GroupFull)`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::outcome::{GroupFaces, IgnoreReason, SelectionOutcome};
use crate::core::{CardFace, CardPosition, CardState};
use crate::grid::Board;

/// Cards revealed and awaiting the rest of their group, in selection order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSelection {
    positions: SmallVec<[CardPosition; 4]>,
}

impl PendingSelection {
    /// Number of pending cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no card is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Pending positions in selection order.
    #[must_use]
    pub fn positions(&self) -> &[CardPosition] {
        &self.positions
    }

    /// Whether a position is pending.
    #[must_use]
    pub fn contains(&self, position: CardPosition) -> bool {
        self.positions.contains(&position)
    }
}

/// Pending-group bookkeeping for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionStateMachine {
    match_group_size: usize,
    pending: PendingSelection,
    awaiting_conceal: bool,
}

impl SelectionStateMachine {
    /// Create a machine for groups of `match_group_size` cards.
    ///
    /// # Panics
    ///
    /// Panics if `match_group_size` is zero.
    #[must_use]
    pub fn new(match_group_size: usize) -> Self {
        assert!(match_group_size > 0, "Match group size must be positive");
        Self {
            match_group_size,
            pending: PendingSelection::default(),
            awaiting_conceal: false,
        }
    }

    /// Cards per group.
    #[must_use]
    pub fn match_group_size(&self) -> usize {
        self.match_group_size
    }

    /// The current pending group.
    #[must_use]
    pub fn pending(&self) -> &PendingSelection {
        &self.pending
    }

    /// Whether a rejected group is waiting to be concealed.
    #[must_use]
    pub fn is_awaiting_conceal(&self) -> bool {
        self.awaiting_conceal
    }

    /// Select the card at `position`.
    pub fn select(&mut self, board: &mut Board, position: CardPosition) -> SelectionOutcome {
        let Some(card) = board.get(position) else {
            return SelectionOutcome::Ignored(IgnoreReason::OutOfBounds);
        };

        if !card.state.is_selectable() {
            return SelectionOutcome::Ignored(IgnoreReason::NotSelectable(card.state));
        }

        if self.pending.len() >= self.match_group_size {
            return SelectionOutcome::Ignored(IgnoreReason::GroupFull);
        }

        let face = card.face();
        board.set_state(position, CardState::Disabled);
        self.pending.positions.push(position);

        if self.pending.len() < self.match_group_size {
            return SelectionOutcome::Pending(face);
        }

        let group = self.group_faces(board);
        let first = group[0].picture;

        if group.iter().all(|card| card.picture == first) {
            for card in &group {
                board.set_state(card.position, CardState::Matched);
            }
            self.release(board);
            debug!(picture = %first, size = group.len(), "group matched");
            SelectionOutcome::GroupMatched(group)
        } else {
            for card in &group {
                board.set_state(card.position, CardState::Revealed);
            }
            self.awaiting_conceal = true;
            debug!(size = group.len(), "group rejected");
            SelectionOutcome::GroupRejected(group)
        }
    }

    /// Conceal a rejected group and free the pending slot.
    ///
    /// Returns the positions turned face down. Does nothing (and returns an
    /// empty list) when no rejected group is waiting.
    pub fn conceal_rejected(&mut self, board: &mut Board) -> Vec<CardPosition> {
        if !self.awaiting_conceal {
            return Vec::new();
        }

        let mut concealed = Vec::with_capacity(self.pending.len());
        for &position in self.pending.positions() {
            if board.get(position).map(|card| card.state) == Some(CardState::Revealed) {
                board.set_state(position, CardState::Hidden);
                concealed.push(position);
            }
        }

        self.release(board);
        concealed
    }

    /// Clear the pending group and make every `Disabled` card selectable.
    fn release(&mut self, board: &mut Board) {
        self.pending.positions.clear();
        self.awaiting_conceal = false;
        board.transition_all(CardState::Disabled, CardState::Hidden);
    }

    fn group_faces(&self, board: &Board) -> GroupFaces {
        self.pending
            .positions()
            .iter()
            .filter_map(|&position| board.get(position).map(|card| card.face()))
            .collect::<SmallVec<[CardFace; 4]>>()
    }
}
