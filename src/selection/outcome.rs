//! Results of a card selection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardFace, CardState};

/// The cards of one resolved group, in selection order.
///
/// SmallVec keeps typical groups (pairs, triples) off the heap.
pub type GroupFaces = SmallVec<[CardFace; 4]>;

/// Why a selection had no effect.
///
/// Ignored selections are expected input (double clicks, clicks on matched
/// cards, clicks while a group is full), not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No round has been started yet.
    NoActiveRound,
    /// The position is not on the board.
    OutOfBounds,
    /// The card is face up (pending, awaiting concealment or matched).
    NotSelectable(CardState),
    /// The pending group is already full.
    GroupFull,
}

/// What a selection did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),

    /// The card was revealed and the group still needs more cards.
    Pending(CardFace),

    /// The card completed a group that matched. All cards are now matched.
    GroupMatched(GroupFaces),

    /// The card completed a group that did not match. The cards stay face up
    /// until the reject delay conceals them.
    GroupRejected(GroupFaces),
}

impl SelectionOutcome {
    /// Whether the selection had no effect.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectionOutcome::Ignored(_))
    }

    /// The card revealed by this selection, if any.
    ///
    /// For group outcomes this is the last card of the group.
    #[must_use]
    pub fn revealed(&self) -> Option<CardFace> {
        match self {
            SelectionOutcome::Ignored(_) => None,
            SelectionOutcome::Pending(face) => Some(*face),
            SelectionOutcome::GroupMatched(group) | SelectionOutcome::GroupRejected(group) => {
                group.last().copied()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardPosition, PictureId};
    use smallvec::smallvec;

    fn face(position: u32, picture: u32) -> CardFace {
        CardFace {
            position: CardPosition::new(position),
            picture: PictureId::new(picture),
        }
    }

    #[test]
    fn test_revealed() {
        assert_eq!(SelectionOutcome::Ignored(IgnoreReason::GroupFull).revealed(), None);
        assert_eq!(SelectionOutcome::Pending(face(1, 2)).revealed(), Some(face(1, 2)));

        let group: GroupFaces = smallvec![face(0, 4), face(3, 4)];
        assert_eq!(SelectionOutcome::GroupMatched(group).revealed(), Some(face(3, 4)));
    }

    #[test]
    fn test_is_ignored() {
        assert!(SelectionOutcome::Ignored(IgnoreReason::OutOfBounds).is_ignored());
        assert!(!SelectionOutcome::Pending(face(0, 0)).is_ignored());
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = SelectionOutcome::GroupRejected(smallvec![face(0, 1), face(1, 2)]);
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: SelectionOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }
}
