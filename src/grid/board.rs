//! The card table for one round.
//!
//! Cards live in an `im::Vector` indexed by position, so handing a snapshot
//! of the board to the presentation layer is an O(1) clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Card, CardFace, CardPosition, CardState, PictureId};

/// All cards of a round, in position order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vector<Card>,
}

impl Board {
    /// Deal face-down cards, one per picture, at sequential positions.
    #[must_use]
    pub fn deal(pictures: &[PictureId]) -> Self {
        let cards = pictures
            .iter()
            .enumerate()
            .map(|(index, &picture)| Card::new(CardPosition::from(index), picture))
            .collect();
        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the board has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by position.
    #[must_use]
    pub fn get(&self, position: CardPosition) -> Option<&Card> {
        self.cards.get(position.index())
    }

    /// Set a card's state. Returns `false` if the position is off the board.
    pub fn set_state(&mut self, position: CardPosition, state: CardState) -> bool {
        match self.cards.get_mut(position.index()) {
            Some(card) => {
                card.state = state;
                true
            }
            None => false,
        }
    }

    /// Iterate over all cards in position order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Every position on the board, in order.
    #[must_use]
    pub fn positions(&self) -> Vec<CardPosition> {
        self.cards.iter().map(|card| card.position).collect()
    }

    /// Positions of every card currently in `state`.
    #[must_use]
    pub fn positions_in(&self, state: CardState) -> Vec<CardPosition> {
        self.cards
            .iter()
            .filter(|card| card.state == state)
            .map(|card| card.position)
            .collect()
    }

    /// Number of cards currently in `state`.
    #[must_use]
    pub fn count_in(&self, state: CardState) -> usize {
        self.cards.iter().filter(|card| card.state == state).count()
    }

    /// Move every card in `from` to `to`. Returns the positions changed.
    pub fn transition_all(&mut self, from: CardState, to: CardState) -> Vec<CardPosition> {
        let mut changed = Vec::new();
        for card in self.cards.iter_mut() {
            if card.state == from {
                card.state = to;
                changed.push(card.position);
            }
        }
        changed
    }

    /// Every card's face, regardless of state.
    #[must_use]
    pub fn faces(&self) -> Vec<CardFace> {
        self.cards.iter().map(Card::face).collect()
    }
}
