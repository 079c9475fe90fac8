//! Card identity and per-card state.
//!
//! Every grid cell holds exactly one `Card`. A card is addressed by its
//! `CardPosition` (row-major, 0-based) and shows a `PictureId` when face up.
//!
//! ## State Machine
//!
//! ```text
//! Hidden ──select──▶ Disabled ──group matches──▶ Matched (terminal)
//!                        │
//!                        └──group rejected──▶ Revealed ──reject delay──▶ Hidden
//! ```

use serde::{Deserialize, Serialize};

/// Stable index of a card on the board.
///
/// Positions are assigned once per round in row-major order and never change
/// while the round is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardPosition(pub u32);

impl CardPosition {
    /// Create a new card position.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the position as a board index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw position value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<usize> for CardPosition {
    fn from(index: usize) -> Self {
        Self(index as u32)
    }
}

impl std::fmt::Display for CardPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position({})", self.0)
    }
}

/// Picture identifier shared by the cards of one match group.
///
/// Equality of identifiers is what defines a match. The value itself is
/// opaque; presentation layers map it to an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PictureId(pub u32);

impl PictureId {
    /// Create a new picture identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw identifier value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PictureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Picture({})", self.0)
    }
}

/// Engine state of a single card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Face down and selectable.
    #[default]
    Hidden,
    /// Face up after its group was rejected, waiting to be concealed.
    Revealed,
    /// Face up as part of the pending group. Not selectable.
    Disabled,
    /// Face up permanently. Terminal.
    Matched,
}

impl CardState {
    /// Whether the presentation layer should show the picture.
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        !matches!(self, CardState::Hidden)
    }

    /// Whether a player may select a card in this state.
    #[must_use]
    pub const fn is_selectable(self) -> bool {
        matches!(self, CardState::Hidden)
    }
}

/// One grid cell for the duration of a round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Where the card sits on the board.
    pub position: CardPosition,

    /// The picture shown when face up.
    pub picture: PictureId,

    /// Current engine state.
    pub state: CardState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(position: CardPosition, picture: PictureId) -> Self {
        Self {
            position,
            picture,
            state: CardState::Hidden,
        }
    }

    /// The position/picture pair the presentation layer needs to render a flip.
    #[must_use]
    pub fn face(&self) -> CardFace {
        CardFace {
            position: self.position,
            picture: self.picture,
        }
    }
}

/// A card as shown to the player: where it is and which picture it carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardFace {
    pub position: CardPosition,
    pub picture: PictureId,
}
