//! Effect targeting.
//!
//! - `DrawFilter`: which pile card a draw takes
//! - `DrawFace`: how a drawn treasure lands in the hand
//! - `ChoiceDomain`: which cards a suspended benediction may be resumed with

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardInstance, TreasureSubtype};
use crate::core::{EntityId, GameState, Mode};
use crate::zones::Zone;

/// Selection rule for a pile draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawFilter {
    /// The top card, whatever it is.
    Top,
    /// The most recent treasure.
    AnyTreasure,
    /// The most recent treasure of a subtype.
    Subtype(TreasureSubtype),
}

impl DrawFilter {
    #[must_use]
    pub fn matches(self, card: &CardInstance) -> bool {
        match self {
            DrawFilter::Top => true,
            DrawFilter::AnyTreasure => card.is_treasure(),
            DrawFilter::Subtype(subtype) => card
                .as_treasure()
                .is_some_and(|t| t.subtype == subtype),
        }
    }

    /// The pile card this filter would draw, if any.
    #[must_use]
    pub fn select(self, state: &GameState) -> Option<EntityId> {
        state
            .zones
            .last_matching(Zone::Pile, |id| self.matches(state.card(id)))
    }
}

/// Face state of a treasure entering the hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawFace {
    pub hidden: bool,
    pub locked: bool,
}

impl DrawFace {
    pub const VISIBLE: DrawFace = DrawFace {
        hidden: false,
        locked: false,
    };
    pub const HIDDEN: DrawFace = DrawFace {
        hidden: true,
        locked: false,
    };
    pub const LOCKED: DrawFace = DrawFace {
        hidden: false,
        locked: true,
    };
}

/// Legal answers to a pending choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoiceDomain {
    /// Unlocked treasure cards in the hand.
    Treasure,
    /// Unlocked hand cards and the other benediction-hand cards.
    AnyCard,
    /// The future-vision preview.
    Preview,
}

impl ChoiceDomain {
    /// Mode the engine waits in for this domain.
    #[must_use]
    pub fn mode(self) -> Mode {
        match self {
            ChoiceDomain::Treasure => Mode::ChooseTreasure,
            ChoiceDomain::AnyCard => Mode::Choose,
            ChoiceDomain::Preview => Mode::ChoosePreview,
        }
    }

    /// Candidate cards, never including `source` (the benediction in flight).
    #[must_use]
    pub fn candidates(self, state: &GameState, source: EntityId) -> SmallVec<[EntityId; 8]> {
        match self {
            ChoiceDomain::Treasure => state.unlocked_hand().into_iter().collect(),
            ChoiceDomain::AnyCard => state
                .unlocked_hand()
                .into_iter()
                .chain(state.zones.slot_cards().filter(|&id| id != source))
                .collect(),
            ChoiceDomain::Preview => state.preview().iter().copied().collect(),
        }
    }
}
