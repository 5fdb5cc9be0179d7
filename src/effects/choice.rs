//! Suspended benedictions.
//!
//! A benediction that needs a card pick does not block: it records a
//! `PendingChoice` (what to resume and which cards are legal) and the
//! engine switches to the matching choose mode. `submit_choice` validates
//! the pick against the domain and resumes the effect.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::targeting::ChoiceDomain;
use crate::core::EntityId;

/// The effect waiting for a pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoiceKind {
    Evasion,
    Protection { magnitude: i32 },
    LuckySwitch,
    FutureVision,
}

impl ChoiceKind {
    #[must_use]
    pub fn domain(self) -> ChoiceDomain {
        match self {
            ChoiceKind::Evasion | ChoiceKind::Protection { .. } => ChoiceDomain::Treasure,
            ChoiceKind::LuckySwitch => ChoiceDomain::AnyCard,
            ChoiceKind::FutureVision => ChoiceDomain::Preview,
        }
    }
}

/// A benediction suspended until the player picks a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingChoice {
    /// The benediction being played. It stays in its slot until resumed.
    pub benediction: EntityId,

    pub kind: ChoiceKind,

    /// Legal picks, fixed when the choice was opened.
    pub domain: SmallVec<[EntityId; 8]>,
}

impl PendingChoice {
    #[must_use]
    pub fn new(benediction: EntityId, kind: ChoiceKind, domain: SmallVec<[EntityId; 8]>) -> Self {
        Self {
            benediction,
            kind,
            domain,
        }
    }

    #[must_use]
    pub fn allows(&self, card: EntityId) -> bool {
        self.domain.contains(&card)
    }
}
