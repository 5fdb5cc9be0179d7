//! Card instances - runtime card state.
//!
//! A `CardInstance` is one physical card: its identity, its kind (a tagged
//! union of treasure / malediction / benediction data), its face-down and
//! locked flags, and the zone that currently holds it. The zone field is a
//! mirror of the `ZoneManager` kept for display; rules read the manager.

use serde::{Deserialize, Serialize};

use super::definition::{BenedictionEffect, BenedictionKind, MaledictionEffect, TreasureSubtype};
use crate::core::entity::EntityId;
use crate::zones::Zone;

/// Treasure data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Treasure {
    /// Current value, never negative.
    pub value: i32,
    /// Printed value, restored on discard.
    pub default_value: i32,
    pub subtype: TreasureSubtype,
}

/// Kind-specific data of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Treasure(Treasure),
    Malediction(MaledictionEffect),
    Benediction(BenedictionKind),
}

/// A card in the game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique entity ID for this instance.
    pub entity_id: EntityId,

    pub kind: CardKind,

    /// Face-down.
    pub hidden: bool,

    /// Immune to player discards and choices.
    pub locked: bool,

    /// Current zone (mirror of the zone manager).
    pub zone: Zone,
}

impl CardInstance {
    /// Create a treasure card.
    #[must_use]
    pub fn treasure(entity_id: EntityId, value: i32, subtype: TreasureSubtype, zone: Zone) -> Self {
        Self {
            entity_id,
            kind: CardKind::Treasure(Treasure {
                value,
                default_value: value,
                subtype,
            }),
            hidden: true,
            locked: false,
            zone,
        }
    }

    /// Create a malediction card.
    #[must_use]
    pub fn malediction(entity_id: EntityId, effect: MaledictionEffect, zone: Zone) -> Self {
        Self {
            entity_id,
            kind: CardKind::Malediction(effect),
            hidden: true,
            locked: false,
            zone,
        }
    }

    /// Create a benediction card.
    #[must_use]
    pub fn benediction(entity_id: EntityId, kind: BenedictionKind, zone: Zone) -> Self {
        Self {
            entity_id,
            kind: CardKind::Benediction(kind),
            hidden: true,
            locked: false,
            zone,
        }
    }

    #[must_use]
    pub fn is_treasure(&self) -> bool {
        matches!(self.kind, CardKind::Treasure(_))
    }

    #[must_use]
    pub fn is_malediction(&self) -> bool {
        matches!(self.kind, CardKind::Malediction(_))
    }

    #[must_use]
    pub fn is_benediction(&self) -> bool {
        matches!(self.kind, CardKind::Benediction(_))
    }

    /// Treasure data, if this is a treasure.
    #[must_use]
    pub fn as_treasure(&self) -> Option<&Treasure> {
        match &self.kind {
            CardKind::Treasure(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_treasure_mut(&mut self) -> Option<&mut Treasure> {
        match &mut self.kind {
            CardKind::Treasure(t) => Some(t),
            _ => None,
        }
    }

    /// Treasure value; 0 for other kinds.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.as_treasure().map_or(0, |t| t.value)
    }

    #[must_use]
    pub fn malediction_effect(&self) -> Option<MaledictionEffect> {
        match self.kind {
            CardKind::Malediction(effect) => Some(effect),
            _ => None,
        }
    }

    #[must_use]
    pub fn benediction_kind(&self) -> Option<BenedictionKind> {
        match self.kind {
            CardKind::Benediction(kind) => Some(kind),
            _ => None,
        }
    }

    #[must_use]
    pub fn benediction_effect(&self) -> Option<BenedictionEffect> {
        self.benediction_kind().map(BenedictionKind::effect)
    }

    /// Put the card back in its discard state: face-down, unlocked, printed value.
    pub fn reset_for_discard(&mut self) {
        self.hidden = true;
        self.locked = false;
        if let Some(t) = self.as_treasure_mut() {
            t.value = t.default_value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_treasure_instance() {
        let card = CardInstance::treasure(EntityId(1), 4, TreasureSubtype::B, Zone::Pile);

        assert!(card.is_treasure());
        assert!(card.hidden);
        assert!(!card.locked);
        assert_eq!(card.value(), 4);
        assert_eq!(card.as_treasure().unwrap().default_value, 4);
        assert_eq!(card.malediction_effect(), None);
    }

    #[test]
    fn test_non_treasure_value_is_zero() {
        let curse = CardInstance::malediction(EntityId(2), MaledictionEffect::PastEcho, Zone::Pile);
        let blessing =
            CardInstance::benediction(EntityId(3), BenedictionKind::ProtectionI, Zone::BenedictionPile);

        assert_eq!(curse.value(), 0);
        assert_eq!(curse.malediction_effect(), Some(MaledictionEffect::PastEcho));
        assert_eq!(blessing.value(), 0);
        assert_eq!(blessing.benediction_effect(), Some(BenedictionEffect::Protection));
    }

    #[test]
    fn test_reset_for_discard() {
        let mut card = CardInstance::treasure(EntityId(1), 5, TreasureSubtype::M, Zone::Hand);
        card.hidden = false;
        card.locked = true;
        card.as_treasure_mut().unwrap().value = 0;

        card.reset_for_discard();

        assert!(card.hidden);
        assert!(!card.locked);
        assert_eq!(card.value(), 5);
    }

    #[test]
    fn test_card_instance_serialization() {
        let card = CardInstance::treasure(EntityId(10), 2, TreasureSubtype::M, Zone::Hand);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
