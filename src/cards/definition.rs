//! Card definitions - the fixed rule tables.
//!
//! Treasure values are instance data; everything else about a card is
//! fixed by its kind:
//! - `TreasureSubtype`: alternating flavour, matched by lucky-switch.
//! - `MaledictionEffect`: the seven hostile effects, one card each.
//! - `BenedictionKind`: the eight catalog entries, each with an effect,
//!   a draw weight, and an optional magnitude.

use serde::{Deserialize, Serialize};

/// Treasure flavour. Sets alternate `type-m`, `type-b`, `type-m`, ...
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreasureSubtype {
    #[serde(rename = "type-m")]
    M,
    #[serde(rename = "type-b")]
    B,
}

impl TreasureSubtype {
    /// Subtype of the treasure set at `set_index`.
    #[must_use]
    pub fn for_set(set_index: usize) -> Self {
        if set_index % 2 == 0 {
            TreasureSubtype::M
        } else {
            TreasureSubtype::B
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TreasureSubtype::M => "type-m",
            TreasureSubtype::B => "type-b",
        }
    }
}

/// The seven malediction effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaledictionEffect {
    /// Draw a face-down treasure into the hand.
    PastWeight,
    /// +2 on one random hand card.
    GrowingShadow,
    /// Draw a locked treasure into the hand.
    UnavoidablePain,
    /// Every 3 in the hand becomes a 4.
    #[serde(rename = "13th-rage")]
    ThirteenthRage,
    /// Replace one random hand card.
    FalseHope,
    /// Halve one random hand card; replace it if it reaches 0.
    DestinyFracture,
    /// Return a random treasure from the discard pile.
    PastEcho,
}

impl MaledictionEffect {
    /// Every malediction, in deck-building order.
    pub const ALL: [MaledictionEffect; 7] = [
        MaledictionEffect::PastWeight,
        MaledictionEffect::GrowingShadow,
        MaledictionEffect::UnavoidablePain,
        MaledictionEffect::ThirteenthRage,
        MaledictionEffect::FalseHope,
        MaledictionEffect::DestinyFracture,
        MaledictionEffect::PastEcho,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MaledictionEffect::PastWeight => "past-weight",
            MaledictionEffect::GrowingShadow => "growing-shadow",
            MaledictionEffect::UnavoidablePain => "unavoidable-pain",
            MaledictionEffect::ThirteenthRage => "13th-rage",
            MaledictionEffect::FalseHope => "false-hope",
            MaledictionEffect::DestinyFracture => "destiny-fracture",
            MaledictionEffect::PastEcho => "past-echo",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MaledictionEffect::PastWeight => "Weight of the Past",
            MaledictionEffect::GrowingShadow => "Growing Shadow",
            MaledictionEffect::UnavoidablePain => "Unavoidable Pain",
            MaledictionEffect::ThirteenthRage => "Rage of the Thirteenth",
            MaledictionEffect::FalseHope => "False Hope",
            MaledictionEffect::DestinyFracture => "Fracture of Destiny",
            MaledictionEffect::PastEcho => "Echo of the Past",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            MaledictionEffect::PastWeight => "Add a hidden treasure card to your hand",
            MaledictionEffect::GrowingShadow => "Add 2 to one of your treasure cards",
            MaledictionEffect::UnavoidablePain => "Add a locked treasure card to your hand",
            MaledictionEffect::ThirteenthRage => "Add 1 to every card with value 3",
            MaledictionEffect::FalseHope => {
                "Replace a random card of your hand with a card from the pile"
            }
            MaledictionEffect::DestinyFracture => {
                "Halve a treasure card; if it drops to 0, replace it with a card from the pile"
            }
            MaledictionEffect::PastEcho => {
                "Return a random treasure card from the discard pile to your hand"
            }
        }
    }
}

/// Benediction effects. Several catalog entries may share one effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BenedictionEffect {
    Evasion,
    Protection,
    LuckySwitch,
    FutureVision,
    SecondWind,
    #[serde(rename = "13th-talisman")]
    ThirteenthTalisman,
}

impl BenedictionEffect {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BenedictionEffect::Evasion => "evasion",
            BenedictionEffect::Protection => "protection",
            BenedictionEffect::LuckySwitch => "lucky-switch",
            BenedictionEffect::FutureVision => "future-vision",
            BenedictionEffect::SecondWind => "second-wind",
            BenedictionEffect::ThirteenthTalisman => "13th-talisman",
        }
    }

    /// Needs an unlocked hand card to be played.
    #[must_use]
    pub fn needs_hand_target(self) -> bool {
        !matches!(
            self,
            BenedictionEffect::FutureVision | BenedictionEffect::ThirteenthTalisman
        )
    }
}

/// One entry of the benediction catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BenedictionKind {
    Evasion,
    ProtectionI,
    ProtectionII,
    ProtectionIII,
    LuckySwitch,
    FutureVision,
    SecondWind,
    ThirteenthTalisman,
}

/// Static data of a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenedictionDefinition {
    pub kind: BenedictionKind,
    pub name: &'static str,
    pub description: &'static str,
    pub effect: BenedictionEffect,
    /// Relative draw weight.
    pub weight: u32,
    /// Strength of graded effects (protection).
    pub magnitude: Option<i32>,
}

impl BenedictionKind {
    /// Catalog order. Weighted draws walk this order.
    pub const ALL: [BenedictionKind; 8] = [
        BenedictionKind::Evasion,
        BenedictionKind::ProtectionI,
        BenedictionKind::ProtectionII,
        BenedictionKind::ProtectionIII,
        BenedictionKind::LuckySwitch,
        BenedictionKind::FutureVision,
        BenedictionKind::SecondWind,
        BenedictionKind::ThirteenthTalisman,
    ];

    #[must_use]
    pub fn definition(self) -> BenedictionDefinition {
        let (name, description, effect, weight, magnitude) = match self {
            BenedictionKind::Evasion => (
                "Evasion",
                "Lower the value of a card to 0",
                BenedictionEffect::Evasion,
                3,
                None,
            ),
            BenedictionKind::ProtectionI => (
                "Protection I",
                "Lower a chosen card by 1. If it reaches 0, the card is discarded",
                BenedictionEffect::Protection,
                15,
                Some(1),
            ),
            BenedictionKind::ProtectionII => (
                "Protection II",
                "Lower a chosen card by 2. If it reaches 0, the card is discarded",
                BenedictionEffect::Protection,
                12,
                Some(2),
            ),
            BenedictionKind::ProtectionIII => (
                "Protection III",
                "Lower a chosen card by 3. If it reaches 0, the card is discarded",
                BenedictionEffect::Protection,
                8,
                Some(3),
            ),
            BenedictionKind::LuckySwitch => (
                "Lucky Switch",
                "Replace a card of your hand with a card of the same type",
                BenedictionEffect::LuckySwitch,
                10,
                None,
            ),
            BenedictionKind::FutureVision => (
                "Future Vision",
                "Reveal the top 3 cards of the pile, keep 1 and discard 2",
                BenedictionEffect::FutureVision,
                2,
                None,
            ),
            BenedictionKind::SecondWind => (
                "Second Wind",
                "Saves you from defeat, but removes all your cards and credits",
                BenedictionEffect::SecondWind,
                1,
                None,
            ),
            BenedictionKind::ThirteenthTalisman => (
                "13th Talisman",
                "Cancel a malediction card or discard it to gain 2 credits",
                BenedictionEffect::ThirteenthTalisman,
                4,
                None,
            ),
        };
        BenedictionDefinition {
            kind: self,
            name,
            description,
            effect,
            weight,
            magnitude,
        }
    }

    #[must_use]
    pub fn effect(self) -> BenedictionEffect {
        self.definition().effect
    }

    #[must_use]
    pub fn magnitude(self) -> Option<i32> {
        self.definition().magnitude
    }
}
