//! Scripted board layouts.
//!
//! A `Layout` describes a mid-game position exactly: the pile (bottom to
//! top), hand, discard pile, benediction slots, credit and mode. Games
//! built from a layout skip the opening deal and refill. Scenario tests
//! and replays of interesting positions use them.

use crate::cards::{BenedictionKind, CardInstance, MaledictionEffect, TreasureSubtype};
use crate::core::{GameState, Mode};
use crate::error::SetupError;
use crate::rules::CreditLedger;
use crate::zones::Zone;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SpecKind {
    Treasure { value: i32, subtype: TreasureSubtype },
    Malediction(MaledictionEffect),
}

/// A treasure or malediction card of a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardSpec {
    kind: SpecKind,
    hidden: bool,
    locked: bool,
}

impl CardSpec {
    #[must_use]
    pub fn treasure(value: i32, subtype: TreasureSubtype) -> Self {
        Self {
            kind: SpecKind::Treasure { value, subtype },
            hidden: false,
            locked: false,
        }
    }

    #[must_use]
    pub fn malediction(effect: MaledictionEffect) -> Self {
        Self {
            kind: SpecKind::Malediction(effect),
            hidden: false,
            locked: false,
        }
    }

    /// Face-down in the hand.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Locked in the hand.
    #[must_use]
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    fn is_treasure(&self) -> bool {
        matches!(self.kind, SpecKind::Treasure { .. })
    }

    fn negative_value(&self) -> Option<i32> {
        match self.kind {
            SpecKind::Treasure { value, .. } if value < 0 => Some(value),
            _ => None,
        }
    }

    fn instantiate(&self, state: &mut GameState, zone: Zone) -> CardInstance {
        let id = state.cards.alloc_id();
        match self.kind {
            SpecKind::Treasure { value, subtype } => CardInstance::treasure(id, value, subtype, zone),
            SpecKind::Malediction(effect) => CardInstance::malediction(id, effect, zone),
        }
    }
}

/// A complete scripted position.
///
/// ```
/// use cursed_hoard::cards::{BenedictionKind, TreasureSubtype};
/// use cursed_hoard::core::ScriptedRng;
/// use cursed_hoard::game::{CardSpec, GameBuilder, Layout};
///
/// let layout = Layout::new()
///     .pile([CardSpec::treasure(4, TreasureSubtype::M)])
///     .hand([CardSpec::treasure(2, TreasureSubtype::B)])
///     .benedictions([BenedictionKind::ProtectionII])
///     .credit(1);
/// let game = GameBuilder::new().rng(ScriptedRng::default()).layout(layout).build().unwrap();
///
/// assert_eq!(game.hand_sum(), 2);
/// assert_eq!(game.credit(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pile: Vec<CardSpec>,
    hand: Vec<CardSpec>,
    discard: Vec<CardSpec>,
    benedictions: Vec<BenedictionKind>,
    benediction_pile: Option<BenedictionKind>,
    credit: u8,
    mode: Mode,
    malediction: Option<MaledictionEffect>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            pile: Vec::new(),
            hand: Vec::new(),
            discard: Vec::new(),
            benedictions: Vec::new(),
            benediction_pile: None,
            credit: 0,
            mode: Mode::Draw,
            malediction: None,
        }
    }
}

impl Layout {
    /// Empty board in `Draw` mode with no credit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pile cards, bottom to top.
    #[must_use]
    pub fn pile(mut self, cards: impl IntoIterator<Item = CardSpec>) -> Self {
        self.pile = cards.into_iter().collect();
        self
    }

    #[must_use]
    pub fn hand(mut self, cards: impl IntoIterator<Item = CardSpec>) -> Self {
        self.hand = cards.into_iter().collect();
        self
    }

    /// Discard pile, oldest first.
    #[must_use]
    pub fn discard(mut self, cards: impl IntoIterator<Item = CardSpec>) -> Self {
        self.discard = cards.into_iter().collect();
        self
    }

    /// Benediction slots from slot 0; remaining slots stay empty.
    #[must_use]
    pub fn benedictions(mut self, kinds: impl IntoIterator<Item = BenedictionKind>) -> Self {
        self.benedictions = kinds.into_iter().collect();
        self
    }

    /// The face-down benediction claimed by the next refill. Drawn from
    /// the catalog when not given.
    #[must_use]
    pub fn benediction_pile(mut self, kind: BenedictionKind) -> Self {
        self.benediction_pile = Some(kind);
        self
    }

    #[must_use]
    pub fn credit(mut self, credit: u8) -> Self {
        self.credit = credit;
        self
    }

    /// Opening mode: `Discard` or `Draw`. Choose modes need a pending
    /// benediction and cannot be scripted.
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Start with an active malediction, in `PlayMalediction` mode.
    #[must_use]
    pub fn malediction(mut self, effect: MaledictionEffect) -> Self {
        self.malediction = Some(effect);
        self.mode = Mode::PlayMalediction;
        self
    }

    #[must_use]
    pub fn has_benediction_pile(&self) -> bool {
        self.benediction_pile.is_some()
    }

    /// Check the layout against a configuration.
    pub fn validate(&self, state: &GameState) -> Result<(), SetupError> {
        if !self.hand.iter().all(CardSpec::is_treasure) {
            return Err(SetupError::NonTreasureInHand);
        }
        let negative = self
            .pile
            .iter()
            .chain(&self.hand)
            .chain(&self.discard)
            .find_map(CardSpec::negative_value);
        if let Some(value) = negative {
            return Err(SetupError::NegativeTreasureValue(value));
        }
        let capacity = state.config.benediction_slots;
        if self.benedictions.len() > capacity {
            return Err(SetupError::TooManySlots {
                given: self.benedictions.len(),
                capacity,
            });
        }
        let mut seen = Vec::new();
        for kind in self.benedictions.iter().chain(&self.benediction_pile) {
            let effect = kind.effect();
            if seen.contains(&effect) {
                return Err(SetupError::DuplicateBenedictionEffect(effect));
            }
            seen.push(effect);
        }
        if self.credit > state.config.max_credit {
            return Err(SetupError::CreditAboveCap {
                credit: self.credit,
                max: state.config.max_credit,
            });
        }
        if self.mode.is_choosing() {
            return Err(SetupError::UnscriptableMode(self.mode));
        }
        if (self.mode == Mode::PlayMalediction) != self.malediction.is_some() {
            return Err(SetupError::MaledictionModeMismatch);
        }
        Ok(())
    }

    /// Place the layout into an empty state.
    pub fn apply(&self, state: &mut GameState) -> Result<(), SetupError> {
        self.validate(state)?;

        for spec in &self.pile {
            let card = spec.instantiate(state, Zone::Pile);
            state.add_card(card);
        }
        for spec in &self.hand {
            let mut card = spec.instantiate(state, Zone::Hand);
            card.hidden = spec.hidden;
            card.locked = spec.locked;
            state.add_card(card);
        }
        for spec in &self.discard {
            let card = spec.instantiate(state, Zone::Discard);
            state.add_card(card);
        }
        if let Some(effect) = self.malediction {
            let id = state.cards.alloc_id();
            let mut card = CardInstance::malediction(id, effect, Zone::Malediction);
            card.hidden = false;
            state.add_card(card);
        }
        for (slot, &kind) in self.benedictions.iter().enumerate() {
            let id = state.cards.alloc_id();
            let mut card = CardInstance::benediction(id, kind, Zone::BenedictionHand);
            card.hidden = false;
            state.add_card_to_slot(card, slot);
        }
        if let Some(kind) = self.benediction_pile {
            let id = state.cards.alloc_id();
            state.add_card(CardInstance::benediction(id, kind, Zone::BenedictionPile));
        }

        state.credit = CreditLedger::new(self.credit, state.config.max_credit);
        state.mode = self.mode;
        Ok(())
    }
}
