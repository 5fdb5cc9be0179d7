//! Game state.
//!
//! `GameState` holds everything the rules mutate:
//! - Card registry and zone manager (all collections)
//! - Credit ledger and current mode
//! - The pending choice of a suspended benediction, if any
//! - Terminal result, action history, RNG
//!
//! Only the engine writes to it. Collaborators read through `Game`'s
//! query methods or a `Snapshot`.

use im::Vector;

use super::action::ActionRecord;
use super::config::GameConfig;
use super::entity::EntityId;
use super::mode::Mode;
use super::rng::RandomSource;
use crate::cards::{BenedictionEffect, CardInstance, CardRegistry};
use crate::effects::PendingChoice;
use crate::rules::{CreditLedger, GameResult};
use crate::zones::{Zone, ZoneManager};

/// Full game state.
#[derive(Debug)]
pub struct GameState {
    pub config: GameConfig,

    /// Every card of the game.
    pub cards: CardRegistry,

    /// Card locations.
    pub zones: ZoneManager,

    pub credit: CreditLedger,

    pub mode: Mode,

    /// Suspended benediction awaiting `submit_choice`.
    pub pending: Option<PendingChoice>,

    /// Set once the game is won or lost.
    pub result: Option<GameResult>,

    /// Accepted actions, in order.
    pub history: Vector<ActionRecord>,

    /// Randomness for every chance element.
    pub rng: Box<dyn RandomSource>,
}

impl GameState {
    /// Create an empty state: no cards, empty slots, `Discard` mode.
    #[must_use]
    pub fn new(config: GameConfig, rng: Box<dyn RandomSource>) -> Self {
        let zones = ZoneManager::new(config.benediction_slots);
        let credit = CreditLedger::new(config.initial_credit, config.max_credit);
        Self {
            config,
            cards: CardRegistry::new(),
            zones,
            credit,
            mode: Mode::Discard,
            pending: None,
            result: None,
            history: Vector::new(),
            rng,
        }
    }

    // === Card Management ===

    /// Register a card and place it in its zone.
    ///
    /// The benediction hand is filled through slots; use
    /// [`add_card_to_slot`](Self::add_card_to_slot) for it.
    pub fn add_card(&mut self, card: CardInstance) {
        let entity_id = card.entity_id;
        let zone = card.zone;
        self.cards.register(card);
        self.zones.add_to_zone(entity_id, zone);
    }

    /// Register a benediction card directly into a slot.
    pub fn add_card_to_slot(&mut self, mut card: CardInstance, slot: usize) {
        let entity_id = card.entity_id;
        card.zone = Zone::BenedictionHand;
        self.cards.register(card);
        self.zones.add_to_slot(entity_id, slot);
    }

    #[must_use]
    pub fn card(&self, id: EntityId) -> &CardInstance {
        self.cards.get_unchecked(id)
    }

    pub fn card_mut(&mut self, id: EntityId) -> &mut CardInstance {
        self.cards.get_mut_unchecked(id)
    }

    // === Collections ===

    #[must_use]
    pub fn pile(&self) -> &[EntityId] {
        self.zones.cards_in_zone_ordered(Zone::Pile)
    }

    #[must_use]
    pub fn hand(&self) -> &[EntityId] {
        self.zones.cards_in_zone_ordered(Zone::Hand)
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[EntityId] {
        self.zones.cards_in_zone_ordered(Zone::Discard)
    }

    #[must_use]
    pub fn benediction_hand(&self) -> &[Option<EntityId>] {
        self.zones.slots()
    }

    /// The face-down benediction waiting to be claimed.
    #[must_use]
    pub fn benediction_pile(&self) -> Option<EntityId> {
        self.zones.top_card(Zone::BenedictionPile)
    }

    /// The revealed, unresolved malediction.
    #[must_use]
    pub fn current_malediction(&self) -> Option<EntityId> {
        self.zones.top_card(Zone::Malediction)
    }

    #[must_use]
    pub fn preview(&self) -> &[EntityId] {
        self.zones.cards_in_zone_ordered(Zone::Preview)
    }

    // === Derived Values ===

    /// Sum of all hand values, hidden cards included.
    #[must_use]
    pub fn hand_sum(&self) -> i32 {
        self.hand().iter().map(|&id| self.card(id).value()).sum()
    }

    /// Sum of face-up hand values; hidden cards count as 0.
    #[must_use]
    pub fn visible_hand_sum(&self) -> i32 {
        self.hand()
            .iter()
            .map(|&id| self.card(id))
            .filter(|card| !card.hidden)
            .map(CardInstance::value)
            .sum()
    }

    /// Hand cards the player may target.
    #[must_use]
    pub fn unlocked_hand(&self) -> Vec<EntityId> {
        self.hand()
            .iter()
            .copied()
            .filter(|&id| !self.card(id).locked)
            .collect()
    }

    /// Effects currently held in the benediction hand.
    #[must_use]
    pub fn held_effects(&self) -> Vec<BenedictionEffect> {
        self.zones
            .slot_cards()
            .filter_map(|id| self.card(id).benediction_effect())
            .collect()
    }

    /// Slot holding a benediction with `effect`.
    #[must_use]
    pub fn find_benediction(&self, effect: BenedictionEffect) -> Option<EntityId> {
        self.zones
            .slot_cards()
            .find(|&id| self.card(id).benediction_effect() == Some(effect))
    }

    // === History ===

    /// Record an accepted action.
    pub fn record_action(&mut self, action: super::action::Action) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(action, sequence));
    }
}
