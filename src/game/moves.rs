//! Primitive state changes.
//!
//! Every mutation of a collection, value, credit or mode goes through one
//! of these methods so the matching `GameEvent` is always emitted. Effect
//! handlers compose them; nothing else touches `GameState` directly.
//!
//! The ids passed here come from the engine's own collections; a missing
//! card is a broken invariant and panics.

use super::Game;
use crate::cards::{CardInstance, TreasureSubtype};
use crate::core::{EntityId, Mode};
use crate::effects::{DrawFace, DrawFilter};
use crate::events::{EventSink, GameEvent};
use crate::zones::Zone;

impl<S: EventSink> Game<S> {
    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.emit(event);
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        let old = self.state.mode;
        if old != mode {
            self.state.mode = mode;
            self.emit(GameEvent::ModeChanged { old, new: mode });
        }
    }

    pub(crate) fn adjust_credit(&mut self, delta: i32) {
        if let Some((old, new)) = self.state.credit.adjust(delta) {
            self.emit(GameEvent::CreditChanged { old, new });
        }
    }

    pub(crate) fn set_credit(&mut self, value: u8) {
        if let Some((old, new)) = self.state.credit.set(value) {
            self.emit(GameEvent::CreditChanged { old, new });
        }
    }

    /// Move a card to an ordered zone (on top).
    pub(crate) fn move_card(&mut self, card: EntityId, to: Zone) {
        let from = self
            .state
            .zones
            .move_to_zone(card, to)
            .unwrap_or_else(|| panic!("{} is not in any zone", card));
        self.state.card_mut(card).zone = to;
        self.emit(GameEvent::CardMoved {
            card,
            from: Some(from),
            to,
        });
    }

    /// Set a treasure's value, floored at 0.
    pub(crate) fn set_value(&mut self, card: EntityId, value: i32) {
        let new = value.max(0);
        let treasure = self
            .state
            .card_mut(card)
            .as_treasure_mut()
            .unwrap_or_else(|| panic!("{} is not a treasure", card));
        let old = treasure.value;
        treasure.value = new;
        if old != new {
            self.emit(GameEvent::CardValueChanged { card, old, new });
        }
    }

    /// Discard a card, resetting its face and value.
    ///
    /// With `award_credit`, a treasure of subtype `type-b` or with a value
    /// of 0 or less grants +1 credit. Other kinds never do.
    pub(crate) fn discard(&mut self, card: EntityId, award_credit: bool) {
        let earns = award_credit && earns_credit(self.state.card(card));
        self.state.card_mut(card).reset_for_discard();
        self.move_card(card, Zone::Discard);
        if earns {
            self.adjust_credit(1);
        }
    }

    /// Put a malediction in the active slot and block play.
    pub(crate) fn reveal_malediction(&mut self, card: EntityId) {
        self.state.card_mut(card).hidden = false;
        self.move_card(card, Zone::Malediction);
        self.emit(GameEvent::MaledictionRevealed { card });
        self.set_mode(Mode::PlayMalediction);
    }

    /// Draw from the pile.
    ///
    /// Treasures enter the hand with `face`; a malediction (only reachable
    /// through `DrawFilter::Top`) is revealed instead.
    pub(crate) fn draw_card(&mut self, filter: DrawFilter, face: DrawFace) {
        let Some(card) = filter.select(&self.state) else {
            return;
        };
        if self.state.card(card).is_malediction() {
            self.reveal_malediction(card);
            return;
        }
        let instance = self.state.card_mut(card);
        instance.hidden = face.hidden;
        instance.locked = face.locked;
        self.move_card(card, Zone::Hand);
    }

    /// Create the next face-down benediction, excluding held effects.
    pub(crate) fn generate_benediction_pile(&mut self) {
        let excluded = self.state.held_effects();
        let kind = self.catalog.draw(&excluded, self.state.rng.as_mut());
        let id = self.state.cards.alloc_id();
        self.state
            .add_card(CardInstance::benediction(id, kind, Zone::BenedictionPile));
        self.emit(GameEvent::CardMoved {
            card: id,
            from: None,
            to: Zone::BenedictionPile,
        });
    }

    /// Claim the benediction pile card into the first empty slot.
    ///
    /// Needs an empty slot and at least one credit. Returns whether a slot
    /// was filled.
    pub(crate) fn draw_benediction(&mut self) -> bool {
        let Some(slot) = self.state.zones.first_empty_slot() else {
            return false;
        };
        if !self.state.credit.can_spend() {
            return false;
        }
        let card = self
            .state
            .benediction_pile()
            .unwrap_or_else(|| panic!("benediction pile is empty"));

        self.adjust_credit(-1);
        self.state.zones.move_to_slot(card, slot);
        let instance = self.state.card_mut(card);
        instance.zone = Zone::BenedictionHand;
        instance.hidden = false;
        self.emit(GameEvent::CardMoved {
            card,
            from: Some(Zone::BenedictionPile),
            to: Zone::BenedictionHand,
        });
        self.emit(GameEvent::BenedictionRefilled { slot, card });

        self.generate_benediction_pile();
        true
    }

    /// Fill empty slots while credit lasts, one slot per step.
    pub(crate) fn refill_benedictions(&mut self) {
        for _ in 0..self.state.config.benediction_slots {
            if !self.draw_benediction() {
                break;
            }
        }
    }
}

fn earns_credit(card: &CardInstance) -> bool {
    card.as_treasure()
        .is_some_and(|t| t.subtype == TreasureSubtype::B || t.value <= 0)
}
