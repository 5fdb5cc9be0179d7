//! Benediction handlers.
//!
//! Playing a benediction either resolves at once (13th-talisman) or opens
//! a `PendingChoice` and waits. Once resolved, the benediction is
//! discarded, the slots are refilled and play returns to `Draw`, except
//! when future-vision keeps a malediction, which is revealed instead.
//!
//! Second-wind is never played; it is consumed by the last-chance check.

use super::choice::{ChoiceKind, PendingChoice};
use super::targeting::{DrawFace, DrawFilter};
use crate::cards::{BenedictionEffect, CardKind};
use crate::core::{EntityId, Mode};
use crate::events::{EventSink, GameEvent};
use crate::game::Game;
use crate::zones::Zone;

impl<S: EventSink> Game<S> {
    /// Start a validated benediction play.
    pub(crate) fn play_benediction_effect(&mut self, card: EntityId) {
        let kind = self
            .state
            .card(card)
            .benediction_kind()
            .unwrap_or_else(|| panic!("{} is not a benediction", card));

        match kind.effect() {
            BenedictionEffect::Evasion => self.open_choice(card, ChoiceKind::Evasion),
            BenedictionEffect::Protection => {
                let magnitude = kind.magnitude().unwrap_or(1);
                self.open_choice(card, ChoiceKind::Protection { magnitude });
            }
            BenedictionEffect::LuckySwitch => self.open_choice(card, ChoiceKind::LuckySwitch),
            BenedictionEffect::FutureVision => {
                let preview = self
                    .state
                    .zones
                    .top_cards(Zone::Pile, self.state.config.preview_size);
                for id in preview {
                    self.state.card_mut(id).hidden = false;
                    self.move_card(id, Zone::Preview);
                }
                self.open_choice(card, ChoiceKind::FutureVision);
            }
            BenedictionEffect::ThirteenthTalisman => {
                if let Some(curse) = self.state.current_malediction() {
                    self.discard(curse, false);
                } else {
                    self.adjust_credit(2);
                }
                self.finish_benediction(card);
            }
            BenedictionEffect::SecondWind => {
                unreachable!("second-wind is rejected before play")
            }
        }
    }

    fn open_choice(&mut self, card: EntityId, kind: ChoiceKind) {
        let domain = kind.domain();
        let candidates = domain.candidates(&self.state, card);
        self.state.pending = Some(PendingChoice::new(card, kind, candidates));
        self.set_mode(domain.mode());
    }

    /// Resume the pending benediction with a validated pick.
    pub(crate) fn resume_choice(&mut self, chosen: EntityId) {
        let pending = self
            .state
            .pending
            .take()
            .unwrap_or_else(|| panic!("no pending choice to resume"));
        let source = pending.benediction;

        match pending.kind {
            ChoiceKind::Evasion => {
                self.set_value(chosen, 0);
                self.discard(chosen, true);
            }
            ChoiceKind::Protection { magnitude } => {
                let lowered = self.state.card(chosen).value() - magnitude;
                if lowered <= 0 {
                    self.set_value(chosen, 0);
                    self.discard(chosen, true);
                } else {
                    self.set_value(chosen, lowered);
                }
            }
            ChoiceKind::LuckySwitch => self.lucky_switch(chosen),
            ChoiceKind::FutureVision => {
                if self.keep_preview(chosen) {
                    // Kept a malediction: it takes over from the benediction.
                    self.discard(source, false);
                    self.refill_benedictions();
                    self.reveal_malediction(chosen);
                    return;
                }
            }
        }
        self.finish_benediction(source);
    }

    fn lucky_switch(&mut self, chosen: EntityId) {
        match self.state.card(chosen).kind {
            CardKind::Treasure(treasure) => {
                self.discard(chosen, false);
                self.draw_card(DrawFilter::Subtype(treasure.subtype), DrawFace::VISIBLE);
            }
            CardKind::Benediction(_) => {
                self.discard(chosen, false);
                self.adjust_credit(1);
                self.draw_benediction();
            }
            CardKind::Malediction(_) => unreachable!("{} cannot be a lucky-switch target", chosen),
        }
    }

    /// Keep one preview card and discard the rest without credit.
    ///
    /// Returns `true` when the kept card is a malediction, which the caller
    /// reveals after the benediction is gone.
    fn keep_preview(&mut self, chosen: EntityId) -> bool {
        let rest: Vec<EntityId> = self
            .state
            .preview()
            .iter()
            .copied()
            .filter(|&id| id != chosen)
            .collect();
        for id in rest {
            self.discard(id, false);
        }
        if self.state.card(chosen).is_malediction() {
            return true;
        }
        self.move_card(chosen, Zone::Hand);
        false
    }

    fn finish_benediction(&mut self, card: EntityId) {
        self.discard(card, false);
        self.refill_benedictions();
        self.set_mode(Mode::Draw);
    }

    /// Spend a held second-wind to wipe the board.
    ///
    /// Every benediction-hand card, then every hand card, is discarded with
    /// the normal credit rule; credit is then reset and the slots refilled.
    /// Returns `false` when no second-wind is held.
    pub(crate) fn activate_last_chance(&mut self) -> bool {
        let Some(card) = self.state.find_benediction(BenedictionEffect::SecondWind) else {
            return false;
        };
        self.emit(GameEvent::LastChanceActivated { card });

        let slots: Vec<EntityId> = self.state.zones.slot_cards().collect();
        let hand = self.state.hand().to_vec();
        for id in slots.into_iter().chain(hand) {
            self.discard(id, true);
        }
        self.set_credit(self.state.config.last_chance_credit);
        self.refill_benedictions();
        true
    }
}
