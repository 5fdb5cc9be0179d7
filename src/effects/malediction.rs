//! Malediction handlers.
//!
//! A revealed malediction waits in the active slot until
//! `resolve_malediction`. Resolution discards it (never for credit), applies
//! its effect to the hand, refills the benediction slots and returns to
//! `Draw` unless the effect revealed a successor malediction.
//!
//! Effects with nothing to act on (empty hand, no treasure in the pile or
//! the discard pile) do nothing.

use super::targeting::{DrawFace, DrawFilter};
use crate::cards::MaledictionEffect;
use crate::core::{EntityId, Mode};
use crate::events::EventSink;
use crate::game::Game;
use crate::zones::Zone;

impl<S: EventSink> Game<S> {
    /// Resolve the active malediction.
    pub(crate) fn resolve_active_malediction(&mut self) {
        let card = self
            .state
            .current_malediction()
            .unwrap_or_else(|| panic!("no active malediction"));
        let effect = self
            .state
            .card(card)
            .malediction_effect()
            .unwrap_or_else(|| panic!("{} is not a malediction", card));

        self.discard(card, false);
        self.apply_malediction(effect);
        self.refill_benedictions();
        if self.state.current_malediction().is_none() {
            self.set_mode(Mode::Draw);
        }
    }

    fn apply_malediction(&mut self, effect: MaledictionEffect) {
        match effect {
            MaledictionEffect::PastWeight => {
                self.draw_card(DrawFilter::AnyTreasure, DrawFace::HIDDEN);
            }
            MaledictionEffect::GrowingShadow => {
                if let Some(target) = self.random_hand_card() {
                    let value = self.state.card(target).value();
                    self.set_value(target, value + 2);
                }
            }
            MaledictionEffect::UnavoidablePain => {
                self.draw_card(DrawFilter::AnyTreasure, DrawFace::LOCKED);
            }
            MaledictionEffect::ThirteenthRage => {
                let threes: Vec<EntityId> = self
                    .state
                    .hand()
                    .iter()
                    .copied()
                    .filter(|&id| self.state.card(id).value() == 3)
                    .collect();
                for id in threes {
                    self.set_value(id, 4);
                }
            }
            MaledictionEffect::FalseHope => {
                if let Some(target) = self.random_hand_card() {
                    self.discard(target, false);
                    self.draw_card(DrawFilter::AnyTreasure, DrawFace::VISIBLE);
                }
            }
            MaledictionEffect::DestinyFracture => {
                if let Some(target) = self.random_hand_card() {
                    let halved = self.state.card(target).value() / 2;
                    self.set_value(target, halved);
                    if halved == 0 {
                        self.discard(target, false);
                        self.draw_card(DrawFilter::Top, DrawFace::VISIBLE);
                    }
                }
            }
            MaledictionEffect::PastEcho => {
                let treasures: Vec<EntityId> = self
                    .state
                    .discard_pile()
                    .iter()
                    .copied()
                    .filter(|&id| self.state.card(id).is_treasure())
                    .collect();
                if let Some(index) = self.state.rng.pick_index(treasures.len()) {
                    let card = treasures[index];
                    self.state.card_mut(card).hidden = false;
                    self.move_card(card, Zone::Hand);
                }
            }
        }
    }

    /// Uniformly random hand card, locked cards included.
    fn random_hand_card(&mut self) -> Option<EntityId> {
        let len = self.state.hand().len();
        let index = self.state.rng.pick_index(len)?;
        Some(self.state.hand()[index])
    }
}
