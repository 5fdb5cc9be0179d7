//! Command surface and validation.
//!
//! Every command runs the same pipeline:
//! 1. `validate` (pure): mode gate, then card checks
//! 2. the handler, run to completion
//! 3. history record and end-condition check
//!
//! A rejected command changes nothing, not even the history.

use super::Game;
use crate::core::{Action, EntityId, GameConfig, Mode};
use crate::cards::BenedictionEffect;
use crate::effects::{DrawFace, DrawFilter};
use crate::error::ActionError;
use crate::events::{EventSink, GameEvent};
use crate::rules::end_condition::{self, EndCheck};
use crate::rules::{GameResult, RulesEngine};
use crate::zones::Zone;

impl<S: EventSink> Game<S> {
    /// Draw the top card of the pile.
    pub fn draw_from_pile(&mut self) -> Result<(), ActionError> {
        self.execute(Action::DrawFromPile)
    }

    /// Discard a hand card (opening discard).
    pub fn discard_card(&mut self, card: EntityId) -> Result<(), ActionError> {
        self.execute(Action::Discard(card))
    }

    /// Answer the pending choice.
    pub fn submit_choice(&mut self, card: EntityId) -> Result<(), ActionError> {
        self.execute(Action::SubmitChoice(card))
    }

    /// Play a benediction from the benediction hand.
    pub fn play_benediction(&mut self, card: EntityId) -> Result<(), ActionError> {
        self.execute(Action::PlayBenediction(card))
    }

    /// Let the active malediction take effect.
    pub fn resolve_malediction(&mut self) -> Result<(), ActionError> {
        self.execute(Action::ResolveMalediction)
    }

    /// Validate and apply any command.
    pub fn execute(&mut self, action: Action) -> Result<(), ActionError> {
        self.validate(action)?;

        match action {
            Action::DrawFromPile => {
                self.draw_card(DrawFilter::Top, DrawFace::VISIBLE);
            }
            Action::Discard(card) => {
                self.discard(card, true);
                self.set_mode(Mode::Draw);
            }
            Action::SubmitChoice(card) => self.resume_choice(card),
            Action::PlayBenediction(card) => self.play_benediction_effect(card),
            Action::ResolveMalediction => self.resolve_active_malediction(),
        }

        self.state.record_action(action);
        self.check_end();
        Ok(())
    }

    /// Would `action` be accepted right now?
    pub fn validate(&self, action: Action) -> Result<(), ActionError> {
        let state = &self.state;
        if state.result.is_some() {
            return Err(ActionError::GameOver);
        }
        if !state.mode.permits(&action) {
            return Err(ActionError::WrongMode {
                action,
                mode: state.mode,
            });
        }
        if let Some(card) = action.card() {
            if !state.cards.contains(card) {
                return Err(ActionError::UnknownCard(card));
            }
        }

        match action {
            Action::DrawFromPile => {
                if state.pile().is_empty() {
                    return Err(ActionError::EmptyPile);
                }
            }
            Action::Discard(card) => {
                if !state.zones.is_in_zone(card, Zone::Hand) {
                    return Err(ActionError::NotInHand(card));
                }
                if state.card(card).locked {
                    return Err(ActionError::Locked(card));
                }
            }
            Action::SubmitChoice(card) => {
                let allowed = state.pending.as_ref().is_some_and(|p| p.allows(card));
                if !allowed {
                    return Err(ActionError::NotInChoiceDomain(card));
                }
            }
            Action::PlayBenediction(card) => self.validate_play(card)?,
            Action::ResolveMalediction => {
                if state.current_malediction().is_none() {
                    return Err(ActionError::NoMalediction);
                }
            }
        }
        Ok(())
    }

    fn validate_play(&self, card: EntityId) -> Result<(), ActionError> {
        let state = &self.state;
        if !state.zones.is_in_zone(card, Zone::BenedictionHand) {
            return Err(ActionError::NotInBenedictionHand(card));
        }
        let effect = state
            .card(card)
            .benediction_effect()
            .unwrap_or_else(|| panic!("{} in benediction hand is not a benediction", card));

        if effect == BenedictionEffect::SecondWind {
            return Err(ActionError::NotPlayable(effect));
        }
        if state.mode == Mode::PlayMalediction && effect != BenedictionEffect::ThirteenthTalisman {
            return Err(ActionError::MaledictionActive);
        }
        if effect.needs_hand_target() && state.unlocked_hand().is_empty() {
            return Err(ActionError::NoTarget);
        }
        if effect == BenedictionEffect::FutureVision && state.pile().is_empty() {
            return Err(ActionError::EmptyPile);
        }
        Ok(())
    }

    /// Every command currently accepted.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.state.result.is_some() {
            return Vec::new();
        }
        let state = &self.state;
        let mut candidates = vec![Action::DrawFromPile, Action::ResolveMalediction];
        candidates.extend(state.hand().iter().map(|&id| Action::Discard(id)));
        candidates.extend(state.zones.slot_cards().map(Action::PlayBenediction));
        if let Some(pending) = &state.pending {
            candidates.extend(pending.domain.iter().map(|&id| Action::SubmitChoice(id)));
        }
        candidates
            .into_iter()
            .filter(|&action| self.validate(action).is_ok())
            .collect()
    }

    /// Run the end-condition check after a command or a scripted setup.
    pub(crate) fn check_end(&mut self) {
        match end_condition::evaluate(&self.state) {
            EndCheck::Continue => {}
            EndCheck::Win => self.end_game(GameResult::Won),
            EndCheck::OverThreshold => {
                self.activate_last_chance();
                if end_condition::is_over_threshold(&self.state) {
                    self.end_game(GameResult::Lost);
                }
            }
        }
    }

    fn end_game(&mut self, result: GameResult) {
        self.state.result = Some(result);
        self.emit(GameEvent::GameEnded { result });
    }
}

impl<S: EventSink> RulesEngine for Game<S> {
    fn config(&self) -> &GameConfig {
        &self.state.config
    }

    fn legal_actions(&self) -> Vec<Action> {
        Game::legal_actions(self)
    }

    fn apply_action(&mut self, action: Action) -> Result<(), ActionError> {
        self.execute(action)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.state.result
    }
}
