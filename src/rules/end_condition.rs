//! End-condition evaluation.
//!
//! Pure check over the state; the engine acts on the verdict (last chance,
//! terminal result). Evaluation only happens in settled modes: while a
//! choice is pending the hand is mid-effect.

use crate::core::{GameState, Mode};

/// Verdict of an end-condition check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndCheck {
    /// Play goes on.
    Continue,
    /// Pile cleared in `Draw` mode with no malediction pending.
    Win,
    /// Visible hand sum at or above the loss threshold.
    OverThreshold,
}

/// Evaluate the end conditions.
#[must_use]
pub fn evaluate(state: &GameState) -> EndCheck {
    if state.result.is_some() || !state.mode.is_settled() {
        return EndCheck::Continue;
    }
    if state.pile().is_empty() && state.current_malediction().is_none() && state.mode == Mode::Draw {
        return EndCheck::Win;
    }
    if is_over_threshold(state) {
        return EndCheck::OverThreshold;
    }
    EndCheck::Continue
}

/// Visible hand sum has reached the loss threshold. Hidden cards count 0.
#[must_use]
pub fn is_over_threshold(state: &GameState) -> bool {
    state.visible_hand_sum() >= state.config.loss_threshold
}
