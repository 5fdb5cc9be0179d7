//! Rules engine trait.
//!
//! `RulesEngine` is the command surface seen by automated drivers
//! (playouts, property tests):
//! - What actions are legal
//! - How an action modifies the game
//! - Whether the game is over

use serde::{Deserialize, Serialize};

use crate::core::{Action, GameConfig};
use crate::error::ActionError;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The pile was cleared.
    Won,
    /// The hand reached the loss threshold with no second-wind to save it.
    Lost,
}

impl GameResult {
    #[must_use]
    pub fn is_win(self) -> bool {
        self == GameResult::Won
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Won => f.write_str("won"),
            GameResult::Lost => f.write_str("lost"),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: every command `apply_action` would accept right now;
///   empty once the game is over
/// - `apply_action`: a rejected action leaves the game untouched
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Enumerate all currently legal actions.
    fn legal_actions(&self) -> Vec<Action>;

    /// Apply an action to the game.
    fn apply_action(&mut self, action: Action) -> Result<(), ActionError>;

    /// Check if the game is over.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Play until the game ends or `max_steps` actions were applied.
    ///
    /// `choose` receives the legal actions and returns the index to play;
    /// out-of-range indices wrap.
    fn play_out<F>(&mut self, max_steps: usize, mut choose: F) -> Option<GameResult>
    where
        F: FnMut(&[Action]) -> usize,
        Self: Sized,
    {
        for _ in 0..max_steps {
            if self.is_terminal().is_some() {
                break;
            }
            let actions = self.legal_actions();
            if actions.is_empty() {
                break;
            }
            let action = actions[choose(&actions) % actions.len()];
            if self.apply_action(action).is_err() {
                break;
            }
        }
        self.is_terminal()
    }
}
