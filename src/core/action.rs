//! Player commands and the action history.
//!
//! An `Action` is one command from the presentation layer. Accepted
//! actions are appended to the history as `ActionRecord`s, which is the
//! engine's audit trail: replaying the records against a game built from
//! the same seed reproduces the same state.

use serde::{Deserialize, Serialize};

use super::entity::EntityId;

/// A player command.
///
/// ## Example
///
/// ```
/// use cursed_hoard::core::{Action, EntityId};
///
/// let draw = Action::DrawFromPile;
/// let discard = Action::Discard(EntityId(5));
/// assert_eq!(discard.card(), Some(EntityId(5)));
/// assert_eq!(draw.card(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw the top card of the pile.
    DrawFromPile,
    /// Discard a card from the hand (opening discard).
    Discard(EntityId),
    /// Answer the pending choice.
    SubmitChoice(EntityId),
    /// Play a benediction from the benediction hand.
    PlayBenediction(EntityId),
    /// Let the active malediction take effect.
    ResolveMalediction,
}

impl Action {
    /// The card referenced by this action, if any.
    #[must_use]
    pub fn card(&self) -> Option<EntityId> {
        match *self {
            Action::Discard(id) | Action::SubmitChoice(id) | Action::PlayBenediction(id) => Some(id),
            Action::DrawFromPile | Action::ResolveMalediction => None,
        }
    }

    /// Short name for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::DrawFromPile => "draw-from-pile",
            Action::Discard(_) => "discard",
            Action::SubmitChoice(_) => "submit-choice",
            Action::PlayBenediction(_) => "play-benediction",
            Action::ResolveMalediction => "resolve-malediction",
        }
    }
}

/// A recorded action with its position in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Sequence number (0-based, counts accepted actions only).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, sequence: u32) -> Self {
        Self { action, sequence }
    }
}
