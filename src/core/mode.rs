//! The action-state gate.
//!
//! The engine is always in exactly one `Mode`. The mode decides which
//! player commands are meaningful; every command handler sets the next
//! mode explicitly when it finishes.
//!
//! | mode | accepted |
//! |---|---|
//! | `Discard` | discard a hand card |
//! | `Draw` | draw from pile, play a benediction |
//! | `Choose` / `ChooseTreasure` / `ChoosePreview` | submit a choice |
//! | `PlayMalediction` | resolve the malediction, play a benediction (13th-talisman only) |

use serde::{Deserialize, Serialize};

use super::action::Action;

/// Current interaction mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Forced opening discard.
    Discard,
    /// Normal play.
    Draw,
    /// Awaiting any card (hand or benediction hand).
    Choose,
    /// Awaiting an unlocked treasure card from the hand.
    ChooseTreasure,
    /// Awaiting one of the revealed preview cards.
    ChoosePreview,
    /// A revealed malediction blocks normal play.
    PlayMalediction,
}

impl Mode {
    /// Does this mode accept the action at all?
    ///
    /// This is only the coarse gate. Handlers still validate the card
    /// referenced by the action.
    #[must_use]
    pub fn permits(self, action: &Action) -> bool {
        match self {
            Mode::Discard => matches!(action, Action::Discard(_)),
            Mode::Draw => matches!(action, Action::DrawFromPile | Action::PlayBenediction(_)),
            Mode::Choose | Mode::ChooseTreasure | Mode::ChoosePreview => {
                matches!(action, Action::SubmitChoice(_))
            }
            Mode::PlayMalediction => {
                matches!(action, Action::ResolveMalediction | Action::PlayBenediction(_))
            }
        }
    }

    /// Is the engine suspended waiting for a card pick?
    #[must_use]
    pub fn is_choosing(self) -> bool {
        matches!(self, Mode::Choose | Mode::ChooseTreasure | Mode::ChoosePreview)
    }

    /// Modes in which end conditions are evaluated.
    #[must_use]
    pub fn is_settled(self) -> bool {
        matches!(self, Mode::Draw | Mode::PlayMalediction)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mode::Discard => "discard",
            Mode::Draw => "draw",
            Mode::Choose => "choose",
            Mode::ChooseTreasure => "choose-treasure",
            Mode::ChoosePreview => "choose-preview",
            Mode::PlayMalediction => "play-malediction",
        };
        f.write_str(name)
    }
}
