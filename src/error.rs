//! Error types.
//!
//! Rejected commands return an `ActionError` and leave the game untouched;
//! the caller may retry once the mode allows the command. Broken engine
//! invariants are not errors: they panic.

use thiserror::Error;

use crate::cards::BenedictionEffect;
use crate::core::{Action, EntityId, Mode};

/// Why a command was not accepted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{} is not accepted in mode {mode}", .action.name())]
    WrongMode { action: Action, mode: Mode },
    #[error("the game is over")]
    GameOver,
    #[error("unknown card {0}")]
    UnknownCard(EntityId),
    #[error("{0} is not in the hand")]
    NotInHand(EntityId),
    #[error("{0} is locked")]
    Locked(EntityId),
    #[error("{0} is not in the benediction hand")]
    NotInBenedictionHand(EntityId),
    #[error("{} cannot be played directly", .0.as_str())]
    NotPlayable(BenedictionEffect),
    #[error("only the 13th-talisman can be played while a malediction is active")]
    MaledictionActive,
    #[error("no unlocked card in hand to target")]
    NoTarget,
    #[error("the pile is empty")]
    EmptyPile,
    #[error("{0} is not a legal choice")]
    NotInChoiceDomain(EntityId),
    #[error("no malediction is active")]
    NoMalediction,
}

/// Problems with a configuration or scripted layout.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("opening hand needs {requested} treasures but the pool holds {available}")]
    HandExceedsTreasurePool { requested: usize, available: usize },
    #[error("credit {credit} is above the cap of {max}")]
    CreditAboveCap { credit: u8, max: u8 },
    #[error("at least one benediction slot is required")]
    NoBenedictionSlots,
    #[error("layout uses {given} benediction slots but the game has {capacity}")]
    TooManySlots { given: usize, capacity: usize },
    #[error("the hand may only hold treasure cards")]
    NonTreasureInHand,
    #[error("treasure value {0} is negative")]
    NegativeTreasureValue(i32),
    #[error("benediction effect {} appears twice in the benediction hand", .0.as_str())]
    DuplicateBenedictionEffect(BenedictionEffect),
    #[error("layout mode {0} needs a pending choice and cannot be scripted")]
    UnscriptableMode(Mode),
    #[error("an active malediction requires mode play-malediction and vice versa")]
    MaledictionModeMismatch,
}

/// Snapshot encoding or decoding failure.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}
