//! # cursed-hoard
//!
//! Rules engine for a single-player card game: clear a pile of treasure
//! cards before the visible value of the hand reaches 13, while
//! maledictions sabotage the hand and benedictions push back.
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: only the engine mutates state. Collaborators read
//!    queries or a `Snapshot` and listen to `GameEvent`s.
//!
//! 2. **Explicit Mode Gate**: every command is checked against the current
//!    `Mode`; rejected commands return an `ActionError` and change nothing.
//!
//! 3. **Suspend, Don't Block**: benedictions that need a card pick leave a
//!    `PendingChoice` and resume on `submit_choice`.
//!
//! 4. **Injected Randomness**: shuffles, weighted benediction draws and
//!    uniform picks all go through a `RandomSource`.
//!
//! ## Modules
//!
//! - `core`: entity IDs, RNG, configuration, actions, mode, state
//! - `zones`: card locations (pile, hand, discard, slots, ...)
//! - `cards`: card definitions, instances and registry
//! - `supply`: opening deal and the weighted benediction catalog
//! - `effects`: choice continuations and the effect handlers
//! - `rules`: `RulesEngine`, credit ledger, end conditions
//! - `events`: notifications for the presentation layer
//! - `game`: the `Game` engine, builder, layouts, snapshots

pub mod core;
pub mod zones;
pub mod cards;
pub mod supply;
pub mod effects;
pub mod rules;
pub mod events;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    EntityId,
    GameRng, RandomSource, ScriptedRng,
    GameConfig,
    Action, ActionRecord,
    Mode, GameState,
};

pub use crate::zones::{Zone, ZoneManager};

pub use crate::cards::{
    BenedictionEffect, BenedictionKind, CardInstance, CardKind, CardRegistry,
    MaledictionEffect, Treasure, TreasureSubtype,
};

pub use crate::supply::BenedictionCatalog;

pub use crate::effects::{ChoiceDomain, ChoiceKind, PendingChoice};

pub use crate::rules::{CreditLedger, GameResult, RulesEngine};

pub use crate::events::{EventLog, EventSink, GameEvent};

pub use crate::game::{CardSpec, Game, GameBuilder, Layout, Snapshot};

pub use crate::error::{ActionError, SetupError, SnapshotError};
