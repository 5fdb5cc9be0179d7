//! The game engine.
//!
//! `Game` owns the state, the benediction catalog and the event sink. It
//! exposes three surfaces:
//! - Commands (`draw_from_pile`, `discard_card`, `submit_choice`,
//!   `play_benediction`, `resolve_malediction`), each validated against the
//!   current mode and rejected with an `ActionError` otherwise
//! - Queries over the collections, credit, mode and pending choice
//! - `GameEvent`s emitted to the sink for every change
//!
//! ## Usage
//!
//! ```
//! use cursed_hoard::core::Mode;
//! use cursed_hoard::game::GameBuilder;
//!
//! let mut game = GameBuilder::new().seed(42).build().unwrap();
//! assert_eq!(game.mode(), Mode::Discard);
//!
//! let first = game.hand()[0];
//! game.discard_card(first).unwrap();
//! assert_eq!(game.mode(), Mode::Draw);
//! assert_eq!(game.hand().len(), 2);
//! ```

mod builder;
mod commands;
mod layout;
pub(crate) mod moves;
mod snapshot;

pub use builder::GameBuilder;
pub use layout::{CardSpec, Layout};
pub use snapshot::Snapshot;

use im::Vector;

use crate::core::{ActionRecord, EntityId, GameConfig, GameState, Mode};
use crate::effects::PendingChoice;
use crate::events::{EventLog, EventSink};
use crate::rules::GameResult;
use crate::supply::BenedictionCatalog;

/// A running game.
pub struct Game<S: EventSink = EventLog> {
    pub(crate) state: GameState,
    pub(crate) catalog: BenedictionCatalog,
    pub(crate) events: S,
}

impl<S: EventSink> Game<S> {
    pub(crate) fn from_parts(state: GameState, catalog: BenedictionCatalog, events: S) -> Self {
        Self {
            state,
            catalog,
            events,
        }
    }

    /// Read-only view of the full state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    #[must_use]
    pub fn catalog(&self) -> &BenedictionCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn events(&self) -> &S {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut S {
        &mut self.events
    }

    /// Consume the game, returning the sink.
    pub fn into_events(self) -> S {
        self.events
    }

    // === Queries ===

    /// Pile, bottom to top.
    #[must_use]
    pub fn pile(&self) -> &[EntityId] {
        self.state.pile()
    }

    #[must_use]
    pub fn hand(&self) -> &[EntityId] {
        self.state.hand()
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[EntityId] {
        self.state.discard_pile()
    }

    /// Benediction slots; `None` is an empty slot.
    #[must_use]
    pub fn benediction_hand(&self) -> &[Option<EntityId>] {
        self.state.benediction_hand()
    }

    #[must_use]
    pub fn benediction_pile(&self) -> Option<EntityId> {
        self.state.benediction_pile()
    }

    #[must_use]
    pub fn credit(&self) -> u8 {
        self.state.credit.value()
    }

    #[must_use]
    pub fn current_malediction(&self) -> Option<EntityId> {
        self.state.current_malediction()
    }

    /// Cards revealed by a pending future-vision.
    #[must_use]
    pub fn preview(&self) -> &[EntityId] {
        self.state.preview()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    #[must_use]
    pub fn hand_sum(&self) -> i32 {
        self.state.hand_sum()
    }

    /// Hand sum used by the loss check (hidden cards count 0).
    #[must_use]
    pub fn visible_hand_sum(&self) -> i32 {
        self.state.visible_hand_sum()
    }

    #[must_use]
    pub fn pending_choice(&self) -> Option<&PendingChoice> {
        self.state.pending.as_ref()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        self.state.result
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.state.history
    }

    /// Capture the query surface.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }
}

impl<S: EventSink> std::fmt::Debug for Game<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}
