//! Game event notifications.
//!
//! The engine reports every observable state change as a `GameEvent`,
//! in the order the changes happen. A presentation layer replays them to
//! animate; tests assert on them.

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, Mode};
use crate::rules::GameResult;
use crate::zones::Zone;

/// Something observable happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card changed collection. `from` is `None` for a newly created card.
    CardMoved {
        card: EntityId,
        from: Option<Zone>,
        to: Zone,
    },
    CardValueChanged {
        card: EntityId,
        old: i32,
        new: i32,
    },
    /// A malediction left the pile and now blocks play.
    MaledictionRevealed { card: EntityId },
    /// A benediction slot was filled from the benediction pile.
    BenedictionRefilled { slot: usize, card: EntityId },
    CreditChanged { old: u8, new: u8 },
    ModeChanged { old: Mode, new: Mode },
    /// Second-wind saved the game.
    LastChanceActivated { card: EntityId },
    GameEnded { result: GameResult },
}

/// Receiver of game events.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Collecting sink.
///
/// ```
/// use cursed_hoard::events::{EventLog, EventSink, GameEvent};
///
/// let mut log = EventLog::default();
/// log.emit(GameEvent::CreditChanged { old: 0, new: 1 });
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.drain().count(), 1);
/// assert!(log.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    queue: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events not yet drained, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.queue
    }

    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.queue.drain(..)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: GameEvent) {
        self.queue.push(event);
    }
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Discards every event.
impl EventSink for () {
    fn emit(&mut self, _event: GameEvent) {}
}
