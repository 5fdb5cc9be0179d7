//! Serializable view of a game.
//!
//! A `Snapshot` carries everything the presentation layer reads: ordered
//! collections, credit, mode, the pending choice and every card's face.
//! It is a read model only; games are not restored from snapshots.

use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::{EntityId, GameState, Mode};
use crate::effects::PendingChoice;
use crate::error::SnapshotError;
use crate::rules::GameResult;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Bottom to top.
    pub pile: Vec<EntityId>,
    pub hand: Vec<EntityId>,
    pub discard_pile: Vec<EntityId>,
    pub benediction_hand: Vec<Option<EntityId>>,
    pub benediction_pile: Option<EntityId>,
    pub preview: Vec<EntityId>,
    pub credit: u8,
    pub current_malediction: Option<EntityId>,
    pub mode: Mode,
    pub hand_sum: i32,
    pub visible_hand_sum: i32,
    pub pending: Option<PendingChoice>,
    pub result: Option<GameResult>,
    /// Every card, sorted by id.
    pub cards: Vec<CardInstance>,
}

impl Snapshot {
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        let cards = state
            .cards
            .ids()
            .into_iter()
            .map(|id| state.card(id).clone())
            .collect();
        Self {
            pile: state.pile().to_vec(),
            hand: state.hand().to_vec(),
            discard_pile: state.discard_pile().to_vec(),
            benediction_hand: state.benediction_hand().to_vec(),
            benediction_pile: state.benediction_pile(),
            preview: state.preview().to_vec(),
            credit: state.credit.value(),
            current_malediction: state.current_malediction(),
            mode: state.mode,
            hand_sum: state.hand_sum(),
            visible_hand_sum: state.visible_hand_sum(),
            pending: state.pending.clone(),
            result: state.result,
            cards,
        }
    }

    /// Every card id held by some collection, sorted.
    #[must_use]
    pub fn tracked_ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self
            .pile
            .iter()
            .chain(&self.hand)
            .chain(&self.discard_pile)
            .chain(self.benediction_hand.iter().flatten())
            .chain(&self.benediction_pile)
            .chain(&self.preview)
            .chain(&self.current_malediction)
            .copied()
            .collect();
        ids.sort();
        ids
    }

    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
