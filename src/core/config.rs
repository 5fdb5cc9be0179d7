//! Game configuration.
//!
//! `GameConfig::default()` is the fixed rule table of the game. The builder
//! methods exist so scripted layouts and tests can describe small boards
//! (e.g. a two-set treasure pool); nothing in the engine assumes the
//! default numbers.

use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// Hand-value sum at which the game is lost.
pub const LOSS_THRESHOLD: i32 = 13;

/// Treasure cards dealt into the opening hand.
pub const INITIAL_DRAW: usize = 3;

/// Number of benediction slots.
pub const BENEDICTION_SLOTS: usize = 2;

/// Upper bound of the benediction credit counter.
pub const MAX_CREDIT: u8 = 6;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Visible hand sum that triggers last chance / loss.
    pub loss_threshold: i32,

    /// Treasure cards in the opening hand.
    pub initial_draw: usize,

    /// Benediction hand capacity.
    pub benediction_slots: usize,

    /// Credit cap (credit is clamped to `0..=max_credit`).
    pub max_credit: u8,

    /// Credit at game start (spent immediately by the opening refill).
    pub initial_credit: u8,

    /// Credit restored by the last-chance wipe.
    pub last_chance_credit: u8,

    /// Number of treasure value-sets. Sets alternate subtype `type-m`/`type-b`.
    pub treasure_sets: usize,

    /// Each set holds values `1..=max_treasure_value`.
    pub max_treasure_value: i32,

    /// Cards revealed by future-vision.
    pub preview_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            loss_threshold: LOSS_THRESHOLD,
            initial_draw: INITIAL_DRAW,
            benediction_slots: BENEDICTION_SLOTS,
            max_credit: MAX_CREDIT,
            initial_credit: 2,
            last_chance_credit: 2,
            treasure_sets: 4,
            max_treasure_value: 6,
            preview_size: 3,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of treasure sets.
    #[must_use]
    pub fn with_treasure_sets(mut self, sets: usize) -> Self {
        self.treasure_sets = sets;
        self
    }

    /// Set the highest treasure value of each set.
    #[must_use]
    pub fn with_max_treasure_value(mut self, value: i32) -> Self {
        self.max_treasure_value = value;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_initial_draw(mut self, count: usize) -> Self {
        self.initial_draw = count;
        self
    }

    /// Set the starting credit.
    #[must_use]
    pub fn with_initial_credit(mut self, credit: u8) -> Self {
        self.initial_credit = credit;
        self
    }

    /// Number of treasure cards in the standard deal.
    #[must_use]
    pub fn treasure_count(&self) -> usize {
        self.treasure_sets * self.max_treasure_value.max(0) as usize
    }

    /// Check the configuration can produce a legal opening deal.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.initial_draw > self.treasure_count() {
            return Err(SetupError::HandExceedsTreasurePool {
                requested: self.initial_draw,
                available: self.treasure_count(),
            });
        }
        if self.initial_credit > self.max_credit || self.last_chance_credit > self.max_credit {
            return Err(SetupError::CreditAboveCap {
                credit: self.initial_credit.max(self.last_chance_credit),
                max: self.max_credit,
            });
        }
        if self.benediction_slots == 0 {
            return Err(SetupError::NoBenedictionSlots);
        }
        Ok(())
    }
}
