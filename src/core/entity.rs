//! Card identity.
//!
//! Every card (treasure, malediction, benediction) receives a unique
//! `EntityId` when it is created. Ids are never reused: a discarded card
//! keeps its identity for the rest of the game.
//!
//! ```
//! use cursed_hoard::core::EntityId;
//!
//! let card = EntityId(7);
//! assert_eq!(card.raw(), 7);
//! assert_eq!(card.to_string(), "Card(7)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_raw_value() {
        assert!(EntityId(1) < EntityId(2));
        assert_eq!(EntityId::from(5), EntityId(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", EntityId(42)), "Card(42)");
    }

    #[test]
    fn test_serialization() {
        let id = EntityId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
