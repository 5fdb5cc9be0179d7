//! Card registry.
//!
//! The `CardRegistry` owns every `CardInstance` of a game and hands out
//! fresh `EntityId`s. Cards are never removed: discarded cards stay
//! registered for the rest of the game.

use rustc_hash::FxHashMap;

use super::instance::CardInstance;
use crate::core::entity::EntityId;

/// Registry of card instances.
///
/// ## Example
///
/// ```
/// use cursed_hoard::cards::{CardInstance, CardRegistry, TreasureSubtype};
/// use cursed_hoard::zones::Zone;
///
/// let mut registry = CardRegistry::new();
/// let id = registry.alloc_id();
/// registry.register(CardInstance::treasure(id, 3, TreasureSubtype::M, Zone::Pile));
///
/// assert_eq!(registry.get(id).unwrap().value(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<EntityId, CardInstance>,
    next_id: u32,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh card id.
    pub fn alloc_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register a card instance.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardInstance) {
        if self.cards.contains_key(&card.entity_id) {
            panic!("Card {} already registered", card.entity_id);
        }
        self.next_id = self.next_id.max(card.entity_id.0 + 1);
        self.cards.insert(card.entity_id, card);
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&CardInstance> {
        self.cards.get(&id)
    }

    /// Get a card by ID, panicking if not found.
    ///
    /// Use for ids taken from the engine's own collections, where a
    /// missing card is a broken invariant.
    #[must_use]
    pub fn get_unchecked(&self, id: EntityId) -> &CardInstance {
        self.cards
            .get(&id)
            .unwrap_or_else(|| panic!("{} not found in registry", id))
    }

    /// Mutable variant of [`get_unchecked`](Self::get_unchecked).
    pub fn get_mut_unchecked(&mut self, id: EntityId) -> &mut CardInstance {
        self.cards
            .get_mut(&id)
            .unwrap_or_else(|| panic!("{} not found in registry", id))
    }

    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.values()
    }

    /// All card ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<_> = self.cards.keys().copied().collect();
        ids.sort();
        ids
    }
}
