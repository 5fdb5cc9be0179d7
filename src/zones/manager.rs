//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` tracks which zone holds every card and keeps the
//! order of each zone:
//! - Ordered zones (pile, hand, discard, ...) are `Vec`s, index 0 = bottom
//!   for the pile, oldest card for the hand and discard.
//! - The benediction hand is a fixed array of slots, each empty or holding
//!   one card.
//!
//! A card is in at most one zone at a time; adding a card that is already
//! tracked panics.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::entity::EntityId;

/// The collections of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    /// Shared draw stack; top = last.
    Pile,
    /// Player's treasure cards.
    Hand,
    /// Discard pile, any kind.
    Discard,
    /// Fixed-size benediction slots.
    BenedictionHand,
    /// The single face-down benediction waiting to be claimed.
    BenedictionPile,
    /// The revealed, not yet resolved malediction.
    Malediction,
    /// Cards revealed by future-vision, awaiting a pick.
    Preview,
}

impl Zone {
    /// Zones backed by an ordered list.
    pub const ORDERED: [Zone; 6] = [
        Zone::Pile,
        Zone::Hand,
        Zone::Discard,
        Zone::BenedictionPile,
        Zone::Malediction,
        Zone::Preview,
    ];
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Pile => "pile",
            Zone::Hand => "hand",
            Zone::Discard => "discard",
            Zone::BenedictionHand => "benediction-hand",
            Zone::BenedictionPile => "benediction-pile",
            Zone::Malediction => "malediction",
            Zone::Preview => "preview",
        };
        f.write_str(name)
    }
}

/// Manages card locations across zones.
///
/// ## Usage
///
/// ```
/// use cursed_hoard::core::EntityId;
/// use cursed_hoard::zones::{Zone, ZoneManager};
///
/// let mut manager = ZoneManager::new(2);
/// manager.add_to_zone(EntityId(10), Zone::Pile);
/// manager.add_to_zone(EntityId(11), Zone::Pile);
///
/// assert_eq!(manager.top_card(Zone::Pile), Some(EntityId(11)));
///
/// manager.move_to_zone(EntityId(11), Zone::Hand);
/// assert_eq!(manager.cards_in_zone_ordered(Zone::Hand), &[EntityId(11)]);
/// ```
#[derive(Clone, Debug)]
pub struct ZoneManager {
    /// Card locations: entity_id -> zone
    locations: FxHashMap<EntityId, Zone>,

    /// Ordered card lists, one per ordered zone.
    zone_order: FxHashMap<Zone, Vec<EntityId>>,

    /// Benediction hand.
    slots: Vec<Option<EntityId>>,
}

impl ZoneManager {
    /// Create an empty manager with `slot_count` benediction slots.
    #[must_use]
    pub fn new(slot_count: usize) -> Self {
        let mut zone_order = FxHashMap::default();
        for zone in Zone::ORDERED {
            zone_order.insert(zone, Vec::new());
        }
        Self {
            locations: FxHashMap::default(),
            zone_order,
            slots: vec![None; slot_count],
        }
    }

    /// Add an untracked card on top of an ordered zone.
    ///
    /// Panics if the entity is already tracked or `zone` is the benediction
    /// hand (use [`add_to_slot`](Self::add_to_slot)).
    pub fn add_to_zone(&mut self, entity: EntityId, zone: Zone) {
        if self.locations.contains_key(&entity) {
            panic!("{} already exists in zone manager", entity);
        }
        self.attach(entity, zone);
    }

    /// Add an untracked card to a benediction slot.
    ///
    /// Panics if the entity is already tracked or the slot is occupied.
    pub fn add_to_slot(&mut self, entity: EntityId, slot: usize) {
        if self.locations.contains_key(&entity) {
            panic!("{} already exists in zone manager", entity);
        }
        self.attach_slot(entity, slot);
    }

    /// Move a card on top of an ordered zone.
    ///
    /// Returns the old zone, or `None` if the card wasn't found.
    pub fn move_to_zone(&mut self, entity: EntityId, new_zone: Zone) -> Option<Zone> {
        let old_zone = self.locations.get(&entity).copied()?;
        self.detach(entity, old_zone);
        self.attach(entity, new_zone);
        Some(old_zone)
    }

    /// Move a card into a benediction slot.
    ///
    /// Returns the old zone, or `None` if the card wasn't found.
    pub fn move_to_slot(&mut self, entity: EntityId, slot: usize) -> Option<Zone> {
        let old_zone = self.locations.get(&entity).copied()?;
        self.detach(entity, old_zone);
        self.attach_slot(entity, slot);
        Some(old_zone)
    }

    fn attach(&mut self, entity: EntityId, zone: Zone) {
        self.zone_order
            .get_mut(&zone)
            .unwrap_or_else(|| panic!("{} is not an ordered zone", zone))
            .push(entity);
        self.locations.insert(entity, zone);
    }

    fn attach_slot(&mut self, entity: EntityId, slot: usize) {
        match self.slots.get_mut(slot) {
            Some(cell @ None) => *cell = Some(entity),
            Some(Some(occupant)) => panic!("benediction slot {} already holds {}", slot, occupant),
            None => panic!("benediction slot {} out of range", slot),
        }
        self.locations.insert(entity, Zone::BenedictionHand);
    }

    fn detach(&mut self, entity: EntityId, zone: Zone) {
        if zone == Zone::BenedictionHand {
            for cell in &mut self.slots {
                if *cell == Some(entity) {
                    *cell = None;
                }
            }
        } else if let Some(order) = self.zone_order.get_mut(&zone) {
            order.retain(|&e| e != entity);
        }
        self.locations.remove(&entity);
    }

    /// Check if a card is in a specific zone.
    #[must_use]
    pub fn is_in_zone(&self, entity: EntityId, zone: Zone) -> bool {
        self.locations.get(&entity) == Some(&zone)
    }

    /// Cards of an ordered zone, in order. Empty for the benediction hand.
    #[must_use]
    pub fn cards_in_zone_ordered(&self, zone: Zone) -> &[EntityId] {
        self.zone_order.get(&zone).map_or(&[], |v| v.as_slice())
    }

    /// Last card of an ordered zone (top of the pile).
    #[must_use]
    pub fn top_card(&self, zone: Zone) -> Option<EntityId> {
        self.cards_in_zone_ordered(zone).last().copied()
    }

    /// Up to `n` cards from the top of a zone, bottom-most first.
    #[must_use]
    pub fn top_cards(&self, zone: Zone, n: usize) -> Vec<EntityId> {
        let cards = self.cards_in_zone_ordered(zone);
        cards[cards.len().saturating_sub(n)..].to_vec()
    }

    /// Most recent card of a zone matching `predicate`.
    pub fn last_matching<F>(&self, zone: Zone, predicate: F) -> Option<EntityId>
    where
        F: Fn(EntityId) -> bool,
    {
        self.cards_in_zone_ordered(zone)
            .iter()
            .rev()
            .copied()
            .find(|&e| predicate(e))
    }

    /// Benediction slots.
    #[must_use]
    pub fn slots(&self) -> &[Option<EntityId>] {
        &self.slots
    }

    /// Index of the first empty benediction slot.
    #[must_use]
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Occupied benediction slots, in slot order.
    pub fn slot_cards(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.slots.iter().flatten().copied()
    }
}
