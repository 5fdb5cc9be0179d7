//! Deck construction and the opening deal.
//!
//! The treasure pool is `treasure_sets` sets of values `1..=max_treasure_value`,
//! subtypes alternating by set. The opening hand is dealt from the shuffled
//! treasure pool before any malediction is added, so maledictions never
//! start in the hand.

use rustc_hash::FxHashMap;

use crate::cards::{CardInstance, CardRegistry, MaledictionEffect, TreasureSubtype};
use crate::core::{EntityId, GameConfig, GameState, RandomSource};
use crate::error::SetupError;
use crate::zones::Zone;

/// Build the treasure pool with fresh ids, in set order.
#[must_use]
pub fn treasure_pool(config: &GameConfig, registry: &mut CardRegistry) -> Vec<CardInstance> {
    let mut pool = Vec::with_capacity(config.treasure_count());
    for set in 0..config.treasure_sets {
        let subtype = TreasureSubtype::for_set(set);
        for value in 1..=config.max_treasure_value {
            let id = registry.alloc_id();
            pool.push(CardInstance::treasure(id, value, subtype, Zone::Pile));
        }
    }
    pool
}

/// One card per malediction effect, with fresh ids.
#[must_use]
pub fn malediction_set(registry: &mut CardRegistry) -> Vec<CardInstance> {
    MaledictionEffect::ALL
        .iter()
        .map(|&effect| CardInstance::malediction(registry.alloc_id(), effect, Zone::Pile))
        .collect()
}

/// Deal the opening hand and pile into an empty state.
///
/// 1. Shuffle the treasure pool; the last `initial_draw` treasures form
///    the hand, face-up.
/// 2. Add the maledictions to the remaining treasures and shuffle again
///    to form the pile, face-down.
///
/// Returns the hand ids in deal order.
pub fn deal_opening(
    state: &mut GameState,
    rng: &mut dyn RandomSource,
) -> Result<Vec<EntityId>, SetupError> {
    state.config.validate()?;

    let treasures = treasure_pool(&state.config, &mut state.cards);
    let mut order: Vec<EntityId> = treasures.iter().map(|c| c.entity_id).collect();
    let mut by_id: FxHashMap<EntityId, CardInstance> =
        treasures.into_iter().map(|c| (c.entity_id, c)).collect();

    rng.shuffle_ids(&mut order);
    let hand = order.split_off(order.len() - state.config.initial_draw);

    for curse in malediction_set(&mut state.cards) {
        order.push(curse.entity_id);
        by_id.insert(curse.entity_id, curse);
    }
    rng.shuffle_ids(&mut order);

    for &id in &hand {
        if let Some(mut card) = by_id.remove(&id) {
            card.zone = Zone::Hand;
            card.hidden = false;
            state.add_card(card);
        }
    }
    for &id in &order {
        if let Some(card) = by_id.remove(&id) {
            state.add_card(card);
        }
    }

    Ok(hand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRng};

    fn fresh_state(config: GameConfig) -> GameState {
        GameState::new(config, Box::new(ScriptedRng::default()))
    }

    #[test]
    fn test_treasure_pool_composition() {
        let mut registry = CardRegistry::new();
        let pool = treasure_pool(&GameConfig::default(), &mut registry);

        assert_eq!(pool.len(), 24);
        let b_count = pool
            .iter()
            .filter(|c| c.as_treasure().unwrap().subtype == TreasureSubtype::B)
            .count();
        assert_eq!(b_count, 12);
        // First set is type-m, second type-b
        assert_eq!(pool[0].as_treasure().unwrap().subtype, TreasureSubtype::M);
        assert_eq!(pool[6].as_treasure().unwrap().subtype, TreasureSubtype::B);
        assert_eq!(pool.iter().map(CardInstance::value).sum::<i32>(), 4 * 21);
    }

    #[test]
    fn test_malediction_set_has_each_effect_once() {
        let mut registry = CardRegistry::new();
        let curses = malediction_set(&mut registry);
        let effects: Vec<_> = curses.iter().filter_map(CardInstance::malediction_effect).collect();
        assert_eq!(effects, MaledictionEffect::ALL.to_vec());
    }

    #[test]
    fn test_deal_opening() {
        let mut state = fresh_state(GameConfig::default());
        let mut rng = GameRng::new(42);

        let hand = deal_opening(&mut state, &mut rng).unwrap();

        assert_eq!(hand.len(), 3);
        assert_eq!(state.hand(), hand.as_slice());
        assert_eq!(state.pile().len(), 21 + 7);
        assert_eq!(state.cards.len(), 31);
        for &id in state.hand() {
            let card = state.card(id);
            assert!(card.is_treasure());
            assert!(!card.hidden);
            assert_eq!(card.zone, Zone::Hand);
        }
        for &id in state.pile() {
            assert!(state.card(id).hidden);
        }
    }

    #[test]
    fn test_scripted_deal_keeps_order() {
        let mut state = fresh_state(GameConfig::default());
        let mut rng = ScriptedRng::default();

        let hand = deal_opening(&mut state, &mut rng).unwrap();

        // Unshuffled: the hand is the last three treasures of the last set
        let values: Vec<_> = hand.iter().map(|&id| state.card(id).value()).collect();
        assert_eq!(values, vec![4, 5, 6]);
        // Maledictions sit on top of the pile
        let top = state.zones.top_card(Zone::Pile).unwrap();
        assert_eq!(state.card(top).malediction_effect(), Some(MaledictionEffect::PastEcho));
    }

    #[test]
    fn test_deal_is_deterministic() {
        let mut a = fresh_state(GameConfig::default());
        let mut b = fresh_state(GameConfig::default());
        deal_opening(&mut a, &mut GameRng::new(7)).unwrap();
        deal_opening(&mut b, &mut GameRng::new(7)).unwrap();

        assert_eq!(a.pile(), b.pile());
        assert_eq!(a.hand(), b.hand());
    }

    #[test]
    fn test_hand_larger_than_pool_fails() {
        let config = GameConfig::default()
            .with_treasure_sets(1)
            .with_max_treasure_value(2);
        let mut state = fresh_state(config);

        let err = deal_opening(&mut state, &mut GameRng::new(1)).unwrap_err();
        assert_eq!(
            err,
            SetupError::HandExceedsTreasurePool {
                requested: 3,
                available: 2
            }
        );
        assert!(state.cards.is_empty());
    }
}
