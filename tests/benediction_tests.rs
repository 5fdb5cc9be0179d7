//! Benediction scenarios.
//!
//! Every test starts from a scripted `Layout` with a `ScriptedRng`, so card
//! ids follow layout order: pile (bottom to top), hand, discard, active
//! malediction, slots, benediction pile.

use cursed_hoard::cards::{BenedictionEffect, BenedictionKind, MaledictionEffect, TreasureSubtype};
use cursed_hoard::core::{EntityId, Mode, ScriptedRng};
use cursed_hoard::error::ActionError;
use cursed_hoard::events::GameEvent;
use cursed_hoard::game::{CardSpec, Game, GameBuilder, Layout};

use TreasureSubtype::{B, M};

fn build(layout: Layout) -> Game {
    GameBuilder::new()
        .rng(ScriptedRng::default())
        .layout(layout)
        .build()
        .expect("valid layout")
}

fn kind_of(game: &Game, id: EntityId) -> Option<BenedictionKind> {
    game.state().card(id).benediction_kind()
}

fn credit_changes(game: &Game) -> Vec<(u8, u8)> {
    game.events()
        .events()
        .iter()
        .filter_map(|e| match e {
            GameEvent::CreditChanged { old, new } => Some((*old, *new)),
            _ => None,
        })
        .collect()
}

/// A single value-2 card hit by protection II is discarded for one credit.
#[test]
fn test_protection_ii_discards_and_grants_credit() {
    let mut game = build(
        Layout::new()
            .pile([CardSpec::treasure(4, M)])
            .hand([CardSpec::treasure(2, M)])
            .benedictions([BenedictionKind::ProtectionII])
            .benediction_pile(BenedictionKind::Evasion),
    );
    let target = EntityId(1);
    let protection = EntityId(2);

    game.play_benediction(protection).unwrap();
    assert_eq!(game.mode(), Mode::ChooseTreasure);
    assert_eq!(game.pending_choice().unwrap().domain.as_slice(), &[target]);

    game.submit_choice(target).unwrap();

    assert!(game.hand().is_empty());
    assert_eq!(game.discard_pile(), &[target, protection]);
    // Discarded cards get their printed value back
    assert_eq!(game.state().card(target).value(), 2);
    // +1 for the discard, then spent by the refill
    assert_eq!(credit_changes(&game), vec![(0, 1), (1, 0)]);
    assert_eq!(game.benediction_hand()[0], Some(EntityId(3)));
    assert_eq!(game.mode(), Mode::Draw);
    assert!(game.pending_choice().is_none());
}

#[test]
fn test_protection_keeps_card_above_zero() {
    let mut game = build(
        Layout::new()
            .pile([CardSpec::treasure(4, M)])
            .hand([CardSpec::treasure(5, M)])
            .benedictions([BenedictionKind::ProtectionIII])
            .benediction_pile(BenedictionKind::Evasion),
    );

    game.play_benediction(EntityId(2)).unwrap();
    game.submit_choice(EntityId(1)).unwrap();

    assert_eq!(game.hand(), &[EntityId(1)]);
    assert_eq!(game.state().card(EntityId(1)).value(), 2);
    assert_eq!(game.credit(), 0);
    assert!(credit_changes(&game).is_empty());
    assert!(game.events().events().contains(&GameEvent::CardValueChanged {
        card: EntityId(1),
        old: 5,
        new: 2
    }));
}

#[test]
fn test_evasion_zeroes_and_discards() {
    let mut game = build(
        Layout::new()
            .pile([CardSpec::treasure(4, M)])
            .hand([CardSpec::treasure(6, M), CardSpec::treasure(1, M)])
            .benedictions([BenedictionKind::Evasion, BenedictionKind::SecondWind])
            .benediction_pile(BenedictionKind::LuckySwitch),
    );

    game.play_benediction(EntityId(3)).unwrap();
    game.submit_choice(EntityId(1)).unwrap();

    assert_eq!(game.hand(), &[EntityId(2)]);
    assert_eq!(game.discard_pile(), &[EntityId(1), EntityId(3)]);
    // Value 0 earns a credit, immediately spent on the lucky-switch
    assert_eq!(credit_changes(&game), vec![(0, 1), (1, 0)]);
    assert_eq!(
        kind_of(&game, game.benediction_hand()[0].unwrap()),
        Some(BenedictionKind::LuckySwitch)
    );
}

#[test]
fn test_locked_cards_cannot_be_chosen() {
    let mut game = build(
        Layout::new()
            .pile([CardSpec::treasure(4, M)])
            .hand([CardSpec::treasure(6, M).locked(), CardSpec::treasure(1, M)])
            .benedictions([BenedictionKind::Evasion])
            .benediction_pile(BenedictionKind::LuckySwitch),
    );

    game.play_benediction(EntityId(3)).unwrap();

    assert_eq!(
        game.submit_choice(EntityId(1)),
        Err(ActionError::NotInChoiceDomain(EntityId(1)))
    );
    assert_eq!(game.mode(), Mode::ChooseTreasure);
    game.submit_choice(EntityId(2)).unwrap();
    assert_eq!(game.hand(), &[EntityId(1)]);
}

#[test]
fn test_no_unlocked_target() {
    let mut game = build(
        Layout::new()
            .pile([CardSpec::treasure(4, M)])
            .hand([CardSpec::treasure(6, M).locked()])
            .benedictions([BenedictionKind::ProtectionI, BenedictionKind::ThirteenthTalisman])
            .benediction_pile(BenedictionKind::Evasion),
    );

    assert_eq!(game.play_benediction(EntityId(2)), Err(ActionError::NoTarget));
    // The talisman needs no target
    game.play_benediction(EntityId(3)).unwrap();
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_lucky_switch_on_treasure_draws_same_subtype() {
    let mut game = build(
        Layout::new()
            .pile([
                CardSpec::treasure(3, B),
                CardSpec::treasure(6, M),
                CardSpec::treasure(1, B),
                CardSpec::treasure(2, M),
            ])
            .hand([CardSpec::treasure(5, B)])
            .benedictions([BenedictionKind::LuckySwitch])
            .benediction_pile(BenedictionKind::Evasion),
    );
    let target = EntityId(4);

    game.play_benediction(EntityId(5)).unwrap();
    assert_eq!(game.mode(), Mode::Choose);
    game.submit_choice(target).unwrap();

    // Most recent type-b treasure, skipping the type-m on top
    assert_eq!(game.hand(), &[EntityId(2)]);
    assert!(!game.state().card(EntityId(2)).hidden);
    assert_eq!(game.pile(), &[EntityId(0), EntityId(1), EntityId(3)]);
    // No credit even for a type-b discard
    assert!(credit_changes(&game).is_empty());
    assert_eq!(game.discard_pile(), &[target, EntityId(5)]);
    assert_eq!(game.mode(), Mode::Draw);
}

#[test]
fn test_lucky_switch_without_matching_subtype() {
    let mut game = build(
        Layout::new()
            .pile([CardSpec::treasure(6, M), CardSpec::malediction(MaledictionEffect::PastEcho)])
            .hand([CardSpec::treasure(5, B)])
            .benedictions([BenedictionKind::LuckySwitch])
            .benediction_pile(BenedictionKind::Evasion),
    );

    game.play_benediction(EntityId(3)).unwrap();
    game.submit_choice(EntityId(2)).unwrap();

    assert!(game.hand().is_empty());
    assert_eq!(game.pile().len(), 2);
    assert_eq!(game.mode(), Mode::Draw);
}

#[test]
fn test_lucky_switch_on_benediction() {
    let mut game = build(
        Layout::new()
            .pile([CardSpec::treasure(2, M)])
            .hand([CardSpec::treasure(5, B)])
            .benedictions([BenedictionKind::LuckySwitch, BenedictionKind::ProtectionI])
            .benediction_pile(BenedictionKind::Evasion),
    );
    let lucky = EntityId(2);
    let protection = EntityId(3);

    game.play_benediction(lucky).unwrap();
    let domain = game.pending_choice().unwrap().domain.to_vec();
    assert_eq!(domain, vec![EntityId(1), protection]);

    // The lucky-switch in flight is never a candidate
    assert_eq!(game.submit_choice(lucky), Err(ActionError::NotInChoiceDomain(lucky)));

    game.submit_choice(protection).unwrap();

    // +1 credit spent on one extra benediction draw into the freed slot
    assert_eq!(credit_changes(&game), vec![(0, 1), (1, 0)]);
    assert_eq!(game.benediction_hand(), &[None, Some(EntityId(4))]);
    assert_eq!(game.discard_pile(), &[protection, lucky]);
    assert_eq!(game.hand(), &[EntityId(1)]);
    assert_eq!(game.mode(), Mode::Draw);
}

#[test]
fn test_talisman_grants_credit() {
    let mut game = build(
        Layout::new()
            .pile([CardSpec::treasure(2, M)])
            .hand([CardSpec::treasure(1, M)])
            .benedictions([BenedictionKind::ThirteenthTalisman])
            .benediction_pile(BenedictionKind::LuckySwitch),
    );

    game.play_benediction(EntityId(2)).unwrap();

    // +2, then both slots refilled
    assert_eq!(credit_changes(&game), vec![(0, 2), (2, 1), (1, 0)]);
    let kinds: Vec<_> = game
        .benediction_hand()
        .iter()
        .map(|slot| slot.and_then(|id| kind_of(&game, id)))
        .collect();
    assert_eq!(
        kinds,
        vec![Some(BenedictionKind::LuckySwitch), Some(BenedictionKind::Evasion)]
    );
    assert_eq!(game.mode(), Mode::Draw);
}

#[test]
fn test_talisman_cancels_malediction() {
    let mut game = build(
        Layout::new()
            .pile([CardSpec::treasure(2, M)])
            .hand([CardSpec::treasure(5, M)])
            .benedictions([BenedictionKind::ThirteenthTalisman])
            .benediction_pile(BenedictionKind::Evasion)
            .malediction(MaledictionEffect::GrowingShadow),
    );
    let curse = EntityId(2);

    game.play_benediction(EntityId(3)).unwrap();

    assert_eq!(game.current_malediction(), None);
    assert_eq!(game.discard_pile(), &[curse, EntityId(3)]);
    // Cancelled, not resolved
    assert_eq!(game.state().card(EntityId(1)).value(), 5);
    assert!(credit_changes(&game).is_empty());
    assert_eq!(game.mode(), Mode::Draw);
}

#[test]
fn test_only_talisman_during_malediction() {
    let mut game = build(
        Layout::new()
            .pile([CardSpec::treasure(2, M)])
            .hand([CardSpec::treasure(5, M)])
            .benedictions([BenedictionKind::Evasion])
            .benediction_pile(BenedictionKind::LuckySwitch)
            .malediction(MaledictionEffect::GrowingShadow),
    );

    assert_eq!(
        game.play_benediction(EntityId(3)),
        Err(ActionError::MaledictionActive)
    );
    assert_eq!(game.mode(), Mode::PlayMalediction);
}

#[test]
fn test_second_wind_is_not_playable() {
    let mut game = build(
        Layout::new()
            .pile([CardSpec::treasure(2, M)])
            .hand([CardSpec::treasure(5, M)])
            .benedictions([BenedictionKind::SecondWind])
            .benediction_pile(BenedictionKind::Evasion),
    );

    assert_eq!(
        game.play_benediction(EntityId(2)),
        Err(ActionError::NotPlayable(BenedictionEffect::SecondWind))
    );
    assert!(game.history().is_empty());
}

fn future_vision_layout() -> Layout {
    Layout::new()
        .pile([
            CardSpec::treasure(6, M),
            CardSpec::treasure(4, M),
            CardSpec::treasure(2, M),
            CardSpec::malediction(MaledictionEffect::PastWeight),
            CardSpec::treasure(5, B),
        ])
        .hand([CardSpec::treasure(1, M)])
        .benedictions([BenedictionKind::FutureVision])
        .benediction_pile(BenedictionKind::Evasion)
}

/// Keeping the malediction of a preview discards the rest and reveals it.
#[test]
fn test_future_vision_keeps_malediction() {
    let mut game = build(future_vision_layout());
    let vision = EntityId(6);
    let curse = EntityId(3);

    game.play_benediction(vision).unwrap();
    assert_eq!(game.mode(), Mode::ChoosePreview);
    assert_eq!(game.preview(), &[EntityId(2), curse, EntityId(4)]);
    assert_eq!(game.pile(), &[EntityId(0), EntityId(1)]);
    for &id in game.preview() {
        assert!(!game.state().card(id).hidden);
    }

    game.submit_choice(curse).unwrap();

    assert_eq!(game.discard_pile(), &[EntityId(2), EntityId(4), vision]);
    assert!(credit_changes(&game).is_empty());
    assert_eq!(game.current_malediction(), Some(curse));
    assert_eq!(game.mode(), Mode::PlayMalediction);
    assert!(game
        .events()
        .events()
        .contains(&GameEvent::MaledictionRevealed { card: curse }));

    // Past-weight resolves normally afterwards
    game.resolve_malediction().unwrap();
    assert_eq!(game.hand(), &[EntityId(5), EntityId(1)]);
    assert!(game.state().card(EntityId(1)).hidden);
    assert_eq!(game.visible_hand_sum(), 1);
    assert_eq!(game.mode(), Mode::Draw);
}

#[test]
fn test_future_vision_keeps_treasure() {
    let mut game = build(future_vision_layout());

    game.play_benediction(EntityId(6)).unwrap();
    game.submit_choice(EntityId(2)).unwrap();

    assert_eq!(game.hand(), &[EntityId(5), EntityId(2)]);
    assert_eq!(game.hand_sum(), 3);
    assert_eq!(game.discard_pile(), &[EntityId(3), EntityId(4), EntityId(6)]);
    assert!(game.preview().is_empty());
    assert_eq!(game.mode(), Mode::Draw);
}

#[test]
fn test_future_vision_short_pile() {
    let mut game = build(
        Layout::new()
            .pile([CardSpec::treasure(2, M), CardSpec::treasure(3, B)])
            .hand([CardSpec::treasure(1, M)])
            .benedictions([BenedictionKind::FutureVision])
            .benediction_pile(BenedictionKind::Evasion),
    );

    game.play_benediction(EntityId(3)).unwrap();

    assert_eq!(game.preview(), &[EntityId(0), EntityId(1)]);
    assert!(game.pile().is_empty());
}

/// A type-b card discarded at value 0 qualifies twice over but still earns
/// a single credit.
#[test]
fn test_zeroed_type_b_earns_one_credit() {
    let mut game = build(
        Layout::new()
            .pile([CardSpec::treasure(4, M)])
            .hand([CardSpec::treasure(5, B), CardSpec::treasure(1, M)])
            .benedictions([BenedictionKind::Evasion, BenedictionKind::SecondWind])
            .benediction_pile(BenedictionKind::LuckySwitch),
    );

    game.play_benediction(EntityId(3)).unwrap();
    game.submit_choice(EntityId(1)).unwrap();

    assert_eq!(game.discard_pile(), &[EntityId(1), EntityId(3)]);
    assert_eq!(credit_changes(&game), vec![(0, 1), (1, 0)]);

    let mut game = build(
        Layout::new()
            .pile([CardSpec::treasure(4, M)])
            .hand([CardSpec::treasure(2, B)])
            .benedictions([BenedictionKind::ProtectionII])
            .benediction_pile(BenedictionKind::Evasion),
    );

    game.play_benediction(EntityId(2)).unwrap();
    game.submit_choice(EntityId(1)).unwrap();

    assert!(game.hand().is_empty());
    assert_eq!(credit_changes(&game), vec![(0, 1), (1, 0)]);
}

#[test]
fn test_pending_choice_blocks_other_commands() {
    let mut game = build(future_vision_layout());
    game.play_benediction(EntityId(6)).unwrap();

    assert!(matches!(
        game.draw_from_pile(),
        Err(ActionError::WrongMode { mode: Mode::ChoosePreview, .. })
    ));
    assert_eq!(
        game.submit_choice(EntityId(0)),
        Err(ActionError::NotInChoiceDomain(EntityId(0)))
    );
}
