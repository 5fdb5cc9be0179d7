//! Command validation, history and event delivery.

use cursed_hoard::cards::{BenedictionKind, MaledictionEffect, TreasureSubtype};
use cursed_hoard::core::{Action, ActionRecord, EntityId, Mode, ScriptedRng};
use cursed_hoard::error::ActionError;
use cursed_hoard::events::GameEvent;
use cursed_hoard::game::{CardSpec, Game, GameBuilder, Layout};
use cursed_hoard::zones::Zone;

use TreasureSubtype::{B, M};

fn build(layout: Layout) -> Game {
    GameBuilder::new()
        .rng(ScriptedRng::default())
        .layout(layout.benediction_pile(BenedictionKind::Evasion))
        .build()
        .expect("valid layout")
}

fn opening_hand(cards: impl IntoIterator<Item = CardSpec>) -> Layout {
    Layout::new()
        .pile([CardSpec::treasure(1, M), CardSpec::treasure(2, M)])
        .hand(cards)
        .mode(Mode::Discard)
}

#[test]
fn test_opening_only_accepts_discard() {
    let mut game = GameBuilder::new().seed(42).build().unwrap();
    let before = game.snapshot();
    let events = game.events().len();
    let slot = game.benediction_hand()[0].unwrap();

    assert_eq!(
        game.draw_from_pile(),
        Err(ActionError::WrongMode {
            action: Action::DrawFromPile,
            mode: Mode::Discard
        })
    );
    assert!(matches!(
        game.play_benediction(slot),
        Err(ActionError::WrongMode { .. })
    ));
    assert!(matches!(
        game.resolve_malediction(),
        Err(ActionError::WrongMode { .. })
    ));
    let first = game.hand()[0];
    assert!(matches!(
        game.submit_choice(first),
        Err(ActionError::WrongMode { .. })
    ));

    // Rejections change nothing
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.events().len(), events);
    assert!(game.history().is_empty());

    let legal = game.legal_actions();
    assert_eq!(legal.len(), 3);
    assert!(legal.iter().all(|a| matches!(a, Action::Discard(_))));
}

#[test]
fn test_opening_discard_starts_play() {
    let mut game = GameBuilder::new().seed(42).build().unwrap();
    let first = game.hand()[0];

    game.discard_card(first).unwrap();

    assert_eq!(game.mode(), Mode::Draw);
    assert_eq!(game.hand().len(), 2);
    assert_eq!(game.discard_pile(), &[first]);
    let second = game.hand()[0];
    assert!(matches!(
        game.discard_card(second),
        Err(ActionError::WrongMode { .. })
    ));
    assert!(game.legal_actions().contains(&Action::DrawFromPile));
}

#[test]
fn test_discard_credit_by_subtype() {
    let mut game = build(opening_hand([CardSpec::treasure(3, B), CardSpec::treasure(3, M)]));
    game.discard_card(EntityId(2)).unwrap();
    assert_eq!(game.credit(), 1);

    let mut game = build(opening_hand([CardSpec::treasure(3, B), CardSpec::treasure(3, M)]));
    game.discard_card(EntityId(3)).unwrap();
    assert_eq!(game.credit(), 0);
    assert!(!game
        .events()
        .events()
        .iter()
        .any(|e| matches!(e, GameEvent::CreditChanged { .. })));

    let mut game = build(opening_hand([CardSpec::treasure(0, M)]));
    game.discard_card(EntityId(2)).unwrap();
    assert_eq!(game.credit(), 1);
}

#[test]
fn test_zero_value_type_b_discard_earns_one_credit() {
    let mut game = build(opening_hand([CardSpec::treasure(0, B), CardSpec::treasure(3, M)]));

    game.discard_card(EntityId(2)).unwrap();

    assert_eq!(game.credit(), 1);
    let changes: Vec<&GameEvent> = game
        .events()
        .events()
        .iter()
        .filter(|e| matches!(e, GameEvent::CreditChanged { .. }))
        .collect();
    assert_eq!(changes, vec![&GameEvent::CreditChanged { old: 0, new: 1 }]);
}

#[test]
fn test_discard_credit_is_capped() {
    let mut game = build(opening_hand([CardSpec::treasure(3, B)]).credit(6));

    game.discard_card(EntityId(2)).unwrap();

    assert_eq!(game.credit(), 6);
    assert!(!game
        .events()
        .events()
        .iter()
        .any(|e| matches!(e, GameEvent::CreditChanged { .. })));
}

#[test]
fn test_card_errors() {
    let mut game = build(opening_hand([
        CardSpec::treasure(3, M).locked(),
        CardSpec::treasure(4, M),
    ]));

    assert_eq!(
        game.discard_card(EntityId(99)),
        Err(ActionError::UnknownCard(EntityId(99)))
    );
    assert_eq!(
        game.discard_card(EntityId(0)),
        Err(ActionError::NotInHand(EntityId(0)))
    );
    assert_eq!(
        game.discard_card(EntityId(2)),
        Err(ActionError::Locked(EntityId(2)))
    );
    assert_eq!(game.legal_actions(), vec![Action::Discard(EntityId(3))]);
}

#[test]
fn test_benediction_errors() {
    let mut game = build(
        Layout::new()
            .pile([CardSpec::treasure(1, M)])
            .hand([CardSpec::treasure(4, M)])
            .benedictions([BenedictionKind::ProtectionI]),
    );

    assert_eq!(
        game.play_benediction(EntityId(1)),
        Err(ActionError::NotInBenedictionHand(EntityId(1)))
    );
    // The face-down benediction pile card is not playable either
    assert_eq!(
        game.play_benediction(EntityId(3)),
        Err(ActionError::NotInBenedictionHand(EntityId(3)))
    );
}

#[test]
fn test_history_records_accepted_commands() {
    let mut game = build(
        opening_hand([CardSpec::treasure(3, M), CardSpec::treasure(4, M)])
            .pile([
                CardSpec::treasure(1, M),
                CardSpec::treasure(2, M),
                CardSpec::treasure(1, B),
            ]),
    );

    game.discard_card(EntityId(3)).unwrap();
    let _ = game.discard_card(EntityId(4));
    game.draw_from_pile().unwrap();
    game.draw_from_pile().unwrap();

    let history: Vec<ActionRecord> = game.history().iter().cloned().collect();
    assert_eq!(
        history,
        vec![
            ActionRecord::new(Action::Discard(EntityId(3)), 0),
            ActionRecord::new(Action::DrawFromPile, 1),
            ActionRecord::new(Action::DrawFromPile, 2),
        ]
    );
}

#[test]
fn test_discard_event_order() {
    let mut game = build(opening_hand([CardSpec::treasure(2, B)]));

    game.discard_card(EntityId(2)).unwrap();

    assert_eq!(
        game.events().events(),
        &[
            GameEvent::CardMoved {
                card: EntityId(2),
                from: Some(Zone::Hand),
                to: Zone::Discard
            },
            GameEvent::CreditChanged { old: 0, new: 1 },
            GameEvent::ModeChanged {
                old: Mode::Discard,
                new: Mode::Draw
            },
        ]
    );
}

#[test]
fn test_malediction_reveal_events() {
    let mut game = build(
        Layout::new()
            .pile([
                CardSpec::treasure(1, M),
                CardSpec::malediction(MaledictionEffect::PastWeight),
            ])
            .hand([CardSpec::treasure(4, M)]),
    );
    let curse = EntityId(1);

    game.draw_from_pile().unwrap();

    let drained: Vec<GameEvent> = game.events_mut().drain().collect();
    assert_eq!(
        drained,
        vec![
            GameEvent::CardMoved {
                card: curse,
                from: Some(Zone::Pile),
                to: Zone::Malediction
            },
            GameEvent::MaledictionRevealed { card: curse },
            GameEvent::ModeChanged {
                old: Mode::Draw,
                new: Mode::PlayMalediction
            },
        ]
    );
    assert!(game.events().is_empty());
    assert_eq!(game.legal_actions(), vec![Action::ResolveMalediction]);
}

#[test]
fn test_custom_sinks() {
    let layout = Layout::new()
        .pile([CardSpec::treasure(1, M), CardSpec::treasure(2, M)])
        .hand([CardSpec::treasure(4, M)])
        .benediction_pile(BenedictionKind::Evasion);

    let mut game = GameBuilder::new()
        .rng(ScriptedRng::default())
        .layout(layout.clone())
        .build_with_sink(Vec::<GameEvent>::new())
        .unwrap();
    game.draw_from_pile().unwrap();
    assert_eq!(
        game.into_events(),
        vec![GameEvent::CardMoved {
            card: EntityId(1),
            from: Some(Zone::Pile),
            to: Zone::Hand
        }]
    );

    let mut silent = GameBuilder::new()
        .rng(ScriptedRng::default())
        .layout(layout)
        .build_with_sink(())
        .unwrap();
    silent.draw_from_pile().unwrap();
    assert_eq!(silent.hand().len(), 2);
}
