//! Game construction.
//!
//! The seed fixes the deal: the deck is shuffled from
//! `GameRng::new(seed).for_context("deal")`. In-game randomness (benediction
//! draws, uniform picks) comes from the injected `RandomSource`, or from
//! `GameRng::new(seed)` when none is given.

use super::{Game, Layout};
use crate::core::{GameConfig, GameRng, GameState, RandomSource};
use crate::error::SetupError;
use crate::events::{EventLog, EventSink, GameEvent};
use crate::supply::{deal_opening, BenedictionCatalog};
use crate::zones::Zone;

/// Builder for [`Game`].
///
/// ```
/// use cursed_hoard::core::GameConfig;
/// use cursed_hoard::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .seed(7)
///     .config(GameConfig::default())
///     .build()
///     .unwrap();
///
/// assert_eq!(game.hand().len(), 3);
/// assert_eq!(game.credit(), 0);
/// assert!(game.benediction_hand().iter().all(Option::is_some));
/// ```
#[derive(Debug, Default)]
pub struct GameBuilder {
    seed: u64,
    config: GameConfig,
    rng: Option<Box<dyn RandomSource>>,
    layout: Option<Layout>,
    catalog: BenedictionCatalog,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `rng` for every in-game random pick.
    #[must_use]
    pub fn rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Start from a scripted position instead of a dealt game.
    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    #[must_use]
    pub fn catalog(mut self, catalog: BenedictionCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Build with the default [`EventLog`] sink.
    pub fn build(self) -> Result<Game<EventLog>, SetupError> {
        self.build_with_sink(EventLog::new())
    }

    /// Build with a custom event sink.
    ///
    /// A dealt game runs the opening: the benediction pile is generated and
    /// the slots are refilled from the initial credit. The events of the
    /// opening are delivered to `sink`.
    ///
    /// A layout is end-checked like any command, so a settled position that
    /// is already won or over the threshold starts finished.
    pub fn build_with_sink<S: EventSink>(self, sink: S) -> Result<Game<S>, SetupError> {
        self.config.validate()?;

        let base = GameRng::new(self.seed);
        let mut deal_rng = base.for_context("deal");
        let rng = self.rng.unwrap_or_else(|| Box::new(base));
        let mut state = GameState::new(self.config, rng);

        match self.layout {
            Some(layout) => {
                layout.apply(&mut state)?;
                let mut game = Game::from_parts(state, self.catalog, sink);
                if !layout.has_benediction_pile() {
                    game.generate_benediction_pile();
                }
                game.check_end();
                Ok(game)
            }
            None => {
                let hand = deal_opening(&mut state, &mut deal_rng)?;
                let mut game = Game::from_parts(state, self.catalog, sink);
                for card in hand {
                    game.emit(GameEvent::CardMoved {
                        card,
                        from: None,
                        to: Zone::Hand,
                    });
                }
                game.generate_benediction_pile();
                game.refill_benedictions();
                Ok(game)
            }
        }
    }
}
