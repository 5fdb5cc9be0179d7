//! Core engine types: entities, RNG, configuration, actions, mode, state.

pub mod entity;
pub mod rng;
pub mod config;
pub mod action;
pub mod mode;
pub mod state;

pub use entity::EntityId;
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use config::GameConfig;
pub use action::{Action, ActionRecord};
pub use mode::Mode;
pub use state::GameState;
