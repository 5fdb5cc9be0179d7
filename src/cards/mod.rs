//! Card system: definitions, instances, and registry.
//!
//! ## Key Types
//!
//! - `CardKind`: tagged union of treasure / malediction / benediction data
//! - `CardInstance`: runtime card state (value, hidden, locked, zone)
//! - `CardRegistry`: owns every card of a game
//! - `BenedictionKind`: the eight catalog entries and their fixed data

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{
    BenedictionDefinition, BenedictionEffect, BenedictionKind, MaledictionEffect, TreasureSubtype,
};
pub use instance::{CardInstance, CardKind, Treasure};
pub use registry::CardRegistry;
