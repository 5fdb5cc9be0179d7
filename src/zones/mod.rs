//! Zone system for card locations.
//!
//! The game has a fixed set of collections (`Zone`): pile, hand, discard,
//! benediction hand (slots), benediction pile, the active-malediction slot
//! and the future-vision preview. `ZoneManager` keeps every card in exactly
//! one of them.

pub mod manager;

pub use manager::{Zone, ZoneManager};
