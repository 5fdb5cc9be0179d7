//! Card supply: the opening deal and the weighted benediction catalog.

pub mod benediction;
pub mod deck;

pub use benediction::BenedictionCatalog;
pub use deck::{deal_opening, malediction_set, treasure_pool};
