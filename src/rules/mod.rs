//! Game rules: the engine trait, credit ledger, and end conditions.
//!
//! - `RulesEngine`: legal actions, action application, terminal check
//! - `CreditLedger`: bounded benediction credit
//! - `end_condition`: win / threshold detection

pub mod credit;
pub mod end_condition;
pub mod engine;

pub use credit::CreditLedger;
pub use end_condition::EndCheck;
pub use engine::{GameResult, RulesEngine};
