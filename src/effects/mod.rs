//! Effect resolution.
//!
//! - `targeting`: draw filters and choice domains
//! - `choice`: the suspended-benediction continuation
//! - `benediction` / `malediction`: the handlers, as `Game` methods
//!
//! Handlers only compose the primitive moves of `game::moves`; each one
//! runs to completion (nested draws, discards and refills included) before
//! the next command is accepted.

pub mod benediction;
pub mod choice;
pub mod malediction;
pub mod targeting;

pub use choice::{ChoiceKind, PendingChoice};
pub use targeting::{ChoiceDomain, DrawFace, DrawFilter};
