//! Notification surface.
//!
//! The engine is generic over an [`EventSink`]; [`EventLog`] is the default
//! collecting sink and `()` throws events away.

pub mod event;

pub use event::{EventLog, EventSink, GameEvent};
