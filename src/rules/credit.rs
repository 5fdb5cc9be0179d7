//! Benediction credit ledger.
//!
//! Credit is spent to claim a benediction into an empty slot. It is
//! clamped to `0..=max` on every change; mutators report the change as
//! `(old, new)` so the caller can emit a notification, or `None` when the
//! clamp left the value unchanged.

use serde::{Deserialize, Serialize};

/// Bounded credit counter.
///
/// ```
/// use cursed_hoard::rules::CreditLedger;
///
/// let mut credit = CreditLedger::new(5, 6);
/// assert_eq!(credit.adjust(3), Some((5, 6)));
/// assert_eq!(credit.adjust(1), None);
/// assert!(credit.spend());
/// assert_eq!(credit.value(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditLedger {
    value: u8,
    max: u8,
}

impl CreditLedger {
    /// Create a ledger; `initial` is clamped to `max`.
    #[must_use]
    pub fn new(initial: u8, max: u8) -> Self {
        Self {
            value: initial.min(max),
            max,
        }
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    #[must_use]
    pub fn max(&self) -> u8 {
        self.max
    }

    #[must_use]
    pub fn can_spend(&self) -> bool {
        self.value > 0
    }

    /// Add `delta` (may be negative), clamped to `0..=max`.
    pub fn adjust(&mut self, delta: i32) -> Option<(u8, u8)> {
        let target = (i32::from(self.value) + delta).clamp(0, i32::from(self.max));
        self.set(target as u8)
    }

    /// Set the credit, clamped to `max`.
    pub fn set(&mut self, value: u8) -> Option<(u8, u8)> {
        let old = self.value;
        self.value = value.min(self.max);
        (old != self.value).then_some((old, self.value))
    }

    /// Spend one credit. Returns `false` when there was none.
    pub fn spend(&mut self) -> bool {
        self.adjust(-1).is_some()
    }
}
