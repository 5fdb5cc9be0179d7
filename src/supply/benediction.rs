//! Weighted benediction supply.
//!
//! Benediction cards are created one at a time. Each draw walks the
//! catalog in order, skipping entries whose effect is excluded, and takes
//! the first entry whose cumulative weight reaches a uniform pick in
//! `0..total_weight`.

use crate::cards::{BenedictionDefinition, BenedictionEffect, BenedictionKind};
use crate::core::RandomSource;

/// The fixed benediction catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenedictionCatalog {
    entries: Vec<BenedictionDefinition>,
}

impl Default for BenedictionCatalog {
    fn default() -> Self {
        Self::from_kinds(BenedictionKind::ALL)
    }
}

impl BenedictionCatalog {
    /// The standard eight-entry catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
    }

    /// Catalog restricted to `kinds`, in the given order.
    #[must_use]
    pub fn from_kinds(kinds: impl IntoIterator<Item = BenedictionKind>) -> Self {
        Self {
            entries: kinds.into_iter().map(BenedictionKind::definition).collect(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[BenedictionDefinition] {
        &self.entries
    }

    fn eligible<'a>(
        &'a self,
        excluded: &'a [BenedictionEffect],
    ) -> impl Iterator<Item = &'a BenedictionDefinition> + 'a {
        self.entries
            .iter()
            .filter(move |entry| !excluded.contains(&entry.effect))
    }

    /// Sum of weights of the entries not excluded.
    #[must_use]
    pub fn total_weight(&self, excluded: &[BenedictionEffect]) -> u32 {
        self.eligible(excluded).map(|entry| entry.weight).sum()
    }

    /// Draw a catalog entry whose effect is not in `excluded`.
    ///
    /// # Panics
    ///
    /// Panics when every entry is excluded. The standard catalog has six
    /// distinct effects against two slots, so this only happens with a
    /// misconfigured catalog.
    pub fn draw(&self, excluded: &[BenedictionEffect], rng: &mut dyn RandomSource) -> BenedictionKind {
        let total = self.total_weight(excluded);
        assert!(
            total > 0,
            "benediction catalog exhausted under exclusion {:?}",
            excluded
        );

        let pick = rng.next_below(total as usize) as u32;
        let mut cumulative = 0;
        for entry in self.eligible(excluded) {
            cumulative += entry.weight;
            if cumulative >= pick {
                return entry.kind;
            }
        }
        unreachable!("pick {} is below total weight {}", pick, total)
    }
}
