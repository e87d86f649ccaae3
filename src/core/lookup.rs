//! Directional quote lookup keyed by composite pair code.

use crate::core::pair::{PairRecord, pair_code};
use std::collections::HashMap;

/// Resolves a directional `(source, dest)` symbol pair to its record.
///
/// Built once per catalog snapshot, in the same pass as the token index.
/// Lookups are direction-sensitive: `BCH_DASH` existing says nothing about
/// `DASH_BCH`, and the two carry independent rates when both exist.
#[derive(Debug, Clone, Default)]
pub struct RateLookup {
    quotes: HashMap<String, PairRecord>,
}

impl RateLookup {
    pub(crate) fn new(quotes: HashMap<String, PairRecord>) -> Self {
        Self { quotes }
    }

    /// Returns the record quoting a conversion from `source` to `dest`, if listed.
    pub fn quote(&self, source: &str, dest: &str) -> Option<&PairRecord> {
        self.quotes.get(&pair_code(source, dest))
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
