//! Derived indexes over a catalog snapshot: token set and quote map.

use crate::core::catalog::PairCatalog;
use crate::core::error::DataIntegrityError;
use crate::core::lookup::RateLookup;
use crate::core::pair::{PairRecord, split_pair_code};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// The set of all currency symbols referenced by at least one pair.
///
/// Derived data: built once per catalog snapshot, immutable afterwards, and
/// rebuilt wholesale when the catalog changes. Membership is exact and
/// case-sensitive, matching the upstream symbol strings.
#[derive(Debug, Clone, Default)]
pub struct TokenIndex {
    symbols: HashSet<String>,
}

impl TokenIndex {
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// The immutable build product for one catalog snapshot: the token index,
/// the quote lookup, and the integrity diagnostics collected on the way.
#[derive(Debug, Clone, Default)]
pub struct ExchangeIndex {
    tokens: TokenIndex,
    rates: RateLookup,
    diagnostics: Vec<DataIntegrityError>,
}

impl ExchangeIndex {
    /// Builds both indexes in a single pass over the catalog.
    ///
    /// Malformed pair codes are skipped and recorded rather than failing the
    /// build, so one bad upstream record cannot disable the whole exchange
    /// feature. Duplicate codes resolve last-write-wins and are recorded.
    pub fn build(catalog: &PairCatalog) -> Self {
        let mut symbols = HashSet::new();
        let mut quotes = HashMap::new();
        let mut diagnostics = Vec::new();

        for record in catalog.records() {
            let (source, dest) = match split_pair_code(&record.pair) {
                Ok(halves) => halves,
                Err(err) => {
                    warn!(code = %record.pair, "Skipping malformed pair code");
                    diagnostics.push(err);
                    continue;
                }
            };

            symbols.insert(source.to_string());
            symbols.insert(dest.to_string());

            if quotes.insert(record.pair.clone(), record.clone()).is_some() {
                warn!(code = %record.pair, "Duplicate pair code, keeping the later record");
                diagnostics.push(DataIntegrityError::DuplicatePairCode {
                    code: record.pair.clone(),
                });
            }
        }

        Self {
            tokens: TokenIndex { symbols },
            rates: RateLookup::new(quotes),
            diagnostics,
        }
    }

    /// Whether `symbol` participates in at least one listed pair.
    ///
    /// Pure membership check: `false` for unknown, empty, or case-mismatched
    /// symbols. Never errors.
    pub fn supports(&self, symbol: &str) -> bool {
        self.tokens.contains(symbol)
    }

    /// Resolves the directional quote from `source` to `dest`, if listed.
    pub fn quote(&self, source: &str, dest: &str) -> Option<&PairRecord> {
        self.rates.quote(source, dest)
    }

    pub fn tokens(&self) -> &TokenIndex {
        &self.tokens
    }

    pub fn rates(&self) -> &RateLookup {
        &self.rates
    }

    /// Integrity errors recorded while building this snapshot.
    pub fn diagnostics(&self) -> &[DataIntegrityError] {
        &self.diagnostics
    }
}
