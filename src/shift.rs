//! Process-wide exchange snapshot and the shift availability entry point.
//!
//! The index is built once per catalog snapshot and reused across queries;
//! a catalog refresh builds a fresh immutable [`ExchangeIndex`] and swaps it
//! in atomically, so a query in flight never observes a half-built index.

use crate::core::catalog::PairCatalog;
use crate::core::index::ExchangeIndex;
use crate::core::pair::PairRecord;
use std::sync::{Arc, OnceLock, RwLock};
use tracing::{debug, info};

/// Shared handle over the current exchange snapshot.
///
/// Queries clone the inner [`Arc`] under a read lock and run against that
/// snapshot; [`refresh`] replaces the `Arc` wholesale and never mutates an
/// index in place.
///
/// [`refresh`]: ShiftExchange::refresh
pub struct ShiftExchange {
    index: RwLock<Arc<ExchangeIndex>>,
}

impl ShiftExchange {
    pub fn new(catalog: &PairCatalog) -> Self {
        Self {
            index: RwLock::new(Arc::new(ExchangeIndex::build(catalog))),
        }
    }

    /// Whether `symbol` is tradable through at least one listed pair.
    pub fn supports(&self, symbol: &str) -> bool {
        self.snapshot().supports(symbol)
    }

    /// The current quote for converting `source` to `dest`.
    pub fn quote(&self, source: &str, dest: &str) -> Option<PairRecord> {
        self.snapshot().quote(source, dest).cloned()
    }

    /// Rebuilds the index from `catalog` and swaps it in atomically.
    pub fn refresh(&self, catalog: &PairCatalog) {
        let next = Arc::new(ExchangeIndex::build(catalog));
        info!(
            tokens = next.tokens().len(),
            skipped = next.diagnostics().len(),
            "Refreshed exchange index"
        );
        match self.index.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }

    /// The current immutable snapshot.
    pub fn snapshot(&self) -> Arc<ExchangeIndex> {
        match self.index.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }
}

static EXCHANGE: OnceLock<ShiftExchange> = OnceLock::new();

/// Initializes the process-wide exchange from a catalog snapshot.
///
/// First call builds the index; later calls refresh it in place, so callers
/// can reuse this for periodic catalog reloads.
pub fn init(catalog: &PairCatalog) -> &'static ShiftExchange {
    let mut fresh = false;
    let exchange = EXCHANGE.get_or_init(|| {
        debug!("Initializing process-wide exchange index");
        fresh = true;
        ShiftExchange::new(catalog)
    });
    if !fresh {
        exchange.refresh(catalog);
    }
    exchange
}

/// Whether `symbol` can be shifted through the exchange at all.
///
/// Symbols are exact, case-sensitive strings. Returns `false` for unknown
/// symbols, the empty string, and before [`init`] has run (an uninitialized
/// exchange degrades like an empty catalog). Never errors.
pub fn check_shift_token_availability(symbol: &str) -> bool {
    EXCHANGE.get().is_some_and(|exchange| exchange.supports(symbol))
}
