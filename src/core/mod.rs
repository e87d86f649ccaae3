//! Core domain types for the exchange pair index

pub mod catalog;
pub mod error;
pub mod index;
pub mod lookup;
pub mod pair;

// Re-export main types for cleaner imports
pub use catalog::PairCatalog;
pub use error::DataIntegrityError;
pub use index::{ExchangeIndex, TokenIndex};
pub use lookup::RateLookup;
pub use pair::PairRecord;
