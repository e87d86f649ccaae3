pub mod core;
pub mod shift;

// Re-export the public surface for cleaner imports
pub use crate::core::catalog::PairCatalog;
pub use crate::core::error::DataIntegrityError;
pub use crate::core::index::{ExchangeIndex, TokenIndex};
pub use crate::core::lookup::RateLookup;
pub use crate::core::pair::PairRecord;
pub use crate::shift::{ShiftExchange, check_shift_token_availability, init};
