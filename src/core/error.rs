//! Data-integrity classification for catalog build diagnostics.

use thiserror::Error;

/// A catalog record that could not be indexed as supplied.
///
/// These are recovered locally during the index build: the offending record
/// is skipped (or overwritten, for duplicates) and the error is recorded in
/// the build diagnostics. Query callers never see them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataIntegrityError {
    /// The pair code does not split into exactly two non-empty symbols.
    #[error("malformed pair code '{code}': expected '<SOURCE>_<DEST>'")]
    MalformedPairCode { code: String },

    /// The same pair code appeared more than once; the later record wins.
    #[error("duplicate pair code '{code}': later record replaces the earlier one")]
    DuplicatePairCode { code: String },
}
