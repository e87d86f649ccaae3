//! The pair record wire entity and pair-code parsing.

use crate::core::error::DataIntegrityError;
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Separator between the source and destination symbols in a pair code.
pub const PAIR_SEPARATOR: char = '_';

/// One directional quote between two currencies, exactly as supplied by the
/// upstream exchange data source.
///
/// The on-disk field names (`maxLimit`, `minerFee`) are preserved so existing
/// catalog assets deserialize unchanged. `rate` stays a string to keep the
/// upstream precision; consumers parse it on demand via [`quoted_rate`].
///
/// A pair and its inverse (`BCH_DASH` and `DASH_BCH`) are distinct records
/// and carry no reciprocal-rate guarantee.
///
/// [`quoted_rate`]: PairRecord::quoted_rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairRecord {
    /// Composite code `"<SOURCE>_<DEST>"`.
    pub pair: String,
    /// Decimal quote from source to destination currency, as a string.
    pub rate: String,
    /// Soft cap on the source-currency amount for one conversion.
    pub limit: f64,
    /// Hard cap; may exceed `limit` (upstream liquidity policy, not modeled).
    pub max_limit: f64,
    /// Minimum source-currency amount accepted; `0` for disabled pairs.
    pub min: f64,
    /// Network fee charged in destination-currency units.
    pub miner_fee: f64,
}

impl PairRecord {
    /// Parses the quoted rate into a precise decimal.
    pub fn quoted_rate(&self) -> Result<Decimal> {
        Decimal::from_str(&self.rate)
            .with_context(|| format!("Invalid rate '{}' for pair '{}'", self.rate, self.pair))
    }

    /// Splits this record's pair code into `(source, dest)` symbols.
    pub fn symbols(&self) -> Result<(&str, &str), DataIntegrityError> {
        split_pair_code(&self.pair)
    }
}

/// Splits a composite pair code on the `_` separator.
///
/// A well-formed code has exactly one separator and two non-empty halves;
/// anything else (no separator, extra separators, empty half) is a
/// [`DataIntegrityError::MalformedPairCode`].
pub fn split_pair_code(code: &str) -> Result<(&str, &str), DataIntegrityError> {
    let mut halves = code.split(PAIR_SEPARATOR);
    match (halves.next(), halves.next(), halves.next()) {
        (Some(source), Some(dest), None) if !source.is_empty() && !dest.is_empty() => {
            Ok((source, dest))
        }
        _ => Err(DataIntegrityError::MalformedPairCode {
            code: code.to_string(),
        }),
    }
}

/// Builds the composite lookup key for a directional `(source, dest)` pair.
pub fn pair_code(source: &str, dest: &str) -> String {
    format!("{source}{PAIR_SEPARATOR}{dest}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn record(pair: &str, rate: &str) -> PairRecord {
        PairRecord {
            pair: pair.to_string(),
            rate: rate.to_string(),
            limit: 4.0,
            max_limit: 8.0,
            min: 0.001,
            miner_fee: 0.002,
        }
    }

    #[test]
    fn test_split_well_formed_code() {
        assert_eq!(split_pair_code("BCH_DASH"), Ok(("BCH", "DASH")));
        assert_eq!(split_pair_code("ETH_1ST"), Ok(("ETH", "1ST")));
    }

    #[test]
    fn test_split_rejects_malformed_codes() {
        for code in ["BCHDASH", "BCH_DASH_ETH", "_DASH", "BCH_", "_", ""] {
            assert_eq!(
                split_pair_code(code),
                Err(DataIntegrityError::MalformedPairCode {
                    code: code.to_string()
                }),
                "code '{code}' should be rejected"
            );
        }
    }

    #[test]
    fn test_quoted_rate_parses_string_precisely() {
        let rec = record("BTC_ETH", "31.54648649");
        assert_eq!(
            rec.quoted_rate().unwrap(),
            Decimal::from_str("31.54648649").unwrap()
        );

        let bad = record("BTC_ETH", "not-a-number");
        assert!(bad.quoted_rate().is_err());
    }

    #[test]
    fn test_wire_format_field_names() {
        let json = r#"{
            "rate": "0.02182274",
            "limit": 45.13289619,
            "pair": "BCH_DASH",
            "maxLimit": 90.26579238,
            "min": 0.0081251,
            "minerFee": 0.01
        }"#;

        let rec: PairRecord = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(rec.pair, "BCH_DASH");
        assert_eq!(rec.rate, "0.02182274");
        assert_eq!(rec.max_limit, 90.26579238);
        assert_eq!(rec.miner_fee, 0.01);

        // Serializing must keep the upstream camelCase names.
        let round_trip = serde_json::to_string(&rec).unwrap();
        assert!(round_trip.contains("\"maxLimit\""));
        assert!(round_trip.contains("\"minerFee\""));
    }
}
