//! Validation errors for rate table construction.

use thiserror::Error;

use crate::types::CurrencyCode;

/// Ways a set of `(code, rate)` pairs can fail validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateTableError {
    // ========== Value Errors ==========
    /// A rate was zero or negative.
    #[error("Rate for {code} must be strictly positive, got {rate}")]
    NonPositiveRate {
        /// Currency whose rate was rejected.
        code: CurrencyCode,
        /// The offending value.
        rate: f64,
    },

    /// A rate was NaN or infinite.
    #[error("Rate for {code} is not a finite number")]
    NonFiniteRate {
        /// Currency whose rate was rejected.
        code: CurrencyCode,
    },

    // ========== Base-Parity Errors ==========
    /// The base currency carried an entry other than exactly 1.0.
    #[error("Base currency {base} must be quoted at exactly 1.0, got {rate}")]
    BaseRateNotUnity {
        /// The base currency every rate is quoted against.
        base: CurrencyCode,
        /// The offending value.
        rate: f64,
    },
}
