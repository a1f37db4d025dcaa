//! Rate table storage and cross-rate math.

use std::collections::BTreeMap;

use serde::Serialize;

use super::error::RateTableError;
use crate::reference::BASE_CURRENCY;
use crate::types::CurrencyCode;

/// Factor used for currencies the table does not quote.
const NEUTRAL_RATE: f64 = 1.0;

/// Mapping from currency code to its value relative to the base unit.
///
/// One unit of the base currency buys `rate` units of the quoted currency.
/// A table is immutable once built; swapping the data in means building a
/// new table and handing it to the owner wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: BTreeMap<CurrencyCode, f64>,
}

impl RateTable {
    /// Builds a table with no entries. Every cross rate over it is neutral.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a validated table from `(code, rate)` pairs.
    ///
    /// Later duplicates of a code overwrite earlier ones.
    ///
    /// # Errors
    ///
    /// Rejects non-finite and non-positive rates, and a base-currency entry
    /// other than exactly 1.0.
    pub fn new<C, I>(pairs: I) -> Result<Self, RateTableError>
    where
        C: Into<CurrencyCode>,
        I: IntoIterator<Item = (C, f64)>,
    {
        let mut rates = BTreeMap::new();
        for (code, rate) in pairs {
            let code = code.into();
            if !rate.is_finite() {
                return Err(RateTableError::NonFiniteRate { code });
            }
            if rate <= 0.0 {
                return Err(RateTableError::NonPositiveRate { code, rate });
            }
            rates.insert(code, rate);
        }
        #[allow(clippy::float_cmp)] // Base parity is definitional, not computed.
        if let Some(&rate) = rates.get(BASE_CURRENCY) {
            if rate != 1.0 {
                return Err(RateTableError::BaseRateNotUnity {
                    base: CurrencyCode::from(BASE_CURRENCY),
                    rate,
                });
            }
        }
        Ok(Self { rates })
    }

    /// Rate for `code` relative to the base unit.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Whether the table quotes `code`.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    /// Number of quoted currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the table carries no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates over `(code, rate)` entries in code order.
    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, CurrencyCode, f64> {
        self.rates.iter()
    }

    /// Multiplicative factor converting an amount in `from` into `to`.
    ///
    /// Identity pairs and an empty table short-circuit to exactly 1.0, and
    /// unknown codes contribute a neutral 1.0 instead of failing. The result
    /// is plain floating-point division with no rounding applied.
    #[must_use]
    pub fn cross_rate(&self, from: &str, to: &str) -> f64 {
        if self.is_empty() || from == to {
            return NEUTRAL_RATE;
        }
        // Both legs are quoted against the base, so A -> B is rate(B) / rate(A).
        let from_rate = self.get(from).unwrap_or(NEUTRAL_RATE);
        let to_rate = self.get(to).unwrap_or(NEUTRAL_RATE);
        to_rate / from_rate
    }
}

impl<'a> IntoIterator for &'a RateTable {
    type Item = (&'a CurrencyCode, &'a f64);
    type IntoIter = std::collections::btree_map::Iter<'a, CurrencyCode, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.rates.iter()
    }
}
