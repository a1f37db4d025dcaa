//! The mutable currency/fee selection and its derived values.

pub mod params;


pub use params::UrlParams;

use serde::Serialize;

use crate::rates::RateTable;
use crate::reference;
use crate::types::{ChargeType, CountryCode, CurrencyCode, FeePayer};

/// The user's current fee and currency selections.
///
/// One instance lives for the whole session and every mutation goes through
/// a named setter or the URL-driven bulk load, so the country-to-settlement
/// inference cannot be bypassed by accident. Serialized snapshots use the
/// same camelCase keys as the shareable-URL contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FxConfig {
    charge_type: ChargeType,
    platform_country: CountryCode,
    connected_country: CountryCode,
    presentment_currency: CurrencyCode,
    platform_settlement_currency: CurrencyCode,
    connected_settlement_currency: CurrencyCode,
    rates: RateTable,
    fee_payer: FeePayer,
}

impl FxConfig {
    /// Creates the session state with the application defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            charge_type: ChargeType::from("direct"),
            platform_country: CountryCode::from("GB"),
            // Ireland has no settlement-currency mapping; EUR is seeded here.
            connected_country: CountryCode::from("IE"),
            presentment_currency: CurrencyCode::from("CHF"),
            platform_settlement_currency: CurrencyCode::from("GBP"),
            connected_settlement_currency: CurrencyCode::from("EUR"),
            rates: reference::reference_rates().clone(),
            fee_payer: FeePayer::from("connected"),
        }
    }

    /// Creates the session state with `rates` in place of the reference table.
    #[must_use]
    pub fn with_rates(rates: RateTable) -> Self {
        Self { rates, ..Self::new() }
    }

    /// Current charge type.
    #[must_use]
    pub fn charge_type(&self) -> &ChargeType {
        &self.charge_type
    }

    /// Country the platform account operates from.
    #[must_use]
    pub fn platform_country(&self) -> &CountryCode {
        &self.platform_country
    }

    /// Country the connected account operates from.
    #[must_use]
    pub fn connected_country(&self) -> &CountryCode {
        &self.connected_country
    }

    /// Currency the customer is charged in.
    #[must_use]
    pub fn presentment_currency(&self) -> &CurrencyCode {
        &self.presentment_currency
    }

    /// Currency the platform account settles in.
    #[must_use]
    pub fn platform_settlement_currency(&self) -> &CurrencyCode {
        &self.platform_settlement_currency
    }

    /// Currency the connected account settles in.
    #[must_use]
    pub fn connected_settlement_currency(&self) -> &CurrencyCode {
        &self.connected_settlement_currency
    }

    /// Which party absorbs the processing fee.
    #[must_use]
    pub fn fee_payer(&self) -> &FeePayer {
        &self.fee_payer
    }

    /// Rate table backing [`rate`](Self::rate).
    #[must_use]
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Sets the charge type verbatim. No validation.
    pub fn set_charge_type(&mut self, charge_type: impl Into<ChargeType>) {
        self.charge_type = charge_type.into();
    }

    /// Sets the platform country and, when the country maps to a default
    /// settlement currency, overwrites the platform settlement currency with
    /// it. Countries without a mapping leave the settlement currency alone.
    pub fn set_platform_country(&mut self, country: impl Into<CountryCode>) {
        self.platform_country = country.into();
        if let Some(currency) =
            reference::default_settlement_currency(self.platform_country.as_str())
        {
            self.platform_settlement_currency = CurrencyCode::from(currency);
        }
    }

    /// Sets the connected-account country, with the same settlement-currency
    /// inference as [`set_platform_country`](Self::set_platform_country).
    pub fn set_connected_country(&mut self, country: impl Into<CountryCode>) {
        self.connected_country = country.into();
        if let Some(currency) =
            reference::default_settlement_currency(self.connected_country.as_str())
        {
            self.connected_settlement_currency = CurrencyCode::from(currency);
        }
    }

    /// Sets the presentment currency verbatim. No validation.
    pub fn set_presentment_currency(&mut self, currency: impl Into<CurrencyCode>) {
        self.presentment_currency = currency.into();
    }

    /// Sets the fee payer verbatim. No validation.
    pub fn set_fee_payer(&mut self, payer: impl Into<FeePayer>) {
        self.fee_payer = payer.into();
    }

    /// One-line summary of the current selection, recomputed on every call.
    #[must_use]
    pub fn selection_summary(&self) -> String {
        format!(
            "Platform: {} ({}) | Connected: {} ({}) | Charge: {}",
            self.platform_country,
            self.platform_settlement_currency,
            self.connected_country,
            self.connected_settlement_currency,
            self.presentment_currency,
        )
    }

    /// Multiplicative factor converting an amount in `from` into `to`.
    ///
    /// Delegates to [`RateTable::cross_rate`]: identity pairs and an empty
    /// table yield exactly 1.0, unknown codes fall back to base parity.
    #[must_use]
    pub fn rate(&self, from: &str, to: &str) -> f64 {
        self.rates.cross_rate(from, to)
    }

    /// Overwrites exactly the fields present in `params`.
    ///
    /// Absent fields keep their current values. Present values are stored
    /// verbatim, with no settlement-currency inference, so a URL naming only
    /// `platformCountry` does not disturb the settlement currencies. Loading
    /// the same parameters twice yields the same state.
    pub fn load_from_url(&mut self, params: &UrlParams) {
        if let Some(charge_type) = &params.charge_type {
            self.charge_type = charge_type.clone();
        }
        if let Some(country) = &params.platform_country {
            self.platform_country = country.clone();
        }
        if let Some(country) = &params.connected_country {
            self.connected_country = country.clone();
        }
        if let Some(currency) = &params.presentment_currency {
            self.presentment_currency = currency.clone();
        }
        if let Some(currency) = &params.platform_settlement_currency {
            self.platform_settlement_currency = currency.clone();
        }
        if let Some(currency) = &params.connected_settlement_currency {
            self.connected_settlement_currency = currency.clone();
        }
        if let Some(payer) = &params.fee_payer {
            self.fee_payer = payer.clone();
        }
    }
}

impl Default for FxConfig {
    fn default() -> Self {
        Self::new()
    }
}
