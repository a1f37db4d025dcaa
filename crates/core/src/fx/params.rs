//! Query-parameter collection for the shareable-URL contract.

use crate::types::{ChargeType, CountryCode, CurrencyCode, FeePayer};

/// Values carried by the recognized query-string keys.
///
/// One optional slot per key; absent slots leave the matching state field
/// untouched when loaded. The wire keys are the camelCase names listed on
/// [`set`](UrlParams::set).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    /// `chargeType`
    pub charge_type: Option<ChargeType>,
    /// `platformCountry`
    pub platform_country: Option<CountryCode>,
    /// `connectedCountry`
    pub connected_country: Option<CountryCode>,
    /// `presentmentCurrency`
    pub presentment_currency: Option<CurrencyCode>,
    /// `platformSettlementCurrency`
    pub platform_settlement_currency: Option<CurrencyCode>,
    /// `connectedSettlementCurrency`
    pub connected_settlement_currency: Option<CurrencyCode>,
    /// `feePayer`
    pub fee_payer: Option<FeePayer>,
}

impl UrlParams {
    /// Records `value` under a wire key.
    ///
    /// Recognized keys are `chargeType`, `platformCountry`,
    /// `connectedCountry`, `presentmentCurrency`,
    /// `platformSettlementCurrency`, `connectedSettlementCurrency` and
    /// `feePayer`. Unrecognized keys are ignored, and the first value seen
    /// for a key wins, the way browsers resolve repeated query parameters.
    pub fn set(&mut self, key: &str, value: &str) {
        match key {
            "chargeType" if self.charge_type.is_none() => {
                self.charge_type = Some(ChargeType::from(value));
            }
            "platformCountry" if self.platform_country.is_none() => {
                self.platform_country = Some(CountryCode::from(value));
            }
            "connectedCountry" if self.connected_country.is_none() => {
                self.connected_country = Some(CountryCode::from(value));
            }
            "presentmentCurrency" if self.presentment_currency.is_none() => {
                self.presentment_currency = Some(CurrencyCode::from(value));
            }
            "platformSettlementCurrency" if self.platform_settlement_currency.is_none() => {
                self.platform_settlement_currency = Some(CurrencyCode::from(value));
            }
            "connectedSettlementCurrency" if self.connected_settlement_currency.is_none() => {
                self.connected_settlement_currency = Some(CurrencyCode::from(value));
            }
            "feePayer" if self.fee_payer.is_none() => {
                self.fee_payer = Some(FeePayer::from(value));
            }
            _ => {}
        }
    }

    /// Whether no recognized key carried a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charge_type.is_none()
            && self.platform_country.is_none()
            && self.connected_country.is_none()
            && self.presentment_currency.is_none()
            && self.platform_settlement_currency.is_none()
            && self.connected_settlement_currency.is_none()
            && self.fee_payer.is_none()
    }
}
