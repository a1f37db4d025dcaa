//! Static reference tables backing the selectors.
//!
//! Pure constants: base-relative exchange rates, the country to default
//! settlement currency map, and the display lists for every dropdown. No
//! behavior, no side effects, no error conditions.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::rates::RateTable;

/// Currency all reference rates are quoted against, at exactly 1.0.
pub const BASE_CURRENCY: &str = "USD";

/// One selectable entry, pairing a stable code with a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Stable code stored in the selection state and in shared URLs.
    pub code: &'static str,
    /// Human-readable label for the dropdown.
    pub name: &'static str,
}

/// Countries offered by the platform and connected-account selectors.
pub const AVAILABLE_COUNTRIES: &[SelectOption] = &[
    SelectOption { code: "US", name: "United States" },
    SelectOption { code: "GB", name: "United Kingdom" },
    SelectOption { code: "IE", name: "Ireland" },
    SelectOption { code: "FR", name: "France" },
    SelectOption { code: "DE", name: "Germany" },
    SelectOption { code: "JP", name: "Japan" },
    SelectOption { code: "CA", name: "Canada" },
    SelectOption { code: "AU", name: "Australia" },
];

/// Currencies offered by the presentment-currency selector.
pub const AVAILABLE_CURRENCIES: &[SelectOption] = &[
    SelectOption { code: "USD", name: "US Dollar" },
    SelectOption { code: "EUR", name: "Euro" },
    SelectOption { code: "GBP", name: "British Pound" },
    SelectOption { code: "CHF", name: "Swiss Franc" },
    SelectOption { code: "JPY", name: "Japanese Yen" },
    SelectOption { code: "CAD", name: "Canadian Dollar" },
    SelectOption { code: "AUD", name: "Australian Dollar" },
];

/// Transaction-processing modes.
pub const CHARGE_TYPES: &[SelectOption] = &[
    SelectOption { code: "direct", name: "Direct Charge" },
    SelectOption { code: "destination", name: "Destination Charge" },
    SelectOption { code: "sct", name: "Separate Charge and Transfer" },
];

/// Parties that can bear the platform fees.
pub const FEE_PAYER_OPTIONS: &[SelectOption] = &[
    SelectOption { code: "connected", name: "Connected Account Pays" },
    SelectOption { code: "platform", name: "Platform Pays" },
];

/// Default settlement currency inferred from a country choice.
///
/// Countries without an entry (IE among the selectable ones) leave the
/// settlement currency untouched when selected.
#[must_use]
pub fn default_settlement_currency(country: &str) -> Option<&'static str> {
    match country {
        "US" => Some("USD"),
        "FR" | "DE" => Some("EUR"),
        "GB" => Some("GBP"),
        "JP" => Some("JPY"),
        "CA" => Some("CAD"),
        "AU" => Some("AUD"),
        _ => None,
    }
}

static REFERENCE_RATES: Lazy<RateTable> = Lazy::new(|| {
    RateTable::new([
        ("AUD", 1.5383),
        ("CAD", 1.3655),
        ("CHF", 0.81708),
        ("EUR", 0.86896),
        ("GBP", 0.74314),
        ("JPY", 144.83),
        (BASE_CURRENCY, 1.0),
    ])
    .expect("reference rate table is valid")
});

/// The static base-relative rate table shipped with the application.
#[must_use]
pub fn reference_rates() -> &'static RateTable {
    &REFERENCE_RATES
}
