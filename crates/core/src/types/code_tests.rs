use std::borrow::Borrow;
use std::collections::BTreeMap;

use super::*;

#[test]
fn test_code_from_str() {
    let code = CurrencyCode::from("EUR");
    assert_eq!(code.as_str(), "EUR");
}

#[test]
fn test_code_from_string() {
    let code = CountryCode::from(String::from("GB"));
    assert_eq!(code.as_str(), "GB");
}

#[test]
fn test_code_display() {
    let code = ChargeType::new("destination");
    assert_eq!(format!("{code}"), "destination");
}

#[test]
fn test_code_accepts_unknown_values() {
    // Leniency is part of the contract: no membership check anywhere.
    let code = FeePayer::from("someone-else");
    assert_eq!(code, "someone-else");
}

#[test]
fn test_code_compares_against_str() {
    let code = CurrencyCode::from("JPY");
    assert_eq!(code, "JPY");
    assert_eq!(code, *"JPY");
    assert!(code != "USD");
}

#[test]
fn test_code_borrow_enables_str_lookup() {
    let mut rates: BTreeMap<CurrencyCode, f64> = BTreeMap::new();
    rates.insert(CurrencyCode::from("USD"), 1.0);
    assert!(rates.contains_key("USD"));
    assert!(!rates.contains_key("EUR"));
    let code = CurrencyCode::from("USD");
    let key: &str = code.borrow();
    assert_eq!(key, "USD");
}

#[test]
fn test_code_serde_is_transparent() {
    let code = CurrencyCode::from("CHF");
    assert_eq!(serde_json::to_string(&code).unwrap(), "\"CHF\"");
    let back: CurrencyCode = serde_json::from_str("\"CHF\"").unwrap();
    assert_eq!(back, code);
}
