//! Common types used across the selection state.

pub mod code;

#[cfg(test)]
mod code_tests;

pub use code::{ChargeType, CountryCode, CurrencyCode, FeePayer};
