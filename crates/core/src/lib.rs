//! Core selection state for Veyra.
//!
//! This crate contains pure domain logic with ZERO web or database
//! dependencies: the user's current fee/currency selections, the static
//! reference tables backing the selectors, and the cross-rate math derived
//! from them.
//!
//! # Modules
//!
//! - `types` - Lenient typed string codes (countries, currencies, ...)
//! - `reference` - Static reference tables and defaults
//! - `rates` - Base-relative rate table and cross-rate lookup
//! - `fx` - The mutable configuration state and its derived values

pub mod fx;
pub mod rates;
pub mod reference;
pub mod types;
