//! Base-relative rate table and cross-rate lookup.

pub mod error;
pub mod table;

#[cfg(test)]
mod props;

pub use error::RateTableError;
pub use table::RateTable;
