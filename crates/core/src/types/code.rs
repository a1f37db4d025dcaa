//! Typed string codes for type-safe selection fields.
//!
//! Using typed codes prevents accidentally passing a `CountryCode` where a
//! `CurrencyCode` is expected. Values are deliberately NOT checked against
//! the reference tables: the selection state accepts unknown codes and lets
//! them degrade gracefully downstream (neutral rate, unchanged defaults).

use serde::{Deserialize, Serialize};

/// Macro to generate lenient code wrappers.
macro_rules! typed_code {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a code from any string value.
            #[must_use]
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            /// Returns the code as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self(code.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                Self(code)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

typed_code!(
    CountryCode,
    "ISO-style country code (e.g. \"GB\"). Not validated against the country table."
);
typed_code!(
    CurrencyCode,
    "ISO-style currency code (e.g. \"EUR\"). Not validated against the rate table."
);
typed_code!(
    ChargeType,
    "Transaction-processing mode; `direct`, `destination`, and `sct` are the catalogued values."
);
typed_code!(
    FeePayer,
    "Party bearing platform fees; `connected` and `platform` are the catalogued values."
);
