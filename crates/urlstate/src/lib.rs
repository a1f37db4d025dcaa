//! URL synchronization for the Veyra selection state.
//!
//! The shareable-URL contract is inbound-only: query strings drive the
//! state, the state never writes the URL back. Three pieces cover it:
//!
//! - `history` - Session history host with browser-style navigation
//! - `query` - Tolerant query-string parsing
//! - `sync` - Ties a shared [`FxConfig`](veyra_core::fx::FxConfig) to
//!   navigation events for its lifetime

pub mod history;
pub mod query;
pub mod sync;

pub use history::{History, Subscription};
pub use query::parse_query;
pub use sync::{SharedFxConfig, UrlState};
