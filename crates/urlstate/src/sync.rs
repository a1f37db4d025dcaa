//! Inbound URL-to-state synchronization.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};
use veyra_core::fx::FxConfig;

use crate::history::{History, Subscription};
use crate::query::parse_query;

/// Shared handle to the session's selection state.
pub type SharedFxConfig = Rc<RefCell<FxConfig>>;

/// Keeps a shared [`FxConfig`] in sync with the session history.
///
/// Synchronization is inbound-only: query strings drive the state, the
/// state never writes the URL back. While a `UrlState` lives, exactly one
/// history listener is registered on its behalf; dropping it removes the
/// listener and stops all synchronization.
#[derive(Debug)]
pub struct UrlState {
    config: SharedFxConfig,
    history: History,
    _listener: Subscription,
}

impl UrlState {
    /// Applies the current query string to `config`, then subscribes to
    /// traversal events so back/forward navigation resynchronizes the state.
    #[must_use]
    pub fn mount(config: SharedFxConfig, history: &History) -> Self {
        apply_query(&config, &history.query());
        let listener = {
            let config = Rc::clone(&config);
            history.subscribe(move |query| apply_query(&config, query))
        };
        info!("URL state mounted");
        Self { config, history: history.clone(), _listener: listener }
    }

    /// Re-applies the current query string on demand, for rewrites the
    /// history host performs silently.
    pub fn reload(&self) {
        apply_query(&self.config, &self.history.query());
    }

    /// The state this synchronizer drives.
    #[must_use]
    pub fn config(&self) -> &SharedFxConfig {
        &self.config
    }
}

impl Drop for UrlState {
    fn drop(&mut self) {
        debug!("URL state unmounted");
    }
}

fn apply_query(config: &SharedFxConfig, query: &str) {
    let params = parse_query(query);
    config.borrow_mut().load_from_url(&params);
    debug!("Applied query {query:?} to selection state");
}
