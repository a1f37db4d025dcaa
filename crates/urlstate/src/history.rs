//! Session history host with browser-style navigation semantics.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Callback invoked with the query string of the entry a traversal lands on.
type Listener = Rc<RefCell<dyn FnMut(&str)>>;

struct ListenerEntry {
    id: u64,
    callback: Listener,
}

struct HistoryInner {
    /// Query string per entry; holds at least one entry at all times.
    entries: Vec<String>,
    /// Index of the current entry.
    index: usize,
    listeners: Vec<ListenerEntry>,
    next_listener_id: u64,
}

/// Single-threaded session history.
///
/// Mirrors browser semantics: [`push`](History::push) and
/// [`replace`](History::replace) change the current entry silently, while
/// the [`back`](History::back) and [`forward`](History::forward) traversals
/// notify subscribers with the query string of the entry they land on.
///
/// Clones share the same underlying session.
#[derive(Clone)]
pub struct History {
    inner: Rc<RefCell<HistoryInner>>,
}

impl History {
    /// Creates a session whose single entry has an empty query string.
    #[must_use]
    pub fn new() -> Self {
        Self::with_query("")
    }

    /// Creates a session whose single entry carries `query`.
    #[must_use]
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HistoryInner {
                entries: vec![query.into()],
                index: 0,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    /// Query string of the current entry.
    #[must_use]
    pub fn query(&self) -> String {
        let inner = self.inner.borrow();
        inner.entries[inner.index].clone()
    }

    /// Appends an entry after the current one and moves to it, discarding
    /// any forward entries. Does not notify subscribers.
    pub fn push(&self, query: impl Into<String>) {
        let mut inner = self.inner.borrow_mut();
        let index = inner.index;
        inner.entries.truncate(index + 1);
        inner.entries.push(query.into());
        inner.index += 1;
    }

    /// Rewrites the current entry in place. Does not notify subscribers.
    pub fn replace(&self, query: impl Into<String>) {
        let mut inner = self.inner.borrow_mut();
        let index = inner.index;
        inner.entries[index] = query.into();
    }

    /// Moves one entry back and notifies subscribers.
    ///
    /// Returns `false`, without notifying, when already at the oldest entry.
    pub fn back(&self) -> bool {
        let query = {
            let mut inner = self.inner.borrow_mut();
            if inner.index == 0 {
                return false;
            }
            inner.index -= 1;
            inner.entries[inner.index].clone()
        };
        self.notify(&query);
        true
    }

    /// Moves one entry forward and notifies subscribers.
    ///
    /// Returns `false`, without notifying, when already at the newest entry.
    pub fn forward(&self) -> bool {
        let query = {
            let mut inner = self.inner.borrow_mut();
            if inner.index + 1 >= inner.entries.len() {
                return false;
            }
            inner.index += 1;
            inner.entries[inner.index].clone()
        };
        self.notify(&query);
        true
    }

    /// Registers `listener` for traversal events.
    ///
    /// The listener stays registered exactly as long as the returned
    /// [`Subscription`] lives.
    pub fn subscribe(&self, listener: impl FnMut(&str) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push(ListenerEntry { id, callback: Rc::new(RefCell::new(listener)) });
        Subscription { registry: Rc::downgrade(&self.inner), id }
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Runs the listeners registered at the start of the traversal.
    ///
    /// The internal borrow is released first, so a listener may call back
    /// into the history: push, replace, subscribe, drop subscriptions, or
    /// even start a nested traversal. A listener deregistered while the
    /// dispatch is in flight is not invoked for it, and a listener mid-call
    /// is skipped for nested events it caused; the other listeners observe
    /// them inline.
    fn notify(&self, query: &str) {
        let snapshot: Vec<(u64, Listener)> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|entry| (entry.id, Rc::clone(&entry.callback)))
            .collect();
        for (id, callback) in snapshot {
            // An earlier listener may have dropped this one's subscription.
            let registered = self.inner.borrow().listeners.iter().any(|entry| entry.id == id);
            if !registered {
                continue;
            }
            if let Ok(mut callback) = callback.try_borrow_mut() {
                callback(query);
            }
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("History")
            .field("entries", &inner.entries.len())
            .field("index", &inner.index)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

/// RAII registration of a history listener.
///
/// Dropping the subscription removes the listener. Dropping it after the
/// history itself is gone is a no-op.
#[derive(Debug)]
#[must_use = "dropping the subscription immediately deregisters the listener"]
pub struct Subscription {
    registry: Weak<RefCell<HistoryInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.retain(|entry| entry.id != self.id);
        }
    }
}
