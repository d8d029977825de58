//! Theme change notification
//!
//! Observers subscribe to a [`ThemeEvents`] registry and are called
//! synchronously, in subscription order, after every apply.

use serde::Serialize;

/// Name of the change notification, shared with the web side
pub const THEME_CHANGED_EVENT: &str = "theme-changed";

/// Payload delivered to observers after a theme is applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeChanged {
    /// Theme whose values were actually written
    pub theme_id: String,
    /// Theme the caller asked for
    pub requested_id: String,
}

impl ThemeChanged {
    pub fn new(theme_id: impl Into<String>, requested_id: impl Into<String>) -> Self {
        Self {
            theme_id: theme_id.into(),
            requested_id: requested_id.into(),
        }
    }

    /// True when the requested theme was unknown and the default was used
    pub fn is_fallback(&self) -> bool {
        self.theme_id != self.requested_id
    }
}

/// Handle returned by [`ThemeEvents::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&ThemeChanged)>;

/// Observer registry for theme changes
#[derive(Default)]
pub struct ThemeEvents {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

impl ThemeEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ThemeChanged) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn emit(&mut self, event: &ThemeChanged) {
        tracing::trace!(
            "{} -> {} subscriber(s): {}",
            THEME_CHANGED_EVENT,
            self.subscribers.len(),
            event.theme_id
        );
        for (_, callback) in self.subscribers.iter_mut() {
            callback(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl std::fmt::Debug for ThemeEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEvents")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
