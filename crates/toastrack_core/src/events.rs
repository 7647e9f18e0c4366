//! Queue notifications
//!
//! Consumers never poll the queue. They register listeners for lifecycle
//! events and for visible-set changes; the queue dispatches synchronously
//! at the end of every mutation.

use slotmap::{new_key_type, SlotMap};

use crate::record::ToastKey;
use crate::visibility::VisibleSet;

new_key_type! {
    /// Handle returned by `subscribe`/`on_event`, used to unsubscribe
    pub struct SubscriptionId;
}

/// Lifecycle event emitted by the queue, once per actual transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueEvent {
    Added(ToastKey),
    /// The toast entered its exit phase
    Closed(ToastKey),
    Removed(ToastKey),
}

impl QueueEvent {
    pub fn key(&self) -> ToastKey {
        match self {
            QueueEvent::Added(key) | QueueEvent::Closed(key) | QueueEvent::Removed(key) => *key,
        }
    }
}

/// Event listener function type
pub type EventHandler = Box<dyn FnMut(&QueueEvent) + Send>;

/// Visible-set listener function type
pub type VisibleHandler = Box<dyn FnMut(&VisibleSet) + Send>;

enum Listener {
    Event(EventHandler),
    Visible(VisibleHandler),
}

/// Dispatches queue events and visible-set changes to registered listeners
#[derive(Default)]
pub struct EventDispatcher {
    listeners: SlotMap<SubscriptionId, Listener>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a lifecycle event listener
    pub fn on_event<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&QueueEvent) + Send + 'static,
    {
        self.listeners.insert(Listener::Event(Box::new(handler)))
    }

    /// Register a visible-set listener
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&VisibleSet) + Send + 'static,
    {
        self.listeners.insert(Listener::Visible(Box::new(handler)))
    }

    /// Remove a listener of either kind. Returns false for unknown ids.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id).is_some()
    }

    pub fn dispatch(&mut self, event: &QueueEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            if let Listener::Event(handler) = listener {
                handler(event);
            }
        }
    }

    pub fn dispatch_visible(&mut self, visible: &VisibleSet) {
        for (_, listener) in self.listeners.iter_mut() {
            if let Listener::Visible(handler) = listener {
                handler(visible);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
