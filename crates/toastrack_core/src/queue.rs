//! Toast queue
//!
//! Single source of truth for every admitted toast. Records are kept in
//! presentation order: priority descending, admission order among equal
//! priorities. Every mutation recomputes the visible window before it
//! returns, so anything that runs afterwards (timers, layout) sees the
//! current window.
//!
//! All operations tolerate stale keys: closing or removing a toast that is
//! already gone is a silent no-op.

use slotmap::SlotMap;

use crate::config::ToastConfig;
use crate::events::{EventDispatcher, QueueEvent, SubscriptionId};
use crate::record::{AnimationState, ToastContent, ToastKey, ToastOptions, ToastRecord};
use crate::visibility::{visible_window, MaxVisible, VisibleSet};

/// Build a queue for the given configuration
pub fn create_toast_queue(config: &ToastConfig) -> ToastQueue {
    ToastQueue::new(config.max_visible_toasts)
}

/// Ordered, priority-aware collection of toasts
#[derive(Debug)]
pub struct ToastQueue {
    records: SlotMap<ToastKey, ToastRecord>,
    /// Keys in presentation order
    order: Vec<ToastKey>,
    next_seq: u64,
    max_visible: MaxVisible,
    visible: VisibleSet,
    dispatcher: EventDispatcher,
}

impl ToastQueue {
    pub fn new(max_visible: MaxVisible) -> Self {
        Self {
            records: SlotMap::with_key(),
            order: Vec::new(),
            next_seq: 0,
            max_visible,
            visible: VisibleSet::default(),
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Admit a toast and return its key
    pub fn add(&mut self, content: ToastContent, options: ToastOptions) -> ToastKey {
        let seq = self.next_seq;
        self.next_seq += 1;

        let priority = options.priority;
        let key = self
            .records
            .insert_with_key(|key| ToastRecord::new(key, seq, content, options));

        // Order is sorted by priority descending; ties land after existing peers
        let records = &self.records;
        let position = self
            .order
            .partition_point(|k| records.get(*k).is_some_and(|r| r.priority >= priority));
        self.order.insert(position, key);

        tracing::debug!(?key, priority, position, "toast added");
        self.dispatcher.dispatch(&QueueEvent::Added(key));
        self.refresh();
        key
    }

    /// Start the exit phase of a toast.
    ///
    /// The record stays in the queue until [`remove`](Self::remove) so the
    /// exit transition can play. Returns `true` only on the actual transition.
    pub fn close(&mut self, key: ToastKey) -> bool {
        let Some(record) = self.records.get_mut(key) else {
            return false;
        };
        if record.animation.is_exiting() {
            return false;
        }
        record.animation = AnimationState::Exiting;

        tracing::debug!(?key, "toast closing");
        self.dispatcher.dispatch(&QueueEvent::Closed(key));
        self.refresh();
        true
    }

    /// Delete a toast immediately. Idempotent.
    pub fn remove(&mut self, key: ToastKey) -> bool {
        if self.records.remove(key).is_none() {
            return false;
        }
        self.order.retain(|k| *k != key);

        tracing::debug!(?key, "toast removed");
        self.dispatcher.dispatch(&QueueEvent::Removed(key));
        self.refresh();
        true
    }

    /// Close every currently visible toast. Returns how many started closing.
    pub fn close_all(&mut self) -> usize {
        let keys: Vec<ToastKey> = self.visible.keys().collect();
        keys.into_iter().filter(|key| self.close(*key)).count()
    }

    /// Finish the enter transition of a toast
    pub fn mark_visible(&mut self, key: ToastKey) -> bool {
        match self.records.get_mut(key) {
            Some(record) if record.animation == AnimationState::Entering => {
                record.animation = AnimationState::Visible;
                self.refresh();
                true
            }
            _ => false,
        }
    }

    /// Set or clear the loading flag of a toast
    pub fn set_loading(&mut self, key: ToastKey, loading: bool) -> bool {
        match self.records.get_mut(key) {
            Some(record) if record.loading != loading => {
                record.loading = loading;
                self.refresh();
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, key: ToastKey) -> Option<&ToastRecord> {
        self.records.get(key)
    }

    pub fn contains(&self, key: ToastKey) -> bool {
        self.records.contains_key(key)
    }

    /// All records in presentation order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ToastRecord> + '_ {
        self.order.iter().map(move |key| &self.records[*key])
    }

    pub fn keys(&self) -> &[ToastKey] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Toasts waiting outside the visible window
    pub fn queued_count(&self) -> usize {
        self.len() - self.visible.len()
    }

    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    pub fn max_visible(&self) -> MaxVisible {
        self.max_visible
    }

    pub fn set_max_visible(&mut self, max_visible: MaxVisible) {
        self.max_visible = max_visible;
        self.refresh();
    }

    /// Listen for visible-set changes
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&VisibleSet) + Send + 'static,
    {
        self.dispatcher.subscribe(handler)
    }

    /// Listen for add/close/remove events
    pub fn on_event<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&QueueEvent) + Send + 'static,
    {
        self.dispatcher.on_event(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.dispatcher.unsubscribe(id)
    }

    /// Recompute the visible window and notify subscribers if it changed
    fn refresh(&mut self) {
        let visible = visible_window(self.iter(), self.max_visible);
        if visible != self.visible {
            self.visible = visible;
            self.dispatcher.dispatch_visible(&self.visible);
        }
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(MaxVisible::DEFAULT)
    }
}
