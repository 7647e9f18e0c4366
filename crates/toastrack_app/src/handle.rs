//! Thread-safe toaster handle
//!
//! Producers on other threads share one region through a cloneable handle.
//! Every call takes the lock for its whole duration, so mutations from
//! different threads never interleave.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use toastrack_core::{ToastConfig, ToastContent, ToastKey, ToastOptions};

use crate::frame::ToastFrame;
use crate::toaster::Toaster;

/// Shared handle to a [`Toaster`]
#[derive(Clone, Debug)]
pub struct ToasterHandle {
    inner: Arc<Mutex<Toaster>>,
}

impl ToasterHandle {
    pub fn new(config: ToastConfig) -> Self {
        Self::from_toaster(Toaster::new(config))
    }

    pub fn from_toaster(toaster: Toaster) -> Self {
        Self {
            inner: Arc::new(Mutex::new(toaster)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Toaster> {
        // Recover the toaster if a listener panicked while holding the lock
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the toaster
    pub fn with<R>(&self, f: impl FnOnce(&mut Toaster) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn add_toast(&self, content: ToastContent, options: ToastOptions) -> ToastKey {
        self.lock().add_toast(content, options)
    }

    pub fn close(&self, key: ToastKey) -> bool {
        self.lock().close(key)
    }

    pub fn remove(&self, key: ToastKey) -> bool {
        self.lock().remove(key)
    }

    pub fn close_all(&self) -> usize {
        self.lock().close_all()
    }

    pub fn resolve_loading(&self, key: ToastKey) -> bool {
        self.lock().resolve_loading(key)
    }

    pub fn advance(&self, dt: Duration) {
        self.lock().advance(dt)
    }

    pub fn frames(&self) -> Vec<ToastFrame> {
        self.lock().frames()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Default for ToasterHandle {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}
