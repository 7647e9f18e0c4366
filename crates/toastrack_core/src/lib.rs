//! Toastrack Core
//!
//! Data model for a stacked toast notification region:
//!
//! - **Records**: immutable toast descriptions with a small lifecycle state
//! - **Queue**: priority-ordered store with a capped visible window
//! - **Events**: synchronous listeners for lifecycle and visible-set changes
//! - **Config**: TOML-backed region configuration
//!
//! # Example
//!
//! ```rust
//! use toastrack_core::{ToastContent, ToastOptions, ToastQueue};
//!
//! let mut queue = ToastQueue::default();
//!
//! let low = queue.add(ToastContent::new("Synced"), ToastOptions::new());
//! let high = queue.add(
//!     ToastContent::new("Disk almost full"),
//!     ToastOptions::new().priority(10).timeout_ms(5000),
//! );
//!
//! // Higher priority is shown first
//! let keys: Vec<_> = queue.visible().keys().collect();
//! assert_eq!(keys, vec![high, low]);
//!
//! queue.close(high);
//! queue.remove(high);
//! assert_eq!(queue.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod placement;
pub mod queue;
pub mod record;
pub mod style;
pub mod visibility;

pub use config::{AnimationConfig, SwipeConfig, ToastConfig};
pub use error::{Result, ToastError};
pub use events::{EventDispatcher, QueueEvent, SubscriptionId};
pub use placement::{DragAxis, Placement};
pub use queue::{create_toast_queue, ToastQueue};
pub use record::{
    timeout_from_millis, AnimationState, ToastContent, ToastKey, ToastOptions, ToastRecord,
};
pub use style::{
    resolve_icon, DefaultIcon, IconChoice, SlotClassResolver, ThemeResolver, ToastColor,
    ToastRadius, ToastSlot, ToastStyle, ToastVariant,
};
pub use visibility::{visible_window, MaxVisible, VisibleSet, VisibleToast};
