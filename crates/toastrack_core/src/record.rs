//! Toast records
//!
//! A [`ToastRecord`] is the immutable description of one notification plus the
//! small amount of lifecycle state (its [`AnimationState`]) that the queue owns.
//! Content handles (icon, end content) are opaque strings owned by the
//! presentation layer; the core never interprets them.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use crate::placement::Placement;
use crate::style::ToastStyle;

new_key_type! {
    /// Unique identifier for a toast, assigned at admission
    pub struct ToastKey;
}

/// Presence state of a toast
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationState {
    /// Admitted, enter transition not finished yet
    #[default]
    Entering,
    /// Fully shown
    Visible,
    /// Closing; removed from the queue once the exit transition completes
    Exiting,
}

impl AnimationState {
    pub fn is_exiting(&self) -> bool {
        matches!(self, AnimationState::Exiting)
    }
}

/// What a toast shows
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastContent {
    pub title: String,
    pub description: Option<String>,
    /// Presentation-owned icon handle, overrides the color's default icon
    pub icon: Option<String>,
    /// Presentation-owned handle for trailing content (action buttons etc.)
    pub end_content: Option<String>,
}

impl ToastContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn end_content(mut self, end_content: impl Into<String>) -> Self {
        self.end_content = Some(end_content.into());
        self
    }
}

/// Admission options for a toast
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastOptions {
    /// Auto-dismiss timeout; `None` never auto-dismisses
    pub timeout: Option<Duration>,
    /// Higher priorities are shown first
    pub priority: i32,
    /// Per-toast placement, used for gesture direction; region placement otherwise
    pub placement: Option<Placement>,
    pub style: ToastStyle,
    /// Start in the loading state (resolved later with `set_loading(key, false)`)
    pub loading: bool,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout in milliseconds.
    ///
    /// Zero or negative values mean "no auto-dismiss".
    pub fn timeout_ms(mut self, ms: i64) -> Self {
        self.timeout = timeout_from_millis(ms);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    pub fn style(mut self, style: ToastStyle) -> Self {
        self.style = style;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

/// Convert a raw millisecond timeout into an optional duration
pub fn timeout_from_millis(ms: i64) -> Option<Duration> {
    if ms <= 0 {
        None
    } else {
        Some(Duration::from_millis(ms as u64))
    }
}

/// One admitted toast
#[derive(Clone, Debug, PartialEq)]
pub struct ToastRecord {
    pub(crate) key: ToastKey,
    /// Admission sequence number, breaks priority ties deterministically
    pub(crate) seq: u64,
    pub(crate) content: ToastContent,
    pub(crate) timeout: Option<Duration>,
    pub(crate) priority: i32,
    pub(crate) placement: Option<Placement>,
    pub(crate) style: ToastStyle,
    pub(crate) loading: bool,
    pub(crate) animation: AnimationState,
}

impl ToastRecord {
    pub(crate) fn new(key: ToastKey, seq: u64, content: ToastContent, options: ToastOptions) -> Self {
        Self {
            key,
            seq,
            content,
            timeout: options.timeout.filter(|t| !t.is_zero()),
            priority: options.priority,
            placement: options.placement,
            style: options.style,
            loading: options.loading,
            animation: AnimationState::Entering,
        }
    }

    pub fn key(&self) -> ToastKey {
        self.key
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn content(&self) -> &ToastContent {
        &self.content
    }

    pub fn title(&self) -> &str {
        &self.content.title
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn style(&self) -> &ToastStyle {
        &self.style
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    /// Whether the presentation layer should draw a progress bar
    pub fn has_progress(&self) -> bool {
        self.timeout.is_some()
    }
}
