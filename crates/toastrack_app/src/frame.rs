//! Per-frame presentation data
//!
//! A [`ToastFrame`] is everything the presentation layer needs to draw one
//! visible toast on the current frame.

use toastrack_core::{
    resolve_icon, IconChoice, Placement, ThemeResolver, ToastKey, ToastRecord, ToastSlot,
};
use toastrack_layout::{PresenceTransform, StackGeometry};

/// Snapshot of one visible toast for drawing
#[derive(Clone, Debug, PartialEq)]
pub struct ToastFrame {
    pub record: ToastRecord,
    pub index: usize,
    pub total: usize,
    /// Placement after per-toast and compact-viewport overrides
    pub placement: Placement,
    pub geometry: StackGeometry,
    pub presence: PresenceTransform,
    /// Drag offset restricted to the drag axis
    pub drag_translation: (f32, f32),
    pub drag_opacity: f32,
    /// Auto-dismiss progress; `None` when the toast has no timeout
    pub progress: Option<f32>,
}

impl ToastFrame {
    pub fn key(&self) -> ToastKey {
        self.record.key()
    }

    pub fn is_frontmost(&self) -> bool {
        self.index + 1 == self.total
    }

    /// Final opacity: stack depth, presence and drag fade combined
    pub fn opacity(&self) -> f32 {
        self.geometry.opacity * self.presence.opacity * self.drag_opacity
    }

    /// Final translation from the toast's resting slot
    pub fn translation(&self) -> (f32, f32) {
        let (dx, dy) = self.drag_translation;
        (
            dx,
            self.geometry.translate_y(self.placement) + self.presence.translate_y + dy,
        )
    }

    pub fn icon(&self) -> IconChoice {
        resolve_icon(
            self.record.style(),
            self.record.content().icon.as_deref(),
            self.record.is_loading(),
        )
    }

    /// Class string for one slot from the given theme
    pub fn classes(&self, resolver: &dyn ThemeResolver, slot: ToastSlot) -> String {
        resolver.classes(self.record.style(), slot)
    }
}
