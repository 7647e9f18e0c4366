//! Stack layout calculator
//!
//! Visible toasts are drawn as a pile anchored at the region edge. The
//! frontmost toast (`index == total - 1`) sits at the edge; every toast
//! behind it is pushed away from the edge and shrunk.
//!
//! Two layouts exist:
//!
//! - **Collapsed**: toasts peek out `depth * 8` units behind the front one,
//!   all using the frontmost toast's height.
//! - **Expanded** (region hovered, or the toast is being dragged): toasts
//!   are laid out end to end, each lifted by the heights of the toasts in
//!   front of it plus a small gap.

use smallvec::SmallVec;
use toastrack_core::Placement;

/// Gap between the region edge and the frontmost toast in expanded layout
pub const STACK_GAP: f32 = 4.0;
/// Offset per depth level in collapsed layout
pub const COLLAPSED_STEP: f32 = 8.0;
/// Scale lost per depth level
pub const SCALE_STEP: f32 = 0.1;
/// Scale never drops below this
pub const MIN_SCALE: f32 = 0.1;
/// Deepest level still drawn; deeper toasts are transparent
pub const MAX_SHOWN_DEPTH: usize = 2;

/// Measured toast heights, cached by visible index
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeightCache {
    heights: SmallVec<[f32; 4]>,
}

impl HeightCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the measured height of the toast at `index`
    pub fn set(&mut self, index: usize, height: f32) {
        if self.heights.len() <= index {
            self.heights.resize(index + 1, 0.0);
        }
        self.heights[index] = if height.is_finite() { height.max(0.0) } else { 0.0 };
    }

    /// Height at `index`; unmeasured toasts count as 0
    pub fn get(&self, index: usize) -> f32 {
        self.heights.get(index).copied().unwrap_or(0.0)
    }

    /// Drop entries past the current visible count
    pub fn truncate(&mut self, len: usize) {
        self.heights.truncate(len);
    }

    pub fn clear(&mut self) {
        self.heights.clear();
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}

impl FromIterator<f32> for HeightCache {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        let mut cache = HeightCache::new();
        for (index, height) in iter.into_iter().enumerate() {
            cache.set(index, height);
        }
        cache
    }
}

/// Inputs for one toast's geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackInput {
    pub index: usize,
    pub total: usize,
    /// The whole region is expanded
    pub expanded: bool,
    /// This toast is being dragged
    pub dragging: bool,
    /// Extra distance from the anchored edge
    pub toast_offset: f32,
}

impl StackInput {
    pub fn new(index: usize, total: usize) -> Self {
        Self {
            index,
            total,
            expanded: false,
            dragging: false,
            toast_offset: 0.0,
        }
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    pub fn toast_offset(mut self, offset: f32) -> Self {
        self.toast_offset = offset;
        self
    }

    pub fn depth(&self) -> usize {
        self.total.saturating_sub(self.index + 1)
    }

    /// Whether the expanded layout applies to this toast
    pub fn uses_expanded_layout(&self) -> bool {
        self.expanded || self.dragging
    }
}

/// Computed presentation geometry of one toast
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackGeometry {
    pub depth: usize,
    /// Distance from the edge in expanded layout
    pub lift_offset: f32,
    /// Distance from the edge in collapsed layout
    pub collapsed_offset: f32,
    /// Distance actually applied, including the region's toast offset
    pub offset: f32,
    pub scale: f32,
    pub opacity: f32,
    /// Only fully opaque toasts receive pointer events
    pub interactive: bool,
    pub height: f32,
}

impl StackGeometry {
    /// Signed vertical translation: bottom regions stack upwards, top regions downwards
    pub fn translate_y(&self, placement: Placement) -> f32 {
        if placement.is_top() {
            self.offset
        } else {
            -self.offset
        }
    }
}

/// Sum of the heights in front of `index` plus the edge gap
pub fn lift_offset(index: usize, total: usize, heights: &HeightCache) -> f32 {
    STACK_GAP + (index + 1..total).map(|i| heights.get(i)).sum::<f32>()
}

/// Scale for a toast `depth` levels behind the front, floored at [`MIN_SCALE`]
pub fn stack_scale(depth: usize) -> f32 {
    (1.0 - depth as f32 * SCALE_STEP).max(MIN_SCALE)
}

/// Compute the geometry of one visible toast
pub fn compute_geometry(input: &StackInput, heights: &HeightCache) -> StackGeometry {
    let depth = input.depth();
    let lift = lift_offset(input.index, input.total, heights);
    let collapsed = depth as f32 * COLLAPSED_STEP;
    let opacity = if depth <= MAX_SHOWN_DEPTH { 1.0 } else { 0.0 };

    let (offset, scale, height) = if input.uses_expanded_layout() {
        (lift, 1.0, heights.get(input.index))
    } else {
        let front = input.total.saturating_sub(1);
        (collapsed, stack_scale(depth), heights.get(front))
    };

    StackGeometry {
        depth,
        lift_offset: lift,
        collapsed_offset: collapsed,
        offset: offset + input.toast_offset,
        scale,
        opacity,
        interactive: opacity >= 1.0,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heights(values: &[f32]) -> HeightCache {
        values.iter().copied().collect()
    }

    #[test]
    fn test_lift_offsets() {
        let cache = heights(&[40.0, 50.0, 60.0]);
        assert_eq!(lift_offset(0, 3, &cache), 114.0);
        assert_eq!(lift_offset(1, 3, &cache), 64.0);
        assert_eq!(lift_offset(2, 3, &cache), 4.0);
    }

    #[test]
    fn test_collapsed_geometry() {
        let cache = heights(&[40.0, 50.0, 60.0]);
        let back = compute_geometry(&StackInput::new(0, 3), &cache);

        assert_eq!(back.depth, 2);
        assert_eq!(back.offset, 16.0);
        assert!((back.scale - 0.8).abs() < 1e-6);
        // Collapsed toasts all take the frontmost toast's height
        assert_eq!(back.height, 60.0);
        assert!(back.interactive);

        let front = compute_geometry(&StackInput::new(2, 3), &cache);
        assert_eq!(front.offset, 0.0);
        assert_eq!(front.scale, 1.0);
    }

    #[test]
    fn test_expanded_geometry() {
        let cache = heights(&[40.0, 50.0, 60.0]);
        let geo = compute_geometry(&StackInput::new(0, 3).expanded(true), &cache);

        assert_eq!(geo.offset, 114.0);
        assert_eq!(geo.scale, 1.0);
        assert_eq!(geo.height, 40.0);
    }

    #[test]
    fn test_dragging_uses_expanded_layout() {
        let cache = heights(&[40.0, 50.0, 60.0]);
        let geo = compute_geometry(&StackInput::new(1, 3).dragging(true), &cache);
        assert_eq!(geo.offset, 64.0);
        assert_eq!(geo.height, 50.0);
    }

    #[test]
    fn test_deep_toasts_are_hidden_and_inert() {
        let cache = HeightCache::new();
        let geo = compute_geometry(&StackInput::new(0, 5), &cache);
        assert_eq!(geo.depth, 4);
        assert_eq!(geo.opacity, 0.0);
        assert!(!geo.interactive);
    }

    #[test]
    fn test_scale_is_floored() {
        assert!((stack_scale(3) - 0.7).abs() < 1e-6);
        assert_eq!(stack_scale(10), MIN_SCALE);
        assert_eq!(stack_scale(40), MIN_SCALE);
    }

    #[test]
    fn test_missing_heights_count_as_zero() {
        let cache = heights(&[30.0]);
        assert_eq!(lift_offset(0, 3, &cache), 4.0);

        let geo = compute_geometry(&StackInput::new(0, 3), &cache);
        assert_eq!(geo.height, 0.0);
    }

    #[test]
    fn test_toast_offset_is_added() {
        let cache = heights(&[40.0, 50.0]);
        let geo = compute_geometry(&StackInput::new(0, 2).toast_offset(10.0), &cache);
        assert_eq!(geo.offset, 18.0);
        assert_eq!(geo.translate_y(Placement::RightBottom), -18.0);
        assert_eq!(geo.translate_y(Placement::CenterTop), 18.0);
    }

    #[test]
    fn test_height_cache() {
        let mut cache = HeightCache::new();
        cache.set(2, 48.0);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(0), 0.0);
        assert_eq!(cache.get(2), 48.0);
        assert_eq!(cache.get(7), 0.0);

        cache.set(1, f32::NAN);
        assert_eq!(cache.get(1), 0.0);

        cache.truncate(1);
        assert_eq!(cache.get(2), 0.0);
    }
}
