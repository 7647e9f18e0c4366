//! Swipe-to-dismiss evaluation
//!
//! A drag only moves a toast along the axis of its placement: vertically for
//! centered regions, horizontally otherwise. The drag value is the distance
//! travelled towards the outer edge, clamped at zero, and drives both the
//! fade-out and the dismiss decision.

use toastrack_core::{DragAxis, Placement, SwipeConfig};

/// Extra distance past the vertical threshold before a vertical drag is fully faded
const VERTICAL_FADE_SLACK: f32 = 5.0;
/// Extra distance past the horizontal threshold before a horizontal drag is fully faded
const HORIZONTAL_FADE_SLACK: f32 = 20.0;

/// Distances a toast must be dragged before release dismisses it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeThresholds {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            horizontal: 100.0,
            vertical: 20.0,
        }
    }
}

impl From<&SwipeConfig> for SwipeThresholds {
    fn from(config: &SwipeConfig) -> Self {
        Self {
            horizontal: config.horizontal,
            vertical: config.vertical,
        }
    }
}

/// What happens when a drag is released
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// Below threshold: offset resets to zero
    SnapBack,
    /// At or past threshold: close and remove the toast
    Dismiss,
}

/// Live drag of one toast
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    dx: f32,
    dy: f32,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pointer offset since drag start
    pub fn move_to(&mut self, dx: f32, dy: f32) {
        self.dx = dx;
        self.dy = dy;
    }

    /// Raw pointer offset
    pub fn offset(&self) -> (f32, f32) {
        (self.dx, self.dy)
    }

    /// Offset restricted to the drag axis
    pub fn translation(&self, axis: DragAxis) -> (f32, f32) {
        match axis {
            DragAxis::X => (self.dx, 0.0),
            DragAxis::Y => (0.0, self.dy),
        }
    }
}

/// Evaluates drags for one placement
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEvaluator {
    placement: Placement,
    thresholds: SwipeThresholds,
}

impl GestureEvaluator {
    pub fn new(placement: Placement, thresholds: SwipeThresholds) -> Self {
        Self {
            placement,
            thresholds,
        }
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn axis(&self) -> DragAxis {
        self.placement.drag_axis()
    }

    fn threshold(&self) -> f32 {
        match self.axis() {
            DragAxis::X => self.thresholds.horizontal,
            DragAxis::Y => self.thresholds.vertical,
        }
    }

    /// Distance travelled towards the dismiss edge, never negative
    pub fn drag_value(&self, drag: &DragState) -> f32 {
        let (dx, dy) = drag.offset();
        let value = match self.placement {
            Placement::RightBottom | Placement::RightTop => dx,
            Placement::LeftBottom | Placement::LeftTop => -dx,
            Placement::CenterTop => -dy,
            Placement::CenterBottom => dy,
        };
        value.max(0.0)
    }

    /// Opacity while dragging, fading out as the drag approaches dismissal
    pub fn drag_opacity(&self, drag: &DragState) -> f32 {
        let slack = match self.axis() {
            DragAxis::X => HORIZONTAL_FADE_SLACK,
            DragAxis::Y => VERTICAL_FADE_SLACK,
        };
        (1.0 - self.drag_value(drag) / (self.threshold() + slack)).max(0.0)
    }

    pub fn crosses_threshold(&self, drag: &DragState) -> bool {
        self.drag_value(drag) >= self.threshold()
    }

    /// Decide the outcome of releasing a drag
    pub fn release(&self, drag: &DragState) -> DragOutcome {
        if self.crosses_threshold(drag) {
            DragOutcome::Dismiss
        } else {
            DragOutcome::SnapBack
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(dx: f32, dy: f32) -> DragState {
        let mut state = DragState::new();
        state.move_to(dx, dy);
        state
    }

    fn evaluator(placement: Placement) -> GestureEvaluator {
        GestureEvaluator::new(placement, SwipeThresholds::default())
    }

    #[test]
    fn test_right_threshold_boundary() {
        let right = evaluator(Placement::RightBottom);
        assert_eq!(right.release(&drag(99.0, 0.0)), DragOutcome::SnapBack);
        assert_eq!(right.release(&drag(100.0, 0.0)), DragOutcome::Dismiss);
        // Dragging the wrong way never dismisses
        assert_eq!(right.release(&drag(-300.0, 0.0)), DragOutcome::SnapBack);
    }

    #[test]
    fn test_left_threshold() {
        let left = evaluator(Placement::LeftTop);
        assert_eq!(left.release(&drag(-99.0, 0.0)), DragOutcome::SnapBack);
        assert_eq!(left.release(&drag(-100.0, 0.0)), DragOutcome::Dismiss);
    }

    #[test]
    fn test_center_placements_use_vertical_axis() {
        let top = evaluator(Placement::CenterTop);
        assert_eq!(top.axis(), DragAxis::Y);
        assert_eq!(top.release(&drag(500.0, -19.0)), DragOutcome::SnapBack);
        assert_eq!(top.release(&drag(0.0, -20.0)), DragOutcome::Dismiss);

        let bottom = evaluator(Placement::CenterBottom);
        assert_eq!(bottom.release(&drag(0.0, 20.0)), DragOutcome::Dismiss);
        assert_eq!(bottom.release(&drag(0.0, -20.0)), DragOutcome::SnapBack);
    }

    #[test]
    fn test_drag_value_is_clamped_and_monotonic() {
        let right = evaluator(Placement::RightTop);
        assert_eq!(right.drag_value(&drag(-40.0, 0.0)), 0.0);

        let values: Vec<f32> = [0.0, 10.0, 50.0, 120.0]
            .iter()
            .map(|dx| right.drag_value(&drag(*dx, 0.0)))
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_drag_opacity() {
        let right = evaluator(Placement::RightBottom);
        assert_eq!(right.drag_opacity(&drag(0.0, 0.0)), 1.0);
        assert!((right.drag_opacity(&drag(60.0, 0.0)) - 0.5).abs() < 1e-6);
        assert_eq!(right.drag_opacity(&drag(500.0, 0.0)), 0.0);

        let center = evaluator(Placement::CenterBottom);
        assert!((center.drag_opacity(&drag(0.0, 5.0)) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_translation_follows_axis() {
        let state = drag(30.0, 12.0);
        assert_eq!(state.translation(DragAxis::X), (30.0, 0.0));
        assert_eq!(state.translation(DragAxis::Y), (0.0, 12.0));
    }

    #[test]
    fn test_custom_thresholds() {
        let config = SwipeConfig {
            horizontal: 40.0,
            vertical: 10.0,
        };
        let eval = GestureEvaluator::new(Placement::LeftBottom, (&config).into());
        assert_eq!(eval.release(&drag(-40.0, 0.0)), DragOutcome::Dismiss);
    }
}
