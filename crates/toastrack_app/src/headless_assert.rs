//! Assertion helpers for headless toast runs.

use rustc_hash::FxHashMap;
use toastrack_core::{AnimationState, ToastKey};

use crate::headless_scenario::ExpectedState;
use crate::toaster::Toaster;

/// Snapshot of region state used for headless assertions.
#[derive(Debug, Clone, Default)]
pub struct ToastSnapshot {
    /// Visible titles, back to front
    pub visible: Vec<String>,
    pub toasts: FxHashMap<String, SnapshotToast>,
}

/// One live toast as seen by assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotToast {
    pub state: AnimationState,
    /// Applied stack offset, `None` while queued outside the window
    pub offset: Option<f32>,
}

impl ToastSnapshot {
    /// Capture the current state of a toaster.
    pub fn capture(toaster: &Toaster) -> Self {
        let frames = toaster.frames();
        let offsets: FxHashMap<ToastKey, f32> = frames
            .iter()
            .map(|f| (f.key(), f.geometry.offset))
            .collect();

        let toasts = toaster
            .queue()
            .iter()
            .map(|record| {
                (
                    record.title().to_string(),
                    SnapshotToast {
                        state: record.animation(),
                        offset: offsets.get(&record.key()).copied(),
                    },
                )
            })
            .collect();

        Self {
            visible: frames.iter().map(|f| f.record.title().to_string()).collect(),
            toasts,
        }
    }
}

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

fn failed(code: &str, message: String) -> AssertionResult {
    AssertionResult::Failed {
        code: code.to_string(),
        message,
    }
}

pub fn evaluate_assert_visible(expected: &[String], snapshot: &ToastSnapshot) -> AssertionResult {
    if snapshot.visible == expected {
        AssertionResult::Passed
    } else {
        failed(
            "visible_mismatch",
            format!("expected visible {:?}, got {:?}", expected, snapshot.visible),
        )
    }
}

pub fn evaluate_assert_count(expected: usize, snapshot: &ToastSnapshot) -> AssertionResult {
    let count = snapshot.toasts.len();
    if count == expected {
        AssertionResult::Passed
    } else {
        failed(
            "count_mismatch",
            format!("expected {expected} toasts, got {count}"),
        )
    }
}

pub fn evaluate_assert_state(
    title: &str,
    expected: ExpectedState,
    snapshot: &ToastSnapshot,
) -> AssertionResult {
    let actual = snapshot.toasts.get(title).map(|t| t.state);
    let matches = match (expected, actual) {
        (ExpectedState::Removed, None) => true,
        (ExpectedState::Entering, Some(AnimationState::Entering)) => true,
        (ExpectedState::Visible, Some(AnimationState::Visible)) => true,
        (ExpectedState::Exiting, Some(AnimationState::Exiting)) => true,
        _ => false,
    };
    if matches {
        AssertionResult::Passed
    } else {
        failed(
            "state_mismatch",
            format!("{title}: expected {expected:?}, got {actual:?}"),
        )
    }
}

pub fn evaluate_assert_offset(title: &str, expected: f32, snapshot: &ToastSnapshot) -> AssertionResult {
    let Some(toast) = snapshot.toasts.get(title) else {
        return failed("missing_toast", format!("{title}: toast not found"));
    };
    let Some(offset) = toast.offset else {
        return failed("not_visible", format!("{title}: toast is not visible"));
    };
    if (offset - expected).abs() < 1e-3 {
        AssertionResult::Passed
    } else {
        failed(
            "offset_mismatch",
            format!("{title}: expected offset {expected}, got {offset}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> ToastSnapshot {
        let mut toasts = FxHashMap::default();
        toasts.insert(
            "a".to_string(),
            SnapshotToast {
                state: AnimationState::Visible,
                offset: Some(8.0),
            },
        );
        toasts.insert(
            "b".to_string(),
            SnapshotToast {
                state: AnimationState::Entering,
                offset: None,
            },
        );
        ToastSnapshot {
            visible: vec!["a".to_string()],
            toasts,
        }
    }

    #[test]
    fn test_state_assertions() {
        let snap = snapshot();
        assert_eq!(
            evaluate_assert_state("a", ExpectedState::Visible, &snap),
            AssertionResult::Passed
        );
        assert_eq!(
            evaluate_assert_state("zzz", ExpectedState::Removed, &snap),
            AssertionResult::Passed
        );
        assert!(matches!(
            evaluate_assert_state("b", ExpectedState::Exiting, &snap),
            AssertionResult::Failed { code, .. } if code == "state_mismatch"
        ));
    }

    #[test]
    fn test_offset_of_queued_toast_fails() {
        let snap = snapshot();
        assert_eq!(evaluate_assert_offset("a", 8.0, &snap), AssertionResult::Passed);
        assert!(matches!(
            evaluate_assert_offset("b", 0.0, &snap),
            AssertionResult::Failed { code, .. } if code == "not_visible"
        ));
    }

    #[test]
    fn test_visible_and_count() {
        let snap = snapshot();
        assert_eq!(
            evaluate_assert_visible(&["a".to_string()], &snap),
            AssertionResult::Passed
        );
        assert_eq!(evaluate_assert_count(2, &snap), AssertionResult::Passed);
        assert!(matches!(
            evaluate_assert_count(3, &snap),
            AssertionResult::Failed { .. }
        ));
    }
}
