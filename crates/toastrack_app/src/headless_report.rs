//! Report of a headless toast run.
//!
//! The report is built from the final [`ToastSnapshot`], so it lists every
//! toast still in the queue with its lifecycle state and applied offset.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toastrack_core::AnimationState;

use crate::headless_assert::ToastSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// The assertion that stopped a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFailure {
    pub step_index: usize,
    pub assertion: String,
    pub message: String,
}

/// One toast left in the queue when the run stopped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportedToast {
    pub title: String,
    pub state: AnimationState,
    /// `None` while queued outside the visible window
    pub offset: Option<f32>,
}

/// Machine-readable result of a headless run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessReport {
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<ReportFailure>,
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    /// Visible titles, back to front
    pub visible: Vec<String>,
    /// Toasts waiting outside the visible window
    pub queued: usize,
    /// Every remaining toast, sorted by title
    pub toasts: Vec<ReportedToast>,
}

impl HeadlessReport {
    pub fn from_snapshot(
        snapshot: ToastSnapshot,
        failure: Option<ReportFailure>,
        elapsed_frames: u64,
        elapsed_ms: u64,
    ) -> Self {
        let mut toasts: Vec<ReportedToast> = snapshot
            .toasts
            .into_iter()
            .map(|(title, toast)| ReportedToast {
                title,
                state: toast.state,
                offset: toast.offset,
            })
            .collect();
        toasts.sort_by(|a, b| a.title.cmp(&b.title));

        let queued = toasts.iter().filter(|t| t.offset.is_none()).count();
        let status = if failure.is_some() {
            ReportStatus::Failed
        } else {
            ReportStatus::Passed
        };

        Self {
            status,
            failure,
            elapsed_frames,
            elapsed_ms,
            visible: snapshot.visible,
            queued,
            toasts,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.status == ReportStatus::Passed
    }

    pub fn toast(&self, title: &str) -> Option<&ReportedToast> {
        self.toasts.iter().find(|t| t.title == title)
    }

    /// Write the report as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let payload = serde_json::to_string_pretty(self)?;
        std::fs::write(path, payload).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless_assert::SnapshotToast;

    fn snapshot() -> ToastSnapshot {
        let mut snapshot = ToastSnapshot {
            visible: vec!["b".to_string()],
            ..Default::default()
        };
        snapshot.toasts.insert(
            "b".to_string(),
            SnapshotToast {
                state: AnimationState::Visible,
                offset: Some(0.0),
            },
        );
        snapshot.toasts.insert(
            "a".to_string(),
            SnapshotToast {
                state: AnimationState::Entering,
                offset: None,
            },
        );
        snapshot
    }

    #[test]
    fn test_report_lists_toasts_and_queued_count() {
        let report = HeadlessReport::from_snapshot(snapshot(), None, 4, 64);

        assert!(report.is_passed());
        assert_eq!(report.queued, 1);
        let titles: Vec<&str> = report.toasts.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
        assert_eq!(report.toast("b").map(|t| t.state), Some(AnimationState::Visible));
    }

    #[test]
    fn test_report_json_shape() {
        let failure = ReportFailure {
            step_index: 3,
            assertion: "assert_visible".to_string(),
            message: "expected visible [\"a\"], got [\"b\"]".to_string(),
        };
        let report = HeadlessReport::from_snapshot(snapshot(), Some(failure), 10, 160);
        let mut out = Vec::new();
        report.write_to_writer(&mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["failure"]["step_index"], 3);
        assert_eq!(value["elapsed_ms"], 160);
        assert_eq!(value["queued"], 1);
        assert_eq!(value["toasts"][0]["state"], "entering");
        assert!(value["toasts"][0]["offset"].is_null());
    }

    #[test]
    fn test_passed_report_omits_failure() {
        let report = HeadlessReport::from_snapshot(ToastSnapshot::default(), None, 0, 0);
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("failure").is_none());
        assert_eq!(value["toasts"], serde_json::json!([]));
    }
}
