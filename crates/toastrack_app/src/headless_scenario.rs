//! Scenario definition for headless toast runs.
//!
//! Toasts are referred to by title, so titles must be unique within a
//! scenario.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

use toastrack_core::ToastConfig;

/// Sequence of headless toast steps.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    /// Region configuration; defaults apply when omitted
    #[serde(default)]
    pub config: ToastConfig,
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// One scripted action or assertion.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Add {
        title: String,
        #[serde(default)]
        timeout_ms: Option<i64>,
        #[serde(default)]
        priority: i32,
        #[serde(default)]
        placement: Option<String>,
        #[serde(default)]
        loading: bool,
    },
    Close { title: String },
    Remove { title: String },
    CloseAll,
    ResolveLoading { title: String },
    HoverStart { title: String },
    HoverEnd { title: String },
    Expand { expanded: bool },
    /// Full drag gesture: start, move to the offset, release
    Drag { title: String, dx: f32, dy: f32 },
    ReportHeight { index: usize, height: f32 },
    Wait { ms: u64 },
    Tick { frames: u32 },
    /// Visible toasts, back to front
    AssertVisible { titles: Vec<String> },
    AssertCount { count: usize },
    AssertState { title: String, state: ExpectedState },
    AssertOffset { title: String, offset: f32 },
}

/// Lifecycle state named by `assert_state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedState {
    Entering,
    Visible,
    Exiting,
    Removed,
}
