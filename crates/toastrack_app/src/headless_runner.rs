//! Scenario runner that drives a toaster through scripted steps.

use std::time::Duration;

use anyhow::{bail, Result};
use rustc_hash::FxHashMap;
use toastrack_core::{Placement, ToastContent, ToastKey, ToastOptions};

use crate::headless_assert::{
    evaluate_assert_count, evaluate_assert_offset, evaluate_assert_state, evaluate_assert_visible,
    AssertionResult, ToastSnapshot,
};
use crate::headless_report::{HeadlessReport, ReportFailure};
use crate::headless_runtime::{HeadlessRunConfig, HeadlessRuntime};
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};
use crate::toaster::Toaster;

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON with the default 16ms frame.
pub fn run_scenario(input: &str) -> Result<RunOutcome> {
    run_scenario_with_config(input, HeadlessRunConfig::default())
}

/// Execute scenario JSON with a custom frame configuration.
pub fn run_scenario_with_config(input: &str, runtime_cfg: HeadlessRunConfig) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(&scenario, runtime_cfg)
}

/// Execute a pre-loaded scenario.
pub fn run_loaded_scenario(
    scenario: &HeadlessScenario,
    runtime_cfg: HeadlessRunConfig,
) -> Result<RunOutcome> {
    let mut run = ScenarioRun::new(scenario, runtime_cfg);

    for (step_index, step) in scenario.steps.iter().enumerate() {
        if let Some((assertion, message)) = run.step(step)? {
            let failure = ReportFailure {
                step_index,
                assertion: assertion.to_string(),
                message,
            };
            return Ok(RunOutcome::Failed {
                report: run.report(Some(failure)),
            });
        }
    }

    Ok(RunOutcome::Passed {
        report: run.report(None),
    })
}

struct ScenarioRun {
    toaster: Toaster,
    keys: FxHashMap<String, ToastKey>,
    runtime_cfg: HeadlessRunConfig,
    elapsed_frames: u64,
    elapsed_ms: u64,
}

impl ScenarioRun {
    fn new(scenario: &HeadlessScenario, runtime_cfg: HeadlessRunConfig) -> Self {
        Self {
            toaster: Toaster::new(scenario.config.clone()),
            keys: FxHashMap::default(),
            runtime_cfg,
            elapsed_frames: 0,
            elapsed_ms: 0,
        }
    }

    fn report(&self, failure: Option<ReportFailure>) -> HeadlessReport {
        HeadlessReport::from_snapshot(
            ToastSnapshot::capture(&self.toaster),
            failure,
            self.elapsed_frames,
            self.elapsed_ms,
        )
    }

    fn key(&self, title: &str) -> Result<ToastKey> {
        match self.keys.get(title) {
            Some(key) => Ok(*key),
            None => bail!("scenario refers to unknown toast '{title}'"),
        }
    }

    /// Run one step. Returns the failed assertion name and message, if any.
    fn step(&mut self, step: &ScenarioStep) -> Result<Option<(&'static str, String)>> {
        match step {
            ScenarioStep::Add {
                title,
                timeout_ms,
                priority,
                placement,
                loading,
            } => {
                if self.keys.contains_key(title) {
                    bail!("duplicate toast title '{title}' in scenario");
                }
                let mut options = ToastOptions::new().priority(*priority).loading(*loading);
                if let Some(ms) = timeout_ms {
                    options = options.timeout_ms(*ms);
                }
                if let Some(placement) = placement {
                    options = options.placement(Placement::parse_or_default(placement));
                }
                let key = self
                    .toaster
                    .add_toast(ToastContent::new(title.clone()), options);
                self.keys.insert(title.clone(), key);
            }
            ScenarioStep::Close { title } => {
                let key = self.key(title)?;
                self.toaster.close(key);
            }
            ScenarioStep::Remove { title } => {
                let key = self.key(title)?;
                self.toaster.remove(key);
            }
            ScenarioStep::CloseAll => {
                self.toaster.close_all();
            }
            ScenarioStep::ResolveLoading { title } => {
                let key = self.key(title)?;
                self.toaster.resolve_loading(key);
            }
            ScenarioStep::HoverStart { title } => {
                let key = self.key(title)?;
                self.toaster.hover_start(key);
            }
            ScenarioStep::HoverEnd { title } => {
                let key = self.key(title)?;
                self.toaster.hover_end(key);
            }
            ScenarioStep::Expand { expanded } => self.toaster.set_expanded(*expanded),
            ScenarioStep::Drag { title, dx, dy } => {
                let key = self.key(title)?;
                if self.toaster.drag_start(key) {
                    self.toaster.drag_move(key, *dx, *dy);
                    self.toaster.drag_end(key);
                }
            }
            ScenarioStep::ReportHeight { index, height } => {
                self.toaster.report_height(*index, *height);
            }
            ScenarioStep::Wait { ms } => self.wait(*ms)?,
            ScenarioStep::Tick { frames } => {
                let total = self.runtime_cfg.tick_ms.saturating_mul(*frames as u64);
                self.wait(total)?;
            }
            ScenarioStep::AssertVisible { titles } => {
                let snapshot = ToastSnapshot::capture(&self.toaster);
                return Ok(failure(
                    "assert_visible",
                    evaluate_assert_visible(titles, &snapshot),
                ));
            }
            ScenarioStep::AssertCount { count } => {
                let snapshot = ToastSnapshot::capture(&self.toaster);
                return Ok(failure("assert_count", evaluate_assert_count(*count, &snapshot)));
            }
            ScenarioStep::AssertState { title, state } => {
                let snapshot = ToastSnapshot::capture(&self.toaster);
                return Ok(failure(
                    "assert_state",
                    evaluate_assert_state(title, *state, &snapshot),
                ));
            }
            ScenarioStep::AssertOffset { title, offset } => {
                let snapshot = ToastSnapshot::capture(&self.toaster);
                return Ok(failure(
                    "assert_offset",
                    evaluate_assert_offset(title, *offset, &snapshot),
                ));
            }
        }
        Ok(None)
    }

    /// Advance logical time by `ms`, one frame at a time; the last frame
    /// may be shorter than the tick.
    fn wait(&mut self, ms: u64) -> Result<()> {
        let frames = wait_frames(ms, self.runtime_cfg.tick_ms);
        if frames == 0 {
            return Ok(());
        }

        let mut cfg = self.runtime_cfg;
        cfg.max_frames = frames;
        let mut remaining_ms = ms;
        let toaster = &mut self.toaster;
        let elapsed_frames = &mut self.elapsed_frames;
        let elapsed_ms = &mut self.elapsed_ms;

        HeadlessRuntime::run(cfg, |ctx| {
            let step_ms = remaining_ms.min(ctx.dt.as_millis() as u64);
            remaining_ms = remaining_ms.saturating_sub(step_ms);

            toaster.advance(Duration::from_millis(step_ms));
            *elapsed_frames = (*elapsed_frames).saturating_add(1);
            *elapsed_ms = (*elapsed_ms).saturating_add(step_ms);
        })
    }
}

fn failure(assertion: &'static str, result: AssertionResult) -> Option<(&'static str, String)> {
    match result {
        AssertionResult::Passed => None,
        AssertionResult::Failed { message, .. } => Some((assertion, message)),
    }
}

fn wait_frames(wait_ms: u64, tick_ms: u64) -> u32 {
    if wait_ms == 0 {
        return 0;
    }
    let tick = tick_ms.max(1);
    let frames = wait_ms.saturating_add(tick.saturating_sub(1)) / tick;
    frames.min(u32::MAX as u64) as u32
}
