//! Headless Scenario Runner
//!
//! Executes a JSON toast scenario and prints the report.
//!
//! Run with: cargo run -p toastrack_app --example run_scenario -- crates/toastrack_app/scenarios/overflow.json [report.json]

use std::path::Path;

use anyhow::{bail, Result};
use toastrack_app::{run_loaded_scenario, HeadlessRunConfig, HeadlessScenario};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(scenario_path) = args.next() else {
        bail!("usage: run_scenario <scenario.json> [report.json]");
    };

    let scenario = HeadlessScenario::from_path(Path::new(&scenario_path))?;
    let outcome = run_loaded_scenario(&scenario, HeadlessRunConfig::default())?;

    outcome.report().write_to_writer(&mut std::io::stdout())?;
    if let Some(report_path) = args.next() {
        outcome.report().save(Path::new(&report_path))?;
    }

    if outcome.is_failed() {
        bail!("scenario failed");
    }
    Ok(())
}
