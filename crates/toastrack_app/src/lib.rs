//! Toastrack Runtime
//!
//! Runtime for one toast notification region.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use toastrack_app::prelude::*;
//!
//! let mut toaster = Toaster::new(ToastConfig::default());
//!
//! let key = toaster.add_toast(
//!     ToastContent::new("Saved").description("All changes written"),
//!     ToastOptions::new().timeout_ms(2000),
//! );
//!
//! // One call per frame
//! toaster.advance(Duration::from_millis(16));
//!
//! for frame in toaster.frames() {
//!     let (x, y) = frame.translation();
//!     println!("{} at ({x}, {y}) opacity {}", frame.record.title(), frame.opacity());
//! }
//!
//! toaster.close(key);
//! ```

mod frame;
mod handle;
mod toaster;

pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_runtime;
pub mod headless_scenario;

pub use frame::ToastFrame;
pub use handle::ToasterHandle;
pub use toaster::Toaster;

pub use headless_report::{HeadlessReport, ReportFailure, ReportStatus, ReportedToast};
pub use headless_runner::{run_loaded_scenario, run_scenario, run_scenario_with_config, RunOutcome};
pub use headless_runtime::HeadlessRunConfig;
pub use headless_scenario::HeadlessScenario;

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::frame::ToastFrame;
    pub use crate::handle::ToasterHandle;
    pub use crate::toaster::Toaster;

    pub use toastrack_core::{
        MaxVisible, Placement, QueueEvent, ThemeResolver, ToastColor, ToastConfig, ToastContent,
        ToastKey, ToastOptions, ToastSlot, ToastStyle, ToastVariant,
    };
    pub use toastrack_layout::DragOutcome;
}
