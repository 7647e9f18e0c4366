//! Toastrack Animation
//!
//! Time-driven state for toasts.
//!
//! # Features
//!
//! - **Timers**: auto-dismiss countdown that pauses on hover, expansion and
//!   when a toast is not frontmost
//! - **Scheduler**: ticks all timers with a shared delta and reports expiries
//! - **Presence**: enter/exit transition clocks sampled each frame
//! - **Easing**: curves for presence transforms

pub mod easing;
pub mod presence;
pub mod scheduler;
pub mod timer;

pub use easing::Easing;
pub use presence::{PresencePhase, PresenceState, PresenceTracker, PresenceUpdate};
pub use scheduler::TimerScheduler;
pub use timer::{PauseReasons, TimerOutcome, TimerPhase, ToastTimer};
