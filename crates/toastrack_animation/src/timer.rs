//! Per-toast auto-dismiss timer
//!
//! A timer accumulates active time only while none of its pause reasons
//! hold. Once the accumulated time reaches the timeout the timer expires,
//! and [`ToastTimer::advance`] reports that exactly once.

use std::time::Duration;

/// Why a timer is currently not counting
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PauseReasons {
    /// Pointer is over the toast
    pub hovered: bool,
    /// The whole stack is expanded
    pub expanded: bool,
    /// Not the frontmost visible toast
    pub behind: bool,
}

impl PauseReasons {
    pub fn any(&self) -> bool {
        self.hovered || self.expanded || self.behind
    }
}

/// Timer lifecycle phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerPhase {
    Running,
    Paused,
    Expired,
}

/// Result of advancing a timer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerOutcome {
    /// Nothing changed, or time was added without reaching the timeout
    Pending,
    /// The timeout was reached during this advance
    Expired,
}

/// Countdown for one toast
#[derive(Clone, Debug)]
pub struct ToastTimer {
    timeout: Duration,
    elapsed: Duration,
    reasons: PauseReasons,
    expired: bool,
}

impl ToastTimer {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            elapsed: Duration::ZERO,
            reasons: PauseReasons::default(),
            expired: false,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Active time accumulated so far
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn remaining(&self) -> Duration {
        self.timeout.saturating_sub(self.elapsed)
    }

    pub fn reasons(&self) -> PauseReasons {
        self.reasons
    }

    pub fn set_reasons(&mut self, reasons: PauseReasons) {
        self.reasons = reasons;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.reasons.hovered = hovered;
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.reasons.expanded = expanded;
    }

    pub fn set_frontmost(&mut self, frontmost: bool) {
        self.reasons.behind = !frontmost;
    }

    pub fn phase(&self) -> TimerPhase {
        if self.expired {
            TimerPhase::Expired
        } else if self.reasons.any() {
            TimerPhase::Paused
        } else {
            TimerPhase::Running
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase() == TimerPhase::Running
    }

    /// Fraction of the timeout consumed, in `[0, 1]`
    pub fn progress(&self) -> f32 {
        if self.timeout.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.timeout.as_secs_f32()).min(1.0)
    }

    /// Add `dt` of wall time. Paused and expired timers ignore it.
    pub fn advance(&mut self, dt: Duration) -> TimerOutcome {
        if self.phase() != TimerPhase::Running {
            return TimerOutcome::Pending;
        }

        self.elapsed = (self.elapsed + dt).min(self.timeout);
        if self.elapsed >= self.timeout {
            self.expired = true;
            return TimerOutcome::Expired;
        }
        TimerOutcome::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_runs_until_timeout() {
        let mut timer = ToastTimer::new(ms(1000));
        assert_eq!(timer.phase(), TimerPhase::Running);

        assert_eq!(timer.advance(ms(400)), TimerOutcome::Pending);
        assert_eq!(timer.advance(ms(599)), TimerOutcome::Pending);
        assert_eq!(timer.remaining(), ms(1));
        assert_eq!(timer.advance(ms(1)), TimerOutcome::Expired);
        assert_eq!(timer.phase(), TimerPhase::Expired);
    }

    #[test]
    fn test_expires_exactly_once() {
        let mut timer = ToastTimer::new(ms(100));
        assert_eq!(timer.advance(ms(500)), TimerOutcome::Expired);
        assert_eq!(timer.advance(ms(500)), TimerOutcome::Pending);
        assert_eq!(timer.elapsed(), ms(100));
    }

    #[test]
    fn test_paused_time_does_not_count() {
        let mut timer = ToastTimer::new(ms(1000));
        timer.advance(ms(300));

        timer.set_hovered(true);
        assert_eq!(timer.phase(), TimerPhase::Paused);
        timer.advance(ms(500));
        assert_eq!(timer.elapsed(), ms(300));

        timer.set_hovered(false);
        timer.advance(ms(699));
        assert_eq!(timer.phase(), TimerPhase::Running);
        assert_eq!(timer.advance(ms(1)), TimerOutcome::Expired);
    }

    #[test]
    fn test_resumes_only_when_all_reasons_clear() {
        let mut timer = ToastTimer::new(ms(1000));
        timer.set_hovered(true);
        timer.set_expanded(true);
        timer.set_frontmost(false);

        timer.set_hovered(false);
        assert_eq!(timer.phase(), TimerPhase::Paused);
        timer.set_expanded(false);
        assert_eq!(timer.phase(), TimerPhase::Paused);
        timer.set_frontmost(true);
        assert_eq!(timer.phase(), TimerPhase::Running);
    }

    #[test]
    fn test_progress() {
        let mut timer = ToastTimer::new(ms(2000));
        assert_eq!(timer.progress(), 0.0);
        timer.advance(ms(500));
        assert!((timer.progress() - 0.25).abs() < 1e-6);
        timer.advance(ms(5000));
        assert_eq!(timer.progress(), 1.0);
    }
}
