//! Timer scheduler
//!
//! Owns the auto-dismiss timers of all toasts and ticks them together.
//! Pause reasons are pushed in from the current visible set through
//! [`TimerScheduler::sync`]; the scheduler itself never looks at the queue.

use std::time::Duration;

use rustc_hash::{FxHashMap, FxHashSet};
use toastrack_core::{ToastKey, VisibleSet};

use crate::timer::{PauseReasons, TimerOutcome, ToastTimer};

/// Ticks every live toast timer
#[derive(Debug)]
pub struct TimerScheduler {
    timers: FxHashMap<ToastKey, ToastTimer>,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self {
            timers: FxHashMap::default(),
        }
    }

    /// Bring timers in line with the visible set.
    ///
    /// Visible toasts with a timeout that are not exiting get a timer if they
    /// have none yet. Timers of toasts that dropped out of the window are
    /// kept but paused as not frontmost.
    pub fn sync(&mut self, visible: &VisibleSet, hovered: &FxHashSet<ToastKey>, expanded: bool) {
        let mut seen = FxHashSet::default();

        for toast in visible {
            let record = &toast.record;
            if record.animation().is_exiting() {
                continue;
            }
            let Some(timeout) = record.timeout() else {
                continue;
            };

            let key = toast.key();
            seen.insert(key);
            let timer = self.timers.entry(key).or_insert_with(|| {
                tracing::trace!(?key, ?timeout, "timer created");
                ToastTimer::new(timeout)
            });
            timer.set_reasons(PauseReasons {
                hovered: hovered.contains(&key),
                expanded,
                behind: !toast.is_frontmost(),
            });
        }

        for (key, timer) in self.timers.iter_mut() {
            if !seen.contains(key) {
                timer.set_frontmost(false);
            }
        }
    }

    /// Advance running timers by `dt` and return the keys that expired,
    /// in key order
    pub fn tick(&mut self, dt: Duration) -> Vec<ToastKey> {
        let mut expired: Vec<ToastKey> = self
            .timers
            .iter_mut()
            .filter_map(|(key, timer)| {
                (timer.advance(dt) == TimerOutcome::Expired).then_some(*key)
            })
            .collect();
        expired.sort();

        for key in &expired {
            tracing::debug!(?key, "toast timer expired");
        }
        expired
    }

    /// Drop the timer of a toast. Returns false if it had none.
    pub fn cancel(&mut self, key: ToastKey) -> bool {
        self.timers.remove(&key).is_some()
    }

    pub fn get(&self, key: ToastKey) -> Option<&ToastTimer> {
        self.timers.get(&key)
    }

    pub fn get_mut(&mut self, key: ToastKey) -> Option<&mut ToastTimer> {
        self.timers.get_mut(&key)
    }

    pub fn progress(&self, key: ToastKey) -> Option<f32> {
        self.timers.get(&key).map(ToastTimer::progress)
    }

    /// Check if any timer is currently counting
    pub fn has_running(&self) -> bool {
        self.timers.values().any(ToastTimer::is_running)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

impl Default for TimerScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toastrack_core::{MaxVisible, ToastContent, ToastOptions, ToastQueue};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn queue_with(timeouts: &[i64]) -> (ToastQueue, Vec<ToastKey>) {
        let mut queue = ToastQueue::new(MaxVisible::Limited(3));
        let keys = timeouts
            .iter()
            .enumerate()
            .map(|(i, t)| {
                queue.add(
                    ToastContent::new(format!("t{i}")),
                    ToastOptions::new().timeout_ms(*t),
                )
            })
            .collect();
        (queue, keys)
    }

    #[test]
    fn test_only_frontmost_runs() {
        let (queue, keys) = queue_with(&[1000, 1000, 1000]);
        let mut scheduler = TimerScheduler::new();
        scheduler.sync(queue.visible(), &FxHashSet::default(), false);

        assert_eq!(scheduler.len(), 3);
        assert!(!scheduler.get(keys[0]).is_some_and(ToastTimer::is_running));
        assert!(!scheduler.get(keys[1]).is_some_and(ToastTimer::is_running));
        assert!(scheduler.get(keys[2]).is_some_and(ToastTimer::is_running));

        assert_eq!(scheduler.tick(ms(1000)), vec![keys[2]]);
        assert_eq!(scheduler.get(keys[0]).map(ToastTimer::elapsed), Some(Duration::ZERO));
    }

    #[test]
    fn test_toasts_without_timeout_get_no_timer() {
        let (queue, _) = queue_with(&[0, -5]);
        let mut scheduler = TimerScheduler::new();
        scheduler.sync(queue.visible(), &FxHashSet::default(), false);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_hover_and_expansion_pause() {
        let (queue, keys) = queue_with(&[500]);
        let mut scheduler = TimerScheduler::new();

        let mut hovered = FxHashSet::default();
        hovered.insert(keys[0]);
        scheduler.sync(queue.visible(), &hovered, false);
        assert!(scheduler.tick(ms(800)).is_empty());

        scheduler.sync(queue.visible(), &FxHashSet::default(), true);
        assert!(scheduler.tick(ms(800)).is_empty());
        assert!(!scheduler.has_running());

        scheduler.sync(queue.visible(), &FxHashSet::default(), false);
        assert_eq!(scheduler.tick(ms(500)), vec![keys[0]]);
    }

    #[test]
    fn test_exiting_toasts_are_skipped() {
        let (mut queue, keys) = queue_with(&[500]);
        queue.close(keys[0]);

        let mut scheduler = TimerScheduler::new();
        scheduler.sync(queue.visible(), &FxHashSet::default(), false);
        assert!(scheduler.get(keys[0]).is_none());
    }

    #[test]
    fn test_cancel() {
        let (queue, keys) = queue_with(&[500]);
        let mut scheduler = TimerScheduler::new();
        scheduler.sync(queue.visible(), &FxHashSet::default(), false);

        assert!(scheduler.cancel(keys[0]));
        assert!(!scheduler.cancel(keys[0]));
        assert!(scheduler.tick(ms(1000)).is_empty());
    }
}
