//! Presence transitions
//!
//! Tracks the enter and exit transition of each toast as an explicit clock
//! the presentation layer samples every frame. Finished transitions are
//! reported from [`PresenceTracker::tick`] so the owner can mark entered
//! toasts visible and remove exited ones.

use std::time::Duration;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use toastrack_core::ToastKey;

/// Direction of a running transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresencePhase {
    Entering,
    Exiting,
}

/// Snapshot of one running transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresenceState {
    pub phase: PresencePhase,
    /// Linear progress through the transition, `0.0..=1.0`
    pub progress: f32,
}

#[derive(Clone, Debug)]
struct Transition {
    phase: PresencePhase,
    elapsed: Duration,
    duration: Duration,
}

impl Transition {
    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Transitions that finished during a tick
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PresenceUpdate {
    pub entered: SmallVec<[ToastKey; 4]>,
    pub exited: SmallVec<[ToastKey; 4]>,
}

impl PresenceUpdate {
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}

/// Enter/exit clocks for all toasts
#[derive(Debug, Default)]
pub struct PresenceTracker {
    transitions: FxHashMap<ToastKey, Transition>,
}

impl PresenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the enter transition. Ignored if the toast already has one.
    pub fn enter(&mut self, key: ToastKey, duration: Duration) -> bool {
        if self.transitions.contains_key(&key) {
            return false;
        }
        self.transitions.insert(
            key,
            Transition {
                phase: PresencePhase::Entering,
                elapsed: Duration::ZERO,
                duration,
            },
        );
        true
    }

    /// Start the exit transition, replacing an unfinished enter.
    ///
    /// An interrupted enter reverses from where it got to instead of
    /// starting the exit from fully shown.
    pub fn exit(&mut self, key: ToastKey, duration: Duration) -> bool {
        let elapsed = match self.transitions.get(&key) {
            Some(t) if t.phase == PresencePhase::Exiting => return false,
            Some(t) => duration.mul_f32(1.0 - t.progress()),
            None => Duration::ZERO,
        };
        self.transitions.insert(
            key,
            Transition {
                phase: PresencePhase::Exiting,
                elapsed,
                duration,
            },
        );
        true
    }

    /// Advance every transition and collect the ones that finished
    pub fn tick(&mut self, dt: Duration) -> PresenceUpdate {
        let mut update = PresenceUpdate::default();

        for (key, transition) in self.transitions.iter_mut() {
            transition.elapsed = (transition.elapsed + dt).min(transition.duration);
            if transition.is_done() {
                match transition.phase {
                    PresencePhase::Entering => update.entered.push(*key),
                    PresencePhase::Exiting => update.exited.push(*key),
                }
            }
        }

        self.transitions.retain(|_, t| !t.is_done());
        update.entered.sort();
        update.exited.sort();
        update
    }

    pub fn state(&self, key: ToastKey) -> Option<PresenceState> {
        self.transitions.get(&key).map(|t| PresenceState {
            phase: t.phase,
            progress: t.progress(),
        })
    }

    pub fn forget(&mut self, key: ToastKey) -> bool {
        self.transitions.remove(&key).is_some()
    }

    /// Check if any transition is still playing
    pub fn is_animating(&self) -> bool {
        !self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn keys(n: usize) -> Vec<ToastKey> {
        let mut map: SlotMap<ToastKey, ()> = SlotMap::with_key();
        (0..n).map(|_| map.insert(())).collect()
    }

    #[test]
    fn test_enter_completes_after_duration() {
        let k = keys(1)[0];
        let mut tracker = PresenceTracker::new();
        assert!(tracker.enter(k, ms(300)));
        assert!(!tracker.enter(k, ms(300)));

        assert!(tracker.tick(ms(150)).is_empty());
        let state = tracker.state(k).unwrap();
        assert_eq!(state.phase, PresencePhase::Entering);
        assert!((state.progress - 0.5).abs() < 1e-6);

        let update = tracker.tick(ms(150));
        assert_eq!(update.entered.as_slice(), &[k]);
        assert!(tracker.state(k).is_none());
    }

    #[test]
    fn test_exit_reports_once() {
        let k = keys(1)[0];
        let mut tracker = PresenceTracker::new();
        tracker.exit(k, ms(300));
        assert!(!tracker.exit(k, ms(300)));

        assert_eq!(tracker.tick(ms(400)).exited.as_slice(), &[k]);
        assert!(tracker.tick(ms(400)).is_empty());
        assert!(!tracker.is_animating());
    }

    #[test]
    fn test_exit_interrupts_enter() {
        let k = keys(1)[0];
        let mut tracker = PresenceTracker::new();
        tracker.enter(k, ms(300));
        tracker.tick(ms(100));

        tracker.exit(k, ms(300));
        let state = tracker.state(k).unwrap();
        assert_eq!(state.phase, PresencePhase::Exiting);
        assert!((state.progress - 2.0 / 3.0).abs() < 1e-3);

        // Only the part that was shown needs to play back
        assert_eq!(tracker.tick(ms(101)).exited.as_slice(), &[k]);
    }

    #[test]
    fn test_zero_duration_finishes_on_next_tick() {
        let k = keys(1)[0];
        let mut tracker = PresenceTracker::new();
        tracker.enter(k, Duration::ZERO);
        assert_eq!(tracker.state(k).map(|s| s.progress), Some(1.0));
        assert_eq!(tracker.tick(Duration::ZERO).entered.as_slice(), &[k]);
    }
}
