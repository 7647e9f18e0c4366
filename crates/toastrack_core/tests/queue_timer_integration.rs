//! Integration tests for the queue driving auto-dismiss timers
//!
//! These tests verify that:
//! - Timers follow the visible window as toasts are added and removed
//! - Expiry closes a toast exactly once
//! - Configuration loaded from TOML shapes the queue

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rustc_hash::FxHashSet;
use toastrack_animation::TimerScheduler;
use toastrack_core::{
    create_toast_queue, MaxVisible, QueueEvent, ToastConfig, ToastContent, ToastOptions,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Frontmost expiry closes the toast and hands the timer to the next one
#[test]
fn test_expiry_closes_and_promotes() {
    init_tracing();

    let config = ToastConfig::from_toml_str("max_visible_toasts = 2").unwrap();
    let mut queue = create_toast_queue(&config);
    assert_eq!(queue.max_visible(), MaxVisible::Limited(2));

    let closed = Arc::new(Mutex::new(Vec::new()));
    let closed_clone = closed.clone();
    queue.on_event(move |event| {
        if let QueueEvent::Closed(key) = event {
            closed_clone.lock().unwrap().push(*key);
        }
    });

    let a = queue.add(ToastContent::new("a"), ToastOptions::new().timeout_ms(400));
    let b = queue.add(ToastContent::new("b"), ToastOptions::new().timeout_ms(400));
    let c = queue.add(ToastContent::new("c"), ToastOptions::new().timeout_ms(400));

    let mut timers = TimerScheduler::new();
    let hovered = FxHashSet::default();

    let step = |queue: &mut toastrack_core::ToastQueue, timers: &mut TimerScheduler, dt| {
        timers.sync(queue.visible(), &hovered, false);
        for key in timers.tick(dt) {
            queue.close(key);
        }
        timers.sync(queue.visible(), &hovered, false);
    };

    step(&mut queue, &mut timers, ms(400));
    assert_eq!(*closed.lock().unwrap(), vec![b]);

    // b stays in the window until removed, so a is still waiting
    step(&mut queue, &mut timers, ms(400));
    assert_eq!(closed.lock().unwrap().len(), 1);

    queue.remove(b);
    timers.cancel(b);
    assert!(queue.visible().contains(c));

    step(&mut queue, &mut timers, ms(400));
    assert_eq!(*closed.lock().unwrap(), vec![b, c]);
    assert!(queue.get(a).is_some_and(|r| !r.animation().is_exiting()));
}

/// A toast added at the end of the order becomes frontmost and pauses the old front
#[test]
fn test_new_frontmost_pauses_previous_front() {
    let mut queue = create_toast_queue(&ToastConfig::default());
    let mut timers = TimerScheduler::new();
    let hovered = FxHashSet::default();

    let low = queue.add(ToastContent::new("low"), ToastOptions::new().timeout_ms(1000).priority(5));
    timers.sync(queue.visible(), &hovered, false);
    timers.tick(ms(300));

    queue.add(ToastContent::new("lower"), ToastOptions::new().timeout_ms(1000));
    timers.sync(queue.visible(), &hovered, false);
    timers.tick(ms(300));

    assert_eq!(timers.get(low).map(|t| t.elapsed()), Some(ms(300)));
}
