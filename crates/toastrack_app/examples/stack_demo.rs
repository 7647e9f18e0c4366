//! Toast Stack Demo
//!
//! Drives a toast region for a few simulated seconds and logs what would be
//! drawn on selected frames:
//! - Priority ordering and the visible window
//! - Hover pausing the frontmost timer
//! - Expanding the stack and swiping a toast away
//!
//! Run with: cargo run -p toastrack_app --example stack_demo

use std::time::Duration;

use toastrack_app::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut toaster = Toaster::new(ToastConfig {
        placement: Placement::RightBottom,
        ..Default::default()
    });

    toaster.on_event(|event| tracing::info!(?event, "queue event"));

    let info = ToastStyle::default().color(ToastColor::Primary);
    toaster.add_toast(
        ToastContent::new("Sync finished"),
        ToastOptions::new().timeout_ms(1500).style(info),
    );
    toaster.add_toast(
        ToastContent::new("New message").description("Ada: lunch?"),
        ToastOptions::new().timeout_ms(1500).style(info),
    );
    let alert = toaster.add_toast(
        ToastContent::new("Disk almost full"),
        ToastOptions::new()
            .priority(10)
            .style(ToastStyle::default().color(ToastColor::Danger)),
    );
    toaster.add_toast(ToastContent::new("Queued"), ToastOptions::new().timeout_ms(1000));

    for (index, height) in [56.0, 72.0, 64.0].into_iter().enumerate() {
        toaster.report_height(index, height);
    }

    let mut front_hovered = None;
    for frame in 0..240u32 {
        match frame {
            20 => {
                front_hovered = toaster.visible().frontmost().map(|t| t.key());
                if let Some(key) = front_hovered {
                    toaster.hover_start(key);
                }
            }
            60 => {
                if let Some(key) = front_hovered.take() {
                    toaster.hover_end(key);
                }
            }
            150 => toaster.set_expanded(true),
            160 => {
                toaster.drag_start(alert);
                toaster.drag_move(alert, 140.0, 3.0);
                let outcome = toaster.drag_end(alert);
                tracing::info!(?outcome, "alert swiped");
            }
            170 => toaster.set_expanded(false),
            _ => {}
        }

        toaster.advance(FRAME);

        if frame % 30 == 0 {
            log_frames(frame, &toaster);
        }
    }

    log_frames(240, &toaster);
}

fn log_frames(frame: u32, toaster: &Toaster) {
    tracing::info!(frame, visible = toaster.visible().len(), queued = toaster.queue().queued_count(), "---");
    for toast in toaster.frames() {
        let (x, y) = toast.translation();
        tracing::info!(
            title = toast.record.title(),
            index = toast.index,
            scale = toast.geometry.scale,
            x,
            y,
            opacity = toast.opacity(),
            progress = ?toast.progress,
            icon = ?toast.icon(),
            "toast"
        );
    }
}
