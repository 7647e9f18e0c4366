//! Toast region runtime
//!
//! [`Toaster`] wires the queue, timers, presence transitions, gestures and
//! stack layout together. The presentation layer forwards pointer input and
//! measured heights, calls [`Toaster::advance`] (or [`Toaster::tick_at`])
//! once per frame, and draws whatever [`Toaster::frames`] returns.
//!
//! A tick runs in a fixed order:
//!
//! 1. timers are synced with the visible set
//! 2. presence clocks advance; finished enters become visible and finished
//!    exits are removed
//! 3. timers advance; expired toasts are closed
//! 4. timers and enter transitions are synced again

use std::time::{Duration, Instant};

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use toastrack_animation::{Easing, PresenceState, PresenceTracker, TimerScheduler, ToastTimer};
use toastrack_core::{
    create_toast_queue, AnimationState, Placement, QueueEvent, SubscriptionId, ToastConfig,
    ToastContent, ToastKey, ToastOptions, ToastQueue, ToastRecord, VisibleSet,
};
use toastrack_layout::{
    compute_geometry, presence_transform, DragOutcome, DragState, GestureEvaluator, HeightCache,
    StackInput, SwipeThresholds, MAX_SHOWN_DEPTH,
};

use crate::frame::ToastFrame;

/// Composition root for one toast region
#[derive(Debug)]
pub struct Toaster {
    config: ToastConfig,
    queue: ToastQueue,
    timers: TimerScheduler,
    presence: PresenceTracker,
    drags: FxHashMap<ToastKey, DragState>,
    hovered: FxHashSet<ToastKey>,
    heights: HeightCache,
    expanded: bool,
    easing: Easing,
    last_tick: Option<Instant>,
}

impl Toaster {
    pub fn new(config: ToastConfig) -> Self {
        let queue = create_toast_queue(&config);
        tracing::debug!(
            max_visible = ?config.max_visible_toasts,
            placement = %config.effective_placement(),
            disable_animation = config.disable_animation,
            "toaster created"
        );
        Self {
            config,
            queue,
            timers: TimerScheduler::new(),
            presence: PresenceTracker::new(),
            drags: FxHashMap::default(),
            hovered: FxHashSet::default(),
            heights: HeightCache::new(),
            expanded: false,
            easing: Easing::CSS_EASE_OUT,
            last_tick: None,
        }
    }

    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Override the curve used for presence transforms
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    // =========================================================================
    // Queue operations
    // =========================================================================

    pub fn add_toast(&mut self, content: ToastContent, options: ToastOptions) -> ToastKey {
        let key = self.queue.add(content, options);
        self.sync();
        key
    }

    /// Start closing a toast. It stays drawn until its exit transition ends,
    /// or is removed at once when animation is disabled.
    pub fn close(&mut self, key: ToastKey) -> bool {
        if !self.queue.close(key) {
            return false;
        }
        self.drags.remove(&key);

        let exit = self.config.exit_duration();
        if exit.is_zero() {
            self.remove(key);
        } else {
            self.presence.exit(key, exit);
            self.sync();
        }
        true
    }

    /// Delete a toast immediately, dropping its timer, transition and drag
    pub fn remove(&mut self, key: ToastKey) -> bool {
        if !self.queue.remove(key) {
            return false;
        }
        self.timers.cancel(key);
        self.presence.forget(key);
        self.drags.remove(&key);
        self.hovered.remove(&key);
        self.sync();
        true
    }

    /// Close every visible toast. Returns how many started closing.
    pub fn close_all(&mut self) -> usize {
        let keys: SmallVec<[ToastKey; 4]> = self.queue.visible().keys().collect();
        keys.into_iter().filter(|key| self.close(*key)).count()
    }

    /// Clear the loading state of a toast
    pub fn resolve_loading(&mut self, key: ToastKey) -> bool {
        self.queue.set_loading(key, false)
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    pub fn hover_start(&mut self, key: ToastKey) -> bool {
        if !self.accepts_pointer(key) || !self.hovered.insert(key) {
            return false;
        }
        self.sync();
        true
    }

    pub fn hover_end(&mut self, key: ToastKey) -> bool {
        if !self.hovered.remove(&key) {
            return false;
        }
        self.sync();
        true
    }

    /// Expand or collapse the whole stack
    pub fn set_expanded(&mut self, expanded: bool) {
        if self.expanded != expanded {
            self.expanded = expanded;
            self.sync();
        }
    }

    pub fn drag_start(&mut self, key: ToastKey) -> bool {
        let exiting = self
            .queue
            .get(key)
            .map_or(true, |record| record.animation().is_exiting());
        if exiting || !self.accepts_pointer(key) {
            return false;
        }
        self.drags.insert(key, DragState::new());
        true
    }

    /// Update the pointer offset of a running drag
    pub fn drag_move(&mut self, key: ToastKey, dx: f32, dy: f32) -> bool {
        match self.drags.get_mut(&key) {
            Some(drag) => {
                drag.move_to(dx, dy);
                true
            }
            None => false,
        }
    }

    /// Release a drag. Past the threshold the toast is closed and removed.
    pub fn drag_end(&mut self, key: ToastKey) -> Option<DragOutcome> {
        let drag = self.drags.remove(&key)?;
        let record = self.queue.get(key)?;
        let outcome = self.gesture_for(record).release(&drag);

        if outcome == DragOutcome::Dismiss {
            tracing::debug!(?key, offset = ?drag.offset(), "toast swiped away");
            self.close(key);
            self.remove(key);
        }
        Some(outcome)
    }

    /// Record the measured height of the visible toast at `index`
    pub fn report_height(&mut self, index: usize, height: f32) {
        self.heights.set(index, height);
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Advance the region by `dt`
    pub fn advance(&mut self, dt: Duration) {
        self.timers
            .sync(self.queue.visible(), &self.hovered, self.expanded);

        let update = self.presence.tick(dt);
        for key in update.entered {
            self.queue.mark_visible(key);
        }
        for key in update.exited {
            self.remove(key);
        }

        for key in self.timers.tick(dt) {
            self.close(key);
        }

        self.sync();
        tracing::trace!(?dt, visible = self.queue.visible().len(), "toaster tick");
    }

    /// Advance by the wall-clock time since the previous call
    pub fn tick_at(&mut self, now: Instant) {
        let dt = self
            .last_tick
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.last_tick = Some(now);
        self.advance(dt);
    }

    /// Whether anything still changes over time
    pub fn is_active(&self) -> bool {
        self.timers.has_running() || self.presence.is_animating()
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// Drawing data for every visible toast, back to front
    pub fn frames(&self) -> Vec<ToastFrame> {
        self.queue
            .visible()
            .iter()
            .map(|toast| {
                let key = toast.key();
                let record = &toast.record;
                let placement = self.placement_for(record);
                let drag = self.drags.get(&key);

                let input = StackInput::new(toast.index, toast.total)
                    .expanded(self.expanded)
                    .dragging(drag.is_some())
                    .toast_offset(self.config.toast_offset);
                let geometry = compute_geometry(&input, &self.heights);

                let presence =
                    presence_transform(self.presence.state(key), placement, self.easing);

                let gesture = self.gesture_for(record);
                let (drag_translation, drag_opacity) = match drag {
                    Some(drag) => (drag.translation(gesture.axis()), gesture.drag_opacity(drag)),
                    None => ((0.0, 0.0), 1.0),
                };

                let progress = record
                    .has_progress()
                    .then(|| self.timers.progress(key).unwrap_or(0.0));

                ToastFrame {
                    record: record.clone(),
                    index: toast.index,
                    total: toast.total,
                    placement,
                    geometry,
                    presence,
                    drag_translation,
                    drag_opacity,
                    progress,
                }
            })
            .collect()
    }

    /// Placement of a toast after its own override and the compact viewport
    pub fn placement_for(&self, record: &ToastRecord) -> Placement {
        let placement = record.placement().unwrap_or(self.config.placement);
        if self.config.compact_viewport {
            placement.compact()
        } else {
            placement
        }
    }

    /// Only drawn toasts that are fully opaque take pointer input
    fn accepts_pointer(&self, key: ToastKey) -> bool {
        self.queue
            .visible()
            .get(key)
            .is_some_and(|toast| toast.depth() <= MAX_SHOWN_DEPTH)
    }

    fn gesture_for(&self, record: &ToastRecord) -> GestureEvaluator {
        GestureEvaluator::new(
            self.placement_for(record),
            SwipeThresholds::from(&self.config.swipe),
        )
    }

    // =========================================================================
    // Inspection and subscriptions
    // =========================================================================

    pub fn queue(&self) -> &ToastQueue {
        &self.queue
    }

    pub fn visible(&self) -> &VisibleSet {
        self.queue.visible()
    }

    pub fn get(&self, key: ToastKey) -> Option<&ToastRecord> {
        self.queue.get(key)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_hovered(&self, key: ToastKey) -> bool {
        self.hovered.contains(&key)
    }

    pub fn is_dragging(&self, key: ToastKey) -> bool {
        self.drags.contains_key(&key)
    }

    pub fn timer(&self, key: ToastKey) -> Option<&ToastTimer> {
        self.timers.get(key)
    }

    pub fn presence_state(&self, key: ToastKey) -> Option<PresenceState> {
        self.presence.state(key)
    }

    pub fn heights(&self) -> &HeightCache {
        &self.heights
    }

    /// Listen for visible-set changes
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&VisibleSet) + Send + 'static,
    {
        self.queue.subscribe(handler)
    }

    /// Listen for add/close/remove events
    pub fn on_event<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&QueueEvent) + Send + 'static,
    {
        self.queue.on_event(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.queue.unsubscribe(id)
    }

    /// Bring timers, heights and enter transitions in line with the visible set
    fn sync(&mut self) {
        let visible = self.queue.visible();
        self.heights.truncate(visible.len());
        self.timers.sync(visible, &self.hovered, self.expanded);

        let entering: SmallVec<[ToastKey; 4]> = visible
            .iter()
            .filter(|t| t.record.animation() == AnimationState::Entering)
            .map(|t| t.key())
            .collect();

        let enter = self.config.enter_duration();
        for key in entering {
            if enter.is_zero() {
                self.queue.mark_visible(key);
            } else {
                self.presence.enter(key, enter);
            }
        }
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}
