//! Toastrack Layout
//!
//! Pure presentation math for a toast stack. Nothing here owns state beyond
//! the measured-height cache; callers feed in positions and get geometry back.
//!
//! - [`stack`]: lift/collapsed offsets, scale, opacity and height per toast
//! - [`gesture`]: swipe-to-dismiss thresholds, drag value and fade
//! - [`transform`]: enter/exit slide and fade

pub mod gesture;
pub mod stack;
pub mod transform;

pub use gesture::{DragOutcome, DragState, GestureEvaluator, SwipeThresholds};
pub use stack::{
    compute_geometry, lift_offset, stack_scale, HeightCache, StackGeometry, StackInput,
    MAX_SHOWN_DEPTH,
};
pub use transform::{presence_origin, presence_transform, PresenceTransform};
