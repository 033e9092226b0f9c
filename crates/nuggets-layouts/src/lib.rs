//! Display-time surface: layout renderers and the overflow detector.
//!
//! Four interchangeable layout variants map one `RenderingDecision` to a
//! `CardView`; the overflow detector then answers the truncation question
//! for hybrid cards once a real container can be measured.

pub mod overflow;
pub mod renderer;
pub mod view;

pub use overflow::{
    LayoutProbe, Measurement, OverflowDetector, OverflowState, COLLAPSED_BUDGET_PX,
    MIN_VISIBLE_LINES, OVERFLOW_TOLERANCE_PX, RESIZE_DEBOUNCE_MS, TABULAR_BUDGET_PX,
};
pub use renderer::{
    CardRenderer, FeedRenderer, GridRenderer, MasonryRenderer, UtilityRenderer,
};
pub use view::{
    AspectPolicy, CaptionPlacement, CardView, ColumnSpan, LayoutKnobs, LayoutVariant, MediaSlot,
};
