//! Classification engine for content records.
//!
//! Normalizes the legacy media union into one primary/supporting shape,
//! resolves a preview thumbnail, and decides which card template a record
//! renders as. Every function here is pure and synchronous; referential
//! stability across renders comes from the already-classified record fields
//! and the revision-keyed decision cache.

pub mod card;
pub mod decision;
pub mod engine;
pub mod media;
pub mod thumbnail;
pub mod trace;

pub use card::{body_line_estimate, classify_card, CardClassification, PREVIEW_LINE_BUDGET};
pub use decision::{CardType, RenderingDecision};
pub use engine::ClassificationEngine;
pub use media::{classify_media, MediaClassification};
pub use thumbnail::{host_of, resolve_thumbnail, youtube_video_id};
pub use trace::{DecisionTrace, DecisionTraceMode, TraceBuilder, TraceStep};
