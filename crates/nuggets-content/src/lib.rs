//! Content record model shared by the classification engine and the layout
//! renderers.
//!
//! Records arrive from storage, batch import, and the AI analysis pipeline in
//! several schema generations; this crate carries every generation side by
//! side and leaves normalization to the classifier.

pub mod media;
pub mod record;
pub mod source;

pub use media::{LegacyDocument, LegacyMedia, MediaKind, PreviewMetadata, PrimaryMedia, SupportingMedia};
pub use record::{ContentRecord, RecordError};
pub use source::SourceType;
