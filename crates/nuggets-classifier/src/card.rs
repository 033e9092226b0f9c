//! Card template selection.
//!
//! Decides `hybrid` vs `media_only` from media presence, user title, and a
//! coarse synchronous line estimate. The estimate deliberately runs before
//! any layout pass exists; the pixel-accurate overflow detector refines the
//! truncation question later, for hybrid cards only.

use nuggets_content::ContentRecord;
use serde_json::json;
use tracing::debug;

use crate::decision::CardType;
use crate::media::MediaClassification;
use crate::trace::TraceBuilder;

/// Body lines a media-only tile can absorb before the record is forced into
/// the text-forward template.
pub const PREVIEW_LINE_BUDGET: usize = 3;

/// A single unwrapped line longer than this would wrap past the preview
/// budget once rendered, which the newline-based estimate cannot see.
const UNWRAPPED_LINE_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct CardClassification {
    pub card_type: CardType,
    pub should_show_title: bool,
    pub resolved_title: String,
}

/// Approximate body line count: newline-split, blank lines dropped.
///
/// A coarse pre-measurement heuristic, kept deliberately dumb so the card
/// type is decidable synchronously. A long unwrapped paragraph counts as one
/// line here even though it wraps to many on screen; see the trace note in
/// `classify_card`.
pub fn body_line_estimate(body: &str) -> usize {
    body.lines().filter(|line| !line.trim().is_empty()).count()
}

/// Pick the card template for a record. Evaluation order encodes precedence:
/// no media forces hybrid, then long text, then an explicit user title;
/// only a media-rich record with nothing more than a short caption earns the
/// media-only template.
pub fn classify_card(
    record: &ContentRecord,
    media: &MediaClassification,
    trace: &mut TraceBuilder,
) -> CardClassification {
    let user_title = record.user_title();
    let resolved_title = user_title
        .map(String::from)
        .or_else(|| {
            media
                .primary
                .as_ref()
                .and_then(|p| p.preview_title())
                .map(String::from)
        })
        .unwrap_or_default();
    let should_show_title =
        !resolved_title.is_empty() && !record.source_type.suppresses_title();

    let has_media = media.has_media();
    let body = record.body();
    let line_estimate = body_line_estimate(body);

    let card_type = if !has_media {
        trace.push("card_no_media", "no media, text-only records render hybrid");
        CardType::Hybrid
    } else if line_estimate > PREVIEW_LINE_BUDGET {
        trace.push_with(
            "card_long_text",
            format!("{line_estimate} body lines exceed the {PREVIEW_LINE_BUDGET}-line preview budget"),
            json!({ "line_estimate": line_estimate }),
        );
        CardType::Hybrid
    } else if user_title.is_some() {
        trace.push("card_user_title", "explicit title forces the text-forward template");
        CardType::Hybrid
    } else {
        trace.push("card_media_only", "media-rich record with at most a short caption");
        CardType::MediaOnly
    };

    // Known estimator blind spot, surfaced for telemetry: a media-only card
    // whose body is one very long unwrapped line will wrap past the budget
    // on screen, and media-only cards never truncate.
    if card_type == CardType::MediaOnly
        && body
            .lines()
            .any(|line| line.trim().chars().count() > UNWRAPPED_LINE_CHARS)
    {
        trace.push(
            "line_estimate_unwrapped_chars",
            "unwrapped body line exceeds one preview budget of characters",
        );
    }

    debug!(
        record_id = %record.id,
        card_type = ?card_type,
        has_media,
        line_estimate,
        has_user_title = user_title.is_some(),
        "card template selected"
    );

    CardClassification {
        card_type,
        should_show_title,
        resolved_title,
    }
}
