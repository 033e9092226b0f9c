//! Layout renderers.
//!
//! Each variant is a unit struct implementing `CardRenderer`. The shared
//! assembly step is the consistency contract: card type, title, body, media
//! and badge come straight from the decision and are identical across
//! variants; a variant only chooses its presentation knobs.

use nuggets_classifier::{host_of, resolve_thumbnail, CardType, RenderingDecision};
use nuggets_content::ContentRecord;

use crate::view::{
    AspectPolicy, CaptionPlacement, CardView, ColumnSpan, LayoutKnobs, LayoutVariant, MediaSlot,
};

/// Maps a rendering decision to a card view for one layout variant.
pub trait CardRenderer {
    fn variant(&self) -> LayoutVariant;

    fn knobs(&self, decision: &RenderingDecision) -> LayoutKnobs;

    fn render(&self, record: &ContentRecord, decision: &RenderingDecision) -> CardView {
        build_card_view(record, decision, self.variant(), self.knobs(decision))
    }
}

fn build_card_view(
    record: &ContentRecord,
    decision: &RenderingDecision,
    variant: LayoutVariant,
    knobs: LayoutKnobs,
) -> CardView {
    let media = decision.primary_media.as_ref().map(|primary| {
        let thumbnail = resolve_thumbnail(primary);
        let fallback_label = if thumbnail.is_none() {
            host_of(&primary.url)
        } else {
            None
        };
        MediaSlot {
            kind: primary.kind,
            url: primary.url.clone(),
            thumbnail,
            fallback_label,
            aspect_ratio: primary.aspect_ratio,
        }
    });

    CardView {
        variant,
        card_type: decision.card_type,
        title: decision
            .should_show_title
            .then(|| decision.resolved_title.clone()),
        body: record.body().to_string(),
        media,
        sources_badge: decision.sources_badge(),
        source_label: record.source_type.label().to_string(),
        truncatable: decision.card_type == CardType::Hybrid && !record.body().trim().is_empty(),
        knobs,
    }
}

/// Fixed-aspect tile wall.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridRenderer;

/// Single-column reading feed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedRenderer;

/// Natural-height column packing.
#[derive(Debug, Clone, Copy, Default)]
pub struct MasonryRenderer;

/// Dense list for triage, thumbnail beside text.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtilityRenderer;

impl CardRenderer for GridRenderer {
    fn variant(&self) -> LayoutVariant {
        LayoutVariant::Grid
    }

    fn knobs(&self, decision: &RenderingDecision) -> LayoutKnobs {
        LayoutKnobs {
            column_span: ColumnSpan::Single,
            aspect: AspectPolicy::Crop,
            caption_placement: match decision.card_type {
                CardType::MediaOnly => CaptionPlacement::Overlay,
                CardType::Hybrid => CaptionPlacement::Below,
            },
        }
    }
}

impl CardRenderer for FeedRenderer {
    fn variant(&self) -> LayoutVariant {
        LayoutVariant::Feed
    }

    fn knobs(&self, _decision: &RenderingDecision) -> LayoutKnobs {
        LayoutKnobs {
            column_span: ColumnSpan::Full,
            aspect: AspectPolicy::Natural,
            caption_placement: CaptionPlacement::Below,
        }
    }
}

impl CardRenderer for MasonryRenderer {
    fn variant(&self) -> LayoutVariant {
        LayoutVariant::Masonry
    }

    fn knobs(&self, decision: &RenderingDecision) -> LayoutKnobs {
        LayoutKnobs {
            column_span: ColumnSpan::Single,
            aspect: AspectPolicy::Natural,
            caption_placement: match decision.card_type {
                CardType::MediaOnly => CaptionPlacement::Overlay,
                CardType::Hybrid => CaptionPlacement::Below,
            },
        }
    }
}

impl CardRenderer for UtilityRenderer {
    fn variant(&self) -> LayoutVariant {
        LayoutVariant::Utility
    }

    fn knobs(&self, _decision: &RenderingDecision) -> LayoutKnobs {
        LayoutKnobs {
            column_span: ColumnSpan::Full,
            aspect: AspectPolicy::Thumb,
            caption_placement: CaptionPlacement::Hidden,
        }
    }
}
