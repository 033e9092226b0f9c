use nuggets_content::MediaKind;
use serde::Serialize;

/// The four interchangeable feed layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutVariant {
    Grid,
    Feed,
    Masonry,
    Utility,
}

/// How a variant fits the media into its tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectPolicy {
    /// Crop to the tile's fixed aspect.
    Crop,
    /// Preserve the media's own aspect ratio.
    Natural,
    /// Small fixed-size thumbnail beside the text.
    Thumb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptionPlacement {
    Overlay,
    Below,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSpan {
    Single,
    Full,
}

/// Presentation knobs a variant is allowed to vary. Everything else in a
/// `CardView` must be identical across variants for the same decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutKnobs {
    pub column_span: ColumnSpan,
    pub aspect: AspectPolicy,
    pub caption_placement: CaptionPlacement,
}

/// The media area of a rendered card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaSlot {
    pub kind: MediaKind,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Label for the fallback glyph when there is no thumbnail, typically
    /// the source host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f32>,
}

/// One fully assembled card, ready for a template to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub variant: LayoutVariant,
    pub card_type: nuggets_classifier::CardType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources_badge: Option<String>,
    pub source_label: String,
    /// Whether the overflow detector should run for this card. Media-only
    /// cards never truncate.
    pub truncatable: bool,
    pub knobs: LayoutKnobs,
}
