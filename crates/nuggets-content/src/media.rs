use serde::{Deserialize, Serialize};

/// Kind tag shared by every media shape, legacy or classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Youtube,
    Image,
    Twitter,
    Linkedin,
    Document,
    Pdf,
    Link,
    Text,
    /// Anything a newer schema generation writes that this build does not
    /// know. Deserializes instead of failing the whole record.
    #[serde(other)]
    Unknown,
}

impl MediaKind {
    /// Promotion priority when picking the primary media item.
    /// Higher wins; ties go to the first candidate encountered.
    pub fn priority(self) -> u8 {
        match self {
            MediaKind::Youtube => 3,
            MediaKind::Image => 2,
            MediaKind::Document | MediaKind::Pdf => 1,
            _ => 0,
        }
    }
}

/// Open Graph style metadata scraped when the record was saved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PreviewMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Single tagged media object from the middle schema generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct LegacyMedia {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<PreviewMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct LegacyDocument {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// The single most important media item on a record. At most one per record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PrimaryMedia {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<PreviewMetadata>,
}

/// Everything attached to a record that was not promoted to primary.
/// Only the count is user-visible ("+N sources").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct SupportingMedia {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl PrimaryMedia {
    pub fn new(kind: MediaKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
            thumbnail: None,
            aspect_ratio: None,
            preview: None,
        }
    }

    /// Title scraped from preview metadata, trimmed, if any.
    pub fn preview_title(&self) -> Option<&str> {
        self.preview
            .as_ref()
            .and_then(|p| p.title.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

impl SupportingMedia {
    pub fn new(kind: MediaKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
            thumbnail: None,
            filename: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_kind_tolerated() {
        let media: LegacyMedia = serde_json::from_value(json!({
            "type": "hologram",
            "url": "https://example.com/h"
        }))
        .expect("deserialize");
        assert_eq!(media.kind, MediaKind::Unknown);
        assert_eq!(media.kind.priority(), 0);
    }

    #[test]
    fn priority_ranking() {
        assert!(MediaKind::Youtube.priority() > MediaKind::Image.priority());
        assert!(MediaKind::Image.priority() > MediaKind::Pdf.priority());
        assert_eq!(MediaKind::Document.priority(), MediaKind::Pdf.priority());
        assert_eq!(MediaKind::Twitter.priority(), 0);
        assert_eq!(MediaKind::Link.priority(), 0);
    }

    #[test]
    fn preview_title_trims_and_rejects_blank() {
        let mut media = PrimaryMedia::new(MediaKind::Link, "https://example.com");
        media.preview = Some(PreviewMetadata {
            title: Some("  Saved Article  ".into()),
            ..Default::default()
        });
        assert_eq!(media.preview_title(), Some("Saved Article"));

        media.preview = Some(PreviewMetadata {
            title: Some("   ".into()),
            ..Default::default()
        });
        assert_eq!(media.preview_title(), None);
    }
}
