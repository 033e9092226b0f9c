use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::media::{LegacyDocument, LegacyMedia, MediaKind, PreviewMetadata, PrimaryMedia, SupportingMedia};
use crate::source::SourceType;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record id must not be empty")]
    EmptyId,
    #[error("media url must not be empty: {context}")]
    EmptyMediaUrl { context: String },
}

/// One saved item, carrying every schema generation side by side.
///
/// `media`, `images`, `video_url` and `documents` are legacy fields from
/// three successive pre-classification schemas. `primary_media` and
/// `supporting_media` are written by the current schema; when either is
/// present (even as an empty list) the record counts as already classified
/// and the legacy fields are dead weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ContentRecord {
    pub id: String,
    /// Bumped by storage on every edit; memo key for decision caching.
    #[serde(default)]
    pub revision: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<LegacyMedia>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<LegacyDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_media: Option<PrimaryMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supporting_media: Option<Vec<SupportingMedia>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ContentRecord {
    /// Bare record with nothing but an id. Field initializers fill the rest.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            revision: 0,
            title: None,
            content: None,
            excerpt: None,
            source_type: SourceType::default(),
            media: None,
            images: Vec::new(),
            video_url: None,
            documents: Vec::new(),
            primary_media: None,
            supporting_media: None,
            tags: Vec::new(),
            created_at: None,
        }
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        if self.id.trim().is_empty() {
            return Err(RecordError::EmptyId);
        }
        if let Some(media) = &self.media {
            if media.url.trim().is_empty() {
                return Err(RecordError::EmptyMediaUrl {
                    context: format!("record {}", self.id),
                });
            }
        }
        Ok(())
    }

    /// Body text: the fuller `content` wins, `excerpt` is the fallback.
    pub fn body(&self) -> &str {
        match &self.content {
            Some(content) if !content.trim().is_empty() => content,
            _ => self.excerpt.as_deref().unwrap_or(""),
        }
    }

    /// User-authored title, trimmed. Empty or whitespace means "no title".
    pub fn user_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Whether the current schema already carries a classification verdict.
    /// Presence of either field is the signal; an empty supporting list is
    /// still a verdict ("classified, nothing supporting").
    pub fn is_classified(&self) -> bool {
        self.primary_media.is_some() || self.supporting_media.is_some()
    }

    /// Synthetic record built by the batch-import pipeline before anything
    /// is persisted. Deliberately legacy-shaped so that preview rendering
    /// exercises the same normalization path as stored records.
    pub fn preview_import(
        url: impl Into<String>,
        title: Option<String>,
        excerpt: Option<String>,
        image_urls: Vec<String>,
    ) -> Self {
        Self {
            title,
            excerpt,
            source_type: SourceType::Import,
            media: Some(LegacyMedia {
                kind: MediaKind::Link,
                url: url.into(),
                preview: None,
                aspect_ratio: None,
            }),
            images: image_urls,
            ..Self::new(format!("preview-{}", Uuid::new_v4()))
        }
    }

    /// Synthetic record built by the AI video-analysis pipeline. The
    /// pipeline classifies server-side, so this one arrives through the
    /// already-classified escape hatch.
    pub fn preview_analysis(video_url: impl Into<String>, summary: impl Into<String>) -> Self {
        let url = video_url.into();
        Self {
            content: Some(summary.into()),
            source_type: SourceType::AiDraft,
            primary_media: Some(PrimaryMedia {
                kind: MediaKind::Youtube,
                url,
                thumbnail: None,
                aspect_ratio: None,
                preview: Some(PreviewMetadata::default()),
            }),
            supporting_media: Some(Vec::new()),
            ..Self::new(format!("preview-{}", Uuid::new_v4()))
        }
    }
}
