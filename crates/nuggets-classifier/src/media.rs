//! Legacy media union -> canonical primary/supporting normalization.
//!
//! Records carry media in up to four optional fields from different schema
//! eras. This module enumerates every candidate in one fixed order, promotes
//! the highest-priority one to primary, and leaves the rest as supporting
//! media. Downstream code depends only on the canonical shape.

use nuggets_content::{ContentRecord, MediaKind, PrimaryMedia, SupportingMedia};
use serde_json::json;
use tracing::{debug, trace};

use crate::trace::TraceBuilder;

/// Canonical media shape for one record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaClassification {
    pub primary: Option<PrimaryMedia>,
    pub supporting: Vec<SupportingMedia>,
}

impl MediaClassification {
    pub fn has_media(&self) -> bool {
        self.primary.is_some() || !self.supporting.is_empty()
    }
}

struct Candidate {
    kind: MediaKind,
    url: String,
    thumbnail: Option<String>,
    aspect_ratio: Option<f32>,
    preview: Option<nuggets_content::PreviewMetadata>,
    filename: Option<String>,
    title: Option<String>,
}

/// Resolve a record's media fields into exactly one primary (or none) plus
/// supporting media.
///
/// If the record already carries classified fields they are returned
/// verbatim; re-deriving them from legacy fields would let the displayed
/// card flip between renders.
pub fn classify_media(record: &ContentRecord, trace: &mut TraceBuilder) -> MediaClassification {
    if record.is_classified() {
        trace.push(
            "media_already_classified",
            "record carries classified fields, legacy fields ignored",
        );
        return MediaClassification {
            primary: record.primary_media.clone(),
            supporting: record.supporting_media.clone().unwrap_or_default(),
        };
    }

    let candidates = enumerate_candidates(record);
    if candidates.is_empty() {
        trace.push("media_none", "no media candidates on record");
        return MediaClassification::default();
    }

    // Highest priority wins; a tie keeps the earlier candidate so the
    // outcome is stable for any field-population order.
    let mut primary_idx = 0;
    for (idx, candidate) in candidates.iter().enumerate() {
        trace!(
            kind = ?candidate.kind,
            url = %candidate.url,
            priority = candidate.kind.priority(),
            "media candidate"
        );
        if candidate.kind.priority() > candidates[primary_idx].kind.priority() {
            primary_idx = idx;
        }
    }

    debug!(
        record_id = %record.id,
        kind = ?candidates[primary_idx].kind,
        candidate_count = candidates.len(),
        "promoted primary media"
    );
    trace.push_with(
        "media_primary_promoted",
        format!("{:?} promoted out of {} candidates", candidates[primary_idx].kind, candidates.len()),
        json!({ "index": primary_idx, "candidates": candidates.len() }),
    );

    let mut primary = None;
    let mut supporting = Vec::with_capacity(candidates.len() - 1);
    for (idx, candidate) in candidates.into_iter().enumerate() {
        if idx == primary_idx {
            primary = Some(PrimaryMedia {
                kind: candidate.kind,
                url: candidate.url,
                thumbnail: candidate.thumbnail,
                aspect_ratio: candidate.aspect_ratio,
                preview: candidate.preview,
            });
        } else {
            supporting.push(SupportingMedia {
                kind: candidate.kind,
                url: candidate.url,
                thumbnail: None,
                filename: candidate.filename,
                title: candidate.title,
            });
        }
    }

    MediaClassification {
        primary,
        supporting,
    }
}

/// Fixed enumeration order: tagged media field, then images, then the bare
/// video url, then documents. The order is part of the tie-break contract.
fn enumerate_candidates(record: &ContentRecord) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    if let Some(media) = &record.media {
        if !media.url.trim().is_empty() {
            candidates.push(Candidate {
                kind: media.kind,
                url: media.url.clone(),
                thumbnail: media.preview.as_ref().and_then(|p| p.image.clone()),
                aspect_ratio: media.aspect_ratio,
                preview: media.preview.clone(),
                filename: None,
                title: None,
            });
        }
    }

    for image in &record.images {
        if image.trim().is_empty() {
            continue;
        }
        candidates.push(Candidate {
            kind: MediaKind::Image,
            url: image.clone(),
            thumbnail: None,
            aspect_ratio: None,
            preview: None,
            filename: None,
            title: None,
        });
    }

    if let Some(video_url) = &record.video_url {
        if !video_url.trim().is_empty() {
            candidates.push(Candidate {
                kind: MediaKind::Youtube,
                url: video_url.clone(),
                thumbnail: None,
                aspect_ratio: None,
                preview: None,
                filename: None,
                title: None,
            });
        }
    }

    for document in &record.documents {
        if document.url.trim().is_empty() {
            continue;
        }
        candidates.push(Candidate {
            kind: MediaKind::Document,
            url: document.url.clone(),
            thumbnail: None,
            aspect_ratio: None,
            preview: None,
            filename: last_path_segment(&document.url),
            title: document.title.clone(),
        });
    }

    candidates
}

fn last_path_segment(url: &str) -> Option<String> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .map(str::trim)
        .filter(|segment| !segment.is_empty() && !segment.contains("://"))
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{DecisionTraceMode, TraceBuilder};
    use nuggets_content::{LegacyDocument, LegacyMedia, PreviewMetadata};

    fn trace_off() -> TraceBuilder {
        TraceBuilder::new(DecisionTraceMode::Off)
    }

    #[test]
    fn no_media_yields_empty_classification() {
        let record = ContentRecord::new("n-1");
        let classified = classify_media(&record, &mut trace_off());
        assert_eq!(classified.primary, None);
        assert!(classified.supporting.is_empty());
        assert!(!classified.has_media());
    }

    #[test]
    fn youtube_outranks_images() {
        let mut record = ContentRecord::new("n-2");
        record.images = vec![
            "https://example.com/a.png".into(),
            "https://example.com/b.png".into(),
        ];
        record.video_url = Some("https://youtu.be/dQw4w9WgXcQ".into());

        let classified = classify_media(&record, &mut trace_off());
        let primary = classified.primary.expect("primary");
        assert_eq!(primary.kind, MediaKind::Youtube);
        assert_eq!(classified.supporting.len(), 2);
        assert_eq!(classified.supporting[0].url, "https://example.com/a.png");
        assert_eq!(classified.supporting[1].url, "https://example.com/b.png");
    }

    #[test]
    fn tie_keeps_first_encountered() {
        let mut record = ContentRecord::new("n-3");
        record.images = vec![
            "https://example.com/first.png".into(),
            "https://example.com/second.png".into(),
        ];

        let classified = classify_media(&record, &mut trace_off());
        assert_eq!(
            classified.primary.expect("primary").url,
            "https://example.com/first.png"
        );
        assert_eq!(classified.supporting.len(), 1);
    }

    #[test]
    fn tagged_media_field_enumerates_first() {
        let mut record = ContentRecord::new("n-4");
        record.media = Some(LegacyMedia {
            kind: MediaKind::Image,
            url: "https://example.com/tagged.png".into(),
            preview: None,
            aspect_ratio: Some(1.5),
        });
        record.images = vec!["https://example.com/list.png".into()];

        let classified = classify_media(&record, &mut trace_off());
        let primary = classified.primary.expect("primary");
        assert_eq!(primary.url, "https://example.com/tagged.png");
        assert_eq!(primary.aspect_ratio, Some(1.5));
    }

    #[test]
    fn documents_rank_between_links_and_images() {
        let mut record = ContentRecord::new("n-5");
        record.media = Some(LegacyMedia {
            kind: MediaKind::Link,
            url: "https://example.com/article".into(),
            preview: None,
            aspect_ratio: None,
        });
        record.documents = vec![LegacyDocument {
            url: "https://example.com/files/report.pdf".into(),
            title: Some("Q3 report".into()),
        }];

        let classified = classify_media(&record, &mut trace_off());
        let primary = classified.primary.expect("primary");
        assert_eq!(primary.kind, MediaKind::Document);
        assert_eq!(classified.supporting.len(), 1);
        assert_eq!(classified.supporting[0].kind, MediaKind::Link);
    }

    #[test]
    fn preview_image_becomes_thumbnail() {
        let mut record = ContentRecord::new("n-6");
        record.media = Some(LegacyMedia {
            kind: MediaKind::Link,
            url: "https://example.com/article".into(),
            preview: Some(PreviewMetadata {
                title: Some("Article".into()),
                description: None,
                image: Some("https://example.com/og.png".into()),
            }),
            aspect_ratio: None,
        });

        let classified = classify_media(&record, &mut trace_off());
        assert_eq!(
            classified.primary.expect("primary").thumbnail.as_deref(),
            Some("https://example.com/og.png")
        );
    }

    #[test]
    fn already_classified_fields_win_over_legacy() {
        let mut record = ContentRecord::new("n-7");
        record.primary_media = Some(PrimaryMedia::new(
            MediaKind::Image,
            "https://example.com/decided.png",
        ));
        record.supporting_media = Some(Vec::new());
        // Legacy fields that would classify differently.
        record.video_url = Some("https://youtu.be/dQw4w9WgXcQ".into());

        let classified = classify_media(&record, &mut trace_off());
        assert_eq!(
            classified.primary.expect("primary").url,
            "https://example.com/decided.png"
        );
        assert!(classified.supporting.is_empty());
    }

    #[test]
    fn classified_empty_list_is_respected() {
        let mut record = ContentRecord::new("n-8");
        record.supporting_media = Some(Vec::new());
        record.images = vec!["https://example.com/late-write.png".into()];

        let classified = classify_media(&record, &mut trace_off());
        assert_eq!(classified.primary, None);
        assert!(classified.supporting.is_empty());
    }

    #[test]
    fn classify_twice_is_bit_identical() {
        let mut record = ContentRecord::new("n-9");
        record.images = vec!["https://example.com/a.png".into()];
        record.video_url = Some("https://youtu.be/dQw4w9WgXcQ".into());

        let first = classify_media(&record, &mut trace_off());
        let second = classify_media(&record, &mut trace_off());
        assert_eq!(first, second);
    }

    #[test]
    fn blank_urls_are_skipped() {
        let mut record = ContentRecord::new("n-10");
        record.images = vec!["   ".into(), "https://example.com/real.png".into()];
        record.video_url = Some(String::new());

        let classified = classify_media(&record, &mut trace_off());
        let primary = classified.primary.expect("primary");
        assert_eq!(primary.kind, MediaKind::Image);
        assert_eq!(primary.url, "https://example.com/real.png");
        assert!(classified.supporting.is_empty());
    }

    #[test]
    fn document_filename_derived_from_url() {
        let mut record = ContentRecord::new("n-11");
        record.documents = vec![
            LegacyDocument {
                url: "https://example.com/files/report.pdf".into(),
                title: None,
            },
            LegacyDocument {
                url: "https://example.com/files/extra.pdf".into(),
                title: None,
            },
        ];

        let classified = classify_media(&record, &mut trace_off());
        assert_eq!(
            classified.supporting[0].filename.as_deref(),
            Some("extra.pdf")
        );
    }
}
