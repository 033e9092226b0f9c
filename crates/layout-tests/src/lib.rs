//! Shared fixtures for the layout conformance suites.
//!
//! The corpus deliberately mixes schema eras: bare video URLs, image lists,
//! tagged media, documents, already-classified records, and the synthetic
//! previews the import and analysis pipelines emit.

use nuggets_classifier::{ClassificationEngine, DecisionTraceMode, RenderingDecision};
use nuggets_content::{
    ContentRecord, LegacyDocument, LegacyMedia, MediaKind, PreviewMetadata, PrimaryMedia,
    SourceType, SupportingMedia,
};
use nuggets_layouts::{
    CardRenderer, CardView, FeedRenderer, GridRenderer, MasonryRenderer, UtilityRenderer,
};

pub fn decide(record: &ContentRecord) -> RenderingDecision {
    ClassificationEngine::decide_fresh(record, DecisionTraceMode::Off)
}

/// Render one record through all four variants from a single decision.
pub fn render_all(record: &ContentRecord) -> (RenderingDecision, [CardView; 4]) {
    let decision = decide(record);
    let views = [
        GridRenderer.render(record, &decision),
        FeedRenderer.render(record, &decision),
        MasonryRenderer.render(record, &decision),
        UtilityRenderer.render(record, &decision),
    ];
    (decision, views)
}

/// Oldest schema: bare video URL plus an image list.
pub fn legacy_video_record() -> ContentRecord {
    let mut record = ContentRecord::new("fixture-video");
    record.video_url = Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".into());
    record.images = vec![
        "https://example.com/a.png".into(),
        "https://example.com/b.png".into(),
    ];
    record.content = Some("worth a watch".into());
    record
}

/// Middle schema: tagged link media with scraped preview metadata.
pub fn tagged_link_record() -> ContentRecord {
    let mut record = ContentRecord::new("fixture-link");
    record.media = Some(LegacyMedia {
        kind: MediaKind::Link,
        url: "https://example.com/article".into(),
        preview: Some(PreviewMetadata {
            title: Some("An Article Worth Saving".into()),
            description: Some("Long-form piece.".into()),
            image: Some("https://example.com/og.png".into()),
        }),
        aspect_ratio: None,
    });
    record.excerpt = Some("the intro paragraph".into());
    record
}

/// Current schema: classification already persisted.
pub fn classified_record() -> ContentRecord {
    let mut record = ContentRecord::new("fixture-classified");
    record.revision = 4;
    record.primary_media = Some(PrimaryMedia::new(
        MediaKind::Image,
        "https://example.com/hero.png",
    ));
    record.supporting_media = Some(vec![SupportingMedia::new(
        MediaKind::Pdf,
        "https://example.com/spec.pdf",
    )]);
    record.content = Some("short caption".into());
    record
}

/// Text-only note, no media at all.
pub fn note_record() -> ContentRecord {
    let mut record = ContentRecord::new("fixture-note");
    record.source_type = SourceType::Note;
    record.title = Some("scratchpad".into());
    record.content = Some("remember to circle back\nand follow up".into());
    record
}

/// Long body that must force the text-forward template.
pub fn long_text_record() -> ContentRecord {
    let mut record = ContentRecord::new("fixture-long");
    record.video_url = Some("https://youtu.be/dQw4w9WgXcQ".into());
    record.content = Some(
        (1..=10)
            .map(|n| format!("paragraph line {n}"))
            .collect::<Vec<_>>()
            .join("\n"),
    );
    record
}

/// Documents-era record.
pub fn documents_record() -> ContentRecord {
    let mut record = ContentRecord::new("fixture-docs");
    record.documents = vec![
        LegacyDocument {
            url: "https://example.com/files/report.pdf".into(),
            title: Some("Q3 report".into()),
        },
        LegacyDocument {
            url: "https://example.com/files/appendix.pdf".into(),
            title: None,
        },
    ];
    record
}

/// Media whose URL cannot be parsed for an id.
pub fn malformed_video_record() -> ContentRecord {
    let mut record = ContentRecord::new("fixture-malformed");
    record.media = Some(LegacyMedia {
        kind: MediaKind::Youtube,
        url: "not-a-url".into(),
        preview: None,
        aspect_ratio: None,
    });
    record
}

/// Every fixture, the way a feed page would hold them.
pub fn corpus() -> Vec<ContentRecord> {
    vec![
        legacy_video_record(),
        tagged_link_record(),
        classified_record(),
        note_record(),
        long_text_record(),
        documents_record(),
        malformed_video_record(),
        ContentRecord::preview_import(
            "https://example.com/imported",
            Some("Imported Page".into()),
            Some("summary".into()),
            vec!["https://example.com/imported.png".into()],
        ),
        ContentRecord::preview_analysis("https://youtu.be/dQw4w9WgXcQ", "AI summary of the video."),
    ]
}
