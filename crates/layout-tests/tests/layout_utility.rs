use layout_tests::{corpus, decide, documents_record, note_record};
use nuggets_layouts::{
    AspectPolicy, CaptionPlacement, CardRenderer, ColumnSpan, LayoutVariant, UtilityRenderer,
};

#[test]
fn utility_rows_are_compact_and_caption_free() {
    for record in corpus() {
        let decision = decide(&record);
        let view = UtilityRenderer.render(&record, &decision);
        assert_eq!(view.variant, LayoutVariant::Utility);
        assert_eq!(view.knobs.column_span, ColumnSpan::Full);
        assert_eq!(view.knobs.aspect, AspectPolicy::Thumb);
        assert_eq!(view.knobs.caption_placement, CaptionPlacement::Hidden);
    }
}

#[test]
fn utility_still_honors_title_suppression() {
    let record = note_record();
    let decision = decide(&record);
    let view = UtilityRenderer.render(&record, &decision);
    assert_eq!(view.title, None);
    assert_eq!(view.source_label, "Note");
}

#[test]
fn utility_shows_source_labels_for_triage() {
    let record = documents_record();
    let decision = decide(&record);
    let view = UtilityRenderer.render(&record, &decision);
    assert_eq!(view.source_label, "Link");
    assert_eq!(view.sources_badge.as_deref(), Some("+1 sources"));
}
