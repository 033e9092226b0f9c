use layout_tests::{corpus, decide, legacy_video_record, long_text_record};
use nuggets_classifier::CardType;
use nuggets_layouts::{
    AspectPolicy, CaptionPlacement, CardRenderer, ColumnSpan, FeedRenderer, LayoutVariant,
};

#[test]
fn feed_cards_are_full_width_natural_aspect() {
    for record in corpus() {
        let decision = decide(&record);
        let view = FeedRenderer.render(&record, &decision);
        assert_eq!(view.variant, LayoutVariant::Feed);
        assert_eq!(view.knobs.column_span, ColumnSpan::Full);
        assert_eq!(view.knobs.aspect, AspectPolicy::Natural);
        assert_eq!(view.knobs.caption_placement, CaptionPlacement::Below);
    }
}

#[test]
fn feed_hybrid_long_text_is_truncatable() {
    let record = long_text_record();
    let decision = decide(&record);
    let view = FeedRenderer.render(&record, &decision);
    assert_eq!(view.card_type, CardType::Hybrid);
    assert!(view.truncatable);
}

#[test]
fn feed_surfaces_supporting_count_badge() {
    let record = legacy_video_record();
    let decision = decide(&record);
    let view = FeedRenderer.render(&record, &decision);
    assert_eq!(view.sources_badge.as_deref(), Some("+2 sources"));
}
