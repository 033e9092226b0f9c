//! Overflow detector driven the way a mounted card drives it.

use layout_tests::{decide, long_text_record};
use nuggets_layouts::{
    CardRenderer, FeedRenderer, LayoutProbe, Measurement, OverflowDetector, OverflowState,
    COLLAPSED_BUDGET_PX,
};

struct FixedProbe(Option<Measurement>);

impl LayoutProbe for FixedProbe {
    fn measure(&self) -> Option<Measurement> {
        self.0
    }
}

fn probe(content_height: f32) -> FixedProbe {
    FixedProbe(Some(Measurement {
        content_height,
        line_height: 20.0,
    }))
}

#[test]
fn truncatable_card_full_lifecycle() {
    let record = long_text_record();
    let decision = decide(&record);
    let view = FeedRenderer.render(&record, &decision);
    assert!(view.truncatable);

    let mut detector = OverflowDetector::new(&view.body);
    assert_eq!(detector.state(), OverflowState::Measuring);

    // Mount: constraint applied, then two settled layout passes.
    detector.attach();
    let tall = probe(COLLAPSED_BUDGET_PX * 2.0);
    detector.on_layout_settled(&tall);
    detector.on_layout_settled(&tall);
    assert_eq!(detector.state(), OverflowState::CollapsedOverflowing);
    assert!(detector.shows_expand_affordance());

    // Read more, then collapse again; the verdict is reused, not remeasured.
    detector.toggle();
    assert_eq!(detector.state(), OverflowState::Expanded);
    detector.toggle();
    assert_eq!(detector.state(), OverflowState::CollapsedOverflowing);

    // Unmount: everything after this is a no-op.
    detector.detach();
    detector.on_layout_settled(&tall);
    assert_eq!(detector.state(), OverflowState::CollapsedOverflowing);
}

#[test]
fn boundary_heights_resolve_deterministically() {
    for (height, expected) in [
        (COLLAPSED_BUDGET_PX - 1.0, OverflowState::CollapsedFits),
        (COLLAPSED_BUDGET_PX, OverflowState::CollapsedFits),
        (COLLAPSED_BUDGET_PX + 1.0, OverflowState::CollapsedFits),
        (COLLAPSED_BUDGET_PX + 3.0, OverflowState::CollapsedOverflowing),
    ] {
        let mut detector = OverflowDetector::new("body");
        detector.attach();
        let p = probe(height);
        detector.on_layout_settled(&p);
        detector.on_layout_settled(&p);
        assert_eq!(detector.state(), expected, "height {height}");
    }
}

#[test]
fn record_swap_restarts_measurement() {
    let mut detector = OverflowDetector::new("old body");
    detector.attach();
    let p = probe(400.0);
    detector.on_layout_settled(&p);
    detector.on_layout_settled(&p);
    assert!(detector.is_overflowing());

    detector.content_changed("new body");
    assert_eq!(detector.state(), OverflowState::Measuring);
    let short = probe(40.0);
    detector.on_layout_settled(&short);
    detector.on_layout_settled(&short);
    assert_eq!(detector.state(), OverflowState::CollapsedFits);
}
