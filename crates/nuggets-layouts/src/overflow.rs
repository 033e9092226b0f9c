//! Overflow detection for truncatable body text.
//!
//! Whether a hybrid card's body exceeds its collapsed height budget can only
//! be known after the constrained container has been laid out, so this is a
//! state machine driven by host notifications rather than a pure function.
//! The host owns the real container and reports geometry through a
//! `LayoutProbe`; the detector owns the decision of when to measure, when to
//! trust an earlier measurement, and when a pending measurement must become
//! a no-op because the card is gone.

use serde::Serialize;
use tracing::debug;

/// Collapsed height budget for ordinary body text.
pub const COLLAPSED_BUDGET_PX: f32 = 180.0;

/// Taller budget when the body contains a tabular block; clamping a table to
/// the ordinary budget cuts rows mid-border.
pub const TABULAR_BUDGET_PX: f32 = 320.0;

/// Rounding slack between measured and budgeted height. Font metrics round
/// to sub-pixel values, so equality comparisons need this tolerance.
pub const OVERFLOW_TOLERANCE_PX: f32 = 2.0;

/// Minimum visible height, in line-heights, below which no truncation
/// affordance is shown. Keeps a "read more" control from appearing for
/// content that is only one line too tall.
pub const MIN_VISIBLE_LINES: f32 = 2.5;

/// Resize re-measurement debounce window.
pub const RESIZE_DEBOUNCE_MS: u64 = 100;

/// Post-layout settle notifications consumed before the measurement is
/// trusted. The second pass catches font-loading reflow.
const SETTLE_PASSES: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowState {
    /// Height constraint applied, overflow not yet known.
    Measuring,
    /// Content fits; the constraint has been removed entirely.
    CollapsedFits,
    /// Content overflows; constraint kept, expand affordance shown.
    CollapsedOverflowing,
    /// User expanded; constraint removed, collapse affordance shown.
    Expanded,
}

/// Geometry of the text container as the host measured it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Natural (unclamped) content height in px.
    pub content_height: f32,
    /// Computed line height in px.
    pub line_height: f32,
}

/// Host-side measurement hook. Returns `None` when the container cannot be
/// measured (not attached to a layout tree yet, zero-sized).
pub trait LayoutProbe {
    fn measure(&self) -> Option<Measurement>;
}

/// Per-card truncation state machine. One instance per displayed card,
/// attached for the card's mounted lifetime and detached on every exit path.
#[derive(Debug)]
pub struct OverflowDetector {
    state: OverflowState,
    budget: f32,
    attached: bool,
    settle_passes_left: u8,
    resize_deadline: Option<u64>,
}

impl OverflowDetector {
    /// Detector for a card body. The budget is fixed per body content:
    /// ordinary text collapses at the standard budget, bodies containing a
    /// tabular block get the taller one.
    pub fn new(body: &str) -> Self {
        Self {
            state: OverflowState::Measuring,
            budget: height_budget_for(body),
            attached: false,
            settle_passes_left: 0,
            resize_deadline: None,
        }
    }

    pub fn state(&self) -> OverflowState {
        self.state
    }

    pub fn budget(&self) -> f32 {
        self.budget
    }

    /// The overflow determination. Stays true while expanded; collapse
    /// re-uses it instead of re-measuring.
    pub fn is_overflowing(&self) -> bool {
        matches!(
            self.state,
            OverflowState::CollapsedOverflowing | OverflowState::Expanded
        )
    }

    pub fn is_expanded(&self) -> bool {
        self.state == OverflowState::Expanded
    }

    /// Max-height the host should apply right now. `None` means render at
    /// natural height with no clipping.
    pub fn height_constraint(&self) -> Option<f32> {
        match self.state {
            OverflowState::Measuring | OverflowState::CollapsedOverflowing => Some(self.budget),
            OverflowState::CollapsedFits | OverflowState::Expanded => None,
        }
    }

    pub fn shows_expand_affordance(&self) -> bool {
        self.state == OverflowState::CollapsedOverflowing
    }

    pub fn shows_collapse_affordance(&self) -> bool {
        self.state == OverflowState::Expanded
    }

    /// Card mounted. The constraint is applied first; measurement happens
    /// on the settle notifications that follow.
    pub fn attach(&mut self) {
        self.attached = true;
        self.state = OverflowState::Measuring;
        self.settle_passes_left = SETTLE_PASSES;
        self.resize_deadline = None;
    }

    /// Card unmounted. Idempotent, and the release side of every exit path:
    /// any notification arriving after this is a no-op.
    pub fn detach(&mut self) {
        self.attached = false;
        self.settle_passes_left = 0;
        self.resize_deadline = None;
    }

    /// Host notification that a layout pass has settled. Consumes one settle
    /// pass; the determination may still flip on the second pass if fonts
    /// finished loading in between.
    pub fn on_layout_settled(&mut self, probe: &dyn LayoutProbe) {
        if !self.attached || self.settle_passes_left == 0 {
            return;
        }
        if self.state == OverflowState::Expanded {
            self.settle_passes_left = 0;
            return;
        }
        self.settle_passes_left -= 1;
        self.evaluate(probe);
    }

    /// User activated the expand/collapse affordance.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            OverflowState::CollapsedOverflowing => OverflowState::Expanded,
            // No re-measurement here: the original determination is trusted.
            OverflowState::Expanded => OverflowState::CollapsedOverflowing,
            other => other,
        };
    }

    /// Record content changed (new record, edited text): forget everything
    /// and measure again.
    pub fn content_changed(&mut self, body: &str) {
        self.budget = height_budget_for(body);
        self.state = OverflowState::Measuring;
        self.settle_passes_left = if self.attached { SETTLE_PASSES } else { 0 };
        self.resize_deadline = None;
    }

    /// Container resized for external reasons. Re-measurement is debounced;
    /// each event pushes the deadline out. Ignored while expanded.
    pub fn on_resize(&mut self, now_ms: u64) {
        if !self.attached || self.state == OverflowState::Expanded {
            return;
        }
        self.resize_deadline = Some(now_ms + RESIZE_DEBOUNCE_MS);
    }

    /// When the host should next call `poll`, if a re-measure is pending.
    pub fn next_deadline(&self) -> Option<u64> {
        self.resize_deadline
    }

    /// Drive the debounced re-measure. No-op until the deadline passes, and
    /// permanently a no-op once detached.
    pub fn poll(&mut self, now_ms: u64, probe: &dyn LayoutProbe) {
        if !self.attached {
            return;
        }
        let Some(deadline) = self.resize_deadline else {
            return;
        };
        if now_ms < deadline {
            return;
        }
        self.resize_deadline = None;
        if self.state == OverflowState::Expanded {
            return;
        }
        self.evaluate(probe);
    }

    fn evaluate(&mut self, probe: &dyn LayoutProbe) {
        let next = match probe.measure() {
            // Unmeasurable container: fits, no false-positive affordance.
            None => OverflowState::CollapsedFits,
            Some(measurement) => {
                if self.overflows(measurement) {
                    OverflowState::CollapsedOverflowing
                } else {
                    OverflowState::CollapsedFits
                }
            }
        };
        if next != self.state {
            debug!(from = ?self.state, to = ?next, budget = self.budget, "overflow state");
        }
        self.state = next;
    }

    fn overflows(&self, measurement: Measurement) -> bool {
        if measurement.content_height <= self.budget + OVERFLOW_TOLERANCE_PX {
            return false;
        }
        let visible = self.budget.min(measurement.content_height);
        visible >= MIN_VISIBLE_LINES * measurement.line_height
    }
}

/// Standard budget, or the taller one when any body line is shaped like a
/// markdown table row.
fn height_budget_for(body: &str) -> f32 {
    let tabular = body.lines().any(|line| {
        let line = line.trim();
        line.len() >= 2 && line.starts_with('|') && line.ends_with('|')
    });
    if tabular {
        TABULAR_BUDGET_PX
    } else {
        COLLAPSED_BUDGET_PX
    }
}
