use nuggets_content::PrimaryMedia;
use serde::{Deserialize, Serialize};

use crate::trace::DecisionTrace;

/// Which visual template a record renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    /// Media header, title, truncatable body text. Also the degenerate
    /// template for records with no media at all.
    Hybrid,
    /// Media fills the tile; text is at most a short overlay caption and is
    /// never truncated.
    MediaOnly,
}

/// The engine's verdict for one record revision. Layout variants treat this
/// as immutable input; none of them may re-derive a different card type for
/// the same record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderingDecision {
    pub card_type: CardType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_media: Option<PrimaryMedia>,
    pub supporting_count: usize,
    pub should_show_title: bool,
    pub resolved_title: String,
    /// Captured only when trace mode is on; diagnostics channel, never read
    /// back into control flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<DecisionTrace>,
}

impl RenderingDecision {
    pub fn has_media(&self) -> bool {
        self.primary_media.is_some() || self.supporting_count > 0
    }

    /// Badge text for everything that was not promoted to primary.
    pub fn sources_badge(&self) -> Option<String> {
        match self.supporting_count {
            0 => None,
            n => Some(format!("+{n} sources")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&CardType::MediaOnly).expect("serialize"),
            "\"media_only\""
        );
    }

    #[test]
    fn sources_badge_only_when_supporting_present() {
        let decision = RenderingDecision {
            card_type: CardType::Hybrid,
            primary_media: None,
            supporting_count: 0,
            should_show_title: false,
            resolved_title: String::new(),
            trace: None,
        };
        assert_eq!(decision.sources_badge(), None);

        let decision = RenderingDecision {
            supporting_count: 3,
            ..decision
        };
        assert_eq!(decision.sources_badge(), Some("+3 sources".into()));
    }
}
