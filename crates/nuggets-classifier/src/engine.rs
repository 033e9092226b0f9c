use std::collections::HashMap;

use nuggets_content::ContentRecord;
use tracing::debug;

use crate::card::classify_card;
use crate::decision::RenderingDecision;
use crate::media::classify_media;
use crate::trace::{DecisionTraceMode, TraceBuilder};

/// Facade over the classification pipeline with a revision-keyed memo.
///
/// A record is decided once per (id, revision); later calls for the same
/// revision return the stored decision even if the record's legacy fields
/// were mutated in the meantime. The four layout variants are all fed from
/// the same stored value, so a card can never change template between
/// renders of one revision.
#[derive(Debug, Default)]
pub struct ClassificationEngine {
    mode: DecisionTraceMode,
    cache: HashMap<(String, u64), RenderingDecision>,
}

impl ClassificationEngine {
    /// Engine with the trace mode taken from `NUGGETS_DECISION_TRACE`.
    pub fn new() -> Self {
        Self::with_mode(DecisionTraceMode::from_env())
    }

    pub fn with_mode(mode: DecisionTraceMode) -> Self {
        Self {
            mode,
            cache: HashMap::new(),
        }
    }

    /// Decide the rendering for a record, memoized per (id, revision).
    pub fn decide(&mut self, record: &ContentRecord) -> RenderingDecision {
        let key = (record.id.clone(), record.revision);
        if let Some(decision) = self.cache.get(&key) {
            return decision.clone();
        }
        let decision = Self::decide_fresh(record, self.mode);
        self.cache.insert(key, decision.clone());
        decision
    }

    /// One uncached run of the full pipeline. Pure: same record in, same
    /// decision out.
    pub fn decide_fresh(record: &ContentRecord, mode: DecisionTraceMode) -> RenderingDecision {
        let mut trace = TraceBuilder::new(mode);
        let media = classify_media(record, &mut trace);
        let card = classify_card(record, &media, &mut trace);

        debug!(
            record_id = %record.id,
            revision = record.revision,
            card_type = ?card.card_type,
            supporting_count = media.supporting.len(),
            "rendering decision"
        );

        RenderingDecision {
            card_type: card.card_type,
            primary_media: media.primary,
            supporting_count: media.supporting.len(),
            should_show_title: card.should_show_title,
            resolved_title: card.resolved_title,
            trace: trace.finish(),
        }
    }

    /// Drop memoized decisions for a record, e.g. after it was deleted.
    pub fn forget(&mut self, record_id: &str) {
        self.cache.retain(|(id, _), _| id != record_id);
    }
}
