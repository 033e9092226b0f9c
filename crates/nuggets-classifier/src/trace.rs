use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;

/// Whether `decide` captures a structured trace of its branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecisionTraceMode {
    #[default]
    Off,
    Capture,
}

impl DecisionTraceMode {
    /// Parse a trace mode string (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "off" | "0" | "false" => Some(Self::Off),
            "capture" | "on" | "1" | "true" => Some(Self::Capture),
            _ => None,
        }
    }

    /// Reads the trace mode from `NUGGETS_DECISION_TRACE`.
    pub fn from_env() -> Self {
        env::var("NUGGETS_DECISION_TRACE")
            .ok()
            .and_then(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

/// One recorded branch of the decision procedure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Ordered record of which branches fired while deciding one record.
/// Inspected by tests and telemetry only; nothing reads it back into
/// control flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionTrace {
    pub steps: Vec<TraceStep>,
}

/// Accumulator handed down through the classification stages. In `Off` mode
/// every push is a no-op so the hot path stays allocation-free.
#[derive(Debug)]
pub struct TraceBuilder {
    mode: DecisionTraceMode,
    steps: Vec<TraceStep>,
}

impl TraceBuilder {
    pub fn new(mode: DecisionTraceMode) -> Self {
        Self {
            mode,
            steps: Vec::new(),
        }
    }

    pub fn push(&mut self, code: &str, message: impl Into<String>) {
        if self.mode == DecisionTraceMode::Capture {
            self.steps.push(TraceStep {
                code: code.to_string(),
                message: Some(message.into()),
                data: None,
            });
        }
    }

    pub fn push_with(&mut self, code: &str, message: impl Into<String>, data: Value) {
        if self.mode == DecisionTraceMode::Capture {
            self.steps.push(TraceStep {
                code: code.to_string(),
                message: Some(message.into()),
                data: Some(data),
            });
        }
    }

    pub fn finish(self) -> Option<DecisionTrace> {
        match self.mode {
            DecisionTraceMode::Off => None,
            DecisionTraceMode::Capture => Some(DecisionTrace { steps: self.steps }),
        }
    }
}
