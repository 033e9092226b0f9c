use serde::{Deserialize, Serialize};

/// Where a record came from. Display labeling only; the classifier ignores
/// this except for suppressing titles on note/idea records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum SourceType {
    #[default]
    Link,
    Note,
    Idea,
    AiDraft,
    Import,
    #[serde(other)]
    Unknown,
}

impl SourceType {
    /// Badge text shown on a rendered tile.
    pub fn label(self) -> &'static str {
        match self {
            SourceType::Link => "Link",
            SourceType::Note => "Note",
            SourceType::Idea => "Idea",
            SourceType::AiDraft => "AI draft",
            SourceType::Import => "Imported",
            SourceType::Unknown => "Saved",
        }
    }

    /// Note and idea tiles speak in their own body text; a title slot would
    /// duplicate the first line, so those kinds never surface one.
    pub fn suppresses_title(self) -> bool {
        matches!(self, SourceType::Note | SourceType::Idea)
    }
}
