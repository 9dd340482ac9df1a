use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::IntakeError;
use crate::intake::FileRef;
use crate::workspace::CaseDetails;

/// Raw case material handed to the summarizer.
///
/// A non-blank description takes precedence over an attached document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryInput {
    Text(String),
    Document(FileRef),
    Empty,
}

impl SummaryInput {
    /// Pick the authoritative input from what the intake step collected.
    pub fn resolve(description: &str, document: Option<&FileRef>) -> Self {
        let text = description.trim();
        if !text.is_empty() {
            SummaryInput::Text(text.to_string())
        } else if let Some(file) = document {
            SummaryInput::Document(file.clone())
        } else {
            SummaryInput::Empty
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SummaryInput::Empty)
    }
}

/// Structured facts a summarizer extracts from case material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseFacts {
    pub complainant: String,
    pub accused: String,
    pub victim: String,
    pub allegations: String,
    pub facts_summary: String,
    pub date_of_incident: String,
}

impl Default for CaseFacts {
    fn default() -> Self {
        let d = CaseDetails::default();
        Self {
            complainant: d.complainant,
            accused: d.accused,
            victim: d.victim,
            allegations: d.allegations,
            facts_summary: d.facts_summary,
            date_of_incident: d.date_of_incident,
        }
    }
}

impl CaseFacts {
    /// Overwrite the fact fields of a draft. Case type and the
    /// representing selection belong to the user and are left alone.
    pub fn apply_to(self, details: &mut CaseDetails) {
        details.complainant = self.complainant;
        details.accused = self.accused;
        details.victim = self.victim;
        details.allegations = self.allegations;
        details.facts_summary = self.facts_summary;
        details.date_of_incident = self.date_of_incident;
    }
}

/// External document/text summarization service.
pub trait Summarizer {
    fn summarize(
        &self,
        input: SummaryInput,
    ) -> impl Future<Output = Result<CaseFacts, IntakeError>>;
}

/// Stand-in summarizer: ignores its input and returns the placeholder facts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaceholderSummarizer;

impl Summarizer for PlaceholderSummarizer {
    fn summarize(
        &self,
        _input: SummaryInput,
    ) -> impl Future<Output = Result<CaseFacts, IntakeError>> {
        std::future::ready(Ok(CaseFacts::default()))
    }
}
