use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::IntakeError;

// ── Constants ───────────────────────────────────────────────────────

/// Parties that can be selected in the "representing" multi-select.
pub const REPRESENTING_CANDIDATES: &[&str] = &["Neha Kumari", "Ajay Kumar", "Raj Rani"];

/// Party pre-selected when a new draft is opened.
pub const DEFAULT_REPRESENTING: &str = "Neha Kumari";

pub const AVATAR_PRIMARY: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&auto=format&fit=facepad&facepad=2&w=256&h=256&q=80";
pub const AVATAR_SECONDARY: &str = "https://images.unsplash.com/photo-1494790108755-2616b612b5e5?ixlib=rb-1.2.1&auto=format&fit=facepad&facepad=2&w=256&h=256&q=80";

const TEMPLATE_NAME: &str = "Johnson & Partners Merger";
const TEMPLATE_CLIENT: &str = "Johnson & Partners LLP";
const TEMPLATE_OPPONENT: &str = "Chen Singh";
const TEMPLATE_AREA_OF_LAW: &str = "Abetment";
const TEMPLATE_TIMELINE: &str = "First hearing done";

// ── Enumerations ────────────────────────────────────────────────────

/// Legal category of a case.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CaseType {
    #[default]
    Criminal,
    Civil,
    Family,
}

/// All case types in display order.
pub const ALL_CASE_TYPES: &[CaseType] = &[CaseType::Criminal, CaseType::Civil, CaseType::Family];

impl CaseType {
    /// Display label, also used as the `<select>` option value.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseType::Criminal => "Criminal",
            CaseType::Civil => "Civil",
            CaseType::Family => "Family",
        }
    }

    /// Parse a case type, defaulting to Criminal for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "civil" => CaseType::Civil,
            "family" => CaseType::Family,
            _ => CaseType::Criminal,
        }
    }
}

/// Lifecycle status shown on a workspace card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WorkspaceStatus {
    #[default]
    Draft,
    Current,
    Review,
}

impl WorkspaceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkspaceStatus::Draft => "Draft",
            WorkspaceStatus::Current => "Current",
            WorkspaceStatus::Review => "Review",
        }
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, WorkspaceStatus::Draft)
    }
}

// ── Representing set ────────────────────────────────────────────────

/// Ordered, duplicate-free selection of represented parties.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepresentingSet(Vec<String>);

impl RepresentingSet {
    pub fn single(party: impl Into<String>) -> Self {
        Self(vec![party.into()])
    }

    /// Flip membership of `party`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, party: &str) -> bool {
        if let Some(pos) = self.0.iter().position(|p| p == party) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(party.to_string());
            true
        }
    }

    pub fn contains(&self, party: &str) -> bool {
        self.0.iter().any(|p| p == party)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Comma-separated list for compact display.
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

// ── Case details ────────────────────────────────────────────────────

/// Structured case facts collected in the details step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDetails {
    pub case_type: CaseType,
    pub complainant: String,
    pub accused: String,
    pub victim: String,
    pub allegations: String,
    pub facts_summary: String,
    /// Free text as typed; no calendar validation.
    pub date_of_incident: String,
    pub representing: RepresentingSet,
}

impl Default for CaseDetails {
    fn default() -> Self {
        Self {
            case_type: CaseType::Criminal,
            complainant: "Seema Ratna, Mukesh Kumar".to_string(),
            accused: "Ajay Kumar, Raj Rani".to_string(),
            victim: "Neha Kumari".to_string(),
            allegations: "Dowry harassment, domestic violence, and abetment to suicide (304B, 498A, OP ACT)".to_string(),
            facts_summary: "Neha Kumari found hanging from ceiling fan, with evidence suggesting possible foul play amid dowry harassment allegations".to_string(),
            date_of_incident: "18.10.2022".to_string(),
            representing: RepresentingSet::single(DEFAULT_REPRESENTING),
        }
    }
}

/// Free-text fields of the details form, addressable by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseField {
    Complainant,
    Accused,
    Victim,
    Allegations,
    FactsSummary,
    DateOfIncident,
}

impl CaseField {
    pub fn label(&self) -> &'static str {
        match self {
            CaseField::Complainant => "Complainant",
            CaseField::Accused => "Accused",
            CaseField::Victim => "Victim",
            CaseField::Allegations => "Allegations",
            CaseField::FactsSummary => "Facts Summary",
            CaseField::DateOfIncident => "Date of Incident",
        }
    }
}

impl CaseDetails {
    pub fn field(&self, field: CaseField) -> &str {
        match field {
            CaseField::Complainant => &self.complainant,
            CaseField::Accused => &self.accused,
            CaseField::Victim => &self.victim,
            CaseField::Allegations => &self.allegations,
            CaseField::FactsSummary => &self.facts_summary,
            CaseField::DateOfIncident => &self.date_of_incident,
        }
    }

    pub fn set_field(&mut self, field: CaseField, value: String) {
        let slot = match field {
            CaseField::Complainant => &mut self.complainant,
            CaseField::Accused => &mut self.accused,
            CaseField::Victim => &mut self.victim,
            CaseField::Allegations => &mut self.allegations,
            CaseField::FactsSummary => &mut self.facts_summary,
            CaseField::DateOfIncident => &mut self.date_of_incident,
        };
        *slot = value;
    }
}

// ── Workspace record ────────────────────────────────────────────────

/// One managed case/workspace, immutable once added to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRecord {
    pub id: Uuid,
    pub name: String,
    pub client: String,
    pub opponent: String,
    pub case_type: CaseType,
    pub area_of_law: String,
    pub timeline: String,
    pub status: WorkspaceStatus,
    pub avatars: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Present on records created through the intake flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<CaseDetails>,
}

impl WorkspaceRecord {
    /// The example record the dashboard starts with.
    pub fn seed() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: TEMPLATE_NAME.to_string(),
            client: TEMPLATE_CLIENT.to_string(),
            opponent: TEMPLATE_OPPONENT.to_string(),
            case_type: CaseType::Criminal,
            area_of_law: TEMPLATE_AREA_OF_LAW.to_string(),
            timeline: TEMPLATE_TIMELINE.to_string(),
            status: WorkspaceStatus::Current,
            avatars: vec![AVATAR_PRIMARY.to_string()],
            created_at: Utc::now(),
            details: None,
        }
    }

    pub fn representing(&self) -> Option<&RepresentingSet> {
        self.details.as_ref().map(|d| &d.representing)
    }
}

/// Builds a [`WorkspaceRecord`] from a finished draft.
///
/// Display fields start from the intake template and can be overridden;
/// identity and timestamp are generated in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct WorkspaceRecordBuilder {
    details: CaseDetails,
    name: String,
    client: String,
    opponent: String,
    area_of_law: String,
    timeline: String,
    status: WorkspaceStatus,
    avatars: Vec<String>,
}

impl WorkspaceRecordBuilder {
    pub fn new(details: CaseDetails) -> Self {
        Self {
            details,
            name: TEMPLATE_NAME.to_string(),
            client: TEMPLATE_CLIENT.to_string(),
            opponent: TEMPLATE_OPPONENT.to_string(),
            area_of_law: TEMPLATE_AREA_OF_LAW.to_string(),
            timeline: TEMPLATE_TIMELINE.to_string(),
            status: WorkspaceStatus::Draft,
            avatars: vec![AVATAR_PRIMARY.to_string(), AVATAR_SECONDARY.to_string()],
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn client(mut self, client: impl Into<String>) -> Self {
        self.client = client.into();
        self
    }

    pub fn opponent(mut self, opponent: impl Into<String>) -> Self {
        self.opponent = opponent.into();
        self
    }

    pub fn status(mut self, status: WorkspaceStatus) -> Self {
        self.status = status;
        self
    }

    /// Validate the draft and produce the record.
    ///
    /// Fails with a validation error when no represented party is selected.
    pub fn build(self) -> Result<WorkspaceRecord, IntakeError> {
        if self.details.representing.is_empty() {
            return Err(IntakeError::validation(
                "representing",
                "Select at least one party you are representing.",
            ));
        }

        Ok(WorkspaceRecord {
            id: Uuid::new_v4(),
            name: self.name,
            client: self.client,
            opponent: self.opponent,
            case_type: self.details.case_type,
            area_of_law: self.area_of_law,
            timeline: self.timeline,
            status: self.status,
            avatars: self.avatars,
            created_at: Utc::now(),
            details: Some(self.details),
        })
    }
}
