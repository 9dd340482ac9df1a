//! Two-step case intake flow: raw material → case details → record.
//!
//! The flow is a plain owned value. The UI drives it through the methods
//! below and renders from its accessors; the only asynchronous part, the
//! summarizer call, is represented by a [`SummarizeTicket`] that the caller
//! hands back via [`IntakeFlow::complete_summarize`] once the deferred work
//! finishes.

use serde::{Deserialize, Serialize};

use crate::config::IntakeConfig;
use crate::error::IntakeError;
use crate::summarizer::{CaseFacts, SummaryInput};
use crate::workspace::{
    CaseDetails, CaseField, CaseType, WorkspaceRecord, WorkspaceRecordBuilder,
    REPRESENTING_CANDIDATES,
};

/// Which modal, if any, is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntakeStep {
    #[default]
    Closed,
    /// Step 1: upload a document or describe the case.
    Intake,
    /// Step 2: review and edit the structured case details.
    Details,
}

impl IntakeStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntakeStep::Closed => "closed",
            IntakeStep::Intake => "intake",
            IntakeStep::Details => "details",
        }
    }
}

/// Reference to a document picked or dropped in the intake step.
///
/// Only metadata is kept; the content is never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl FileRef {
    pub fn new(name: impl Into<String>, size: u64, content_type: Option<String>) -> Self {
        Self {
            name: name.into(),
            size,
            content_type,
        }
    }

    /// PDF by MIME type, or by extension when the browser gave no type.
    pub fn is_pdf(&self) -> bool {
        match self.content_type.as_deref() {
            Some(ct) if !ct.is_empty() => ct.eq_ignore_ascii_case("application/pdf"),
            _ => self.name.to_lowercase().ends_with(".pdf"),
        }
    }

    /// Human-readable size, e.g. "1.5 MB".
    pub fn display_size(&self) -> String {
        const KB: f64 = 1024.0;
        const MB: f64 = KB * 1024.0;
        let size = self.size as f64;
        if size >= MB {
            format!("{:.1} MB", size / MB)
        } else if size >= KB {
            format!("{:.1} KB", size / KB)
        } else {
            format!("{} B", self.size)
        }
    }
}

/// Check a document against the advertised "PDF, max N MB" constraint.
pub fn check_upload(file: &FileRef, max_bytes: u64) -> Result<(), IntakeError> {
    if !file.is_pdf() {
        return Err(IntakeError::upload(format!(
            "{} is not a PDF document.",
            file.name
        )));
    }
    if file.size > max_bytes {
        let max_mb = max_bytes / (1024 * 1024);
        return Err(IntakeError::upload(format!(
            "{} is {}; the limit is {} MB.",
            file.name,
            file.display_size(),
            max_mb
        )));
    }
    Ok(())
}

/// Identifies one summarizer run. Completions with a stale ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SummarizeTicket(u64);

impl SummarizeTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// State of the workspace-creation modals.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeFlow {
    config: IntakeConfig,
    step: IntakeStep,
    description: String,
    document: Option<FileRef>,
    drag_active: bool,
    details: CaseDetails,
    pending: Option<SummarizeTicket>,
    next_ticket: u64,
    error: Option<IntakeError>,
}

impl Default for IntakeFlow {
    fn default() -> Self {
        Self::new(IntakeConfig::default())
    }
}

impl IntakeFlow {
    pub fn new(config: IntakeConfig) -> Self {
        Self {
            config,
            step: IntakeStep::Closed,
            description: String::new(),
            document: None,
            drag_active: false,
            details: CaseDetails::default(),
            pending: None,
            next_ticket: 1,
            error: None,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn step(&self) -> IntakeStep {
        self.step
    }

    pub fn is_open(&self) -> bool {
        self.step != IntakeStep::Closed
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn document(&self) -> Option<&FileRef> {
        self.document.as_ref()
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn details(&self) -> &CaseDetails {
        &self.details
    }

    /// True while a summarizer run is in flight.
    pub fn is_summarizing(&self) -> bool {
        self.pending.is_some()
    }

    /// Inline error for the current step, if any.
    pub fn error(&self) -> Option<&IntakeError> {
        self.error.as_ref()
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    // ── Open / close ────────────────────────────────────────────────

    /// Show step 1 with a fresh draft.
    pub fn open(&mut self) -> Result<(), IntakeError> {
        if self.is_open() {
            return Err(IntakeError::invalid_transition(
                "The intake flow is already open.",
            ));
        }
        self.reset();
        self.step = IntakeStep::Intake;
        Ok(())
    }

    /// Close from any step, discarding the draft and any pending run.
    /// Returns whether the flow was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.reset();
        was_open
    }

    fn reset(&mut self) {
        self.step = IntakeStep::Closed;
        self.description.clear();
        self.document = None;
        self.drag_active = false;
        self.details = CaseDetails::default();
        self.pending = None;
        self.error = None;
    }

    fn require(&self, step: IntakeStep, action: &str) -> Result<(), IntakeError> {
        if self.step == step {
            Ok(())
        } else {
            Err(IntakeError::invalid_transition(format!(
                "Cannot {action} while the flow is {}.",
                self.step.as_str()
            )))
        }
    }

    // ── Step 1: intake ──────────────────────────────────────────────

    pub fn set_description(&mut self, text: impl Into<String>) -> Result<(), IntakeError> {
        self.require(IntakeStep::Intake, "edit the description")?;
        self.description = text.into();
        if self.error.as_ref().is_some_and(|e| e.is_for("description")) {
            self.error = None;
        }
        Ok(())
    }

    /// A drag entered or moved over the drop target.
    pub fn drag_enter(&mut self) -> Result<(), IntakeError> {
        self.require(IntakeStep::Intake, "accept a drag")?;
        self.drag_active = true;
        Ok(())
    }

    /// The drag left the drop target without dropping.
    pub fn drag_leave(&mut self) -> Result<(), IntakeError> {
        self.require(IntakeStep::Intake, "accept a drag")?;
        self.drag_active = false;
        Ok(())
    }

    /// Files were dropped; the first one (if any) is attached.
    pub fn drop_file(&mut self, first: Option<FileRef>) -> Result<(), IntakeError> {
        self.require(IntakeStep::Intake, "accept a drop")?;
        self.drag_active = false;
        match first {
            Some(file) => self.attach_file(file),
            None => Ok(()),
        }
    }

    /// Attach a document picked through the file browser or a drop.
    pub fn attach_file(&mut self, file: FileRef) -> Result<(), IntakeError> {
        self.require(IntakeStep::Intake, "attach a document")?;
        if let Err(e) = check_upload(&file, self.config.max_upload_bytes) {
            self.error = Some(e.clone());
            return Err(e);
        }
        self.document = Some(file);
        self.error = None;
        Ok(())
    }

    pub fn remove_file(&mut self) -> Result<(), IntakeError> {
        self.require(IntakeStep::Intake, "remove the document")?;
        self.document = None;
        Ok(())
    }

    /// Start a summarizer run.
    ///
    /// Returns `Ok(None)` while a run is already pending, so repeated
    /// clicks never schedule a second run.
    pub fn begin_summarize(
        &mut self,
    ) -> Result<Option<(SummarizeTicket, SummaryInput)>, IntakeError> {
        self.require(IntakeStep::Intake, "run the summarizer")?;
        if self.pending.is_some() {
            return Ok(None);
        }

        let input = SummaryInput::resolve(&self.description, self.document.as_ref());
        if self.config.require_input && input.is_empty() {
            let err = IntakeError::validation(
                "description",
                "Upload a document or describe the case first.",
            );
            self.error = Some(err.clone());
            return Err(err);
        }

        let ticket = SummarizeTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        self.error = None;
        Ok(Some((ticket, input)))
    }

    /// Deliver the outcome of a summarizer run.
    ///
    /// Returns `Ok(true)` when the flow advanced to the details step and
    /// `Ok(false)` when the ticket was stale (flow closed or restarted).
    /// A failed run keeps the flow on step 1 with the error shown inline.
    pub fn complete_summarize(
        &mut self,
        ticket: SummarizeTicket,
        outcome: Result<CaseFacts, IntakeError>,
    ) -> Result<bool, IntakeError> {
        if self.pending != Some(ticket) || self.step != IntakeStep::Intake {
            return Ok(false);
        }
        self.pending = None;

        match outcome {
            Ok(facts) => {
                facts.apply_to(&mut self.details);
                self.step = IntakeStep::Details;
                self.error = None;
                Ok(true)
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    // ── Step 2: details ─────────────────────────────────────────────

    /// Return to step 1, keeping the description and attached document.
    pub fn back(&mut self) -> Result<(), IntakeError> {
        self.require(IntakeStep::Details, "go back")?;
        self.step = IntakeStep::Intake;
        self.error = None;
        Ok(())
    }

    pub fn set_case_type(&mut self, case_type: CaseType) -> Result<(), IntakeError> {
        self.require(IntakeStep::Details, "edit case details")?;
        self.details.case_type = case_type;
        Ok(())
    }

    pub fn set_field(&mut self, field: CaseField, value: impl Into<String>) -> Result<(), IntakeError> {
        self.require(IntakeStep::Details, "edit case details")?;
        self.details.set_field(field, value.into());
        Ok(())
    }

    /// Flip a party in the representing selection. Returns whether it is
    /// selected afterwards.
    pub fn toggle_representing(&mut self, party: &str) -> Result<bool, IntakeError> {
        self.require(IntakeStep::Details, "edit case details")?;
        if !REPRESENTING_CANDIDATES.contains(&party) {
            return Err(IntakeError::validation(
                "representing",
                format!("{party} is not a party to this case."),
            ));
        }
        let selected = self.details.representing.toggle(party);
        if !self.details.representing.is_empty()
            && self.error.as_ref().is_some_and(|e| e.is_for("representing"))
        {
            self.error = None;
        }
        Ok(selected)
    }

    /// Commit the draft. On success the flow closes and the new record is
    /// returned; on a validation failure the flow stays on step 2.
    pub fn save(&mut self) -> Result<WorkspaceRecord, IntakeError> {
        self.require(IntakeStep::Details, "save")?;
        match WorkspaceRecordBuilder::new(self.details.clone()).build() {
            Ok(record) => {
                self.reset();
                Ok(record)
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }
}
