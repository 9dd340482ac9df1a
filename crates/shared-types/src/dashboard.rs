use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::IntakeError;
use crate::intake::{FileRef, IntakeFlow, SummarizeTicket};
use crate::summarizer::{CaseFacts, SummaryInput};
use crate::workspace::{CaseField, CaseType, WorkspaceRecord};

// ── Presentation flags ──────────────────────────────────────────────

/// How the workspace collection is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

/// Cosmetic tab above the workspace list. Does not filter the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceTab {
    Contracts,
    #[default]
    Litigation,
}

pub const ALL_TABS: &[WorkspaceTab] = &[WorkspaceTab::Contracts, WorkspaceTab::Litigation];

impl WorkspaceTab {
    pub fn label(&self) -> &'static str {
        match self {
            WorkspaceTab::Contracts => "Contracts",
            WorkspaceTab::Litigation => "Litigation",
        }
    }
}

// ── Summary cards ───────────────────────────────────────────────────

/// Direction of a month-over-month change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
}

/// One summary card on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStat {
    pub title: &'static str,
    pub value: String,
    pub change: &'static str,
    pub trend: Trend,
}

/// Summary cards in display order. Only the workspace count is live.
pub fn dashboard_stats(workspace_count: usize) -> Vec<DashboardStat> {
    let stat = |title, value: String, change, trend| DashboardStat {
        title,
        value,
        change,
        trend,
    };
    vec![
        stat("Total Workspaces", workspace_count.to_string(), "+2% from last month", Trend::Positive),
        stat("Total Signed Contracts", "51".into(), "+12% from last month", Trend::Positive),
        stat("Contracts Drafted", "4".into(), "-4% from last month", Trend::Negative),
        stat("Contracts Reviewed", "18".into(), "+3% from last month", Trend::Positive),
        stat("Contracts Translated", "9".into(), "+5% from last month", Trend::Positive),
    ]
}

// ── Reducer ─────────────────────────────────────────────────────────

/// Every user gesture the dashboard reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    SetViewMode(ViewMode),
    SetTab(WorkspaceTab),
    OpenIntake,
    CloseIntake,
    EditDescription(String),
    DragEnter,
    DragLeave,
    DropFile(Option<FileRef>),
    AttachFile(FileRef),
    RemoveFile,
    RunSummarizer,
    SummaryReady {
        ticket: SummarizeTicket,
        outcome: Result<CaseFacts, IntakeError>,
    },
    SetCaseType(CaseType),
    EditField(CaseField, String),
    ToggleRepresenting(String),
    Back,
    Save,
}

/// Follow-up work the view layer must carry out after a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEffect {
    /// Wait `delay`, call the summarizer with `input`, then dispatch
    /// [`DashboardAction::SummaryReady`] with the same ticket.
    Summarize {
        ticket: SummarizeTicket,
        input: SummaryInput,
        delay: Duration,
    },
    /// A record was appended to the collection.
    WorkspaceAdded { id: Uuid, name: String },
}

/// Owned state of the dashboard page.
///
/// The collection is private: the only way to grow it is a successful
/// [`DashboardAction::Save`].
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    workspaces: Vec<WorkspaceRecord>,
    view_mode: ViewMode,
    active_tab: WorkspaceTab,
    intake: IntakeFlow,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl DashboardState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            workspaces: vec![WorkspaceRecord::seed()],
            view_mode: config.dashboard.default_view,
            active_tab: config.dashboard.default_tab,
            intake: IntakeFlow::new(config.intake.clone()),
        }
    }

    pub fn workspaces(&self) -> &[WorkspaceRecord] {
        &self.workspaces
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn active_tab(&self) -> WorkspaceTab {
        self.active_tab
    }

    pub fn intake(&self) -> &IntakeFlow {
        &self.intake
    }

    pub fn stats(&self) -> Vec<DashboardStat> {
        dashboard_stats(self.workspaces.len())
    }

    /// Apply one action. Errors leave the state consistent; the intake
    /// flow keeps validation/upload/summarizer errors for inline display.
    pub fn dispatch(
        &mut self,
        action: DashboardAction,
    ) -> Result<Option<DashboardEffect>, IntakeError> {
        let flow = &mut self.intake;
        match action {
            DashboardAction::SetViewMode(mode) => self.view_mode = mode,
            DashboardAction::SetTab(tab) => self.active_tab = tab,
            DashboardAction::OpenIntake => flow.open()?,
            DashboardAction::CloseIntake => {
                flow.close();
            }
            DashboardAction::EditDescription(text) => flow.set_description(text)?,
            DashboardAction::DragEnter => flow.drag_enter()?,
            DashboardAction::DragLeave => flow.drag_leave()?,
            DashboardAction::DropFile(file) => flow.drop_file(file)?,
            DashboardAction::AttachFile(file) => flow.attach_file(file)?,
            DashboardAction::RemoveFile => flow.remove_file()?,
            DashboardAction::RunSummarizer => {
                let delay = Duration::from_millis(flow.config().summarizer_delay_ms);
                return Ok(flow
                    .begin_summarize()?
                    .map(|(ticket, input)| DashboardEffect::Summarize {
                        ticket,
                        input,
                        delay,
                    }));
            }
            DashboardAction::SummaryReady { ticket, outcome } => {
                flow.complete_summarize(ticket, outcome)?;
            }
            DashboardAction::SetCaseType(case_type) => flow.set_case_type(case_type)?,
            DashboardAction::EditField(field, value) => flow.set_field(field, value)?,
            DashboardAction::ToggleRepresenting(party) => {
                flow.toggle_representing(&party)?;
            }
            DashboardAction::Back => flow.back()?,
            DashboardAction::Save => {
                let record = flow.save()?;
                let effect = DashboardEffect::WorkspaceAdded {
                    id: record.id,
                    name: record.name.clone(),
                };
                self.workspaces.push(record);
                return Ok(Some(effect));
            }
        }
        Ok(None)
    }
}
