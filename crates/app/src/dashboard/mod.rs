use dioxus::prelude::*;
use shared_types::{
    DashboardAction, DashboardEffect, DashboardState, PlaceholderSummarizer, ALL_TABS,
};
use shared_ui::{use_toast, PageHeader, PageTitle, ToastOptions, Toasts};

use crate::summary_task::run_summarizer;

mod details_dialog;
mod intake_dialog;
mod stat_cards;
mod workspace_list;

use details_dialog::DetailsDialog;
use intake_dialog::IntakeDialog;
use stat_cards::StatCards;
pub use workspace_list::WorkspaceList;

/// Handle to the dashboard state, shared with the dialogs via context.
///
/// All mutation goes through [`dispatch`](Self::dispatch); components only
/// read the signal.
#[derive(Clone, Copy)]
pub struct DashboardHandle {
    pub state: Signal<DashboardState>,
    toast: Toasts,
}

impl DashboardHandle {
    pub fn dispatch(mut self, action: DashboardAction) {
        let name = action_name(&action);
        let result = self.state.write().dispatch(action);
        match result {
            Ok(effect) => {
                match name {
                    "open_intake" => tracing::info!("intake flow opened"),
                    "close_intake" => tracing::info!("intake flow closed"),
                    _ => {}
                }
                if let Some(effect) = effect {
                    self.run_effect(effect);
                }
            }
            // The flow keeps the error for inline display; nothing else to do.
            Err(err) => tracing::debug!(
                action = name,
                kind = %err.kind,
                field = err.field.as_deref().unwrap_or(""),
                error = %err.message,
                "action rejected"
            ),
        }
    }

    fn run_effect(self, effect: DashboardEffect) {
        match effect {
            DashboardEffect::Summarize {
                ticket,
                input,
                delay,
            } => {
                tracing::info!(
                    ticket = ticket.value(),
                    delay_ms = delay.as_millis() as u64,
                    empty_input = input.is_empty(),
                    "summarizer started"
                );
                spawn(async move {
                    let outcome = run_summarizer(&PlaceholderSummarizer, input, delay).await;
                    tracing::info!(
                        ticket = ticket.value(),
                        ok = outcome.is_ok(),
                        "summarizer finished"
                    );
                    self.dispatch(DashboardAction::SummaryReady { ticket, outcome });
                });
            }
            DashboardEffect::WorkspaceAdded { id, name } => {
                tracing::info!(%id, %name, "workspace committed");
                self.toast
                    .success(format!("Workspace \"{name}\" created"), ToastOptions::new());
            }
        }
    }
}

fn action_name(action: &DashboardAction) -> &'static str {
    match action {
        DashboardAction::SetViewMode(_) => "set_view_mode",
        DashboardAction::SetTab(_) => "set_tab",
        DashboardAction::OpenIntake => "open_intake",
        DashboardAction::CloseIntake => "close_intake",
        DashboardAction::EditDescription(_) => "edit_description",
        DashboardAction::DragEnter => "drag_enter",
        DashboardAction::DragLeave => "drag_leave",
        DashboardAction::DropFile(_) => "drop_file",
        DashboardAction::AttachFile(_) => "attach_file",
        DashboardAction::RemoveFile => "remove_file",
        DashboardAction::RunSummarizer => "run_summarizer",
        DashboardAction::SummaryReady { .. } => "summary_ready",
        DashboardAction::SetCaseType(_) => "set_case_type",
        DashboardAction::EditField(..) => "edit_field",
        DashboardAction::ToggleRepresenting(_) => "toggle_representing",
        DashboardAction::Back => "back",
        DashboardAction::Save => "save",
    }
}

/// Dashboard page: summary cards, the workspace list and the two-step
/// create-workspace dialogs.
#[component]
pub fn DashboardPage() -> Element {
    let config = crate::config::load_config();
    let state = use_signal(|| DashboardState::new(config));
    let toast = use_toast();
    let dashboard = use_context_provider(|| DashboardHandle { state, toast });

    let (stats, workspaces, view_mode, active_tab) = {
        let s = state.read();
        (
            s.stats(),
            s.workspaces().to_vec(),
            s.view_mode(),
            s.active_tab(),
        )
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "Dashboard Overview" }
            }

            StatCards { stats }

            section { class: "workspaces-panel",
                div { class: "workspaces-panel-header",
                    h2 { class: "workspaces-panel-title", "Workspaces" }
                    div { class: "workspace-tabs", role: "tablist",
                        for tab in ALL_TABS.iter().copied() {
                            button {
                                key: "{tab.label()}",
                                class: "workspace-tab",
                                r#type: "button",
                                role: "tab",
                                "aria-selected": if tab == active_tab { "true" } else { "false" },
                                onclick: move |_| dashboard.dispatch(DashboardAction::SetTab(tab)),
                                "{tab.label()}"
                            }
                        }
                    }
                }

                WorkspaceList {
                    workspaces,
                    view_mode,
                    on_view_mode_change: move |mode| dashboard.dispatch(DashboardAction::SetViewMode(mode)),
                    on_create: move |_| dashboard.dispatch(DashboardAction::OpenIntake),
                }
            }
        }

        IntakeDialog {}
        DetailsDialog {}
    }
}
