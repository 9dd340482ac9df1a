use pretty_assertions::assert_eq;
use shared_types::{
    AppConfig, DashboardAction, IntakeErrorKind, IntakeStep, ViewMode, WorkspaceTab,
};

use crate::common;

#[test]
fn test_require_input_blocks_empty_run() {
    let mut state = common::dashboard_from_toml("[intake]\nrequire_input = true\n");
    common::dispatch(&mut state, DashboardAction::OpenIntake);

    let err = state.dispatch(DashboardAction::RunSummarizer).unwrap_err();

    assert_eq!(err.kind, IntakeErrorKind::Validation);
    assert!(err.is_for("description"));
    assert!(!state.intake().is_summarizing());
}

#[test]
fn test_require_input_rejects_blank_text() {
    let mut state = common::dashboard_from_toml("[intake]\nrequire_input = true\n");
    common::dispatch(&mut state, DashboardAction::OpenIntake);
    common::dispatch(&mut state, DashboardAction::EditDescription("   ".into()));
    assert!(state.dispatch(DashboardAction::RunSummarizer).is_err());

    common::dispatch(&mut state, DashboardAction::EditDescription("Assault".into()));
    assert!(
        state.intake().error().is_none(),
        "editing the description clears its error"
    );
    assert!(common::dispatch(&mut state, DashboardAction::RunSummarizer).is_some());
}

#[test]
fn test_require_input_accepts_document_alone() {
    let mut state = common::dashboard_from_toml("[intake]\nrequire_input = true\n");
    common::dispatch(&mut state, DashboardAction::OpenIntake);
    common::dispatch(
        &mut state,
        DashboardAction::AttachFile(common::pdf("fir.pdf", 100)),
    );

    assert!(common::dispatch(&mut state, DashboardAction::RunSummarizer).is_some());
}

#[test]
fn test_dashboard_section_sets_initial_view() {
    let state = common::dashboard_from_toml(
        "[dashboard]\ndefault_view = \"list\"\ndefault_tab = \"contracts\"\n",
    );

    assert_eq!(state.view_mode(), ViewMode::List);
    assert_eq!(state.active_tab(), WorkspaceTab::Contracts);
    assert_eq!(state.intake().step(), IntakeStep::Closed);
}

#[test]
fn test_broken_config_falls_back_to_defaults() {
    let (config, error) = AppConfig::from_toml_or_default("[intake\nsummarizer_delay_ms = ");

    assert!(error.is_some());
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_unknown_view_is_an_error() {
    assert!(AppConfig::from_toml_str("[dashboard]\ndefault_view = \"kanban\"\n").is_err());
}
