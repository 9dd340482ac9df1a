use std::time::Duration;

use shared_types::{
    AppConfig, DashboardAction, DashboardEffect, DashboardState, FileRef, IntakeStep,
    PlaceholderSummarizer, SummarizeTicket, Summarizer, SummaryInput,
};

/// Dashboard with the shipped defaults: one seed record, grid view.
pub fn dashboard() -> DashboardState {
    DashboardState::default()
}

/// Dashboard built from a TOML snippet, e.g. to turn on `require_input`.
pub fn dashboard_from_toml(toml: &str) -> DashboardState {
    let config = AppConfig::from_toml_str(toml).expect("test config should parse");
    DashboardState::new(&config)
}

pub fn dispatch(state: &mut DashboardState, action: DashboardAction) -> Option<DashboardEffect> {
    state
        .dispatch(action)
        .unwrap_or_else(|e| panic!("dispatch failed: {e}"))
}

/// Unpack the effect returned by `RunSummarizer`.
pub fn expect_summarize(
    effect: Option<DashboardEffect>,
) -> (SummarizeTicket, SummaryInput, Duration) {
    match effect {
        Some(DashboardEffect::Summarize {
            ticket,
            input,
            delay,
        }) => (ticket, input, delay),
        other => panic!("expected a summarize effect, got {other:?}"),
    }
}

/// What the app's summarizer task does: sleep, summarize, report back.
pub async fn summarize_after_delay(
    ticket: SummarizeTicket,
    input: SummaryInput,
    delay: Duration,
) -> DashboardAction {
    tokio::time::sleep(delay).await;
    let outcome = PlaceholderSummarizer.summarize(input).await;
    DashboardAction::SummaryReady { ticket, outcome }
}

/// Open the flow and complete a summarizer run without waiting.
pub fn open_to_details(state: &mut DashboardState) {
    dispatch(state, DashboardAction::OpenIntake);
    let (ticket, _, _) = expect_summarize(dispatch(state, DashboardAction::RunSummarizer));
    dispatch(
        state,
        DashboardAction::SummaryReady {
            ticket,
            outcome: Ok(Default::default()),
        },
    );
    assert_eq!(state.intake().step(), IntakeStep::Details);
}

pub fn pdf(name: &str, size: u64) -> FileRef {
    FileRef::new(name, size, Some("application/pdf".to_string()))
}
