use std::time::Duration;

use pretty_assertions::assert_eq;
use shared_types::{
    CaseFacts, DashboardAction, IntakeError, IntakeErrorKind, IntakeStep, SummaryInput,
};
use tokio::time::{timeout, Instant};

use crate::common;

#[tokio::test(start_paused = true)]
async fn test_completion_arrives_only_after_delay() {
    let mut state = common::dashboard();
    common::dispatch(&mut state, DashboardAction::OpenIntake);
    let (ticket, input, delay) =
        common::expect_summarize(common::dispatch(&mut state, DashboardAction::RunSummarizer));

    let early = timeout(
        delay - Duration::from_millis(1),
        common::summarize_after_delay(ticket, input.clone(), delay),
    )
    .await;
    assert!(early.is_err(), "summarizer finished before the delay");

    let start = Instant::now();
    let ready = common::summarize_after_delay(ticket, input, delay).await;
    assert!(start.elapsed() >= delay);
    common::dispatch(&mut state, ready);
    assert_eq!(state.intake().step(), IntakeStep::Details);
}

#[test]
fn test_repeat_trigger_while_pending_is_ignored() {
    let mut state = common::dashboard();
    common::dispatch(&mut state, DashboardAction::OpenIntake);
    let (ticket, _, _) =
        common::expect_summarize(common::dispatch(&mut state, DashboardAction::RunSummarizer));
    assert!(state.intake().is_summarizing());

    for _ in 0..3 {
        let effect = common::dispatch(&mut state, DashboardAction::RunSummarizer);
        assert!(effect.is_none());
    }

    common::dispatch(
        &mut state,
        DashboardAction::SummaryReady {
            ticket,
            outcome: Ok(CaseFacts::default()),
        },
    );
    assert_eq!(state.intake().step(), IntakeStep::Details);
    assert!(!state.intake().is_summarizing());
}

#[tokio::test(start_paused = true)]
async fn test_completion_after_close_is_dropped() {
    let mut state = common::dashboard();
    common::dispatch(&mut state, DashboardAction::OpenIntake);
    let (ticket, input, delay) =
        common::expect_summarize(common::dispatch(&mut state, DashboardAction::RunSummarizer));

    common::dispatch(&mut state, DashboardAction::CloseIntake);
    let ready = common::summarize_after_delay(ticket, input, delay).await;
    common::dispatch(&mut state, ready);

    assert_eq!(state.intake().step(), IntakeStep::Closed);
}

#[tokio::test(start_paused = true)]
async fn test_stale_ticket_cannot_advance_reopened_flow() {
    let mut state = common::dashboard();
    common::dispatch(&mut state, DashboardAction::OpenIntake);
    let (old_ticket, old_input, delay) =
        common::expect_summarize(common::dispatch(&mut state, DashboardAction::RunSummarizer));
    common::dispatch(&mut state, DashboardAction::CloseIntake);

    common::dispatch(&mut state, DashboardAction::OpenIntake);
    let (new_ticket, new_input, _) =
        common::expect_summarize(common::dispatch(&mut state, DashboardAction::RunSummarizer));
    assert_ne!(old_ticket, new_ticket);

    let stale = common::summarize_after_delay(old_ticket, old_input, delay).await;
    common::dispatch(&mut state, stale);
    assert_eq!(state.intake().step(), IntakeStep::Intake);
    assert!(state.intake().is_summarizing());

    let fresh = common::summarize_after_delay(new_ticket, new_input, delay).await;
    common::dispatch(&mut state, fresh);
    assert_eq!(state.intake().step(), IntakeStep::Details);
}

#[test]
fn test_failed_summary_stays_on_intake() {
    let mut state = common::dashboard();
    common::dispatch(&mut state, DashboardAction::OpenIntake);
    common::dispatch(&mut state, DashboardAction::EditDescription("Theft case".into()));
    let (ticket, _, _) =
        common::expect_summarize(common::dispatch(&mut state, DashboardAction::RunSummarizer));

    let err = state
        .dispatch(DashboardAction::SummaryReady {
            ticket,
            outcome: Err(IntakeError::summarization("service unavailable")),
        })
        .unwrap_err();

    assert_eq!(err.kind, IntakeErrorKind::Summarization);
    assert_eq!(state.intake().step(), IntakeStep::Intake);
    assert_eq!(state.intake().description(), "Theft case");
    assert!(!state.intake().is_summarizing());

    // A retry is allowed and clears the message.
    let effect = common::dispatch(&mut state, DashboardAction::RunSummarizer);
    assert!(effect.is_some());
    assert!(state.intake().error().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_delay_comes_from_config() {
    let mut state = common::dashboard_from_toml("[intake]\nsummarizer_delay_ms = 250\n");
    common::dispatch(&mut state, DashboardAction::OpenIntake);
    let (ticket, input, delay) =
        common::expect_summarize(common::dispatch(&mut state, DashboardAction::RunSummarizer));
    assert_eq!(delay, Duration::from_millis(250));
    assert_eq!(input, SummaryInput::Empty);

    let start = Instant::now();
    let ready = common::summarize_after_delay(ticket, input, delay).await;
    assert!(start.elapsed() >= Duration::from_millis(250));
    assert!(start.elapsed() < Duration::from_millis(1000));
    common::dispatch(&mut state, ready);
    assert_eq!(state.intake().step(), IntakeStep::Details);
}
