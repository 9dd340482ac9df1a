use pretty_assertions::assert_eq;
use shared_types::{
    CaseDetails, CaseField, CaseType, DashboardAction, IntakeErrorKind, IntakeStep,
};

use crate::common;

#[test]
fn test_open_enters_intake_step() {
    let mut state = common::dashboard();
    assert_eq!(state.intake().step(), IntakeStep::Closed);

    common::dispatch(&mut state, DashboardAction::OpenIntake);

    assert_eq!(state.intake().step(), IntakeStep::Intake);
    assert_eq!(state.intake().description(), "");
    assert!(state.intake().document().is_none());
}

#[test]
fn test_open_twice_is_rejected() {
    let mut state = common::dashboard();
    common::dispatch(&mut state, DashboardAction::OpenIntake);

    let err = state.dispatch(DashboardAction::OpenIntake).unwrap_err();

    assert_eq!(err.kind, IntakeErrorKind::InvalidTransition);
    assert_eq!(state.intake().step(), IntakeStep::Intake);
}

#[test]
fn test_back_returns_to_intake_and_keeps_inputs() {
    let mut state = common::dashboard();
    common::dispatch(&mut state, DashboardAction::OpenIntake);
    common::dispatch(
        &mut state,
        DashboardAction::EditDescription("Property dispute".into()),
    );
    common::dispatch(
        &mut state,
        DashboardAction::AttachFile(common::pdf("fir.pdf", 1024)),
    );
    let (ticket, _, _) =
        common::expect_summarize(common::dispatch(&mut state, DashboardAction::RunSummarizer));
    common::dispatch(
        &mut state,
        DashboardAction::SummaryReady {
            ticket,
            outcome: Ok(Default::default()),
        },
    );

    common::dispatch(&mut state, DashboardAction::Back);

    assert_eq!(state.intake().step(), IntakeStep::Intake);
    assert_eq!(state.intake().description(), "Property dispute");
    assert_eq!(state.intake().document().map(|d| d.name.as_str()), Some("fir.pdf"));
}

#[test]
fn test_close_from_details_discards_edits() {
    let mut state = common::dashboard();
    common::open_to_details(&mut state);
    common::dispatch(&mut state, DashboardAction::SetCaseType(CaseType::Family));
    common::dispatch(
        &mut state,
        DashboardAction::EditField(CaseField::Victim, "Someone else".into()),
    );

    common::dispatch(&mut state, DashboardAction::CloseIntake);
    assert_eq!(state.intake().step(), IntakeStep::Closed);

    common::dispatch(&mut state, DashboardAction::OpenIntake);
    assert_eq!(state.intake().details(), &CaseDetails::default());
}

#[test]
fn test_close_from_intake_discards_description() {
    let mut state = common::dashboard();
    common::dispatch(&mut state, DashboardAction::OpenIntake);
    common::dispatch(&mut state, DashboardAction::EditDescription("Draft".into()));

    common::dispatch(&mut state, DashboardAction::CloseIntake);
    common::dispatch(&mut state, DashboardAction::OpenIntake);

    assert_eq!(state.intake().description(), "");
}

#[test]
fn test_close_while_closed_is_harmless() {
    let mut state = common::dashboard();
    assert!(state.dispatch(DashboardAction::CloseIntake).is_ok());
    assert_eq!(state.intake().step(), IntakeStep::Closed);
}

#[test]
fn test_details_edits_only_apply_in_details_step() {
    let mut state = common::dashboard();
    common::dispatch(&mut state, DashboardAction::OpenIntake);

    let err = state
        .dispatch(DashboardAction::EditField(CaseField::Accused, "X".into()))
        .unwrap_err();
    assert_eq!(err.kind, IntakeErrorKind::InvalidTransition);

    let err = state.dispatch(DashboardAction::Save).unwrap_err();
    assert_eq!(err.kind, IntakeErrorKind::InvalidTransition);
}

#[test]
fn test_intake_edits_rejected_when_closed() {
    let mut state = common::dashboard();
    for action in [
        DashboardAction::EditDescription("x".into()),
        DashboardAction::DragEnter,
        DashboardAction::RunSummarizer,
        DashboardAction::Back,
    ] {
        let err = state.dispatch(action).unwrap_err();
        assert_eq!(err.kind, IntakeErrorKind::InvalidTransition);
    }
    assert_eq!(state.intake().step(), IntakeStep::Closed);
}

#[test]
fn test_drag_flag_follows_enter_leave_drop() {
    let mut state = common::dashboard();
    common::dispatch(&mut state, DashboardAction::OpenIntake);

    common::dispatch(&mut state, DashboardAction::DragEnter);
    assert!(state.intake().drag_active());
    common::dispatch(&mut state, DashboardAction::DragLeave);
    assert!(!state.intake().drag_active());

    common::dispatch(&mut state, DashboardAction::DragEnter);
    common::dispatch(
        &mut state,
        DashboardAction::DropFile(Some(common::pdf("charge-sheet.pdf", 4096))),
    );
    assert!(!state.intake().drag_active());
    assert_eq!(
        state.intake().document().map(|d| d.name.as_str()),
        Some("charge-sheet.pdf")
    );
    assert_eq!(state.intake().step(), IntakeStep::Intake);
}

#[test]
fn test_drop_without_files_just_clears_flag() {
    let mut state = common::dashboard();
    common::dispatch(&mut state, DashboardAction::OpenIntake);
    common::dispatch(&mut state, DashboardAction::DragEnter);

    common::dispatch(&mut state, DashboardAction::DropFile(None));

    assert!(!state.intake().drag_active());
    assert!(state.intake().document().is_none());
}

#[test]
fn test_case_type_edit_lands_in_draft() {
    let mut state = common::dashboard();
    common::open_to_details(&mut state);

    common::dispatch(&mut state, DashboardAction::SetCaseType(CaseType::Civil));
    common::dispatch(
        &mut state,
        DashboardAction::EditField(CaseField::DateOfIncident, "not a date".into()),
    );

    let details = state.intake().details();
    assert_eq!(details.case_type, CaseType::Civil);
    // Free text: no calendar validation.
    assert_eq!(details.date_of_incident, "not a date");
}
