use shared_types::{DashboardAction, FileRef, IntakeErrorKind, DEFAULT_MAX_UPLOAD_BYTES};

use crate::common;

#[test]
fn test_pdf_within_limit_is_attached() {
    let mut state = common::dashboard();
    common::dispatch(&mut state, DashboardAction::OpenIntake);

    common::dispatch(
        &mut state,
        DashboardAction::AttachFile(common::pdf("brief.pdf", DEFAULT_MAX_UPLOAD_BYTES)),
    );

    assert!(state.intake().document().is_some());
    assert!(state.intake().error().is_none());
}

#[test]
fn test_oversized_pdf_is_rejected_inline() {
    let mut state = common::dashboard();
    common::dispatch(&mut state, DashboardAction::OpenIntake);

    let err = state
        .dispatch(DashboardAction::AttachFile(common::pdf(
            "huge.pdf",
            DEFAULT_MAX_UPLOAD_BYTES + 1,
        )))
        .unwrap_err();

    assert_eq!(err.kind, IntakeErrorKind::Upload);
    assert!(state.intake().document().is_none());
    assert_eq!(state.intake().error(), Some(&err));
}

#[test]
fn test_non_pdf_drop_is_rejected() {
    let mut state = common::dashboard();
    common::dispatch(&mut state, DashboardAction::OpenIntake);
    common::dispatch(&mut state, DashboardAction::DragEnter);

    let photo = FileRef::new("scene.jpg", 2048, Some("image/jpeg".to_string()));
    let err = state
        .dispatch(DashboardAction::DropFile(Some(photo)))
        .unwrap_err();

    assert_eq!(err.kind, IntakeErrorKind::Upload);
    assert!(!state.intake().drag_active(), "drop clears the flag even when rejected");
    assert!(state.intake().document().is_none());
}

#[test]
fn test_pdf_extension_accepted_without_mime() {
    let mut state = common::dashboard();
    common::dispatch(&mut state, DashboardAction::OpenIntake);

    common::dispatch(
        &mut state,
        DashboardAction::AttachFile(FileRef::new("Judgment.PDF", 10, None)),
    );

    assert!(state.intake().document().is_some());
}

#[test]
fn test_valid_upload_clears_previous_rejection() {
    let mut state = common::dashboard();
    common::dispatch(&mut state, DashboardAction::OpenIntake);
    let _ = state.dispatch(DashboardAction::AttachFile(FileRef::new(
        "notes.txt",
        10,
        Some("text/plain".to_string()),
    )));
    assert!(state.intake().error().is_some());

    common::dispatch(
        &mut state,
        DashboardAction::AttachFile(common::pdf("notes.pdf", 10)),
    );

    assert!(state.intake().error().is_none());
}

#[test]
fn test_remove_file_detaches_document() {
    let mut state = common::dashboard();
    common::dispatch(&mut state, DashboardAction::OpenIntake);
    common::dispatch(
        &mut state,
        DashboardAction::AttachFile(common::pdf("fir.pdf", 10)),
    );

    common::dispatch(&mut state, DashboardAction::RemoveFile);

    assert!(state.intake().document().is_none());
}
