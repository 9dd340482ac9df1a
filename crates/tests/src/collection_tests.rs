use std::collections::HashSet;

use pretty_assertions::assert_eq;
use shared_types::{
    CaseField, CaseType, DashboardAction, DashboardEffect, IntakeStep, WorkspaceStatus,
    AVATAR_PRIMARY, AVATAR_SECONDARY,
};

use crate::common;

#[test]
fn test_starts_with_seed_record() {
    let state = common::dashboard();
    let seed = &state.workspaces()[0];

    assert_eq!(state.workspaces().len(), 1);
    assert_eq!(seed.name, "Johnson & Partners Merger");
    assert_eq!(seed.status, WorkspaceStatus::Current);
    assert_eq!(seed.avatars, vec![AVATAR_PRIMARY.to_string()]);
    assert!(seed.details.is_none());
}

#[test]
fn test_each_save_appends_exactly_one() {
    let mut state = common::dashboard();

    for expected in 2..=4 {
        common::open_to_details(&mut state);
        let effect = common::dispatch(&mut state, DashboardAction::Save);
        assert!(matches!(effect, Some(DashboardEffect::WorkspaceAdded { .. })));
        assert_eq!(state.workspaces().len(), expected);
        assert_eq!(state.intake().step(), IntakeStep::Closed);
    }
}

#[test]
fn test_cancel_never_changes_collection() {
    let mut state = common::dashboard();
    let before = state.workspaces().to_vec();

    common::dispatch(&mut state, DashboardAction::OpenIntake);
    common::dispatch(&mut state, DashboardAction::CloseIntake);
    common::open_to_details(&mut state);
    common::dispatch(&mut state, DashboardAction::CloseIntake);

    assert_eq!(state.workspaces(), before.as_slice());
}

#[test]
fn test_committed_record_uses_template_and_draft() {
    let mut state = common::dashboard();
    common::open_to_details(&mut state);
    common::dispatch(&mut state, DashboardAction::SetCaseType(CaseType::Family));
    common::dispatch(
        &mut state,
        DashboardAction::EditField(CaseField::Complainant, "Asha Devi".into()),
    );
    common::dispatch(&mut state, DashboardAction::Save);

    let record = state.workspaces().last().unwrap();
    assert_eq!(record.name, "Johnson & Partners Merger");
    assert_eq!(record.client, "Johnson & Partners LLP");
    assert_eq!(record.opponent, "Chen Singh");
    assert_eq!(record.area_of_law, "Abetment");
    assert_eq!(record.timeline, "First hearing done");
    assert_eq!(record.status, WorkspaceStatus::Draft);
    assert_eq!(
        record.avatars,
        vec![AVATAR_PRIMARY.to_string(), AVATAR_SECONDARY.to_string()]
    );
    assert_eq!(record.case_type, CaseType::Family);
    let details = record.details.as_ref().unwrap();
    assert_eq!(details.complainant, "Asha Devi");
    assert_eq!(details.case_type, CaseType::Family);
}

#[test]
fn test_ids_are_unique() {
    let mut state = common::dashboard();
    for _ in 0..5 {
        common::open_to_details(&mut state);
        common::dispatch(&mut state, DashboardAction::Save);
    }

    let ids: HashSet<uuid::Uuid> = state.workspaces().iter().map(|w| w.id).collect();
    assert_eq!(ids.len(), state.workspaces().len());
}

#[test]
fn test_insertion_order_is_kept() {
    let mut state = common::dashboard();
    let seed_id = state.workspaces()[0].id;
    common::open_to_details(&mut state);
    let added = match common::dispatch(&mut state, DashboardAction::Save) {
        Some(DashboardEffect::WorkspaceAdded { id, .. }) => id,
        other => panic!("expected WorkspaceAdded, got {other:?}"),
    };

    let ids: Vec<_> = state.workspaces().iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![seed_id, added]);
}

#[test]
fn test_record_serializes_camel_case() {
    let mut state = common::dashboard();
    common::open_to_details(&mut state);
    common::dispatch(&mut state, DashboardAction::Save);

    let json = serde_json::to_value(state.workspaces().last().unwrap()).unwrap();
    assert_eq!(json["areaOfLaw"], "Abetment");
    assert_eq!(json["caseType"], "Criminal");
    assert_eq!(json["details"]["dateOfIncident"], "18.10.2022");
    assert_eq!(json["details"]["representing"][0], "Neha Kumari");
    assert!(json.get("createdAt").is_some());

    // The seed has no details block at all.
    let seed = serde_json::to_value(&state.workspaces()[0]).unwrap();
    assert!(seed.get("details").is_none());
}

#[test]
fn test_stats_follow_collection_length() {
    let mut state = common::dashboard();
    common::open_to_details(&mut state);
    common::dispatch(&mut state, DashboardAction::Save);

    let stats = state.stats();
    assert_eq!(stats[0].title, "Total Workspaces");
    assert_eq!(stats[0].value, "2");
    assert_eq!(stats[1].value, "51");
}
