use pretty_assertions::assert_eq;
use shared_types::{DashboardAction, ViewMode, WorkspaceTab};

use crate::common;

#[test]
fn test_view_switch_leaves_collection_untouched() {
    let mut state = common::dashboard();
    common::open_to_details(&mut state);
    common::dispatch(&mut state, DashboardAction::Save);
    let before = state.workspaces().to_vec();

    for mode in [ViewMode::List, ViewMode::Grid, ViewMode::List] {
        let effect = common::dispatch(&mut state, DashboardAction::SetViewMode(mode));
        assert!(effect.is_none());
        assert_eq!(state.view_mode(), mode);
        assert_eq!(state.workspaces(), before.as_slice());
    }
}

#[test]
fn test_view_switch_does_not_touch_open_flow() {
    let mut state = common::dashboard();
    common::open_to_details(&mut state);
    let flow = state.intake().clone();

    common::dispatch(&mut state, DashboardAction::SetViewMode(ViewMode::List));

    assert_eq!(state.intake(), &flow);
}

#[test]
fn test_tab_is_cosmetic() {
    let mut state = common::dashboard();
    assert_eq!(state.active_tab(), WorkspaceTab::Litigation);
    let before = state.workspaces().to_vec();

    common::dispatch(&mut state, DashboardAction::SetTab(WorkspaceTab::Contracts));

    assert_eq!(state.active_tab(), WorkspaceTab::Contracts);
    assert_eq!(state.workspaces(), before.as_slice());
}
