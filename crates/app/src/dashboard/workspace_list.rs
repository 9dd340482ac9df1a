use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEllipsis, LdLayoutGrid, LdList, LdPlus};
use dioxus_free_icons::Icon;
use shared_types::{ViewMode, WorkspaceRecord, WorkspaceStatus, ALL_CASE_TYPES};
use shared_ui::{
    initials, AvatarStack, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card,
    CardContent, CardDescription, CardFooter, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, FormSelect,
    SearchBar,
};

const TABLE_COLUMNS: &[&str] = &[
    "Workspace Name",
    "Client",
    "Opponent",
    "Case",
    "Area of Law",
    "Timeline",
    "Actions",
];

const STATUS_FILTERS: &[WorkspaceStatus] = &[
    WorkspaceStatus::Draft,
    WorkspaceStatus::Current,
    WorkspaceStatus::Review,
];

fn status_variant(status: WorkspaceStatus) -> BadgeVariant {
    if status.is_draft() {
        BadgeVariant::Warning
    } else {
        BadgeVariant::Success
    }
}

/// Read-only rendering of the workspace collection as cards or a table.
///
/// Records render once each, in the order given. The type and status
/// filters are display-only.
#[component]
pub fn WorkspaceList(
    workspaces: Vec<WorkspaceRecord>,
    view_mode: ViewMode,
    on_view_mode_change: EventHandler<ViewMode>,
    on_create: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "workspace-list",
            div { class: "workspace-toolbar",
                SearchBar {
                    FormSelect { value: "all",
                        option { value: "all", "All Types" }
                        for case_type in ALL_CASE_TYPES.iter() {
                            option { value: case_type.as_str(), "{case_type.as_str()}" }
                        }
                    }
                    FormSelect { value: "all",
                        option { value: "all", "All Status" }
                        for status in STATUS_FILTERS.iter() {
                            option { value: status.as_str(), "{status.as_str()}" }
                        }
                    }
                    Button { onclick: move |_| on_create.call(()),
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "Create New Workspace"
                    }
                }
                div { class: "view-toggle",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        pressed: view_mode == ViewMode::Grid,
                        aria_label: "Grid view",
                        onclick: move |_| on_view_mode_change.call(ViewMode::Grid),
                        Icon::<LdLayoutGrid> { icon: LdLayoutGrid, width: 16, height: 16 }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        pressed: view_mode == ViewMode::List,
                        aria_label: "List view",
                        onclick: move |_| on_view_mode_change.call(ViewMode::List),
                        Icon::<LdList> { icon: LdList, width: 16, height: 16 }
                    }
                }
            }

            match view_mode {
                ViewMode::Grid => rsx! { WorkspaceGrid { workspaces } },
                ViewMode::List => rsx! { WorkspaceTable { workspaces } },
            }
        }
    }
}

#[component]
fn WorkspaceGrid(workspaces: Vec<WorkspaceRecord>) -> Element {
    if workspaces.is_empty() {
        return rsx! {
            Card { class: "workspace-empty",
                CardTitle { "No workspaces yet" }
                CardDescription { "Create a workspace to start tracking a case." }
            }
        };
    }

    rsx! {
        div { class: "workspace-grid",
            for workspace in workspaces {
                WorkspaceCard { key: "{workspace.id}", workspace }
            }
        }
    }
}

#[component]
fn WorkspaceCard(workspace: WorkspaceRecord) -> Element {
    let fallback = initials(&workspace.client);

    rsx! {
        Card { class: "workspace-card", interactive: true,
            CardHeader { class: "workspace-card-top",
                div {
                    CardTitle { "{workspace.name}" }
                    CardDescription { "{workspace.client}" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    aria_label: "More actions",
                    Icon::<LdEllipsis> { icon: LdEllipsis, width: 16, height: 16 }
                }
            }
            CardContent {
                div { class: "workspace-card-row",
                    span { class: "workspace-card-label", "Status:" }
                    Badge { variant: status_variant(workspace.status), "{workspace.status.as_str()}" }
                }
                div { class: "workspace-card-row",
                    span { class: "workspace-card-label", "Case:" }
                    span { "{workspace.case_type.as_str()}" }
                }
            }
            CardFooter {
                AvatarStack { urls: workspace.avatars.clone(), fallback }
                span { class: "workspace-open", "Open →" }
            }
        }
    }
}

#[component]
fn WorkspaceTable(workspaces: Vec<WorkspaceRecord>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                for column in TABLE_COLUMNS.iter() {
                    DataTableColumn { key: "{column}", "{column}" }
                }
            }
            DataTableBody {
                if workspaces.is_empty() {
                    DataTableEmpty { colspan: TABLE_COLUMNS.len(), "No workspaces yet." }
                }
                for workspace in workspaces {
                    DataTableRow { key: "{workspace.id}",
                        DataTableCell { span { class: "workspace-name", "{workspace.name}" } }
                        DataTableCell { "{workspace.client}" }
                        DataTableCell { "{workspace.opponent}" }
                        DataTableCell { "{workspace.case_type.as_str()}" }
                        DataTableCell { "{workspace.area_of_law}" }
                        DataTableCell { "{workspace.timeline}" }
                        DataTableCell {
                            Button {
                                variant: ButtonVariant::Ghost,
                                size: ButtonSize::Icon,
                                aria_label: "More actions",
                                Icon::<LdEllipsis> { icon: LdEllipsis, width: 16, height: 16 }
                            }
                        }
                    }
                }
            }
        }
    }
}
