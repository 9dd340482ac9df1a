use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdArrowLeft;
use dioxus_free_icons::Icon;
use shared_types::{
    CaseField, CaseType, DashboardAction, IntakeStep, ALL_CASE_TYPES, REPRESENTING_CANDIDATES,
};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, DialogBody, DialogContent, DialogFooter, DialogHeader,
    DialogRoot, DialogTitle, FormSelect, Input, Textarea,
};

use super::DashboardHandle;

const SHORT_FIELDS: &[CaseField] = &[CaseField::Complainant, CaseField::Accused, CaseField::Victim];
const LONG_FIELDS: &[CaseField] = &[CaseField::Allegations, CaseField::FactsSummary];

/// Step 2: review the summarized facts, pick who the firm represents, save.
#[component]
pub fn DetailsDialog() -> Element {
    let dashboard = use_context::<DashboardHandle>();

    let (open, details, error) = {
        let state = dashboard.state.read();
        let flow = state.intake();
        (
            flow.step() == IntakeStep::Details,
            flow.details().clone(),
            flow.error().cloned(),
        )
    };
    let representing_error = error
        .filter(|e| e.is_for("representing"))
        .map(|e| e.message);

    rsx! {
        DialogRoot {
            open,
            on_open_change: move |is_open: bool| {
                if !is_open {
                    dashboard.dispatch(DashboardAction::CloseIntake);
                }
            },
            DialogContent {
                DialogHeader { on_close: move |_| dashboard.dispatch(DashboardAction::CloseIntake),
                    DialogTitle { "Case Details" }
                }

                DialogBody {
                    FormSelect {
                        label: "Case Type",
                        value: details.case_type.as_str().to_string(),
                        onchange: move |evt: FormEvent| {
                            let case_type = CaseType::from_str_or_default(&evt.value());
                            dashboard.dispatch(DashboardAction::SetCaseType(case_type));
                        },
                        for case_type in ALL_CASE_TYPES.iter() {
                            option {
                                value: case_type.as_str(),
                                selected: *case_type == details.case_type,
                                "{case_type.as_str()}"
                            }
                        }
                    }

                    for field in SHORT_FIELDS.iter().copied() {
                        Input {
                            key: "{field.label()}",
                            label: field.label().to_string(),
                            value: details.field(field).to_string(),
                            on_input: move |evt: FormEvent| {
                                dashboard.dispatch(DashboardAction::EditField(field, evt.value()));
                            },
                        }
                    }

                    for field in LONG_FIELDS.iter().copied() {
                        Textarea {
                            key: "{field.label()}",
                            label: field.label().to_string(),
                            value: details.field(field).to_string(),
                            rows: 3,
                            on_input: move |evt: FormEvent| {
                                dashboard.dispatch(DashboardAction::EditField(field, evt.value()));
                            },
                        }
                    }

                    Input {
                        label: CaseField::DateOfIncident.label().to_string(),
                        value: details.date_of_incident.clone(),
                        placeholder: "DD.MM.YYYY",
                        on_input: move |evt: FormEvent| {
                            dashboard.dispatch(DashboardAction::EditField(
                                CaseField::DateOfIncident,
                                evt.value(),
                            ));
                        },
                    }

                    div { class: "representing",
                        span { class: "representing-label", "Representing (please select)*" }
                        div { class: "representing-chips",
                            for party in REPRESENTING_CANDIDATES.iter().copied() {
                                Button {
                                    key: "{party}",
                                    class: "representing-chip",
                                    variant: ButtonVariant::Outline,
                                    size: ButtonSize::Small,
                                    pressed: details.representing.contains(party),
                                    onclick: move |_| {
                                        dashboard.dispatch(DashboardAction::ToggleRepresenting(
                                            party.to_string(),
                                        ));
                                    },
                                    "{party}"
                                }
                            }
                        }
                        if let Some(message) = representing_error {
                            p { class: "representing-error", role: "alert", "{message}" }
                        }
                    }
                }

                DialogFooter {
                    Button {
                        class: "details-back",
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| dashboard.dispatch(DashboardAction::Back),
                        Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                        "Go Back"
                    }
                    Button {
                        onclick: move |_| dashboard.dispatch(DashboardAction::Save),
                        "Save Details"
                    }
                }
            }
        }
    }
}
