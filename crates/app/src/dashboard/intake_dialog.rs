use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdX};
use dioxus_free_icons::Icon;
use shared_types::{DashboardAction, FileRef, IntakeErrorKind, IntakeStep};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, DialogBody, DialogContent, DialogDescription,
    DialogFooter, DialogHeader, DialogRoot, DialogTitle, DropZone, Textarea,
};

use super::DashboardHandle;

/// Step 1: attach a document or describe the case, then run the summarizer.
#[component]
pub fn IntakeDialog() -> Element {
    let dashboard = use_context::<DashboardHandle>();

    let (open, description, document, drag_active, summarizing, error, max_mb) = {
        let state = dashboard.state.read();
        let flow = state.intake();
        (
            flow.step() == IntakeStep::Intake,
            flow.description().to_string(),
            flow.document().cloned(),
            flow.drag_active(),
            flow.is_summarizing(),
            flow.error().cloned(),
            flow.config().max_upload_bytes / (1024 * 1024),
        )
    };

    let upload_error = error
        .as_ref()
        .filter(|e| e.kind == IntakeErrorKind::Upload)
        .map(|e| e.message.clone());
    let description_error = error
        .as_ref()
        .filter(|e| e.is_for("description"))
        .map(|e| e.message.clone());
    let summary_error = error
        .as_ref()
        .filter(|e| e.kind == IntakeErrorKind::Summarization)
        .map(|e| e.message.clone());

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
                    DialogDescription { "Upload the case files or add the facts manually." }
                }

                DialogBody {
                    h3 { class: "intake-section-title", "Upload the case files" }
                    DropZone {
                        active: drag_active,
                        disabled: summarizing,
                        on_drag_enter: move |_| dashboard.dispatch(DashboardAction::DragEnter),
                        on_drag_leave: move |_| dashboard.dispatch(DashboardAction::DragLeave),
                        on_drop: move |evt: DragEvent| {
                            let first = evt
                                .files()
                                .first()
                                .map(|f| FileRef::new(f.name(), f.size(), f.content_type()));
                            dashboard.dispatch(DashboardAction::DropFile(first));
                        },
                        on_browse: move |evt: FormEvent| {
                            if let Some(f) = evt.files().first() {
                                let file = FileRef::new(f.name(), f.size(), f.content_type());
                                dashboard.dispatch(DashboardAction::AttachFile(file));
                            }
                        },
                        p {
                            strong { "Drag and drop your document" }
                            br {}
                            "or click to browse files"
                        }
                        p { class: "drop-zone-hint", "PDF (max {max_mb} MB)" }
                    }

                    if let Some(doc) = document {
                        div { class: "attached-file",
                            Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                            span { class: "attached-file-name", "{doc.name}" }
                            span { class: "attached-file-size", "{doc.display_size()}" }
                            Button {
                                variant: ButtonVariant::Ghost,
                                size: ButtonSize::Icon,
                                disabled: summarizing,
                                aria_label: "Remove document",
                                onclick: move |_| dashboard.dispatch(DashboardAction::RemoveFile),
                                Icon::<LdX> { icon: LdX, width: 14, height: 14 }
                            }
                        }
                    }
                    if let Some(message) = upload_error {
                        p { class: "intake-error", role: "alert", "{message}" }
                    }

                    div { class: "intake-divider", span { "or" } }

                    Textarea {
                        label: "Add case facts manually",
                        value: description,
                        placeholder: "Enter case description",
                        rows: 5,
                        disabled: summarizing,
                        error: description_error,
                        on_input: move |evt: FormEvent| {
                            dashboard.dispatch(DashboardAction::EditDescription(evt.value()));
                        },
                    }

                    if let Some(message) = summary_error {
                        p { class: "intake-error", role: "alert", "{message}" }
                    }
                }

                DialogFooter {
                    Button {
                        class: "intake-run",
                        disabled: summarizing,
                        onclick: move |_| dashboard.dispatch(DashboardAction::RunSummarizer),
                        if summarizing { "Summarising…" } else { "Run AI Summariser" }
                    }
                }
            }
        }
    }
}
