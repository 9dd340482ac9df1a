use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use dioxus_free_icons::Icon;

/// Drag-and-drop target with a hidden file input as the click fallback.
///
/// The zone owns no state: `active` is driven by the caller from the
/// enter/leave callbacks, and both the drop and browse paths hand the raw
/// event back so the caller can pick the first file.
#[component]
pub fn DropZone(
    #[props(default)] active: bool,
    /// Value for the file input's `accept` attribute.
    #[props(default = "application/pdf".to_string())]
    accept: String,
    #[props(default = false)] disabled: bool,
    on_drag_enter: EventHandler<()>,
    on_drag_leave: EventHandler<()>,
    on_drop: EventHandler<DragEvent>,
    on_browse: EventHandler<FormEvent>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label {
            class: "drop-zone",
            "data-active": if active { "true" } else { "false" },
            "data-disabled": if disabled { "true" } else { "false" },
            ondragenter: move |evt: DragEvent| {
                evt.prevent_default();
                on_drag_enter.call(());
            },
            ondragover: move |evt: DragEvent| {
                // Without this the browser never fires `drop`.
                evt.prevent_default();
            },
            ondragleave: move |evt: DragEvent| {
                evt.prevent_default();
                on_drag_leave.call(());
            },
            ondrop: move |evt: DragEvent| {
                evt.prevent_default();
                if !disabled {
                    on_drop.call(evt);
                }
            },
            span { class: "drop-zone-icon",
                Icon::<LdUpload> { icon: LdUpload, width: 24, height: 24 }
            }
            div { class: "drop-zone-text", {children} }
            input {
                class: "drop-zone-input",
                r#type: "file",
                accept: "{accept}",
                multiple: false,
                disabled: disabled,
                onchange: move |evt| on_browse.call(evt),
            }
        }
    }
}
