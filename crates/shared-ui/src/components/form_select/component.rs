use dioxus::prelude::*;

/// Native `<select>` with a label and an optional inline error.
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    /// Called when the selection changes.
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    /// Optional label displayed above the select.
    #[props(default)]
    label: String,
    /// Message shown under the select; also marks it invalid.
    #[props(default)]
    error: Option<String>,
    #[props(default = false)]
    disabled: bool,
    children: Element,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                value: value,
                disabled: disabled,
                "aria-invalid": if invalid { "true" } else { "false" },
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
            if let Some(message) = error {
                p { class: "form-select-error", role: "alert", "{message}" }
            }
        }
    }
}
