use dioxus::prelude::*;

/// Visual variant for textareas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TextareaVariant {
    #[default]
    Default,
    Outline,
    Ghost,
}

impl TextareaVariant {
    fn class(&self) -> &'static str {
        match self {
            TextareaVariant::Default => "default",
            TextareaVariant::Outline => "outline",
            TextareaVariant::Ghost => "ghost",
        }
    }
}

/// Multi-line text input used for case descriptions and allegations.
#[component]
pub fn Textarea(
    #[props(default)] variant: TextareaVariant,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = 4)] rows: u32,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let invalid = error.is_some();
    let base = vec![
        Attribute::new("class", "textarea", None, false),
        Attribute::new("data-style", variant.class(), None, false),
        Attribute::new(
            "aria-invalid",
            if invalid { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "textarea-wrapper",
            if !label.is_empty() {
                label { class: "textarea-label", "{label}" }
            }
            textarea {
                value: value,
                placeholder: placeholder,
                rows: "{rows}",
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(message) = error {
                p { class: "textarea-error", role: "alert", "{message}" }
            }
        }
    }
}
