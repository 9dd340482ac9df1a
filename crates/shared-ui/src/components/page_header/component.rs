use dioxus::prelude::*;

/// Page header container. Title block on the left, actions on the right.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            {children}
        }
    }
}

/// Page title rendered as an h1, with an optional muted subtitle under it.
#[component]
pub fn PageTitle(#[props(default)] subtitle: String, children: Element) -> Element {
    rsx! {
        div { class: "page-title-block",
            h1 { class: "page-title", {children} }
            if !subtitle.is_empty() {
                p { class: "page-subtitle", "{subtitle}" }
            }
        }
    }
}

