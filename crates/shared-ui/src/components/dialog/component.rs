use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;
use dioxus_primitives::dialog as prim;

#[component]
pub fn DialogRoot(mut props: prim::DialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "lexi-dialog-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot { ..props }
    }
}

#[component]
pub fn DialogContent(mut props: prim::DialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("lexi-dialog-content".to_string());
    }

    rsx! {
        prim::DialogContent { ..props }
    }
}

#[component]
pub fn DialogTitle(mut props: prim::DialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "lexi-dialog-title", None, false));

    rsx! {
        prim::DialogTitle { ..props }
    }
}

#[component]
pub fn DialogDescription(mut props: prim::DialogDescriptionProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "lexi-dialog-description",
        None,
        false,
    ));

    rsx! {
        prim::DialogDescription { ..props }
    }
}

/// Title row with a close button on the right.
#[component]
pub fn DialogHeader(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div { class: "lexi-dialog-header",
            div { class: "lexi-dialog-heading", {children} }
            button {
                class: "lexi-dialog-close",
                r#type: "button",
                "aria-label": "Close",
                onclick: move |_| on_close.call(()),
                Icon::<LdX> { icon: LdX, width: 18, height: 18 }
            }
        }
    }
}

/// Scrollable middle section between header and footer.
#[component]
pub fn DialogBody(children: Element) -> Element {
    rsx! {
        div { class: "lexi-dialog-body", {children} }
    }
}

/// Right-aligned action row at the bottom of a dialog.
#[component]
pub fn DialogFooter(children: Element) -> Element {
    rsx! {
        div { class: "lexi-dialog-footer", {children} }
    }
}
