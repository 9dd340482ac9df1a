use dioxus::prelude::*;

use crate::components::class_attributes;

/// Bordered surface for workspace tiles and summary figures.
#[component]
pub fn Card(
    /// Adds hover elevation for cards that open something.
    #[props(default = false)]
    interactive: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = class_attributes(
        "card",
        vec![("data-interactive", if interactive { "true" } else { "false" })],
        attributes,
    );

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Header section of a Card.
#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = class_attributes("card-header", vec![], attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = class_attributes("card-title", vec![], attributes);

    rsx! {
        h3 {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = class_attributes("card-description", vec![], attributes);

    rsx! {
        p {
            ..merged,
            {children}
        }
    }
}

/// Main content section of a Card.
#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = class_attributes("card-content", vec![], attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Footer row of a Card, split between a left and right slot by flexbox.
#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = class_attributes("card-footer", vec![], attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}
