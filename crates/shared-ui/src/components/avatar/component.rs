use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

pub use dioxus_primitives::avatar::AvatarState;

#[component]
pub fn Avatar(mut props: prim::AvatarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "lexi-avatar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { ..props }
    }
}

#[component]
pub fn AvatarImage(mut props: prim::AvatarImageProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "lexi-avatar-image", None, false));

    rsx! {
        prim::AvatarImage { ..props }
    }
}

#[component]
pub fn AvatarFallback(mut props: prim::AvatarFallbackProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "lexi-avatar-fallback",
        None,
        false,
    ));

    rsx! {
        prim::AvatarFallback { ..props }
    }
}

/// Up to two uppercase initials taken from the words of a name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Overlapping row of team avatars. Anything past `max` collapses into a
/// "+N" counter.
#[component]
pub fn AvatarStack(
    urls: Vec<String>,
    #[props(default = 3)] max: usize,
    #[props(default)] fallback: String,
) -> Element {
    let hidden = urls.len().saturating_sub(max);
    let shown: Vec<String> = urls.into_iter().take(max).collect();

    rsx! {
        div { class: "lexi-avatar-stack",
            for (idx, url) in shown.into_iter().enumerate() {
                Avatar { key: "{idx}",
                    AvatarImage { src: url }
                    AvatarFallback { "{fallback}" }
                }
            }
            if hidden > 0 {
                span { class: "lexi-avatar-stack-more", "+{hidden}" }
            }
        }
    }
}
