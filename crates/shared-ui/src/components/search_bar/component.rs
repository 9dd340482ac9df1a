use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;

/// Filter row. Wraps inputs, selects and action buttons in a flex row.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            {children}
        }
    }
}

/// Text field with a leading search icon.
#[component]
pub fn SearchInput(
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-input",
            span { class: "search-input-icon",
                Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
            }
            input {
                r#type: "search",
                value: value,
                placeholder: placeholder,
                oninput: move |evt| on_input.call(evt),
            }
        }
    }
}
