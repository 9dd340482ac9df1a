// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod drop_zone;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod search_bar;
pub mod textarea;

// Primitive wrappers
pub mod avatar;
pub mod dialog;
pub mod toast;

// Layout shell
pub mod sidebar;

use dioxus::prelude::Attribute;

/// Base attributes for a wrapper element: its own class merged with
/// whatever the caller passed.
pub(crate) fn class_attributes(
    class: &'static str,
    extra: Vec<(&'static str, &'static str)>,
    attributes: Vec<Attribute>,
) -> Vec<Attribute> {
    let mut base = vec![Attribute::new("class", class, None, false)];
    base.extend(
        extra
            .into_iter()
            .map(|(name, value)| Attribute::new(name, value, None, false)),
    );
    dioxus_primitives::merge_attributes(vec![base, attributes])
}

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use drop_zone::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use search_bar::*;
pub use sidebar::*;
pub use textarea::*;
pub use toast::*;
