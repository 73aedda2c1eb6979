use dioxus::prelude::*;

/// Filter toolbar above a table: inputs, selects and the Apply/Reset buttons
/// in one wrapping row.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar", role: "search",
            {children}
        }
    }
}

/// Right-aligned group for the toolbar's action buttons.
#[component]
pub fn SearchBarActions(children: Element) -> Element {
    rsx! {
        div { class: "search-bar-actions", {children} }
    }
}
