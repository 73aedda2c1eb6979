use dioxus::prelude::*;

/// Label/value pairs shown inside an expanded row.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// One row of a [`DetailList`]. Blank values render as a dash.
#[component]
pub fn DetailItem(label: String, #[props(default)] value: String) -> Element {
    let shown = if value.trim().is_empty() { "--".to_string() } else { value };
    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value", "{shown}" }
        }
    }
}

/// Side-by-side sections of an expanded row (record facts, timeline,
/// actions).
#[component]
pub fn DetailGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-grid", {children} }
    }
}

#[component]
pub fn DetailSection(title: String, children: Element) -> Element {
    rsx! {
        section { class: "detail-section",
            h4 { class: "detail-section-title", "{title}" }
            {children}
        }
    }
}
