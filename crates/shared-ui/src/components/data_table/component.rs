use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdArrowDown, LdArrowUp, LdArrowUpDown, LdChevronDown, LdChevronRight,
};
use dioxus_free_icons::Icon;

/// Sort state shown on a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SortIndicator {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

/// Scrollable table wrapper. While `loading`, the current rows stay visible
/// but dimmed.
#[component]
pub fn DataTable(#[props(default = false)] loading: bool, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: if loading { "data-table loading" } else { "data-table" },
            "aria-busy": if loading { "true" } else { "false" },
            table {
                {children}
            }
        }
    }
}

/// Wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Header cell that toggles the server sort when clicked.
#[component]
pub fn DataTableSortColumn(
    label: String,
    #[props(default)] indicator: SortIndicator,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let aria_sort = match indicator {
        SortIndicator::Unsorted => "none",
        SortIndicator::Ascending => "ascending",
        SortIndicator::Descending => "descending",
    };
    rsx! {
        th { "aria-sort": aria_sort,
            button {
                class: "data-table-sort",
                r#type: "button",
                onclick: move |evt| onclick.call(evt),
                "{label}"
                match indicator {
                    SortIndicator::Ascending => rsx! { Icon::<LdArrowUp> { icon: LdArrowUp, width: 14, height: 14 } },
                    SortIndicator::Descending => rsx! { Icon::<LdArrowDown> { icon: LdArrowDown, width: 14, height: 14 } },
                    SortIndicator::Unsorted => rsx! { Icon::<LdArrowUpDown> { icon: LdArrowUpDown, width: 14, height: 14 } },
                }
            }
        }
    }
}

/// Table row. Clickable rows toggle their inline detail.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(default = false)] expanded: bool,
    children: Element,
) -> Element {
    let class = match (onclick.is_some(), expanded) {
        (true, true) => "data-table-row clickable expanded",
        (true, false) => "data-table-row clickable",
        _ => "data-table-row",
    };
    rsx! {
        tr {
            class: class,
            "aria-expanded": if expanded { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Chevron cell reflecting a row's expansion.
#[component]
pub fn DataTableExpandCell(expanded: bool) -> Element {
    rsx! {
        td { class: "data-table-expand",
            if expanded {
                Icon::<LdChevronDown> { icon: LdChevronDown, width: 16, height: 16 }
            } else {
                Icon::<LdChevronRight> { icon: LdChevronRight, width: 16, height: 16 }
            }
        }
    }
}

/// Full-width row rendered under an expanded row.
#[component]
pub fn DataTableDetailRow(colspan: usize, children: Element) -> Element {
    rsx! {
        tr { class: "data-table-detail",
            td { colspan: "{colspan}", {children} }
        }
    }
}

/// Placeholder row for an empty page.
#[component]
pub fn DataTableEmpty(colspan: usize, message: String) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{colspan}", "{message}" }
        }
    }
}
