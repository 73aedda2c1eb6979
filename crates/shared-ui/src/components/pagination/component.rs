use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// One slot in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Number(u32),
    Gap,
}

/// Page numbers to offer around `page`: always the first and last page plus
/// the neighbours of the current one, with gaps for skipped runs.
pub fn page_window(page: u32, total_pages: u32) -> Vec<PageLink> {
    let total_pages = total_pages.max(1);
    let page = page.clamp(1, total_pages);
    let mut links = Vec::new();
    let mut last = 0;
    for n in 1..=total_pages {
        let shown = n == 1 || n == total_pages || n.abs_diff(page) <= 1;
        if !shown {
            continue;
        }
        if n > last + 1 {
            // lone skipped page: show it instead of a gap
            if n == last + 2 {
                links.push(PageLink::Number(last + 1));
            } else {
                links.push(PageLink::Gap);
            }
        }
        links.push(PageLink::Number(n));
        last = n;
    }
    links
}

/// Page-number pagination with Previous/Next buttons and a "go to page"
/// strip.
///
/// The buttons are always rendered; they are disabled at the edges and while
/// a request is in flight.
#[component]
pub fn Pagination(
    page: u32,
    total_pages: u32,
    #[props(default)] total_count: Option<u64>,
    #[props(default = false)] busy: bool,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_page: EventHandler<u32>,
) -> Element {
    let total_pages = total_pages.max(1);
    let has_prev = page > 1;
    let has_next = page < total_pages;
    let links = page_window(page, total_pages);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", "aria-label": "Pagination",
            span { class: "pagination-info",
                match total_count {
                    Some(total) => rsx! { "Page {page} of {total_pages} ({total} total)" },
                    None => rsx! { "Page {page} of {total_pages}" },
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                disabled: !has_prev || busy,
                onclick: move |_| on_prev.call(()),
                "Previous"
            }
            for (i, link) in links.into_iter().enumerate() {
                match link {
                    PageLink::Gap => rsx! {
                        span { key: "gap-{i}", class: "pagination-gap", "…" }
                    },
                    PageLink::Number(n) => rsx! {
                        Button {
                            key: "page-{n}",
                            variant: if n == page { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                            disabled: n == page || busy,
                            onclick: move |_| on_page.call(n),
                            "{n}"
                        }
                    },
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                disabled: !has_next || busy,
                onclick: move |_| on_next.call(()),
                "Next"
            }
        }
    }
}
