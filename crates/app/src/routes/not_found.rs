use client::{
    Agents, BlogPosts, Categories, Drivers, Issues, ListResource, Offers, Rides, Users,
};
use dioxus::prelude::*;

use crate::routes::Route;

/// Console screen whose name matches the first segment of an unknown path,
/// e.g. `/ride/42` or `/Issues/open` point back at the list they came from.
fn closest_screen(route: &[String]) -> Option<(Route, &'static str)> {
    let first = route.first()?.trim().to_lowercase();
    let stem = first.trim_end_matches('s');
    if stem.is_empty() {
        return None;
    }
    let screens = [
        (Rides::NAME, Route::RideList { query: String::new() }, Rides::TITLE),
        (Issues::NAME, Route::IssueList { query: String::new() }, Issues::TITLE),
        (Users::NAME, Route::UserList { query: String::new() }, Users::TITLE),
        (Drivers::NAME, Route::DriverList { query: String::new() }, Drivers::TITLE),
        (Agents::NAME, Route::AgentList { query: String::new() }, Agents::TITLE),
        (Categories::NAME, Route::CategoryList { query: String::new() }, Categories::TITLE),
        (Offers::NAME, Route::OfferList { query: String::new() }, Offers::TITLE),
        (BlogPosts::NAME, Route::BlogList { query: String::new() }, BlogPosts::TITLE),
        ("pricing", Route::Pricing {}, "Pricing"),
    ];
    screens
        .into_iter()
        .find(|(name, _, _)| name.trim_end_matches('s') == stem || name.starts_with(stem))
        .map(|(_, route, title)| (route, title))
}

/// 404 page for paths outside the console's routes.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    let suggestion = closest_screen(&route);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "No such screen" }
                p { class: "not-found-message",
                    code { "{path}" }
                    " is not part of the admin console."
                }
                div { class: "not-found-links",
                    if let Some((to, title)) = suggestion {
                        Link { to, class: "not-found-link primary", "Open {title}" }
                    }
                    Link { to: Route::Dashboard {}, class: "not-found-link", "Live dashboard" }
                }
            }
        }
    }
}
