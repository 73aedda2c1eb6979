pub mod agents;
pub mod blogs;
pub mod categories;
pub mod dashboard;
pub mod drivers;
pub mod issues;
pub mod login;
pub mod not_found;
pub mod offers;
pub mod pricing;
pub mod rides;
pub mod users;

use crate::auth::use_auth;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBadgePercent, LdCar, LdLayers, LdLayoutDashboard, LdLifeBuoy, LdLogOut, LdMapPin,
    LdNewspaper, LdReceipt, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant};

use agents::AgentList;
use blogs::BlogList;
use categories::CategoryList;
use dashboard::Dashboard;
use drivers::DriverList;
use issues::IssueList;
use login::Login;
use not_found::NotFound;
use offers::OfferList;
use pricing::Pricing;
use rides::RideList;
use users::UserList;

/// Application routes. List routes carry their table state in the query
/// string so a reload or shared link restores the same view.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/rides?:..query")]
    RideList { query: String },
    #[route("/issues?:..query")]
    IssueList { query: String },
    #[route("/users?:..query")]
    UserList { query: String },
    #[route("/drivers?:..query")]
    DriverList { query: String },
    #[route("/agents?:..query")]
    AgentList { query: String },
    #[route("/categories?:..query")]
    CategoryList { query: String },
    #[route("/offers?:..query")]
    OfferList { query: String },
    #[route("/blogs?:..query")]
    BlogList { query: String },
    #[route("/pricing")]
    Pricing {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Path of this route, used as the post-login redirect target.
    pub fn path(&self) -> String {
        self.to_string()
    }
}

/// Auth guard layout: redirects to /login when no session is present.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();

    if !auth.is_authenticated() {
        navigator().replace(Route::Login {
            redirect: Some(route.path()),
        });
        return rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to login..." }
            }
        };
    }

    rsx! { Outlet::<Route> {} }
}

#[derive(Clone, Copy, PartialEq)]
enum NavIcon {
    Dashboard,
    Rides,
    Issues,
    Users,
    Drivers,
    Agents,
    Categories,
    Offers,
    Blogs,
    Pricing,
}

#[component]
fn NavLink(to: Route, active: bool, icon: NavIcon, label: String) -> Element {
    rsx! {
        Link { to,
            class: if active { "console-nav-link active" } else { "console-nav-link" },
            match icon {
                NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
                NavIcon::Rides => rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 18, height: 18 } },
                NavIcon::Issues => rsx! { Icon::<LdLifeBuoy> { icon: LdLifeBuoy, width: 18, height: 18 } },
                NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
                NavIcon::Drivers => rsx! { Icon::<LdCar> { icon: LdCar, width: 18, height: 18 } },
                NavIcon::Agents => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
                NavIcon::Categories => rsx! { Icon::<LdLayers> { icon: LdLayers, width: 18, height: 18 } },
                NavIcon::Offers => rsx! { Icon::<LdBadgePercent> { icon: LdBadgePercent, width: 18, height: 18 } },
                NavIcon::Blogs => rsx! { Icon::<LdNewspaper> { icon: LdNewspaper, width: 18, height: 18 } },
                NavIcon::Pricing => rsx! { Icon::<LdReceipt> { icon: LdReceipt, width: 18, height: 18 } },
            }
            span { "{label}" }
        }
    }
}

/// Main app layout with sidebar navigation and a top bar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let username = auth.username();

    let page_title = match &route {
        Route::Dashboard {} => "Dashboard",
        Route::RideList { .. } => "Rides",
        Route::IssueList { .. } => "Issues",
        Route::UserList { .. } => "Users",
        Route::DriverList { .. } => "Drivers",
        Route::AgentList { .. } => "Agents",
        Route::CategoryList { .. } => "Categories",
        Route::OfferList { .. } => "Offers",
        Route::BlogList { .. } => "Blog",
        Route::Pricing {} => "Pricing",
        Route::Login { .. } | Route::NotFound { .. } => "",
    };

    let nav = [
        (Route::Dashboard {}, NavIcon::Dashboard, "Dashboard"),
        (Route::RideList { query: String::new() }, NavIcon::Rides, "Rides"),
        (Route::IssueList { query: String::new() }, NavIcon::Issues, "Issues"),
        (Route::UserList { query: String::new() }, NavIcon::Users, "Users"),
        (Route::DriverList { query: String::new() }, NavIcon::Drivers, "Drivers"),
        (Route::AgentList { query: String::new() }, NavIcon::Agents, "Agents"),
        (Route::CategoryList { query: String::new() }, NavIcon::Categories, "Categories"),
        (Route::OfferList { query: String::new() }, NavIcon::Offers, "Offers"),
        (Route::BlogList { query: String::new() }, NavIcon::Blogs, "Blog"),
        (Route::Pricing {}, NavIcon::Pricing, "Pricing"),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "console-shell",
            aside { class: "console-sidebar",
                div { class: "console-brand", "Fleet Admin" }
                nav { class: "console-nav",
                    for (to, icon, label) in nav {
                        NavLink {
                            key: "{label}",
                            active: std::mem::discriminant(&to) == std::mem::discriminant(&route),
                            to,
                            icon,
                            label: label.to_string(),
                        }
                    }
                }
            }

            div { class: "console-main",
                header { class: "console-topbar",
                    span { class: "console-title", "{page_title}" }
                    div { class: "console-spacer" }
                    span { class: "console-user", "{username}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            tracing::info!("signed out");
                            auth.clear();
                            navigator().push(Route::Login { redirect: None });
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Sign out"
                    }
                }

                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
