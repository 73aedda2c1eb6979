use client::{ApiClient, AuthContext};
use dioxus::prelude::*;

mod auth;
mod format_helpers;
mod remote_table;
mod routes;
use auth::AuthState;
use routes::Route;

const CONSOLE_CSS: Asset = asset!("/assets/console.css");

fn main() {
    let config = client::load_config();
    tracing::info!(base_url = %config.api.base_url, "starting admin console");
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);
    // Anonymous base client; screens derive an authenticated one per call
    // through `use_api`.
    use_context_provider(|| ApiClient::new(&client::config().api, AuthContext::anonymous()));

    use_hook(|| tracing::debug!(platform = client_platform(), "console mounted"));

    rsx! {
        document::Link { rel: "stylesheet", href: CONSOLE_CSS }
        Router::<Route> {}
    }
}
