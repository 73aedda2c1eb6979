use crate::auth::{use_api, use_auth};
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::LoginForm;
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, InlineNotice, Input,
};
use std::collections::HashMap;

/// Login page. Accepts an optional `redirect` query param; after login the
/// admin lands there instead of the dashboard.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Store redirect in a signal so closures can read it without moving ownership
    let redirect_target = use_signal(move || redirect);

    let go_to_destination = move || {
        let target = redirect_target
            .read()
            .as_deref()
            .and_then(|path| path.parse::<Route>().ok())
            .filter(|route| !matches!(route, Route::Login { .. } | Route::NotFound { .. }))
            .unwrap_or(Route::Dashboard {});
        navigator().replace(target);
    };

    if auth.is_authenticated() {
        go_to_destination();
    }

    let handle_login = move |_: FormEvent| {
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let form = LoginForm {
                email: email().trim().to_string(),
                password: password(),
            };
            match api.login(&form).await {
                Ok(session) => {
                    auth.set_session(session);
                    go_to_destination();
                }
                Err(err) if err.field_errors.is_empty() => error_msg.set(Some(err.message)),
                Err(err) => field_errors.set(err.field_errors),
            }
            loading.set(false);
        });
    };

    let email_error = field_errors().get("email").cloned().unwrap_or_default();
    let password_error = field_errors().get("password").cloned().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Admin access to rides, support, and catalog" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        InlineNotice { message: err }
                    }

                    Form { onsubmit: handle_login, busy: loading(),
                        Input {
                            label: "Email",
                            input_type: "email",
                            placeholder: "admin@example.com",
                            value: email(),
                            error: email_error,
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            error: password_error,
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            class: "auth-submit",
                            button_type: "submit",
                            busy: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
