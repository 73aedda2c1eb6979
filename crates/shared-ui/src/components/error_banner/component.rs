use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCircleAlert, LdX};
use dioxus_free_icons::Icon;

use crate::components::button::{Button, ButtonVariant};

/// Page-level error shown above content that is kept on screen.
#[component]
pub fn ErrorBanner(
    message: String,
    #[props(default)] on_retry: Option<EventHandler<()>>,
    #[props(default)] on_dismiss: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "error-banner", role: "alert",
            Icon::<LdCircleAlert> { icon: LdCircleAlert, width: 18, height: 18 }
            span { class: "error-banner-message", "{message}" }
            if let Some(retry) = on_retry {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| retry.call(()),
                    "Retry"
                }
            }
            if let Some(dismiss) = on_dismiss {
                button {
                    class: "error-banner-dismiss",
                    r#type: "button",
                    "aria-label": "Dismiss",
                    onclick: move |_| dismiss.call(()),
                    Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                }
            }
        }
    }
}

/// Inline notice inside an expanded row or form.
#[component]
pub fn InlineNotice(
    message: String,
    #[props(default = false)] success: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        p { class: if success { "inline-notice success" } else { "inline-notice" }, "{message}" }
    }
}
