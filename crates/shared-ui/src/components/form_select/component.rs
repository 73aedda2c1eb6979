use dioxus::prelude::*;

/// Native `<select>` for filters and form fields.
///
/// `options` are `(value, label)` pairs rendered in order; `error` behaves
/// like [`crate::Input`]'s.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)]
    label: String,
    options: Vec<(String, String)>,
    #[props(default = false)]
    disabled: bool,
    #[props(default)]
    error: String,
) -> Element {
    let invalid = !error.is_empty();
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: if invalid { "form-select-wrapper invalid" } else { "form-select-wrapper" },
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                value: value.clone(),
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                for (option_value, option_label) in options.iter() {
                    option {
                        key: "{option_value}",
                        value: "{option_value}",
                        selected: *option_value == value,
                        "{option_label}"
                    }
                }
            }
            if invalid {
                span { class: "form-select-error", "{error}" }
            }
        }
    }
}
