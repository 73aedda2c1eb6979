use dioxus::prelude::*;
use shared_types::{AppError, FareRule, FareRuleForm};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, ErrorBanner, Form,
    FormRow, InlineNotice, Input, PageHeader, PageSubtitle, PageTitle, SkeletonRows,
};

use crate::auth::use_api;
use crate::format_helpers::parse_amount;

/// Fare rules per ride category.
#[component]
pub fn Pricing() -> Element {
    let api = use_api();
    let mut rules = use_resource(move || {
        let api = api.clone();
        async move { api.list_pricing().await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Pricing" }
                PageSubtitle { "Fare components applied to new ride requests." }
            }

            match &*rules.read() {
                None => rsx! { SkeletonRows { rows: 3 } },
                Some(Err(err)) => rsx! {
                    ErrorBanner {
                        message: err.message.clone(),
                        on_retry: move |_| rules.restart(),
                    }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "detail-muted", "No data available" }
                },
                Some(Ok(list)) => rsx! {
                    div { class: "pricing-grid",
                        for rule in list.iter().cloned() {
                            FareRuleEditor { key: "{rule.category_id}", rule }
                        }
                    }
                },
            }
        }
    }
}

/// Text of the four fare inputs.
#[derive(Debug, Clone, PartialEq)]
struct FareDraft {
    base_fare: String,
    per_km: String,
    per_minute: String,
    surge_cap: String,
}

impl From<&FareRule> for FareDraft {
    fn from(rule: &FareRule) -> Self {
        Self {
            base_fare: rule.base_fare.to_string(),
            per_km: rule.per_km.to_string(),
            per_minute: rule.per_minute.to_string(),
            surge_cap: rule.surge_cap.to_string(),
        }
    }
}

impl FareDraft {
    fn parse(&self) -> Result<FareRuleForm, AppError> {
        Ok(FareRuleForm {
            base_fare: parse_amount("base_fare", &self.base_fare)?,
            per_km: parse_amount("per_km", &self.per_km)?,
            per_minute: parse_amount("per_minute", &self.per_minute)?,
            surge_cap: parse_amount("surge_cap", &self.surge_cap)?,
        })
    }
}

#[component]
fn FareRuleEditor(rule: FareRule) -> Element {
    let api = use_api();
    let mut draft = use_signal(|| FareDraft::from(&rule));
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<AppError>::None);
    let mut saved = use_signal(|| Option::<String>::None);
    let category_id = rule.category_id.clone();

    let submit = move |_: FormEvent| {
        let api = api.clone();
        let category_id = category_id.clone();
        spawn(async move {
            error.set(None);
            saved.set(None);
            let form = match draft.read().parse() {
                Ok(form) => form,
                Err(err) => {
                    error.set(Some(err));
                    return;
                }
            };
            busy.set(true);
            match api.update_fare_rule(&category_id, &form).await {
                Ok(message) => {
                    tracing::info!(category_id = %category_id, "fare rule updated");
                    saved.set(Some(message.unwrap_or_else(|| "Saved".to_string())));
                }
                Err(err) => error.set(Some(err)),
            }
            busy.set(false);
        });
    };

    let field = move |key: &str| {
        error
            .read()
            .as_ref()
            .and_then(|e| e.field(key).map(str::to_string))
            .unwrap_or_default()
    };
    let banner = error
        .read()
        .as_ref()
        .filter(|e| e.field_errors.is_empty())
        .map(|e| e.message.clone());
    let current = draft();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "{rule.category_name}" }
                CardDescription { "Surge capped at {rule.surge_cap}x" }
            }
            CardContent {
                Form { onsubmit: submit, busy: busy(),
                    FormRow {
                        Input {
                            label: "Base fare",
                            input_type: "number",
                            value: current.base_fare,
                            error: field("base_fare"),
                            on_input: move |evt: FormEvent| draft.write().base_fare = evt.value(),
                        }
                        Input {
                            label: "Per km",
                            input_type: "number",
                            value: current.per_km,
                            error: field("per_km"),
                            on_input: move |evt: FormEvent| draft.write().per_km = evt.value(),
                        }
                    }
                    FormRow {
                        Input {
                            label: "Per minute",
                            input_type: "number",
                            value: current.per_minute,
                            error: field("per_minute"),
                            on_input: move |evt: FormEvent| draft.write().per_minute = evt.value(),
                        }
                        Input {
                            label: "Surge cap",
                            input_type: "number",
                            value: current.surge_cap,
                            error: field("surge_cap"),
                            on_input: move |evt: FormEvent| draft.write().surge_cap = evt.value(),
                        }
                    }
                    Button { button_type: "submit", busy: busy(), "Save" }
                }
                if let Some(message) = banner {
                    InlineNotice { message }
                }
                if let Some(message) = saved() {
                    InlineNotice { message, success: true }
                }
            }
        }
    }
}
