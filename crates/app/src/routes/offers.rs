use client::{ListResource, Offers};
use dioxus::prelude::*;
use shared_types::{AppError, CreateOfferForm, Offer};
use shared_ui::{
    Button, Card, CardContent, CardHeader, CardTitle, DetailItem, DetailList, Form, FormRow,
    InlineNotice, Input, PageHeader, PageTitle,
};

use crate::auth::use_api;
use crate::format_helpers::{
    day, optional_money, parse_amount, parse_optional_amount, parse_required_date, timestamp,
};
use crate::remote_table::{remote_table, use_remote_table, TableHandle};
use crate::routes::Route;

#[component]
pub fn OfferList(query: String) -> Element {
    let mirror = use_callback(|query: String| {
        navigator().replace(Route::OfferList { query });
    });
    let table = use_remote_table::<Offers>(query, mirror);
    let title = Offers::TITLE;

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "{title}" }
            }
            CreateOffer { table }
            {remote_table(table, offer_detail)}
        }
    }
}

fn offer_detail(offer: &Offer, _table: TableHandle<Offers>) -> Element {
    rsx! {
        DetailList {
            DetailItem { label: "Code", value: offer.code.clone() }
            DetailItem { label: "Title", value: offer.title.clone() }
            DetailItem { label: "Discount", value: format!("{}%", offer.discount_percent) }
            DetailItem { label: "Max discount", value: optional_money(offer.max_discount) }
            DetailItem { label: "Valid", value: format!("{} to {}", day(offer.valid_from), day(offer.valid_until)) }
            DetailItem { label: "Redemptions", value: offer.redemptions.to_string() }
            DetailItem { label: "Created", value: timestamp(offer.created_at) }
        }
    }
}

/// Raw text of the create-offer inputs.
#[derive(Debug, Clone, Default, PartialEq)]
struct OfferDraft {
    code: String,
    title: String,
    discount: String,
    max_discount: String,
    valid_from: String,
    valid_until: String,
}

impl OfferDraft {
    fn parse(&self) -> Result<CreateOfferForm, AppError> {
        Ok(CreateOfferForm {
            code: self.code.trim().to_uppercase(),
            title: self.title.trim().to_string(),
            discount_percent: parse_amount("discount_percent", &self.discount)?,
            max_discount: parse_optional_amount("max_discount", &self.max_discount)?,
            valid_from: parse_required_date("validFrom", &self.valid_from)?,
            valid_until: parse_required_date("validUntil", &self.valid_until)?,
        })
    }
}

#[component]
fn CreateOffer(table: TableHandle<Offers>) -> Element {
    let api = use_api();
    let mut draft = use_signal(OfferDraft::default);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<AppError>::None);
    let mut created = use_signal(|| Option::<String>::None);

    let submit = move |_: FormEvent| {
        let api = api.clone();
        spawn(async move {
            error.set(None);
            created.set(None);
            let form = match draft.read().parse() {
                Ok(form) => form,
                Err(err) => {
                    error.set(Some(err));
                    return;
                }
            };
            busy.set(true);
            match api.create_offer(&form).await {
                Ok(message) => {
                    tracing::info!(code = %form.code, "offer created");
                    created.set(Some(message.unwrap_or_else(|| "Offer created".to_string())));
                    draft.set(OfferDraft::default());
                    table.reload();
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
        Card { class: "create-card",
            CardHeader {
                CardTitle { "New offer" }
            }
            CardContent {
                Form { onsubmit: submit, busy: busy(),
                    FormRow {
                        Input {
                            label: "Code",
                            value: current.code,
                            error: field("code"),
                            on_input: move |evt: FormEvent| draft.write().code = evt.value(),
                        }
                        Input {
                            label: "Title",
                            value: current.title,
                            error: field("title"),
                            on_input: move |evt: FormEvent| draft.write().title = evt.value(),
                        }
                    }
                    FormRow {
                        Input {
                            label: "Discount %",
                            input_type: "number",
                            value: current.discount,
                            error: field("discount_percent"),
                            on_input: move |evt: FormEvent| draft.write().discount = evt.value(),
                        }
                        Input {
                            label: "Max discount",
                            input_type: "number",
                            placeholder: "No cap",
                            value: current.max_discount,
                            error: field("max_discount"),
                            on_input: move |evt: FormEvent| draft.write().max_discount = evt.value(),
                        }
                    }
                    FormRow {
                        Input {
                            label: "Valid from",
                            input_type: "date",
                            value: current.valid_from,
                            error: field("validFrom"),
                            on_input: move |evt: FormEvent| draft.write().valid_from = evt.value(),
                        }
                        Input {
                            label: "Valid until",
                            input_type: "date",
                            value: current.valid_until,
                            error: field("validUntil"),
                            on_input: move |evt: FormEvent| draft.write().valid_until = evt.value(),
                        }
                    }
                    Button { button_type: "submit", busy: busy(), "Create offer" }
                }
                if let Some(message) = banner {
                    InlineNotice { message }
                }
                if let Some(message) = created() {
                    InlineNotice { message, success: true }
                }
            }
        }
    }
}
