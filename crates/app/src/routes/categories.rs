use client::{Categories, ListResource};
use dioxus::prelude::*;
use shared_types::{AppError, Category, CreateCategoryForm};
use shared_ui::{
    Button, Card, CardContent, CardHeader, CardTitle, DetailItem, DetailList, Form, FormRow,
    InlineNotice, Input, PageHeader, PageTitle,
};

use crate::auth::use_api;
use crate::format_helpers::{money, parse_amount, parse_count, timestamp};
use crate::remote_table::{remote_table, use_remote_table, TableHandle};
use crate::routes::Route;

#[component]
pub fn CategoryList(query: String) -> Element {
    let mirror = use_callback(|query: String| {
        navigator().replace(Route::CategoryList { query });
    });
    let table = use_remote_table::<Categories>(query, mirror);
    let title = Categories::TITLE;

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "{title}" }
            }
            CreateCategory { table }
            {remote_table(table, category_detail)}
        }
    }
}

fn category_detail(category: &Category, _table: TableHandle<Categories>) -> Element {
    rsx! {
        DetailList {
            DetailItem { label: "Name", value: category.name.clone() }
            DetailItem { label: "Base fare", value: money(category.base_fare) }
            DetailItem { label: "Seats", value: category.seats.to_string() }
            DetailItem { label: "Status", value: client::humanize_status(category.status_label()) }
            DetailItem { label: "Created", value: timestamp(category.created_at) }
        }
    }
}

fn read_form(name: &str, base_fare: &str, seats: &str) -> Result<CreateCategoryForm, AppError> {
    Ok(CreateCategoryForm {
        name: name.trim().to_string(),
        base_fare: parse_amount("base_fare", base_fare)?,
        seats: parse_count("seats", seats)?,
    })
}

#[component]
fn CreateCategory(table: TableHandle<Categories>) -> Element {
    let api = use_api();
    let mut name = use_signal(String::new);
    let mut base_fare = use_signal(String::new);
    let mut seats = use_signal(|| "4".to_string());
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<AppError>::None);
    let mut created = use_signal(|| Option::<String>::None);

    let submit = move |_: FormEvent| {
        let api = api.clone();
        spawn(async move {
            error.set(None);
            created.set(None);
            let form = match read_form(&name(), &base_fare(), &seats()) {
                Ok(form) => form,
                Err(err) => {
                    error.set(Some(err));
                    return;
                }
            };
            busy.set(true);
            match api.create_category(&form).await {
                Ok(message) => {
                    tracing::info!(name = %form.name, "category created");
                    created.set(Some(message.unwrap_or_else(|| "Category created".to_string())));
                    name.set(String::new());
                    base_fare.set(String::new());
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

    rsx! {
        Card { class: "create-card",
            CardHeader {
                CardTitle { "New category" }
            }
            CardContent {
                Form { onsubmit: submit, busy: busy(),
                    FormRow {
                        Input {
                            label: "Name",
                            value: name(),
                            error: field("name"),
                            on_input: move |evt: FormEvent| name.set(evt.value()),
                        }
                        Input {
                            label: "Base fare",
                            input_type: "number",
                            value: base_fare(),
                            error: field("base_fare"),
                            on_input: move |evt: FormEvent| base_fare.set(evt.value()),
                        }
                        Input {
                            label: "Seats",
                            input_type: "number",
                            value: seats(),
                            error: field("seats"),
                            on_input: move |evt: FormEvent| seats.set(evt.value()),
                        }
                    }
                    Button { button_type: "submit", busy: busy(), "Create category" }
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
