use client::{Drivers, ListResource, DRIVER_DECISIONS};
use dioxus::prelude::*;
use shared_types::DriverDetail;
use shared_ui::{
    Button, ButtonVariant, DetailGrid, DetailItem, DetailList, DetailSection, InlineNotice,
    PageHeader, PageTitle,
};

use crate::auth::use_api;
use crate::format_helpers::optional_timestamp;
use crate::remote_table::{remote_table, use_remote_table, TableHandle};
use crate::routes::Route;

#[component]
pub fn DriverList(query: String) -> Element {
    let mirror = use_callback(|query: String| {
        navigator().replace(Route::DriverList { query });
    });
    let table = use_remote_table::<Drivers>(query, mirror);
    let title = Drivers::TITLE;

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "{title}" }
            }
            {remote_table(table, driver_detail)}
        }
    }
}

fn driver_detail(detail: &DriverDetail, table: TableHandle<Drivers>) -> Element {
    let driver = &detail.driver;
    let documents: Vec<(String, String, String)> = detail
        .documents
        .iter()
        .map(|d| (client::humanize_status(&d.kind), d.url.clone(), optional_timestamp(d.expires_at)))
        .collect();
    let no_documents = documents.is_empty();

    rsx! {
        DetailGrid {
            DetailSection { title: "Driver",
                DetailList {
                    DetailItem { label: "Name", value: format!("{} {}", driver.first_name, driver.last_name) }
                    DetailItem { label: "Phone", value: driver.phone.clone() }
                    DetailItem { label: "Vehicle", value: driver.vehicle_number.clone().unwrap_or_default() }
                    DetailItem { label: "Model", value: detail.vehicle_model.clone().unwrap_or_default() }
                    DetailItem { label: "Completed rides", value: detail.completed_rides.to_string() }
                    DetailItem { label: "Online", value: if driver.online { "Yes".to_string() } else { "No".to_string() } }
                }
            }
            DetailSection { title: "Documents",
                if no_documents {
                    p { class: "detail-muted", "No documents uploaded" }
                }
                ul { class: "detail-documents",
                    for (kind, url, expires) in documents {
                        li { key: "{url}",
                            a { href: "{url}", target: "_blank", rel: "noopener", "{kind}" }
                            if !expires.is_empty() {
                                span { class: "detail-muted", " expires {expires}" }
                            }
                        }
                    }
                }
            }
            DetailSection { title: "Verification",
                Verification {
                    driver_id: driver.id.clone(),
                    status: driver.verification_status.clone(),
                    table,
                }
            }
        }
    }
}

/// Record a verification decision for a driver.
#[component]
fn Verification(driver_id: String, status: String, table: TableHandle<Drivers>) -> Element {
    let api = use_api();
    let mut busy = use_signal(|| false);
    let mut notice = use_signal(|| Option::<(bool, String)>::None);

    let decide = use_callback(move |decision: &'static str| {
        let api = api.clone();
        let driver_id = driver_id.clone();
        spawn(async move {
            busy.set(true);
            match api.verify_driver(&driver_id, decision).await {
                Ok(message) => {
                    let fallback = format!("Driver marked {}", client::humanize_status(decision));
                    notice.set(Some((true, message.unwrap_or(fallback))));
                    table.reload();
                }
                Err(err) => notice.set(Some((false, err.message))),
            }
            busy.set(false);
        });
    });
    let current = client::humanize_status(&status);

    rsx! {
        p { class: "detail-muted", "Current status: {current}" }
        div { class: "detail-actions",
            for decision in DRIVER_DECISIONS.iter().copied() {
                Button {
                    key: "{decision}",
                    variant: if decision == "REJECTED" { ButtonVariant::Destructive } else { ButtonVariant::Primary },
                    disabled: decision == status,
                    busy: busy(),
                    onclick: move |_| decide.call(decision),
                    if decision == "REJECTED" { "Reject" } else { "Verify" }
                }
            }
        }
        if let Some((success, message)) = notice() {
            InlineNotice { message, success }
        }
    }
}
