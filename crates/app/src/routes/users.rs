use client::{ListResource, Users};
use dioxus::prelude::*;
use shared_types::UserDetail;
use shared_ui::{
    Button, ButtonVariant, DetailGrid, DetailItem, DetailList, DetailSection, InlineNotice,
    PageHeader, PageTitle,
};

use crate::auth::use_api;
use crate::format_helpers::{optional_money, optional_timestamp};
use crate::remote_table::{remote_table, use_remote_table, TableHandle};
use crate::routes::Route;

#[component]
pub fn UserList(query: String) -> Element {
    let mirror = use_callback(|query: String| {
        navigator().replace(Route::UserList { query });
    });
    let table = use_remote_table::<Users>(query, mirror);
    let title = Users::TITLE;

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "{title}" }
            }
            {remote_table(table, user_detail)}
        }
    }
}

fn user_detail(detail: &UserDetail, table: TableHandle<Users>) -> Element {
    let user = &detail.user;
    let churn = user
        .churn_risk
        .map(|r| format!("{:.0}%", r * 100.0))
        .unwrap_or_default();
    let places = detail.saved_places.join(", ");

    rsx! {
        DetailGrid {
            DetailSection { title: "Account",
                DetailList {
                    DetailItem { label: "Name", value: format!("{} {}", user.first_name, user.last_name) }
                    DetailItem { label: "Email", value: user.email.clone() }
                    DetailItem { label: "Phone", value: user.phone.clone().unwrap_or_default() }
                    DetailItem { label: "Wallet", value: optional_money(detail.wallet_balance) }
                }
            }
            DetailSection { title: "Activity",
                DetailList {
                    DetailItem { label: "Total rides", value: user.total_rides.to_string() }
                    DetailItem { label: "Last ride", value: optional_timestamp(detail.last_ride_at) }
                    DetailItem { label: "Churn risk", value: churn }
                    DetailItem { label: "Saved places", value: places }
                }
            }
            DetailSection { title: "Actions",
                BlockToggle { user_id: user.id.clone(), blocked: user.blocked, table }
            }
        }
    }
}

#[component]
fn BlockToggle(user_id: String, blocked: bool, table: TableHandle<Users>) -> Element {
    let api = use_api();
    let mut busy = use_signal(|| false);
    let mut notice = use_signal(|| Option::<(bool, String)>::None);

    let toggle = move |_: MouseEvent| {
        let api = api.clone();
        let user_id = user_id.clone();
        spawn(async move {
            busy.set(true);
            match api.block_user(&user_id, !blocked).await {
                Ok(message) => {
                    let fallback = if blocked { "User unblocked" } else { "User blocked" };
                    notice.set(Some((true, message.unwrap_or_else(|| fallback.to_string()))));
                    table.reload();
                }
                Err(err) => notice.set(Some((false, err.message))),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "detail-actions",
            Button {
                variant: if blocked { ButtonVariant::Secondary } else { ButtonVariant::Destructive },
                busy: busy(),
                onclick: toggle,
                if blocked { "Unblock user" } else { "Block user" }
            }
        }
        if let Some((success, message)) = notice() {
            InlineNotice { message, success }
        }
    }
}
