use client::metrics::follow_feed;
use client::LiveBoard;
use dioxus::prelude::*;
use shared_ui::{
    Badge, BadgeVariant, ErrorBanner, PageActions, PageHeader, PageTitle, SkeletonRows, StatCard,
};

use crate::auth::use_api;
use crate::format_helpers::money;

/// Live operations overview: a REST snapshot, then long-poll updates.
#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let mut board = use_signal(|| Option::<LiveBoard>::None);
    let mut feed_error = use_signal(|| Option::<String>::None);
    let live = client::config().metrics.live;

    use_coroutine(move |_: UnboundedReceiver<()>| {
        let api = api.clone();
        async move {
            let snapshot = match api.metrics_snapshot().await {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    feed_error.set(Some(err.message));
                    return;
                }
            };
            let cursor = snapshot.cursor;
            board.set(Some(LiveBoard::from_snapshot(snapshot)));
            if !live {
                return;
            }

            let result = follow_feed(&api, cursor, move |batch| {
                let mut guard = board.write();
                match guard.as_mut() {
                    Some(current) => {
                        current.apply_batch(&batch);
                        current.is_attached()
                    }
                    None => false,
                }
            })
            .await;
            if let Err(err) = result {
                tracing::warn!(error = %err, "live metrics feed stopped");
                feed_error.set(Some(err.message));
            }
        }
    });

    use_drop(move || {
        if let Ok(mut board) = board.try_write() {
            if let Some(current) = board.as_mut() {
                current.detach();
            }
        }
    });

    let streaming = live && feed_error.read().is_none();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Dashboard" }
                PageActions {
                    if streaming {
                        Badge { variant: BadgeVariant::Success, "Live" }
                    } else {
                        Badge { variant: BadgeVariant::Secondary, "Paused" }
                    }
                }
            }

            if let Some(message) = feed_error() {
                ErrorBanner {
                    message,
                    on_dismiss: move |_| feed_error.set(None),
                }
            }

            match board.read().as_ref().map(|b| b.metrics().clone()) {
                None => rsx! { SkeletonRows { rows: 2 } },
                Some(metrics) => rsx! {
                    div { class: "stat-grid",
                        StatCard { label: "Online drivers", value: metrics.online_drivers.to_string() }
                        StatCard { label: "Active rides", value: metrics.active_rides.to_string() }
                        StatCard { label: "Completed today", value: metrics.completed_today.to_string() }
                        StatCard { label: "Cancelled today", value: metrics.cancelled_today.to_string() }
                        StatCard { label: "Open issues", value: metrics.open_issues.to_string() }
                        StatCard { label: "Revenue today", value: money(metrics.revenue_today) }
                    }
                },
            }
        }
    }
}
