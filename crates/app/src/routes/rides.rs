use client::{ListResource, Rides};
use dioxus::prelude::*;
use shared_types::RideDetail;
use shared_ui::{DetailGrid, DetailItem, DetailList, DetailSection, PageHeader, PageTitle};

use crate::format_helpers::{distance_km, duration_minutes, money, timestamp};
use crate::remote_table::{remote_table, use_remote_table, TableHandle};
use crate::routes::Route;

#[component]
pub fn RideList(query: String) -> Element {
    let mirror = use_callback(|query: String| {
        navigator().replace(Route::RideList { query });
    });
    let table = use_remote_table::<Rides>(query, mirror);
    let title = Rides::TITLE;

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "{title}" }
            }
            {remote_table(table, ride_detail)}
        }
    }
}

fn ride_detail(detail: &RideDetail, _table: TableHandle<Rides>) -> Element {
    let ride = &detail.ride;
    let timeline: Vec<(String, String)> = detail
        .timeline
        .iter()
        .map(|event| (client::humanize_status(&event.status), timestamp(event.at)))
        .collect();
    let no_timeline = timeline.is_empty();

    rsx! {
        DetailGrid {
            DetailSection { title: "Trip",
                DetailList {
                    DetailItem { label: "Pickup", value: ride.pickup.clone() }
                    DetailItem { label: "Drop-off", value: ride.dropoff.clone() }
                    DetailItem { label: "Distance", value: distance_km(detail.distance_km) }
                    DetailItem { label: "Duration", value: duration_minutes(detail.duration_minutes) }
                    DetailItem { label: "Fare", value: money(ride.fare) }
                    DetailItem { label: "Payment", value: detail.payment_method.clone().unwrap_or_default() }
                }
            }
            DetailSection { title: "People",
                DetailList {
                    DetailItem { label: "Rider", value: ride.rider_name.clone() }
                    DetailItem { label: "Rider phone", value: detail.rider_phone.clone().unwrap_or_default() }
                    DetailItem { label: "Driver", value: ride.driver_name.clone().unwrap_or_default() }
                    DetailItem { label: "Driver phone", value: detail.driver_phone.clone().unwrap_or_default() }
                    DetailItem { label: "Vehicle", value: detail.vehicle_number.clone().unwrap_or_default() }
                }
            }
            DetailSection { title: "Timeline",
                if no_timeline {
                    p { class: "detail-muted", "No status changes recorded" }
                }
                ol { class: "detail-timeline",
                    for (i, (status, at)) in timeline.into_iter().enumerate() {
                        li { key: "{i}",
                            span { class: "detail-timeline-status", "{status}" }
                            span { class: "detail-timeline-at", "{at}" }
                        }
                    }
                }
            }
        }
    }
}
