use client::{Agents, ListResource};
use dioxus::prelude::*;
use shared_types::AgentDetail;
use shared_ui::{DetailGrid, DetailItem, DetailList, DetailSection, PageHeader, PageTitle};

use crate::remote_table::{remote_table, use_remote_table, TableHandle};
use crate::routes::Route;

#[component]
pub fn AgentList(query: String) -> Element {
    let mirror = use_callback(|query: String| {
        navigator().replace(Route::AgentList { query });
    });
    let table = use_remote_table::<Agents>(query, mirror);
    let title = Agents::TITLE;

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "{title}" }
            }
            {remote_table(table, agent_detail)}
        }
    }
}

fn agent_detail(detail: &AgentDetail, _table: TableHandle<Agents>) -> Element {
    let agent = &detail.agent;
    rsx! {
        DetailGrid {
            DetailSection { title: "Agent",
                DetailList {
                    DetailItem { label: "Name", value: agent.name.clone() }
                    DetailItem { label: "Email", value: agent.email.clone() }
                    DetailItem { label: "Open tickets", value: agent.open_tickets.to_string() }
                    DetailItem { label: "Resolved tickets", value: detail.resolved_tickets.to_string() }
                    DetailItem { label: "Recent tickets", value: detail.recent_ticket_numbers.join(", ") }
                }
            }
        }
    }
}
