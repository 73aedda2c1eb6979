use client::{Agents, Issues, ListResource};
use dioxus::prelude::*;
use shared_types::{IssueDetail, TableQuery, ISSUE_STATUSES, MAX_PAGE_SIZE};
use shared_ui::{
    Button, DetailGrid, DetailItem, DetailList, DetailSection, FormSelect, InlineNotice,
    PageHeader, PageTitle,
};

use crate::auth::use_api;
use crate::format_helpers::timestamp;
use crate::remote_table::{remote_table, use_remote_table, TableHandle};
use crate::routes::Route;

#[component]
pub fn IssueList(query: String) -> Element {
    let mirror = use_callback(|query: String| {
        navigator().replace(Route::IssueList { query });
    });
    let table = use_remote_table::<Issues>(query, mirror);
    let title = Issues::TITLE;

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "{title}" }
            }
            {remote_table(table, issue_detail)}
        }
    }
}

fn issue_detail(detail: &IssueDetail, table: TableHandle<Issues>) -> Element {
    let issue = &detail.issue;
    let comments: Vec<(String, String, String)> = detail
        .comments
        .iter()
        .map(|c| (c.author.clone(), timestamp(c.created_at), c.body.clone()))
        .collect();

    rsx! {
        DetailGrid {
            DetailSection { title: "Ticket",
                DetailList {
                    DetailItem { label: "Ticket", value: issue.ticket_number.clone() }
                    DetailItem { label: "Subject", value: issue.subject.clone() }
                    DetailItem { label: "Raised by", value: issue.raised_by.clone() }
                    DetailItem { label: "Category", value: issue.category.clone().unwrap_or_default() }
                    DetailItem { label: "Priority", value: client::humanize_status(&issue.priority) }
                    DetailItem { label: "Ride", value: detail.ride_id.clone().unwrap_or_default() }
                    DetailItem { label: "Agent", value: issue.assigned_agent.clone().unwrap_or_default() }
                }
                p { class: "detail-body", "{detail.description}" }
            }
            DetailSection { title: "Comments",
                if comments.is_empty() {
                    p { class: "detail-muted", "No comments yet" }
                }
                for (i, (author, at, body)) in comments.into_iter().enumerate() {
                    div { key: "{i}", class: "detail-comment",
                        div { class: "detail-comment-meta", "{author} · {at}" }
                        p { "{body}" }
                    }
                }
            }
            DetailSection { title: "Actions",
                IssueActions {
                    issue_id: issue.id.clone(),
                    status: issue.status.clone(),
                    table,
                }
            }
        }
    }
}

/// Assign an agent and move the ticket through its workflow.
#[component]
fn IssueActions(issue_id: String, status: String, table: TableHandle<Issues>) -> Element {
    let api = use_api();
    let mut agent_id = use_signal(String::new);
    let mut next_status = use_signal(move || status);
    let mut busy = use_signal(|| false);
    let mut notice = use_signal(|| Option::<(bool, String)>::None);
    let mut agent_error = use_signal(String::new);

    let agents = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                let query = TableQuery::initial(MAX_PAGE_SIZE, Agents::default_sort());
                api.list::<Agents>(&query).await
            }
        }
    });

    let agent_options: Vec<(String, String)> = match &*agents.read() {
        Some(Ok(page)) => std::iter::once((String::new(), "Choose an agent".to_string()))
            .chain(page.rows.iter().map(|a| (a.id.clone(), a.name.clone())))
            .collect(),
        _ => vec![(String::new(), "Loading agents...".to_string())],
    };
    let status_options: Vec<(String, String)> = ISSUE_STATUSES
        .iter()
        .map(|s| (s.to_string(), client::humanize_status(s)))
        .collect();

    let assign = {
        let api = api.clone();
        let issue_id = issue_id.clone();
        move |_: MouseEvent| {
            let api = api.clone();
            let issue_id = issue_id.clone();
            spawn(async move {
                busy.set(true);
                agent_error.set(String::new());
                match api.assign_issue(&issue_id, &agent_id()).await {
                    Ok(message) => {
                        notice.set(Some((true, message.unwrap_or_else(|| "Issue assigned".to_string()))));
                        table.reload();
                    }
                    Err(err) => match err.field("agentId") {
                        Some(msg) => agent_error.set(msg.to_string()),
                        None => notice.set(Some((false, err.message))),
                    },
                }
                busy.set(false);
            });
        }
    };

    let save_status = move |_: MouseEvent| {
        let api = api.clone();
        let issue_id = issue_id.clone();
        spawn(async move {
            busy.set(true);
            match api.update_issue_status(&issue_id, &next_status()).await {
                Ok(message) => {
                    notice.set(Some((true, message.unwrap_or_else(|| "Status updated".to_string()))));
                    table.reload();
                }
                Err(err) => notice.set(Some((false, err.message))),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "detail-actions",
            FormSelect {
                label: "Agent",
                value: agent_id(),
                options: agent_options,
                error: agent_error(),
                onchange: move |evt: FormEvent| agent_id.set(evt.value()),
            }
            Button { busy: busy(), onclick: assign, "Assign" }
            FormSelect {
                label: "Status",
                value: next_status(),
                options: status_options,
                onchange: move |evt: FormEvent| next_status.set(evt.value()),
            }
            Button { busy: busy(), onclick: save_status, "Update status" }
        }
        if let Some((success, message)) = notice() {
            InlineNotice { message, success }
        }
    }
}
