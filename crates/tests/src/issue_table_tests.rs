use crate::common::*;
use client::{DetailState, Expansion, Issues};
use pretty_assertions::assert_eq;
use serde_json::Value;

#[tokio::test]
async fn test_issue_search_posts_query_as_json() {
    let backend = test_backend().await;
    mount::<Issues>(&backend.api(), "status=OPEN").await;

    let request = backend.last_request();
    assert_eq!(request.path, "/admin/issues/search");
    let body = request.body.expect("search body");
    assert_eq!(body["page"], Value::from(1));
    assert_eq!(body["limit"], Value::from(10));
    assert_eq!(body["status"], Value::from("OPEN"));
    assert_eq!(body["sortby"], Value::from("createdAt:desc"));
    assert!(body.get("search").is_none());
}

#[tokio::test]
async fn test_issue_list_without_total_count() {
    let backend = test_backend().await;
    let (table, _) = mount::<Issues>(&backend.api(), "").await;

    let slot = table.page().unwrap();
    assert_eq!(slot.total_count, None);
    assert_eq!(slot.total_pages, 2);
    assert_eq!(slot.summary(), "Page 1 of 2");
    assert_eq!(row_ids(&table)[0], "i12");
}

#[tokio::test]
async fn test_second_issue_page_numbers_continue() {
    let backend = test_backend().await;
    let (mut table, source) = mount::<Issues>(&backend.api(), "").await;

    let ticket = table.next_page().unwrap();
    settle_page(&mut table, &source, ticket).await;

    assert_eq!(serials(&table), vec![11, 12]);
    assert_eq!(row_ids(&table), vec!["i02", "i01"]);
}

#[tokio::test]
async fn test_priority_header_sorts_urgent_first() {
    let backend = test_backend().await;
    let (mut table, source) = mount::<Issues>(&backend.api(), "").await;

    let ticket = table.toggle_sort("priority").unwrap();
    settle_page(&mut table, &source, ticket).await;

    let first = &table.page().unwrap().rows[0];
    assert_eq!(first.priority, "URGENT");
    let body = backend.last_request().body.unwrap();
    assert_eq!(body["sortby"], Value::from("priority:desc"));
}

#[tokio::test]
async fn test_issue_detail_includes_description() {
    let backend = test_backend().await;
    let (mut table, source) = mount::<Issues>(&backend.api(), "").await;

    let ticket = table.toggle_row("i03").unwrap();
    settle_detail(&mut table, &source, ticket).await;

    match table.expansion() {
        Expansion::Expanded {
            state: DetailState::Loaded(detail),
            ..
        } => {
            assert_eq!(detail.issue.ticket_number, "TCK-1003");
            assert_eq!(detail.description, "Charged twice for the same trip");
            assert_eq!(detail.ride_id.as_deref(), Some("r01"));
        }
        other => panic!("expected loaded detail, got {other:?}"),
    }
    assert_eq!(backend.last_request().path, "/admin/issues/i03");
}
