use crate::common::*;
use client::{load_page, RemoteTable, Rides, Settlement};
use pretty_assertions::assert_eq;
use shared_types::{parse_date, AppErrorKind, StatusFilter};

#[tokio::test]
async fn test_first_page_numbers_rows_from_one() {
    let backend = test_backend().await;
    let (table, _) = mount::<Rides>(&backend.api(), "").await;

    let slot = table.page().expect("first page loaded");
    assert_eq!(slot.page, 1);
    assert_eq!(slot.total_pages, 3);
    assert_eq!(slot.total_count, Some(25));
    assert_eq!(serials(&table), (1..=10).collect::<Vec<u64>>());
    assert_eq!(row_ids(&table)[0], "r25");
    assert!(!table.is_loading());
}

#[tokio::test]
async fn test_list_request_carries_paging_and_sort() {
    let backend = test_backend().await;
    mount::<Rides>(&backend.api(), "").await;

    let request = backend.last_request();
    assert_eq!(request.path, "/admin/rides");
    let query = request.query.unwrap_or_default();
    assert!(query.contains("page=1"), "query was {query}");
    assert!(query.contains("limit=10"), "query was {query}");
    assert!(query.contains("sortby=createdAt%3Adesc"), "query was {query}");
    assert!(!query.contains("status="), "query was {query}");
}

#[tokio::test]
async fn test_last_page_serials_continue_across_pages() {
    let backend = test_backend().await;
    let (mut table, source) = mount::<Rides>(&backend.api(), "").await;

    let ticket = table.go_to_page(3).unwrap();
    assert_eq!(settle_page(&mut table, &source, ticket).await, Settlement::Applied);

    assert_eq!(serials(&table), vec![21, 22, 23, 24, 25]);
    assert_eq!(row_ids(&table), vec!["r05", "r04", "r03", "r02", "r01"]);
    assert!(table.next_page().is_none());
}

#[tokio::test]
async fn test_status_filter_survives_page_changes() {
    let backend = test_backend().await;
    let (mut table, source) = mount::<Rides>(&backend.api(), "").await;

    table.filters_mut().set_status_filter("COMPLETED");
    let ticket = table.apply().unwrap();
    settle_page(&mut table, &source, ticket).await;
    assert_eq!(table.page().unwrap().total_count, Some(12));
    assert_eq!(table.page().unwrap().total_pages, 2);

    let ticket = table.next_page().unwrap();
    settle_page(&mut table, &source, ticket).await;

    let query = backend.last_request().query.unwrap_or_default();
    assert!(query.contains("status=COMPLETED"), "query was {query}");
    assert!(query.contains("page=2"), "query was {query}");
    assert_eq!(serials(&table), vec![11, 12]);
    assert_eq!(row_ids(&table), vec!["r04", "r02"]);
}

#[tokio::test]
async fn test_search_and_status_combine() {
    let backend = test_backend().await;
    let (mut table, source) = mount::<Rides>(&backend.api(), "").await;

    table.filters_mut().set_search_text("john");
    let ticket = table.apply().unwrap();
    settle_page(&mut table, &source, ticket).await;
    assert_eq!(row_ids(&table), vec!["r25", "r20", "r15", "r10", "r05"]);

    table.filters_mut().set_status_filter("COMPLETED");
    let ticket = table.apply().unwrap();
    settle_page(&mut table, &source, ticket).await;
    assert_eq!(row_ids(&table), vec!["r20", "r10"]);
    assert_eq!(serials(&table), vec![1, 2]);
}

#[tokio::test]
async fn test_date_range_is_inclusive() {
    let backend = test_backend().await;
    let (mut table, source) = mount::<Rides>(&backend.api(), "").await;

    table
        .filters_mut()
        .set_date_range(parse_date("2024-06-01"), parse_date("2024-06-05"));
    let ticket = table.apply().unwrap();
    settle_page(&mut table, &source, ticket).await;

    assert_eq!(table.page().unwrap().total_count, Some(5));
    let query = backend.last_request().query.unwrap_or_default();
    assert!(query.contains("startDate=2024-06-01"), "query was {query}");
    assert!(query.contains("endDate=2024-06-05"), "query was {query}");
}

#[tokio::test]
async fn test_inverted_date_range_never_reaches_backend() {
    let backend = test_backend().await;
    let (mut table, _) = mount::<Rides>(&backend.api(), "").await;
    let before = backend.requests().len();

    table
        .filters_mut()
        .set_date_range(parse_date("2024-06-10"), parse_date("2024-06-01"));
    let err = table.apply().unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field("endDate").is_some());
    assert_eq!(backend.requests().len(), before);
    assert_eq!(table.page().unwrap().page, 1);
}

#[tokio::test]
async fn test_superseded_response_is_discarded() {
    let backend = test_backend().await;
    let (mut table, source) = mount::<Rides>(&backend.api(), "").await;

    let to_two = table.go_to_page(2).unwrap();
    let to_three = table.go_to_page(3).unwrap();
    let (late, fresh) = tokio::join!(load_page(&source, to_two), load_page(&source, to_three));

    assert_eq!(table.settle_page(fresh), Settlement::Applied);
    assert_eq!(table.settle_page(late), Settlement::Stale);
    assert_eq!(table.page().unwrap().page, 3);
    assert_eq!(serials(&table)[0], 21);
}

#[tokio::test]
async fn test_cancelled_request_changes_nothing() {
    let backend = test_backend().await;
    let (mut table, source) = mount::<Rides>(&backend.api(), "").await;
    let before = row_ids(&table);

    let ticket = table.next_page().unwrap();
    table.cancel();
    assert!(!table.is_loading());

    assert_eq!(settle_page(&mut table, &source, ticket).await, Settlement::Stale);
    assert_eq!(row_ids(&table), before);
    assert!(table.error().is_none());
}

#[tokio::test]
async fn test_url_query_restores_table() {
    let backend = test_backend().await;
    let (table, _) = mount::<Rides>(&backend.api(), "?status=COMPLETED&page=2").await;

    assert_eq!(table.filters().status(), &StatusFilter::Only("COMPLETED".into()));
    assert_eq!(table.page().unwrap().page, 2);
    assert_eq!(serials(&table), vec![11, 12]);
    assert_eq!(table.url_query(), "status=COMPLETED&page=2");

    let query = backend.last_request().query.unwrap_or_default();
    assert!(query.contains("status=COMPLETED"), "query was {query}");
}

#[tokio::test]
async fn test_unknown_url_values_fall_back_to_defaults() {
    let backend = test_backend().await;
    let (table, _) = mount::<Rides>(&backend.api(), "status=LOST&sortby=pickup:asc&page=x").await;

    assert_eq!(table.applied(), &RemoteTable::<Rides>::defaults(10));
    assert_eq!(table.url_query(), "");
    assert_eq!(table.page().unwrap().total_count, Some(25));
}

#[tokio::test]
async fn test_fare_header_sorts_on_the_server() {
    let backend = test_backend().await;
    let (mut table, source) = mount::<Rides>(&backend.api(), "").await;

    let ticket = table.toggle_sort("fare").unwrap();
    settle_page(&mut table, &source, ticket).await;
    assert_eq!(row_ids(&table)[0], "r25");
    let query = backend.last_request().query.unwrap_or_default();
    assert!(query.contains("sortby=fare%3Adesc"), "query was {query}");

    let ticket = table.toggle_sort("fare").unwrap();
    settle_page(&mut table, &source, ticket).await;
    assert_eq!(row_ids(&table)[0], "r01");
    assert_eq!(table.url_query(), "sortby=fare%3Aasc");
}

#[tokio::test]
async fn test_reset_clears_filters_and_url() {
    let backend = test_backend().await;
    let (mut table, source) = mount::<Rides>(&backend.api(), "status=CANCELLED&page=2").await;

    let ticket = table.reset_all();
    settle_page(&mut table, &source, ticket).await;

    assert_eq!(table.filters().status(), &StatusFilter::All);
    assert_eq!(table.page().unwrap().total_count, Some(25));
    assert_eq!(table.page().unwrap().page, 1);
    assert_eq!(table.url_query(), "");
}

#[tokio::test]
async fn test_empty_result_still_has_one_page() {
    let backend = test_backend().await;
    let (mut table, source) = mount::<Rides>(&backend.api(), "").await;

    table.filters_mut().set_search_text("nobody rides here");
    let ticket = table.apply().unwrap();
    settle_page(&mut table, &source, ticket).await;

    let slot = table.page().unwrap();
    assert!(slot.is_empty());
    assert_eq!(slot.total_pages, 1);
    assert!(table.rendered_rows().is_empty());
    assert!(table.next_page().is_none());
}

#[tokio::test]
async fn test_url_page_past_the_end_lands_on_last_page() {
    let backend = test_backend().await;
    let (mut table, _) = mount::<Rides>(&backend.api(), "page=9").await;

    let slot = table.page().unwrap();
    assert_eq!(slot.page, 3);
    assert_eq!(slot.total_pages, 3);
    assert_eq!(serials(&table), vec![21, 22, 23, 24, 25]);
    assert_eq!(table.url_query(), "page=3");
    assert_eq!(table.prev_page().unwrap().key().page, 2);

    let pages: Vec<String> = backend
        .requests()
        .into_iter()
        .filter_map(|r| r.query)
        .collect();
    assert_eq!(pages.len(), 2);
    assert!(pages[0].contains("page=9"), "query was {}", pages[0]);
    assert!(pages[1].contains("page=3"), "query was {}", pages[1]);
}

#[tokio::test]
async fn test_reload_after_rows_vanish_steps_back_a_page() {
    let backend = test_backend().await;
    let (mut table, source) = mount::<Rides>(&backend.api(), "").await;
    let ticket = table.go_to_page(3).unwrap();
    settle_page(&mut table, &source, ticket).await;

    backend.state().rides.truncate(18);
    let ticket = table.reload();
    let Settlement::Clamped(last) = settle_page(&mut table, &source, ticket).await else {
        panic!("expected the reload to be clamped");
    };
    assert_eq!(table.page().unwrap().page, 3);

    assert_eq!(settle_page(&mut table, &source, last).await, Settlement::Applied);
    let slot = table.page().unwrap();
    assert_eq!(slot.page, 2);
    assert_eq!(slot.total_pages, 2);
    assert_eq!(serials(&table), (11..=18).collect::<Vec<u64>>());
    assert!(table.next_page().is_none());
}

#[tokio::test]
async fn test_failed_filter_is_not_mirrored() {
    let backend = test_backend().await;
    let (mut table, source) = mount::<Rides>(&backend.api(), "").await;

    backend.fail_with(Failure::Message("Database unavailable"));
    table.filters_mut().set_status_filter("COMPLETED");
    let ticket = table.apply().unwrap();
    assert_eq!(settle_page(&mut table, &source, ticket).await, Settlement::Failed);

    assert_eq!(table.url_query(), "");
    assert_eq!(table.page().unwrap().total_count, Some(25));
    assert_eq!(table.filters().status(), &StatusFilter::Only("COMPLETED".into()));

    backend.recover();
    let ticket = table.next_page().unwrap();
    settle_page(&mut table, &source, ticket).await;
    let query = backend.last_request().query.unwrap_or_default();
    assert!(!query.contains("status="), "query was {query}");
    assert_eq!(serials(&table)[0], 11);
}
