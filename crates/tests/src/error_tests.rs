use crate::common::*;
use client::{ApiClient, AuthContext, Rides, Settlement};
use pretty_assertions::assert_eq;
use shared_types::{ApiConfig, AppErrorKind, TableQuery, GENERIC_SERVER_MESSAGE};

/// Client pointed at a port nothing listens on.
async fn unreachable_api() -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let config = ApiConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 2,
    };
    ApiClient::new(&config, AuthContext::with_token(TOKEN))
}

#[tokio::test]
async fn test_every_request_carries_the_session_token() {
    let backend = test_backend().await;
    let api = backend.api();
    mount::<Rides>(&api, "").await;
    api.metrics_snapshot().await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests.len(), 2);
    for request in requests {
        assert_eq!(request.authorization.as_deref(), Some("Bearer fixture-token"));
    }
}

#[tokio::test]
async fn test_anonymous_client_sends_no_authorization() {
    let backend = test_backend().await;
    let err = backend
        .api_as(AuthContext::anonymous())
        .list::<Rides>(&TableQuery::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ServerError);
    assert_eq!(err.message, "Invalid token");
    assert_eq!(backend.last_request().authorization, None);
}

#[tokio::test]
async fn test_server_message_reaches_the_banner() {
    let backend = test_backend().await;
    let (mut table, source) = mount::<Rides>(&backend.api(), "").await;
    let before = row_ids(&table);

    backend.fail_with(Failure::Message("Database unavailable"));
    let ticket = table.next_page().unwrap();
    assert_eq!(settle_page(&mut table, &source, ticket).await, Settlement::Failed);

    let err = table.error().expect("banner error");
    assert_eq!(err.kind, AppErrorKind::ServerError);
    assert_eq!(err.message, "Database unavailable");
    assert_eq!(row_ids(&table), before);
    assert_eq!(table.page().unwrap().page, 1);
    assert!(!table.is_loading());
}

#[tokio::test]
async fn test_server_error_without_message_is_generic() {
    let backend = test_backend().await;
    let (mut table, source) = mount::<Rides>(&backend.api(), "").await;

    backend.fail_with(Failure::Opaque);
    let ticket = table.reload();
    settle_page(&mut table, &source, ticket).await;

    let err = table.error().unwrap();
    assert_eq!(err.kind, AppErrorKind::ServerError);
    assert_eq!(err.message, GENERIC_SERVER_MESSAGE);
}

#[tokio::test]
async fn test_retry_after_failure_clears_the_banner() {
    let backend = test_backend().await;
    let (mut table, source) = mount::<Rides>(&backend.api(), "").await;

    backend.fail_with(Failure::Message("Database unavailable"));
    let ticket = table.go_to_page(2).unwrap();
    settle_page(&mut table, &source, ticket).await;
    assert!(table.error().is_some());

    backend.recover();
    let ticket = table.reload();
    assert!(table.error().is_none());
    assert_eq!(settle_page(&mut table, &source, ticket).await, Settlement::Applied);
    assert_eq!(table.page().unwrap().page, 2);
    assert_eq!(serials(&table)[0], 11);
}

#[tokio::test]
async fn test_failed_first_load_leaves_table_empty() {
    let backend = test_backend().await;
    backend.fail_with(Failure::Message("Database unavailable"));
    let (table, _) = mount::<Rides>(&backend.api(), "").await;

    assert!(table.page().is_none());
    assert!(table.rendered_rows().is_empty());
    assert_eq!(table.error().unwrap().message, "Database unavailable");
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let api = unreachable_api().await;
    let (table, _) = mount::<Rides>(&api, "").await;

    let err = table.error().expect("banner error");
    assert_eq!(err.kind, AppErrorKind::NetworkError);
    assert!(table.page().is_none());
}

#[tokio::test]
async fn test_unreachable_detail_is_a_failed_row() {
    let backend = test_backend().await;
    let (mut table, _) = mount::<Rides>(&backend.api(), "").await;
    let offline = unreachable_api().await.source::<Rides>();

    let ticket = table.toggle_row("r25").unwrap();
    settle_detail(&mut table, &offline, ticket).await;

    assert!(matches!(
        table.expansion(),
        client::Expansion::Expanded {
            state: client::DetailState::Failed(_),
            ..
        }
    ));
    assert!(table.error().is_none());
}
