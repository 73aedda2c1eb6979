use crate::common::*;
use client::metrics::follow_feed;
use client::{AuthContext, LiveBoard};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, MetricsUpdate};

fn drivers(n: u32) -> MetricsUpdate {
    MetricsUpdate {
        online_drivers: Some(n),
        ..MetricsUpdate::default()
    }
}

fn rides(n: u32) -> MetricsUpdate {
    MetricsUpdate {
        active_rides: Some(n),
        ..MetricsUpdate::default()
    }
}

#[tokio::test]
async fn test_snapshot_seeds_the_board() {
    let backend = test_backend().await;
    let snapshot = backend.api().metrics_snapshot().await.unwrap();
    let board = LiveBoard::from_snapshot(snapshot);

    assert_eq!(board.metrics().online_drivers, 40);
    assert_eq!(board.metrics().revenue_today, 8120.5);
    assert_eq!(board.cursor(), 0);
    assert!(board.is_attached());
}

#[tokio::test]
async fn test_feed_events_merge_last_write_wins() {
    let backend = test_backend().await;
    let api = backend.api();

    let mut board = LiveBoard::from_snapshot(api.metrics_snapshot().await.unwrap());
    backend.state().feed = vec![drivers(41), rides(13), drivers(44)];
    let mut polls = 0;
    follow_feed(&api, board.cursor(), |batch| {
        polls += 1;
        board.apply_batch(&batch) > 0
    })
    .await
    .unwrap();

    assert_eq!(polls, 2);
    assert_eq!(board.cursor(), 3);
    assert_eq!(board.metrics().online_drivers, 44);
    assert_eq!(board.metrics().active_rides, 13);
    assert_eq!(board.metrics().completed_today, 310);
}

#[tokio::test]
async fn test_feed_resumes_from_cursor() {
    let backend = test_backend().await;
    let api = backend.api();

    let mut board = LiveBoard::from_snapshot(api.metrics_snapshot().await.unwrap());
    backend.state().feed = vec![drivers(41), drivers(42)];
    follow_feed(&api, board.cursor(), |batch| board.apply_batch(&batch) > 0)
        .await
        .unwrap();
    assert_eq!(board.cursor(), 2);

    backend.state().feed.push(rides(20));
    follow_feed(&api, board.cursor(), |batch| board.apply_batch(&batch) > 0)
        .await
        .unwrap();

    assert_eq!(board.cursor(), 3);
    assert_eq!(board.metrics().online_drivers, 42);
    assert_eq!(board.metrics().active_rides, 20);
    assert!(backend
        .requests()
        .iter()
        .all(|r| r.path.starts_with("/admin/metrics")));
}

#[tokio::test]
async fn test_detached_board_stops_the_feed() {
    let backend = test_backend().await;
    let api = backend.api();

    let mut board = LiveBoard::from_snapshot(api.metrics_snapshot().await.unwrap());
    backend.state().feed.push(drivers(41));
    follow_feed(&api, board.cursor(), |batch| {
        board.apply_batch(&batch);
        board.detach();
        board.is_attached()
    })
    .await
    .unwrap();

    assert_eq!(board.metrics().online_drivers, 41);
    assert_eq!(backend.requests().len(), 2);
}

#[tokio::test]
async fn test_events_older_than_the_snapshot_are_not_replayed() {
    let backend = test_backend().await;
    let api = backend.api();
    backend.state().feed = vec![drivers(30), rides(2)];

    let mut board = LiveBoard::from_snapshot(api.metrics_snapshot().await.unwrap());
    assert_eq!(board.cursor(), 2);
    assert_eq!(board.metrics().online_drivers, 40);

    backend.state().feed.push(rides(14));
    follow_feed(&api, board.cursor(), |batch| board.apply_batch(&batch) > 0)
        .await
        .unwrap();

    assert_eq!(board.cursor(), 3);
    assert_eq!(board.metrics().online_drivers, 40);
    assert_eq!(board.metrics().active_rides, 14);
    let polls = backend
        .requests()
        .into_iter()
        .filter(|r| r.path == "/admin/metrics/live")
        .count();
    assert_eq!(polls, 2);
}

#[tokio::test]
async fn test_rejected_poll_ends_the_feed() {
    let backend = test_backend().await;
    let expired = backend.api_as(AuthContext::with_token("expired"));

    let err = follow_feed(&expired, 0, |_| true).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ServerError);
    assert_eq!(err.message, "Invalid token");
}
