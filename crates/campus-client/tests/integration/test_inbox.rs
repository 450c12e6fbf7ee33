//! Inbox synchronization tests: pagination, read-state reconciliation,
//! and staleness handling.

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use campus_client::ClientEvent;

use crate::common;

#[tokio::test]
async fn refresh_replaces_list_and_resets_cursor() {
    let (server, app) = common::setup_app().await;
    common::mount_page(
        &server,
        1,
        serde_json::json!([
            common::notification_json(2, false),
            common::notification_json(1, false),
        ]),
        2,
        true,
    )
    .await;
    common::mount_page(
        &server,
        2,
        serde_json::json!([common::notification_json(0, true)]),
        2,
        false,
    )
    .await;

    let inbox = app.inbox();

    inbox.refresh().await;
    assert_eq!(inbox.snapshot().items.len(), 2);

    inbox.load_more().await;
    let grown = inbox.snapshot();
    assert_eq!(grown.items.len(), 3);
    assert!(!grown.has_more);

    // Refresh replaces, never appends, and rewinds the cursor.
    inbox.refresh().await;
    let replaced = inbox.snapshot();
    assert_eq!(replaced.items.len(), 2);
    assert!(replaced.has_more);

    // The cursor is back at 1: the next load_more re-fetches page 2.
    inbox.load_more().await;
    assert_eq!(inbox.snapshot().items.len(), 3);
}

#[tokio::test]
async fn refresh_takes_unread_count_from_server() {
    let (server, app) = common::setup_app().await;
    common::mount_page(
        &server,
        1,
        serde_json::json!([common::notification_json(1, false)]),
        7,
        false,
    )
    .await;

    let mut events = app.events().subscribe();
    app.inbox().refresh().await;

    assert_eq!(app.inbox().unread_count(), 7);
    match events.recv().await.unwrap() {
        ClientEvent::InboxUpdated { unread_count } => assert_eq!(unread_count, 7),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn load_more_is_noop_when_no_more_pages() {
    let (server, app) = common::setup_app().await;
    common::mount_page(
        &server,
        1,
        serde_json::json!([common::notification_json(1, false)]),
        1,
        false,
    )
    .await;

    // Page 2 must never be requested.
    Mock::given(method("GET"))
        .and(path("/api/notifications/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let inbox = app.inbox();
    inbox.refresh().await;
    inbox.load_more().await;

    assert_eq!(inbox.snapshot().items.len(), 1);
}

#[tokio::test]
async fn load_more_is_noop_while_fetch_in_flight() {
    let (server, app) = common::setup_app().await;
    common::mount_page(
        &server,
        1,
        serde_json::json!([common::notification_json(2, false)]),
        1,
        true,
    )
    .await;
    common::mount_page_with_delay(
        &server,
        2,
        serde_json::json!([common::notification_json(1, true)]),
        1,
        false,
        Some(Duration::from_millis(150)),
    )
    .await;

    let inbox = app.inbox();
    inbox.refresh().await;

    // Two concurrent calls: the second sees the loading flag and bows out.
    tokio::join!(inbox.load_more(), inbox.load_more());

    let requests = server.received_requests().await.unwrap();
    let page2_calls = requests
        .iter()
        .filter(|r| r.url.query().unwrap_or("").contains("page=2"))
        .count();
    assert_eq!(page2_calls, 1);
    assert_eq!(inbox.snapshot().items.len(), 2);
}

#[tokio::test]
async fn cursor_does_not_advance_past_an_empty_page() {
    let (server, app) = common::setup_app().await;
    common::mount_page(
        &server,
        1,
        serde_json::json!([common::notification_json(1, false)]),
        1,
        true,
    )
    .await;
    // Server claims more, then returns an empty page that closes the list.
    common::mount_page(&server, 2, serde_json::json!([]), 1, false).await;

    let inbox = app.inbox();
    inbox.refresh().await;
    inbox.load_more().await;

    let snapshot = inbox.snapshot();
    assert_eq!(snapshot.items.len(), 1);
    assert!(!snapshot.has_more);
}

#[tokio::test]
async fn mark_read_decrements_by_previously_unread_matches() {
    let (server, app) = common::setup_app().await;
    common::mount_page(
        &server,
        1,
        serde_json::json!([
            common::notification_json(3, false),
            common::notification_json(2, false),
            common::notification_json(1, true),
        ]),
        2,
        false,
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/api/notifications/mark-read/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let inbox = app.inbox();
    inbox.refresh().await;

    // id 1 is already read and id 99 is not held locally: only id 3 counts.
    inbox.mark_read(&[3, 1, 99]).await.unwrap();
    assert_eq!(inbox.unread_count(), 1);

    let snapshot = inbox.snapshot();
    assert!(snapshot.items.iter().find(|n| n.id == 3).unwrap().read);
    assert!(!snapshot.items.iter().find(|n| n.id == 2).unwrap().read);

    // Marking the same id again flips nothing.
    inbox.mark_read(&[3]).await.unwrap();
    assert_eq!(inbox.unread_count(), 1);
}

#[tokio::test]
async fn mark_read_floors_unread_count_at_zero() {
    let (server, app) = common::setup_app().await;
    // Server-reported unread count is lower than the locally unread items.
    common::mount_page(
        &server,
        1,
        serde_json::json!([
            common::notification_json(2, false),
            common::notification_json(1, false),
        ]),
        1,
        false,
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/api/notifications/mark-read/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let inbox = app.inbox();
    inbox.refresh().await;
    inbox.mark_read(&[1, 2]).await.unwrap();

    assert_eq!(inbox.unread_count(), 0);
}

#[tokio::test]
async fn mark_read_failure_propagates_and_leaves_state_untouched() {
    let (server, app) = common::setup_app().await;
    common::mount_page(
        &server,
        1,
        serde_json::json!([common::notification_json(1, false)]),
        1,
        false,
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/api/notifications/mark-read/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let inbox = app.inbox();
    inbox.refresh().await;

    assert!(inbox.mark_read(&[1]).await.is_err());

    // Remote call precedes local mutation: nothing flipped.
    let snapshot = inbox.snapshot();
    assert_eq!(snapshot.unread_count, 1);
    assert!(!snapshot.items[0].read);
}

#[tokio::test]
async fn mark_all_read_clears_everything() {
    let (server, app) = common::setup_app().await;
    common::mount_page(
        &server,
        1,
        serde_json::json!([
            common::notification_json(2, false),
            common::notification_json(1, true),
        ]),
        1,
        false,
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/api/notifications/mark-all-read/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let inbox = app.inbox();
    inbox.refresh().await;
    inbox.mark_all_read().await.unwrap();

    let snapshot = inbox.snapshot();
    assert_eq!(snapshot.unread_count, 0);
    assert!(snapshot.items.iter().all(|n| n.read));
}

#[tokio::test]
async fn stale_load_more_is_discarded_after_refresh() {
    let (server, app) = common::setup_app().await;
    common::mount_page(
        &server,
        1,
        serde_json::json!([
            common::notification_json(2, false),
            common::notification_json(1, false),
        ]),
        2,
        true,
    )
    .await;
    common::mount_page_with_delay(
        &server,
        2,
        serde_json::json!([common::notification_json(0, true)]),
        2,
        false,
        Some(Duration::from_millis(200)),
    )
    .await;

    let inbox = app.inbox().clone();
    inbox.refresh().await;

    // Kick off a slow page-2 fetch, then refresh while it is in flight.
    let slow = {
        let inbox = inbox.clone();
        tokio::spawn(async move { inbox.load_more().await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    inbox.refresh().await;
    slow.await.unwrap();

    // The late page-2 response must not have been appended.
    let snapshot = inbox.snapshot();
    assert_eq!(snapshot.items.len(), 2);
}

#[tokio::test]
async fn refresh_failure_is_recorded_not_thrown() {
    let (server, app) = common::setup_app().await;
    Mock::given(method("GET"))
        .and(path("/api/notifications/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let inbox = app.inbox();
    inbox.refresh().await;

    let snapshot = inbox.snapshot();
    assert!(snapshot.error.is_some());
    assert!(snapshot.items.is_empty());
    assert!(!snapshot.refreshing);
}
