//! Follow controller tests: status loading, confirmed toggling, fail-open
//! checks, and busy/disabled guards.

use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use campus_client::{ClientError, ClientEvent};
use campus_shared::{FollowTarget, UserId};

use crate::common;

#[tokio::test]
async fn following_user_renders_and_toggles_to_unfollow() {
    let (server, app) = common::setup_app().await;

    Mock::given(method("POST"))
        .and(path("/api/follows/status/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": { "42": true }
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/follows/user/42/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let controller = app.follow_controller(FollowTarget::User(UserId(42)));
    let mut events = app.events().subscribe();

    assert!(controller.load().await);
    assert!(controller.is_following());

    // Toggling a followed target issues an unfollow and settles to false.
    let now_following = controller.toggle().await.unwrap();
    assert!(!now_following);
    assert!(!controller.is_following());

    match events.recv().await.unwrap() {
        ClientEvent::FollowChanged { target, following } => {
            assert_eq!(target, FollowTarget::User(UserId(42)));
            assert!(!following);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn hashtag_input_is_normalized_for_lookup_and_follow() {
    let (server, app) = common::setup_app().await;

    Mock::given(method("POST"))
        .and(path("/api/follows/status/"))
        .and(body_json(serde_json::json!({
            "users": [],
            "hashtags": ["foo"],
            "universities": [],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "hashtags": { "foo": false }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/follows/hashtag/foo/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    // Raw user input, hash prefix and stray whitespace included.
    let controller = app.follow_controller(FollowTarget::hashtag("  #Foo "));

    assert!(!controller.load().await);
    assert!(controller.toggle().await.unwrap());
}

#[tokio::test]
async fn status_check_failure_fails_open_to_not_following() {
    let (server, app) = common::setup_app().await;

    Mock::given(method("POST"))
        .and(path("/api/follows/status/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let controller = app.follow_controller(FollowTarget::User(UserId(7)));

    assert!(!controller.load().await);
    assert!(!controller.is_following());
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn failed_toggle_reverts_to_settled_state() {
    let (server, app) = common::setup_app().await;

    Mock::given(method("POST"))
        .and(path("/api/follows/status/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": { "7": false }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/follows/user/7/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let controller = app.follow_controller(FollowTarget::User(UserId(7)));
    controller.load().await;

    assert!(controller.toggle().await.is_err());

    // The flip was never confirmed, so nothing changed.
    assert!(!controller.is_following());
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn toggle_is_blocked_while_another_is_in_flight() {
    let (server, app) = common::setup_app().await;

    Mock::given(method("POST"))
        .and(path("/api/follows/status/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": { "7": false }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/follows/user/7/"))
        .respond_with(
            ResponseTemplate::new(200).set_delay(Duration::from_millis(150)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let controller = Arc::new(app.follow_controller(FollowTarget::User(UserId(7))));
    controller.load().await;

    let slow = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.toggle().await })
    };
    tokio::time::sleep(Duration::from_millis(30)).await;

    assert!(matches!(
        controller.toggle().await,
        Err(ClientError::Busy)
    ));

    assert!(slow.await.unwrap().unwrap());
}

#[tokio::test]
async fn toggle_is_blocked_before_first_status_check() {
    let (_server, app) = common::setup_app().await;

    let controller = app.follow_controller(FollowTarget::User(UserId(7)));
    assert!(matches!(
        controller.toggle().await,
        Err(ClientError::Busy)
    ));
}

#[tokio::test]
async fn disabled_controller_rejects_toggle() {
    let (server, app) = common::setup_app().await;

    Mock::given(method("POST"))
        .and(path("/api/follows/status/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let controller = app.follow_controller(FollowTarget::User(UserId(7)));
    controller.load().await;
    controller.set_enabled(false);

    assert!(matches!(
        controller.toggle().await,
        Err(ClientError::Disabled)
    ));
}
