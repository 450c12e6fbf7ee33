//! Session lifecycle tests: login persistence, bearer propagation,
//! refresh, and logout semantics.

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common;

fn stored_tokens(app: &campus_client::App) -> Option<campus_shared::AuthTokens> {
    app.store().lock().unwrap().load_tokens().unwrap()
}

#[tokio::test]
async fn login_installs_and_persists_tokens() {
    let (server, app) = common::setup_app().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .and(body_json(serde_json::json!({
            "email": "sam@uni.edu",
            "password": "hunter2",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "acc-1",
            "refresh_token": "ref-1",
        })))
        .mount(&server)
        .await;

    assert!(!app.session().is_logged_in());

    app.session()
        .login(app.api(), "sam@uni.edu", "hunter2")
        .await
        .unwrap();

    assert!(app.session().is_logged_in());
    assert_eq!(
        stored_tokens(&app),
        Some(campus_shared::AuthTokens::new("acc-1", "ref-1"))
    );
}

#[tokio::test]
async fn requests_after_login_carry_the_new_bearer() {
    let (server, app) = common::setup_app().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "acc-1",
            "refresh_token": "ref-1",
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/notifications/"))
        .and(header("authorization", "Bearer acc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [],
            "unread_count": 0,
            "has_more": false,
        })))
        .expect(1)
        .mount(&server)
        .await;

    app.session()
        .login(app.api(), "sam@uni.edu", "hunter2")
        .await
        .unwrap();

    // Token resolved at call time: no client rebuild needed.
    app.inbox().refresh().await;
    assert!(app.inbox().snapshot().error.is_none());
}

#[tokio::test]
async fn refresh_swaps_the_token_pair() {
    let (server, app) = common::setup_app().await;

    // Persist a pair first, then restore a session from it.
    app.store()
        .lock()
        .unwrap()
        .save_tokens(&campus_shared::AuthTokens::new("acc-1", "ref-1"))
        .unwrap();
    let session = campus_client::AuthSession::restore(app.store().clone()).unwrap();
    assert!(session.is_logged_in());

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh/"))
        .and(body_json(serde_json::json!({ "refresh_token": "ref-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "acc-2",
            "refresh_token": "ref-2",
        })))
        .mount(&server)
        .await;

    session.refresh(app.api()).await.unwrap();

    assert_eq!(
        session.tokens().map(|t| t.access_token),
        Some("acc-2".to_string())
    );
    assert_eq!(
        stored_tokens(&app),
        Some(campus_shared::AuthTokens::new("acc-2", "ref-2"))
    );
}

#[tokio::test]
async fn logout_clears_local_state_even_when_server_fails() {
    let (server, app) = common::setup_app().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "acc-1",
            "refresh_token": "ref-1",
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    app.session()
        .login(app.api(), "sam@uni.edu", "hunter2")
        .await
        .unwrap();

    app.session().logout(app.api()).await.unwrap();

    assert!(!app.session().is_logged_in());
    assert_eq!(stored_tokens(&app), None);
}

#[tokio::test]
async fn refresh_without_session_is_rejected() {
    let (_server, app) = common::setup_app().await;

    let err = app.session().refresh(app.api()).await.unwrap_err();
    assert!(matches!(err, campus_client::ClientError::NotLoggedIn));
}
