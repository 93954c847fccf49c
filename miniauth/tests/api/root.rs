use chrono::Duration;

use miniauth::domain::bearer;
use miniauth::utils::Config;
use miniauth::SigningMethod;

use crate::helpers::{TestApp, TEST_TOKEN_KEY};

#[tokio::test]
async fn should_return_403_without_header() {
    let app = TestApp::new().await;

    let response = app.get_root(None).await;

    assert_eq!(response.status().as_u16(), 403);
    assert_eq!(response.text().await.unwrap(), "invalid token");
}

#[tokio::test]
async fn should_return_403_for_invalid_token() {
    let app = TestApp::new().await;

    let response = app
        .get_root(Some(("Authorization", bearer("invalid.token.here"))))
        .await;

    assert_eq!(response.status().as_u16(), 403);
}

#[tokio::test]
async fn should_return_403_for_expired_token() {
    let app = TestApp::new().await;
    let token = app.issue_token(Duration::minutes(-10));

    let response = app.get_root(Some(("Authorization", bearer(&token)))).await;

    assert_eq!(response.status().as_u16(), 403);
}

#[tokio::test]
async fn should_return_403_without_bearer_scheme() {
    let app = TestApp::new().await;
    let token = app.issue_token(Duration::hours(1));

    let response = app.get_root(Some(("Authorization", token))).await;

    assert_eq!(response.status().as_u16(), 403);
}

#[tokio::test]
async fn should_return_200_for_valid_token() {
    let app = TestApp::new().await;
    let token = app.issue_token(Duration::hours(1));

    let response = app.get_root(Some(("Authorization", bearer(&token)))).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "authorized");
}

#[tokio::test]
async fn should_read_configured_header_name() {
    let config =
        Config::new(SigningMethod::HS256, TEST_TOKEN_KEY).with_authorization_header("X-Auth-Token");
    let app = TestApp::with_config(config).await;
    let token = app.issue_token(Duration::hours(1));

    let response = app
        .get_root(Some(("Authorization", bearer(&token))))
        .await;
    assert_eq!(response.status().as_u16(), 403);

    let response = app.get_root(Some(("X-Auth-Token", bearer(&token)))).await;
    assert_eq!(response.status().as_u16(), 200);
}
