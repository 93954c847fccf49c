use chrono::{Duration, Utc};

use miniauth::domain::{bearer, RefreshResponse};

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_same_token_when_far_from_expiry() {
    let app = TestApp::new().await;
    let token = app.issue_token(Duration::hours(2));

    let response = app.post_refresh(Some(bearer(&token))).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: RefreshResponse = response.json().await.unwrap();
    assert_eq!(body.token, token);
}

#[tokio::test]
async fn should_return_new_token_near_expiry() {
    let app = TestApp::new().await;
    let token = app.issue_token(Duration::minutes(1));

    let response = app.post_refresh(Some(bearer(&token))).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: RefreshResponse = response.json().await.unwrap();
    assert_ne!(body.token, token);

    let claims = app
        .token_service
        .decode(&bearer(&body.token))
        .expect("reissued token should decode");
    assert!(claims.exp.unwrap() > (Utc::now() + Duration::hours(23)).timestamp());
}

#[tokio::test]
async fn should_return_401_for_expired_token() {
    let app = TestApp::new().await;
    let token = app.issue_token(Duration::minutes(-10));

    let response = app.post_refresh(Some(bearer(&token))).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_400_without_bearer_scheme() {
    let app = TestApp::new().await;
    let token = app.issue_token(Duration::minutes(1));

    let response = app.post_refresh(Some(token)).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn should_return_400_without_header() {
    let app = TestApp::new().await;

    let response = app.post_refresh(None).await;

    assert_eq!(response.status().as_u16(), 400);
}
