use std::sync::Arc;

use chrono::Duration;
use reqwest::Client;
use tokio::spawn;
use uuid::Uuid;

use miniauth::app_state::AppState;
use miniauth::utils::Config;
use miniauth::{Application, Claims, SigningMethod, TokenService};

pub const TEST_TOKEN_KEY: &[u8] = b"api-tests-signing-key";

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub token_service: TokenService,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(Config::new(SigningMethod::HS512, TEST_TOKEN_KEY)).await
    }

    pub async fn with_config(config: Config) -> Self {
        let app_state = AppState::new(Arc::new(config));
        let token_service = app_state.token_service.clone();

        let app = Application::build(app_state, "127.0.0.1:0")
            .await
            .expect("Failed to build app");
        let address = app.address.clone();

        spawn(async move {
            if let Err(e) = app.run().await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
            token_service,
        }
    }

    pub fn issue_token(&self, lifetime: Duration) -> String {
        let claims = Claims::new()
            .with_data("uid", Uuid::new_v4().to_string())
            .with_subject("api test")
            .expires_in(lifetime);
        self.token_service
            .generate(&claims)
            .expect("Failed to issue token")
    }

    pub async fn get_root(&self, header: Option<(&str, String)>) -> reqwest::Response {
        let mut request = self.http_client.get(&self.address);
        if let Some((name, value)) = header {
            request = request.header(name, value);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn post_refresh(&self, authorization: Option<String>) -> reqwest::Response {
        let mut request = self.http_client.post(format!("{}/refresh", &self.address));
        if let Some(value) = authorization {
            request = request.header("Authorization", value);
        }
        request.send().await.expect("Failed to execute request.")
    }
}
