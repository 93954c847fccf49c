use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::{error::Error, future::Future, future::IntoFuture, pin::Pin};
use tokio::net::TcpListener;

use app_state::AppState;

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod utils;

pub use domain::{Claims, SigningContext, SigningMethod, TokenError};
pub use services::{ExpiryPolicy, RefreshDecision, TokenService};
pub use utils::{Config, ConfigError, ConfigProvider};

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            routes::require_token,
        ))
        .route("/refresh", post(routes::refresh))
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let listener = TcpListener::bind(address).await?;
        let address = format!("http://{}", listener.local_addr()?);
        let http_future = axum::serve(listener, router).into_future();

        Ok(Self {
            http_future: Box::pin(http_future),
            address,
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        log::info!("listening on {}", &self.address);
        self.http_future.await
    }
}
