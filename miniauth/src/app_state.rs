use std::sync::Arc;

use crate::services::TokenService;
use crate::utils::Config;

// Using type aliases to improve readability!
pub type ConfigType = Arc<Config>;

#[derive(Clone)]
pub struct AppState {
    pub token_service: TokenService,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(config: ConfigType) -> Self {
        let token_service = TokenService::new(config.clone());
        Self {
            token_service,
            config,
        }
    }
}
