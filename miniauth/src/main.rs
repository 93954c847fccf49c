use miniauth::app_state::AppState;
use miniauth::utils::Config;
use miniauth::Application;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = Arc::new(Config::from_env()?);
    let app_state = AppState::new(config);
    let app = Application::build(app_state, "0.0.0.0:3000").await?;

    app.run().await?;
    Ok(())
}
