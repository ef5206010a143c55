use std::net::SocketAddr;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::Config;
use crate::error::Error;
use crate::schedule::load_schedule;
use crate::web::{router, AppState};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Load the dataset and run the web server
pub async fn start_server(config: Config) -> miette::Result<()> {
    // Load the payload once; a failure degrades the UI, it does not abort
    let schedule = match load_schedule(&config.data_path).await {
        Ok(data) => Some(data),
        Err(e) => {
            error!("Failed to load schedule data: {:?}", e);
            None
        }
    };

    let state = AppState::new(schedule, config.default_range());
    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(Error::from)?;
    axum::serve(listener, app).await.map_err(Error::from)?;

    Ok(())
}
