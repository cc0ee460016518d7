//! Bridge amounts application library

use bridge_api::AppState;
use bridge_core::AppConfig;
use thiserror::Error;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "BRIDGE_AMOUNTS_CONFIG";

/// Environment variable overriding the API port
pub const PORT_ENV: &str = "PORT";

/// Startup errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(#[from] bridge_core::Error),

    #[error("Invalid PORT value '{0}'")]
    InvalidPort(String),

    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Resolve config from an optional file path and an optional port override
pub fn load_config(
    config_path: Option<&str>,
    port_override: Option<&str>,
) -> Result<AppConfig, AppError> {
    let mut config = match config_path {
        Some(path) => {
            tracing::info!("Loading config from {}", path);
            AppConfig::load(path)?
        }
        None => AppConfig::default(),
    };

    if let Some(port) = port_override {
        config.api.port = port
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidPort(port.to_string()))?;
    }

    Ok(config)
}

/// Run the API server until it exits
pub async fn run() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bridge_amounts=debug".parse()?)
                .add_directive("bridge_api=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .init();

    tracing::info!("Starting bridge amounts service");

    let config_path = std::env::var(CONFIG_ENV).ok();
    let port = std::env::var(PORT_ENV).ok();
    let config = load_config(config_path.as_deref(), port.as_deref())?;

    let state = AppState::with_config(config);
    bridge_api::start_server(state).await?;

    Ok(())
}
