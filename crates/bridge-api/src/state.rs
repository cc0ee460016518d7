//! Application state shared across API handlers

use std::sync::Arc;

use bridge_core::{AppConfig, DisplayConfig, FormatPolicy};
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur while updating shared state
#[derive(Debug, Error)]
pub enum StateError {
    /// The new display config failed the same checks applied at load time
    #[error("Invalid display config: {0}")]
    InvalidDisplay(#[from] bridge_core::Error),
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: RwLock<AppConfig>,
}

impl AppState {
    /// Create a new application state with default config
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create with a specific config
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config: RwLock::new(config),
            }),
        }
    }

    /// Get current config
    pub async fn config(&self) -> AppConfig {
        self.inner.config.read().await.clone()
    }

    /// Get current display presets
    pub async fn display(&self) -> DisplayConfig {
        self.inner.config.read().await.display.clone()
    }

    /// Resolve a named display preset
    pub async fn preset(&self, name: &str) -> Option<FormatPolicy> {
        self.inner.config.read().await.display.preset(name)
    }

    /// Replace the display presets after validating them
    ///
    /// # Errors
    /// Returns `StateError::InvalidDisplay` naming the first bad field.
    pub async fn set_display(&self, display: DisplayConfig) -> Result<(), StateError> {
        display.validate()?;

        tracing::info!("Updating display presets");
        let mut config = self.inner.config.write().await;
        config.display = display;
        Ok(())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_preset_lookup() {
        let state = AppState::new();
        assert_eq!(state.preset("two").await, Some(FormatPolicy::TWO_DECIMALS));
        assert_eq!(state.preset("nope").await, None);
    }

    #[tokio::test]
    async fn test_set_display_validates() {
        let state = AppState::new();

        let mut display = DisplayConfig::default();
        display.price = FormatPolicy {
            min_fraction_digits: 4,
            max_fraction_digits: 2,
            use_grouping: true,
        };
        let err = state.set_display(display).await.unwrap_err();
        assert!(err.to_string().contains("display.price"));
        assert_eq!(state.display().await.price, FormatPolicy::PRICE);

        let mut display = DisplayConfig::default();
        display.identifier_edge_length = 0;
        let err = state.set_display(display).await.unwrap_err();
        assert!(matches!(
            err,
            StateError::InvalidDisplay(bridge_core::Error::Config(_))
        ));
        assert_eq!(state.display().await.identifier_edge_length, 12);

        let mut display = DisplayConfig::default();
        display.identifier_edge_length = 6;
        state.set_display(display).await.unwrap();
        assert_eq!(state.display().await.identifier_edge_length, 6);
    }
}
