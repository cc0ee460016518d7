//! Configuration types for the bridge amount utilities

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, FormatPolicy};

/// API server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_api_host")]
    pub host: String,

    /// API server port
    #[serde(default = "default_api_port")]
    pub port: u16,
}

fn default_api_host() -> String {
    "127.0.0.1".to_string()
}

fn default_api_port() -> u16 {
    19080
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_api_host(),
            port: default_api_port(),
        }
    }
}

/// Display policies, one per named preset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_zero")]
    pub zero: FormatPolicy,

    #[serde(default = "default_two")]
    pub two: FormatPolicy,

    #[serde(default = "default_six")]
    pub six: FormatPolicy,

    #[serde(default = "default_price")]
    pub price: FormatPolicy,

    #[serde(default = "default_balance")]
    pub balance: FormatPolicy,

    #[serde(default = "default_input")]
    pub input: FormatPolicy,

    /// Characters kept on each side when shortening addresses and hashes
    #[serde(default = "default_identifier_edge_length")]
    pub identifier_edge_length: usize,
}

fn default_zero() -> FormatPolicy {
    FormatPolicy::ZERO_DECIMALS
}

fn default_two() -> FormatPolicy {
    FormatPolicy::TWO_DECIMALS
}

fn default_six() -> FormatPolicy {
    FormatPolicy::SIX_DECIMALS
}

fn default_price() -> FormatPolicy {
    FormatPolicy::PRICE
}

fn default_balance() -> FormatPolicy {
    FormatPolicy::BALANCE
}

fn default_input() -> FormatPolicy {
    FormatPolicy::INPUT
}

fn default_identifier_edge_length() -> usize {
    12
}

impl DisplayConfig {
    /// Look up a preset by name
    pub fn preset(&self, name: &str) -> Option<FormatPolicy> {
        match name {
            "zero" => Some(self.zero),
            "two" => Some(self.two),
            "six" => Some(self.six),
            "price" => Some(self.price),
            "balance" => Some(self.balance),
            "input" => Some(self.input),
            _ => None,
        }
    }

    /// All presets with their names
    pub fn presets(&self) -> [(&'static str, &FormatPolicy); 6] {
        [
            ("zero", &self.zero),
            ("two", &self.two),
            ("six", &self.six),
            ("price", &self.price),
            ("balance", &self.balance),
            ("input", &self.input),
        ]
    }

    /// Check every preset policy and the identifier edge length
    ///
    /// Shared by config loading and runtime updates so both accept the same
    /// documents.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, policy) in self.presets() {
            policy
                .validate()
                .map_err(|e| Error::Config(format!("display.{}: {}", name, e)))?;
        }
        if self.identifier_edge_length == 0 {
            return Err(Error::Config(
                "display.identifier_edge_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            zero: default_zero(),
            two: default_two(),
            six: default_six(),
            price: default_price(),
            balance: default_balance(),
            input: default_input(),
            identifier_edge_length: default_identifier_edge_length(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// API server settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Display formatting presets
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Parse and validate a JSON config document
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let config: AppConfig =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        config.display.validate()?;
        Ok(config)
    }

    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }
}
