use std::collections::BTreeMap;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::ENV_PREFIX;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub qr: QrConfig,
    /// Preset contact served by `GET /api/qr/default`, keyed by the same
    /// parameter names the share link uses (`firstName`, `org`, `city`, ...).
    #[serde(default)]
    pub default_card: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub serve_origin: Option<String>,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the server address as a string in the format "http://host:port".
    #[must_use]
    pub fn serve_origin(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// ## Summary
    /// Returns the public origin used for share links, without a trailing slash.
    #[must_use]
    pub fn origin(&self) -> String {
        if let Some(origin) = &self.serve_origin {
            origin.trim_end_matches('/').to_string()
        } else {
            self.serve_origin()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Rendering parameters handed to the QR collaborator.
///
/// Colors are `#RRGGBB` hex strings; `error_correction` is one of
/// `l`, `m`, `q`, `h` (case-insensitive).
#[derive(Debug, Clone, Deserialize)]
pub struct QrConfig {
    pub error_correction: String,
    pub width: u32,
    pub margin: u32,
    pub dark_color: String,
    pub light_color: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        tracing::debug!(file = "config.toml", env_prefix = ENV_PREFIX, "Loading settings");
        Self::load_from(Config::builder().add_source(
            config::File::with_name("config.toml").required(false),
        ))
    }

    /// ## Summary
    /// Applies defaults and environment overrides on top of `base`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_from(
        base: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self> {
        Ok(base
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8698)?
            .set_default("logging.level", "debug")?
            .set_default("qr.error_correction", "m")?
            .set_default("qr.width", 400)?
            .set_default("qr.margin", 2)?
            .set_default("qr.dark_color", "#000000")?
            .set_default("qr.light_color", "#FFFFFF")?
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(config::Case::Snake)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
