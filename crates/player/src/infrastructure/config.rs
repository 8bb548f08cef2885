//! Player configuration from environment variables
//!
//! | Variable              | Default                 |
//! |-----------------------|-------------------------|
//! | `ALICE_API_BASE_URL`  | `http://localhost:3000` |
//! | `ALICE_PORTRAIT_BASE` | `/Resource/character`   |
//! | `ALICE_PORTRAIT_EXT`  | `png`                   |
//! | `ALICE_OUTPUT`        | `html`                  |

use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use alice_domain::PortraitTemplate;

use super::http_client::DEFAULT_API_BASE_URL;

pub const ENV_API_BASE_URL: &str = "ALICE_API_BASE_URL";
pub const ENV_PORTRAIT_BASE: &str = "ALICE_PORTRAIT_BASE";
pub const ENV_PORTRAIT_EXT: &str = "ALICE_PORTRAIT_EXT";
pub const ENV_OUTPUT: &str = "ALICE_OUTPUT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid URL: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("{name} must be an http(s) URL, got scheme '{scheme}'")]
    UnsupportedScheme { name: &'static str, scheme: String },

    #[error("{name} has unknown value '{value}' (expected html or json)")]
    UnknownOutputFormat { name: &'static str, value: String },
}

/// How the binary writes a loaded page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rendered HTML fragment
    #[default]
    Html,
    /// Serialized view model
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(s.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub api_base_url: String,
    pub portraits: PortraitTemplate,
    pub output: OutputFormat,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            portraits: PortraitTemplate::default(),
            output: OutputFormat::default(),
        }
    }
}

impl PlayerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_base_url = match get(ENV_API_BASE_URL) {
            Some(raw) => validate_base_url(ENV_API_BASE_URL, &raw)?,
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let portraits = PortraitTemplate::new(
            get(ENV_PORTRAIT_BASE).unwrap_or_else(|| PortraitTemplate::DEFAULT_BASE.to_string()),
            get(ENV_PORTRAIT_EXT)
                .unwrap_or_else(|| PortraitTemplate::DEFAULT_EXTENSION.to_string()),
        );

        let output = match get(ENV_OUTPUT) {
            Some(raw) => raw
                .parse::<OutputFormat>()
                .map_err(|value| ConfigError::UnknownOutputFormat {
                    name: ENV_OUTPUT,
                    value,
                })?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            api_base_url,
            portraits,
            output,
        })
    }
}

fn validate_base_url(name: &'static str, raw: &str) -> Result<String, ConfigError> {
    let parsed = url::Url::parse(raw).map_err(|source| ConfigError::InvalidUrl { name, source })?;
    match parsed.scheme() {
        "http" | "https" => Ok(raw.trim_end_matches('/').to_string()),
        other => Err(ConfigError::UnsupportedScheme {
            name,
            scheme: other.to_string(),
        }),
    }
}

/// Load `.env.local` then `.env` from `dir`, if present.
///
/// Variables already set in the environment are left alone, so the first
/// file to define a variable wins.
pub fn load_dotenv(dir: &Path) {
    for filename in [".env.local", ".env"] {
        let path = dir.join(filename);
        if path.exists() {
            if let Err(e) = dotenvy::from_path(&path) {
                tracing::warn!(path = %path.display(), "Failed to load env file: {}", e);
            }
        }
    }
}
