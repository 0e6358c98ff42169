use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_ANCHOR_ID: &str = "portal";
pub const DEFAULT_OPEN_DELAY_MS: u64 = 10;
pub const DEFAULT_TRANSITION_MS: u64 = 300;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Portal and timing configuration shared by every modal under a `PortalRoot`.
/// In debug builds `load()` also reads a `.env` file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Id of the anchor element modals are rendered into
    pub anchor_id: String,
    /// Delay between opening and the visible flag flipping on
    pub open_delay_ms: u64,
    /// Duration of the opacity/transform transition
    pub transition_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anchor_id: DEFAULT_ANCHOR_ID.to_string(),
            open_delay_ms: DEFAULT_OPEN_DELAY_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults on bad values
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                tracing::info!("Config: loaded .env file");
            }
        }

        match Self::try_from_env() {
            Ok(config) => config,
            Err(e) => {
                warn!("Config: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Read configuration from the process environment
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let anchor_id = lookup("PORTAL_MODAL_ANCHOR_ID")
            .filter(|id| !id.trim().is_empty())
            .unwrap_or(defaults.anchor_id);
        let open_delay_ms = parse_millis(
            "PORTAL_MODAL_OPEN_DELAY_MS",
            lookup("PORTAL_MODAL_OPEN_DELAY_MS"),
            defaults.open_delay_ms,
        )?;
        let transition_ms = parse_millis(
            "PORTAL_MODAL_TRANSITION_MS",
            lookup("PORTAL_MODAL_TRANSITION_MS"),
            defaults.transition_ms,
        )?;

        Ok(Self {
            anchor_id,
            open_delay_ms,
            transition_ms,
        })
    }

    pub fn open_delay(&self) -> Duration {
        Duration::from_millis(self.open_delay_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

fn parse_millis(
    var: &'static str,
    value: Option<String>,
    default: u64,
) -> Result<u64, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}
