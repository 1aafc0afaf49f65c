use crate::gateway::Endpoints;
use crate::session::{Session, DEFAULT_KEEP_ALIVE_INTERVAL, DEFAULT_LOCALE};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Clone, Deserialize)]
pub struct BetfairConfig {
    pub username: String,
    pub password: String,
    pub api_key: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub keep_alive: bool,
    #[serde(default = "default_keep_alive_interval_secs")]
    pub keep_alive_interval_secs: u64,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_keep_alive_interval_secs() -> u64 {
    DEFAULT_KEEP_ALIVE_INTERVAL.as_secs()
}

impl fmt::Debug for BetfairConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BetfairConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .field("api_key", &self.api_key)
            .field("locale", &self.locale)
            .field("keep_alive", &self.keep_alive)
            .field("keep_alive_interval_secs", &self.keep_alive_interval_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub betfair: BetfairConfig,
    #[serde(default)]
    pub endpoints: Endpoints,
}

impl Config {
    /// Loads `config.toml` from the working directory, then applies any
    /// `BETFAIR_*` environment variables on top.
    pub fn new() -> Result<Self> {
        let mut config = Self::from_path(CONFIG_FILE)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        info!("Config: {:?}", config);
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&config_str)
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str).context("invalid config")?;
        if config.betfair.keep_alive_interval_secs == 0 {
            anyhow::bail!("keep_alive_interval_secs must be greater than zero");
        }
        Ok(config)
    }

    /// Replaces credential and locale fields with values from `lookup`
    /// (`BETFAIR_USERNAME`, `BETFAIR_PASSWORD`, `BETFAIR_API_KEY`,
    /// `BETFAIR_LOCALE`).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields = [
            ("BETFAIR_USERNAME", &mut self.betfair.username),
            ("BETFAIR_PASSWORD", &mut self.betfair.password),
            ("BETFAIR_API_KEY", &mut self.betfair.api_key),
            ("BETFAIR_LOCALE", &mut self.betfair.locale),
        ];
        for (key, field) in fields {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                *field = value;
            }
        }
    }

    pub fn keep_alive_interval(&self) -> Duration {
        Duration::from_secs(self.betfair.keep_alive_interval_secs)
    }

    pub fn session(&self) -> Session {
        Session::new(self.betfair.api_key.clone())
            .with_credentials(self.betfair.username.clone(), self.betfair.password.clone())
            .with_locale(self.betfair.locale.clone())
            .with_keep_alive(self.betfair.keep_alive, self.keep_alive_interval())
    }
}
