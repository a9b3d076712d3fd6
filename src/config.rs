//! Application configuration.
//!
//! Sources, lowest precedence first: built-in defaults, the TOML file,
//! environment variables, command-line overrides.
//!
//! ```toml
//! seed_catalog = true
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [feature_flags]
//! PremiumPricing = true
//! NewDiscountCalculation = false
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::feature_flags::FeatureFlag;

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "shop.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    /// Register the demo catalog at startup.
    pub seed_catalog: bool,
    /// Flag name -> enabled. Flags not listed are disabled.
    pub feature_flags: BTreeMap<String, bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            seed_catalog: true,
            feature_flags: BTreeMap::new(),
        }
    }
}

/// Values given on the command line. They win over every other source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub enable: Vec<FeatureFlag>,
    pub disable: Vec<FeatureFlag>,
    pub no_seed: bool,
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the file at `path`, or `shop.toml` if present, or defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default_path.exists() {
                    debug!("No configuration file, using defaults");
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Applies `HOST`, `PORT` and `FEATURE_*` variables.
    pub fn apply_env(
        &mut self,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<(), ConfigError> {
        for (key, value) in vars {
            match key.as_str() {
                "HOST" => self.server.host = value,
                "PORT" => {
                    self.server.port = value
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue { key: key.clone(), value })?;
                }
                _ => {
                    if let Some(flag) = FeatureFlag::ALL.into_iter().find(|f| f.env_key() == key) {
                        let enabled = parse_bool(&value).ok_or_else(|| ConfigError::InvalidValue {
                            key: key.clone(),
                            value: value.clone(),
                        })?;
                        self.set_flag(flag, enabled);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(host) = &overrides.host {
            self.server.host = host.clone();
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        for &flag in &overrides.enable {
            self.set_flag(flag, true);
        }
        for &flag in &overrides.disable {
            self.set_flag(flag, false);
        }
        if overrides.no_seed {
            self.seed_catalog = false;
        }
    }

    /// Replaces every spelling of the flag's name already in the table.
    pub fn set_flag(&mut self, flag: FeatureFlag, enabled: bool) {
        self.feature_flags.retain(|name, _| !name.eq_ignore_ascii_case(flag.name()));
        self.feature_flags.insert(flag.name().to_string(), enabled);
    }

    /// State of every known flag. Names match ignoring case; unknown names
    /// in the table are ignored.
    pub fn flag_states(&self) -> Vec<(FeatureFlag, bool)> {
        let mut states: BTreeMap<FeatureFlag, bool> =
            FeatureFlag::ALL.into_iter().map(|flag| (flag, false)).collect();
        for (name, &enabled) in &self.feature_flags {
            match name.parse::<FeatureFlag>() {
                Ok(flag) => {
                    states.insert(flag, enabled);
                }
                Err(_) => warn!(flag = %name, "Ignoring unknown feature flag in configuration"),
            }
        }
        FeatureFlag::ALL
            .into_iter()
            .map(|flag| (flag, states[&flag]))
            .collect()
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}

/// Full resolution: file, then process environment, then overrides.
pub fn resolve(path: Option<&Path>, overrides: &Overrides) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::load(path)?;
    config.apply_env(std::env::vars())?;
    config.apply_overrides(overrides);
    Ok(config)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
