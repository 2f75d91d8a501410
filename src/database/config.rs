//! Database configuration structures and parsing
//!
//! This module handles parsing connection configurations from TOML files and
//! environment variables, supporting multiple named connections:
//!
//! ```toml
//! default = "main"
//!
//! [connections.main]
//! driver = "pgsql"
//! database = "app"
//! prefix = "app_"
//!
//! [connections.main.options]
//! search_path = "public"
//! ```

use crate::database::connection::ConnectionOptions;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::env;

#[cfg(feature = "config")]
use std::{fs, path::Path};

/// Environment variable overriding the default connection name
pub const DEFAULT_CONNECTION_ENV: &str = "RUSTF_DB_CONNECTION";

/// Configuration for a single connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Driver name (`mysql`, `pgsql`, `sqlite`, `sqlsrv` or one with a resolver)
    pub driver: String,

    #[serde(default)]
    pub database: String,

    /// Prefix prepended to every table name
    #[serde(default)]
    pub prefix: String,

    /// Driver options, opaque to this layer
    #[serde(default)]
    pub options: ConnectionOptions,
}

/// Configuration for multiple named connections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabasesConfig {
    /// Name of the default connection
    #[serde(default)]
    pub default: Option<String>,

    /// Connections in declaration order
    #[serde(default)]
    pub connections: IndexMap<String, ConnectionConfig>,
}

impl DatabasesConfig {
    /// Create a new empty databases configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection configuration
    pub fn add_connection(&mut self, name: impl Into<String>, config: ConnectionConfig) {
        self.connections.insert(name.into(), config);
    }

    /// Get a connection configuration by name
    pub fn get(&self, name: &str) -> Option<&ConnectionConfig> {
        self.connections.get(name)
    }

    /// Get the default connection configuration
    ///
    /// Returns the connection named by `default`, or the first declared one
    /// if no default is set.
    pub fn get_default(&self) -> Option<(&String, &ConnectionConfig)> {
        match &self.default {
            Some(name) => self.connections.get_key_value(name),
            None => self.connections.first(),
        }
    }

    /// Check if any connections are configured
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// List all connection names in declaration order
    pub fn list_names(&self) -> Vec<String> {
        self.connections.keys().cloned().collect()
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(&mut self, other: DatabasesConfig) {
        if other.default.is_some() {
            self.default = other.default;
        }
        for (name, config) in other.connections {
            self.connections.insert(name, config);
        }
    }

    /// Check that every connection names a driver and the default exists
    pub fn validate(&self) -> Result<()> {
        for (name, config) in &self.connections {
            if config.driver.trim().is_empty() {
                return Err(Error::config(format!(
                    "Connection '{}' has no driver",
                    name
                )));
            }
        }

        if let Some(default) = &self.default {
            if !self.connections.contains_key(default) {
                return Err(Error::config(format!(
                    "Default connection '{}' is not configured",
                    default
                )));
            }
        }

        Ok(())
    }

    /// Replace the default connection name when an override is given
    pub fn override_default(&mut self, name: Option<String>) {
        if let Some(name) = name.filter(|name| !name.trim().is_empty()) {
            log::debug!("Default database connection overridden to '{}'", name);
            self.default = Some(name);
        }
    }

    /// Apply environment variable overrides (`RUSTF_DB_CONNECTION`)
    pub fn apply_env_overrides(&mut self) {
        self.override_default(env::var(DEFAULT_CONNECTION_ENV).ok());
    }

    /// Parse configuration from a TOML string
    #[cfg(feature = "config")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DatabasesConfig = toml::from_str(content).map_err(|e| {
            Error::config(format!(
                "Failed to parse database config: {}. Check TOML syntax.",
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    #[cfg(feature = "config")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let content = fs::read_to_string(path_ref).map_err(|e| {
            Error::config(format!(
                "Failed to read database config '{}': {}. Make sure the file exists and is readable.",
                path_ref.display(),
                e
            ))
        })?;

        let mut config = Self::from_toml_str(&content)?;
        config.apply_env_overrides();
        config.validate()?;

        log::debug!(
            "Loaded {} database connection(s) from: {}",
            config.len(),
            path_ref.display()
        );
        Ok(config)
    }
}

/// Builder for ConnectionConfig
#[derive(Debug, Default)]
pub struct ConnectionConfigBuilder {
    driver: Option<String>,
    database: String,
    prefix: String,
    options: ConnectionOptions,
}

impl ConnectionConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the driver name (required)
    pub fn driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = Some(driver.into());
        self
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set a driver option
    pub fn option(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ConnectionConfig> {
        let driver = self
            .driver
            .filter(|driver| !driver.trim().is_empty())
            .ok_or_else(|| Error::config("Database driver is required"))?;

        Ok(ConnectionConfig {
            driver,
            database: self.database,
            prefix: self.prefix,
            options: self.options,
        })
    }
}
