//! # Node Configuration
//!
//! Runtime parameters for the local channel host.
//!
//! Values come from the environment with sane defaults; CLI flags override
//! them afterwards.

use sc_01_canonical_encoding::SigningScheme;
use shared_bus::DEFAULT_CHANNEL_CAPACITY;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Default location of the ledger file.
pub const DEFAULT_LEDGER_PATH: &str = "./data/channels.json";

/// Complete node configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// JSON ledger holding the registry and block height.
    pub ledger_path: PathBuf,
    /// Digest scheme counterparties sign under.
    pub signing_scheme: SigningScheme,
    /// Notification buffer per operation.
    pub event_capacity: usize,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            ledger_path: PathBuf::from(DEFAULT_LEDGER_PATH),
            signing_scheme: SigningScheme::default(),
            event_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl NodeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SC_LEDGER_PATH`: Ledger file (default: ./data/channels.json)
    /// - `SC_SIGNING_SCHEME`: `personal` or `raw` (default: personal)
    /// - `SC_EVENT_CAPACITY`: Notification buffer (default: 1000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`NodeConfig::from_env`] over an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("SC_LEDGER_PATH") {
            config.ledger_path = PathBuf::from(path);
        }

        if let Some(scheme) = lookup("SC_SIGNING_SCHEME") {
            config.signing_scheme = scheme
                .parse()
                .map_err(|_| ConfigError::InvalidSigningScheme(scheme))?;
        }

        if let Some(capacity) = lookup("SC_EVENT_CAPACITY") {
            config.event_capacity = capacity
                .parse()
                .map_err(|_| ConfigError::InvalidCapacity(capacity))?;
        }

        Ok(config)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.event_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.ledger_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyLedgerPath);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `SC_SIGNING_SCHEME` is not `personal` or `raw`.
    #[error("Invalid signing scheme: {0} (expected `personal` or `raw`)")]
    InvalidSigningScheme(String),

    /// `SC_EVENT_CAPACITY` is not an integer.
    #[error("Invalid event capacity: {0}")]
    InvalidCapacity(String),

    /// Event capacity must be positive.
    #[error("Event capacity must be greater than zero")]
    ZeroCapacity,

    /// No ledger path configured.
    #[error("Ledger path is empty")]
    EmptyLedgerPath,
}
