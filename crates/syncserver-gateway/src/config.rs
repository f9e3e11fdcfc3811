// ABOUTME: Configuration loading and validation for the sync gateway.
// ABOUTME: Reads the [syncserver] table from a TOML file and enforces the shared-secret policy.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::GatewayError;

/// The sample secret shipped in the example configuration. A deployment that
/// still carries it must not come up.
pub const PLACEHOLDER_SECRET: &str = "ThisIsAnImportantSecretThatYouShouldChange";

const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0";
const DEFAULT_LISTEN_PORT: u16 = 5000;

/// Errors from reading or validating the configuration source.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("PublicHostname must not be empty")]
    EmptyHostname,

    #[error("DataSource is not a valid connection string: {0}")]
    InvalidDataSource(#[source] url::ParseError),
}

/// Deliberate deployment-safety violations, distinct from malformed input.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("SharedSecret is still the published placeholder; set a real secret before starting")]
    PlaceholderSecret,
}

/// Process configuration for the gateway.
///
/// Constructed once at startup and immutable afterwards. Consumers receive
/// copies of the values they need; nothing here is shared mutably.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerConfig {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
    pub public_hostname: String,
    pub shared_secret: String,
    pub data_source: String,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    syncserver: ServerConfig,
}

fn default_listen_address() -> String {
    DEFAULT_LISTEN_ADDRESS.to_string()
}

fn default_listen_port() -> u16 {
    DEFAULT_LISTEN_PORT
}

impl ServerConfig {
    /// Read and validate the gateway configuration from a TOML file.
    ///
    /// Fails fast: an unreadable or malformed file, an invalid field value,
    /// or a shared secret left at the placeholder all abort startup before
    /// any listener exists.
    pub fn load(path: &Path) -> Result<Self, GatewayError> {
        let raw = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml(&raw)
    }

    /// Parse and validate configuration given as literal TOML text.
    pub fn from_toml(raw: &str) -> Result<Self, GatewayError> {
        let file: ConfigFile = toml::from_str(raw).map_err(ConfigError::Parse)?;
        let config = file.syncserver;
        config.validate()?;
        Ok(config)
    }

    /// Validate field values and the shared-secret policy.
    ///
    /// Only syntactic validation happens here. Whether the data source is
    /// actually reachable is the mounted subsystems' concern.
    fn validate(&self) -> Result<(), GatewayError> {
        if self.public_hostname.is_empty() {
            return Err(ConfigError::EmptyHostname.into());
        }
        url::Url::parse(&self.data_source).map_err(ConfigError::InvalidDataSource)?;
        if self.shared_secret == PLACEHOLDER_SECRET {
            return Err(PolicyError::PlaceholderSecret.into());
        }
        Ok(())
    }
}
