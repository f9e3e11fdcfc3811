// ABOUTME: Storage service configuration, derived from the gateway's ServerConfig.
// ABOUTME: The storage service only needs its database and the secret shared with the token service.

use syncserver_gateway::ServerConfig;

/// Configuration for the storage service, handed over by value at mount.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub shared_secret: String,
}

impl Config {
    /// Derive the storage service configuration from the gateway's.
    pub fn for_gateway(server: &ServerConfig) -> Self {
        Self {
            database_url: server.data_source.clone(),
            shared_secret: server.shared_secret.clone(),
        }
    }
}
