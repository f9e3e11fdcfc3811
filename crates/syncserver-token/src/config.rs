// ABOUTME: Token service configuration, derived from the gateway's ServerConfig.
// ABOUTME: Applies the fixed issuance policy: verifier endpoint, audience, lifetime, storage node.

use syncserver_gateway::ServerConfig;

/// Identity verifier consulted when issuing tokens.
pub const VERIFIER_URL: &str = "https://verifier.accounts.firefox.com/v2";

/// Lifetime of issued tokens, in seconds.
pub const TOKEN_DURATION_SECS: u64 = 300;

/// Configuration for the token service.
///
/// Built once from the gateway configuration plus the fixed policy values
/// above, then handed over by value when the service is mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub verifier_url: String,
    pub audience: String,
    pub allow_new_users: bool,
    pub token_duration_secs: u64,
    pub storage_server_node: String,
    pub shared_secret: String,
    pub database_url: String,
}

impl Config {
    /// Derive the token service configuration from the gateway's.
    ///
    /// The audience is the gateway's public hostname, and issued tokens
    /// point clients at the storage service mounted on that same host.
    pub fn for_gateway(server: &ServerConfig) -> Self {
        Self {
            verifier_url: VERIFIER_URL.to_string(),
            audience: server.public_hostname.clone(),
            allow_new_users: true,
            token_duration_secs: TOKEN_DURATION_SECS,
            storage_server_node: format!("{}/storage", server.public_hostname),
            shared_secret: server.shared_secret.clone(),
            database_url: server.data_source.clone(),
        }
    }
}

#[cfg(test)]
fn server_config(hostname: &str) -> ServerConfig {
    ServerConfig {
        listen_address: "0.0.0.0".to_string(),
        listen_port: 5000,
        public_hostname: hostname.to_string(),
        shared_secret: "abc123".to_string(),
        data_source: "postgres://u:p@host/db".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_applies_fixed_policy() {
        let config = Config::for_gateway(&server_config("https://sync.example.com"));
        assert_eq!(config.verifier_url, VERIFIER_URL);
        assert!(config.allow_new_users);
        assert_eq!(config.token_duration_secs, 300);
        assert_eq!(config.shared_secret, "abc123");
        assert_eq!(config.database_url, "postgres://u:p@host/db");
    }

    #[test]
    fn storage_node_is_hostname_plus_storage_path() {
        let config = Config::for_gateway(&server_config("https://sync.example.com"));
        assert_eq!(config.audience, "https://sync.example.com");
        assert_eq!(config.storage_server_node, "https://sync.example.com/storage");
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// The audience and storage node track the public hostname for any
        /// non-empty hostname string.
        #[test]
        fn derivation_tracks_hostname(hostname in "[a-zA-Z0-9.:/-]{1,60}") {
            let config = Config::for_gateway(&server_config(&hostname));
            prop_assert_eq!(&config.audience, &hostname);
            prop_assert_eq!(config.storage_server_node, format!("{}/storage", hostname));
        }
    }
}
