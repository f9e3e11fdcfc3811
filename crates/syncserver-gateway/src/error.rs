// ABOUTME: Error taxonomy at the composition boundary: config, policy, mount, listen.
// ABOUTME: Every variant is fatal at startup; nothing is retried and there is no degraded mode.

use thiserror::Error;

use crate::config::{ConfigError, PolicyError};

/// Boxed opaque error returned by a subsystem's setup routine.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Fatal startup errors, classified by the layer that produced them.
///
/// Subsystem errors are not reinterpreted here. They travel unchanged inside
/// [`GatewayError::Mount`], annotated only with the prefix that was being
/// mounted.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("policy violation: {0}")]
    Policy(#[from] PolicyError),

    #[error("could not mount subsystem at {prefix}: {source}")]
    Mount {
        prefix: String,
        #[source]
        source: BoxError,
    },

    #[error("listener error: {0}")]
    Listen(#[source] std::io::Error),
}
