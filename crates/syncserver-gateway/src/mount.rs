// ABOUTME: The contract between the gateway and the services mounted under its path prefixes.
// ABOUTME: A subsystem builds its own sub-router and hands back an opaque instance handle.

use axum::Router;

/// A service that can be mounted under a path prefix of the gateway.
///
/// The subsystem owns everything below its prefix. Its `mount` routine
/// registers the routes, establishes the service's own database connection,
/// and performs the service's own internal validation. The gateway only
/// nests the returned router; it never looks inside the handle or the error.
///
/// The configuration is consumed by value. The caller builds it from the
/// gateway's `ServerConfig` plus the service's fixed policy values, and
/// ownership transfers to the subsystem here.
pub trait Subsystem: Sized {
    /// Service-specific configuration, passed by value.
    type Config;

    /// Setup error, propagated upward unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the service's router and instance from its configuration.
    fn mount(config: Self::Config) -> Result<(Router, Self), Self::Error>;
}
