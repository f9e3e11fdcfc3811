// ABOUTME: Composition layer for the sync gateway, gluing the token and storage services together.
// ABOUTME: Provides configuration loading, the subsystem mount contract, router assembly, and serving.

pub mod config;
pub mod error;
pub mod mount;
pub mod routes;
pub mod server;

pub use config::{ConfigError, PolicyError, ServerConfig};
pub use error::GatewayError;
pub use mount::Subsystem;
pub use routes::{Gateway, GatewayBuilder};
pub use server::BoundGateway;
