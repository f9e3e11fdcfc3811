// ABOUTME: Token service collaborator for the sync gateway, owning the /token prefix.
// ABOUTME: Defines the service configuration, its derivation policy, and the mountable server.

pub mod config;
pub mod server;

pub use config::Config;
pub use server::{SetupError, TokenServer};
