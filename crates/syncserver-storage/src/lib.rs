// ABOUTME: Storage service collaborator for the sync gateway, owning the /storage prefix.
// ABOUTME: Defines the service configuration, its derivation, and the mountable server.

pub mod config;
pub mod server;

pub use config::Config;
pub use server::{SetupError, StorageServer};
