// ABOUTME: Mountable token service: internal validation, database pool, route registration.
// ABOUTME: The pool is lazy, so database reachability is checked on first use rather than at mount.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use syncserver_gateway::Subsystem;
use thiserror::Error;

use crate::config::Config;

/// Errors from the token service's own setup validation.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("shared secret must not be empty")]
    EmptySecret,

    #[error("verifier URL is invalid: {0}")]
    InvalidVerifierUrl(#[source] url::ParseError),

    #[error("token duration must be greater than zero")]
    ZeroTokenDuration,

    #[error("database URL is invalid: {0}")]
    InvalidDatabaseUrl(#[source] sqlx::Error),
}

/// Handle to a mounted token service instance.
pub struct TokenServer {
    config: Config,
    pool: PgPool,
}

impl TokenServer {
    /// The configuration this instance was mounted with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The connection pool backing this instance.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Per-request state for the service's handlers.
#[derive(Clone)]
struct ServiceState {
    audience: String,
    allow_new_users: bool,
}

impl Subsystem for TokenServer {
    type Config = Config;
    type Error = SetupError;

    fn mount(config: Config) -> Result<(Router, Self), SetupError> {
        if config.shared_secret.is_empty() {
            return Err(SetupError::EmptySecret);
        }
        url::Url::parse(&config.verifier_url).map_err(SetupError::InvalidVerifierUrl)?;
        if config.token_duration_secs == 0 {
            return Err(SetupError::ZeroTokenDuration);
        }

        let pool = PgPoolOptions::new()
            .max_connections(8)
            .connect_lazy(&config.database_url)
            .map_err(SetupError::InvalidDatabaseUrl)?;

        let state = ServiceState {
            audience: config.audience.clone(),
            allow_new_users: config.allow_new_users,
        };
        let router = Router::new().route("/status", get(status)).with_state(state);

        tracing::debug!(audience = %config.audience, "token service ready");
        Ok((router, Self { config, pool }))
    }
}

/// Readiness report for the mounted service.
async fn status(State(state): State<ServiceState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "audience": state.audience,
        "allow_new_users": state.allow_new_users,
    }))
}
