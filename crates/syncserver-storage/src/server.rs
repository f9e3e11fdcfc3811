// ABOUTME: Mountable storage service: internal validation, database pool, route registration.
// ABOUTME: The pool is lazy, so database reachability is checked on first use rather than at mount.

use axum::routing::get;
use axum::{Json, Router};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use syncserver_gateway::Subsystem;
use thiserror::Error;

use crate::config::Config;

/// Errors from the storage service's own setup validation.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("shared secret must not be empty")]
    EmptySecret,

    #[error("database URL is invalid: {0}")]
    InvalidDatabaseUrl(#[source] sqlx::Error),
}

/// Handle to a mounted storage service instance.
pub struct StorageServer {
    pool: PgPool,
}

impl StorageServer {
    /// The connection pool backing this instance.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Subsystem for StorageServer {
    type Config = Config;
    type Error = SetupError;

    fn mount(config: Config) -> Result<(Router, Self), SetupError> {
        if config.shared_secret.is_empty() {
            return Err(SetupError::EmptySecret);
        }

        let pool = PgPoolOptions::new()
            .max_connections(8)
            .connect_lazy(&config.database_url)
            .map_err(SetupError::InvalidDatabaseUrl)?;

        let router = Router::new().route("/status", get(status));

        tracing::debug!("storage service ready");
        Ok((router, Self { pool }))
    }
}

/// Readiness report for the mounted service.
async fn status() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use http::Request;
    use tower::ServiceExt;

    use super::*;

    fn config() -> Config {
        Config {
            database_url: "postgres://u:p@host/db".to_string(),
            shared_secret: "abc123".to_string(),
        }
    }

    #[tokio::test]
    async fn mount_registers_the_status_route() {
        let (router, _server) = StorageServer::mount(config()).unwrap();

        let resp = router
            .oneshot(Request::get("/status").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[test]
    fn empty_secret_rejected() {
        let mut c = config();
        c.shared_secret.clear();
        assert!(matches!(
            StorageServer::mount(c),
            Err(SetupError::EmptySecret)
        ));
    }

    #[test]
    fn bad_database_url_rejected() {
        let mut c = config();
        c.database_url = "not a connection string".to_string();
        assert!(matches!(
            StorageServer::mount(c),
            Err(SetupError::InvalidDatabaseUrl(_))
        ));
    }
}
