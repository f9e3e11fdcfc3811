// ABOUTME: Top-level router assembly for the sync gateway.
// ABOUTME: Seeds the version endpoint and nests each subsystem under its path prefix.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::error::GatewayError;
use crate::mount::Subsystem;

/// Version identifier reported by `GET /version`.
const VERSION: &str = "0.1";

/// Builder for the gateway router.
///
/// Subsystems are mounted one at a time, and only a finished [`Gateway`] can
/// be bound to a listener. No request can reach a prefix before the
/// subsystem behind it has completed mounting.
pub struct GatewayBuilder {
    router: Router,
}

impl GatewayBuilder {
    /// Start a new gateway router with the version endpoint registered.
    pub fn new() -> Self {
        Self {
            router: Router::new().route("/version", get(version)),
        }
    }

    /// Mount a subsystem under `prefix`.
    ///
    /// Router construction is delegated to the subsystem; its error is
    /// passed through unchanged, wrapped only with the prefix for context.
    /// Returns the opaque subsystem handle alongside the builder.
    pub fn mount<S: Subsystem>(
        self,
        prefix: &str,
        config: S::Config,
    ) -> Result<(Self, S), GatewayError> {
        let (sub_router, handle) = S::mount(config).map_err(|e| GatewayError::Mount {
            prefix: prefix.to_string(),
            source: Box::new(e),
        })?;
        tracing::debug!(prefix, "subsystem mounted");

        let builder = Self {
            router: self.router.nest(prefix, sub_router),
        };
        Ok((builder, handle))
    }

    /// Finish assembly. The route set is fixed from here on.
    pub fn build(self) -> Gateway {
        Gateway {
            router: self.router.layer(TraceLayer::new_for_http()),
        }
    }
}

impl Default for GatewayBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully assembled gateway router, ready to be bound to a listener.
pub struct Gateway {
    pub(crate) router: Router,
}

impl Gateway {
    /// Consume the gateway, yielding the underlying Axum router.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Version handler. Fixed payload, no dependency on configuration or
/// subsystem state.
async fn version() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "version": VERSION }))
}
