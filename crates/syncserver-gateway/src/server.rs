// ABOUTME: Listener binding and serve loop for the sync gateway.
// ABOUTME: Bind and serve errors are fatal; restart and shutdown are the supervisor's job.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::error::GatewayError;
use crate::routes::Gateway;

impl Gateway {
    /// Bind the gateway to `host:port`.
    ///
    /// Only a completed gateway reaches this point, so every route is
    /// registered before the listener exists.
    pub async fn bind(self, host: &str, port: u16) -> Result<BoundGateway, GatewayError> {
        let listener = TcpListener::bind((host, port))
            .await
            .map_err(GatewayError::Listen)?;
        Ok(BoundGateway {
            listener,
            router: self.router,
        })
    }
}

/// A gateway holding a bound listener that has not started serving yet.
pub struct BoundGateway {
    listener: TcpListener,
    router: Router,
}

impl BoundGateway {
    /// The address the listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, GatewayError> {
        self.listener.local_addr().map_err(GatewayError::Listen)
    }

    /// Serve HTTP until a fatal error.
    ///
    /// There is no graceful-shutdown path. The process is expected to be
    /// terminated by an external signal, handled by the hosting environment.
    pub async fn serve(self) -> Result<(), GatewayError> {
        let addr = self.local_addr()?;
        tracing::info!(address = %addr, "sync gateway listening");
        axum::serve(self.listener, self.router)
            .await
            .map_err(GatewayError::Listen)
    }
}

#[cfg(test)]
mod tests {
    use crate::routes::GatewayBuilder;

    use super::*;

    #[tokio::test]
    async fn bind_yields_a_local_address() {
        let bound = GatewayBuilder::new()
            .build()
            .bind("127.0.0.1", 0)
            .await
            .unwrap();
        let addr = bound.local_addr().unwrap();
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn binding_a_taken_port_is_a_listener_error() {
        let first = GatewayBuilder::new()
            .build()
            .bind("127.0.0.1", 0)
            .await
            .unwrap();
        let port = first.local_addr().unwrap().port();

        let result = GatewayBuilder::new().build().bind("127.0.0.1", port).await;
        assert!(matches!(result, Err(GatewayError::Listen(_))));
    }
}
