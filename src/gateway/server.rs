use std::sync::Arc;

use axum::{
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::gateway::config::GatewayConfig;
use crate::gateway::handlers;
use crate::gateway::upstream::UpstreamClient;

/// Axum application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            upstream: Arc::new(UpstreamClient::new(config.request_timeout)),
            config: Arc::new(config),
        }
    }
}

/// Build the gateway router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            handlers::career::CAREER_PATH,
            get(handlers::career::handle_career),
        )
        .route("/healthz", get(health_check_handler))
        .layer(TraceLayer::new_for_http())
        .layer(crate::gateway::middleware::cors_layer())
        .with_state(state)
}

/// Axum server instance
pub struct AxumServer {
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl AxumServer {
    /// Start Axum server
    pub async fn start(
        config: GatewayConfig,
    ) -> Result<(Self, tokio::task::JoinHandle<()>), String> {
        let addr = format!("{}:{}", config.get_bind_address(), config.port);
        let app = router(AppState::new(config));

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| format!("Failed to bind address {}: {}", addr, e))?;

        tracing::info!("Gateway server started at http://{}", addr);

        // Create shutdown channel
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let server_instance = Self {
            shutdown_tx: Some(shutdown_tx),
        };

        // Start server in new task
        let handle = tokio::spawn(async move {
            use hyper::server::conn::http1;
            use hyper_util::rt::TokioIo;
            use hyper_util::service::TowerToHyperService;

            loop {
                tokio::select! {
                    res = listener.accept() => {
                        match res {
                            Ok((stream, _)) => {
                                let io = TokioIo::new(stream);
                                let service = TowerToHyperService::new(app.clone());

                                tokio::task::spawn(async move {
                                    if let Err(err) = http1::Builder::new()
                                        .serve_connection(io, service)
                                        .await
                                    {
                                        debug!("Connection handling finished or errored: {:?}", err);
                                    }
                                });
                            }
                            Err(e) => {
                                error!("Failed to accept connection: {:?}", e);
                            }
                        }
                    }
                    _ = &mut shutdown_rx => {
                        tracing::info!("Gateway server stopped listening");
                        break;
                    }
                }
            }
        });

        Ok((server_instance, handle))
    }

    /// Stop server
    pub fn stop(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Health check handler
async fn health_check_handler() -> Response {
    Json(serde_json::json!({
        "status": "ok"
    }))
    .into_response()
}
