// CORS middleware
use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS layer; the gateway is consumed by browser front-ends
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
