// gateway module - backend API forwarding service

pub mod config;
pub mod server;

pub mod handlers; // API endpoint handlers
pub mod middleware; // Axum middleware
pub mod upstream; // Upstream client

pub use config::GatewayConfig;
pub use server::AxumServer;
