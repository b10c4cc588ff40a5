use portfolio_gateway::gateway::AxumServer;
use portfolio_gateway::modules::{config, logger};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize logger
    logger::init_logger();

    let app_config = match config::load_app_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let (server, handle) = match AxumServer::start(app_config.gateway).await {
        Ok(started) => started,
        Err(e) => {
            error!("Failed to start gateway server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received, stopping gateway");
    server.stop();
    let _ = handle.await;
}
