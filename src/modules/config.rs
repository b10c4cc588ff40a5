use std::fs;
use std::path::PathBuf;

use crate::models::AppConfig;

const CONFIG_FILE: &str = "gateway_config.json";

/// Environment variable supplying the backend API base URL.
/// Absence is a recoverable per-request error, not a startup failure.
pub const BACKEND_URL_ENV: &str = "BACKEND_API_BASE_URL";

pub fn get_data_dir() -> Result<PathBuf, String> {
    let base = dirs::data_dir().ok_or_else(|| "Failed to resolve data directory".to_string())?;
    let data_dir = base.join("portfolio-gateway");

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir)
            .map_err(|e| format!("Failed to create data directory: {}", e))?;
    }

    Ok(data_dir)
}

/// Load application config
///
/// Reads the optional JSON config file from the data directory, then applies
/// environment overrides on top.
pub fn load_app_config() -> Result<AppConfig, String> {
    let data_dir = get_data_dir()?;
    let config_path = data_dir.join(CONFIG_FILE);

    let mut config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        serde_json::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))?
    } else {
        AppConfig::new()
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
        if !url.is_empty() {
            config.gateway.backend_base_url = Some(url);
        }
    }

    if let Ok(port) = std::env::var("GATEWAY_PORT") {
        match port.parse() {
            Ok(port) => config.gateway.port = port,
            Err(_) => tracing::warn!("Ignoring invalid GATEWAY_PORT value: {}", port),
        }
    }
}
