use serde::{Deserialize, Serialize};

/// Gateway service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Whether to allow LAN access
    /// - false: local access only, 127.0.0.1 (default)
    /// - true: allow LAN access, 0.0.0.0
    #[serde(default)]
    pub allow_lan_access: bool,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the backend API. Left unset, every forwarding request
    /// answers with a 500 payload instead of failing startup.
    #[serde(default)]
    pub backend_base_url: Option<String>,

    /// Outbound request timeout (seconds)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            allow_lan_access: false,
            port: default_port(),
            backend_base_url: None,
            request_timeout: default_request_timeout(),
        }
    }
}

fn default_port() -> u16 {
    4100
}

fn default_request_timeout() -> u64 {
    120
}

impl GatewayConfig {
    /// Actual listen address for the configured access mode
    pub fn get_bind_address(&self) -> &str {
        if self.allow_lan_access {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_bind_local_only() {
        let config = GatewayConfig::default();
        assert_eq!(config.get_bind_address(), "127.0.0.1");
        assert!(config.backend_base_url.is_none());
    }

    #[test]
    fn test_lan_access_binds_all_interfaces() {
        let config = GatewayConfig {
            allow_lan_access: true,
            ..GatewayConfig::default()
        };
        assert_eq!(config.get_bind_address(), "0.0.0.0");
    }

    #[test]
    fn test_deserializes_with_defaults() {
        let config: GatewayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.port, 4100);
        assert_eq!(config.request_timeout, 120);
    }
}
