use serde::Serialize;

/// Uniform error body returned by every gateway endpoint.
/// Created at the error site and serialized immediately, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub message: String,
    pub status: u16,
    pub path: String,
}

impl ErrorPayload {
    pub fn new(message: impl Into<String>, status: u16, path: &str) -> Self {
        Self {
            message: message.into(),
            status,
            path: path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_all_fields() {
        let payload = ErrorPayload::new("backendUrl is not defined.", 500, "/api/career");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "backendUrl is not defined.",
                "status": 500,
                "path": "/api/career"
            })
        );
    }
}
