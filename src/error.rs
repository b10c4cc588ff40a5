use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} is not defined.")]
    Config(&'static str),

    #[error("Missing \"{0}\" query parameter.")]
    MissingParam(&'static str),

    // transparent: handlers relay the upstream error's own message
    #[error(transparent)]
    Upstream(#[from] reqwest::Error),
}

impl AppError {
    /// HTTP status the error maps to at the gateway boundary
    pub fn status(&self) -> u16 {
        match self {
            AppError::MissingParam(_) => 400,
            _ => 500,
        }
    }
}

// Implement alias for Result to simplify usage
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_message() {
        let err = AppError::Config("backendUrl");
        assert_eq!(err.to_string(), "backendUrl is not defined.");
        assert_eq!(err.status(), 500);
    }

    #[test]
    fn test_missing_param_message() {
        let err = AppError::MissingParam("lang");
        assert_eq!(err.to_string(), "Missing \"lang\" query parameter.");
        assert_eq!(err.status(), 400);
    }
}
