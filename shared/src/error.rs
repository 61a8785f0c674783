use thiserror::Error;

use crate::constants::{ERROR_AUTH_REQUIRED, ERROR_GENERATE_DEFAULT};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{}", ERROR_AUTH_REQUIRED)]
    MissingToken,
    #[error("{0}")]
    Server(String),
    #[error("Invalid response format")]
    InvalidResponse,
    #[error("{0}")]
    Transport(String),
    #[error("could not encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl GenerateError {
    pub fn server(message: Option<String>) -> Self {
        let message = message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| ERROR_GENERATE_DEFAULT.to_string());
        GenerateError::Server(message)
    }

    /// Text shown to the user in the failure alert.
    pub fn alert_message(&self) -> String {
        format!("Failed to generate form: {self}")
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("browser window is not available")]
    Unavailable,
    #[error("login popup was blocked")]
    PopupBlocked,
    #[error("login popup was closed before completing")]
    PopupClosed,
    #[error("login denied: {0}")]
    Denied(String),
    #[error("login response did not match the request")]
    StateMismatch,
    #[error("Failed to fetch user info: {0}")]
    Profile(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("subject {subject} refers to unknown semester {semester}")]
    UnknownSemester { subject: String, semester: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_defaults_message() {
        assert_eq!(GenerateError::server(None).to_string(), ERROR_GENERATE_DEFAULT);
        assert_eq!(GenerateError::server(Some("".into())).to_string(), ERROR_GENERATE_DEFAULT);
        assert_eq!(
            GenerateError::server(Some("quota exceeded".into())).alert_message(),
            "Failed to generate form: quota exceeded"
        );
    }
}
