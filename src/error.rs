use thiserror::Error;

/// Error type for HubSpot API operations.
///
/// - `Transport`: network failure before any HTTP status was received (wraps `reqwest::Error`)
/// - `Http`: any status outside `200..300`, with the decoded body when there was one
/// - `MalformedResponse`: a successful status whose body is not valid JSON
/// - `Deserialization`: valid JSON that does not fit a typed model
/// - `Cancelled`: the request's cancel token fired before dispatch
/// - `Config`: invalid client configuration
#[derive(Debug, Error)]
pub enum HubSpotError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Http {
        status: u16,
        body: Option<serde_json::Value>,
        message: String,
    },

    #[error("Malformed response (HTTP {status}): {message}")]
    MalformedResponse {
        status: u16,
        message: String,
        body: String,
    },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl HubSpotError {
    /// Build the error for a non-2xx response.
    pub fn http(status: u16, body: Option<serde_json::Value>) -> Self {
        Self::Http {
            status,
            body,
            message: format!("Status: {status}"),
        }
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::MalformedResponse { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Decoded error body returned by HubSpot.
    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Http { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

pub type Result<T> = std::result::Result<T, HubSpotError>;
