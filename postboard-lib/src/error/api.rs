//! API error types

/// Errors that can occur while talking to the posts API.
///
/// Every HTTP status the API is known to return has its own variant;
/// any other status lands in [`ApiError::Http`] with the raw code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP 400 response.
    #[error("HTTP 400: {message}")]
    BadRequest {
        /// Error message from the response body.
        message: String,
    },

    /// HTTP 401 response.
    #[error("HTTP 401: {message}")]
    Unauthorized {
        /// Error message from the response body.
        message: String,
    },

    /// HTTP 403 response.
    #[error("HTTP 403: {message}")]
    Forbidden {
        /// Error message from the response body.
        message: String,
    },

    /// HTTP 404 response.
    #[error("HTTP 404: {message}")]
    NotFound {
        /// Error message from the response body.
        message: String,
    },

    /// HTTP 500 response.
    #[error("HTTP 500: {message}")]
    InternalServer {
        /// Error message from the response body.
        message: String,
    },

    /// HTTP 503 response.
    #[error("HTTP 503: {message}")]
    ServiceUnavailable {
        /// Error message from the response body.
        message: String,
    },

    /// Any other HTTP error response.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// Network error: the request never produced an HTTP response
    /// (DNS failure, refused connection, response body cut short).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Classifies an HTTP error status into its variant.
    ///
    /// This is the sole status-code dispatch point. Classification looks
    /// only at the status code, never at message text, so it stays
    /// deterministic. When the response body carried no message, the
    /// variant's default message is used instead.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 => Self::BadRequest {
                message: or_default(message, "Bad request"),
            },
            401 => Self::Unauthorized {
                message: or_default(message, "Unauthorized access"),
            },
            403 => Self::Forbidden {
                message: or_default(message, "Forbidden access"),
            },
            404 => Self::NotFound {
                message: or_default(message, "Resource not found"),
            },
            500 => Self::InternalServer {
                message: or_default(message, "Internal server error"),
            },
            503 => Self::ServiceUnavailable {
                message: or_default(message, "Service unavailable"),
            },
            _ => Self::Http {
                status,
                message: or_default(message, "API error"),
            },
        }
    }

    /// Returns the HTTP status code this error represents, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::BadRequest { .. } => Some(400),
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::InternalServer { .. } => Some(500),
            Self::ServiceUnavailable { .. } => Some(503),
            Self::Http { status, .. } => Some(*status),
            Self::Network(source) => source.status().map(|s| s.as_u16()),
            Self::InvalidUrl(_) => None,
        }
    }
}

fn or_default(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
