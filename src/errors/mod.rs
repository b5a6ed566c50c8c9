//! Error handling module for the squadhub client.
//!
//! Provides a centralized error type covering the three failure
//! categories this client distinguishes: transport failures, failure
//! responses from the external store, and client-side validation.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const STORE_ERROR: &str = "STORE_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// A required field was missing; no store call was issued.
    Validation(String),
    /// The store could not be reached (connect, DNS, timeout).
    Transport(String),
    /// The store answered with a non-success status.
    Store { status: u16, message: String },
    /// The store answered but the body could not be decoded.
    Decode(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Transport(_) => codes::TRANSPORT_ERROR,
            AppError::Store { .. } => codes::STORE_ERROR,
            AppError::Decode(_) => codes::DECODE_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Transport(msg) => msg.clone(),
            AppError::Store { status, message } => {
                format!("store returned {}: {}", status, message)
            }
            AppError::Decode(msg) => msg.clone(),
        }
    }

    /// Whether this error was raised before any store call was made.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            tracing::error!("Decode error: {:?}", err);
            AppError::Decode(format!("Decode error: {}", err))
        } else if let Some(status) = err.status() {
            AppError::Store {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            tracing::error!("Transport error: {:?}", err);
            AppError::Transport(format!("Transport error: {}", err))
        }
    }
}
