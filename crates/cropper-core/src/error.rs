//! Error types module
//!
//! Every failure that reaches a client is an `AppError`. The HTTP rendering of each variant
//! (status, code, retry hint, whether the message may be shown) comes from one
//! [`ErrorProfile`] table, exposed through the `ErrorMetadata` trait.
//!
//! The `Database` variant carries a `sqlx::Error` when the `sqlx` feature is enabled and a
//! plain message otherwise.

#[cfg(feature = "sqlx")]
use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected errors such as rejected input
    Debug,
    Warn,
    /// Unexpected failures
    Error,
}

/// How an error is presented to a client and to the logs
pub trait ErrorMetadata {
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "INVALID_INPUT")
    fn error_code(&self) -> &'static str;

    /// Whether retrying the same request may succeed
    fn is_recoverable(&self) -> bool;

    fn suggested_action(&self) -> Option<&'static str>;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Sensitive errors never expose their details
    fn is_sensitive(&self) -> bool;

    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[cfg(not(feature = "sqlx"))]
    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

#[cfg(feature = "sqlx")]
impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Presentation of one error kind
#[derive(Debug, Clone, Copy)]
struct ErrorProfile {
    status: u16,
    code: &'static str,
    kind: &'static str,
    recoverable: bool,
    action: Option<&'static str>,
    /// Replaces the variant's own message in client responses
    generic_message: Option<&'static str>,
    level: LogLevel,
}

const DATABASE: ErrorProfile = ErrorProfile {
    status: 500,
    code: "DATABASE_ERROR",
    kind: "Database",
    recoverable: true,
    action: Some("Retry after a short delay"),
    generic_message: Some("Failed to access database"),
    level: LogLevel::Error,
};

const INVALID_INPUT: ErrorProfile = ErrorProfile {
    status: 400,
    code: "INVALID_INPUT",
    kind: "InvalidInput",
    recoverable: false,
    action: Some("Check the form fields and the PNG upload, then try again"),
    generic_message: None,
    level: LogLevel::Debug,
};

const NOT_FOUND: ErrorProfile = ErrorProfile {
    status: 404,
    code: "NOT_FOUND",
    kind: "NotFound",
    recoverable: false,
    action: Some("Verify the configuration ID exists"),
    generic_message: None,
    level: LogLevel::Debug,
};

const PAYLOAD_TOO_LARGE: ErrorProfile = ErrorProfile {
    status: 413,
    code: "PAYLOAD_TOO_LARGE",
    kind: "PayloadTooLarge",
    recoverable: false,
    action: Some("Upload a smaller image"),
    generic_message: None,
    level: LogLevel::Warn,
};

const UNAUTHORIZED: ErrorProfile = ErrorProfile {
    status: 401,
    code: "UNAUTHORIZED",
    kind: "Unauthorized",
    recoverable: false,
    action: Some("Send a valid bearer token"),
    generic_message: None,
    level: LogLevel::Debug,
};

const INTERNAL: ErrorProfile = ErrorProfile {
    status: 500,
    code: "INTERNAL_ERROR",
    kind: "Internal",
    recoverable: true,
    action: Some("Retry after a short delay"),
    generic_message: Some("Internal server error"),
    level: LogLevel::Error,
};

impl AppError {
    fn profile(&self) -> &'static ErrorProfile {
        match self {
            AppError::Database(_) => &DATABASE,
            AppError::InvalidInput(_) => &INVALID_INPUT,
            AppError::NotFound(_) => &NOT_FOUND,
            AppError::PayloadTooLarge(_) => &PAYLOAD_TOO_LARGE,
            AppError::Unauthorized(_) => &UNAUTHORIZED,
            AppError::Internal(_) | AppError::InternalWithSource { .. } => &INTERNAL,
        }
    }

    /// Variant name shown in non-production error details
    pub fn error_type(&self) -> &'static str {
        self.profile().kind
    }

    /// The error followed by up to five levels of its source chain.
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();
        let mut chain = std::iter::successors(self.source(), |&err| err.source());
        for cause in chain.by_ref().take(5) {
            details.push_str(&format!("\n  Caused by: {}", cause));
        }
        if chain.next().is_some() {
            details.push_str("\n  ... (truncated)");
        }
        details
    }

    fn message(&self) -> Option<&str> {
        match self {
            AppError::InvalidInput(msg)
            | AppError::NotFound(msg)
            | AppError::PayloadTooLarge(msg)
            | AppError::Unauthorized(msg)
            | AppError::Internal(msg) => Some(msg),
            AppError::InternalWithSource { message, .. } => Some(message),
            #[cfg(not(feature = "sqlx"))]
            AppError::Database(msg) => Some(msg),
            #[cfg(feature = "sqlx")]
            AppError::Database(_) => None,
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        self.profile().status
    }

    fn error_code(&self) -> &'static str {
        self.profile().code
    }

    fn is_recoverable(&self) -> bool {
        self.profile().recoverable
    }

    fn suggested_action(&self) -> Option<&'static str> {
        self.profile().action
    }

    fn is_sensitive(&self) -> bool {
        self.profile().generic_message.is_some()
    }

    fn log_level(&self) -> LogLevel {
        self.profile().level
    }

    fn client_message(&self) -> String {
        match self.profile().generic_message {
            Some(generic) => generic.to_string(),
            None => self.message().unwrap_or_default().to_string(),
        }
    }
}
