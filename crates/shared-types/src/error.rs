use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of errors surfaced by the console.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Bad input caught locally; never sent to the backend.
    ValidationError,
    /// Transport failure: timeout, DNS, refused connection, undecodable body.
    NetworkError,
    /// The backend answered but rejected the request.
    ServerError,
    /// A detail lookup for an entity that no longer exists.
    NotFound,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::NetworkError => write!(f, "NetworkError"),
            AppErrorKind::ServerError => write!(f, "ServerError"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
        }
    }
}

/// Structured error shared by the client engine and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

/// Banner text used when the backend rejects a request without a message.
pub const GENERIC_SERVER_MESSAGE: &str = "Something went wrong. Please try again.";

impl AppError {
    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Validation failure pinned to a single field.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), message.clone());
        Self::validation(message, field_errors)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NetworkError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::ServerError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// Server rejection carrying an optional backend message.
    pub fn server_or_generic(message: Option<String>) -> Self {
        match message {
            Some(m) if !m.trim().is_empty() => Self::server(m),
            _ => Self::server(GENERIC_SERVER_MESSAGE),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// Network and server failures render as the same page-level banner.
    pub fn is_banner(&self) -> bool {
        matches!(
            self.kind,
            AppErrorKind::NetworkError | AppErrorKind::ServerError
        )
    }

    /// Inline message for a single form field, if any.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.field_errors.get(name).map(String::as_str)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}
