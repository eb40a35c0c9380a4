use crate::error_kind::ErrorKind;
use thiserror::Error;

/// Where an error came from and what the lower layers reported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// HTTP status of the response that produced the error, if any
    pub status: Option<u16>,
    /// Underlying low-level description (e.g., the serde or transport error text)
    pub details: Option<String>,
    /// Stage that raised the error (e.g., "validation", "transport", "response")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Unified error type for the Dermalytics client.
///
/// One variant per [`ErrorKind`]; every variant carries the human-readable
/// message and the context it was raised with.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Authentication error: {message}{}", format_context(.context))]
    Authentication {
        message: String,
        context: ErrorContext,
    },

    #[error("Not found error: {message}{}", format_context(.context))]
    NotFound {
        message: String,
        context: ErrorContext,
    },

    #[error("Rate limit error: {message}{}", format_context(.context))]
    RateLimit {
        message: String,
        context: ErrorContext,
    },

    #[error("API error: {message}{}", format_context(.context))]
    Api {
        message: String,
        context: ErrorContext,
    },
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(status) = ctx.status {
        parts.push(format!("status: {}", status));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Build an error of the given kind.
    pub fn from_kind(kind: ErrorKind, msg: impl Into<String>, context: ErrorContext) -> Self {
        let message = msg.into();
        match kind {
            ErrorKind::Validation => Error::Validation { message, context },
            ErrorKind::Authentication => Error::Authentication { message, context },
            ErrorKind::NotFound => Error::NotFound { message, context },
            ErrorKind::RateLimit => Error::RateLimit { message, context },
            ErrorKind::Api => Error::Api { message, context },
        }
    }

    /// Create a validation error raised before any network call
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::validation_with_context(msg, ErrorContext::new().with_source("validation"))
    }

    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Self::from_kind(ErrorKind::Validation, msg, context)
    }

    /// Create a new generic API error with structured context
    pub fn api_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Self::from_kind(ErrorKind::Api, msg, context)
    }

    /// Create a network-level failure; the message is the transport's own description
    pub fn network_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Self::api_with_context(msg, context.with_source("transport"))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation { .. } => ErrorKind::Validation,
            Error::Authentication { .. } => ErrorKind::Authentication,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::RateLimit { .. } => ErrorKind::RateLimit,
            Error::Api { .. } => ErrorKind::Api,
        }
    }

    /// The bare message, without kind prefix or context suffix
    pub fn message(&self) -> &str {
        match self {
            Error::Validation { message, .. }
            | Error::Authentication { message, .. }
            | Error::NotFound { message, .. }
            | Error::RateLimit { message, .. }
            | Error::Api { message, .. } => message,
        }
    }

    pub fn context(&self) -> &ErrorContext {
        match self {
            Error::Validation { context, .. }
            | Error::Authentication { context, .. }
            | Error::NotFound { context, .. }
            | Error::RateLimit { context, .. }
            | Error::Api { context, .. } => context,
        }
    }

    /// HTTP status of the failed response, if the error came from one
    pub fn status(&self) -> Option<u16> {
        self.context().status
    }
}
