//! Error kinds exposed by the Dermalytics client.
//!
//! Every failure surfaced by this crate falls into exactly one of five kinds.
//! HTTP responses are mapped onto them as follows:
//!
//! | Status                 | Kind             |
//! |------------------------|------------------|
//! | 400                    | `Validation`     |
//! | 401, 403               | `Authentication` |
//! | 404                    | `NotFound`       |
//! | 429                    | `RateLimit`      |
//! | anything else non-2xx  | `Api`            |
//!
//! ## Example
//!
//! ```rust
//! use dermalytics::ErrorKind;
//!
//! assert_eq!(ErrorKind::from_http_status(403), ErrorKind::Authentication);
//! assert_eq!(ErrorKind::from_http_status(418), ErrorKind::Api);
//! assert_eq!(ErrorKind::RateLimit.name(), "rate_limit");
//! ```

use std::fmt;

/// Classification of a client failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad caller input, detected locally or reported by the server (400)
    Validation,
    /// Missing, invalid or insufficient credentials (401, 403)
    Authentication,
    /// The requested ingredient or resource does not exist (404)
    NotFound,
    /// Request rate limit exceeded (429)
    RateLimit,
    /// Network failure, malformed response, server error or unclassified status
    Api,
}

impl ErrorKind {
    /// Returns the snake_case name (e.g., `"not_found"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Authentication => "authentication",
            Self::NotFound => "not_found",
            Self::RateLimit => "rate_limit",
            Self::Api => "api",
        }
    }

    /// Maps a non-success HTTP status code to its error kind.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::Validation,
            401 | 403 => Self::Authentication,
            404 => Self::NotFound,
            429 => Self::RateLimit,
            _ => Self::Api,
        }
    }
}

/// Statuses whose messages get the `"Server error: "` prefix.
#[inline]
pub fn is_server_error_status(status: u16) -> bool {
    matches!(status, 500 | 502 | 503 | 504)
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
