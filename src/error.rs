//! Error types for the uplink SDK.
//!
//! This module defines the error type system for everything that can go
//! wrong while talking to the relay service. The three remote-failure
//! variants (`ConnectionRefused`, `TransmissionLost`, `MalformedResponse`)
//! are recovered locally by the session controller and surfaced as chat-log
//! entries; the remaining variants cover local misuse and client plumbing.

use std::error;
use std::fmt;
use std::sync::Arc;

/// The main error type for the uplink SDK.
#[derive(Clone, Debug)]
pub enum Error {
    /// The relay rejected or never answered an initiate request.
    ConnectionRefused {
        /// Human-readable detail supplied by the service, if any.
        detail: Option<String>,
    },

    /// The relay rejected or never answered an exchange request.
    TransmissionLost {
        /// Human-readable detail supplied by the service, if any.
        detail: Option<String>,
    },

    /// The relay answered with a success status but the body was
    /// unparsable or missing expected fields.
    MalformedResponse {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// A request precondition was violated before anything went on the wire.
    Validation {
        /// Human-readable error message.
        message: String,
        /// Parameter that failed validation.
        param: Option<String>,
    },

    /// HTTP client error.
    HttpClient {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// A URL parsing or manipulation error.
    Url {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<url::ParseError>,
    },
}

impl Error {
    /// Creates a new connection-refused error.
    pub fn connection_refused(detail: Option<String>) -> Self {
        Error::ConnectionRefused { detail }
    }

    /// Creates a new transmission-lost error.
    pub fn transmission_lost(detail: Option<String>) -> Self {
        Error::TransmissionLost { detail }
    }

    /// Creates a new malformed-response error.
    pub fn malformed_response(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::MalformedResponse {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new validation error.
    pub fn validation(message: impl Into<String>, param: Option<String>) -> Self {
        Error::Validation {
            message: message.into(),
            param,
        }
    }

    /// Creates a new HTTP client error.
    pub fn http_client(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::HttpClient {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new URL error.
    pub fn url(message: impl Into<String>, source: Option<url::ParseError>) -> Self {
        Error::Url {
            message: message.into(),
            source,
        }
    }

    /// Returns true if this error is a refused initiate.
    pub fn is_connection_refused(&self) -> bool {
        matches!(self, Error::ConnectionRefused { .. })
    }

    /// Returns true if this error is a failed exchange.
    pub fn is_transmission_lost(&self) -> bool {
        matches!(self, Error::TransmissionLost { .. })
    }

    /// Returns true if this error is a malformed response.
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Error::MalformedResponse { .. })
    }

    /// Returns true if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Returns the service-supplied human-readable detail, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::ConnectionRefused { detail } => detail.as_deref(),
            Error::TransmissionLost { detail } => detail.as_deref(),
            Error::MalformedResponse { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConnectionRefused { detail } => {
                if let Some(detail) = detail {
                    write!(f, "Connection refused: {detail}")
                } else {
                    write!(f, "Connection refused")
                }
            }
            Error::TransmissionLost { detail } => {
                if let Some(detail) = detail {
                    write!(f, "Transmission lost: {detail}")
                } else {
                    write!(f, "Transmission lost")
                }
            }
            Error::MalformedResponse { message, .. } => {
                write!(f, "Malformed response: {message}")
            }
            Error::Validation { message, param } => {
                if let Some(param) = param {
                    write!(f, "Validation error: {message} (parameter: {param})")
                } else {
                    write!(f, "Validation error: {message}")
                }
            }
            Error::HttpClient { message, .. } => {
                write!(f, "HTTP client error: {message}")
            }
            Error::Url { message, .. } => {
                write!(f, "URL error: {message}")
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::MalformedResponse { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::HttpClient { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Url { source, .. } => {
                source.as_ref().map(|e| e as &(dyn error::Error + 'static))
            }
            _ => None,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::url(format!("URL parse error: {err}"), Some(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::malformed_response(format!("JSON error: {err}"), Some(Box::new(err)))
    }
}

/// A specialized Result type for uplink operations.
pub type Result<T> = std::result::Result<T, Error>;
