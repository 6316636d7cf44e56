//! Error type definitions.
//!
//! This module defines the failures a single analysis can end with, plus the
//! errors raised while initializing shared resources.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The supplied configuration was rejected.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigValidationError),
}

/// Why a request never produced a usable response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum NetworkKind {
    /// The host name did not resolve
    DnsNotFound,
    /// The origin actively refused the connection
    ConnectionRefused,
    /// The request timeout elapsed
    Timeout,
    /// More redirects than the client follows
    TooManyRedirects,
    /// The body exceeded `MAX_RESPONSE_BODY_SIZE`
    BodyTooLarge,
    /// The request was sent but nothing came back (reset, TLS failure, ...)
    NoResponse,
    /// Anything else
    Other,
}

impl NetworkKind {
    /// Machine-readable code reported to callers, when one exists.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            NetworkKind::DnsNotFound => Some("ENOTFOUND"),
            NetworkKind::ConnectionRefused => Some("ECONNREFUSED"),
            NetworkKind::TooManyRedirects => Some("ERR_TOO_MANY_REDIRECTS"),
            NetworkKind::BodyTooLarge => Some("ERR_BODY_TOO_LARGE"),
            NetworkKind::Timeout | NetworkKind::NoResponse | NetworkKind::Other => None,
        }
    }

    /// Returns a human-readable string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkKind::DnsNotFound => "DNS resolution failure",
            NetworkKind::ConnectionRefused => "Connection refused",
            NetworkKind::Timeout => "Request timeout",
            NetworkKind::TooManyRedirects => "Too many redirects",
            NetworkKind::BodyTooLarge => "Response body too large",
            NetworkKind::NoResponse => "No response",
            NetworkKind::Other => "Network error",
        }
    }
}

impl std::fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single failure an analysis ends with.
///
/// Produced by input validation, the fetcher and the parser; consumed
/// exhaustively by [`classify`](super::classify).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input is not an absolute http(s) URL. Raised before any I/O.
    #[error("Invalid URL: {0}")]
    InvalidInput(String),

    /// The request failed before a usable response arrived.
    #[error("{message}")]
    Network {
        /// Category of the failure
        kind: NetworkKind,
        /// Underlying error message, including its causes
        message: String,
    },

    /// A response arrived but its body could not be read.
    #[error("HTTP {status}: {status_text}")]
    Http {
        /// Response status code
        status: u16,
        /// Canonical reason phrase of the status
        status_text: String,
    },

    /// The response body was entirely empty.
    #[error("No content returned")]
    NoContent {
        /// Response status code
        status: u16,
    },

    /// The body is not markup at all.
    #[error("Failed to parse document: {0}")]
    Parse(String),
}

impl AnalysisError {
    /// Shorthand for a [`AnalysisError::Network`] failure.
    pub fn network(kind: NetworkKind, message: impl Into<String>) -> Self {
        AnalysisError::Network {
            kind,
            message: message.into(),
        }
    }
}
