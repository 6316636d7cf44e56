//! Caller-facing error classification.
//!
//! Maps the one failure an analysis ended with onto the message, code and
//! transport status the caller sees.

use super::types::{AnalysisError, NetworkKind};

/// Message for a host name that does not resolve
pub const DNS_NOT_FOUND_MESSAGE: &str = "Domain not found. Please check the URL.";
/// Message for an actively refused connection
pub const CONNECTION_REFUSED_MESSAGE: &str = "Connection refused. The website may be down.";
/// Message for a request that never got an answer
pub const NO_RESPONSE_MESSAGE: &str =
    "No response received. The website may be blocking requests.";
/// Message for input that is not an absolute http(s) URL
pub const INVALID_URL_MESSAGE: &str = "Invalid URL";

/// Transport status for client-side failures (bad input)
pub const CLIENT_ERROR_STATUS: u16 = 400;
/// Transport status for every other failure
pub const SERVER_ERROR_STATUS: u16 = 500;

/// A failure as presented to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedError {
    /// User-safe message
    pub message: String,
    /// Machine-readable code, when one exists
    pub code: Option<String>,
    /// Transport status the routing layer should answer with
    pub http_status: u16,
}

impl ClassifiedError {
    fn new(message: impl Into<String>, code: Option<&str>, http_status: u16) -> Self {
        Self {
            message: message.into(),
            code: code.map(str::to_string),
            http_status,
        }
    }
}

/// Classifies an analysis failure.
///
/// Never fails: every variant maps to a message, an optional code and a
/// transport status.
pub fn classify(error: &AnalysisError) -> ClassifiedError {
    match error {
        AnalysisError::InvalidInput(_) => {
            ClassifiedError::new(INVALID_URL_MESSAGE, None, CLIENT_ERROR_STATUS)
        }
        AnalysisError::Network {
            kind: NetworkKind::DnsNotFound,
            ..
        } => ClassifiedError::new(
            DNS_NOT_FOUND_MESSAGE,
            NetworkKind::DnsNotFound.code(),
            SERVER_ERROR_STATUS,
        ),
        AnalysisError::Network {
            kind: NetworkKind::ConnectionRefused,
            ..
        } => ClassifiedError::new(
            CONNECTION_REFUSED_MESSAGE,
            NetworkKind::ConnectionRefused.code(),
            SERVER_ERROR_STATUS,
        ),
        AnalysisError::Network {
            kind: NetworkKind::Timeout | NetworkKind::NoResponse,
            ..
        } => ClassifiedError::new(NO_RESPONSE_MESSAGE, None, SERVER_ERROR_STATUS),
        AnalysisError::Network {
            kind:
                kind @ (NetworkKind::TooManyRedirects | NetworkKind::BodyTooLarge | NetworkKind::Other),
            message,
        } => ClassifiedError::new(message.as_str(), kind.code(), SERVER_ERROR_STATUS),
        AnalysisError::Http { .. } | AnalysisError::NoContent { .. } | AnalysisError::Parse(_) => {
            ClassifiedError::new(error.to_string(), None, SERVER_ERROR_STATUS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_classify_dns_failure() {
        let err = AnalysisError::network(
            NetworkKind::DnsNotFound,
            "error sending request: dns error: failed to lookup address information",
        );
        let classified = classify(&err);
        assert_eq!(classified.message, "Domain not found. Please check the URL.");
        assert_eq!(classified.code.as_deref(), Some("ENOTFOUND"));
        assert_eq!(classified.http_status, 500);
    }

    #[test]
    fn test_classify_connection_refused() {
        let err = AnalysisError::network(NetworkKind::ConnectionRefused, "os error 111");
        let classified = classify(&err);
        assert_eq!(
            classified.message,
            "Connection refused. The website may be down."
        );
        assert_eq!(classified.code.as_deref(), Some("ECONNREFUSED"));
    }

    #[test]
    fn test_classify_timeout_has_no_code() {
        let err = AnalysisError::network(NetworkKind::Timeout, "operation timed out");
        let classified = classify(&err);
        assert_eq!(classified.message, NO_RESPONSE_MESSAGE);
        assert_eq!(classified.code, None);
    }

    #[test]
    fn test_classify_http_failure() {
        let err = AnalysisError::Http {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        };
        let classified = classify(&err);
        assert_eq!(classified.message, "HTTP 503: Service Unavailable");
        assert_eq!(classified.code, None);
    }

    #[test]
    fn test_classify_invalid_input_is_client_error() {
        let classified = classify(&AnalysisError::InvalidInput("not a url".to_string()));
        assert_eq!(classified.message, "Invalid URL");
        assert_eq!(classified.code, None);
        assert_eq!(classified.http_status, 400);
    }

    #[test]
    fn test_classify_no_content_uses_raw_message() {
        let classified = classify(&AnalysisError::NoContent { status: 404 });
        assert_eq!(classified.message, "No content returned");
        assert_eq!(classified.code, None);
        assert_eq!(classified.http_status, 500);
    }

    #[test]
    fn test_classify_redirect_limit_keeps_native_code() {
        let err = AnalysisError::network(
            NetworkKind::TooManyRedirects,
            "error following redirect: too many redirects",
        );
        let classified = classify(&err);
        assert_eq!(
            classified.message,
            "error following redirect: too many redirects"
        );
        assert_eq!(classified.code.as_deref(), Some("ERR_TOO_MANY_REDIRECTS"));
    }

    #[test]
    fn test_classify_every_network_kind_produces_message() {
        for kind in NetworkKind::iter() {
            let classified = classify(&AnalysisError::network(kind, "boom"));
            assert!(!classified.message.is_empty(), "{:?} produced empty message", kind);
            assert_eq!(classified.http_status, SERVER_ERROR_STATUS);
        }
    }
}
