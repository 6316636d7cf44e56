//! Error categorization.
//!
//! Turns `reqwest::Error` values into a [`NetworkKind`] once, at the fetch
//! boundary, so nothing downstream has to inspect error strings.

use std::error::Error as StdError;

use super::types::{AnalysisError, NetworkKind};

// Resolver messages, lowercased. hyper-util reports getaddrinfo failures as
// "dns error: failed to lookup address information: <gai message>".
const DNS_FAILURE_PATTERNS: &[&str] = &[
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "nodename nor servname",
    "no such host",
    "temporary failure in name resolution",
    "no address associated with hostname",
];

/// Joins an error and all of its sources into one message.
///
/// reqwest's own `Display` only says "error sending request for url (...)";
/// the useful part is in the source chain.
pub fn error_chain_message(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

fn chain_has_io_kind(error: &(dyn StdError + 'static), kind: std::io::ErrorKind) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(error);
    while let Some(err) = current {
        if let Some(io_err) = err.downcast_ref::<std::io::Error>() {
            if io_err.kind() == kind {
                return true;
            }
        }
        current = err.source();
    }
    false
}

/// Categorizes a `reqwest::Error` into a [`NetworkKind`].
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The kind the error classifier keys its message on.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> NetworkKind {
    if error.is_timeout() {
        return NetworkKind::Timeout;
    }
    if error.is_redirect() {
        return NetworkKind::TooManyRedirects;
    }
    if chain_has_io_kind(error, std::io::ErrorKind::ConnectionRefused) {
        return NetworkKind::ConnectionRefused;
    }
    if chain_has_io_kind(error, std::io::ErrorKind::TimedOut) {
        return NetworkKind::Timeout;
    }

    let message = error_chain_message(error).to_lowercase();
    if DNS_FAILURE_PATTERNS
        .iter()
        .any(|pattern| message.contains(pattern))
    {
        return NetworkKind::DnsNotFound;
    }
    if message.contains("connection refused") {
        return NetworkKind::ConnectionRefused;
    }

    if error.is_connect() || error.is_request() || error.is_body() {
        NetworkKind::NoResponse
    } else {
        NetworkKind::Other
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(error: reqwest::Error) -> Self {
        let kind = categorize_reqwest_error(&error);
        AnalysisError::Network {
            kind,
            message: error_chain_message(&error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug)]
    struct Wrapper {
        inner: io::Error,
    }

    impl std::fmt::Display for Wrapper {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("client error (Connect)")
        }
    }

    impl StdError for Wrapper {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.inner)
        }
    }

    #[test]
    fn test_error_chain_message_includes_sources() {
        let err = Wrapper {
            inner: io::Error::new(io::ErrorKind::ConnectionRefused, "Connection refused (os error 111)"),
        };
        assert_eq!(
            error_chain_message(&err),
            "client error (Connect): Connection refused (os error 111)"
        );
    }

    #[test]
    fn test_chain_has_io_kind() {
        let err = Wrapper {
            inner: io::Error::new(io::ErrorKind::ConnectionRefused, "refused"),
        };
        assert!(chain_has_io_kind(&err, io::ErrorKind::ConnectionRefused));
        assert!(!chain_has_io_kind(&err, io::ErrorKind::TimedOut));
    }

    #[tokio::test]
    async fn test_categorize_connection_refused() {
        // Bind then drop a listener so the port is known to be closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let client = reqwest::Client::new();
        let err = client
            .get(format!("http://{}/", addr))
            .send()
            .await
            .expect_err("closed port should refuse");
        assert_eq!(categorize_reqwest_error(&err), NetworkKind::ConnectionRefused);
    }

    #[tokio::test]
    #[ignore] // Requires a working system resolver
    async fn test_categorize_invalid_domain_as_dns_failure() {
        // .invalid is reserved and never resolves (RFC 2606)
        let client = reqwest::Client::new();
        let err = client
            .get("http://does-not-exist.invalid/")
            .send()
            .await
            .expect_err("reserved TLD should not resolve");
        assert_eq!(categorize_reqwest_error(&err), NetworkKind::DnsNotFound);
    }
}
