//! HTTP response extraction utilities.

use encoding_rs::{Encoding, UTF_8};
use log::debug;

use super::types::FetchedPage;
use crate::config::{MAX_RESPONSE_BODY_SIZE, UNKNOWN_STATUS_TEXT};
use crate::error_handling::{AnalysisError, NetworkKind};
use crate::utils::charset_token;

fn body_too_large(size: usize) -> AnalysisError {
    AnalysisError::network(
        NetworkKind::BodyTooLarge,
        format!("Response body of {size} bytes exceeds the {MAX_RESPONSE_BODY_SIZE} byte limit"),
    )
}

/// Maps a failure while the body is arriving: a timeout stays a network
/// failure, anything else means the response is unusable.
fn body_read_error(error: reqwest::Error, status: u16, status_text: &str) -> AnalysisError {
    if error.is_timeout() {
        AnalysisError::from(error)
    } else {
        AnalysisError::Http {
            status,
            status_text: status_text.to_string(),
        }
    }
}

/// Reads the body chunk by chunk, failing as soon as it passes
/// `MAX_RESPONSE_BODY_SIZE`.
async fn read_body_with_limit(
    response: &mut reqwest::Response,
    final_url: &str,
    status_text: &str,
) -> Result<Vec<u8>, AnalysisError> {
    let status = response.status().as_u16();
    let mut buf = Vec::new();

    while let Some(chunk) = response.chunk().await.map_err(|e| {
        log::warn!("Failed to read response body for {final_url}: {e}");
        body_read_error(e, status, status_text)
    })? {
        if buf.len() + chunk.len() > MAX_RESPONSE_BODY_SIZE {
            debug!(
                "Refusing {final_url}: body exceeds {} bytes (aborting at {} bytes)",
                MAX_RESPONSE_BODY_SIZE,
                buf.len() + chunk.len()
            );
            return Err(body_too_large(buf.len() + chunk.len()));
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf)
}

/// Decodes body bytes with the charset named in the Content-Type header,
/// falling back to UTF-8. A byte order mark takes precedence.
fn decode_body(bytes: &[u8], content_type: &str) -> String {
    let encoding = charset_token(content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        log::debug!("Body had bytes invalid in {}; replaced", used.name());
    }
    text.into_owned()
}

/// Reads status, headers and body out of an HTTP response.
///
/// The body is streamed under `MAX_RESPONSE_BODY_SIZE` and decoded using the
/// charset named in the Content-Type header (reqwest decompresses
/// gzip/deflate/br transparently).
///
/// # Arguments
///
/// * `response` - The HTTP response, after redirects
///
/// # Errors
///
/// - `AnalysisError::Network` with `BodyTooLarge` when the body exceeds
///   `MAX_RESPONSE_BODY_SIZE`, or `Timeout` when the body did not arrive in time
/// - `AnalysisError::Http` when the body cannot be read for any other reason
pub(crate) async fn extract_page(
    mut response: reqwest::Response,
) -> Result<FetchedPage, AnalysisError> {
    let final_url = response.url().to_string();
    let status = response.status();
    let status_text = status
        .canonical_reason()
        .unwrap_or(UNKNOWN_STATUS_TEXT)
        .to_string();

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    // Trace-level logging for HTTP protocol debugging
    log::trace!("Response version: {:?}", response.version());

    if let Some(declared) = response.content_length() {
        let declared = usize::try_from(declared).unwrap_or(usize::MAX);
        if declared > MAX_RESPONSE_BODY_SIZE {
            debug!("Refusing {final_url}: declared body of {declared} bytes");
            return Err(body_too_large(declared));
        }
    }

    let bytes = read_body_with_limit(&mut response, &final_url, &status_text).await?;
    let body = decode_body(&bytes, &content_type);

    debug!(
        "Fetched {final_url}: status {}, content-type '{content_type}', {} bytes",
        status.as_u16(),
        bytes.len()
    );

    Ok(FetchedPage {
        final_url,
        status: status.as_u16(),
        status_text,
        content_type,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_body_uses_declared_charset() {
        assert_eq!(
            decode_body(b"Caf\xe9", "text/html; charset=ISO-8859-1"),
            "Café"
        );
    }

    #[test]
    fn test_decode_body_defaults_to_utf8() {
        assert_eq!(decode_body("Café".as_bytes(), "text/html"), "Café");
        assert_eq!(decode_body("Café".as_bytes(), "text/html; charset=bogus"), "Café");
    }
}
