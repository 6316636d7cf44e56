//! URL validation utilities.

use log::warn;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AnalysisError;

/// Validates an input URL before it is fetched.
///
/// Trims surrounding whitespace, then requires an absolute URL with an
/// `http`/`https` scheme and a host. Rejects URLs longer than `MAX_URL_LENGTH`.
/// No scheme is prepended: `example.com` is rejected rather than guessed.
///
/// # Arguments
///
/// * `input` - The URL string supplied by the caller
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` describing why the input was rejected.
pub fn validate_url(input: &str) -> Result<Url, AnalysisError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(AnalysisError::InvalidInput("URL is empty".to_string()));
    }

    if trimmed.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {})",
            trimmed.len(),
            MAX_URL_LENGTH
        );
        return Err(AnalysisError::InvalidInput(format!(
            "URL exceeds {MAX_URL_LENGTH} characters"
        )));
    }

    let parsed = Url::parse(trimmed).map_err(|e| {
        warn!("Rejecting invalid URL {trimmed}: {e}");
        AnalysisError::InvalidInput(e.to_string())
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            warn!("Rejecting unsupported scheme for URL: {trimmed}");
            return Err(AnalysisError::InvalidInput(format!(
                "unsupported scheme '{other}'"
            )));
        }
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(AnalysisError::InvalidInput("URL has no host".to_string())),
    }

    Ok(parsed)
}
