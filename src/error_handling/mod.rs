//! Error handling and classification.
//!
//! This module provides:
//! - Error type definitions (`AnalysisError`, `NetworkKind`, `InitializationError`)
//! - Categorization of `reqwest` errors into network failure kinds
//! - The classifier that turns a failure into a caller-facing message and code
//!
//! Failures fall into five groups:
//! - **Invalid input**: the URL is rejected before any I/O
//! - **Network**: DNS, refused connection, timeout, redirect limit
//! - **HTTP**: a response arrived without a usable body
//! - **No content**: the body was empty
//! - **Parse**: the body is not markup

mod categorization;
mod classify;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, error_chain_message};
pub use classify::{
    classify, ClassifiedError, CLIENT_ERROR_STATUS, CONNECTION_REFUSED_MESSAGE,
    DNS_NOT_FOUND_MESSAGE, INVALID_URL_MESSAGE, NO_RESPONSE_MESSAGE, SERVER_ERROR_STATUS,
};
pub use types::{AnalysisError, InitializationError, NetworkKind};
