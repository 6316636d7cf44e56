//! Input handling shared by the library entry points.
//!
//! This module provides URL validation used before any network I/O.

pub mod url;

// Re-export public API
pub use self::url::validate_url;
