//! Utility functions shared by the pipeline stages.
//!
//! This module provides:
//! - URL resolution against the page's resolved address
//! - CSS selector parsing utilities
//! - `charset=` token extraction from Content-Type values

mod charset;
mod selector;
mod url;

pub use self::url::resolve_url;
pub use charset::charset_token;
pub use selector::parse_selector_with_fallback;
