//! HTTP response processing.
//!
//! This module turns a received response into a `FetchedPage`.

mod extract;
mod types;

pub(crate) use extract::extract_page;
pub use types::{FetchedPage, ResponseInfo};
