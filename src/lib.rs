//! meta_analyzer library: page metadata extraction
//!
//! This library fetches a web page and extracts a normalized profile of its
//! metadata: SEO tags, Open Graph and Twitter card tags, technical tags
//! (charset, viewport, favicon), plus every `<meta>` and `<link>` element.
//! Relative URLs are resolved against the page's address after redirects, and
//! every failure is classified into a user-safe message and code.
//!
//! # Example
//!
//! ```no_run
//! use meta_analyzer::{Analyzer, AnalysisResponse, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = Analyzer::new(&Config::default())?;
//!
//! match analyzer.analyze("https://example.com/").await {
//!     AnalysisResponse::Success(result) => {
//!         println!("{}: {}", result.meta_tags.final_url, result.meta_tags.title);
//!     }
//!     AnalysisResponse::Failure(failure) => {
//!         eprintln!("analysis failed: {}", failure.error);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod analysis;
pub mod app;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod parse;
pub mod server;
pub mod utils;

// Re-export public API
pub use analysis::{analyze_url, AnalysisFailure, AnalysisResponse, AnalysisResult, Analyzer};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{classify, AnalysisError, ClassifiedError, NetworkKind};
pub use parse::{LinkEntry, MetaProfile, RawMetaEntry};
