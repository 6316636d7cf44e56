//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, etc.)
//! - Browser-like request header values
//! - Library configuration and CLI option types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{AnalyzeArgs, Cli, Command, Config, ConfigValidationError, LogFormat, LogLevel, ServeArgs};
