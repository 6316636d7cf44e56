//! Tests for CLI subcommand parsing.

use clap::Parser;
use meta_analyzer::config::{Cli, Command, LogFormat, LogLevel, DEFAULT_PORT, MAX_REDIRECT_HOPS};

#[test]
fn test_analyze_subcommand_defaults() {
    let cli = Cli::try_parse_from(["meta_analyzer", "analyze", "https://example.com/"])
        .expect("analyze should parse");

    match &cli.command {
        Command::Analyze(args) => {
            assert_eq!(args.url, "https://example.com/");
            assert!(!args.pretty);
        }
        Command::Serve(_) => panic!("expected analyze"),
    }
    assert!(matches!(cli.log_format, LogFormat::Plain));
    assert_eq!(cli.timeout_seconds, 10);

    let config = cli.config();
    assert_eq!(config.max_redirects, MAX_REDIRECT_HOPS);
    assert!(config.validate().is_ok());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "meta_analyzer",
        "analyze",
        "https://example.com/",
        "--pretty",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--timeout-seconds",
        "3",
    ])
    .expect("flags should parse");

    assert!(matches!(cli.log_level, LogLevel::Debug));
    assert!(matches!(cli.log_format, LogFormat::Json));
    assert_eq!(cli.config().timeout_seconds, 3);
    assert!(matches!(cli.command, Command::Analyze(ref args) if args.pretty));
}

#[test]
fn test_serve_subcommand() {
    let cli = Cli::try_parse_from(["meta_analyzer", "serve", "--port", "8080", "--host", "127.0.0.1"])
        .expect("serve should parse");
    match cli.command {
        Command::Serve(args) => {
            assert_eq!(args.port, 8080);
            assert_eq!(args.host, "127.0.0.1");
        }
        Command::Analyze(_) => panic!("expected serve"),
    }
}

#[test]
fn test_serve_default_port() {
    // PORT from the environment would override the default
    if std::env::var_os("PORT").is_some() {
        return;
    }
    let cli = Cli::try_parse_from(["meta_analyzer", "serve"]).expect("serve should parse");
    assert!(matches!(cli.command, Command::Serve(ref args) if args.port == DEFAULT_PORT));
}

#[test]
fn test_missing_subcommand_is_error() {
    assert!(Cli::try_parse_from(["meta_analyzer"]).is_err());
}

#[test]
fn test_analyze_requires_url() {
    assert!(Cli::try_parse_from(["meta_analyzer", "analyze"]).is_err());
}

#[test]
fn test_invalid_log_level_is_error() {
    assert!(Cli::try_parse_from([
        "meta_analyzer",
        "--log-level",
        "verbose",
        "analyze",
        "https://example.com/"
    ])
    .is_err());
}
