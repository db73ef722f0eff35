//! Mailsift: email discovery for spreadsheets of websites
//!
//! This crate takes a publicly shared spreadsheet of website URLs, visits
//! each site with a configurable set of extraction strategies, and collects
//! the e-mail addresses it finds into an exportable results table.

pub mod config;
pub mod discovery;
pub mod extract;
pub mod output;
pub mod runner;
pub mod sheet;
pub mod url;

use thiserror::Error;

/// Main error type for mailsift operations
#[derive(Debug, Error)]
pub enum MailsiftError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Spreadsheet error: {0}")]
    Sheet(#[from] SheetError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised while loading the website list from a shared spreadsheet
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("Invalid spreadsheet link: {0}")]
    InvalidLink(String),

    #[error("Failed to load spreadsheet: {0}")]
    Load(String),

    #[error("Spreadsheet has no '{0}' column")]
    MissingColumn(String),

    #[error("Failed to parse spreadsheet CSV: {0}")]
    Parse(#[from] csv::Error),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for mailsift operations
pub type Result<T> = std::result::Result<T, MailsiftError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use discovery::{DiscoveryEngine, DiscoveryReport};
pub use runner::{Coordinator, RunSummary, SiteRecord};
pub use self::url::{ensure_scheme, extract_host, normalize_url};
