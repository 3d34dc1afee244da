//! Error types for the Yahoo Fantasy client

use thiserror::Error;

/// Errors that can occur talking to the Yahoo Fantasy API
#[derive(Error, Debug)]
pub enum YahooError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("token refresh rejected ({status}): {body}")]
    Auth { status: reqwest::StatusCode, body: String },

    #[error("Yahoo API request failed ({status}): {body}")]
    Api { status: reqwest::StatusCode, body: String },

    #[error("no access token; refresh_auth must succeed before API calls")]
    NotAuthenticated,

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for Yahoo client operations
pub type YahooResult<T> = Result<T, YahooError>;
