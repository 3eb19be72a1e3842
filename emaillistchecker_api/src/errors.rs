//! Error types for the API client.

use std::path::PathBuf;

use serde_json::Value;

/// Broad classification of an [`Error`], mirroring the HTTP outcome that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// HTTP 401.
    Authentication,
    /// HTTP 402.
    InsufficientCredits,
    /// HTTP 422.
    Validation,
    /// HTTP 429.
    RateLimit,
    /// Any other non-success status.
    Api,
    /// No HTTP status: transport failures, local file problems, bad arguments.
    Client,
}

/// Errors that can occur when making API requests.
///
/// Every variant produced from an HTTP response keeps the parsed response
/// body so callers can inspect server-provided details.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API key was rejected (HTTP 401).
    #[error("{message}")]
    Authentication { message: String, response_data: Value },
    /// The account does not have enough credits for the operation (HTTP 402).
    #[error("{message}")]
    InsufficientCredits { message: String, response_data: Value },
    /// The request failed server-side validation (HTTP 422).
    #[error("{message}")]
    Validation { message: String, response_data: Value },
    /// Too many requests (HTTP 429). `retry_after` is in seconds.
    #[error("{message}")]
    RateLimit {
        message: String,
        retry_after: u64,
        response_data: Value,
    },
    /// Any other non-success status.
    #[error("{message}")]
    Api {
        message: String,
        status: u16,
        response_data: Value,
    },
    /// The request did not complete within the configured timeout.
    #[error("Request timeout after {seconds} seconds")]
    Timeout { seconds: u64 },
    /// Connection, DNS or other transport-level failure.
    #[error("Request failed: {message}")]
    RequestFailed { message: String },
    /// A successful response body did not have the expected shape.
    #[error("Failed to decode response: {message}")]
    Decode { message: String },
    /// The base URL and path could not be combined into a valid URL.
    #[error("Invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
    /// The file passed for upload does not exist. Raised before any network call.
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::InsufficientCredits { .. } => ErrorKind::InsufficientCredits,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::RateLimit { .. } => ErrorKind::RateLimit,
            Self::Api { .. } => ErrorKind::Api,
            _ => ErrorKind::Client,
        }
    }

    /// HTTP status that produced this error, if it came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Authentication { .. } => Some(401),
            Self::InsufficientCredits { .. } => Some(402),
            Self::Validation { .. } => Some(422),
            Self::RateLimit { .. } => Some(429),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parsed response body attached to HTTP-level errors.
    pub fn response_data(&self) -> Option<&Value> {
        match self {
            Self::Authentication { response_data, .. }
            | Self::InsufficientCredits { response_data, .. }
            | Self::Validation { response_data, .. }
            | Self::RateLimit { response_data, .. }
            | Self::Api { response_data, .. } => Some(response_data),
            _ => None,
        }
    }

    /// Seconds the server asked the caller to wait. Only set for rate-limit errors.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimit { retry_after, .. } => Some(*retry_after),
            _ => None,
        }
    }
}
