use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// All errors that can occur when using the Filespot client.
#[derive(Error, Debug)]
pub enum FilespotError {
    /// The API answered with a status outside the success range.
    #[error(transparent)]
    Api(#[from] Box<ApiError>),

    /// A transport-level HTTP error from reqwest.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint path could not be resolved against the base URL.
    #[error("invalid request path: {0}")]
    Url(#[from] url::ParseError),

    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Query parameters could not be serialized.
    #[error("failed to encode query parameters: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// A success response whose payload does not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// An I/O error, typically from reading a file for upload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The client could not be configured.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl FilespotError {
    /// The decoded API error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            FilespotError::Api(err) => Some(err.as_ref()),
            _ => None,
        }
    }

    /// HTTP status of the failed response, for API and transport errors that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FilespotError::Api(err) => Some(err.http_status),
            FilespotError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<ApiError> for FilespotError {
    fn from(err: ApiError) -> Self {
        FilespotError::Api(Box::new(err))
    }
}

/// Error envelope returned by the API for non-success responses.
///
/// A body counts as an envelope only when it carries both `code` and
/// `status`.
#[derive(Error, Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiError {
    /// HTTP status the error arrived with.
    #[serde(skip)]
    pub http_status: u16,

    pub code: u32,

    pub status: String,

    /// Message meant for end users.
    #[serde(default)]
    pub msg_user: String,

    /// Message meant for developers.
    #[serde(default)]
    pub msg_dev: String,

    /// Link to the relevant documentation section.
    #[serde(default)]
    pub doc: String,

    #[serde(default)]
    pub advanced: Option<serde_json::Value>,
}

impl ApiError {
    /// Decode an error body, falling back to the bare HTTP status when the
    /// body is not an error envelope (e.g. a proxy error page).
    pub(crate) fn from_response(http_status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ApiError>(body) {
            Ok(err) => ApiError { http_status, ..err },
            Err(_) => ApiError {
                http_status,
                code: http_status.into(),
                status: reqwest::StatusCode::from_u16(http_status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("unknown")
                    .to_string(),
                msg_dev: String::from_utf8_lossy(body).into_owned(),
                ..Default::default()
            },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.code, self.status, self.msg_user)?;
        for detail in [&self.msg_dev, &self.doc] {
            if !detail.is_empty() {
                write!(f, "\n\t{detail}")?;
            }
        }
        Ok(())
    }
}

/// A convenience alias for `Result<T, FilespotError>`.
pub type Result<T> = std::result::Result<T, FilespotError>;
