use thiserror::Error;

pub type Result<T, E = Error > = std::result::Result<T, E >;

/// Errors surfaced to callers of the fetchers.
///
/// Every backend failure collapses into [`Error::FetchFailed`]; the underlying
/// [`BackendError`] stays reachable through `source()`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Error fetching {slug}.")]
    FetchFailed {
        slug: String,
        #[source]
        source: BackendError,
    },

    #[error("Configuration Error: {0}")]
    ConfigError(#[source] config::ConfigError),

    #[error("Invalid timeout {value:?}: {source}")]
    InvalidTimeout {
        value: String,
        #[source]
        source: humantime::DurationError,
    },

    #[error("Api key is not a valid header value")]
    InvalidApiKey(#[source] reqwest::header::InvalidHeaderValue),

    #[error("Http Client Error: {0}")]
    HttpClientBuildError(#[source] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Content Backend Error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Global {0:?} not found")]
    NotFound(String),

    #[error("Content Backend Client Error (status {status}): {body}")]
    Client { status: u16, body: String },

    #[error("Content Backend Server Error (status {status}): {body}")]
    Server { status: u16, body: String },

    #[error("SerializationError: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Invalid backend url: {0}")]
    InvalidUrl(String),
}

impl Error {
    pub fn slug(&self) -> Option<&str> {
        match self {
            Error::FetchFailed { slug, .. } => Some(slug.as_str()),
            _ => None,
        }
    }
}

impl BackendError {
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::NotFound(_) => Some(404),
            BackendError::Client { status, .. } | BackendError::Server { status, .. } => Some(*status),
            BackendError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use super::*;

    #[test]
    fn fetch_failed_message_is_fixed_per_slug() {
        let err = Error::FetchFailed {
            slug: "footer".to_string(),
            source: BackendError::NotFound("footer".to_string()),
        };
        assert_eq!(err.to_string(), "Error fetching footer.");
        assert_eq!(err.slug(), Some("footer"));
    }

    #[test]
    fn fetch_failed_keeps_cause() {
        let err = Error::FetchFailed {
            slug: "footer".to_string(),
            source: BackendError::Server { status: 503, body: "maintenance".to_string() },
        };
        let cause = err.source().expect("cause should be chained");
        assert_eq!(cause.to_string(), "Content Backend Server Error (status 503): maintenance");
    }

    #[test]
    fn backend_error_status() {
        assert_eq!(BackendError::NotFound("x".into()).status(), Some(404));
        assert_eq!(BackendError::Client { status: 401, body: String::new() }.status(), Some(401));
        assert_eq!(BackendError::InvalidUrl("::".into()).status(), None);
    }
}
