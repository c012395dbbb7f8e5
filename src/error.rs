use reqwest::{StatusCode, Url};

/// Every failure a lookup can surface.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Rejected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unauthorized request to {url}, check the API token and its allowed IPs")]
    Unauthorized { url: Url },

    #[error("nothing found at {url}")]
    NotFound { url: Url },

    #[error("rate limited on {url}")]
    RateLimited { url: Url },

    /// 5xx answer. A 503 means in-game maintenance.
    #[error("service unavailable ({status}) for {url}")]
    ServiceUnavailable { url: Url, status: StatusCode },

    #[error("request to {url} failed with {status}{}", match reason { Some(r) => format!(": {r}"), None => "".into() })]
    Request {
        url: Url,
        status: StatusCode,
        reason: Option<String>,
    },

    /// The request never got a status back (connect, TLS, timeout).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed response from {url}: {source}")]
    MalformedResponse {
        url: Url,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    EnvVar(#[from] EnvVarError),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({var})")]
pub struct EnvVarError {
    var: String,
    #[source]
    source: std::env::VarError,
}

impl EnvVarError {
    pub fn new(var: &str, source: std::env::VarError) -> Self {
        Self {
            var: var.into(),
            source,
        }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

pub type Result<T> = std::result::Result<T, Error>;
