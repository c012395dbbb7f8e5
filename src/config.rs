use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::error::{EnvVarError, Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.brawlstars.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(45);

pub const TOKEN_VAR: &str = "BRAWL_STARS_TOKEN";
pub const BASE_URL_VAR: &str = "BRAWL_STARS_BASE_URL";
pub const TIMEOUT_VAR: &str = "BRAWL_STARS_TIMEOUT_SECS";

/// Settings shared by [`ApiClient`](crate::ApiClient) and
/// [`BlockingApiClient`](crate::BlockingApiClient).
///
/// Requests are bounded by `timeout` and never retried.
#[derive(Clone)]
pub struct Config {
    pub(crate) token: String,
    pub(crate) base_url: Url,
    pub(crate) timeout: Duration,
    pub(crate) user_agent: String,
}

impl Config {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: default_base_url(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("bstats/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    // requires BRAWL_STARS_TOKEN env var
    // BRAWL_STARS_BASE_URL and BRAWL_STARS_TIMEOUT_SECS are optional
    pub fn from_env() -> Result<Self> {
        let token = env::var(TOKEN_VAR).map_err(|e| EnvVarError::new(TOKEN_VAR, e))?;
        let mut config = Self::new(token);

        if let Ok(base_url) = env::var(BASE_URL_VAR) {
            config = config.with_base_url(&base_url)?;
        }
        if let Ok(secs) = env::var(TIMEOUT_VAR) {
            let secs = secs.trim().parse::<u64>().map_err(|_| {
                Error::invalid(format!("{TIMEOUT_VAR} must be whole seconds, got {secs:?}"))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| Error::invalid(format!("bad base url {base_url:?}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(Error::invalid(format!("{base_url:?} cannot be a base url")));
        }
        self.base_url = url;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

// the token stays out of logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid url")
}
