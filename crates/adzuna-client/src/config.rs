//! Client configuration and API credentials.
//!
//! Credentials are resolved once at startup and handed to the client as an
//! explicit value. Nothing in this crate reads the process environment after
//! construction.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, ClientResult};

/// Production base URL of the Adzuna REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.adzuna.com/v1/api";

/// Upper bound on a single request, including reading the body.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Environment variable holding the application id.
pub const APP_ID_ENV: &str = "ADZUNA_APP_ID";

/// Environment variable holding the application key.
pub const APP_KEY_ENV: &str = "ADZUNA_APP_KEY";

/// Adzuna application credentials, sent as `app_id` / `app_key` on every request.
#[derive(Debug)]
pub struct Credentials {
    app_id: String,
    app_key: SecretString,
}

impl Credentials {
    /// Build credentials, rejecting empty values.
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> ClientResult<Self> {
        let app_id = app_id.into();
        let app_key = app_key.into();

        if app_id.is_empty() {
            return Err(ClientError::config_error(format!(
                "Missing Adzuna API credentials: {APP_ID_ENV} is not set. \
                 Set {APP_ID_ENV} and {APP_KEY_ENV} in the environment or a .env file."
            )));
        }
        if app_key.is_empty() {
            return Err(ClientError::config_error(format!(
                "Missing Adzuna API credentials: {APP_KEY_ENV} is not set. \
                 Set {APP_ID_ENV} and {APP_KEY_ENV} in the environment or a .env file."
            )));
        }

        Ok(Self {
            app_id,
            app_key: SecretString::from(app_key),
        })
    }

    /// Read credentials from the process environment.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary key lookup.
    ///
    /// Lets tests supply credentials without mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_id = lookup(APP_ID_ENV).unwrap_or_default();
        let app_key = lookup(APP_KEY_ENV).unwrap_or_default();
        Self::new(app_id, app_key)
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub(crate) fn app_key(&self) -> &str {
        self.app_key.expose_secret()
    }
}

/// Configuration for [`crate::AdzunaApiClient`].
#[derive(Debug)]
pub struct AdzunaApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub credentials: Credentials,
}

impl AdzunaApiConfig {
    /// Production endpoint with the default 30 second timeout.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            credentials,
        }
    }

    /// Point the client at a different API root (proxies, mock servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}
