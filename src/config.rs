//! Client configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Base address used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://0.0.0.0:9898";

/// Environment variable overriding the base address.
pub const API_URL_ENV: &str = "PPTWIZARD_API_URL";

/// Environment variable overriding the token file location.
pub const TOKEN_FILE_ENV: &str = "PPTWIZARD_TOKEN_FILE";

/// File name the bearer token is persisted under.
pub const TOKEN_FILE_NAME: &str = "access_token";

const APP_DIR_NAME: &str = "pptwizard";

/// Options for talking to the presentation service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base address of the service, without a trailing slash
    pub base_url: String,

    /// Where the bearer token is persisted (None = keep it in memory only)
    pub token_path: Option<PathBuf>,

    /// Per-request timeout (None = transport default)
    pub timeout: Option<Duration>,

    /// User agent sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration honouring `PPTWIZARD_API_URL` and
    /// `PPTWIZARD_TOKEN_FILE`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = non_empty_var(API_URL_ENV) {
            config = config.with_base_url(url);
        }
        if let Some(path) = non_empty_var(TOKEN_FILE_ENV) {
            config = config.with_token_path(path);
        }
        config
    }

    /// Set the base address.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the token file location.
    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    /// Keep the token in memory only.
    pub fn without_token_file(mut self) -> Self {
        self.token_path = None;
        self
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Join an endpoint path onto the base address.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            token_path: default_token_path(),
            timeout: None,
            user_agent: format!("pptwizard/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Default token location: `<data dir>/pptwizard/access_token`.
pub fn default_token_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(APP_DIR_NAME).join(TOKEN_FILE_NAME))
}
