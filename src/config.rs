// Use built-in library
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.deezer.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings handed to [`Deezer::new`](crate::client::Deezer::new).
///
/// The public catalog needs no credentials. An OAuth `access_token` is only
/// required for `user/me`, and when set it is sent with every request.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub access_token: Option<String>,
    pub timeout: Duration,
}

impl Config {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn access_token(mut self, access_token: Option<String>) -> Self {
        self.access_token = access_token.filter(|token| !token.is_empty());
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
