//! Where the todo API lives.
//!
//! Native hosts read `TODO_API_URL` from the process environment. The browser
//! build has no environment at runtime, so it bakes the same variable in at
//! compile time. Either way an unset or blank value falls back to
//! [`DEFAULT_API_URL`].

/// Environment variable holding the API base URL.
pub const API_URL_VAR: &str = "TODO_API_URL";

/// Base URL used when [`API_URL_VAR`] is unset or blank.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: String,
}

impl ClientConfig {
    /// Strips one trailing `/` so paths can be appended with `/todos`.
    pub fn new(api_url: &str) -> Self {
        let api_url = api_url.strip_suffix('/').unwrap_or(api_url);
        Self {
            api_url: api_url.to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::resolve(std::env::var(API_URL_VAR).ok().as_deref())
    }

    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("TODO_API_URL"))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn resolve(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
