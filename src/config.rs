//! Site configuration.
//!
//! Layered as: defaults, then environment, then command-line flags.
//!
//! | Setting | Env | Flag | Default |
//! |---------|-----|------|---------|
//! | base URL | `PROXIFY_BASE_URL` | `--base-url` | `http://localhost:7777` |
//! | request timeout | `PROXIFY_TIMEOUT_SECS` | `--timeout` | none |
//! | locale | `PROXIFY_LANG` | `--lang` | `en` |
//! | theme override | | `--theme` | persisted value |
//! | persist theme | | `--no-persist` | on |

use std::time::Duration;

use crate::error::ConfigError;
use crate::i18n::Locale;
use crate::theme::ThemePreference;

pub const DEFAULT_BASE_URL: &str = "http://localhost:7777";

pub const ENV_BASE_URL: &str = "PROXIFY_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "PROXIFY_TIMEOUT_SECS";
pub const ENV_LANG: &str = "PROXIFY_LANG";

/// Configuration for one run of the front page.
///
/// # Example
///
/// ```ignore
/// use proxify_tui::config::SiteConfig;
///
/// let config = SiteConfig::default()
///     .with_base_url("https://proxify.example.com")
///     .with_request_timeout(std::time::Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Site the registry is fetched from, without trailing slash
    pub base_url: String,
    /// Give up on the registry request after this long (none by default)
    pub request_timeout: Option<Duration>,
    /// Language of the UI strings
    pub locale: Locale,
    /// Theme to start with instead of the persisted one
    pub initial_theme: Option<ThemePreference>,
    /// Whether theme changes are written to disk
    pub persist_theme: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
            locale: Locale::default(),
            initial_theme: None,
            persist_theme: true,
        }
    }
}

impl SiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_initial_theme(mut self, theme: ThemePreference) -> Self {
        self.initial_theme = Some(theme);
        self
    }

    pub fn with_persist_theme(mut self, persist: bool) -> Self {
        self.persist_theme = persist;
        self
    }

    /// Defaults overlaid with the `PROXIFY_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env(|name| std::env::var(name).ok())
    }

    /// Overlay values from `lookup`. Empty values are treated as unset.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_BASE_URL) {
            self = self.with_base_url(validate_base_url(ENV_BASE_URL, &url)?);
        }
        if let Some(secs) = get(ENV_TIMEOUT_SECS) {
            self.request_timeout = Some(parse_timeout(ENV_TIMEOUT_SECS, &secs)?);
        }
        if let Some(lang) = get(ENV_LANG) {
            self.locale = lang.parse()?;
        }
        Ok(self)
    }
}

pub(crate) fn validate_base_url(name: &str, raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(ConfigError::invalid(
            name,
            raw,
            "must start with http:// or https://",
        ))
    }
}

pub(crate) fn parse_timeout(name: &str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::invalid(name, raw, "must be at least 1 second")),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(_) => Err(ConfigError::invalid(name, raw, "expected whole seconds")),
    }
}
