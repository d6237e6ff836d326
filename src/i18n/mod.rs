//! Translation catalogs for the front page.
//!
//! Strings are keyed by the same ids the web front end uses
//! (`home.supported_api.title`, `common.toggle_theme`, ...). A key that is
//! missing from the active locale falls back to English, then to the key.

mod catalog;

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::traits::Translator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    /// Accepts `en`, `zh` and region-tagged forms such as `en-US` or `zh_CN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            _ => Err(ConfigError::invalid("lang", s, "expected en or zh")),
        }
    }
}

/// [`Translator`] backed by the built-in tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog {
    locale: Locale,
}

impl Catalog {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> String {
        catalog::lookup(self.locale, key)
            .or_else(|| catalog::lookup(Locale::En, key))
            .unwrap_or(key)
            .to_string()
    }
}
