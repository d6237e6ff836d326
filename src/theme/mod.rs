//! Display theme preference and its three-state cycle.
//!
//! The preference is one of `light`, `dark` or `system`. The only transition
//! is [`ThemePreference::next`], which walks a fixed cycle:
//!
//! ```text
//! system -> light -> dark -> system
//! ```
//!
//! The process-wide current value lives in [`ThemeController`].

mod controller;

pub use controller::ThemeController;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The user's theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the terminal's own colors.
    #[default]
    System,
}

impl ThemePreference {
    /// Cycle order starting from the default.
    pub const CYCLE: [ThemePreference; 3] = [
        ThemePreference::System,
        ThemePreference::Light,
        ThemePreference::Dark,
    ];

    /// The state after one activation of the theme control.
    pub fn next(self) -> Self {
        match self {
            ThemePreference::System => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::System,
        }
    }

    /// Read a stored or external value. Anything unrecognized is `System`.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    pub fn icon(self) -> ThemeIcon {
        icon_for(self)
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse, used for command-line values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}' (expected light, dark or system)")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

/// Icon shown on the theme control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeIcon {
    Sun,
    Moon,
    Laptop,
}

impl ThemeIcon {
    /// Single-cell glyph drawn in the header.
    pub fn glyph(&self) -> &'static str {
        match self {
            ThemeIcon::Sun => "☀",
            ThemeIcon::Moon => "☾",
            ThemeIcon::Laptop => "◐",
        }
    }
}

/// Presentation-only mapping from preference to icon.
pub fn icon_for(theme: ThemePreference) -> ThemeIcon {
    match theme {
        ThemePreference::Light => ThemeIcon::Sun,
        ThemePreference::Dark => ThemeIcon::Moon,
        ThemePreference::System => ThemeIcon::Laptop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_is_system() {
        assert_eq!(ThemePreference::default(), ThemePreference::System);
    }

    #[test]
    fn test_cycle_order() {
        assert_eq!(ThemePreference::System.next(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.next(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.next(), ThemePreference::System);
    }

    #[test]
    fn test_cycle_has_period_three() {
        let mut theme = ThemePreference::System;
        for n in 0..30 {
            assert_eq!(theme, ThemePreference::CYCLE[n % 3], "step {}", n);
            theme = theme.next();
        }
    }

    #[test]
    fn test_parse_lenient_unknown_is_system() {
        assert_eq!(ThemePreference::parse_lenient("dark"), ThemePreference::Dark);
        assert_eq!(ThemePreference::parse_lenient(" LIGHT "), ThemePreference::Light);
        assert_eq!(ThemePreference::parse_lenient("solarized"), ThemePreference::System);
        assert_eq!(ThemePreference::parse_lenient(""), ThemePreference::System);
        assert_eq!(
            ThemePreference::parse_lenient("purple").next(),
            ThemePreference::Light
        );
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        let err = "blue".parse::<ThemePreference>().unwrap_err();
        assert_eq!(err, UnknownTheme("blue".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown theme 'blue' (expected light, dark or system)"
        );

        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }

    #[test]
    fn test_icon_for_is_injective() {
        assert_eq!(icon_for(ThemePreference::Light), ThemeIcon::Sun);
        assert_eq!(icon_for(ThemePreference::Dark), ThemeIcon::Moon);
        assert_eq!(icon_for(ThemePreference::System), ThemeIcon::Laptop);

        let icons: HashSet<_> = ThemePreference::CYCLE.iter().map(|t| t.icon()).collect();
        assert_eq!(icons.len(), 3);
        let glyphs: HashSet<_> = icons.iter().map(|i| i.glyph()).collect();
        assert_eq!(glyphs.len(), 3);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ThemePreference::Dark).unwrap(),
            "\"dark\""
        );
        let theme: ThemePreference = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, ThemePreference::Light);
    }
}
