//! Command-line argument parsing.

use crate::config::{self, SiteConfig};
use crate::error::ConfigError;
use crate::theme::ThemePreference;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI with this configuration (default)
    Run(SiteConfig),
}

/// Parse command-line arguments on top of `base`.
///
/// The first item is the program name and is skipped. Unknown arguments are
/// ignored; flags that need a value fail when it is missing or unusable.
///
/// # Examples
///
/// ```
/// use proxify_tui::cli::args::{parse_args, CliCommand};
/// use proxify_tui::config::SiteConfig;
///
/// let args = vec!["proxify-tui".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter(), SiteConfig::default()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I, base: SiteConfig) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut config = base;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        let mut value = |flag: &str| -> Result<String, ConfigError> {
            inline
                .clone()
                .or_else(|| args.next())
                .ok_or_else(|| ConfigError::MissingValue {
                    flag: flag.to_string(),
                })
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--base-url" => {
                let raw = value("--base-url")?;
                config = config.with_base_url(config::validate_base_url("--base-url", &raw)?);
            }
            "--timeout" => {
                let raw = value("--timeout")?;
                config = config.with_request_timeout(config::parse_timeout("--timeout", &raw)?);
            }
            "--lang" => {
                let raw = value("--lang")?;
                config = config.with_locale(raw.parse()?);
            }
            "--theme" => {
                let raw = value("--theme")?;
                let theme: ThemePreference = raw
                    .parse()
                    .map_err(|e: crate::theme::UnknownTheme| {
                        ConfigError::invalid("--theme", &raw, e.to_string())
                    })?;
                config = config.with_initial_theme(theme);
            }
            "--no-persist" => config = config.with_persist_theme(false),
            _ => {}
        }
    }

    Ok(CliCommand::Run(config))
}
