//! CLI module.
//!
//! Flags are handled before the terminal is taken over:
//!
//! ```ignore
//! use proxify_tui::cli::{parse_args, CliCommand};
//! use proxify_tui::config::SiteConfig;
//!
//! match parse_args(std::env::args(), SiteConfig::from_env()?)? {
//!     CliCommand::Version => println!("{}", version_line()),
//!     CliCommand::Help => print!("{}", USAGE),
//!     CliCommand::Run(config) => run(config)?,
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{version_line, USAGE, VERSION};
