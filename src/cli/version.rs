//! Version and help output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
proxify-tui - Proxify front page in the terminal

USAGE:
    proxify-tui [OPTIONS]

OPTIONS:
    --base-url <URL>     Proxify site to read /api/routes from [env: PROXIFY_BASE_URL]
    --timeout <SECS>     Give up on the registry request after SECS [env: PROXIFY_TIMEOUT_SECS]
    --lang <en|zh>       Interface language [env: PROXIFY_LANG]
    --theme <THEME>      Start with light, dark or system
    --no-persist         Do not save theme changes
    -V, --version        Print version
    -h, --help           Print this help

KEYS:
    t          cycle theme (system -> light -> dark)
    m, Enter   show more / show less
    arrows     move card focus (Tab / Shift+Tab also work)
    r          reload the registry
    q, Esc     quit
";

pub fn version_line() -> String {
    format!("proxify-tui {}", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_line().starts_with("proxify-tui "));
    }

    #[test]
    fn test_usage_lists_every_flag() {
        for flag in ["--base-url", "--timeout", "--lang", "--theme", "--no-persist"] {
            assert!(USAGE.contains(flag), "missing {}", flag);
        }
    }
}
