//! Panic hook for terminal restoration.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal.
///
/// Call early in `main`, after `color_eyre::install` so the chained hook is
/// the color-eyre one. The hook restores the terminal, records the panic in
/// the log file, then defers to the previous hook to print the report.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!(panic = %panic_info, "proxify-tui panicked");
        original_hook(panic_info);
    }));
}
