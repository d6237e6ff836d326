//! Click action handler.
//!
//! Translates actions dispatched from the hit area registry into App state
//! mutations.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click that landed on a registered hit area.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    match action {
        ClickAction::CycleTheme => {
            app.cycle_theme();
            tracing::debug!("Click: CycleTheme");
        }
        ClickAction::ToggleDisclosure => {
            app.toggle_disclosure();
            tracing::debug!("Click: ToggleDisclosure");
        }
        ClickAction::FocusCard(index) | ClickAction::HoverUrl(index) => {
            app.focus_card(index);
            tracing::debug!("Click: FocusCard({})", index);
        }
    }
}
