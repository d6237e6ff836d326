//! Mouse interaction for the front page.
//!
//! Render functions register [`HitArea`]s as they draw; the event loop
//! resolves clicks through [`handle_click_action`] and hover through
//! [`HitAreaRegistry::hovered_url`].

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
