//! Header bar: product name on the left, theme control on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};

use crate::theme::icon_for;

use super::context::RenderContext;
use super::interaction::{ClickAction, HitAreaRegistry};

/// Rows taken by the header, bottom rule included.
pub const HEADER_HEIGHT: u16 = 2;

const PRODUCT_NAME: &str = "Proxify";

/// Render the header and register the theme control.
pub fn render_header(
    buf: &mut Buffer,
    area: Rect,
    ctx: &RenderContext,
    hits: &mut HitAreaRegistry,
) {
    if area.height < HEADER_HEIGHT || area.width < 12 {
        return;
    }
    let palette = &ctx.palette;

    Block::default()
        .borders(Borders::BOTTOM)
        .border_style(palette.border_style(false))
        .render(Rect::new(area.x, area.y, area.width, HEADER_HEIGHT), buf);

    buf.set_string(area.x + 2, area.y, PRODUCT_NAME, palette.heading());

    // The control is icon-only; its label lives in the footer hints.
    let glyph = icon_for(ctx.theme).glyph();
    let control = format!("[{}]", glyph);
    let control_width = 3;
    let control_x = area.x + area.width.saturating_sub(control_width + 2);
    buf.set_string(
        control_x,
        area.y,
        control,
        Style::default().fg(palette.accent),
    );
    hits.register(
        Rect::new(control_x, area.y, control_width, 1),
        ClickAction::CycleTheme,
    );
}
