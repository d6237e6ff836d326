//! UI rendering for the Proxify front page.
//!
//! ```text
//! ┌ header ─────────────────────────────── [◐] ┐
//! │              Supported APIs                 │
//! │   description                               │
//! │   ┌card┐ ┌card┐ ┌card┐                      │
//! │          [ Show more ▼ ]                    │
//! │   note GET /api/routes                      │
//! └ hints ──────────────────────────────────────┘
//! ```

mod context;
mod endpoint_card;
mod header;
mod helpers;
pub mod interaction;
mod layout;
mod supported_api;
mod theme;
mod tooltip;

pub use context::RenderContext;
pub use endpoint_card::{leading_glyph, render_endpoint_card, CardAreas, CardLabels, CARD_HEIGHT, FILE_GLYPH};
pub use header::HEADER_HEIGHT;
pub use helpers::{display_width, truncate_with_ellipsis, wrap_hard, ELLIPSIS};
pub use layout::{breakpoints, place_cards, GridPlacement, LayoutContext};
pub use supported_api::{render_supported_api, TooltipTarget};
pub use theme::Palette;
pub use tooltip::render_tooltip;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;
use interaction::HitAreaRegistry;

/// Main render function - draws the whole page for the current app state.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.grid_columns = LayoutContext::from_rect(area).grid_columns();
    let mut hits = std::mem::take(&mut app.hit_areas);
    hits.clear();
    {
        let ctx = app.render_context();
        render_page(frame.buffer_mut(), area, &ctx, &mut hits);
    }
    app.hit_areas = hits;
}

/// Draw the page into `buf`, registering hit areas for the next mouse events.
pub fn render_page(buf: &mut Buffer, area: Rect, ctx: &RenderContext, hits: &mut HitAreaRegistry) {
    Block::default().style(ctx.palette.base()).render(area, buf);

    let [top, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    header::render_header(buf, top, ctx, hits);
    let target = render_supported_api(buf, body, ctx, hits);
    render_hints(buf, footer, ctx);

    if let Some(target) = target {
        render_tooltip(buf, &target.content, target.anchor_x, target.anchor_y, &ctx.palette);
    }
}

fn render_hints(buf: &mut Buffer, area: Rect, ctx: &RenderContext) {
    if area.height == 0 || area.width < 4 {
        return;
    }
    let hints = format!(
        "t {}  {}",
        ctx.t("common.toggle_theme"),
        ctx.t("home.hints")
    );
    let max = area.width.saturating_sub(2) as usize;
    buf.set_string(
        area.x + 1,
        area.y,
        truncate_with_ellipsis(&hints, max),
        ctx.palette.dim_style(),
    );
}
