//! The supported-API section: heading, card grid, disclosure toggle, note.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::context::RenderContext;
use super::endpoint_card::{render_endpoint_card, CardLabels};
use super::helpers::{centered_x, display_width, truncate_with_ellipsis};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::{place_cards, LayoutContext};

/// What the page should show in the URL tooltip after this section drew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipTarget {
    pub index: usize,
    pub content: String,
    pub anchor_x: u16,
    pub anchor_y: u16,
}

/// Render the section into `area`.
///
/// Registers the card, URL and toggle hit areas, and returns the card whose
/// full URL should float above it: the one under the mouse, otherwise the
/// focused one.
pub fn render_supported_api(
    buf: &mut Buffer,
    area: Rect,
    ctx: &RenderContext,
    hits: &mut HitAreaRegistry,
) -> Option<TooltipTarget> {
    let layout = LayoutContext::from_rect(area);
    let body_width = layout.body_width();
    if body_width == 0 || area.height == 0 {
        return None;
    }
    let body = Rect::new(
        centered_x(area.x, area.width, body_width as usize),
        area.y,
        body_width,
        area.height,
    );

    let panel = ctx.panel;
    let description_height = if layout.shows_description() { 2 } else { 0 };
    let toggle_height = u16::from(panel.shows_toggle());
    let [_, title, description, _, grid, toggle, note] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(description_height),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(toggle_height),
        Constraint::Length(1),
    ])
    .areas(body);

    render_heading(buf, title, description, ctx);
    let target = render_grid(buf, grid, layout.grid_columns(), ctx, hits);
    if panel.shows_toggle() {
        render_toggle(buf, toggle, ctx, hits);
    }
    render_note(buf, note, ctx);

    target
}

fn render_heading(buf: &mut Buffer, title: Rect, description: Rect, ctx: &RenderContext) {
    let heading = ctx.t("home.supported_api.title");
    let heading = truncate_with_ellipsis(&heading, title.width as usize);
    let x = centered_x(title.x, title.width, display_width(&heading));
    buf.set_string(x, title.y, heading, ctx.palette.heading());

    if description.height > 0 {
        Paragraph::new(ctx.t("home.supported_api.description"))
            .style(ctx.palette.dim_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(description, buf);
    }
}

fn render_grid(
    buf: &mut Buffer,
    area: Rect,
    columns: usize,
    ctx: &RenderContext,
    hits: &mut HitAreaRegistry,
) -> Option<TooltipTarget> {
    let panel = ctx.panel;
    let visible = panel.visible();

    if visible.is_empty() {
        let key = if panel.is_loading() {
            "home.supported_api.loading"
        } else {
            "home.supported_api.empty"
        };
        if area.height > 0 {
            let text = ctx.t(key);
            let text = truncate_with_ellipsis(&text, area.width as usize);
            let x = centered_x(area.x, area.width, display_width(&text));
            buf.set_string(x, area.y, text, ctx.palette.dim_style());
        }
        return None;
    }

    let labels = CardLabels {
        path: ctx.t("home.supported_api.path_label"),
        url: ctx.t("home.supported_api.url_label"),
    };
    let placement = place_cards(area, visible.len(), columns, panel.focused());

    let mut url_rows = Vec::with_capacity(placement.cells.len());
    for (index, rect) in placement.cells {
        let endpoint = &visible[index];
        let focused = panel.focused() == Some(index);
        if let Some(drawn) =
            render_endpoint_card(buf, rect, endpoint, focused, &ctx.palette, &labels)
        {
            hits.register(drawn.card, ClickAction::FocusCard(index));
            hits.register(drawn.url_row, ClickAction::HoverUrl(index));
            url_rows.push((index, drawn.url_row));
        }
    }

    let hovered = ctx
        .pointer
        .and_then(|(x, y)| hits.hovered_url(x, y));
    let index = hovered.or(panel.focused())?;
    let (_, row) = url_rows.iter().find(|(i, _)| *i == index)?;

    Some(TooltipTarget {
        index,
        content: visible[index].official_url.clone(),
        anchor_x: row.x + row.width / 2,
        anchor_y: row.y,
    })
}

fn render_toggle(buf: &mut Buffer, area: Rect, ctx: &RenderContext, hits: &mut HitAreaRegistry) {
    if area.height == 0 {
        return;
    }
    let disclosure = ctx.panel.disclosure();
    let label = format!(
        "[ {} {} ]",
        ctx.t(disclosure.label_key()),
        disclosure.chevron()
    );
    let width = display_width(&label).min(area.width as usize) as u16;
    let x = centered_x(area.x, area.width, width as usize);
    buf.set_stringn(
        x,
        area.y,
        &label,
        width as usize,
        Style::default().fg(ctx.palette.accent),
    );
    hits.register(Rect::new(x, area.y, width, 1), ClickAction::ToggleDisclosure);
}

fn render_note(buf: &mut Buffer, area: Rect, ctx: &RenderContext) {
    if area.height == 0 {
        return;
    }
    let note = ctx.t("home.supported_api.note");
    let request = ctx.routes_request_line();
    let line = Line::from(vec![
        Span::styled(note, ctx.palette.dim_style()),
        Span::styled(request, ctx.palette.code()),
    ]);
    let x = centered_x(area.x, area.width, line.width());
    buf.set_line(x, area.y, &line, area.width - (x - area.x));
}
