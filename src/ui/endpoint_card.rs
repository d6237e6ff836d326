//! One endpoint card of the supported-API grid.
//!
//! ```text
//! ┌────────────────────────────┐
//! │ ✔ Self Host                │
//! │ Path:  /self-host          │
//! │ URL: https://proxify.exam… │
//! └────────────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::registry::ApiEndpoint;

use super::helpers::{display_width, truncate_with_ellipsis};
use super::theme::Palette;

/// Rows taken by one card, borders included.
pub const CARD_HEIGHT: u16 = 5;

/// Narrowest card that still has room for a glyph and one character.
const MIN_CARD_WIDTH: u16 = 6;

/// Glyph drawn in place of a badge on ordinary endpoints.
pub const FILE_GLYPH: &str = "▤";

/// Translated row labels.
#[derive(Debug, Clone)]
pub struct CardLabels {
    pub path: String,
    pub url: String,
}

/// Where a rendered card ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardAreas {
    pub card: Rect,
    /// The URL row, the card's tooltip trigger.
    pub url_row: Rect,
}

/// Glyph for the leading icon of `endpoint`.
pub fn leading_glyph(endpoint: &ApiEndpoint) -> &'static str {
    match endpoint.badge {
        Some(badge) => badge.glyph(),
        None => FILE_GLYPH,
    }
}

/// Draw `endpoint` into `area`.
///
/// Returns `None` and draws nothing when the area is too small for a card.
pub fn render_endpoint_card(
    buf: &mut Buffer,
    area: Rect,
    endpoint: &ApiEndpoint,
    focused: bool,
    palette: &Palette,
    labels: &CardLabels,
) -> Option<CardAreas> {
    if area.width < MIN_CARD_WIDTH || area.height < CARD_HEIGHT {
        return None;
    }
    let area = Rect::new(area.x, area.y, area.width, CARD_HEIGHT);

    let border_type = if focused {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(palette.border_style(focused));
    let inner = block.inner(area);
    block.render(area, buf);

    let inner = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );
    let width = inner.width as usize;

    // name row
    let glyph = leading_glyph(endpoint);
    let glyph_style = if endpoint.badge.is_some() {
        Style::default().fg(palette.badge)
    } else {
        palette.dim_style()
    };
    let mut name_style = Style::default()
        .fg(palette.foreground)
        .add_modifier(Modifier::BOLD);
    if focused {
        name_style = name_style.add_modifier(Modifier::UNDERLINED);
    }
    let name_width = width.saturating_sub(display_width(glyph) + 1);
    let name_line = Line::from(vec![
        Span::styled(glyph, glyph_style),
        Span::raw(" "),
        Span::styled(truncate_with_ellipsis(&endpoint.name, name_width), name_style),
    ]);
    buf.set_line(inner.x, inner.y, &name_line, inner.width);

    // path row
    let path_label = format!("{} ", labels.path);
    let chip_width = width.saturating_sub(display_width(&path_label) + 2);
    let path_line = Line::from(vec![
        Span::styled(path_label, palette.dim_style()),
        Span::styled(
            format!(" {} ", truncate_with_ellipsis(&endpoint.path, chip_width)),
            palette.code(),
        ),
    ]);
    buf.set_line(inner.x, inner.y + 1, &path_line, inner.width);

    // url row
    let url_label = format!("{} ", labels.url);
    let url_width = width.saturating_sub(display_width(&url_label));
    let url_line = Line::from(vec![
        Span::styled(url_label, palette.dim_style()),
        Span::styled(
            truncate_with_ellipsis(&endpoint.official_url, url_width),
            Style::default().fg(palette.foreground),
        ),
    ]);
    let url_row = Rect::new(inner.x, inner.y + 2, inner.width, 1);
    buf.set_line(url_row.x, url_row.y, &url_line, url_row.width);

    Some(CardAreas {
        card: area,
        url_row,
    })
}
