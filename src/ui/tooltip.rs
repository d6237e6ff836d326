//! Floating tooltip popup component
//!
//! Shows the full URL of an endpoint card above its URL row. Unlike the card
//! itself the tooltip does not truncate: content wider than the popup wraps
//! onto further lines. Only a URL with more lines than the terminal has rows
//! is cut, and its last visible line then ends with an ellipsis.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use super::helpers::{truncate_with_ellipsis, wrap_hard, ELLIPSIS};
use super::theme::Palette;

// ============================================================================
// Constants
// ============================================================================

/// Maximum width for tooltip content (not including border)
const MAX_CONTENT_WIDTH: u16 = 60;

/// Padding on each side of content
const HORIZONTAL_PADDING: u16 = 1;

/// Border width (1 on each side)
const BORDER_WIDTH: u16 = 2;

// ============================================================================
// Public API
// ============================================================================

/// Render a floating tooltip above the anchor point
///
/// If the tooltip would go above the top of the screen, it flips to below
/// the anchor. Returns the rect it was drawn into.
pub fn render_tooltip(
    buf: &mut Buffer,
    content: &str,
    anchor_x: u16,
    anchor_y: u16,
    palette: &Palette,
) -> Option<Rect> {
    let terminal_area = buf.area;

    let max_content = terminal_area
        .width
        .saturating_sub(BORDER_WIDTH + HORIZONTAL_PADDING * 2)
        .min(MAX_CONTENT_WIDTH);
    if max_content == 0 {
        return None;
    }

    let max_rows = terminal_area.height.saturating_sub(BORDER_WIDTH);
    if max_rows == 0 {
        return None;
    }

    let lines = fit_rows(
        wrap_hard(content, max_content as usize),
        max_rows as usize,
        max_content as usize,
    );
    let dimensions = calculate_dimensions(&lines);
    let position = calculate_position(
        anchor_x,
        anchor_y,
        dimensions.width,
        dimensions.height,
        terminal_area,
    );

    let rect = Rect::new(position.x, position.y, dimensions.width, dimensions.height)
        .intersection(terminal_area);
    if !render_tooltip_box(buf, rect, &lines, palette) {
        return None;
    }
    Some(rect)
}

// ============================================================================
// Internal Types
// ============================================================================

struct TooltipDimensions {
    width: u16,
    height: u16,
}

struct TooltipPosition {
    x: u16,
    y: u16,
}

// ============================================================================
// Calculation Functions
// ============================================================================

/// Keep at most `max_rows` lines. When lines are dropped, the last kept one
/// ends with an ellipsis and stays within `width` columns.
fn fit_rows(mut lines: Vec<String>, max_rows: usize, width: usize) -> Vec<String> {
    if lines.len() <= max_rows {
        return lines;
    }
    lines.truncate(max_rows);
    if let Some(last) = lines.last_mut() {
        let marked = format!("{}{}", last, ELLIPSIS);
        *last = truncate_with_ellipsis(&marked, width).into_owned();
    }
    lines
}

/// Total width and height of the tooltip including borders.
fn calculate_dimensions(lines: &[String]) -> TooltipDimensions {
    let content_width = lines
        .iter()
        .map(|l| unicode_width::UnicodeWidthStr::width(l.as_str()))
        .max()
        .unwrap_or(0);
    let content_width = u16::try_from(content_width).unwrap_or(u16::MAX);
    let rows = u16::try_from(lines.len()).unwrap_or(u16::MAX);

    TooltipDimensions {
        width: content_width.saturating_add(HORIZONTAL_PADDING * 2 + BORDER_WIDTH),
        height: rows.saturating_add(BORDER_WIDTH),
    }
}

/// Calculate tooltip position, ensuring it stays within terminal bounds
fn calculate_position(
    anchor_x: u16,
    anchor_y: u16,
    tooltip_width: u16,
    tooltip_height: u16,
    terminal_area: Rect,
) -> TooltipPosition {
    // Horizontal: center on anchor, clamp to bounds
    let half_width = tooltip_width / 2;
    let ideal_x = anchor_x.saturating_sub(half_width);
    let max_x = terminal_area.x + terminal_area.width.saturating_sub(tooltip_width);
    let x = ideal_x.max(terminal_area.x).min(max_x);

    // Vertical: above anchor by default
    let can_fit_above = anchor_y >= terminal_area.y + tooltip_height;

    let y = if can_fit_above {
        anchor_y - tooltip_height
    } else {
        (anchor_y + 1).min(terminal_area.y + terminal_area.height.saturating_sub(tooltip_height))
    };

    TooltipPosition { x, y }
}

// ============================================================================
// Rendering Functions
// ============================================================================

fn render_tooltip_box(buf: &mut Buffer, rect: Rect, lines: &[String], palette: &Palette) -> bool {
    if rect.width < 3 || rect.height < 3 {
        return false;
    }

    let body_style = palette.tooltip();
    let border_style = body_style;

    for y in rect.y..rect.y + rect.height {
        for x in rect.x..rect.x + rect.width {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(" ").set_style(body_style);
            }
        }
    }

    draw_border(buf, rect, border_style);

    let content_x = rect.x + HORIZONTAL_PADDING + 1;
    let content_width = rect.width.saturating_sub(BORDER_WIDTH + HORIZONTAL_PADDING * 2);
    let content_rows = rect.height.saturating_sub(BORDER_WIDTH);
    for (i, line) in lines.iter().take(content_rows as usize).enumerate() {
        buf.set_stringn(
            content_x,
            rect.y + 1 + i as u16,
            line,
            content_width as usize,
            body_style,
        );
    }
    true
}

/// Draw box border using box-drawing characters
fn draw_border(buf: &mut Buffer, rect: Rect, style: Style) {
    let x1 = rect.x;
    let x2 = rect.x + rect.width.saturating_sub(1);
    let y1 = rect.y;
    let y2 = rect.y + rect.height.saturating_sub(1);

    let mut set_cell = |x: u16, y: u16, ch: char| {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(ch).set_style(style);
        }
    };

    set_cell(x1, y1, '\u{256D}');
    set_cell(x2, y1, '\u{256E}');
    set_cell(x1, y2, '\u{2570}');
    set_cell(x2, y2, '\u{256F}');

    for x in (x1 + 1)..x2 {
        set_cell(x, y1, '\u{2500}');
        set_cell(x, y2, '\u{2500}');
    }
    for y in (y1 + 1)..y2 {
        set_cell(x1, y, '\u{2502}');
        set_cell(x2, y, '\u{2502}');
    }
}

// ============================================================================
// Tests
// ============================================================================
