//! Responsive layout for the front page.
//!
//! The card grid follows the width breakpoints below: one column on narrow
//! terminals, up to four on wide ones.

use ratatui::layout::Rect;

use super::endpoint_card::CARD_HEIGHT;

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;
    /// Large terminal (< 160 columns)
    pub const LG_WIDTH: u16 = 160;
}

/// Columns between two cards of a row.
pub const COLUMN_GAP: u16 = 1;

/// Columns kept free on each side of the page body.
pub const PAGE_MARGIN: u16 = 2;

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    ExtraSmall,
    Small,
    Medium,
    Large,
}

/// Layout context holding the page dimensions.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Number of card columns for this width.
    pub fn grid_columns(&self) -> usize {
        match self.width_category() {
            SizeCategory::ExtraSmall => 1,
            SizeCategory::Small => 2,
            SizeCategory::Medium => 3,
            SizeCategory::Large => 4,
        }
    }

    /// Horizontal body width once the page margins are removed.
    pub fn body_width(&self) -> u16 {
        self.width.saturating_sub(PAGE_MARGIN * 2).min(breakpoints::LG_WIDTH)
    }

    /// Whether there is room for the description under the heading.
    pub fn shows_description(&self) -> bool {
        self.height >= 16
    }
}

// ============================================================================
// Card Grid
// ============================================================================

/// Placement of the visible cards inside the grid area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPlacement {
    /// `(card index, rect)` for every card that fits on screen.
    pub cells: Vec<(usize, Rect)>,
    /// Index of the first grid row drawn.
    pub first_row: usize,
    pub total_rows: usize,
}

/// Lay `count` cards out in `area`, scrolled so that `focused` stays visible.
pub fn place_cards(area: Rect, count: usize, columns: usize, focused: Option<usize>) -> GridPlacement {
    let columns = columns.max(1);
    let total_rows = count.div_ceil(columns);
    let fitting_rows = (area.height / CARD_HEIGHT) as usize;

    if count == 0 || fitting_rows == 0 || area.width == 0 {
        return GridPlacement {
            cells: Vec::new(),
            first_row: 0,
            total_rows,
        };
    }

    let first_row = match focused {
        Some(index) => scroll_offset(index / columns, fitting_rows),
        None => 0,
    };

    let cols = columns as u16;
    let gaps = COLUMN_GAP * cols.saturating_sub(1);
    let card_width = area.width.saturating_sub(gaps) / cols;
    let mut cells = Vec::with_capacity(fitting_rows * columns);

    for row in first_row..(first_row + fitting_rows).min(total_rows) {
        let y = area.y + ((row - first_row) as u16) * CARD_HEIGHT;
        for col in 0..columns {
            let index = row * columns + col;
            if index >= count {
                break;
            }
            let x = area.x + (col as u16) * (card_width + COLUMN_GAP);
            cells.push((index, Rect::new(x, y, card_width, CARD_HEIGHT)));
        }
    }

    GridPlacement {
        cells,
        first_row,
        total_rows,
    }
}

/// First row to draw so that `row` is inside a window of `fitting` rows.
pub fn scroll_offset(row: usize, fitting: usize) -> usize {
    if fitting == 0 || row < fitting {
        0
    } else {
        row + 1 - fitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns_by_breakpoint() {
        assert_eq!(LayoutContext::new(40, 30).grid_columns(), 1);
        assert_eq!(LayoutContext::new(60, 30).grid_columns(), 2);
        assert_eq!(LayoutContext::new(100, 30).grid_columns(), 3);
        assert_eq!(LayoutContext::new(200, 30).grid_columns(), 4);
    }

    #[test]
    fn test_body_width_is_capped() {
        assert_eq!(LayoutContext::new(80, 24).body_width(), 76);
        assert_eq!(LayoutContext::new(300, 24).body_width(), breakpoints::LG_WIDTH);
        assert_eq!(LayoutContext::new(3, 24).body_width(), 0);
    }

    #[test]
    fn test_place_cards_fills_rows_in_order() {
        let area = Rect::new(0, 0, 62, CARD_HEIGHT * 3);
        let grid = place_cards(area, 5, 2, None);

        assert_eq!(grid.total_rows, 3);
        let indices: Vec<usize> = grid.cells.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);

        let (_, first) = grid.cells[0];
        let (_, second) = grid.cells[1];
        assert_eq!(first.width, 30);
        assert_eq!(second.x, 31);
        assert_eq!(grid.cells[2].1.y, CARD_HEIGHT);
    }

    #[test]
    fn test_place_cards_scrolls_to_focus() {
        let area = Rect::new(0, 0, 40, CARD_HEIGHT * 2);
        let grid = place_cards(area, 10, 1, Some(6));

        assert_eq!(grid.first_row, 5);
        let indices: Vec<usize> = grid.cells.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![5, 6]);
    }

    #[test]
    fn test_place_cards_without_room() {
        let grid = place_cards(Rect::new(0, 0, 40, 2), 3, 1, None);
        assert!(grid.cells.is_empty());
        assert_eq!(grid.total_rows, 3);
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, 3), 0);
        assert_eq!(scroll_offset(2, 3), 0);
        assert_eq!(scroll_offset(3, 3), 1);
        assert_eq!(scroll_offset(9, 3), 7);
        assert_eq!(scroll_offset(4, 0), 0);
    }
}
