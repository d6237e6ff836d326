//! Color palettes for the front page.
//!
//! Each theme preference resolves to one [`Palette`]. `system` leaves the
//! terminal's own foreground and background in place (`Color::Reset`) and only
//! picks accents that read on both light and dark terminals.

use ratatui::style::{Color, Modifier, Style};

use crate::theme::ThemePreference;

// ============================================================================
// Shared Colors
// ============================================================================

/// Verified badge on the self-host card (green-500)
pub const COLOR_BADGE: Color = Color::Rgb(34, 197, 94);

/// Badge on light backgrounds (green-600)
pub const COLOR_BADGE_LIGHT: Color = Color::Rgb(22, 163, 74);

// ============================================================================
// Palette
// ============================================================================

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background
    pub background: Color,
    /// Body text
    pub foreground: Color,
    /// Secondary text (labels, description, hints)
    pub dim: Color,
    /// Card and header borders
    pub border: Color,
    /// Headings and the focused card border
    pub accent: Color,
    /// Background of the monospace path chip
    pub code_bg: Color,
    pub badge: Color,
    pub tooltip_fg: Color,
    pub tooltip_bg: Color,
}

impl Palette {
    pub fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Dark => Self::dark(),
            ThemePreference::Light => Self::light(),
            ThemePreference::System => Self::system(),
        }
    }

    fn dark() -> Self {
        Self {
            background: Color::Rgb(11, 11, 12),
            foreground: Color::Rgb(243, 244, 246),
            dim: Color::Rgb(156, 163, 175),
            border: Color::Rgb(55, 65, 81),
            accent: Color::White,
            code_bg: Color::Rgb(31, 41, 55),
            badge: COLOR_BADGE,
            tooltip_fg: Color::Rgb(17, 24, 39),
            tooltip_bg: Color::Rgb(243, 244, 246),
        }
    }

    fn light() -> Self {
        Self {
            background: Color::Rgb(251, 251, 251),
            foreground: Color::Rgb(17, 24, 39),
            dim: Color::Rgb(107, 114, 128),
            border: Color::Rgb(209, 213, 219),
            accent: Color::Black,
            code_bg: Color::Rgb(229, 231, 235),
            badge: COLOR_BADGE_LIGHT,
            tooltip_fg: Color::Rgb(249, 250, 251),
            tooltip_bg: Color::Rgb(17, 24, 39),
        }
    }

    fn system() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Reset,
            dim: Color::DarkGray,
            border: Color::DarkGray,
            accent: Color::Reset,
            code_bg: Color::Reset,
            badge: Color::Green,
            tooltip_fg: Color::Reset,
            tooltip_bg: Color::Reset,
        }
    }

    // ------------------------------------------------------------------------
    // Styles
    // ------------------------------------------------------------------------

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Monospace chip around a route path.
    pub fn code(&self) -> Style {
        let style = Style::default().fg(self.foreground).bg(self.code_bg);
        if self.code_bg == Color::Reset {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn tooltip(&self) -> Style {
        let style = Style::default().fg(self.tooltip_fg).bg(self.tooltip_bg);
        if self.tooltip_bg == Color::Reset {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::system()
    }
}
