//! Text measuring helpers shared by the render functions.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended to text cut short by [`truncate_with_ellipsis`].
pub const ELLIPSIS: char = '…';

/// Display width of `s` in terminal columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Fit `s` into `max_width` columns.
///
/// Text that fits is returned untouched. Longer text is cut on a character
/// boundary and ends with [`ELLIPSIS`], the whole result never wider than
/// `max_width`.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::with_capacity(max_width + ELLIPSIS.len_utf8());
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    Cow::Owned(out)
}

/// Break `s` into lines of at most `width` columns.
///
/// URLs have no spaces worth breaking on, so this cuts at the column limit.
pub fn wrap_hard(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(ch);
        used += w;
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// X coordinate that centers `content_width` columns inside `[x, x + width)`.
pub fn centered_x(x: u16, width: u16, content_width: usize) -> u16 {
    let content = content_width.min(width as usize) as u16;
    x + (width - content) / 2
}
