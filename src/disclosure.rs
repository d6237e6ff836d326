//! Progressive disclosure of a list: a bounded prefix plus a toggle.

/// How many items are shown before the list is expanded.
pub const INITIAL_COUNT: usize = 8;

/// Translation key of the toggle label while collapsed.
pub const SHOW_MORE_KEY: &str = "home.supported_api.expand_button.show_more";

/// Translation key of the toggle label while expanded.
pub const SHOW_LESS_KEY: &str = "home.supported_api.expand_button.show_less";

/// The visible part of `snapshot`.
///
/// The whole slice when `expanded` or when it is no longer than
/// [`INITIAL_COUNT`], otherwise its first `INITIAL_COUNT` items.
pub fn visible<T>(snapshot: &[T], expanded: bool) -> &[T] {
    if expanded || snapshot.len() <= INITIAL_COUNT {
        snapshot
    } else {
        &snapshot[..INITIAL_COUNT]
    }
}

/// Whether the toggle control exists at all for a list of `len` items.
pub fn shows_toggle(len: usize) -> bool {
    len > INITIAL_COUNT
}

/// Expanded/collapsed state of one list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    expanded: bool,
}

impl Disclosure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn visible<'a, T>(&self, snapshot: &'a [T]) -> &'a [T] {
        visible(snapshot, self.expanded)
    }

    pub fn label_key(&self) -> &'static str {
        if self.expanded {
            SHOW_LESS_KEY
        } else {
            SHOW_MORE_KEY
        }
    }

    /// Chevron next to the label; points up (rotated) when expanded.
    pub fn chevron(&self) -> &'static str {
        if self.expanded {
            "▲"
        } else {
            "▼"
        }
    }
}
