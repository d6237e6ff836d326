//! Hit area system for mouse interactions.
//!
//! Components register hit areas while they render, and the event loop
//! queries the registry to decide what a click or a mouse move means.

use ratatui::layout::Rect;

/// Represents an action that can be triggered through a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// The theme icon in the header
    CycleTheme,
    /// The show more / show less button
    ToggleDisclosure,
    /// Anywhere on an endpoint card (index into the visible cards)
    FocusCard(usize),
    /// The URL row of an endpoint card; hovering it shows the full URL
    HoverUrl(usize),
}

/// A clickable region with an associated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry for managing hit areas across the UI.
///
/// Cleared at the start of every frame and refilled by the render functions,
/// so it always describes what is currently on screen.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// Order matters for overlapping regions: later = on top.
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every registered area. Call at the start of each frame.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.areas.push(HitArea::new(rect, action));
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action)
    }

    /// Index of the card whose URL row is under the point, if any.
    pub fn hovered_url(&self, x: u16, y: u16) -> Option<usize> {
        match self.hit_test(x, y) {
            Some(ClickAction::HoverUrl(index)) => Some(index),
            _ => None,
        }
    }

    /// Rect registered for `action`, if it is on screen.
    pub fn rect_of(&self, action: ClickAction) -> Option<Rect> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.action == action)
            .map(|area| area.rect)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
