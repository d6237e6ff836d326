//! Render context for the front page.
//!
//! Everything the render phase reads is gathered here up front, so the
//! render functions only borrow immutable state. The one output they
//! produce is the hit area registry for the next round of mouse events.

use crate::panel::SupportedApiPanel;
use crate::registry::ROUTES_PATH;
use crate::theme::ThemePreference;
use crate::traits::Translator;

use super::theme::Palette;

pub struct RenderContext<'a> {
    pub panel: &'a SupportedApiPanel,
    pub theme: ThemePreference,
    pub palette: Palette,
    pub translator: &'a dyn Translator,
    /// Last known mouse position, used to resolve URL hover.
    pub pointer: Option<(u16, u16)>,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        panel: &'a SupportedApiPanel,
        theme: ThemePreference,
        translator: &'a dyn Translator,
    ) -> Self {
        Self {
            panel,
            theme,
            palette: Palette::for_theme(theme),
            translator,
            pointer: None,
        }
    }

    pub fn with_pointer(mut self, pointer: Option<(u16, u16)>) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn t(&self, key: &str) -> String {
        self.translator.translate(key)
    }

    /// The request line shown after the note, e.g. `GET /api/routes`.
    pub fn routes_request_line(&self) -> String {
        format!("GET {}", ROUTES_PATH)
    }
}
