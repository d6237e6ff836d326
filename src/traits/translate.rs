//! Translation lookup abstraction.

/// Resolves a string id such as `"home.supported_api.title"` to display
/// text. Unknown keys resolve to the key itself so a missing entry is
/// visible rather than blank.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> String;
}
