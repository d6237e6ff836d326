//! State container of the supported-API panel.
//!
//! Owns the registry snapshot, the disclosure state, keyboard focus over the
//! visible cards, and the mount lifecycle that gates the one registry load.

use crate::disclosure::{self, Disclosure};
use crate::lifecycle::{Mount, MountId, MountToken};
use crate::registry::ApiEndpoint;

#[derive(Debug)]
pub struct SupportedApiPanel {
    snapshot: Vec<ApiEndpoint>,
    disclosure: Disclosure,
    mount: Option<Mount>,
    last_mount_id: MountId,
    loading: bool,
    focused: Option<usize>,
}

impl Default for SupportedApiPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SupportedApiPanel {
    pub fn new() -> Self {
        Self {
            snapshot: Vec::new(),
            disclosure: Disclosure::new(),
            mount: None,
            last_mount_id: MountId::new(0),
            loading: false,
            focused: None,
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Mount the panel.
    ///
    /// Returns the token for the registry load the caller must start. A
    /// panel that is already mounted returns `None`, so redraws and repeated
    /// calls never issue a second request.
    pub fn mount(&mut self) -> Option<MountToken> {
        if self.mount.is_some() {
            return None;
        }

        let id = self.last_mount_id.next();
        self.last_mount_id = id;
        let mount = Mount::new(id);
        let token = mount.token();
        self.mount = Some(mount);
        self.loading = true;
        tracing::debug!(mount = %id, "supported API panel mounted");
        Some(token)
    }

    /// Unmount the panel. Any load still in flight becomes stale.
    pub fn unmount(&mut self) {
        if let Some(mount) = self.mount.take() {
            mount.unmount();
            tracing::debug!(mount = %mount.id(), "supported API panel unmounted");
        }
        self.loading = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_some()
    }

    pub fn current_mount(&self) -> Option<MountId> {
        self.mount.as_ref().map(Mount::id)
    }

    fn is_current(&self, mount_id: MountId) -> bool {
        self.current_mount() == Some(mount_id)
    }

    /// Replace the snapshot with a freshly loaded registry.
    ///
    /// Results from an earlier mount (or after an unmount) are ignored and
    /// `false` is returned.
    pub fn apply_loaded(&mut self, mount_id: MountId, endpoints: Vec<ApiEndpoint>) -> bool {
        if !self.is_current(mount_id) {
            tracing::debug!(mount = %mount_id, "dropping stale registry result");
            return false;
        }

        self.snapshot = endpoints;
        self.loading = false;
        self.clamp_focus();
        true
    }

    /// A load for `mount_id` ended without data.
    pub fn load_failed(&mut self, mount_id: MountId) {
        if self.is_current(mount_id) {
            self.loading = false;
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // ------------------------------------------------------------------
    // Disclosure
    // ------------------------------------------------------------------

    pub fn snapshot(&self) -> &[ApiEndpoint] {
        &self.snapshot
    }

    pub fn visible(&self) -> &[ApiEndpoint] {
        self.disclosure.visible(&self.snapshot)
    }

    pub fn disclosure(&self) -> Disclosure {
        self.disclosure
    }

    pub fn shows_toggle(&self) -> bool {
        disclosure::shows_toggle(self.snapshot.len())
    }

    pub fn is_expanded(&self) -> bool {
        self.disclosure.is_expanded()
    }

    /// Flip between the first cards and the full list.
    ///
    /// Does nothing when the toggle control is absent.
    pub fn toggle(&mut self) {
        if !self.shows_toggle() {
            return;
        }
        self.disclosure.toggle();
        self.clamp_focus();
    }

    // ------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------

    /// Index (into [`Self::visible`]) of the card with keyboard focus.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused_endpoint(&self) -> Option<&ApiEndpoint> {
        self.focused.and_then(|i| self.visible().get(i))
    }

    pub fn focus_next(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.focused = None;
            return;
        }
        self.focused = Some(match self.focused {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    pub fn focus_prev(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.focused = None;
            return;
        }
        self.focused = Some(match self.focused {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    /// Move focus by `delta` cards, stopping at either end.
    pub fn focus_offset(&mut self, delta: isize) {
        let len = self.visible().len();
        if len == 0 {
            self.focused = None;
            return;
        }
        let current = self.focused.unwrap_or(0) as isize;
        let target = (current + delta).clamp(0, len as isize - 1);
        self.focused = Some(target as usize);
    }

    /// Focus the visible card at `index`; out-of-range indices are ignored.
    pub fn focus(&mut self, index: usize) {
        if index < self.visible().len() {
            self.focused = Some(index);
        }
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    fn clamp_focus(&mut self) {
        let len = self.visible().len();
        self.focused = match self.focused {
            Some(_) if len == 0 => None,
            Some(i) if i >= len => Some(len - 1),
            other => other,
        };
    }
}
