//! Application state and the actions the event loop drives.

mod handlers;
mod messages;

pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::panel::SupportedApiPanel;
use crate::registry::{self, LoadOutcome, RegistryClient};
use crate::theme::{ThemeController, ThemePreference};
use crate::traits::{DiagnosticSink, Translator};
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::RenderContext;

/// Main application state
pub struct App {
    /// Session-wide theme preference
    pub theme: ThemeController,
    /// The supported-API panel
    pub panel: SupportedApiPanel,
    registry: RegistryClient,
    diagnostics: Arc<dyn DiagnosticSink>,
    translator: Arc<dyn Translator>,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Clickable regions of the last frame
    pub hit_areas: HitAreaRegistry,
    /// Last mouse position reported by the terminal
    pub pointer: Option<(u16, u16)>,
    /// Card columns of the last frame, for Up/Down focus moves
    pub grid_columns: usize,
    /// Dirty flag: set on state mutations, cleared after each draw.
    pub needs_redraw: bool,
    pub should_quit: bool,
    load_task: Option<JoinHandle<LoadOutcome>>,
}

impl App {
    pub fn new(
        theme: ThemeController,
        registry: RegistryClient,
        diagnostics: Arc<dyn DiagnosticSink>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            theme,
            panel: SupportedApiPanel::new(),
            registry,
            diagnostics,
            translator,
            message_rx: Some(message_rx),
            message_tx,
            hit_areas: HitAreaRegistry::new(),
            pointer: None,
            grid_columns: 1,
            needs_redraw: true,
            should_quit: false,
            load_task: None,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn subscribe_theme(&self) -> watch::Receiver<ThemePreference> {
        self.theme.subscribe()
    }

    pub fn registry(&self) -> &RegistryClient {
        &self.registry
    }

    /// Inputs of the next frame.
    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.panel, self.theme.current(), self.translator.as_ref())
            .with_pointer(self.pointer)
    }

    // ------------------------------------------------------------------
    // Panel lifecycle
    // ------------------------------------------------------------------

    /// Mount the panel and start its registry load.
    ///
    /// Must be called inside a tokio runtime. Does nothing while the panel is
    /// already mounted, so the request goes out once per mount.
    pub fn mount_panel(&mut self) {
        let Some(token) = self.panel.mount() else {
            return;
        };

        let client = self.registry.clone();
        let diagnostics = Arc::clone(&self.diagnostics);
        let tx = self.message_tx.clone();
        let mount_id = token.id();

        self.load_task = Some(tokio::spawn(async move {
            let loaded_tx = tx.clone();
            let outcome = registry::load(&client, &token, diagnostics.as_ref(), move |endpoints| {
                let _ = loaded_tx.send(AppMessage::RegistryLoaded {
                    mount_id,
                    endpoints,
                });
            })
            .await;

            if outcome == LoadOutcome::Failed {
                let _ = tx.send(AppMessage::RegistryLoadFailed { mount_id });
            }
            outcome
        }));
        self.mark_dirty();
    }

    /// Unmount the panel. A load still in flight is discarded when it lands.
    pub fn unmount_panel(&mut self) {
        self.panel.unmount();
        self.mark_dirty();
    }

    /// Remount the panel, which issues a fresh registry request.
    pub fn reload(&mut self) {
        tracing::debug!("reloading supported API panel");
        self.unmount_panel();
        self.mount_panel();
    }

    /// Wait for the most recent load task to finish.
    ///
    /// Returns `None` when no load was started or the task panicked.
    pub async fn wait_for_load(&mut self) -> Option<LoadOutcome> {
        let task = self.load_task.take()?;
        task.await.ok()
    }

    /// Handle every message already queued on the channel.
    ///
    /// The event loop normally owns the receiver; this is for callers that
    /// drive the app without it.
    pub fn drain_messages(&mut self) -> usize {
        let Some(mut rx) = self.message_rx.take() else {
            return 0;
        };
        let mut handled = 0;
        while let Ok(msg) = rx.try_recv() {
            self.handle_message(msg);
            handled += 1;
        }
        self.message_rx = Some(rx);
        handled
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    pub fn cycle_theme(&mut self) {
        let theme = self.theme.cycle();
        tracing::debug!(theme = %theme, "theme cycled");
        self.mark_dirty();
    }

    pub fn toggle_disclosure(&mut self) {
        if !self.panel.shows_toggle() {
            return;
        }
        self.panel.toggle();
        tracing::debug!(expanded = self.panel.is_expanded(), "disclosure toggled");
        self.mark_dirty();
    }

    pub fn focus_card(&mut self, index: usize) {
        self.panel.focus(index);
        self.mark_dirty();
    }

    /// Card index whose URL row is under the mouse in the last frame.
    pub fn hovered_url(&self) -> Option<usize> {
        let (x, y) = self.pointer?;
        self.hit_areas.hovered_url(x, y)
    }

    /// Handle an incoming async message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::RegistryLoaded {
                mount_id,
                endpoints,
            } => {
                let count = endpoints.len();
                if self.panel.apply_loaded(mount_id, endpoints) {
                    tracing::debug!(mount = %mount_id, count, "registry snapshot replaced");
                    self.mark_dirty();
                }
            }
            AppMessage::RegistryLoadFailed { mount_id } => {
                self.panel.load_failed(mount_id);
                self.mark_dirty();
            }
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.theme)
            .field("panel", &self.panel)
            .field("registry", &self.registry)
            .field("needs_redraw", &self.needs_redraw)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}
