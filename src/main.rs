use proxify_tui::adapters::{FileThemeStore, ReqwestHttpClient, TracingSink};
use proxify_tui::app::{App, AppMessage};
use proxify_tui::cli::{parse_args, version_line, CliCommand, USAGE};
use proxify_tui::config::SiteConfig;
use proxify_tui::i18n::Catalog;
use proxify_tui::logging::{default_log_path, init_file_logging};
use proxify_tui::registry::RegistryClient;
use proxify_tui::terminal::{setup_panic_hook, TerminalManager};
use proxify_tui::theme::{ThemeController, ThemePreference};
use proxify_tui::traits::{DiagnosticSink, HttpClient, ThemeStore};
use proxify_tui::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// Frame tick; redraws still only happen when the app is dirty.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    color_eyre::install()?;

    // Handle --version / --help before the terminal is taken over
    let config = match parse_args(std::env::args(), SiteConfig::from_env()?)? {
        CliCommand::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        CliCommand::Help => {
            print!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Run(config) => config,
    };

    if let Some(path) = default_log_path() {
        init_file_logging(&path);
    }
    tracing::info!(
        base_url = %config.base_url,
        locale = %config.locale,
        "starting proxify-tui"
    );

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let mut app = build_app(&config)?;

    let mut term_manager = TerminalManager::new()?;
    let result = runtime.block_on(async {
        app.mount_panel();
        run_app(term_manager.terminal(), &mut app).await
    });
    term_manager.restore()?;

    tracing::info!("proxify-tui exited");
    result
}

/// Wire the production adapters into a fresh App.
fn build_app(config: &SiteConfig) -> Result<App> {
    let diagnostics: Arc<dyn DiagnosticSink> = Arc::new(TracingSink);

    let http: Arc<dyn HttpClient> = match config.request_timeout {
        Some(timeout) => Arc::new(ReqwestHttpClient::with_timeout(timeout)?),
        None => Arc::new(ReqwestHttpClient::new()),
    };
    let registry = RegistryClient::new(http, &config.base_url);

    let store: Option<Arc<dyn ThemeStore>> = if config.persist_theme {
        match FileThemeStore::new() {
            Ok(store) => Some(Arc::new(store)),
            Err(e) => {
                tracing::warn!(error = %e, "theme preference will not be persisted");
                None
            }
        }
    } else {
        None
    };

    let theme = ThemeController::init(store, Arc::clone(&diagnostics));
    if let Some(initial) = config.initial_theme {
        theme.set(initial);
    }

    Ok(App::new(
        theme,
        registry,
        diagnostics,
        Arc::new(Catalog::new(config.locale)),
    ))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();
    let mut theme_rx: watch::Receiver<ThemePreference> = app.subscribe_theme();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {}

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => {
                        app.handle_mouse(mouse);
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal event error");
                    }
                    None => {
                        app.should_quit = true;
                    }
                }
            }

            // Theme changes re-render every dependent
            changed = theme_rx.changed() => {
                if changed.is_ok() {
                    app.mark_dirty();
                }
            }

            // Handle async messages from the registry load
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            app.unmount_panel();
            return Ok(());
        }
    }
}
