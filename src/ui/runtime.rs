use crate::config::Config;
use crate::contact::ContactSubmitter;
use crate::content::SiteCatalog;
use crate::error::Result;
use crate::lifecycle::MountHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::mpsc;

/// Redraw tick for the event reader.
const TICK_RATE: Duration = Duration::from_millis(100);

pub struct RunOptions {
    pub config: Config,
    pub catalog: SiteCatalog,
    /// Already resolved against the catalog.
    pub start_page: String,
    pub submitter: Arc<dyn ContactSubmitter>,
}

pub async fn run(options: RunOptions) -> Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let running = MountHandle::new();
    let mut events = EventHandler::new(TICK_RATE, running.clone());
    let signals = tokio::spawn(forward_signals(events.sender(), running.clone()));

    let mut app = App::new(
        options.config,
        options.catalog,
        options.submitter,
        events.sender(),
    );
    app.navigate(&options.start_page);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(page = %options.start_page, "Site started");

    let result = event_loop(&mut terminal, &mut app, &mut events).await;

    app.teardown();
    running.unmount();
    signals.abort();
    drop(guard);
    tracing::info!("Site stopped");
    Ok(result?)
}

async fn event_loop(
    terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next().await {
            Some(AppEvent::Key(key)) => handle_key(app, key),
            Some(AppEvent::Tick) => app.on_tick(),
            Some(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Some(AppEvent::Slideshow(event)) => {
                app.on_slideshow_event(event);
            }
            Some(AppEvent::Shutdown) => {
                tracing::info!("Shutdown signal received");
                app.request_quit();
            }
            None => return Ok(()),
        }
    }
}

/// Turns SIGINT/SIGTERM into [`AppEvent::Shutdown`].
async fn forward_signals(tx: mpsc::UnboundedSender<AppEvent>, running: MountHandle) {
    #[cfg(unix)]
    {
        let mut sigterm = match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(err) => {
                tracing::warn!("SIGTERM handler not installed: {}", err);
                return;
            }
        };
        tokio::select! {
            _ = signal::ctrl_c() => {},
            _ = sigterm.recv() => {},
            _ = running.unmounted() => return,
        }
    }

    #[cfg(not(unix))]
    {
        tokio::select! {
            _ = signal::ctrl_c() => {},
            _ = running.unmounted() => return,
        }
    }

    let _ = tx.send(AppEvent::Shutdown);
}
