//! Application runtime: wiring, terminal lifecycle, and the event loop.

pub mod workers;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::Event as CEvent;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::api::HttpDirectoryApi;
use crate::args::Args;
use crate::cache::{CrossSessionCache, JsonFileCache};
use crate::controller::ViewController;
use crate::events::handle_event;
use crate::session::{NavStateStore, SessionStore};
use crate::state::{DetailResponse, SearchRequest, SearchResponse};
use crate::util::config;
use crate::{theme, ui};

/// Boxed result used across the runtime.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Put the terminal into raw mode on the alternate screen.
fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Undo [`setup_terminal`].
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Forward crossterm input into the async event loop from a blocking thread.
fn spawn_input_thread(tx: mpsc::UnboundedSender<CEvent>) {
    std::thread::spawn(move || {
        loop {
            match crossterm::event::poll(Duration::from_millis(100)) {
                Ok(true) => {
                    let Ok(ev) = crossterm::event::read() else {
                        break;
                    };
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Ok(false) => {
                    if tx.is_closed() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
}

/// Drive rendering and dispatch until the user exits.
async fn event_loop<C, N, B>(
    terminal: &mut Terminal<B>,
    ctl: &mut ViewController<C, N>,
    event_rx: &mut mpsc::UnboundedReceiver<CEvent>,
    query_tx: &mpsc::UnboundedSender<SearchRequest>,
    detail_tx: &mpsc::UnboundedSender<u64>,
    result_rx: &mut mpsc::UnboundedReceiver<SearchResponse>,
    detail_res_rx: &mut mpsc::UnboundedReceiver<DetailResponse>,
) -> Result<()>
where
    C: CrossSessionCache,
    N: NavStateStore,
    B: ratatui::backend::Backend,
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    let mut tick = tokio::time::interval(Duration::from_millis(200));
    loop {
        terminal.draw(|f| ui::draw(f, &mut ctl.state))?;
        tokio::select! {
            Some(ev) = event_rx.recv() => {
                if handle_event(&ev, ctl, query_tx, detail_tx) {
                    return Ok(());
                }
                // Drain whatever else arrived in this frame before redrawing.
                while let Ok(ev) = event_rx.try_recv() {
                    if handle_event(&ev, ctl, query_tx, detail_tx) {
                        return Ok(());
                    }
                }
            }
            Some(resp) = result_rx.recv() => ctl.apply_search(resp),
            Some(resp) = detail_res_rx.recv() => ctl.apply_detail(resp),
            _ = tick.tick() => {}
            else => return Ok(()),
        }
    }
}

/// What: Run the docsea TUI to completion.
///
/// Inputs:
/// - `args`: Parsed command-line arguments; query/specialization arguments
///   become the mount-time explicit intent.
///
/// Output:
/// - `Ok(())` on clean exit; terminal state is restored either way.
///
/// Details:
/// - Wires the HTTP client, on-disk cache, and session store into the
///   controller, spawns the retrieval workers, and hands control to the
///   event loop. The session snapshot is flushed before teardown.
pub async fn run(args: &Args) -> Result<()> {
    let settings = config::load_settings();
    let base_url = args
        .api_url
        .clone()
        .unwrap_or(settings.api_base_url);
    tracing::info!(base_url = %base_url, "[Runtime] starting");

    let api = Arc::new(HttpDirectoryApi::new(&base_url));
    let cache = JsonFileCache::new(theme::provider_cache_path());
    let nav = SessionStore::default();
    let mut ctl = ViewController::new(cache, nav);

    let (query_tx, query_rx) = mpsc::unbounded_channel::<SearchRequest>();
    let (result_tx, mut result_rx) = mpsc::unbounded_channel::<SearchResponse>();
    let (detail_tx, detail_rx) = mpsc::unbounded_channel::<u64>();
    let (detail_res_tx, mut detail_res_rx) = mpsc::unbounded_channel::<DetailResponse>();
    workers::spawn_search_worker(Arc::clone(&api), query_rx, result_tx);
    workers::spawn_detail_worker(Arc::clone(&api), detail_rx, detail_res_tx);

    if let Some(request) = ctl.on_mounted(&args.explicit_filters()) {
        let _ = query_tx.send(request);
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    setup_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    spawn_input_thread(event_tx);

    let result = event_loop(
        &mut terminal,
        &mut ctl,
        &mut event_rx,
        &query_tx,
        &detail_tx,
        &mut result_rx,
        &mut detail_res_rx,
    )
    .await;

    ctl.on_about_to_unmount();
    restore_terminal()?;
    tracing::info!("[Runtime] exited");
    result
}
