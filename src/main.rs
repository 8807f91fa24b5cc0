mod app;
mod catalog;
mod config;
mod logging;
mod timeline;
mod ui;
mod widgets;

use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Optional config path as the only argument
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let cfg = config::load_config(config_path.as_deref())?;
    logging::init(&cfg.logging)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "widgetboard exited with an error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let tick_rate = Duration::from_millis(cfg.ui.tick_ms.max(1));

    let mut state = AppState::new(cfg);
    tracing::info!(
        products = state.catalog.products().len(),
        categories = state.catalog.categories().count(),
        "board ready"
    );

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "terminal input stream failed");
                    break;
                }
                None => break,
            }
        }
    });

    // Spawn tick task; each tick carries the real time since the previous one
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        let mut last = Instant::now();
        loop {
            interval.tick().await;
            let now = Instant::now();
            if tick_tx.send(AppEvent::Tick(now - last)).is_err() {
                break;
            }
            last = now;
        }
    });

    // Initial render
    draw(terminal, &mut state)?;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        handler::handle_event(&mut state, event);

        if state.should_quit {
            tracing::info!(clicks = state.clicks, "quit");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            draw(terminal, &mut state)?;
        }
    }

    Ok(())
}

/// Draw a frame and keep its hit areas for the next click.
fn draw(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, state: &mut AppState) -> Result<()> {
    let mut hits = None;
    terminal.draw(|f| hits = Some(ui::render(f, state)))?;
    if let Some(hits) = hits {
        state.hits = hits;
    }
    state.dirty = false;
    Ok(())
}
