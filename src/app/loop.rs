use crate::app::{
    action::Action, command::Command, handler, input::map_event_to_action, reducer,
    state::AppState, ui,
};
use crate::domain::source::TocSource;

use anyhow::Result;
use crossterm::event::{self, Event};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::{backend::Backend, Terminal};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);
const DEBOUNCE: Duration = Duration::from_millis(500);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    source: Arc<dyn TocSource>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, source, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    source: Arc<dyn TocSource>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // Kept alive for the whole loop; dropping it stops the notifications.
    let _watcher = match source.watch_path() {
        Some(path) => spawn_file_watcher(&path, action_tx.clone())?,
        None => None,
    };

    let (favorites, _favorites_task) = handler::FavoritesWriter::spawn(action_tx.clone());

    // Initial Load
    handler::handle_command(Command::LoadToc, source.clone(), &favorites, action_tx.clone())?;

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if action == Action::Quit {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handler::handle_command(cmd, source.clone(), &favorites, action_tx.clone())?;
            }
        }
    }

    tracing::info!("event loop finished");
    Ok(())
}

/// Watches the directory holding `path` and reports edits to that file,
/// collapsing bursts into one `ExternalChangeDetected`.
fn spawn_file_watcher(
    path: &Path,
    action_tx: mpsc::Sender<Action>,
) -> Result<Option<RecommendedWatcher>> {
    let Some(dir) = path.parent().filter(|d| d.is_dir()) else {
        tracing::warn!(path = %path.display(), "not watching for changes: no parent directory");
        return Ok(None);
    };
    let file_name = path.file_name().map(ToOwned::to_owned);

    let (notify_tx, mut notify_rx) = mpsc::channel(1);
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        let Ok(event) = res else { return };
        // Editors often replace the file, so watch the directory and filter here.
        let touches_file = event
            .paths
            .iter()
            .any(|p| p.file_name().map(ToOwned::to_owned) == file_name);
        if touches_file {
            let _ = notify_tx.try_send(());
        }
    })?;
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    tracing::debug!(dir = %dir.display(), "watching for changes");

    tokio::spawn(async move {
        let mut pending = false;
        loop {
            if pending {
                tokio::select! {
                    Some(()) = notify_rx.recv() => {}
                    () = tokio::time::sleep(DEBOUNCE) => {
                        if action_tx.send(Action::ExternalChangeDetected).await.is_err() {
                            break;
                        }
                        pending = false;
                    }
                }
            } else if notify_rx.recv().await.is_some() {
                pending = true;
            } else {
                break;
            }
        }
    });

    Ok(Some(watcher))
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
