use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, ErrorState},
};
use crate::domain::source::TocSnapshot;
use std::time::{Duration, Instant};

const STATUS_TTL: Duration = Duration::from_secs(3);

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Reload | Action::ExternalChangeDetected => {
            state.is_loading = true;
            UpdateResult::Handled(Some(Command::LoadToc))
        }
        Action::TocLoaded(snapshot) => {
            apply_snapshot(state, snapshot);
            UpdateResult::Handled(None)
        }
        Action::ErrorOccurred(msg) => {
            tracing::error!("{msg}");
            state.is_loading = false;
            state.last_error = Some(ErrorState::from_message(msg.clone()));
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn apply_snapshot(state: &mut AppState, snapshot: &TocSnapshot) {
    let is_reload = !state.entries.is_empty();

    state.book_title.clone_from(&snapshot.book_title);
    state.entries.clone_from(&snapshot.entries);
    state.is_loading = false;

    // The reader keeps its page only while that page still exists.
    if let Some(target) = state.active_target {
        if !state.entries.iter().any(|e| e.target_index == target) {
            state.active_target = None;
        }
    }

    state.rebuild_favorite_entries();
    state.refresh_panel();

    if is_reload {
        state.status_message = Some(format!("Reloaded {} entries", state.entries.len()));
        state.status_clear_time = Some(Instant::now() + STATUS_TTL);
    }
}
