use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, ErrorSeverity, ErrorState},
};
use crate::domain::models::TargetIndex;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::NextPage => {
            step_page(state, 1);
            UpdateResult::Handled(None)
        }
        Action::PrevPage => {
            step_page(state, -1);
            UpdateResult::Handled(None)
        }
        Action::ToggleFavorite => {
            let Some(id) = state.active_entry().map(|e| e.id.0.clone()) else {
                return UpdateResult::Handled(None);
            };
            UpdateResult::Handled(toggle_favorite(state, &id))
        }
        Action::FavoritesSaveFailed(msg) => {
            tracing::warn!("{msg}");
            state.last_error = Some(ErrorState::new(msg.clone(), ErrorSeverity::Warning));
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Moves the reader to `target` if some entry carries it.
pub fn go_to(state: &mut AppState, target: TargetIndex) {
    if state.entries.iter().any(|e| e.target_index == target) {
        state.active_target = Some(target);
        tracing::info!(target_index = target, "navigated");
    }
}

fn step_page(state: &mut AppState, delta: isize) {
    let targets: Vec<TargetIndex> = state.navigable().map(|e| e.target_index).collect();
    if targets.is_empty() {
        return;
    }

    let next = match state
        .active_target
        .and_then(|t| targets.iter().position(|&x| x == t))
    {
        Some(pos) => {
            let last = targets.len() - 1;
            if delta > 0 {
                (pos + 1).min(last)
            } else {
                pos.saturating_sub(1)
            }
        }
        None => 0,
    };
    state.active_target = Some(targets[next]);
}

/// Flips `id` in the favorites list and returns the save command, if any.
pub fn toggle_favorite(state: &mut AppState, id: &str) -> Option<Command> {
    if let Some(pos) = state.favorites.iter().position(|f| f == id) {
        state.favorites.remove(pos);
        state.status_message = Some(format!("Removed {id} from favorites"));
    } else {
        state.favorites.push(id.to_string());
        state.status_message = Some(format!("Added {id} to favorites"));
    }
    state.status_clear_time = None;
    state.rebuild_favorite_entries();
    state.refresh_panel();

    state
        .favorites_path
        .clone()
        .map(|path| Command::SaveFavorites(path, state.favorites.clone()))
}
