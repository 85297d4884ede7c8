use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState, PanelKind, PanelState},
};
use crate::domain::models::TargetIndex;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::OpenPanel(kind) => {
            let labels = match kind {
                PanelKind::Contents => state.labels.clone(),
                PanelKind::Favorites => state.favorites_labels.clone(),
            };
            let mut panel = PanelState::new(*kind, labels, state.panel_entries(*kind));
            // Start the cursor on the page being read.
            if let Some(row) = active_row(state, &panel) {
                panel.panel.set_cursor(row);
                panel.sync_list();
            }
            state.panel = Some(panel);
            state.mode = AppMode::Panel;
            UpdateResult::Handled(None)
        }
        Action::ClosePanel => {
            close(state);
            UpdateResult::Handled(None)
        }
        Action::PanelInput(key) => {
            if let Some(p) = &mut state.panel {
                if !p.search.input_line(*key) {
                    return UpdateResult::Handled(None);
                }
                let entries = match p.kind {
                    PanelKind::Contents => &state.entries,
                    PanelKind::Favorites => &state.favorite_entries,
                };
                p.panel.set_query(&p.search.text(), entries);
                p.sync_list();
            }
            UpdateResult::Handled(None)
        }
        Action::PanelCursorNext => move_cursor(state, 1),
        Action::PanelCursorPrev => move_cursor(state, -1),
        Action::PanelCursorJump(delta) => {
            if let Some(p) = &mut state.panel {
                let last = p.panel.matches().len().saturating_sub(1) as isize;
                let row = (p.panel.cursor() as isize + delta).clamp(0, last);
                p.panel.set_cursor(row as usize);
                p.sync_list();
            }
            UpdateResult::Handled(None)
        }
        Action::PanelClick(row) => {
            let Some(p) = &mut state.panel else {
                return UpdateResult::Handled(None);
            };
            if *row >= p.panel.matches().len() {
                return UpdateResult::Handled(None);
            }
            p.panel.set_cursor(*row);
            p.sync_list();
            select_cursor(state);
            UpdateResult::Handled(None)
        }
        Action::PanelSelect => {
            select_cursor(state);
            UpdateResult::Handled(None)
        }
        Action::PanelToggleFavorite => {
            let id = state.panel.as_ref().and_then(|p| {
                p.panel
                    .cursor_entry(state.panel_entries(p.kind))
                    .map(|e| e.id.0.clone())
            });
            match id {
                Some(id) => UpdateResult::Handled(super::reader::toggle_favorite(state, &id)),
                None => UpdateResult::Handled(None),
            }
        }
        _ => UpdateResult::NotHandled,
    }
}

fn move_cursor(state: &mut AppState, delta: isize) -> UpdateResult {
    if let Some(p) = &mut state.panel {
        p.panel.move_cursor(delta);
        p.sync_list();
    }
    UpdateResult::Handled(None)
}

fn active_row(state: &AppState, panel: &PanelState) -> Option<usize> {
    let target = state.active_target?;
    let entries = state.panel_entries(panel.kind);
    panel
        .panel
        .matches()
        .iter()
        .position(|&i| entries.get(i).is_some_and(|e| e.target_index == target))
}

/// Runs the cursor row through the panel's selection contract. A selection
/// moves the reader and dismisses the panel.
fn select_cursor(state: &mut AppState) {
    let Some(p) = &state.panel else {
        return;
    };
    let Some(entry) = p.panel.cursor_entry(state.panel_entries(p.kind)) else {
        return;
    };

    let mut chosen: Option<TargetIndex> = None;
    p.panel.select_entry(entry.target_index, |t| chosen = Some(t));

    if let Some(target) = chosen {
        super::reader::go_to(state, target);
        close(state);
    }
}

fn close(state: &mut AppState) {
    state.panel = None;
    if state.mode == AppMode::Panel {
        state.mode = AppMode::Reader;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Entry, NO_TARGET};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn state() -> AppState<'static> {
        AppState {
            entries: vec![
                Entry::new("a", "Evening Song", 0),
                Entry::new("b", "Morning Light", 5).with_sequence_number(12),
                Entry::new("fragment", "Lost Fragment", NO_TARGET),
            ],
            ..Default::default()
        }
    }

    fn type_str(s: &mut AppState, text: &str) {
        for c in text.chars() {
            update(
                s,
                &Action::PanelInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
    }

    fn visible_ids(s: &AppState) -> Vec<String> {
        let p = s.panel.as_ref().unwrap();
        p.panel
            .matches()
            .iter()
            .map(|&i| s.panel_entries(p.kind)[i].id.0.clone())
            .collect()
    }

    #[test]
    fn test_typing_filters() {
        let mut s = state();
        update(&mut s, &Action::OpenPanel(PanelKind::Contents));
        assert_eq!(s.mode, AppMode::Panel);
        assert_eq!(visible_ids(&s), vec!["a", "b", "fragment"]);

        type_str(&mut s, "MORN");
        assert_eq!(visible_ids(&s), vec!["b"]);

        update(
            &mut s,
            &Action::PanelInput(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
        );
        assert_eq!(s.panel.as_ref().unwrap().panel.query(), "MOR");
    }

    #[test]
    fn test_search_box_stays_single_line() {
        let mut s = state();
        update(&mut s, &Action::OpenPanel(PanelKind::Contents));
        type_str(&mut s, "1");
        for c in ['m', 'j'] {
            update(
                &mut s,
                &Action::PanelInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
            );
        }
        update(
            &mut s,
            &Action::PanelInput(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
        );
        type_str(&mut s, "2");

        let p = s.panel.as_ref().unwrap();
        assert_eq!(p.search.lines().to_vec(), vec!["12".to_string()]);
        assert_eq!(p.panel.query(), "12");
        assert_eq!(visible_ids(&s), vec!["b"]);
    }

    #[test]
    fn test_select_moves_reader_and_closes() {
        let mut s = state();
        update(&mut s, &Action::OpenPanel(PanelKind::Contents));
        type_str(&mut s, "12");
        update(&mut s, &Action::PanelSelect);
        assert_eq!(s.active_target, Some(5));
        assert!(s.panel.is_none());
        assert_eq!(s.mode, AppMode::Reader);
    }

    #[test]
    fn test_selecting_sentinel_keeps_panel_open() {
        let mut s = state();
        s.active_target = Some(0);
        update(&mut s, &Action::OpenPanel(PanelKind::Contents));
        type_str(&mut s, "lost");
        update(&mut s, &Action::PanelSelect);
        assert_eq!(s.active_target, Some(0));
        assert!(s.panel.is_some());
    }

    #[test]
    fn test_select_on_empty_result_is_noop() {
        let mut s = state();
        update(&mut s, &Action::OpenPanel(PanelKind::Contents));
        type_str(&mut s, "zzz");
        assert!(visible_ids(&s).is_empty());
        update(&mut s, &Action::PanelSelect);
        assert!(s.panel.is_some());
        assert_eq!(s.active_target, None);
    }

    #[test]
    fn test_open_starts_on_active_row() {
        let mut s = state();
        s.active_target = Some(5);
        update(&mut s, &Action::OpenPanel(PanelKind::Contents));
        let p = s.panel.as_ref().unwrap();
        assert_eq!(p.panel.cursor(), 1);
        assert_eq!(p.list_state.selected(), Some(1));
    }

    #[test]
    fn test_favorites_panel_tracks_toggles() {
        let mut s = state();
        update(&mut s, &Action::OpenPanel(PanelKind::Favorites));
        assert!(visible_ids(&s).is_empty());
        update(&mut s, &Action::ClosePanel);

        update(&mut s, &Action::OpenPanel(PanelKind::Contents));
        update(&mut s, &Action::PanelCursorNext);
        update(&mut s, &Action::PanelToggleFavorite);
        assert_eq!(s.favorites, vec!["b".to_string()]);
        update(&mut s, &Action::ClosePanel);

        update(&mut s, &Action::OpenPanel(PanelKind::Favorites));
        assert_eq!(visible_ids(&s), vec!["b"]);
        update(&mut s, &Action::PanelToggleFavorite);
        assert!(visible_ids(&s).is_empty());
    }

    #[test]
    fn test_cursor_jump_clamps() {
        let mut s = state();
        update(&mut s, &Action::OpenPanel(PanelKind::Contents));
        update(&mut s, &Action::PanelCursorJump(10));
        assert_eq!(s.panel.as_ref().unwrap().panel.cursor(), 2);
        update(&mut s, &Action::PanelCursorJump(-10));
        assert_eq!(s.panel.as_ref().unwrap().panel.cursor(), 0);
    }

    #[test]
    fn test_click_selects_row() {
        let mut s = state();
        update(&mut s, &Action::OpenPanel(PanelKind::Contents));
        update(&mut s, &Action::PanelClick(1));
        assert_eq!(s.active_target, Some(5));
        assert!(s.panel.is_none());
    }
}
