use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

/// Rows the panel block spends above the list: border plus search box.
pub const PANEL_LIST_TOP: u16 = 1 + ui::SEARCH_HEIGHT;

/// Rows skipped by PageUp / PageDown in a panel.
pub const PAGE_JUMP: isize = 10;

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
    }
    if let Event::Resize(w, h) = event {
        return Some(Action::Resize(w, h));
    }

    // The error modal swallows input until acknowledged.
    if app_state.last_error.is_some() {
        return match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(Action::DismissError),
                _ => None,
            },
            _ => None,
        };
    }

    match app_state.mode {
        AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
                _ => None,
            },
            _ => None,
        },
        AppMode::Panel => match event {
            Event::Key(key) => {
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                match key.code {
                    KeyCode::Esc => Some(Action::ClosePanel),
                    KeyCode::Enter => Some(Action::PanelSelect),
                    KeyCode::Down => Some(Action::PanelCursorNext),
                    KeyCode::Up => Some(Action::PanelCursorPrev),
                    KeyCode::PageDown => Some(Action::PanelCursorJump(PAGE_JUMP)),
                    KeyCode::PageUp => Some(Action::PanelCursorJump(-PAGE_JUMP)),
                    KeyCode::Char('n') if ctrl => Some(Action::PanelCursorNext),
                    KeyCode::Char('p') if ctrl => Some(Action::PanelCursorPrev),
                    KeyCode::Char('f') if ctrl => Some(Action::PanelToggleFavorite),
                    KeyCode::Char('c') if ctrl => Some(Action::Quit),
                    // Line breaks in a single-line search box
                    KeyCode::Char('m' | 'j') if ctrl => None,
                    _ => Some(Action::PanelInput(key)),
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => Some(Action::PanelCursorNext),
                MouseEventKind::ScrollUp => Some(Action::PanelCursorPrev),
                MouseEventKind::Down(MouseButton::Left) => {
                    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
                    clicked_row(app_state, area, mouse.column, mouse.row)
                        .map(Action::PanelClick)
                        .or_else(|| {
                            let layout = ui::get_layout(area, true);
                            contains(layout.body[1], mouse.column, mouse.row)
                                .then_some(Action::ClosePanel)
                        })
                }
                _ => None,
            },
            _ => None,
        },
        AppMode::Reader => match event {
            Event::Key(key) => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Some(Action::Quit);
                }
                app_state.keymap.get_action(key)
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => Some(Action::NextPage),
                MouseEventKind::ScrollUp => Some(Action::PrevPage),
                _ => None,
            },
            _ => None,
        },
    }
}

/// Visible row under a click inside the panel list, if any.
pub fn clicked_row(app_state: &AppState<'_>, area: Rect, column: u16, row: u16) -> Option<usize> {
    let panel = app_state.panel.as_ref()?;
    let layout = ui::get_layout(area, true);
    let panel_area = layout.body[0];
    let list_top = panel_area.y + PANEL_LIST_TOP;
    let list_bottom = panel_area.bottom().saturating_sub(1);

    if column <= panel_area.x
        || column >= panel_area.right().saturating_sub(1)
        || row < list_top
        || row >= list_bottom
    {
        return None;
    }

    let idx = panel.list_state.offset() + (row - list_top) as usize;
    (idx < panel.panel.matches().len()).then_some(idx)
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{ErrorState, PanelKind};
    use crate::domain::models::Entry;
    use crossterm::event::{KeyEvent, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn size() -> Size {
        Size::new(80, 24)
    }

    fn panel_state() -> AppState<'static> {
        let mut s = AppState {
            entries: (0..5)
                .map(|i| Entry::new(format!("p{i}"), format!("Poem {i}"), i))
                .collect(),
            ..Default::default()
        };
        crate::app::reducer::update(&mut s, Action::OpenPanel(PanelKind::Contents));
        s
    }

    #[test]
    fn test_reader_keys_use_keymap() {
        let s = AppState::default();
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('t')), &s, size()),
            Some(Action::OpenPanel(PanelKind::Contents))
        );
        assert_eq!(map_event_to_action(key(KeyCode::Char('z')), &s, size()), None);
    }

    #[test]
    fn test_panel_routes_letters_to_search() {
        let s = panel_state();
        // 'q' is a search character here, not quit
        assert!(matches!(
            map_event_to_action(key(KeyCode::Char('q')), &s, size()),
            Some(Action::PanelInput(_))
        ));
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &s, size()),
            Some(Action::ClosePanel)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter), &s, size()),
            Some(Action::PanelSelect)
        );
        let ctrl_f = Event::Key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL));
        assert_eq!(
            map_event_to_action(ctrl_f, &s, size()),
            Some(Action::PanelToggleFavorite)
        );
    }

    #[test]
    fn test_panel_drops_newline_chords() {
        let s = panel_state();
        for c in ['m', 'j'] {
            let chord = Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
            assert_eq!(map_event_to_action(chord, &s, size()), None);
        }
        assert_eq!(
            map_event_to_action(key(KeyCode::PageDown), &s, size()),
            Some(Action::PanelCursorJump(PAGE_JUMP))
        );
    }

    #[test]
    fn test_error_modal_swallows_keys() {
        let mut s = AppState::default();
        s.last_error = Some(ErrorState::from_message("boom".to_string()));
        assert_eq!(map_event_to_action(key(KeyCode::Char('q')), &s, size()), None);
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &s, size()),
            Some(Action::DismissError)
        );
    }

    #[test]
    fn test_click_maps_to_row() {
        let s = panel_state();
        let area = Rect::new(0, 0, 80, 24);
        let layout = ui::get_layout(area, true);
        let panel = layout.body[0];
        let first_row = panel.y + PANEL_LIST_TOP;

        assert_eq!(clicked_row(&s, area, panel.x + 2, first_row), Some(0));
        assert_eq!(clicked_row(&s, area, panel.x + 2, first_row + 3), Some(3));
        assert_eq!(clicked_row(&s, area, panel.x + 2, first_row + 7), None);
        assert_eq!(clicked_row(&s, area, panel.x + 2, panel.y), None);

        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: panel.x + 2,
            row: first_row + 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event_to_action(click, &s, size()), Some(Action::PanelClick(1)));
    }

    #[test]
    fn test_key_release_ignored() {
        let s = AppState::default();
        let mut ev = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        ev.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(ev), &s, size()), None);
    }
}
