use crate::app::state::{AppMode, AppState, PanelKind};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::{error::ErrorModal, help::HelpModal};
use crate::components::reader::Reader;
use crate::components::toc_panel::TocPanel;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Height of the search box: title row, input row, underline.
pub const SEARCH_HEIGHT: u16 = 3;

pub struct AppLayout {
    pub main: Vec<Rect>,
    pub body: Vec<Rect>,
}

pub fn get_layout(area: Rect, panel_open: bool) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area)
        .to_vec();

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(if panel_open {
            [Constraint::Percentage(40), Constraint::Percentage(60)]
        } else {
            [Constraint::Percentage(0), Constraint::Percentage(100)]
        })
        .split(main[1])
        .to_vec();

    AppLayout { main, body }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let layout = get_layout(area, app_state.panel.is_some());
    let theme = &app_state.theme;

    // --- Header ---
    f.render_widget(
        Header {
            title: &app_state.book_title,
            entry_count: app_state.entries.len(),
            position: app_state.active_position(),
            is_loading: app_state.is_loading,
            spinner: &app_state.spinner,
            theme,
        },
        layout.main[0],
    );

    // --- Reader ---
    let active = app_state.active_entry();
    f.render_widget(
        Reader {
            entry: active,
            position: app_state.active_position(),
            is_favorite: active.is_some_and(|e| app_state.is_favorite(&e.id.0)),
            is_loading: app_state.is_loading,
            focused: app_state.mode == AppMode::Reader,
            theme,
        },
        layout.body[1],
    );

    // --- Panel ---
    if let Some(panel) = &mut app_state.panel {
        let entries = match panel.kind {
            PanelKind::Contents => &app_state.entries,
            PanelKind::Favorites => &app_state.favorite_entries,
        };
        panel.search.apply_theme(&app_state.theme);
        let view = panel.panel.render(entries, app_state.active_target);
        let widget = TocPanel {
            view,
            search: &panel.search,
            favorites: &app_state.favorites,
            focused: app_state.mode == AppMode::Panel,
            theme: &app_state.theme,
        };
        f.render_stateful_widget(widget, layout.body[0], &mut panel.list_state);
    }

    // --- Footer ---
    f.render_widget(
        Footer {
            mode: app_state.mode,
            status: app_state.status_message.as_deref(),
            theme: &app_state.theme,
        },
        layout.main[2],
    );

    // --- Overlays ---
    if app_state.mode == AppMode::Help {
        f.render_widget(HelpModal { theme: &app_state.theme }, area);
    }
    if let Some(error) = &app_state.last_error {
        f.render_widget(
            ErrorModal {
                theme: &app_state.theme,
                error,
            },
            area,
        );
    }
}
