use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState},
};
use crate::theme::{PaletteType, Theme};
use std::time::Instant;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            state.spinner = SPINNER[(state.frame_count % SPINNER.len() as u64) as usize].to_string();
            if state
                .status_clear_time
                .is_some_and(|t| Instant::now() >= t)
            {
                state.status_message = None;
                state.status_clear_time = None;
            }
            UpdateResult::Handled(None)
        }
        Action::Resize(_, _) => UpdateResult::Handled(None),
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                if state.panel.is_some() {
                    AppMode::Panel
                } else {
                    AppMode::Reader
                }
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::CycleTheme => {
            let all = PaletteType::all();
            let pos = all.iter().position(|p| *p == state.palette_type).unwrap_or(0);
            state.palette_type = all[(pos + 1) % all.len()];
            state.theme = Theme::from_palette_type(state.palette_type);
            state.status_message = Some(format!("Theme: {}", state.palette_type.label()));
            state.status_clear_time = None;
            UpdateResult::Handled(None)
        }
        Action::DismissError => {
            state.last_error = None;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_theme_wraps() {
        let mut s = AppState::default();
        for _ in 0..PaletteType::all().len() {
            update(&mut s, &Action::CycleTheme);
        }
        assert_eq!(s.palette_type, PaletteType::CatppuccinMocha);
        assert_eq!(s.theme, Theme::from_palette_type(PaletteType::CatppuccinMocha));
    }

    #[test]
    fn test_help_returns_to_previous_mode() {
        let mut s = AppState::default();
        update(&mut s, &Action::ToggleHelp);
        assert_eq!(s.mode, AppMode::Help);
        update(&mut s, &Action::ToggleHelp);
        assert_eq!(s.mode, AppMode::Reader);
    }

    #[test]
    fn test_tick_clears_expired_status() {
        let mut s = AppState::default();
        s.status_message = Some("done".to_string());
        s.status_clear_time = Some(Instant::now());
        update(&mut s, &Action::Tick);
        assert!(s.status_message.is_none());
        assert_eq!(s.spinner, SPINNER[1]);
    }
}
