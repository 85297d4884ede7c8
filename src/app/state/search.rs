use crate::domain::panel::PanelLabels;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Widget};
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

/// Single-line search input of a panel.
///
/// Wraps `TextArea` so panel state can be cloned and compared.
#[derive(Default)]
pub struct SearchBox<'a>(pub TextArea<'a>);

impl SearchBox<'_> {
    #[must_use]
    pub fn new(labels: &PanelLabels) -> Self {
        let mut area = TextArea::default();
        area.set_placeholder_text(labels.placeholder.clone());
        area.set_cursor_line_style(Style::default());
        area.set_block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title(format!(" {} ", labels.search)),
        );
        Self(area)
    }

    /// Feeds a key to the box unless it would start a second line.
    /// Returns whether the key was taken.
    pub fn input_line(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let breaks_line = match key.code {
            KeyCode::Enter => true,
            KeyCode::Char('m' | 'j') => ctrl,
            _ => false,
        };
        if breaks_line {
            return false;
        }
        self.0.input(key);
        true
    }

    /// Re-applied every frame so a theme switch reaches an open panel.
    pub fn apply_theme(&mut self, theme: &Theme) {
        self.0.set_style(theme.search_text);
        self.0.set_placeholder_style(theme.placeholder);
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().join("")
    }
}

impl Clone for SearchBox<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        area.set_placeholder_text(self.0.placeholder_text());
        area.set_cursor_line_style(self.0.cursor_line_style());
        if let Some(block) = self.0.block() {
            area.set_block(block.clone());
        }
        Self(area)
    }
}

impl std::fmt::Debug for SearchBox<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchBox")
            .field("text", &self.text())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for SearchBox<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for SearchBox<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SearchBox<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &SearchBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_clone() {
        let mut search = SearchBox::new(&PanelLabels::default());
        assert_eq!(search.text(), "");
        for c in "snow".chars() {
            search.input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        search.input(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(search.text(), "sno");

        let copy = search.clone();
        assert_eq!(copy, search);
        assert_eq!(copy.placeholder_text(), "Search by title...");
    }

    #[test]
    fn test_line_breaks_are_rejected() {
        let mut search = SearchBox::new(&PanelLabels::default());
        assert!(search.input_line(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE)));
        assert!(!search.input_line(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
        assert!(!search.input_line(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL)));
        assert!(!search.input_line(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(search.input_line(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE)));
        assert_eq!(search.lines().len(), 1);
        assert_eq!(search.text(), "12");
    }
}
