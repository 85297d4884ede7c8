use crate::app::state::AppMode;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub mode: AppMode,
    pub status: Option<&'a str>,
    pub theme: &'a Theme,
}

fn hints(mode: AppMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        AppMode::Reader => &[
            ("t", "contents"),
            ("F", "favorites"),
            ("n/p", "page"),
            ("f", "favorite"),
            ("T", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ],
        AppMode::Panel => &[
            ("type", "search"),
            ("↑/↓", "move"),
            ("Enter", "open"),
            ("^F", "favorite"),
            ("Esc", "close"),
        ],
        AppMode::Help => &[("Esc", "close help")],
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        if let Some(status) = self.status {
            spans.push(Span::styled(format!(" {status} "), self.theme.status_info));
            spans.push(Span::raw(" "));
        }

        for (key, desc) in hints(self.mode) {
            spans.push(Span::styled(format!(" {key} "), self.theme.footer_segment_key));
            spans.push(Span::styled(format!(" {desc} "), self.theme.footer));
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.footer)
            .render(area, buf);
    }
}
