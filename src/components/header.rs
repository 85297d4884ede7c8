use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub title: &'a str,
    pub entry_count: usize,
    pub position: Option<(usize, usize)>,
    pub is_loading: bool,
    pub spinner: &'a str,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.title.is_empty() {
            " Untitled ".to_string()
        } else {
            format!(" {} ", self.title)
        };

        let mut spans = vec![
            Span::styled(" TOCVIEW ", self.theme.header_logo),
            Span::styled(title, self.theme.header_title),
            Span::styled(format!(" {} poems ", self.entry_count), self.theme.header_stats),
        ];

        match self.position {
            Some((pos, total)) => spans.push(Span::styled(
                format!(" {pos} / {total} "),
                self.theme.header_active,
            )),
            None if self.is_loading => spans.push(Span::styled(
                format!(" {} loading ", self.spinner),
                self.theme.header_warn,
            )),
            None => {}
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
