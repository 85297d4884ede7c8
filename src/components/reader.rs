use crate::domain::models::Entry;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// The page the reader is on.
pub struct Reader<'a> {
    pub entry: Option<&'a Entry>,
    pub position: Option<(usize, usize)>,
    pub is_favorite: bool,
    pub is_loading: bool,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for Reader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                self.theme.border_focus
            } else {
                self.theme.border
            });
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        // Roughly center the text block vertically.
        let pad = inner.height.saturating_sub(5) / 2;
        lines.extend(std::iter::repeat(Line::from("")).take(pad as usize));

        match self.entry {
            Some(entry) => {
                let mut title = Vec::new();
                if let Some(seq) = entry.formatted_sequence() {
                    title.push(Span::styled(format!("{seq} "), self.theme.sequence));
                }
                title.push(Span::styled(entry.title.as_str(), self.theme.reader_title));
                if self.is_favorite {
                    title.push(Span::styled(" ★", self.theme.favorite));
                }
                lines.push(Line::from(title));
                lines.push(Line::from(""));

                let mut meta = Vec::new();
                if let Some(page) = entry.display_number {
                    meta.push(format!("page {page}"));
                }
                if let Some((pos, total)) = self.position {
                    meta.push(format!("{pos} / {total}"));
                }
                lines.push(Line::from(Span::styled(meta.join("  ·  "), self.theme.reader_meta)));
            }
            None if self.is_loading => {
                lines.push(Line::from(Span::styled(
                    "Loading table of contents...",
                    self.theme.dimmed,
                )));
            }
            None => {
                lines.push(Line::from(Span::styled("No page open", self.theme.reader_meta)));
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::raw("Press "),
                    Span::styled(" t ", self.theme.footer_segment_key),
                    Span::raw(" to open the table of contents"),
                ]));
            }
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
