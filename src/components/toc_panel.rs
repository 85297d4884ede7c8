use crate::app::state::SearchBox;
use crate::app::ui::SEARCH_HEIGHT;
use crate::domain::panel::{PanelBody, PanelView, RowView};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
    },
};

const ACTIVE_MARKER: &str = "▶ ";
const IDLE_MARKER: &str = "  ";

/// Draws a [`PanelView`]: search box on top, entries or the empty message below.
pub struct TocPanel<'a, 's> {
    pub view: PanelView<'a>,
    pub search: &'a SearchBox<'s>,
    pub favorites: &'a [String],
    pub focused: bool,
    pub theme: &'a Theme,
}

impl TocPanel<'_, '_> {
    fn row_line<'r>(&self, row: &RowView<'r>, width: u16) -> Line<'r> {
        let entry = row.entry;
        let title_style = if row.is_active {
            self.theme.entry_active
        } else {
            self.theme.entry_title
        };

        let mut spans = vec![Span::styled(
            if row.is_active { ACTIVE_MARKER } else { IDLE_MARKER },
            title_style,
        )];
        if let Some(seq) = entry.formatted_sequence() {
            spans.push(Span::styled(format!("{seq} "), self.theme.sequence));
        }
        spans.push(Span::styled(entry.title.as_str(), title_style));
        if self.favorites.iter().any(|f| *f == entry.id.0) {
            spans.push(Span::styled(" ★", self.theme.favorite));
        }

        if let Some(page) = entry.display_number {
            let page = page.to_string();
            let used: usize = spans.iter().map(Span::width).sum();
            let leader = (width as usize).saturating_sub(used + page.len() + 2);
            if leader > 0 {
                spans.push(Span::styled(format!(" {}", ".".repeat(leader)), self.theme.leader));
            }
            spans.push(Span::styled(format!(" {page}"), self.theme.page_number));
        }

        Line::from(spans)
    }
}

impl StatefulWidget for TocPanel<'_, '_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    format!(" {} ", self.view.labels.panel),
                    if self.focused {
                        self.theme.header_active
                    } else {
                        self.theme.header_item
                    },
                ),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                self.theme.border_focus
            } else {
                self.theme.border
            });

        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_HEIGHT), // Search box
                Constraint::Min(0),                // Entries
            ])
            .split(inner);

        Widget::render(self.search, layout[0], buf);

        match &self.view.body {
            PanelBody::Empty(message) => {
                Paragraph::new(Line::from(Span::styled(*message, self.theme.dimmed)))
                    .alignment(Alignment::Center)
                    .render(layout[1], buf);
            }
            PanelBody::Rows(rows) => {
                let width = layout[1].width;
                let items: Vec<ListItem> = rows
                    .iter()
                    .map(|row| ListItem::new(self.row_line(row, width)))
                    .collect();
                let list = List::new(items).highlight_style(self.theme.entry_cursor);
                StatefulWidget::render(list, layout[1], buf, state);
            }
        }
    }
}
