use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Reading",
        &[
            ("n / → / l", "Next page"),
            ("p / ← / h", "Previous page"),
            ("f", "Toggle favorite"),
            ("r", "Reload the table of contents"),
        ],
    ),
    (
        "Panels",
        &[
            ("t / Tab", "Open the table of contents"),
            ("F", "Open favorites"),
            ("type", "Filter by title, id or number"),
            ("↑ / ↓", "Move the cursor"),
            ("Enter", "Open the entry"),
            ("Ctrl-F", "Toggle favorite"),
            ("Esc", "Close the panel"),
        ],
    ),
    (
        "General",
        &[
            ("T", "Next theme"),
            ("?", "Show this help"),
            ("q", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let mut rows = Vec::new();
        for (i, (name, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*name, self.theme.header_item)),
                Cell::from(""),
            ]));
            for (key, desc) in *bindings {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(format!(" {key}"), self.theme.footer_segment_key)),
                    Cell::from(Span::styled(*desc, self.theme.entry_title)),
                ]));
            }
        }

        Table::new(rows, [Constraint::Percentage(30), Constraint::Percentage(70)])
            .block(block)
            .render(help_area, buf);
    }
}
