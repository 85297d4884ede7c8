use super::search::SearchBox;
use crate::domain::models::Entry;
use crate::domain::panel::{ListPanel, PanelLabels};
use ratatui::widgets::ListState;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanelKind {
    Contents,
    Favorites,
}

/// An open panel: the filter state plus the widgets that drive it.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState<'a> {
    pub kind: PanelKind,
    pub panel: ListPanel,
    pub search: SearchBox<'a>,
    pub list_state: ListState,
}

impl PanelState<'_> {
    #[must_use]
    pub fn new(kind: PanelKind, labels: PanelLabels, entries: &[Entry]) -> Self {
        let search = SearchBox::new(&labels);
        let mut state = Self {
            kind,
            panel: ListPanel::new(labels, entries),
            search,
            list_state: ListState::default(),
        };
        state.sync_list();
        state
    }

    /// Keeps the list widget's selection on the panel cursor.
    pub fn sync_list(&mut self) {
        if self.panel.matches().is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(self.panel.cursor()));
        }
    }
}
