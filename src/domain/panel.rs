use super::filter::filter_entries;
use super::models::{Entry, TargetIndex};
use serde::{Deserialize, Serialize};

/// Optional label overrides as they appear in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOverrides {
    pub panel: Option<String>,
    pub placeholder: Option<String>,
    pub search: Option<String>,
    pub empty: Option<String>,
}

/// User-facing strings of a panel instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLabels {
    /// Accessible name, drawn as the panel title.
    pub panel: String,
    pub placeholder: String,
    /// Accessible name of the search box.
    pub search: String,
    pub empty: String,
}

impl Default for PanelLabels {
    fn default() -> Self {
        Self {
            panel: "Table of contents".to_string(),
            placeholder: "Search by title...".to_string(),
            search: "Search poems".to_string(),
            empty: "Nothing found".to_string(),
        }
    }
}

impl PanelLabels {
    #[must_use]
    pub fn favorites() -> Self {
        Self {
            panel: "Favorite poems".to_string(),
            placeholder: "Search favorites...".to_string(),
            search: "Search favorites".to_string(),
            empty: "No favorite poems yet".to_string(),
        }
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: &LabelOverrides) -> Self {
        if let Some(v) = &overrides.panel {
            self.panel.clone_from(v);
        }
        if let Some(v) = &overrides.placeholder {
            self.placeholder.clone_from(v);
        }
        if let Some(v) = &overrides.search {
            self.search.clone_from(v);
        }
        if let Some(v) = &overrides.empty {
            self.empty.clone_from(v);
        }
        self
    }
}

/// Transient state of one filterable list panel.
///
/// The panel never owns the entries: every call that needs them borrows the
/// caller's slice. `matches` caches the filter result for the current query
/// and must be refreshed through [`ListPanel::refresh`] when the slice changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListPanel {
    query: String,
    matches: Vec<usize>,
    cursor: usize,
    labels: PanelLabels,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView<'a> {
    pub entry: &'a Entry,
    pub is_active: bool,
    pub is_cursor: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody<'a> {
    Empty(&'a str),
    Rows(Vec<RowView<'a>>),
}

/// Render model of a panel: search box plus either rows or the empty message.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView<'a> {
    pub labels: &'a PanelLabels,
    pub query: &'a str,
    pub body: PanelBody<'a>,
}

impl ListPanel {
    #[must_use]
    pub fn new(labels: PanelLabels, entries: &[Entry]) -> Self {
        Self {
            query: String::new(),
            matches: (0..entries.len()).collect(),
            cursor: 0,
            labels,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn labels(&self) -> &PanelLabels {
        &self.labels
    }

    /// Indices into the caller's entries, in input order.
    #[must_use]
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_query(&mut self, text: &str, entries: &[Entry]) {
        if self.query == text {
            return;
        }
        self.query = text.to_string();
        self.cursor = 0;
        self.refresh(entries);
        tracing::debug!(query = %self.query, visible = self.matches.len(), "panel query changed");
    }

    /// Recomputes the visible subset after the entry collection changed.
    pub fn refresh(&mut self, entries: &[Entry]) {
        self.matches = filter_entries(entries, &self.query);
        self.cursor = self.cursor.min(self.matches.len().saturating_sub(1));
    }

    /// Moves the keyboard cursor, wrapping at both ends.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.matches.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let len = len as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }

    pub fn set_cursor(&mut self, row: usize) {
        if row < self.matches.len() {
            self.cursor = row;
        }
    }

    #[must_use]
    pub fn cursor_entry<'a>(&self, entries: &'a [Entry]) -> Option<&'a Entry> {
        self.matches.get(self.cursor).and_then(|&i| entries.get(i))
    }

    /// Hands `target` to `on_select` unless it is a negative sentinel.
    /// Returns whether the callback ran.
    pub fn select_entry<F: FnOnce(TargetIndex)>(&self, target: TargetIndex, on_select: F) -> bool {
        if target < 0 {
            return false;
        }
        on_select(target);
        true
    }

    #[must_use]
    pub fn render<'a>(&'a self, entries: &'a [Entry], active: Option<TargetIndex>) -> PanelView<'a> {
        let rows: Vec<RowView<'a>> = self
            .matches
            .iter()
            .enumerate()
            .filter_map(|(row, &i)| {
                entries.get(i).map(|entry| RowView {
                    entry,
                    is_active: entry.is_active(active),
                    is_cursor: row == self.cursor,
                })
            })
            .collect();

        let body = if rows.is_empty() {
            PanelBody::Empty(&self.labels.empty)
        } else {
            PanelBody::Rows(rows)
        };

        PanelView {
            labels: &self.labels,
            query: &self.query,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new("a", "Evening Song", 0),
            Entry::new("b", "Morning Light", 5).with_sequence_number(12),
            Entry::new("c", "Night Watch", 6).with_display_number(14),
        ]
    }

    #[test]
    fn test_new_panel_shows_everything() {
        let entries = sample();
        let panel = ListPanel::new(PanelLabels::default(), &entries);
        assert_eq!(panel.query(), "");
        assert_eq!(panel.matches(), &[0, 1, 2]);
    }

    #[test]
    fn test_set_query_recomputes_and_resets_cursor() {
        let entries = sample();
        let mut panel = ListPanel::new(PanelLabels::default(), &entries);
        panel.move_cursor(2);
        assert_eq!(panel.cursor(), 2);

        panel.set_query("ing", &entries);
        assert_eq!(panel.matches(), &[0, 1]);
        assert_eq!(panel.cursor(), 0);

        panel.set_query("12", &entries);
        assert_eq!(panel.matches(), &[1]);
    }

    #[test]
    fn test_refresh_after_entries_change() {
        let mut entries = sample();
        let mut panel = ListPanel::new(PanelLabels::default(), &entries);
        panel.set_query("night", &entries);
        assert_eq!(panel.matches(), &[2]);

        entries.insert(0, Entry::new("d", "Night Train", 7));
        panel.refresh(&entries);
        assert_eq!(panel.matches(), &[0, 3]);
    }

    #[test]
    fn test_select_entry_ignores_negative_targets() {
        let panel = ListPanel::default();
        let mut calls = Vec::new();

        assert!(!panel.select_entry(-1, |t| calls.push(t)));
        assert!(calls.is_empty());

        assert!(panel.select_entry(0, |t| calls.push(t)));
        assert!(panel.select_entry(7, |t| calls.push(t)));
        assert_eq!(calls, vec![0, 7]);
    }

    #[test]
    fn test_render_marks_active_and_cursor() {
        let entries = sample();
        let mut panel = ListPanel::new(PanelLabels::default(), &entries);
        panel.move_cursor(1);

        let view = panel.render(&entries, Some(5));
        let PanelBody::Rows(rows) = view.body else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows.iter().map(|r| r.is_active).collect::<Vec<_>>(),
            vec![false, true, false]
        );
        assert_eq!(
            rows.iter().map(|r| r.is_cursor).collect::<Vec<_>>(),
            vec![false, true, false]
        );
    }

    #[test]
    fn test_active_does_not_affect_filtering() {
        let entries = sample();
        let mut panel = ListPanel::new(PanelLabels::default(), &entries);
        panel.set_query("evening", &entries);
        let a = panel.render(&entries, Some(5));
        let b = panel.render(&entries, None);
        let ids = |v: &PanelView| match &v.body {
            PanelBody::Rows(r) => r.iter().map(|r| r.entry.id.0.clone()).collect::<Vec<_>>(),
            PanelBody::Empty(_) => vec![],
        };
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_empty_state_uses_label() {
        let entries = sample();
        let mut panel = ListPanel::new(PanelLabels::favorites(), &entries);
        panel.set_query("zzz", &entries);
        let view = panel.render(&entries, None);
        assert_eq!(view.body, PanelBody::Empty("No favorite poems yet"));
        assert_eq!(view.query, "zzz");
    }

    #[test]
    fn test_cursor_wraps() {
        let entries = sample();
        let mut panel = ListPanel::new(PanelLabels::default(), &entries);
        panel.move_cursor(-1);
        assert_eq!(panel.cursor(), 2);
        panel.move_cursor(1);
        assert_eq!(panel.cursor(), 0);
        assert_eq!(panel.cursor_entry(&entries).map(|e| e.title.as_str()), Some("Evening Song"));

        panel.set_query("zzz", &entries);
        panel.move_cursor(1);
        assert_eq!(panel.cursor(), 0);
        assert!(panel.cursor_entry(&entries).is_none());
    }

    #[test]
    fn test_label_overrides() {
        let labels = PanelLabels::default().with_overrides(&LabelOverrides {
            empty: Some("Ничего не найдено".to_string()),
            ..Default::default()
        });
        assert_eq!(labels.empty, "Ничего не найдено");
        assert_eq!(labels.panel, "Table of contents");
    }
}
