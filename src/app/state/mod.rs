use super::config::Config;
use super::keymap::{KeyConfig, KeyMap};
use crate::domain::models::{Entry, TargetIndex};
use crate::domain::panel::PanelLabels;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

pub mod error;
pub mod panel;
pub mod search;

// Re-exports
pub use error::{ErrorSeverity, ErrorState};
pub use panel::{PanelKind, PanelState};
pub use search::SearchBox;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Reader, // Reading the active page
    Panel,  // A list panel has focus
    Help,   // Showing the help overlay
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>,
    pub status_clear_time: Option<Instant>,
    pub is_loading: bool,

    // --- Book Data (The "Source of Truth") ---
    pub book_title: String,
    pub entries: Vec<Entry>,
    /// Position the reader is on. Panels only read it.
    pub active_target: Option<TargetIndex>,

    // --- Favorites ---
    pub favorites: Vec<String>,
    pub favorite_entries: Vec<Entry>,
    pub favorites_path: Option<PathBuf>,

    // --- Panels ---
    pub panel: Option<PanelState<'a>>,
    pub labels: PanelLabels,
    pub favorites_labels: PanelLabels,

    // --- Animation ---
    pub frame_count: u64,
    pub spinner: String,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: crate::theme::PaletteType,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &Config, favorites_path: Option<PathBuf>) -> Self {
        let favorites = favorites_path
            .as_deref()
            .map(super::persistence::load_favorites)
            .unwrap_or_default();
        let palette_type = config.theme.unwrap_or_default();

        Self {
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            labels: PanelLabels::default().with_overrides(&config.labels),
            favorites_labels: PanelLabels::favorites().with_overrides(&config.favorites_labels),
            palette_type,
            theme: crate::theme::Theme::from_palette_type(palette_type),
            favorites,
            favorites_path,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn active_entry(&self) -> Option<&Entry> {
        let target = self.active_target?;
        self.entries.iter().find(|e| e.target_index == target)
    }

    /// 1-based position of the active entry among navigable entries.
    #[must_use]
    pub fn active_position(&self) -> Option<(usize, usize)> {
        let target = self.active_target?;
        let pages: Vec<_> = self.navigable().collect();
        let pos = pages.iter().position(|e| e.target_index == target)?;
        Some((pos + 1, pages.len()))
    }

    pub fn navigable(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_navigable())
    }

    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    /// Entries backing the panel of `kind`.
    #[must_use]
    pub fn panel_entries(&self, kind: PanelKind) -> &[Entry] {
        match kind {
            PanelKind::Contents => &self.entries,
            PanelKind::Favorites => &self.favorite_entries,
        }
    }

    /// Rebuilds the favorites view in reading order.
    pub fn rebuild_favorite_entries(&mut self) {
        self.favorite_entries = self
            .entries
            .iter()
            .filter(|e| self.favorites.iter().any(|f| *f == e.id.0))
            .cloned()
            .collect();
    }

    /// Recomputes the open panel's visible rows after its entries changed.
    pub fn refresh_panel(&mut self) {
        if let Some(p) = &mut self.panel {
            let entries = match p.kind {
                PanelKind::Contents => &self.entries,
                PanelKind::Favorites => &self.favorite_entries,
            };
            p.panel.refresh(entries);
            p.sync_list();
        }
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Reader,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            is_loading: true,
            book_title: String::new(),
            entries: Vec::new(),
            active_target: None,
            favorites: Vec::new(),
            favorite_entries: Vec::new(),
            favorites_path: None,
            panel: None,
            labels: PanelLabels::default(),
            favorites_labels: PanelLabels::favorites(),
            frame_count: 0,
            spinner: "⠋".to_string(),
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            palette_type: crate::theme::PaletteType::CatppuccinMocha,
            theme: crate::theme::Theme::default(),
        }
    }
}
