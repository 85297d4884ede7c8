use super::models::Entry;
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// A loaded table of contents, ready to feed the panels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TocSnapshot {
    pub book_title: String,
    pub entries: Vec<Entry>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TocSource: Send + Sync {
    // Reads and flattens the whole document
    async fn load(&self) -> Result<TocSnapshot>;

    // File to watch for external edits, if any
    fn watch_path(&self) -> Option<PathBuf>;
}
