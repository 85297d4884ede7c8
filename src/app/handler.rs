use crate::app::{action::Action, command::Command, persistence};
use crate::domain::source::TocSource;
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Owns every write to the favorites file. Saves run one at a time in the
/// order they were requested, so the newest list is always the last written.
#[derive(Debug, Clone)]
pub struct FavoritesWriter {
    tx: mpsc::UnboundedSender<(PathBuf, Vec<String>)>,
}

impl FavoritesWriter {
    /// Starts the writer task. It ends once every `FavoritesWriter` clone is
    /// dropped and the queued saves are flushed.
    pub fn spawn(errors: mpsc::Sender<Action>) -> (Self, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::unbounded_channel::<(PathBuf, Vec<String>)>();
        let task = tokio::spawn(async move {
            while let Some((path, ids)) = rx.recv().await {
                let res =
                    tokio::task::spawn_blocking(move || persistence::save_favorites(&path, &ids))
                        .await;
                let err = match res {
                    Ok(Ok(())) => continue,
                    Ok(Err(e)) => e.to_string(),
                    Err(e) => e.to_string(),
                };
                let _ = errors
                    .send(Action::FavoritesSaveFailed(format!(
                        "Failed to save favorites: {err}"
                    )))
                    .await;
            }
        });
        (Self { tx }, task)
    }

    pub fn save(&self, path: PathBuf, ids: Vec<String>) -> Result<()> {
        self.tx
            .send((path, ids))
            .map_err(|_| anyhow::anyhow!("favorites writer has stopped"))
    }
}

/// Runs a command off the UI task and reports back through `tx`.
pub fn handle_command(
    command: Command,
    source: Arc<dyn TocSource>,
    favorites: &FavoritesWriter,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::LoadToc => {
            tokio::spawn(async move {
                match source.load().await {
                    Ok(snapshot) => {
                        let _ = tx.send(Action::TocLoaded(Box::new(snapshot))).await;
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Action::ErrorOccurred(format!(
                                "Failed to load table of contents: {e}"
                            )))
                            .await;
                    }
                }
            });
        }
        Command::SaveFavorites(path, ids) => favorites.save(path, ids)?,
    }
    Ok(())
}
