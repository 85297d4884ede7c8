use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Favorites {
    #[serde(default)]
    pub ids: Vec<String>,
}

pub fn get_config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("tocview");
        path
    })
}

pub fn get_favorites_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("favorites.toml"))
}

/// Trims ids, drops blanks and repeats, keeps first-seen order.
#[must_use]
pub fn sanitize_ids(ids: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        let id = id.trim();
        if !id.is_empty() && !out.iter().any(|o| o == id) {
            out.push(id.to_string());
        }
    }
    out
}

pub fn load_favorites(path: &Path) -> Vec<String> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    match toml::from_str::<Favorites>(&content) {
        Ok(fav) => sanitize_ids(&fav.ids),
        Err(e) => {
            tracing::warn!(path = %path.display(), "ignoring unreadable favorites: {e}");
            Vec::new()
        }
    }
}

pub fn save_favorites(path: &Path, ids: &[String]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let fav = Favorites {
        ids: sanitize_ids(ids),
    };
    std::fs::write(path, toml::to_string(&fav)?)?;
    Ok(())
}
