use super::keymap::KeyConfig;
use crate::domain::panel::LabelOverrides;
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Contents of `~/.config/tocview/config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Option<PaletteType>,
    pub keys: KeyConfig,
    pub labels: LabelOverrides,
    pub favorites_labels: LabelOverrides,
}

pub fn get_config_path() -> Option<PathBuf> {
    super::persistence::get_config_dir().map(|dir| dir.join("config.toml"))
}

impl Config {
    /// Reads `path`, falling back to defaults when it is missing or broken.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), "cannot read config: {e}");
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "invalid config, using defaults: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let config: Config = toml::from_str(
            r#"
            theme = "nord"

            [keys]
            profile = "default"

            [labels]
            empty = "Nothing here"

            [favorites_labels]
            panel = "Starred"
            "#,
        )
        .unwrap();

        assert_eq!(config.theme, Some(PaletteType::Nord));
        assert_eq!(config.keys.profile, "default");
        assert_eq!(config.labels.empty.as_deref(), Some("Nothing here"));
        assert_eq!(config.labels.panel, None);
        assert_eq!(config.favorites_labels.panel.as_deref(), Some("Starred"));
    }

    #[test]
    fn test_load_fallbacks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(Config::load(&path), Config::default());

        std::fs::write(&path, "theme = 12").unwrap();
        assert_eq!(Config::load(&path), Config::default());

        std::fs::write(&path, "theme = \"gruvbox\"").unwrap();
        assert_eq!(Config::load(&path).theme, Some(PaletteType::Gruvbox));
    }
}
