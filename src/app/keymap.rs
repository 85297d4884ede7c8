use super::action::Action;
use super::state::PanelKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "vim".to_string(),
        }
    }
}

/// Reader-mode bindings. Panel mode routes keys to the search box instead.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub reader: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut reader = HashMap::new();

        reader.insert(key(KeyCode::Char('q')), Action::Quit);
        reader.insert(key(KeyCode::Char('t')), Action::OpenPanel(PanelKind::Contents));
        reader.insert(key(KeyCode::Tab), Action::OpenPanel(PanelKind::Contents));
        reader.insert(key(KeyCode::Char('F')), Action::OpenPanel(PanelKind::Favorites));
        reader.insert(key(KeyCode::Char('n')), Action::NextPage);
        reader.insert(key(KeyCode::Right), Action::NextPage);
        reader.insert(key(KeyCode::PageDown), Action::NextPage);
        reader.insert(key(KeyCode::Char('p')), Action::PrevPage);
        reader.insert(key(KeyCode::Left), Action::PrevPage);
        reader.insert(key(KeyCode::PageUp), Action::PrevPage);
        reader.insert(key(KeyCode::Char('f')), Action::ToggleFavorite);
        reader.insert(key(KeyCode::Char('r')), Action::Reload);
        reader.insert(key(KeyCode::Char('T')), Action::CycleTheme);
        reader.insert(key(KeyCode::Char('?')), Action::ToggleHelp);

        if config.profile == "vim" {
            reader.insert(key(KeyCode::Char('l')), Action::NextPage);
            reader.insert(key(KeyCode::Char('h')), Action::PrevPage);
            reader.insert(key(KeyCode::Char('/')), Action::OpenPanel(PanelKind::Contents));
        }

        Self { reader }
    }

    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        // Shifted letters arrive with SHIFT set; the map stores them bare.
        let normalized = match event.code {
            KeyCode::Char(_) => {
                KeyEvent::new(event.code, event.modifiers.difference(KeyModifiers::SHIFT))
            }
            _ => KeyEvent::new(event.code, event.modifiers),
        };
        self.reader.get(&normalized).cloned()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}
