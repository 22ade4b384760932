//! Save data
//!
//! Only the player's name is kept between sessions; lore text uses it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Name used until the player picks one
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Persistent player profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub player_name: String,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
        }
    }
}

impl SaveData {
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
        }
    }

    /// The stored name, falling back to the default when blank
    pub fn player_name(&self) -> &str {
        let name = self.player_name.trim();
        if name.is_empty() {
            DEFAULT_PLAYER_NAME
        } else {
            name
        }
    }

    /// Read save data from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let save: SaveData = serde_json::from_str(&json)?;
        log::info!(
            "Loaded save data for {} from {}",
            save.player_name(),
            path.as_ref().display()
        );
        Ok(save)
    }

    /// Load save data, starting fresh if the file is missing or unreadable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load_from(path.as_ref()) {
            Ok(save) => save,
            Err(e) => {
                log::info!("No save data found ({e}), starting fresh");
                Self::default()
            }
        }
    }

    /// Write save data to a JSON file
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Save data written to {}", path.as_ref().display());
        Ok(())
    }
}
