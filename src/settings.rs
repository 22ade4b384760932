//! Game settings and difficulty presets
//!
//! Stored as JSON next to the save file. Every field is optional on disk;
//! missing values fall back to [`Settings::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, REFERENCE_SCREEN_HEIGHT};
use crate::error::SettingsError;
use crate::sim::HitboxShape;
use crate::tuning::Tuning;

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "medium" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Balance numbers for this preset
    pub fn tuning(&self) -> Tuning {
        match self {
            Difficulty::Easy => Tuning {
                target_count: 4,
                duration_multiplier_ms: 3000,
                max_movement_time: 42.0,
                base_speed: 12.0,
            },
            Difficulty::Normal => Tuning::default(),
            Difficulty::Hard => Tuning {
                target_count: 6,
                duration_multiplier_ms: 1400,
                max_movement_time: 37.0,
                base_speed: 8.0,
            },
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Screen size in pixels (also the puzzle's placement area)
    pub screen_width: u32,
    pub screen_height: u32,

    /// Puzzle difficulty preset
    pub difficulty: Difficulty,
    /// Replaces the preset's numbers when present
    pub tuning: Option<Tuning>,

    // === Accessibility ===
    /// Grayscale presentation (colors only, never logic)
    pub grayscale: bool,

    /// Hitbox test used for targets
    pub hitbox_shape: HitboxShape,

    /// Fixed layout seed (random per run when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            difficulty: Difficulty::Normal,
            tuning: None,
            grayscale: false,
            hitbox_shape: HitboxShape::Square,
            seed: None,
        }
    }
}

impl Settings {
    /// Create settings from a difficulty preset
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    /// Effective tuning (override, or the preset's)
    pub fn tuning(&self) -> Tuning {
        self.tuning.unwrap_or_else(|| self.difficulty.tuning())
    }

    /// Speed multiplier for the current screen size
    pub fn display_scale(&self) -> f32 {
        self.screen_height as f32 / REFERENCE_SCREEN_HEIGHT
    }

    /// Player step per move, fixed for the lifetime of a player
    pub fn player_speed(&self) -> f32 {
        self.tuning().base_speed * self.display_scale()
    }

    /// How long a touched target stays active (ms)
    pub fn activation_duration_ms(&self) -> u64 {
        self.tuning().activation_duration_ms()
    }

    /// Background image for the bed puzzle at this resolution and palette
    pub fn background_path(&self) -> String {
        let scheme = if self.grayscale { "bw" } else { "color" };
        format!(
            "assets/backgrounds/puzzle_1/pz1_{}_{}p.png",
            scheme, self.screen_height
        )
    }

    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Write settings to a JSON file
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("EASY"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("medium"), Some(Difficulty::Normal));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn test_player_speed_scales_with_screen() {
        let mut settings = Settings::from_difficulty(Difficulty::Normal);
        assert!((settings.player_speed() - 10.0).abs() < 0.001);

        settings.screen_height = 720;
        assert!((settings.player_speed() - 10.0 * 720.0 / 1080.0).abs() < 0.001);
    }

    #[test]
    fn test_tuning_override_wins() {
        let mut settings = Settings::from_difficulty(Difficulty::Hard);
        assert_eq!(settings.tuning().target_count, 6);

        settings.tuning = Some(Tuning {
            target_count: 2,
            ..Tuning::default()
        });
        assert_eq!(settings.tuning().target_count, 2);
        assert_eq!(settings.activation_duration_ms(), 4000);
    }

    #[test]
    fn test_background_path_follows_palette() {
        let mut settings = Settings::default();
        assert_eq!(
            settings.background_path(),
            "assets/backgrounds/puzzle_1/pz1_color_1080p.png"
        );
        settings.grayscale = true;
        settings.screen_height = 720;
        assert_eq!(
            settings.background_path(),
            "assets/backgrounds/puzzle_1/pz1_bw_720p.png"
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"difficulty":"Easy","grayscale":true}"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Easy);
        assert!(settings.grayscale);
        assert_eq!(settings.screen_width, 1920);
        assert_eq!(settings.hitbox_shape, HitboxShape::Square);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Settings::from_json("{not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "quiet_rooms_settings_{}.json",
            std::process::id()
        ));
        let mut settings = Settings::from_difficulty(Difficulty::Hard);
        settings.seed = Some(7);
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
        let _ = std::fs::remove_file(&path);
    }
}
