//! Quiet Rooms - narrative puzzles about depression and anxiety
//!
//! Core modules:
//! - `sim`: Deterministic puzzle simulation (placement, targets, player, scene)
//! - `renderer`: Draw-surface contract and vertex tessellation
//! - `settings` / `tuning`: Player preferences and data-driven difficulty
//! - `lore`: Lore object table and reveal order
//! - `save`: Player save data (name only)
//! - `ui`: Intro/outro text screens

pub mod error;
pub mod lore;
pub mod renderer;
pub mod save;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::{PuzzleError, SettingsError};
pub use save::SaveData;
pub use settings::{Difficulty, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Radius of every activation target (pixels)
    pub const TARGET_RADIUS: f32 = 40.0;
    /// Extra clearance between two targets on top of their diameters
    pub const TARGET_PADDING: f32 = 100.0;
    /// Width of the dark ring drawn around a target
    pub const TARGET_RING_WIDTH: f32 = 10.0;

    /// Fitts's Law intercept (start/stop time of the player)
    pub const FITTS_A: f32 = 0.1;

    /// Candidates sampled for one target before the layout restarts
    pub const MAX_ATTEMPTS_PER_TARGET: u32 = 5_000;
    /// Full layout restarts before placement gives up
    pub const MAX_LAYOUT_RESTARTS: u32 = 16;

    /// Side of the player square (pixels)
    pub const PLAYER_SIZE: f32 = 40.0;

    /// Screen height the base speeds are tuned for
    pub const REFERENCE_SCREEN_HEIGHT: f32 = 1080.0;
    pub const DEFAULT_SCREEN_WIDTH: u32 = 1920;
    pub const DEFAULT_SCREEN_HEIGHT: u32 = 1080;

    /// Simulated frame interval used by the headless driver (~60 Hz)
    pub const FRAME_MS: u64 = 16;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: glam::Vec2, b: glam::Vec2) -> f32 {
    (a - b).length()
}
