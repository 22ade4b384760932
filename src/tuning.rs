//! Data-driven puzzle balance
//!
//! A `Tuning` is the full set of numbers that make a timed-activation
//! puzzle easier or harder. Presets live on [`crate::Difficulty`]; a
//! settings file may override them wholesale.

use serde::{Deserialize, Serialize};

/// Difficulty parameters for the timed-activation puzzle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Number of targets laid out per puzzle
    pub target_count: usize,
    /// Activation window per target, multiplied by `target_count` (ms)
    pub duration_multiplier_ms: u64,
    /// Largest Fitts's Law movement time allowed between consecutive targets
    pub max_movement_time: f32,
    /// Player step per move at the reference screen height (pixels)
    pub base_speed: f32,
}

impl Tuning {
    /// How long a target stays active after it is touched (ms)
    pub fn activation_duration_ms(&self) -> u64 {
        self.duration_multiplier_ms
            .saturating_mul(self.target_count as u64)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            target_count: 5,
            duration_multiplier_ms: 2000,
            max_movement_time: 40.0,
            base_speed: 10.0,
        }
    }
}
