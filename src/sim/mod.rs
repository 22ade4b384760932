//! Deterministic puzzle simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time is passed in once per tick, never read from a clock
//! - Seeded RNG only
//! - Stable iteration order (creation order of targets)
//! - Drawing goes through the `Surface` trait, no window or GPU access

pub mod collision;
pub mod placement;
pub mod state;
pub mod target;
pub mod targets;
pub mod tick;

pub use collision::{HitboxShape, point_in_circle, point_in_rect, point_in_square};
pub use placement::{PlacementParams, generate, movement_time};
pub use state::{Direction, Player, PuzzleEvent, PuzzlePhase, TargetState};
pub use target::{ActivationTarget, Contact};
pub use targets::TargetSet;
pub use tick::{PuzzleScene, TickInput, tick};
