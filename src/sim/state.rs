//! Puzzle state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::PLAYER_SIZE;
use crate::renderer::{Color, Surface};

/// Discrete movement command from the host's input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse a command name; unknown names are `None` and move nothing
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "w" => Some(Direction::Up),
            "down" | "s" => Some(Direction::Down),
            "left" | "a" => Some(Direction::Left),
            "right" | "d" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Unit step in screen space (y grows downward)
    pub fn delta(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// The player's avatar inside a puzzle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Reference point used for hit tests (top-left of the drawn square)
    pub pos: Vec2,
    /// Pixels moved per command, fixed at construction
    speed: f32,
    pub visible: bool,
}

impl Player {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            speed,
            visible: true,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Move one step; position is not clamped to the screen
    pub fn move_dir(&mut self, direction: Direction) {
        self.pos += direction.delta() * self.speed;
    }

    pub fn set_visibility(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn draw(&self, surface: &mut dyn Surface, color: Color) {
        if self.visible {
            surface.fill_rect(self.pos, Vec2::splat(PLAYER_SIZE), color);
        }
    }
}

/// Activation state of a single target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TargetState {
    /// Never touched
    #[default]
    Idle,
    /// Touched; the episode started at `since_ms`
    Active { since_ms: u64 },
    /// Activation window ran out; behaves like `Idle`
    TimedOut,
}

impl TargetState {
    pub fn is_active(&self) -> bool {
        matches!(self, TargetState::Active { .. })
    }
}

/// Current phase of a puzzle scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzlePhase {
    /// Intro screen showing, targets frozen
    Intro,
    /// Player is moving and targets react
    Playing,
    /// Every target was active at once
    Solved,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PuzzleEvent {
    /// A target entered `Active` from `Idle` or `TimedOut`
    TargetActivated { id: u32, pos: Vec2 },
    /// A target's activation window ran out
    TargetTimedOut { id: u32 },
    /// All targets were active at the same time
    Solved,
}
