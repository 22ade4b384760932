//! Puzzle scene and per-frame tick
//!
//! The host calls [`tick`] once per frame with the frame's input and a
//! monotonic timestamp, then [`PuzzleScene::draw`] onto its surface.

use glam::Vec2;

use super::placement::PlacementParams;
use super::state::{Direction, Player, PuzzleEvent, PuzzlePhase};
use super::targets::TargetSet;
use crate::consts::{TARGET_PADDING, TARGET_RADIUS};
use crate::error::PuzzleError;
use crate::renderer::{Palette, Surface};
use crate::settings::Settings;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Movement commands applied in order
    pub moves: Vec<Direction>,
    /// Idle/demo mode - the autopilot steers the player
    pub idle_mode: bool,
}

impl TickInput {
    pub fn moves(moves: &[Direction]) -> Self {
        Self {
            moves: moves.to_vec(),
            idle_mode: false,
        }
    }

    pub fn idle() -> Self {
        Self {
            moves: Vec::new(),
            idle_mode: true,
        }
    }
}

/// A timed-activation puzzle: player, targets and background
#[derive(Debug, Clone)]
pub struct PuzzleScene {
    player: Player,
    start_pos: Vec2,
    targets: TargetSet,
    phase: PuzzlePhase,
    palette: Palette,
    background: String,
    visible: bool,
    time_ticks: u64,
    events: Vec<PuzzleEvent>,
}

impl PuzzleScene {
    /// Build a scene in the `Intro` phase
    ///
    /// Fails when the targets cannot be placed; nothing is partially built.
    pub fn new(settings: &Settings, seed: u64) -> Result<Self, PuzzleError> {
        let tuning = settings.tuning();
        let params = PlacementParams {
            count: tuning.target_count,
            width: settings.screen_width,
            height: settings.screen_height,
            radius: TARGET_RADIUS,
            padding: TARGET_PADDING,
            player_speed: settings.player_speed(),
            max_movement_time: tuning.max_movement_time,
        };
        let targets = TargetSet::new(
            params,
            settings.activation_duration_ms(),
            settings.hitbox_shape,
            seed,
        )?;

        let start_pos = Vec2::new(
            settings.screen_width as f32 / 2.0,
            settings.screen_height as f32 / 2.0,
        );

        Ok(Self {
            player: Player::new(start_pos, settings.player_speed()),
            start_pos,
            targets,
            phase: PuzzlePhase::Intro,
            palette: Palette::for_settings(settings.grayscale),
            background: settings.background_path(),
            visible: true,
            time_ticks: 0,
            events: Vec::new(),
        })
    }

    pub fn phase(&self) -> PuzzlePhase {
        self.phase
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Leave the intro screen and let targets react to the player
    pub fn begin(&mut self) {
        if self.phase == PuzzlePhase::Intro {
            self.targets.set_collidable(true);
            self.set_phase(PuzzlePhase::Playing);
        }
    }

    /// Freeze the targets behind a text screen
    pub fn pause(&mut self) {
        if self.phase == PuzzlePhase::Playing {
            self.targets.set_collidable(false);
            self.set_phase(PuzzlePhase::Intro);
        }
    }

    /// New layout and player back at the start ("try again")
    ///
    /// A solved puzzle goes back to `Playing`. On placement failure the
    /// scene is left untouched.
    pub fn reset(&mut self) -> Result<(), PuzzleError> {
        self.targets.reset()?;
        self.player.pos = self.start_pos;
        self.events.clear();
        if self.phase == PuzzlePhase::Solved {
            self.targets.set_collidable(true);
            self.set_phase(PuzzlePhase::Playing);
        }
        Ok(())
    }

    /// Show or hide the whole puzzle layer
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.player.set_visibility(visible);
        self.targets.set_visibility(visible);
    }

    /// True once every target has been active at the same time
    pub fn is_puzzle_solved(&self) -> bool {
        self.phase == PuzzlePhase::Solved
    }

    /// Events recorded since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<PuzzleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Draw background, targets and player
    pub fn draw(&mut self, surface: &mut dyn Surface, now_ms: u64) {
        if !self.visible {
            self.targets.expire(now_ms);
            return;
        }
        surface.blit(&self.background, Vec2::ZERO);
        self.targets.draw(surface, now_ms, &self.palette);
        self.player.draw(surface, self.palette.player);
    }

    fn set_phase(&mut self, phase: PuzzlePhase) {
        log::info!("Puzzle phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    /// Moves that bring the player toward the nearest inactive target
    fn autopilot_moves(&self) -> Vec<Direction> {
        let player = self.player.pos;
        let goal = self
            .targets
            .targets()
            .iter()
            .filter(|t| !t.is_complete())
            .min_by(|a, b| {
                a.pos()
                    .distance_squared(player)
                    .partial_cmp(&b.pos().distance_squared(player))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let Some(goal) = goal else {
            return Vec::new();
        };
        // A target that timed out under the player needs a fresh approach
        if goal.is_touching() {
            return vec![Direction::Up];
        }
        let goal = goal.pos();

        // Stop within half a step so the player settles instead of oscillating
        let deadzone = self.player.speed() / 2.0;
        let delta = goal - player;
        let mut moves = Vec::with_capacity(2);
        if delta.x > deadzone {
            moves.push(Direction::Right);
        } else if delta.x < -deadzone {
            moves.push(Direction::Left);
        }
        if delta.y > deadzone {
            moves.push(Direction::Down);
        } else if delta.y < -deadzone {
            moves.push(Direction::Up);
        }
        moves
    }
}

/// Advance the puzzle by one frame
pub fn tick(scene: &mut PuzzleScene, input: &TickInput, now_ms: u64) {
    // Nothing reacts once solved
    if scene.phase == PuzzlePhase::Solved {
        return;
    }

    scene.time_ticks += 1;

    if scene.phase == PuzzlePhase::Playing {
        let moves = if input.idle_mode {
            scene.autopilot_moves()
        } else {
            input.moves.clone()
        };
        for direction in moves {
            scene.player.move_dir(direction);
        }
        scene
            .targets
            .update_and_check_collisions(scene.player.pos, now_ms);
    }

    scene.targets.expire(now_ms);
    scene.events.extend(scene.targets.drain_events());

    if scene.phase == PuzzlePhase::Playing && scene.targets.is_puzzle_solved() {
        scene.targets.set_collidable(false);
        scene.set_phase(PuzzlePhase::Solved);
        scene.events.push(PuzzleEvent::Solved);
        log::info!(
            "Puzzle solved after {} ticks with {} targets",
            scene.time_ticks,
            scene.targets.len()
        );
    }
}
