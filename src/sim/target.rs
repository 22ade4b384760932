//! Activation targets
//!
//! A target is a fixed circular zone. Touching it starts an activation
//! episode; the episode lasts `duration_ms` from the first touch no matter
//! how long the player stays inside, and a new episode needs the player to
//! step off first. Timeouts are evaluated lazily whenever the target is
//! checked or drawn.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::HitboxShape;
use super::state::TargetState;
use crate::consts::{TARGET_RADIUS, TARGET_RING_WIDTH};
use crate::renderer::{Palette, Surface};

/// Outcome of a single collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// No overlap, or the target is not collidable
    Miss,
    /// Overlap that started a new activation episode
    Fresh,
    /// Overlap during an episode that was already running
    Sustained,
    /// Overlap that outlasted its episode; the player must leave first
    Lingering,
}

/// A single circular zone the player has to activate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationTarget {
    pub id: u32,
    pos: Vec2,
    radius: f32,
    state: TargetState,
    duration_ms: u64,
    collidable: bool,
    shape: HitboxShape,
    /// Unbroken contact since the last miss; survives a timeout so a
    /// player standing still cannot start a new episode
    touching: bool,
    pub visible: bool,
}

impl ActivationTarget {
    /// New idle target; collisions stay off until enabled
    pub fn new(id: u32, pos: Vec2, duration_ms: u64, shape: HitboxShape) -> Self {
        Self {
            id,
            pos,
            radius: TARGET_RADIUS,
            state: TargetState::Idle,
            duration_ms,
            collidable: false,
            shape,
            touching: false,
            visible: true,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn state(&self) -> TargetState {
        self.state
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn is_collidable(&self) -> bool {
        self.collidable
    }

    pub fn is_touching(&self) -> bool {
        self.touching
    }

    /// Start of the current episode; `Some` exactly while active
    pub fn activation_timestamp(&self) -> Option<u64> {
        match self.state {
            TargetState::Active { since_ms } => Some(since_ms),
            _ => None,
        }
    }

    /// True iff the target is currently active
    pub fn is_complete(&self) -> bool {
        self.state.is_active()
    }

    pub fn set_collidable(&mut self, collidable: bool) {
        self.collidable = collidable;
        if !collidable {
            self.touching = false;
        }
    }

    pub fn set_visibility(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Hit test against the target's hitbox, ignoring state
    pub fn overlaps(&self, point: Vec2) -> bool {
        self.shape.contains(self.pos, self.radius, point)
    }

    /// Apply a pending timeout; returns true when the target just timed out
    pub fn refresh(&mut self, now_ms: u64) -> bool {
        if let TargetState::Active { since_ms } = self.state {
            if now_ms.saturating_sub(since_ms) >= self.duration_ms {
                self.state = TargetState::TimedOut;
                log::debug!(
                    "Target {} timed out at (x: {}, y: {})",
                    self.id,
                    self.pos.x,
                    self.pos.y
                );
                return true;
            }
        }
        false
    }

    /// Run the collision state machine for one player position
    pub fn check(&mut self, player_pos: Vec2, now_ms: u64) -> Contact {
        self.refresh(now_ms);

        if !self.collidable || !self.overlaps(player_pos) {
            self.touching = false;
            return Contact::Miss;
        }

        if self.state.is_active() {
            self.touching = true;
            return Contact::Sustained;
        }
        if self.touching {
            return Contact::Lingering;
        }

        self.touching = true;
        self.state = TargetState::Active { since_ms: now_ms };
        log::debug!(
            "Collision detected: target {} at (x: {}, y: {})",
            self.id,
            self.pos.x,
            self.pos.y
        );
        Contact::Fresh
    }

    /// Forget contact when the player is elsewhere, without any state change
    pub fn release(&mut self, player_pos: Vec2) {
        if self.touching && !self.overlaps(player_pos) {
            self.touching = false;
        }
    }

    /// Boolean form of [`check`](Self::check): true on any overlap
    pub fn check_collision(&mut self, player_pos: Vec2, now_ms: u64) -> bool {
        self.check(player_pos, now_ms) != Contact::Miss
    }

    /// Draw the dark ring and the state-colored core
    pub fn draw(&mut self, surface: &mut dyn Surface, now_ms: u64, palette: &Palette) {
        self.refresh(now_ms);
        if !self.visible {
            return;
        }

        let core = match self.state {
            TargetState::Active { .. } if self.touching => palette.target_touching,
            TargetState::Active { .. } => palette.target_active,
            TargetState::Idle | TargetState::TimedOut => palette.target_idle,
        };
        surface.fill_circle(self.pos, self.radius, palette.target_ring);
        surface.fill_circle(self.pos, self.radius - TARGET_RING_WIDTH, core);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use proptest::prelude::*;

    const CENTER: Vec2 = Vec2::new(500.0, 500.0);
    const INSIDE: Vec2 = Vec2::new(520.0, 480.0);
    const OUTSIDE: Vec2 = Vec2::new(700.0, 700.0);

    fn live_target(duration_ms: u64) -> ActivationTarget {
        let mut target = ActivationTarget::new(1, CENTER, duration_ms, HitboxShape::Square);
        target.set_collidable(true);
        target
    }

    #[test]
    fn test_new_target_is_idle_and_frozen() {
        let mut target = ActivationTarget::new(1, CENTER, 1000, HitboxShape::Square);
        assert_eq!(target.state(), TargetState::Idle);
        assert_eq!(target.activation_timestamp(), None);
        assert!(!target.check_collision(INSIDE, 0));
        assert_eq!(target.state(), TargetState::Idle);
    }

    #[test]
    fn test_touch_activates_and_records_time() {
        let mut target = live_target(1000);
        assert_eq!(target.check(INSIDE, 250), Contact::Fresh);
        assert_eq!(target.state(), TargetState::Active { since_ms: 250 });
        assert_eq!(target.activation_timestamp(), Some(250));
        assert!(target.is_complete());
        assert!(target.is_touching());
    }

    #[test]
    fn test_miss_leaves_idle() {
        let mut target = live_target(1000);
        assert_eq!(target.check(OUTSIDE, 0), Contact::Miss);
        assert_eq!(target.state(), TargetState::Idle);
    }

    #[test]
    fn test_square_corner_counts_as_hit() {
        let mut target = live_target(1000);
        assert!(target.check_collision(CENTER + Vec2::splat(40.0), 0));
    }

    #[test]
    fn test_circle_shape_corner_misses() {
        let mut target = ActivationTarget::new(1, CENTER, 1000, HitboxShape::Circle);
        target.set_collidable(true);
        assert!(!target.check_collision(CENTER + Vec2::splat(35.0), 0));
        assert!(target.check_collision(CENTER + Vec2::new(0.0, 35.0), 0));
    }

    #[test]
    fn test_continued_contact_does_not_refresh_timestamp() {
        let mut target = live_target(1000);
        target.check(INSIDE, 100);
        assert_eq!(target.check(INSIDE, 400), Contact::Sustained);
        assert_eq!(target.check(INSIDE, 900), Contact::Sustained);
        assert_eq!(target.activation_timestamp(), Some(100));
    }

    #[test]
    fn test_times_out_when_duration_elapses() {
        let mut target = live_target(1000);
        target.check(INSIDE, 0);

        assert!(!target.refresh(999));
        assert!(target.is_complete());

        assert!(target.refresh(1000));
        assert_eq!(target.state(), TargetState::TimedOut);
        assert_eq!(target.activation_timestamp(), None);
        assert!(!target.refresh(2000));
    }

    #[test]
    fn test_standing_still_cannot_extend_episode() {
        let mut target = live_target(1000);
        target.check(INSIDE, 0);
        // Still inside when the window closes: the episode ends and stays over
        assert_eq!(target.check(INSIDE, 1000), Contact::Lingering);
        assert_eq!(target.state(), TargetState::TimedOut);
        assert_eq!(target.check(INSIDE, 5000), Contact::Lingering);
        assert_eq!(target.activation_timestamp(), None);
        assert!(target.check_collision(INSIDE, 5016));

        // Stepping off and back on starts a new episode
        assert_eq!(target.check(OUTSIDE, 5032), Contact::Miss);
        assert_eq!(target.check(INSIDE, 5048), Contact::Fresh);
        assert_eq!(target.activation_timestamp(), Some(5048));
    }

    #[test]
    fn test_standing_still_every_frame_times_out() {
        let mut target = live_target(1000);
        let mut seen_timed_out = false;
        for now in (0..10_000).step_by(16) {
            target.check_collision(INSIDE, now);
            seen_timed_out |= target.state() == TargetState::TimedOut;
        }
        assert!(seen_timed_out);
        assert_eq!(target.state(), TargetState::TimedOut);
    }

    #[test]
    fn test_release_only_when_player_left() {
        let mut target = live_target(1000);
        target.check(INSIDE, 0);
        target.refresh(1000);

        target.release(INSIDE);
        assert_eq!(target.check(INSIDE, 1100), Contact::Lingering);

        target.release(OUTSIDE);
        assert!(!target.is_touching());
        assert_eq!(target.check(INSIDE, 1200), Contact::Fresh);
    }

    #[test]
    fn test_timed_out_target_reactivates() {
        let mut target = live_target(1000);
        target.check(INSIDE, 0);
        target.check(OUTSIDE, 1200);
        assert_eq!(target.state(), TargetState::TimedOut);

        assert_eq!(target.check(INSIDE, 1300), Contact::Fresh);
        assert_eq!(target.state(), TargetState::Active { since_ms: 1300 });
    }

    #[test]
    fn test_disabling_collision_still_times_out() {
        let mut target = live_target(1000);
        target.check(INSIDE, 0);
        target.set_collidable(false);
        assert!(!target.check_collision(INSIDE, 500));
        assert!(target.is_complete());
        assert!(!target.check_collision(INSIDE, 1000));
        assert_eq!(target.state(), TargetState::TimedOut);
    }

    #[test]
    fn test_draw_colors_follow_state() {
        let palette = Palette::color();
        let mut target = live_target(1000);
        let mut list = DrawList::new(1000, 1000);

        let core_color = |list: &DrawList| match list.commands().last() {
            Some(DrawCommand::Circle { color, .. }) => *color,
            other => panic!("expected circle, got {other:?}"),
        };

        target.draw(&mut list, 0, &palette);
        assert_eq!(core_color(&list), palette.target_idle);

        target.check(INSIDE, 0);
        target.draw(&mut list, 10, &palette);
        assert_eq!(core_color(&list), palette.target_touching);

        target.check(OUTSIDE, 20);
        target.draw(&mut list, 20, &palette);
        assert_eq!(core_color(&list), palette.target_active);

        target.draw(&mut list, 5000, &palette);
        assert_eq!(core_color(&list), palette.target_idle);
        assert_eq!(target.state(), TargetState::TimedOut);
    }

    proptest! {
        #[test]
        fn prop_episode_lasts_full_duration(
            duration in 1u64..10_000,
            touches in proptest::collection::vec(0u64..20_000, 1..20),
        ) {
            let mut target = live_target(duration);
            target.check(INSIDE, 0);

            let mut sorted = touches;
            sorted.sort_unstable();
            for now in sorted.into_iter().filter(|t| *t < duration) {
                prop_assert_eq!(target.check(INSIDE, now), Contact::Sustained);
                prop_assert_eq!(target.activation_timestamp(), Some(0));
            }
            prop_assert!(target.is_complete());
            prop_assert!(target.refresh(duration));
        }
    }
}
