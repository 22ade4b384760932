//! Target set manager
//!
//! Owns every target of one puzzle, runs the per-tick collision scan and
//! answers whether the puzzle is solved.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::HitboxShape;
use super::placement::{self, PlacementParams};
use super::state::PuzzleEvent;
use super::target::{ActivationTarget, Contact};
use crate::error::PuzzleError;
use crate::renderer::{Palette, Surface};

/// The full collection of targets for one puzzle
#[derive(Debug, Clone)]
pub struct TargetSet {
    targets: Vec<ActivationTarget>,
    params: PlacementParams,
    duration_ms: u64,
    shape: HitboxShape,
    collidable: bool,
    rng: Pcg32,
    seed: u64,
    events: Vec<PuzzleEvent>,
    next_id: u32,
}

impl TargetSet {
    /// Lay out a fresh set; fails without building anything if placement does
    pub fn new(
        params: PlacementParams,
        duration_ms: u64,
        shape: HitboxShape,
        seed: u64,
    ) -> Result<Self, PuzzleError> {
        let mut set = Self {
            targets: Vec::new(),
            params,
            duration_ms,
            shape,
            collidable: false,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            events: Vec::new(),
            next_id: 1,
        };
        set.targets = set.build_targets()?;
        log::info!(
            "Generated {} targets (seed {}, duration {} ms)",
            set.targets.len(),
            seed,
            duration_ms
        );
        Ok(set)
    }

    fn build_targets(&mut self) -> Result<Vec<ActivationTarget>, PuzzleError> {
        let positions = placement::generate(&self.params, &mut self.rng)?;
        let targets = positions
            .into_iter()
            .map(|pos| {
                let id = self.next_id;
                self.next_id += 1;
                let mut target = ActivationTarget::new(id, pos, self.duration_ms, self.shape);
                target.set_collidable(self.collidable);
                target
            })
            .collect();
        Ok(targets)
    }

    /// Replace every target with a freshly placed set
    ///
    /// The new layout is built completely before the old one is dropped; on
    /// failure the current targets are kept.
    pub fn reset(&mut self) -> Result<(), PuzzleError> {
        let targets = self.build_targets()?;
        self.targets = targets;
        self.events.clear();
        log::info!("Targets reset ({} placed)", self.targets.len());
        Ok(())
    }

    pub fn targets(&self) -> &[ActivationTarget] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Number of targets requested per layout
    pub fn count(&self) -> usize {
        self.params.count
    }

    pub fn params(&self) -> &PlacementParams {
        &self.params
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn active_count(&self) -> usize {
        self.targets.iter().filter(|t| t.is_complete()).count()
    }

    pub fn is_collidable(&self) -> bool {
        self.collidable
    }

    /// Enable or disable collision testing on every target
    pub fn set_collidable(&mut self, collidable: bool) {
        self.collidable = collidable;
        for target in &mut self.targets {
            target.set_collidable(collidable);
        }
    }

    pub fn set_visibility(&mut self, visible: bool) {
        for target in &mut self.targets {
            target.set_visibility(visible);
        }
    }

    /// Check targets in order and stop at the first one the player touches
    ///
    /// Targets after the hit are not polled this tick, but any contact they
    /// still remember is dropped once the player is off them.
    pub fn update_and_check_collisions(&mut self, player_pos: Vec2, now_ms: u64) -> bool {
        let mut hit = None;
        for (i, target) in self.targets.iter_mut().enumerate() {
            if target.refresh(now_ms) {
                self.events.push(PuzzleEvent::TargetTimedOut { id: target.id });
            }
            match target.check(player_pos, now_ms) {
                Contact::Miss => continue,
                Contact::Fresh => self.events.push(PuzzleEvent::TargetActivated {
                    id: target.id,
                    pos: target.pos(),
                }),
                Contact::Sustained | Contact::Lingering => {}
            }
            hit = Some(i);
            break;
        }

        let Some(i) = hit else {
            return false;
        };
        for target in &mut self.targets[i + 1..] {
            target.release(player_pos);
        }
        true
    }

    /// Apply pending timeouts to every target
    pub fn expire(&mut self, now_ms: u64) {
        for target in &mut self.targets {
            if target.refresh(now_ms) {
                self.events.push(PuzzleEvent::TargetTimedOut { id: target.id });
            }
        }
    }

    /// True iff every target is active; an empty set is trivially solved
    pub fn is_puzzle_solved(&self) -> bool {
        self.targets.iter().all(|t| t.is_complete())
    }

    /// Events recorded since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<PuzzleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Draw every target, applying pending timeouts first
    pub fn draw(&mut self, surface: &mut dyn Surface, now_ms: u64, palette: &Palette) {
        self.expire(now_ms);
        for target in &mut self.targets {
            target.draw(surface, now_ms, palette);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{TARGET_PADDING, TARGET_RADIUS};
    use crate::distance;
    use crate::renderer::DrawList;
    use crate::sim::state::TargetState;

    fn params(count: usize) -> PlacementParams {
        PlacementParams {
            count,
            width: 1920,
            height: 1080,
            radius: TARGET_RADIUS,
            padding: TARGET_PADDING,
            player_speed: 10.0,
            max_movement_time: 40.0,
        }
    }

    fn live_set(count: usize, duration_ms: u64) -> TargetSet {
        let mut set = TargetSet::new(params(count), duration_ms, HitboxShape::Square, 1234).unwrap();
        set.set_collidable(true);
        set
    }

    #[test]
    fn test_new_set_has_requested_count_and_is_frozen() {
        let set = TargetSet::new(params(5), 1000, HitboxShape::Square, 1).unwrap();
        assert_eq!(set.len(), 5);
        assert_eq!(set.count(), 5);
        assert!(!set.is_collidable());
        assert!(set.targets().iter().all(|t| !t.is_collidable()));
        assert!(!set.is_puzzle_solved());
    }

    #[test]
    fn test_ids_are_unique() {
        let set = live_set(5, 1000);
        let ids: Vec<u32> = set.targets().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_infeasible_layout_fails_construction() {
        let mut p = params(50);
        p.width = 300;
        p.height = 300;
        let err = TargetSet::new(p, 1000, HitboxShape::Square, 5).unwrap_err();
        assert!(matches!(err, PuzzleError::PlacementInfeasible { requested: 50, .. }));
    }

    #[test]
    fn test_collision_activates_and_records_event() {
        let mut set = live_set(3, 1000);
        let pos = set.targets()[1].pos();
        let id = set.targets()[1].id;

        assert!(set.update_and_check_collisions(pos, 10));
        assert!(set.targets()[1].is_complete());
        assert_eq!(
            set.drain_events(),
            vec![PuzzleEvent::TargetActivated { id, pos }]
        );

        // Continued contact is not a new activation
        assert!(set.update_and_check_collisions(pos, 20));
        assert!(set.drain_events().is_empty());
    }

    #[test]
    fn test_scan_stops_at_first_hit() {
        let mut set = live_set(2, 1000);
        // Two overlapping fake targets at the same spot to observe ordering.
        let pos = set.targets()[0].pos();
        set.targets = vec![
            ActivationTarget::new(10, pos, 1000, HitboxShape::Square),
            ActivationTarget::new(11, pos, 1000, HitboxShape::Square),
        ];
        set.set_collidable(true);

        assert!(set.update_and_check_collisions(pos, 0));
        assert!(set.targets()[0].is_complete());
        assert_eq!(set.targets()[1].state(), TargetState::Idle);
    }

    #[test]
    fn test_no_collision_when_frozen() {
        let mut set = live_set(3, 1000);
        set.set_collidable(false);
        let pos = set.targets()[0].pos();
        assert!(!set.update_and_check_collisions(pos, 0));
        assert_eq!(set.active_count(), 0);
    }

    #[test]
    fn test_solved_needs_all_active_at_once() {
        let mut set = live_set(3, 1000);
        let positions: Vec<Vec2> = set.targets().iter().map(|t| t.pos()).collect();

        set.update_and_check_collisions(positions[0], 0);
        set.update_and_check_collisions(positions[1], 100);
        assert!(!set.is_puzzle_solved());
        set.update_and_check_collisions(positions[2], 200);
        set.expire(200);
        assert!(set.is_puzzle_solved());

        // First target's window closes
        set.expire(1000);
        assert!(!set.is_puzzle_solved());
        assert_eq!(set.active_count(), 2);
        let first = set.targets()[0].id;
        let events = set.drain_events();
        assert!(events.contains(&PuzzleEvent::TargetTimedOut { id: first }));
    }

    #[test]
    fn test_empty_set_is_solved() {
        let set = TargetSet::new(params(0), 1000, HitboxShape::Square, 1).unwrap();
        assert!(set.is_empty());
        assert!(set.is_puzzle_solved());
    }

    #[test]
    fn test_standing_on_target_lets_it_time_out() {
        let mut set = live_set(3, 1000);
        let pos = set.targets()[0].pos();
        for now in (0..5_000).step_by(16) {
            assert!(set.update_and_check_collisions(pos, now));
        }
        assert_eq!(set.targets()[0].state(), TargetState::TimedOut);
        let activations = set
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, PuzzleEvent::TargetActivated { .. }))
            .count();
        assert_eq!(activations, 1);
    }

    #[test]
    fn test_later_targets_forget_contact_after_scan_stops() {
        let mut set = live_set(2, 1000);
        let first = set.targets()[0].pos();
        let second = set.targets()[1].pos();

        set.update_and_check_collisions(second, 0);
        set.expire(1000);
        assert_eq!(set.targets()[1].state(), TargetState::TimedOut);

        // Jump straight onto the first target; the second is not polled
        assert!(set.update_and_check_collisions(first, 1016));
        assert!(!set.targets()[1].is_touching());

        assert!(set.update_and_check_collisions(second, 1032));
        assert!(set.targets()[1].is_complete());
    }

    #[test]
    fn test_reset_keeps_count_and_invariants() {
        let mut set = live_set(5, 1000);
        let before: Vec<Vec2> = set.targets().iter().map(|t| t.pos()).collect();
        let pos = before[0];
        set.update_and_check_collisions(pos, 0);

        set.reset().unwrap();
        assert_eq!(set.len(), 5);
        assert_eq!(set.active_count(), 0);
        assert!(set.targets().iter().all(|t| t.is_collidable()));

        let after: Vec<Vec2> = set.targets().iter().map(|t| t.pos()).collect();
        assert_ne!(before, after);
        let spacing = set.params().min_spacing();
        for (i, a) in after.iter().enumerate() {
            for b in &after[i + 1..] {
                assert!(distance(*a, *b) >= spacing);
            }
        }
    }

    #[test]
    fn test_draw_applies_timeouts() {
        let mut set = live_set(2, 1000);
        let pos = set.targets()[0].pos();
        set.update_and_check_collisions(pos, 0);

        let mut list = DrawList::new(1920, 1080);
        set.draw(&mut list, 1500, &Palette::color());
        assert_eq!(list.len(), 4);
        assert_eq!(set.targets()[0].state(), TargetState::TimedOut);
    }
}
