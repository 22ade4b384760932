//! Target layout generation
//!
//! Targets are placed by rejection sampling inside the padded screen
//! rectangle. A candidate is accepted when it keeps `2 * radius + padding`
//! clearance to every target already placed and when the Fitts's Law
//! movement time from the previously placed target stays under the
//! configured maximum.
//!
//! Sampling is bounded: after `MAX_ATTEMPTS_PER_TARGET` rejected candidates
//! the layout is thrown away and started again (a greedy prefix can paint
//! itself into a corner), and after `MAX_LAYOUT_RESTARTS` restarts the
//! solver reports [`PuzzleError::PlacementInfeasible`].

use glam::Vec2;
use rand::Rng;

use crate::consts::{FITTS_A, MAX_ATTEMPTS_PER_TARGET, MAX_LAYOUT_RESTARTS};
use crate::distance;
use crate::error::PuzzleError;

/// Inputs of a layout: what to place, where, and how hard it may be
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementParams {
    pub count: usize,
    pub width: u32,
    pub height: u32,
    pub radius: f32,
    pub padding: f32,
    pub player_speed: f32,
    pub max_movement_time: f32,
}

impl PlacementParams {
    /// Minimum center-to-center distance between any two targets
    #[inline]
    pub fn min_spacing(&self) -> f32 {
        2.0 * self.radius + self.padding
    }

    /// Inclusive integer range of valid centers along each axis
    fn center_ranges(&self) -> Option<((i32, i32), (i32, i32))> {
        let lo = self.radius.ceil() as i32;
        let hi_x = (self.width as f32 - self.radius).floor() as i32;
        let hi_y = (self.height as f32 - self.radius).floor() as i32;
        if hi_x < lo || hi_y < lo {
            return None;
        }
        Some(((lo, hi_x), (lo, hi_y)))
    }
}

/// Fitts's Law movement time between two targets
///
/// `ID = log2(d / r + 1)`, `MT = a + speed * ID`.
#[inline]
pub fn movement_time(from: Vec2, to: Vec2, radius: f32, speed: f32) -> f32 {
    let index_of_difficulty = (distance(from, to) / radius + 1.0).log2();
    FITTS_A + speed * index_of_difficulty
}

/// Check a candidate against the spacing and difficulty rules
///
/// Spacing is checked against every placed target, difficulty only against
/// the most recently placed one.
pub fn accepts(params: &PlacementParams, placed: &[Vec2], candidate: Vec2) -> bool {
    let min_spacing = params.min_spacing();
    let spaced = placed
        .iter()
        .all(|p| distance(*p, candidate) >= min_spacing);
    if !spaced {
        return false;
    }

    placed.last().is_none_or(|last| {
        movement_time(*last, candidate, params.radius, params.player_speed)
            <= params.max_movement_time
    })
}

/// Generate `params.count` target centers in creation order
pub fn generate<R: Rng>(
    params: &PlacementParams,
    rng: &mut R,
) -> Result<Vec<Vec2>, PuzzleError> {
    if params.count == 0 {
        return Ok(Vec::new());
    }

    let Some((x_range, y_range)) = params.center_ranges() else {
        return Err(PuzzleError::InvalidBounds {
            width: params.width,
            height: params.height,
            radius: params.radius,
        });
    };

    let mut attempts = 0u64;
    let mut best = 0usize;
    for restart in 0..=MAX_LAYOUT_RESTARTS {
        if restart > 0 {
            log::warn!(
                "Layout dead end at {}/{} targets, restarting ({}/{})",
                best,
                params.count,
                restart,
                MAX_LAYOUT_RESTARTS
            );
        }
        match place_layout(params, rng, x_range, y_range, &mut attempts) {
            Ok(positions) => {
                log::debug!(
                    "Placed {} targets after {} candidates",
                    positions.len(),
                    attempts
                );
                return Ok(positions);
            }
            Err(placed) => best = best.max(placed),
        }
    }

    Err(PuzzleError::PlacementInfeasible {
        placed: best,
        requested: params.count,
        attempts,
    })
}

/// One greedy pass; on a dead end returns how many targets were placed
fn place_layout<R: Rng>(
    params: &PlacementParams,
    rng: &mut R,
    (x_lo, x_hi): (i32, i32),
    (y_lo, y_hi): (i32, i32),
    attempts: &mut u64,
) -> Result<Vec<Vec2>, usize> {
    let mut placed = Vec::with_capacity(params.count);

    while placed.len() < params.count {
        let mut accepted = None;
        for _ in 0..MAX_ATTEMPTS_PER_TARGET {
            *attempts += 1;
            let candidate = Vec2::new(
                rng.random_range(x_lo..=x_hi) as f32,
                rng.random_range(y_lo..=y_hi) as f32,
            );
            if accepts(params, &placed, candidate) {
                accepted = Some(candidate);
                break;
            }
        }

        match accepted {
            Some(candidate) => placed.push(candidate),
            None => return Err(placed.len()),
        }
    }

    Ok(placed)
}
