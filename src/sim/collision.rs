//! Hitbox tests for targets and UI widgets
//!
//! Targets are drawn as circles but are hit tested with their bounding
//! square by default. A true circle test is
//! available through [`HitboxShape::Circle`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Shape used to decide whether a point touches a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HitboxShape {
    /// Axis-aligned square of side 2 * radius around the center
    #[default]
    Square,
    /// Disc of the given radius
    Circle,
}

impl HitboxShape {
    /// Check whether `point` lies inside a hitbox of this shape
    #[inline]
    pub fn contains(&self, center: Vec2, radius: f32, point: Vec2) -> bool {
        match self {
            HitboxShape::Square => point_in_square(point, center, radius),
            HitboxShape::Circle => point_in_circle(point, center, radius),
        }
    }
}

/// Point inside the square `center ± half_extent` (edges inclusive)
#[inline]
pub fn point_in_square(point: Vec2, center: Vec2, half_extent: f32) -> bool {
    let d = (point - center).abs();
    d.x <= half_extent && d.y <= half_extent
}

/// Point inside the disc around `center` (edge inclusive)
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance_squared(center) <= radius * radius
}

/// Point inside the rectangle anchored at its top-left `origin`
#[inline]
pub fn point_in_rect(point: Vec2, origin: Vec2, size: Vec2) -> bool {
    point.x >= origin.x
        && point.x <= origin.x + size.x
        && point.y >= origin.y
        && point.y <= origin.y + size.y
}
