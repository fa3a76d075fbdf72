//! Collision tests for the rectangular arena
//!
//! Everything here is a pure function of its arguments. The ball is
//! approximated by its bounding square for every rectangle test, and the
//! arena walls are tested against the ball center.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Square of side `2 * half_extent` centered on `center`
    pub fn square(center: Vec2, half_extent: f32) -> Self {
        Self {
            min: center - Vec2::splat(half_extent),
            size: Vec2::splat(half_extent * 2.0),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }
}

/// Check whether two rectangles share any area
///
/// Comparisons are strict: rectangles that only touch along an edge or at a
/// corner do not overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.min.x < b.min.x + b.size.x
        && a.min.x + a.size.x > b.min.x
        && a.min.y < b.min.y + b.size.y
        && a.min.y + a.size.y > b.min.y
}

/// Bounding square of a ball
#[inline]
pub fn ball_bounds(center: Vec2, radius: f32) -> Rect {
    Rect::square(center, radius)
}

/// Check if ball touches or passes a side wall
pub fn ball_side_wall_collision(pos: Vec2, radius: f32, arena_width: f32) -> bool {
    pos.x <= radius || pos.x >= arena_width - radius
}

/// Check if ball touches or passes the ceiling
pub fn ball_ceiling_collision(pos: Vec2, radius: f32) -> bool {
    pos.y <= radius
}

/// Check if ball fell out through the floor
pub fn ball_floor_crossed(pos: Vec2, arena_height: f32) -> bool {
    pos.y >= arena_height
}
