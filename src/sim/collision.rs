//! Axis-aligned collision detection
//!
//! Boxes live in screen space: y grows downward and the ground sits at
//! `GROUND_Y`, matching how the playfield is laid out. The overlap test is
//! strict, so entities that merely touch edges do not collide.

use glam::Vec2;

use super::state::{Obstacle, Runner};
use crate::consts::*;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    /// Strict overlap test on both axes
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Runner box, anchored from the ground line plus the vertical offset
pub fn runner_box(runner: &Runner) -> Aabb {
    Aabb::new(
        Vec2::new(RUNNER_X, GROUND_Y - RUNNER_HEIGHT - runner.offset),
        Vec2::new(RUNNER_WIDTH, RUNNER_HEIGHT),
    )
}

/// Obstacle box, fixed just above the ground line
pub fn obstacle_box(obstacle: &Obstacle) -> Aabb {
    Aabb::new(
        Vec2::new(obstacle.x, GROUND_Y - OBSTACLE_HEIGHT - OBSTACLE_CLEARANCE),
        Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
    )
}

/// Collision test between the runner and the obstacle
pub fn runner_hits_obstacle(runner: &Runner, obstacle: &Obstacle) -> bool {
    runner_box(runner).overlaps(&obstacle_box(obstacle))
}
