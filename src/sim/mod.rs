//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Fixed sub-update order within each tick
//! - No rendering or platform dependencies
//! - Cosmetic randomness (backdrops) stays out entirely

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, obstacle_box, runner_box, runner_hits_obstacle};
pub use state::{GamePhase, GameSimulation, Obstacle, Runner};
pub use tick::{GameEvent, TickReport};
