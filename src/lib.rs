//! Dino Dash - a browser-based endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collision, game state)
//! - `settings`: Player preferences persisted to LocalStorage
//! - `backdrop`: Random playfield backdrop selection (cosmetic only)
//! - `audio`: Music and sound effects (wasm builds)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod backdrop;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
///
/// Physics units are pixels per tick (and per tick squared), not per
/// second: the constants already bake in the 60 Hz cadence.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield width; doubles as the obstacle spawn offset
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    /// Ground line in collision space (y grows downward)
    pub const GROUND_Y: f32 = 300.0;

    /// Runner box and fixed horizontal position
    pub const RUNNER_X: f32 = 100.0;
    pub const RUNNER_WIDTH: f32 = 60.0;
    pub const RUNNER_HEIGHT: f32 = 60.0;

    /// Obstacle box; rides a fixed clearance above the ground line
    pub const OBSTACLE_WIDTH: f32 = 40.0;
    pub const OBSTACLE_HEIGHT: f32 = 40.0;
    pub const OBSTACLE_CLEARANCE: f32 = 10.0;

    /// Downward acceleration applied to the runner each tick
    pub const GRAVITY: f32 = 0.6;
    /// Upward velocity granted by a jump
    pub const JUMP_IMPULSE: f32 = 12.0;
    /// Obstacle conveyor speed
    pub const OBSTACLE_SPEED: f32 = 8.0;
}
