//! Game state and core simulation types
//!
//! All mutable gameplay state lives in the `GameSimulation` aggregate so a
//! single `tick()` can sequence every sub-update in a fixed order. There are
//! no hidden reactive fields: the runner, the obstacle, the score, and the
//! phase are updated in one place.

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Awaiting the first start signal
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Run ended on a collision; final score preserved
    GameOver,
}

/// The player-controlled runner
///
/// Horizontal position and box size are fixed; only vertical motion is
/// simulated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Runner {
    /// Height above the ground line (never negative)
    pub offset: f32,
    /// Vertical velocity, positive upward (pixels per tick)
    pub velocity: f32,
    /// True from jump until the ground clamp lands the runner
    pub airborne: bool,
}

impl Runner {
    /// Advance vertical motion by one tick
    ///
    /// Discrete gravity integration with a ground clamp: the offset can never
    /// go negative, and landing zeroes the velocity. The landing check reads
    /// the freshly updated offset, not a stale copy.
    pub fn integrate(&mut self) {
        self.offset = (self.offset + self.velocity).max(0.0);
        self.velocity -= GRAVITY;
        if self.offset == 0.0 && self.velocity < 0.0 {
            self.velocity = 0.0;
            self.airborne = false;
        }
    }

    /// Launch a jump; no-op while already airborne
    pub fn jump(&mut self) {
        if !self.airborne {
            self.velocity = JUMP_IMPULSE;
            self.airborne = true;
        }
    }
}

/// The conveyor-driven obstacle
///
/// There is exactly one obstacle. It is never destroyed, only repositioned
/// back to the spawn point after it leaves the playfield on the left.
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    /// Left edge in playfield coordinates
    pub x: f32,
}

impl Default for Obstacle {
    fn default() -> Self {
        Self {
            x: PLAYFIELD_WIDTH,
        }
    }
}

impl Obstacle {
    /// Advance one tick; returns true when the obstacle wrapped
    ///
    /// The wrap fires on the tick the trailing edge reaches the playfield's
    /// left edge, so a spawn-to-exit pass takes exactly
    /// `(spawn + width) / speed` ticks.
    pub fn advance(&mut self) -> bool {
        self.x -= OBSTACLE_SPEED;
        if self.x <= -OBSTACLE_WIDTH {
            self.x = PLAYFIELD_WIDTH;
            return true;
        }
        false
    }
}

/// Complete game state, advanced by one `tick()` per fixed time step
///
/// Owns no timer: an external scheduler calls `tick()` while `is_running()`
/// and must stop the moment the phase leaves `Running`.
#[derive(Debug, Clone, Default)]
pub struct GameSimulation {
    pub runner: Runner,
    pub obstacle: Obstacle,
    pub score: u32,
    phase: GamePhase,
}

impl GameSimulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// True while ticks should be scheduled
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Start (or restart) a run
    ///
    /// Valid from `Idle` and `GameOver`; ignored while `Running`. Resets the
    /// score and both entities to their initial positions.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Running {
            return;
        }
        self.runner = Runner::default();
        self.obstacle = Obstacle::default();
        self.score = 0;
        self.phase = GamePhase::Running;
        log::info!("Run started");
    }

    /// Explicit teardown: halt ticking without resetting entities
    ///
    /// The next `start()` resets everything anyway, so entity state is left
    /// frozen where it was.
    pub fn stop(&mut self) {
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::Idle;
            log::info!("Run stopped at score {}", self.score);
        }
    }

    /// Attempt a jump; silent no-op unless running and grounded
    pub fn request_jump(&mut self) {
        if self.phase == GamePhase::Running {
            self.runner.jump();
        }
    }

    pub(super) fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        log::info!("Game over at score {}", self.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let sim = GameSimulation::new();
        assert_eq!(sim.phase(), GamePhase::Idle);
        assert_eq!(sim.score, 0);
        assert_eq!(sim.runner.offset, 0.0);
        assert!(!sim.runner.airborne);
        assert_eq!(sim.obstacle.x, PLAYFIELD_WIDTH);
    }

    #[test]
    fn test_start_ignored_while_running() {
        let mut sim = GameSimulation::new();
        sim.start();
        sim.request_jump();
        sim.score = 7;

        sim.start();
        assert!(sim.runner.airborne, "start while running must not reset");
        assert_eq!(sim.score, 7);
    }

    #[test]
    fn test_restart_resets_from_game_over() {
        let mut sim = GameSimulation::new();
        sim.start();
        sim.request_jump();
        sim.runner.integrate();
        sim.obstacle.advance();
        sim.score = 3;
        sim.game_over();
        assert_eq!(sim.phase(), GamePhase::GameOver);
        assert_eq!(sim.score, 3, "final score preserved on game over");

        sim.start();
        assert_eq!(sim.phase(), GamePhase::Running);
        assert_eq!(sim.score, 0);
        assert_eq!(sim.runner.offset, 0.0);
        assert_eq!(sim.runner.velocity, 0.0);
        assert!(!sim.runner.airborne);
        assert_eq!(sim.obstacle.x, PLAYFIELD_WIDTH);
    }

    #[test]
    fn test_jump_gating() {
        let mut sim = GameSimulation::new();

        // Not running: ignored
        sim.request_jump();
        assert!(!sim.runner.airborne);

        // Running and grounded: accepted
        sim.start();
        sim.request_jump();
        assert!(sim.runner.airborne);
        assert_eq!(sim.runner.velocity, JUMP_IMPULSE);

        // Airborne: ignored (no double jump)
        sim.runner.integrate();
        let mid_air_velocity = sim.runner.velocity;
        sim.request_jump();
        assert_eq!(sim.runner.velocity, mid_air_velocity);

        // Game over: ignored
        sim.game_over();
        sim.runner = Runner::default();
        sim.request_jump();
        assert!(!sim.runner.airborne);
    }

    #[test]
    fn test_stop_halts_running_game() {
        let mut sim = GameSimulation::new();
        sim.start();
        sim.stop();
        assert_eq!(sim.phase(), GamePhase::Idle);
        assert!(!sim.is_running());

        // Stop outside Running is a no-op
        sim.game_over();
        sim.stop();
        assert_eq!(sim.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_ground_clamp_lands_runner() {
        let mut runner = Runner::default();
        runner.jump();
        for _ in 0..200 {
            runner.integrate();
            assert!(runner.offset >= 0.0);
        }
        assert_eq!(runner.offset, 0.0);
        assert_eq!(runner.velocity, 0.0);
        assert!(!runner.airborne);
    }

    #[test]
    fn test_grounded_runner_stays_put() {
        let mut runner = Runner::default();
        runner.integrate();
        assert_eq!(runner.offset, 0.0);
        assert_eq!(runner.velocity, 0.0);
        assert!(!runner.airborne);
    }
}
