//! Fixed timestep simulation tick
//!
//! One `tick()` advances the whole game by one time step: runner motion,
//! obstacle conveyor, then the collision check, always in that order. The
//! returned report is everything the presentation layer needs to render the
//! frame and react to events.

use super::collision::runner_hits_obstacle;
use super::state::{GamePhase, GameSimulation};

/// Events raised toward the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The obstacle wrapped back to its spawn point; score was incremented
    ObstaclePassed,
    /// The runner hit the obstacle; the run is over
    Collision,
}

/// Snapshot returned from each tick for rendering
#[derive(Debug, Clone)]
pub struct TickReport {
    pub runner_offset: f32,
    pub runner_airborne: bool,
    pub obstacle_x: f32,
    pub score: u32,
    pub phase: GamePhase,
    /// Events that fired this tick (at most one of each kind)
    pub events: Vec<GameEvent>,
}

impl GameSimulation {
    /// Advance the simulation by one fixed time step
    ///
    /// Outside `Running` this is a silent no-op that still reports the
    /// current state, so a late tick from the scheduler cannot move a frozen
    /// game.
    pub fn tick(&mut self) -> TickReport {
        let mut events = Vec::new();

        if self.is_running() {
            self.runner.integrate();

            if self.obstacle.advance() {
                self.score += 1;
                events.push(GameEvent::ObstaclePassed);
            }

            if runner_hits_obstacle(&self.runner, &self.obstacle) {
                events.push(GameEvent::Collision);
                self.game_over();
            }
        }

        self.report(events)
    }

    fn report(&self, events: Vec<GameEvent>) -> TickReport {
        TickReport {
            runner_offset: self.runner.offset,
            runner_airborne: self.runner.airborne,
            obstacle_x: self.obstacle.x,
            score: self.score,
            phase: self.phase(),
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::Obstacle;
    use proptest::prelude::*;

    #[test]
    fn test_tick_outside_running_is_noop() {
        let mut sim = GameSimulation::new();
        let report = sim.tick();
        assert_eq!(report.phase, GamePhase::Idle);
        assert!(report.events.is_empty());
        assert_eq!(report.obstacle_x, PLAYFIELD_WIDTH);
        assert_eq!(report.runner_offset, 0.0);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut sim = GameSimulation::new();
        sim.start();
        sim.request_jump();

        // Airborne for the whole arc; 2 * JUMP_IMPULSE / GRAVITY ticks up
        // and down again
        let mut peak = 0.0f32;
        for _ in 0..40 {
            let report = sim.tick();
            assert!(report.runner_offset > 0.0);
            assert!(report.runner_airborne);
            peak = peak.max(report.runner_offset);
        }
        assert!(peak > 125.0);

        // The ground clamp lands the runner within the next two ticks
        sim.tick();
        sim.tick();
        assert_eq!(sim.runner.offset, 0.0);
        assert_eq!(sim.runner.velocity, 0.0);
        assert!(!sim.runner.airborne);
    }

    #[test]
    fn test_obstacle_wraps_at_exact_tick() {
        // Spawn 800, speed 8, width 40: wrap on tick (800 + 40) / 8 = 105
        let mut obstacle = Obstacle::default();
        for tick_no in 1..=104 {
            assert!(!obstacle.advance(), "wrapped early at tick {tick_no}");
        }
        assert!(obstacle.advance());
        assert_eq!(obstacle.x, PLAYFIELD_WIDTH);
    }

    #[test]
    fn test_pass_scores_exactly_once() {
        let mut sim = GameSimulation::new();
        sim.start();

        // Jump just before the obstacle reaches the runner so the arc
        // clears it, then ride out the full conveyor pass
        let mut passed_at = None;
        for tick_no in 1..=105u32 {
            if tick_no == 77 {
                sim.request_jump();
            }
            let report = sim.tick();
            assert_ne!(
                report.phase,
                GamePhase::GameOver,
                "unexpected collision at tick {tick_no}"
            );
            if report.events.contains(&GameEvent::ObstaclePassed) {
                assert!(passed_at.is_none(), "scored twice");
                passed_at = Some(tick_no);
            }
        }

        assert_eq!(passed_at, Some(105));
        assert_eq!(sim.score, 1);
        assert_eq!(sim.obstacle.x, PLAYFIELD_WIDTH);
    }

    #[test]
    fn test_collision_ends_run() {
        let mut sim = GameSimulation::new();
        sim.start();

        // Never jump: the conveyor walks the obstacle into the runner
        let mut collided_at = None;
        for tick_no in 1..=200u32 {
            let report = sim.tick();
            if report.events.contains(&GameEvent::Collision) {
                collided_at = Some(tick_no);
                break;
            }
        }

        // First tick with the obstacle strictly inside the runner's span:
        // 800 - 8 * 81 = 152 < 160
        assert_eq!(collided_at, Some(81));
        assert_eq!(sim.phase(), GamePhase::GameOver);
        assert_eq!(sim.score, 0, "no wrap happened before the collision");
    }

    #[test]
    fn test_frozen_after_game_over() {
        let mut sim = GameSimulation::new();
        sim.start();
        while sim.is_running() {
            sim.tick();
        }
        let frozen_x = sim.obstacle.x;
        let frozen_score = sim.score;

        for _ in 0..10 {
            let report = sim.tick();
            assert!(report.events.is_empty());
            assert_eq!(report.obstacle_x, frozen_x);
            assert_eq!(report.score, frozen_score);
            assert_eq!(report.phase, GamePhase::GameOver);
        }
    }

    #[test]
    fn test_determinism() {
        // Two simulations fed the same signals stay in lockstep
        let mut a = GameSimulation::new();
        let mut b = GameSimulation::new();
        a.start();
        b.start();

        for tick_no in 0..300u32 {
            if tick_no % 50 == 10 {
                a.request_jump();
                b.request_jump();
            }
            let ra = a.tick();
            let rb = b.tick();
            assert_eq!(ra.runner_offset, rb.runner_offset);
            assert_eq!(ra.obstacle_x, rb.obstacle_x);
            assert_eq!(ra.score, rb.score);
            assert_eq!(ra.phase, rb.phase);
        }
    }

    proptest! {
        #[test]
        fn offset_never_negative(jumps in proptest::collection::vec(any::<bool>(), 1..300)) {
            let mut sim = GameSimulation::new();
            sim.start();
            for jump in jumps {
                if jump {
                    sim.request_jump();
                }
                let report = sim.tick();
                prop_assert!(report.runner_offset >= 0.0);
            }
        }

        #[test]
        fn score_never_decreases(jumps in proptest::collection::vec(any::<bool>(), 1..300)) {
            let mut sim = GameSimulation::new();
            sim.start();
            let mut last_score = 0;
            for jump in jumps {
                if jump {
                    sim.request_jump();
                }
                let report = sim.tick();
                prop_assert!(report.score >= last_score);
                prop_assert!(report.score <= last_score + 1);
                last_score = report.score;
            }
        }

        #[test]
        fn grounded_means_offset_zero(jumps in proptest::collection::vec(any::<bool>(), 1..300)) {
            let mut sim = GameSimulation::new();
            sim.start();
            for jump in jumps {
                if jump {
                    sim.request_jump();
                }
                let report = sim.tick();
                if !report.runner_airborne {
                    prop_assert_eq!(report.runner_offset, 0.0);
                }
            }
        }
    }
}
