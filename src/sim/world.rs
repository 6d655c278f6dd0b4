//! The `GameWorld` aggregate: every piece of simulation state, one owner

use std::f32::consts::PI;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::snapshot::Snapshot;
use super::state::{Ball, BrickGrid, GameEvent, GameState, Outcome, Paddle, Phase};
use crate::config::GameConfig;
use crate::consts::{LAUNCH_ANGLE_MAX, LAUNCH_ANGLE_MIN};

/// Game state, paddle, ball and bricks, plus the seeded RNG for launches
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub config: GameConfig,
    pub state: GameState,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    /// Run seed for reproducibility
    seed: u64,
    rng: Pcg32,
    /// Events raised since the last `drain_events`
    pub(super) events: Vec<GameEvent>,
}

impl GameWorld {
    /// Create a fresh game with the given config and RNG seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut world = Self {
            config,
            state: GameState::new(config.initial_lives),
            paddle: Paddle::centered(&config.paddle, config.arena.width),
            ball: Ball::new(&config.ball),
            bricks: BrickGrid::from(&config),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        };
        world.reset_ball_on_paddle();
        world
    }

    /// Default game
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameConfig::default(), seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn remaining_bricks(&self) -> usize {
        self.bricks.remaining()
    }

    pub fn outcome(&self) -> Outcome {
        if !self.state.game_over {
            Outcome::InProgress
        } else if self.remaining_bricks() == 0 {
            Outcome::Won
        } else {
            Outcome::Lost
        }
    }

    /// Read-only view for renderers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    /// Fresh grid from the current layout, every brick alive
    pub fn reset_bricks(&mut self) {
        self.bricks = BrickGrid::from(&self.config);
    }

    /// Dock the ball on the paddle and mark it not launched
    pub fn reset_ball_on_paddle(&mut self) {
        self.ball.dock(&self.paddle);
        self.state.started = false;
    }

    /// Back to the initial state, from any state (including game over)
    ///
    /// The RNG is not reseeded, so successive games get different launches.
    pub fn full_reset(&mut self) {
        self.state = GameState::new(self.config.initial_lives);
        self.paddle = Paddle::centered(&self.config.paddle, self.config.arena.width);
        self.reset_bricks();
        self.reset_ball_on_paddle();
        self.push_event(GameEvent::Restarted);
        log::info!("Game reset (seed {})", self.seed);
    }

    /// Send the docked ball upward at a random angle
    ///
    /// Returns false (and does nothing) if the ball is already in flight or
    /// the game is over.
    pub fn launch_ball(&mut self) -> bool {
        if self.state.started || self.state.game_over {
            return false;
        }
        self.state.started = true;

        let angle = self.rng.random_range(LAUNCH_ANGLE_MIN..LAUNCH_ANGLE_MAX) * PI;
        let speed = self.ball.speed;
        self.ball.vel = Vec2::new(angle.cos() * speed, -(angle.sin() * speed).abs());

        self.push_event(GameEvent::Launched);
        log::debug!("Launched at {:.3} rad, vel {:?}", angle, self.ball.vel);
        true
    }

    /// Flip between Playing and Paused; no effect in any other phase
    pub fn toggle_pause(&mut self) -> bool {
        if !self.state.started || self.state.game_over {
            return false;
        }
        self.state.paused = !self.state.paused;
        let event = if self.state.paused {
            GameEvent::Paused
        } else {
            GameEvent::Resumed
        };
        self.push_event(event);
        true
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events raised since the previous call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events raised since the last drain, without consuming them
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}
