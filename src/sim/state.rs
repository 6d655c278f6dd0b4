//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, clamp};
use crate::config::{BallConfig, BrickLayout, GameConfig, PaddleConfig};

/// Lifecycle phase, derived from the `GameState` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Ball docked on the paddle, waiting for launch
    NotStarted,
    /// Ball in flight
    Playing,
    /// Ball in flight, simulation frozen
    Paused,
    /// Won or lost; only restart leaves this phase
    GameOver,
}

/// How the run is going; `GameOver` alone doesn't say whether it was won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Something that happened during a tick (for logging and the UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched,
    WallBounce,
    CeilingBounce,
    PaddleHit,
    BrickDestroyed { row: usize, col: usize },
    LifeLost { lives_left: u8 },
    Won,
    Lost,
    Paused,
    Resumed,
    Restarted,
}

/// Score, lives and lifecycle flags
///
/// Win and loss share `game_over`; invariant: `game_over` implies `paused`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    pub lives: u8,
    pub paused: bool,
    /// Ball in flight (false = docked on the paddle)
    pub started: bool,
    pub game_over: bool,
}

impl GameState {
    pub fn new(lives: u8) -> Self {
        Self {
            score: 0,
            lives,
            paused: false,
            started: false,
            game_over: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if !self.started {
            Phase::NotStarted
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Playing
        }
    }

    /// Flag the run as finished (won or lost)
    pub fn end(&mut self) {
        self.game_over = true;
        self.paused = true;
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (never changes)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per tick
    pub speed: f32,
    /// -1, 0 or +1
    pub direction: i8,
}

impl Paddle {
    /// A paddle centered horizontally in an arena `arena_width` wide
    pub fn centered(config: &PaddleConfig, arena_width: f32) -> Self {
        Self {
            x: ((arena_width - config.width) / 2.0).max(0.0),
            y: config.y,
            width: config.width,
            height: config.height,
            speed: config.speed,
            direction: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Apply held directions and keep the paddle inside `[0, max_x]`
    pub fn steer(&mut self, left: bool, right: bool, max_x: f32) {
        self.direction = right as i8 - left as i8;
        self.x = clamp(self.x + self.direction as f32 * self.speed, 0.0, max_x);
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Base speed in pixels per tick
    pub speed: f32,
}

impl Ball {
    pub fn new(config: &BallConfig) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: config.radius,
            speed: config.speed,
        }
    }

    /// Where a docked ball rests for the given paddle
    pub fn docked_position(&self, paddle: &Paddle) -> Vec2 {
        Vec2::new(
            paddle.center_x(),
            paddle.y - self.radius - crate::consts::BALL_DOCK_GAP,
        )
    }

    /// Pin the ball above the paddle with zero velocity
    pub fn dock(&mut self, paddle: &Paddle) {
        self.pos = self.docked_position(paddle);
        self.vel = Vec2::ZERO;
    }
}

/// A brick; its rectangle comes from its grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub alive: bool,
}

/// Dense rows x cols grid of bricks, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    layout: BrickLayout,
    cells: Vec<Brick>,
}

impl BrickGrid {
    /// A full grid, every brick alive
    pub fn new(layout: BrickLayout) -> Self {
        Self {
            layout,
            cells: vec![Brick { alive: true }; layout.len()],
        }
    }

    pub fn layout(&self) -> &BrickLayout {
        &self.layout
    }

    pub fn rows(&self) -> usize {
        self.layout.rows
    }

    pub fn cols(&self) -> usize {
        self.layout.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Brick> {
        if row < self.layout.rows && col < self.layout.cols {
            self.cells.get(row * self.layout.cols + col)
        } else {
            None
        }
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|b| b.alive)
    }

    /// Mark (row, col) destroyed; returns false if it was already dead
    pub fn destroy(&mut self, row: usize, col: usize) -> bool {
        if row >= self.layout.rows || col >= self.layout.cols {
            return false;
        }
        let brick = &mut self.cells[row * self.layout.cols + col];
        std::mem::replace(&mut brick.alive, false)
    }

    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|b| b.alive).count()
    }

    pub fn rect(&self, row: usize, col: usize) -> Rect {
        self.layout.rect(row, col)
    }

    /// Alive bricks in row-major order, with their grid position and rectangle
    pub fn alive(&self) -> impl Iterator<Item = (usize, usize, Rect)> + '_ {
        let cols = self.layout.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, b)| b.alive)
            .map(move |(i, _)| {
                let (row, col) = (i / cols, i % cols);
                (row, col, self.layout.rect(row, col))
            })
    }
}

impl From<&GameConfig> for BrickGrid {
    fn from(config: &GameConfig) -> Self {
        Self::new(config.bricks)
    }
}
