//! Arena, entity and layout parameters
//!
//! `GameConfig::default()` is the stock game. Everything is plain data so a
//! test can build a one-brick board or a tiny arena without touching the
//! simulation code.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Rect;

/// Playfield bounds; the origin is the top-left corner, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Top edge of the paddle
    pub y: f32,
    /// Pixels per tick
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallConfig {
    pub radius: f32,
    /// Pixels per tick
    pub speed: f32,
}

/// Fixed brick grid: cell (row, col) sits at `origin + index * (size + padding)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickLayout {
    pub rows: usize,
    pub cols: usize,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub left: f32,
    pub top: f32,
}

impl BrickLayout {
    /// Screen rectangle of the brick at (row, col)
    pub fn rect(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            self.left + col as f32 * (self.width + self.padding),
            self.top + row as f32 * (self.height + self.padding),
            self.width,
            self.height,
        )
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub arena: ArenaConfig,
    pub paddle: PaddleConfig,
    pub ball: BallConfig,
    pub bricks: BrickLayout,
    /// Points per destroyed brick
    pub brick_score: u32,
    pub initial_lives: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig {
                width: ARENA_WIDTH,
                height: ARENA_HEIGHT,
            },
            paddle: PaddleConfig {
                width: PADDLE_WIDTH,
                height: PADDLE_HEIGHT,
                y: ARENA_HEIGHT - PADDLE_BOTTOM_OFFSET,
                speed: PADDLE_SPEED,
            },
            ball: BallConfig {
                radius: BALL_RADIUS,
                speed: BALL_SPEED,
            },
            bricks: BrickLayout {
                rows: BRICK_ROWS,
                cols: BRICK_COLS,
                width: BRICK_WIDTH,
                height: BRICK_HEIGHT,
                padding: BRICK_PADDING,
                left: BRICK_LEFT,
                top: BRICK_TOP,
            },
            brick_score: BRICK_SCORE,
            initial_lives: INITIAL_LIVES,
        }
    }
}

impl GameConfig {
    /// Same game with a different brick grid
    pub fn with_bricks(mut self, bricks: BrickLayout) -> Self {
        self.bricks = bricks;
        self
    }

    /// Leftmost x the paddle may occupy is 0; this is the rightmost
    pub fn paddle_max_x(&self) -> f32 {
        (self.arena.width - self.paddle.width).max(0.0)
    }
}
