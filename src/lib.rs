//! Brickfall - A classic paddle-and-bricks arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `config`: Arena, entity and layout parameters
//! - `input`: Key events to game intents
//! - `renderer`: Scene building plus ASCII and canvas backends
//! - `driver`: Frame loop gluing input, simulation and rendering
//! - `autopilot`: Demo player for headless runs
//! - `settings`: User preferences

pub mod autopilot;
pub mod config;
pub mod driver;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use config::GameConfig;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (canvas size)
    pub const ARENA_WIDTH: f32 = 500.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 110.0;
    pub const PADDLE_HEIGHT: f32 = 14.0;
    /// Distance from the bottom of the arena to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 30.0;
    /// Pixels per tick
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 7.0;
    /// Pixels per tick
    pub const BALL_SPEED: f32 = 5.0;
    /// Gap between a docked ball and the paddle top
    pub const BALL_DOCK_GAP: f32 = 1.0;
    /// Horizontal "spin" gained from an off-center paddle hit
    pub const PADDLE_SPIN_FACTOR: f32 = 1.1;
    /// Ceiling on |vx| after a paddle hit, as a multiple of ball speed
    pub const MAX_VX_FACTOR: f32 = 1.4;

    /// Launch arc, as fractions of π
    pub const LAUNCH_ANGLE_MIN: f32 = 0.15;
    pub const LAUNCH_ANGLE_MAX: f32 = 1.05;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 7;
    pub const BRICK_COLS: usize = 8;
    pub const BRICK_WIDTH: f32 = 48.0;
    pub const BRICK_HEIGHT: f32 = 18.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_LEFT: f32 = 22.0;
    pub const BRICK_TOP: f32 = 70.0;

    /// Rules
    pub const BRICK_SCORE: u32 = 10;
    pub const INITIAL_LIVES: u8 = 3;
}
