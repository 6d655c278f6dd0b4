//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step per tick, velocities in pixels per tick
//! - Seeded RNG only
//! - Row-major brick iteration
//! - No rendering or platform dependencies

pub mod collision;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod world;

pub use collision::{Rect, circle_intersects_rect, clamp};
pub use snapshot::{BrickView, Snapshot};
pub use state::{Ball, Brick, BrickGrid, GameEvent, GameState, Outcome, Paddle, Phase};
pub use tick::{Intent, TickInput, apply_intent, step, tick};
pub use world::GameWorld;
