//! Demo player
//!
//! Watches snapshots and presses keys on an `InputAdapter`, exactly like a
//! person at the keyboard would. Used by the headless binary and for
//! attract-mode style demos.

use glam::Vec2;

use crate::input::InputAdapter;
use crate::sim::{Phase, Snapshot};

/// Half-width of the "close enough" band around the target, in pixels
const DEADZONE: f32 = 6.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Press restart when a game ends
    pub restart_on_game_over: bool,
    last_ball: Option<Vec2>,
    frames: u64,
    holding_left: bool,
    holding_right: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Autopilot {
    pub fn new(restart_on_game_over: bool) -> Self {
        Self {
            restart_on_game_over,
            last_ball: None,
            frames: 0,
            holding_left: false,
            holding_right: false,
        }
    }

    /// Decide this frame's key presses
    pub fn drive(&mut self, snap: &Snapshot, input: &mut InputAdapter) {
        self.frames += 1;
        let velocity = self.last_ball.map(|prev| snap.ball_pos - prev);
        self.last_ball = Some(snap.ball_pos);

        match snap.phase {
            Phase::NotStarted => {
                self.steer(input, 0.0);
                let key = first(&input.bindings().action);
                tap(input, key);
            }
            Phase::GameOver => {
                self.steer(input, 0.0);
                if self.restart_on_game_over {
                    let key = first(&input.bindings().restart);
                    tap(input, key);
                }
            }
            Phase::Paused => {}
            Phase::Playing => {
                let target = landing_x(snap, velocity.unwrap_or(Vec2::ZERO)) + self.wobble(snap);
                let center = snap.paddle.x + snap.paddle.w / 2.0;
                let dir = if target < center - DEADZONE {
                    -1.0
                } else if target > center + DEADZONE {
                    1.0
                } else {
                    0.0
                };
                self.steer(input, dir);
            }
        }
    }

    /// Small oscillating aim offset so rallies don't settle into a loop
    fn wobble(&self, snap: &Snapshot) -> f32 {
        let t = self.frames as f32 * 0.01;
        let swing = (t.sin() * 0.3) + (t * 0.7).sin() * 0.15;
        swing * snap.paddle.w / 2.0
    }

    fn steer(&mut self, input: &mut InputAdapter, dir: f32) {
        let left_key = first(&input.bindings().left);
        let right_key = first(&input.bindings().right);
        let (want_left, want_right) = (dir < 0.0, dir > 0.0);

        if let Some(key) = left_key {
            if want_left && !self.holding_left {
                input.key_down(&key);
            } else if !want_left && self.holding_left {
                input.key_up(&key);
            }
        }
        if let Some(key) = right_key {
            if want_right && !self.holding_right {
                input.key_down(&key);
            } else if !want_right && self.holding_right {
                input.key_up(&key);
            }
        }
        self.holding_left = want_left;
        self.holding_right = want_right;
    }
}

fn first(keys: &[String]) -> Option<String> {
    keys.first().cloned()
}

fn tap(input: &mut InputAdapter, key: Option<String>) {
    if let Some(key) = key {
        input.key_down(&key);
        input.key_up(&key);
    }
}

/// Where a falling ball will cross the paddle line, folding side-wall bounces
///
/// A rising (or unknown) velocity just returns the ball's current x.
pub fn landing_x(snap: &Snapshot, velocity: Vec2) -> f32 {
    let r = snap.ball_radius;
    let catch_y = snap.paddle.y - r;
    if velocity.y <= 0.0 || snap.ball_pos.y >= catch_y {
        return snap.ball_pos.x;
    }

    let ticks = (catch_y - snap.ball_pos.y) / velocity.y;
    let raw = snap.ball_pos.x + velocity.x * ticks;

    // Reflect into [r, width - r]
    let lo = r;
    let span = (snap.arena_width - 2.0 * r).max(1.0);
    let folded = (raw - lo).rem_euclid(2.0 * span);
    lo + if folded > span { 2.0 * span - folded } else { folded }
}
