//! Fixed timestep simulation tick
//!
//! One call to `tick` per display frame. Velocities are in pixels per tick,
//! so there is no `dt`; the ball moves by plain Euler integration with no
//! substeps. A ball faster than the thinnest brick can tunnel through it.

use super::collision::{circle_intersects_rect, clamp};
use super::state::{GameEvent, Phase};
use super::world::GameWorld;
use crate::consts::{BALL_DOCK_GAP, MAX_VX_FACTOR, PADDLE_SPIN_FACTOR};

/// One-shot intents, applied at the start of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Launch when docked, otherwise toggle pause; ignored after game over
    LaunchOrPause,
    /// Pause a ball in flight; no effect in any other phase
    Pause,
    /// Full reset, from any state
    Restart,
}

/// Input for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move-left held
    pub left: bool,
    /// Move-right held
    pub right: bool,
    /// Edge-triggered intents since the previous tick, oldest first
    pub intents: Vec<Intent>,
}

/// Apply a one-shot intent
pub fn apply_intent(world: &mut GameWorld, intent: Intent) {
    match intent {
        Intent::LaunchOrPause => {
            if world.state.game_over {
                return;
            }
            if !world.state.started {
                if world.launch_ball() {
                    log::info!("Ball launched");
                }
            } else if world.toggle_pause() {
                log::info!(
                    "{}",
                    if world.state.paused { "Paused" } else { "Resumed" }
                );
            }
        }
        Intent::Pause => {
            if world.phase() == Phase::Playing && world.toggle_pause() {
                log::info!("Paused");
            }
        }
        Intent::Restart => world.full_reset(),
    }
}

/// Apply queued intents, then advance one step unless paused
pub fn tick(world: &mut GameWorld, input: &TickInput) {
    for &intent in &input.intents {
        apply_intent(world, intent);
    }

    if world.state.paused {
        return;
    }
    step(world, input.left, input.right);
}

/// Advance the simulation by one fixed step
///
/// Callers skip this while paused; `tick` does that for you.
pub fn step(world: &mut GameWorld, left: bool, right: bool) {
    let max_x = world.config.paddle_max_x();
    world.paddle.steer(left, right, max_x);

    // Docked ball follows the paddle, nothing else moves
    if !world.state.started {
        world.reset_ball_on_paddle();
        return;
    }

    let ball = &mut world.ball;
    ball.pos += ball.vel;

    let arena = world.config.arena;
    let r = ball.radius;

    if ball.pos.x - r <= 0.0 {
        ball.pos.x = r;
        ball.vel.x = -ball.vel.x;
        world.events.push(GameEvent::WallBounce);
    }
    if ball.pos.x + r >= arena.width {
        ball.pos.x = arena.width - r;
        ball.vel.x = -ball.vel.x;
        world.events.push(GameEvent::WallBounce);
    }
    if ball.pos.y - r <= 0.0 {
        ball.pos.y = r;
        ball.vel.y = -ball.vel.y;
        world.events.push(GameEvent::CeilingBounce);
    }

    // Fell out the bottom
    if ball.pos.y - r > arena.height {
        lose_life(world);
        return;
    }

    paddle_bounce(world);
    brick_hit(world);
}

fn lose_life(world: &mut GameWorld) {
    world.state.lives = world.state.lives.saturating_sub(1);
    let lives_left = world.state.lives;
    world.push_event(GameEvent::LifeLost { lives_left });

    if lives_left == 0 {
        world.state.end();
        world.push_event(GameEvent::Lost);
        log::info!("Game over: out of lives, score {}", world.state.score);
    } else {
        world.reset_ball_on_paddle();
        log::info!("Life lost, {} left", lives_left);
    }
}

/// Bounce off the paddle, only while the ball is falling
fn paddle_bounce(world: &mut GameWorld) {
    let paddle = &world.paddle;
    let ball = &mut world.ball;
    if ball.vel.y <= 0.0 || !circle_intersects_rect(ball.pos, ball.radius, &paddle.rect()) {
        return;
    }

    // Lift out of the paddle so it can't sink in
    ball.pos.y = paddle.y - ball.radius - BALL_DOCK_GAP;
    ball.vel.y = -ball.vel.y.abs();

    // Spin: off-center hits steer the ball, -1 at the left end, +1 at the right.
    // A graze past either end overshoots; the vx ceiling bounds it.
    let half = paddle.width / 2.0;
    let offset = (ball.pos.x - paddle.center_x()) / half;
    let max_vx = ball.speed * MAX_VX_FACTOR;
    ball.vel.x = clamp(offset * ball.speed * PADDLE_SPIN_FACTOR, -max_vx, max_vx);

    log::trace!("Paddle hit at offset {:.2}", offset);
    world.push_event(GameEvent::PaddleHit);
}

/// Destroy at most one brick: the first alive one in row-major order
fn brick_hit(world: &mut GameWorld) {
    let ball = &world.ball;
    let hit = world
        .bricks
        .alive()
        .find(|(_, _, rect)| circle_intersects_rect(ball.pos, ball.radius, rect))
        .map(|(row, col, _)| (row, col));

    let Some((row, col)) = hit else {
        return;
    };

    world.bricks.destroy(row, col);
    world.state.score += world.config.brick_score;
    // Always a vertical bounce, whichever side was hit
    world.ball.vel.y = -world.ball.vel.y;
    world.push_event(GameEvent::BrickDestroyed { row, col });
    log::debug!("Brick ({}, {}) destroyed, score {}", row, col, world.state.score);

    if world.bricks.remaining() == 0 {
        world.state.end();
        world.push_event(GameEvent::Won);
        log::info!("All bricks cleared, score {}", world.state.score);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::config::{BrickLayout, GameConfig};
    use crate::sim::state::Outcome;

    fn one_brick(left: f32, top: f32) -> GameConfig {
        GameConfig::default().with_bricks(BrickLayout {
            rows: 1,
            cols: 1,
            width: 48.0,
            height: 18.0,
            padding: 10.0,
            left,
            top,
        })
    }

    /// A world with the ball already in flight at `pos` moving at `vel`
    fn in_flight(config: GameConfig, pos: Vec2, vel: Vec2) -> GameWorld {
        let mut world = GameWorld::new(config, 1);
        world.state.started = true;
        world.ball.pos = pos;
        world.ball.vel = vel;
        world
    }

    #[test]
    fn test_tick_launch_to_playing() {
        let mut world = GameWorld::with_seed(12345);
        tick(&mut world, &TickInput::default());
        assert_eq!(world.phase(), Phase::NotStarted);

        let input = TickInput {
            intents: vec![Intent::LaunchOrPause],
            ..Default::default()
        };
        tick(&mut world, &input);
        assert_eq!(world.phase(), Phase::Playing);
        assert!(world.ball.vel.y < 0.0);
    }

    #[test]
    fn test_tick_pause_freezes_everything() {
        let mut world = GameWorld::with_seed(12345);
        let action = TickInput {
            intents: vec![Intent::LaunchOrPause],
            ..Default::default()
        };
        tick(&mut world, &action);
        tick(&mut world, &action);
        assert_eq!(world.phase(), Phase::Paused);

        let ball = world.ball.pos;
        let paddle = world.paddle.x;
        let held = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut world, &held);
        assert_eq!(world.ball.pos, ball);
        assert_eq!(world.paddle.x, paddle);

        tick(&mut world, &action);
        assert_eq!(world.phase(), Phase::Playing);
        assert_ne!(world.ball.pos, ball);
    }

    #[test]
    fn test_pause_intent_only_pauses_flight() {
        let mut world = GameWorld::with_seed(12345);
        apply_intent(&mut world, Intent::Pause);
        assert_eq!(world.phase(), Phase::NotStarted);

        apply_intent(&mut world, Intent::LaunchOrPause);
        apply_intent(&mut world, Intent::Pause);
        assert_eq!(world.phase(), Phase::Paused);
        apply_intent(&mut world, Intent::Pause);
        assert_eq!(world.phase(), Phase::Paused);

        world.state.end();
        apply_intent(&mut world, Intent::Pause);
        assert_eq!(world.phase(), Phase::GameOver);
    }

    #[test]
    fn test_docked_ball_tracks_paddle() {
        let mut world = GameWorld::with_seed(1);
        for _ in 0..10 {
            step(&mut world, true, false);
        }
        assert_eq!(world.paddle.x, 195.0 - 70.0);
        assert_eq!(
            world.ball.pos,
            Vec2::new(world.paddle.x + 55.0, world.paddle.y - 7.0 - 1.0)
        );
        assert_eq!(world.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_brick_hit_example() {
        let config = one_brick(90.0, 95.0);
        // Extra brick off to the side so the hit doesn't end the game
        let config = config.with_bricks(BrickLayout {
            cols: 2,
            padding: 200.0,
            ..config.bricks
        });
        let mut world = in_flight(config, Vec2::new(100.0, 100.0), Vec2::new(3.0, 4.0));

        step(&mut world, false, false);
        assert_eq!(world.ball.pos, Vec2::new(103.0, 104.0));
        assert!(!world.bricks.is_alive(0, 0));
        assert!(world.bricks.is_alive(0, 1));
        assert_eq!(world.state.score, 10);
        assert_eq!(world.ball.vel, Vec2::new(3.0, -4.0));
        assert!(!world.state.game_over);
        assert!(
            world
                .events()
                .contains(&GameEvent::BrickDestroyed { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_one_brick_per_step() {
        // Two bricks 2px apart; the ball straddles the gap
        let config = GameConfig::default().with_bricks(BrickLayout {
            rows: 1,
            cols: 2,
            width: 48.0,
            height: 18.0,
            padding: 2.0,
            left: 100.0,
            top: 100.0,
        });
        let mut world = in_flight(config, Vec2::new(149.0, 109.0), Vec2::new(0.0, -1.0));

        step(&mut world, false, false);
        assert!(!world.bricks.is_alive(0, 0));
        assert!(world.bricks.is_alive(0, 1));
        assert_eq!(world.state.score, 10);
        assert_eq!(world.ball.vel.y, 1.0);
    }

    #[test]
    fn test_last_brick_wins() {
        let mut world = in_flight(
            one_brick(90.0, 95.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(3.0, 4.0),
        );
        step(&mut world, false, false);
        assert_eq!(world.remaining_bricks(), 0);
        assert!(world.state.game_over);
        assert!(world.state.paused);
        assert_eq!(world.outcome(), Outcome::Won);
        assert!(world.events().contains(&GameEvent::Won));
    }

    #[test]
    fn test_side_walls_reflect() {
        let config = GameConfig::default();
        let mut world = in_flight(config, Vec2::new(9.0, 300.0), Vec2::new(-4.0, -2.0));
        step(&mut world, false, false);
        assert_eq!(world.ball.pos.x, 7.0);
        assert_eq!(world.ball.vel.x, 4.0);

        let mut world = in_flight(config, Vec2::new(491.0, 300.0), Vec2::new(4.0, -2.0));
        step(&mut world, false, false);
        assert_eq!(world.ball.pos.x, 493.0);
        assert_eq!(world.ball.vel.x, -4.0);
        assert_eq!(world.events(), &[GameEvent::WallBounce]);
    }

    #[test]
    fn test_ceiling_reflects() {
        let config = GameConfig::default().with_bricks(BrickLayout {
            rows: 0,
            ..GameConfig::default().bricks
        });
        let mut world = in_flight(config, Vec2::new(250.0, 9.0), Vec2::new(1.0, -4.0));
        step(&mut world, false, false);
        assert_eq!(world.ball.pos.y, 7.0);
        assert_eq!(world.ball.vel.y, 4.0);
    }

    #[test]
    fn test_floor_costs_a_life_and_docks() {
        let mut world = in_flight(
            GameConfig::default(),
            Vec2::new(20.0, 605.0),
            Vec2::new(0.0, 5.0),
        );
        step(&mut world, false, false);
        assert_eq!(world.state.lives, 2);
        assert!(!world.state.started);
        assert!(!world.state.game_over);
        assert_eq!(world.ball.vel, Vec2::ZERO);
        assert_eq!(world.ball.pos, world.ball.docked_position(&world.paddle));
        assert_eq!(world.phase(), Phase::NotStarted);
    }

    #[test]
    fn test_floor_on_last_life_ends_game() {
        let mut world = in_flight(
            GameConfig::default(),
            Vec2::new(20.0, 605.0),
            Vec2::new(0.0, 5.0),
        );
        world.state.lives = 1;
        step(&mut world, false, false);
        assert_eq!(world.state.lives, 0);
        assert!(world.state.game_over);
        assert!(world.state.paused);
        // Not re-docked
        assert!(world.state.started);
        assert_eq!(world.ball.pos, Vec2::new(20.0, 610.0));
        assert_eq!(world.outcome(), Outcome::Lost);
    }

    #[test]
    fn test_paddle_center_hit_goes_straight_up() {
        let mut world = GameWorld::with_seed(1);
        world.state.started = true;
        let center = world.paddle.center_x();
        world.ball.pos = Vec2::new(center, world.paddle.y - 9.0);
        world.ball.vel = Vec2::new(0.0, 5.0);

        step(&mut world, false, false);
        assert_eq!(world.ball.pos.y, world.paddle.y - 8.0);
        assert_eq!(world.ball.vel, Vec2::new(0.0, -5.0));
        assert_eq!(world.events(), &[GameEvent::PaddleHit]);
    }

    #[test]
    fn test_paddle_edge_graze_overshoots_unit_offset() {
        let mut world = GameWorld::with_seed(1);
        world.state.started = true;
        // 3px right of the paddle's right end: offset (55 + 3) / 55
        let right = world.paddle.x + world.paddle.width + 3.0;
        world.ball.pos = Vec2::new(right, world.paddle.y - 2.0);
        world.ball.vel = Vec2::new(0.0, 4.0);

        step(&mut world, false, false);
        assert!(world.ball.vel.y < 0.0);
        let expected = 58.0 / 55.0 * 5.0 * 1.1;
        assert!((world.ball.vel.x - expected).abs() < 1e-4);
        assert!(world.ball.vel.x > 5.0 * 1.1);
        assert!(world.ball.vel.x < 5.0 * 1.4);
    }

    #[test]
    fn test_paddle_spin_capped_for_large_ball() {
        let mut config = GameConfig::default();
        config.ball.radius = 40.0;
        let mut world = GameWorld::new(config, 1);
        world.state.started = true;
        // Graze the left end from 30px outside: offset (-55 - 30) / 55
        let left = world.paddle.x - 30.0;
        world.ball.pos = Vec2::new(left, world.paddle.y - 2.0);
        world.ball.vel = Vec2::new(0.0, 4.0);

        step(&mut world, false, false);
        assert!(world.ball.vel.y < 0.0);
        assert_eq!(world.ball.vel.x, -5.0 * 1.4);
    }

    #[test]
    fn test_rising_ball_ignores_paddle() {
        let mut world = GameWorld::with_seed(1);
        world.state.started = true;
        world.ball.pos = Vec2::new(world.paddle.center_x(), world.paddle.y + 10.0);
        world.ball.vel = Vec2::new(0.0, -2.0);

        step(&mut world, false, false);
        assert_eq!(world.ball.vel, Vec2::new(0.0, -2.0));
    }

    #[test]
    fn test_intents_ignored_after_game_over() {
        let mut world = GameWorld::with_seed(1);
        world.state.end();
        apply_intent(&mut world, Intent::LaunchOrPause);
        assert_eq!(world.phase(), Phase::GameOver);
        assert!(!world.state.started);

        apply_intent(&mut world, Intent::Restart);
        assert_eq!(world.phase(), Phase::NotStarted);
        assert!(!world.state.paused);
    }

    #[test]
    fn test_restart_then_move_in_same_tick() {
        let mut world = GameWorld::with_seed(1);
        world.state.end();
        let input = TickInput {
            right: true,
            intents: vec![Intent::Restart],
            ..Default::default()
        };
        tick(&mut world, &input);
        assert_eq!(world.paddle.x, 195.0 + 7.0);
        assert_eq!(world.ball.pos.x, world.paddle.center_x());
    }

    #[test]
    fn test_determinism() {
        let mut a = GameWorld::with_seed(99999);
        let mut b = GameWorld::with_seed(99999);
        let inputs = [
            TickInput {
                right: true,
                ..Default::default()
            },
            TickInput {
                intents: vec![Intent::LaunchOrPause],
                ..Default::default()
            },
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput::default(),
        ];
        for _ in 0..50 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }
        assert_eq!(a.ball, b.ball);
        assert_eq!(a.paddle, b.paddle);
        assert_eq!(a.state, b.state);
    }
}
