//! Read-only view of a `GameWorld` for renderers and tooling

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::{Outcome, Phase};
use super::world::GameWorld;

/// An alive brick and where it is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickView {
    pub row: usize,
    pub col: usize,
    pub rect: Rect,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle: Rect,
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    /// Alive bricks only, row-major
    pub bricks: Vec<BrickView>,
    pub score: u32,
    pub lives: u8,
    pub phase: Phase,
    pub outcome: Outcome,
    pub remaining_bricks: usize,
}

impl Snapshot {
    pub fn capture(world: &GameWorld) -> Self {
        let bricks: Vec<BrickView> = world
            .bricks
            .alive()
            .map(|(row, col, rect)| BrickView { row, col, rect })
            .collect();
        Self {
            arena_width: world.config.arena.width,
            arena_height: world.config.arena.height,
            paddle: world.paddle.rect(),
            ball_pos: world.ball.pos,
            ball_radius: world.ball.radius,
            remaining_bricks: bricks.len(),
            bricks,
            score: world.state.score,
            lives: world.state.lives,
            phase: world.phase(),
            outcome: world.outcome(),
        }
    }

    /// Center-screen message for the current phase, if any
    pub fn overlay_text(&self) -> Option<&'static str> {
        match (self.phase, self.outcome) {
            (Phase::NotStarted, _) => Some("Press SPACE to launch"),
            (Phase::Paused, _) => Some("Paused (SPACE to resume)"),
            (Phase::GameOver, Outcome::Won) => Some("You Win!  (R to restart)"),
            (Phase::GameOver, _) => Some("Game Over  (R to restart)"),
            (Phase::Playing, _) => None,
        }
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn lives_text(&self) -> String {
        format!("Lives: {}", self.lives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_of_new_game() {
        let world = GameWorld::with_seed(1);
        let snap = world.snapshot();
        assert_eq!(snap.bricks.len(), 56);
        assert_eq!(snap.remaining_bricks, 56);
        assert_eq!(snap.phase, Phase::NotStarted);
        assert_eq!(snap.outcome, Outcome::InProgress);
        assert_eq!(snap.paddle, world.paddle.rect());
        assert_eq!(snap.overlay_text(), Some("Press SPACE to launch"));
        assert_eq!(snap.score_text(), "Score: 0");
        assert_eq!(snap.lives_text(), "Lives: 3");
    }

    #[test]
    fn test_overlay_text_per_phase() {
        let mut world = GameWorld::with_seed(1);
        world.launch_ball();
        assert_eq!(world.snapshot().overlay_text(), None);

        world.toggle_pause();
        assert_eq!(
            world.snapshot().overlay_text(),
            Some("Paused (SPACE to resume)")
        );

        world.state.end();
        assert_eq!(
            world.snapshot().overlay_text(),
            Some("Game Over  (R to restart)")
        );

        world.bricks = crate::sim::BrickGrid::new(world.config.bricks);
        for (row, col, _) in world.bricks.alive().collect::<Vec<_>>() {
            world.bricks.destroy(row, col);
        }
        assert_eq!(
            world.snapshot().overlay_text(),
            Some("You Win!  (R to restart)")
        );
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = GameWorld::with_seed(1).snapshot();
        let json = serde_json::to_string(&snap).expect("snapshot is plain data");
        let back: Snapshot = serde_json::from_str(&json).expect("round trip");
        assert_eq!(back.phase, snap.phase);
        assert_eq!(back.bricks.len(), snap.bricks.len());
    }
}
