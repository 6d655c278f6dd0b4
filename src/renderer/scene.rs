//! Backend-neutral display list built from a snapshot

use glam::Vec2;

use crate::sim::{Rect, Snapshot};

/// RGBA color, components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// From hue in degrees, saturation and lightness in 0..=1
    pub fn hsl(h: f32, s: f32, l: f32) -> Self {
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let (r, g, b) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        Self::rgba(r + m, g + m, b + m, 1.0)
    }

    /// CSS `rgba(...)` string
    pub fn to_css(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({}, {}, {}, {})",
            byte(self.r),
            byte(self.g),
            byte(self.b),
            self.a
        )
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const PADDLE: Color = Color::rgba(0.859, 0.906, 1.0, 1.0); // #dbe7ff
    pub const BALL: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const HUD: Color = Color::rgba(0.859, 0.906, 1.0, 0.9);
    pub const OVERLAY: Color = Color::rgba(1.0, 1.0, 1.0, 0.95);

    /// Bricks shift hue slightly with each row
    pub fn brick(row: usize) -> Color {
        Color::hsl(210.0 + row as f32 * 5.0, 0.7, 0.55)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Which game object a filled rectangle stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solid {
    Brick,
    Paddle,
}

/// One drawing primitive, arena coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear,
    RoundRect {
        rect: Rect,
        radius: f32,
        color: Color,
        solid: Solid,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        /// Baseline anchor
        pos: Vec2,
        size: f32,
        bold: bool,
        align: TextAlign,
        color: Color,
    },
}

/// Everything to draw for one frame, back to front
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCmd>,
}

const BRICK_CORNER: f32 = 6.0;
const PADDLE_CORNER: f32 = 8.0;
const HUD_SIZE: f32 = 14.0;
const OVERLAY_SIZE: f32 = 18.0;

impl Scene {
    pub fn build(snap: &Snapshot) -> Self {
        let mut commands = Vec::with_capacity(snap.bricks.len() + 6);
        commands.push(DrawCmd::Clear);

        for brick in &snap.bricks {
            commands.push(DrawCmd::RoundRect {
                rect: brick.rect,
                radius: BRICK_CORNER,
                color: colors::brick(brick.row),
                solid: Solid::Brick,
            });
        }

        commands.push(DrawCmd::RoundRect {
            rect: snap.paddle,
            radius: PADDLE_CORNER,
            color: colors::PADDLE,
            solid: Solid::Paddle,
        });
        commands.push(DrawCmd::Circle {
            center: snap.ball_pos,
            radius: snap.ball_radius,
            color: colors::BALL,
        });

        // HUD
        let hud = |text: String, x: f32| DrawCmd::Text {
            text,
            pos: Vec2::new(x, 24.0),
            size: HUD_SIZE,
            bold: false,
            align: TextAlign::Left,
            color: colors::HUD,
        };
        commands.push(hud(snap.score_text(), 14.0));
        commands.push(hud(snap.lives_text(), snap.arena_width - 80.0));

        if let Some(text) = snap.overlay_text() {
            commands.push(DrawCmd::Text {
                text: text.to_string(),
                pos: Vec2::new(snap.arena_width / 2.0, snap.arena_height * 0.55),
                size: OVERLAY_SIZE,
                bold: true,
                align: TextAlign::Center,
                color: colors::OVERLAY,
            });
        }

        Self {
            width: snap.arena_width,
            height: snap.arena_height,
            commands,
        }
    }

    /// Text commands, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
