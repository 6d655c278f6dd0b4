//! Text-mode renderer for terminals and logs
//!
//! Each cell covers `width / cols` by `height / rows` arena pixels. Shapes
//! are sampled at cell centers, so small things can vanish; the ball is
//! always drawn at its nearest cell.

use super::Renderer;
use super::scene::{DrawCmd, Scene, Solid, TextAlign};
use crate::sim::Snapshot;

pub struct AsciiRenderer {
    cols: usize,
    rows: usize,
    frame: String,
    frames_drawn: u64,
}

impl AsciiRenderer {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            frame: String::new(),
            frames_drawn: 0,
        }
    }

    /// Last rendered frame, rows separated by newlines
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    fn rasterize(&self, scene: &Scene) -> Vec<Vec<char>> {
        let mut grid = vec![vec![' '; self.cols]; self.rows];
        let sx = self.cols as f32 / scene.width;
        let sy = self.rows as f32 / scene.height;
        let cell = |x: f32, y: f32| -> Option<(usize, usize)> {
            let (c, r) = ((x * sx).floor(), (y * sy).floor());
            (c >= 0.0 && r >= 0.0 && (c as usize) < self.cols && (r as usize) < self.rows)
                .then(|| (c as usize, r as usize))
        };

        for cmd in &scene.commands {
            match cmd {
                DrawCmd::Clear => grid.iter_mut().for_each(|row| row.fill(' ')),
                DrawCmd::RoundRect { rect, solid, .. } => {
                    let glyph = match solid {
                        Solid::Brick => '#',
                        Solid::Paddle => '=',
                    };
                    for (r, row) in grid.iter_mut().enumerate() {
                        let y = (r as f32 + 0.5) / sy;
                        if y < rect.y || y > rect.bottom() {
                            continue;
                        }
                        for (c, ch) in row.iter_mut().enumerate() {
                            let x = (c as f32 + 0.5) / sx;
                            if x >= rect.x && x <= rect.right() {
                                *ch = glyph;
                            }
                        }
                    }
                }
                DrawCmd::Circle { center, .. } => {
                    if let Some((c, r)) = cell(center.x, center.y) {
                        grid[r][c] = 'o';
                    }
                }
                DrawCmd::Text {
                    text, pos, align, ..
                } => {
                    let Some((c, r)) = cell(pos.x.min(scene.width - 1.0), pos.y) else {
                        continue;
                    };
                    let len = text.chars().count();
                    let start = match align {
                        TextAlign::Left => c.min(self.cols.saturating_sub(len)),
                        TextAlign::Center => c.saturating_sub(len / 2),
                    };
                    for (i, ch) in text.chars().enumerate() {
                        if let Some(slot) = grid[r].get_mut(start + i) {
                            *slot = ch;
                        }
                    }
                }
            }
        }
        grid
    }
}

impl Renderer for AsciiRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        let scene = Scene::build(snapshot);
        let grid = self.rasterize(&scene);

        let border = "-".repeat(self.cols + 2);
        let mut out = String::with_capacity((self.cols + 3) * (self.rows + 2));
        out.push_str(&border);
        out.push('\n');
        for row in grid {
            out.push('|');
            out.extend(row);
            out.push_str("|\n");
        }
        out.push_str(&border);

        self.frame = out;
        self.frames_drawn += 1;
    }
}
