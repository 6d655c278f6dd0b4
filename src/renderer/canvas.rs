//! HTML canvas 2D renderer (wasm only)

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::Renderer;
use super::scene::{DrawCmd, Scene, TextAlign};
use crate::sim::{Rect, Snapshot};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn round_rect(&self, rect: &Rect, radius: f32) -> Result<(), JsValue> {
        let (x, y, w, h) = (rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
        let r = (radius as f64).min(w / 2.0).min(h / 2.0);
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(x + r, y);
        ctx.arc_to(x + w, y, x + w, y + h, r)?;
        ctx.arc_to(x + w, y + h, x, y + h, r)?;
        ctx.arc_to(x, y + h, x, y, r)?;
        ctx.arc_to(x, y, x + w, y, r)?;
        ctx.close_path();
        ctx.fill();
        Ok(())
    }

    fn draw(&self, scene: &Scene) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        for cmd in &scene.commands {
            match cmd {
                DrawCmd::Clear => {
                    ctx.clear_rect(0.0, 0.0, scene.width as f64, scene.height as f64)
                }
                DrawCmd::RoundRect {
                    rect,
                    radius,
                    color,
                    ..
                } => {
                    ctx.set_fill_style_str(&color.to_css());
                    self.round_rect(rect, *radius)?;
                }
                DrawCmd::Circle {
                    center,
                    radius,
                    color,
                } => {
                    ctx.begin_path();
                    ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.fill();
                }
                DrawCmd::Text {
                    text,
                    pos,
                    size,
                    bold,
                    align,
                    color,
                } => {
                    ctx.save();
                    ctx.set_fill_style_str(&color.to_css());
                    let weight = if *bold { "600 " } else { "" };
                    ctx.set_font(&format!("{weight}{size}px system-ui, Arial"));
                    ctx.set_text_align(match align {
                        TextAlign::Left => "left",
                        TextAlign::Center => "center",
                    });
                    ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
                    ctx.restore();
                }
            }
        }
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        if let Err(e) = self.draw(&Scene::build(snapshot)) {
            log::warn!("Render error: {:?}", e);
        }
    }
}
