//! Rendering
//!
//! Renderers only ever see a `Snapshot`. `Scene` turns one into a flat list
//! of draw commands in arena coordinates; each backend replays that list.

pub mod ascii;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

pub use ascii::AsciiRenderer;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::{Color, DrawCmd, Scene, Solid, TextAlign};

use crate::sim::Snapshot;

/// Something that can draw a frame
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot);
}

/// Renders nothing; for headless runs that only care about the simulation
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _snapshot: &Snapshot) {}
}
