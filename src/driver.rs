//! Frame driver
//!
//! One `frame()` per display refresh: drain input, tick the simulation (a
//! paused world stays put), then render. Frames never overlap.

use crate::input::InputAdapter;
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameWorld, Intent, Phase, Snapshot, tick};

/// Game instance holding all state
pub struct Game<R: Renderer> {
    pub world: GameWorld,
    pub input: InputAdapter,
    pub renderer: R,
    settings: Settings,
    frames: u64,
    last_phase: Phase,
}

impl<R: Renderer> Game<R> {
    pub fn new(world: GameWorld, settings: Settings, renderer: R) -> Self {
        let last_phase = world.phase();
        Self {
            input: InputAdapter::new(settings.bindings.clone()),
            world,
            renderer,
            settings,
            frames: 0,
            last_phase,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn snapshot(&self) -> Snapshot {
        self.world.snapshot()
    }

    /// Run one tick and draw it; returns the tick's events
    pub fn frame(&mut self) -> Vec<GameEvent> {
        let input = self.input.take_tick_input();
        tick(&mut self.world, &input);
        self.frames += 1;

        let events = self.world.drain_events();
        for event in &events {
            log_event(event, self.frames);
        }

        let phase = self.world.phase();
        if phase != self.last_phase {
            log::debug!("Phase {:?} -> {:?}", self.last_phase, phase);
            self.last_phase = phase;
        }

        self.renderer.render(&self.world.snapshot());
        events
    }

    /// Window lost focus: key-ups won't arrive, and a ball in flight pauses
    ///
    /// The pause lands after any intents already queued this frame, so a
    /// launch pressed just before the blur still ends up paused.
    pub fn focus_lost(&mut self) {
        self.input.release_all();
        if self.settings.pause_on_blur {
            self.input.push_intent(Intent::Pause);
            log::info!("Auto-pause requested (focus lost)");
        }
    }
}

fn log_event(event: &GameEvent, frame: u64) {
    match event {
        GameEvent::WallBounce | GameEvent::CeilingBounce | GameEvent::PaddleHit => {
            log::trace!("[{frame}] {event:?}")
        }
        GameEvent::BrickDestroyed { .. } => log::debug!("[{frame}] {event:?}"),
        _ => log::info!("[{frame}] {event:?}"),
    }
}
