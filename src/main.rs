//! Brickfall entry point
//!
//! Web: canvas `#game`, keyboard input, one frame per animation frame.
//! Native: headless demo run driven by the autopilot, printed as ASCII.

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use brickfall::consts::PADDLE_BOTTOM_OFFSET;
    use brickfall::driver::Game;
    use brickfall::renderer::CanvasRenderer;
    use brickfall::{GameConfig, Settings};
    use brickfall::sim::GameWorld;

    type SharedGame = Rc<RefCell<Game<CanvasRenderer>>>;

    pub fn run() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or("missing #game canvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into()?;

        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        log::info!("Starting game with seed {}", seed);

        // Arena follows the canvas size
        let mut config = GameConfig::default();
        config.arena.width = canvas.width() as f32;
        config.arena.height = canvas.height() as f32;
        config.paddle.y = config.arena.height - PADDLE_BOTTOM_OFFSET;
        let world = GameWorld::new(config, seed);

        let game: SharedGame = Rc::new(RefCell::new(Game::new(
            world,
            Settings::default(),
            CanvasRenderer::new(ctx),
        )));

        setup_keyboard(&window, game.clone())?;
        setup_auto_pause(&window, game.clone())?;
        start_loop(game)
    }

    fn setup_keyboard(window: &web_sys::Window, game: SharedGame) -> Result<(), JsValue> {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |e: KeyboardEvent| {
                if game.borrow_mut().input.key_down(&e.key()) {
                    e.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |e: KeyboardEvent| {
                game.borrow_mut().input.key_up(&e.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_auto_pause(window: &web_sys::Window, game: SharedGame) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_e: web_sys::FocusEvent| {
            game.borrow_mut().focus_lost();
        });
        window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(f: &Closure<dyn FnMut()>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.request_animation_frame(f.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }

    fn start_loop(game: SharedGame) -> Result<(), JsValue> {
        // The closure reschedules itself, so it has to own a handle to itself
        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        *g.borrow_mut() = Some(Closure::new(move || {
            game.borrow_mut().frame();
            if let Some(cb) = f.borrow().as_ref() {
                request_animation_frame(cb);
            }
        }));
        if let Some(cb) = g.borrow().as_ref() {
            request_animation_frame(cb);
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;

    use brickfall::Settings;
    use brickfall::autopilot::Autopilot;
    use brickfall::driver::Game;
    use brickfall::renderer::AsciiRenderer;
    use brickfall::sim::{GameEvent, GameWorld, Phase};

    /// Headless Brickfall demo: the autopilot plays, the last frame is printed
    #[derive(Parser, Debug)]
    #[command(name = "brickfall", version, about)]
    pub struct Args {
        /// RNG seed for launch angles
        #[arg(long, default_value_t = 1)]
        pub seed: u64,
        /// Frames to simulate
        #[arg(long, default_value_t = 3600)]
        pub frames: u64,
        /// Settings JSON file
        #[arg(long)]
        pub settings: Option<PathBuf>,
        /// Keep playing after a game ends
        #[arg(long)]
        pub restart: bool,
        /// Print the final snapshot as JSON instead of the ASCII frame
        #[arg(long)]
        pub json: bool,
        /// ASCII frame size in columns x rows
        #[arg(long, default_value_t = 60)]
        pub cols: usize,
        #[arg(long, default_value_t = 36)]
        pub rows: usize,
    }

    pub fn run(args: Args) -> Result<(), serde_json::Error> {
        let settings = Settings::load_or_default(args.settings.as_deref());
        let mut game = Game::new(
            GameWorld::with_seed(args.seed),
            settings,
            AsciiRenderer::new(args.cols, args.rows),
        );
        let mut pilot = Autopilot::new(args.restart);
        let mut bricks = 0u32;

        for _ in 0..args.frames {
            let snap = game.snapshot();
            if snap.phase == Phase::GameOver && !args.restart {
                break;
            }
            pilot.drive(&snap, &mut game.input);
            bricks += game
                .frame()
                .iter()
                .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
                .count() as u32;
        }

        let snap = game.snapshot();
        log::info!(
            "{} frames, {} bricks destroyed, outcome {:?}",
            game.frames(),
            bricks,
            snap.outcome
        );

        if args.json {
            println!("{}", serde_json::to_string_pretty(&snap)?);
        } else {
            println!("{}", game.renderer.frame());
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    log::info!("Brickfall (native, headless) starting...");

    if let Err(e) = native::run(native::Args::parse()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
