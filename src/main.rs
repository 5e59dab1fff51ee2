//! Running to BYU entry point
//!
//! Web: binds the canvas, keyboard and buttons, then drives the runner from
//! `requestAnimationFrame`. Native: headless autopilot demo.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use byu_runner::platform::{InputAction, Runner};
    use byu_runner::renderer::{CanvasPainter, scene};
    use byu_runner::sim::{GameEvent, GameState, GameView};
    use byu_runner::{Settings, Tuning};

    const CANVAS_ID: &str = "game-canvas";
    const TUNING_KEY: &str = "byu_runner_tuning";

    /// Game instance holding all state
    struct Game {
        runner: Runner,
        painter: CanvasPainter,
        settings: Settings,
        /// A frame callback is already queued
        frame_pending: bool,
    }

    impl Game {
        fn render(&self) {
            let shapes = scene::build(self.runner.state(), &self.settings);
            if let Err(e) = self.painter.paint(&shapes) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Update score text and the start/try-again overlay
        fn update_hud(&self, view: GameView) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("game-score") {
                if view.running {
                    el.set_text_content(Some(&format!("Score: {}", view.score)));
                    let _ = el.set_attribute("class", "score");
                } else {
                    let _ = el.set_attribute("class", "score hidden");
                }
            }

            if let Some(el) = document.get_element_by_id("game-overlay") {
                let class = if view.running {
                    "game-overlay hidden"
                } else {
                    "game-overlay"
                };
                let _ = el.set_attribute("class", class);
            }

            if let Some(el) = document.get_element_by_id("game-message") {
                if view.game_over {
                    el.set_text_content(Some(&format!("Game Over! Score: {}", view.score)));
                } else {
                    el.set_text_content(None);
                }
            }

            if let Some(el) = document.get_element_by_id("start-btn") {
                let label = if view.game_over { "Try Again" } else { "Start Game" };
                el.set_text_content(Some(label));
            }
        }

        fn log_events(&self) {
            for event in &self.runner.state().events {
                match event {
                    GameEvent::BookSpawned { height, .. } => {
                        log::debug!("Book spawned (height {:.0})", height)
                    }
                    GameEvent::Collision => log::info!("Collision detected!"),
                    GameEvent::Landed | GameEvent::BookCleared => {}
                }
            }
        }
    }

    /// Tuning overrides from LocalStorage, if any are stored and valid
    fn load_tuning() -> Tuning {
        let json = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|s| s.get_item(TUNING_KEY).ok().flatten());

        match json {
            Some(json) => match Tuning::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides");
                    tuning
                }
                Err(e) => {
                    log::warn!("Rejected stored tuning: {e}");
                    Tuning::default()
                }
            },
            None => Tuning::default(),
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger already set: {e}").into());
        }

        log::info!("Running to BYU starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let tuning = load_tuning();
        canvas.set_width(tuning.arena_width as u32);
        canvas.set_height(tuning.arena_height as u32);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            runner: Runner::new(GameState::with_tuning(tuning, seed)),
            painter: CanvasPainter::new(&canvas)?,
            settings: Settings::load(),
            frame_pending: false,
        }));
        log::info!("Game initialized with seed: {}", seed);

        {
            let g = game.borrow();
            g.render();
            g.update_hud(g.runner.view());
        }

        setup_input_handlers(&canvas, game.clone());
        setup_start_button(game);

        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let settings = g.settings.clone();
                if g.runner.on_key(&event.code(), &settings) && g.runner.is_active() {
                    // Keep Space/ArrowUp from scrolling the page mid-run
                    event.prevent_default();
                }
            });
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            }
            closure.forget();
        }

        // Click/tap on the canvas
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                let used = {
                    let mut g = game.borrow_mut();
                    let settings = g.settings.clone();
                    g.runner.on_pointer(&settings)
                };
                if used {
                    ensure_loop(game.clone());
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                {
                    let mut g = game.borrow_mut();
                    if g.runner.is_active() {
                        return;
                    }
                    g.runner.apply(InputAction::Start);
                    log::info!("Starting game...");
                }
                ensure_loop(game.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Queue a frame unless one is already queued
    fn ensure_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.frame_pending {
                return;
            }
            g.frame_pending = true;
        }
        request_animation_frame(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_going = {
            let mut g = game.borrow_mut();
            g.frame_pending = false;
            match g.runner.on_frame(time) {
                Some(view) => {
                    g.log_events();
                    g.render();
                    g.update_hud(view);
                }
                None => return,
            }
            let active = g.runner.is_active();
            if active {
                g.frame_pending = true;
            }
            active
        };

        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    let args = native::Args::parse();
    env_logger::init();
    log::info!("Running to BYU (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - use the web build to play");

    if let Err(e) = native::run_demo(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use byu_runner::platform::{Autopilot, InputAction, Runner};
    use byu_runner::sim::{GameEvent, GameState};
    use byu_runner::{Tuning, TuningError};
    use clap::Parser;
    use std::path::{Path, PathBuf};

    /// 60 Hz display
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Two minutes of play
    const MAX_FRAMES: u64 = 60 * 120;

    #[derive(Parser, Debug)]
    #[command(name = "byu-runner")]
    #[command(about = "Headless autopilot run of Running to BYU")]
    pub struct Args {
        /// JSON tuning overrides (missing fields keep their defaults)
        pub tuning: Option<PathBuf>,
        /// RNG seed for book heights and spawn timing
        #[arg(default_value_t = 2024)]
        pub seed: u64,
    }

    fn load_tuning(path: Option<&Path>) -> Result<Tuning, TuningError> {
        let Some(path) = path else {
            return Ok(Tuning::default());
        };
        let json = std::fs::read_to_string(path).map_err(|e| TuningError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Tuning::from_json(&json)
    }

    pub fn run_demo(args: &Args) -> Result<(), TuningError> {
        let tuning = load_tuning(args.tuning.as_deref())?;
        let seed = args.seed;

        let pilot = Autopilot::default();
        let mut runner = Runner::new(GameState::with_tuning(tuning, seed));
        runner.start();

        let mut books = 0u32;
        let mut jumps = 0u32;
        for frame in 0..MAX_FRAMES {
            if pilot.wants_jump(runner.state()) && runner.apply(InputAction::Jump) {
                jumps += 1;
            }
            let Some(view) = runner.on_frame(frame as f64 * FRAME_MS) else {
                break;
            };
            for event in &runner.state().events {
                if let GameEvent::BookSpawned { height, .. } = event {
                    books += 1;
                    log::debug!("Book #{books} (height {height:.0})");
                }
            }
            if view.game_over {
                break;
            }
        }

        let view = runner.view();
        log::info!(
            "Demo finished: score {}, {} books, {} jumps, game over: {}",
            view.score,
            books,
            jumps,
            view.game_over
        );
        match serde_json::to_string(&view) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Could not encode result: {e}"),
        }
        Ok(())
    }

}
