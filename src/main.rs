//! Twin Intercept entry point
//!
//! Web: canvas painter, keyboard input and a requestAnimationFrame loop.
//! Native: a headless match with scripted key presses.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use twin_intercept::consts::*;
    use twin_intercept::platform::FireQueue;
    use twin_intercept::renderer::canvas::CanvasPainter;
    use twin_intercept::renderer::{ArenaSprites, SpriteScene};
    use twin_intercept::sim::{SimulationClock, TickOutcome};
    use twin_intercept::{MatchConfig, Tuning};

    /// Game instance holding all state
    struct Game {
        clock: SimulationClock,
        scene: SpriteScene,
        sprites: Vec<ArenaSprites>,
        painter: CanvasPainter,
        input: FireQueue,
        last_time: f64,
    }

    impl Game {
        fn new(config: &MatchConfig, painter: CanvasPainter) -> Self {
            let clock = SimulationClock::from_config(config);
            let mut scene = SpriteScene::new();
            let sprites = clock
                .arenas()
                .iter()
                .map(|arena| ArenaSprites::attach(arena, &mut scene))
                .collect();
            Self {
                clock,
                scene,
                sprites,
                painter,
                input: FireQueue::default(),
                last_time: 0.0,
            }
        }

        /// Run one tick with the queued key presses.
        /// `delta` is in 60 Hz frames, so 1.0 at full frame rate.
        fn update(&mut self, delta: f32) {
            let input = self.input.drain();
            if let TickOutcome::Stopped(reason) = self.clock.tick(&input, delta) {
                log::info!("Match over: {:?}", reason);
            }
            for (sprites, arena) in self.sprites.iter_mut().zip(self.clock.arenas_mut()) {
                sprites.sync(arena, &mut self.scene);
            }
        }

        fn render(&self) {
            self.painter.paint(&self.scene);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {e}").into());
        }

        log::info!("Twin Intercept starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let seed = js_sys::Date::now() as u64;
        let config = MatchConfig::new(seed).with_tuning(Tuning::load());
        let painter = CanvasPainter::new(&canvas)?;
        let game = Rc::new(RefCell::new(Game::new(&config, painter)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&window, game.clone());
        request_animation_frame(game);

        log::info!("Twin Intercept running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let mut g = game.borrow_mut();
            if g.input.key_down(&event.key()) {
                log::debug!("fire key {:?}", event.key());
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window for animation frame");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let running = {
            let mut g = game.borrow_mut();

            // Delta in 60 Hz frames
            let delta = if g.last_time > 0.0 {
                (((time - g.last_time) / 1000.0) * 60.0) as f32
            } else {
                FRAME_DELTA
            };
            g.last_time = time;

            g.update(delta.clamp(0.0, MAX_FRAME_DELTA));
            g.render();
            !g.clock.is_stopped()
        };

        // Last frame painted the end state (explosion); stop requesting frames
        if running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().inspect_err(|e| log::error!("Startup failed: {:?}", e))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Twin Intercept (native) starting...");
    log::info!("Native mode runs a headless match - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    let tuning = match args.next() {
        Some(path) => match twin_intercept::Tuning::from_path(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(2);
            }
        },
        None => twin_intercept::Tuning::load(),
    };

    headless::run(&twin_intercept::MatchConfig::new(seed).with_tuning(tuning));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use twin_intercept::MatchConfig;
    use twin_intercept::consts::FRAME_DELTA;
    use twin_intercept::platform::FireQueue;
    use twin_intercept::renderer::{ArenaSprites, SpriteScene, Texture};
    use twin_intercept::sim::{SimulationClock, TickOutcome};

    /// Upper bound on a headless match (about ten minutes at 60 Hz)
    const MAX_TICKS: u64 = 36_000;
    /// Chance per tick that a scripted player mashes their key
    const PRESS_CHANCE: f64 = 0.05;

    pub fn run(config: &MatchConfig) {
        let mut clock = SimulationClock::from_config(config);
        let mut scene = SpriteScene::new();
        let mut sprites: Vec<ArenaSprites> = clock
            .arenas()
            .iter()
            .map(|arena| ArenaSprites::attach(arena, &mut scene))
            .collect();
        let mut keys = FireQueue::default();
        let mut presses = Pcg32::seed_from_u64(config.seed ^ 0x5eed);

        while clock.ticks() < MAX_TICKS {
            for key in ["a", "l"] {
                if presses.random_bool(PRESS_CHANCE) {
                    keys.key_down(key);
                }
            }

            let outcome = clock.tick(&keys.drain(), FRAME_DELTA);
            for (binding, arena) in sprites.iter_mut().zip(clock.arenas_mut()) {
                binding.sync(arena, &mut scene);
            }

            if let TickOutcome::Stopped(reason) = outcome {
                println!(
                    "Match over after {} ticks: {:?} ({} explosion sprite(s))",
                    clock.ticks(),
                    reason,
                    scene.count(Texture::Explosion)
                );
                return;
            }
        }

        println!("No result after {} ticks", MAX_TICKS);
    }
}
