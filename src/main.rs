//! Data Bones entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, KeyboardEvent};

    use data_bones::platform::{FrameHost, HeldKeys};
    use data_bones::renderer::Frame;
    use data_bones::renderer::canvas::{CanvasPresenter, update_hud};
    use data_bones::{Game, Tuning};

    /// Browser side of a frame: live key state in, canvas and HUD out
    struct BrowserHost {
        keys: HeldKeys,
        presenter: CanvasPresenter,
        document: Document,
    }

    impl FrameHost for BrowserHost {
        fn held_keys(&self) -> &HeldKeys {
            &self.keys
        }

        fn present(&mut self, frame: &Frame) {
            self.presenter.present(frame);
            update_hud(&self.document, frame);
        }
    }

    /// Everything the animation-frame callback and key listeners share
    struct App {
        game: Game,
        host: BrowserHost,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Data Bones starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let Some(presenter) = CanvasPresenter::attach(&document, "gameCanvas") else {
            log::error!("Canvas #gameCanvas not found or has no 2D context");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            game: Game::new(seed, Tuning::load()),
            host: BrowserHost {
                keys: HeldKeys::new(),
                presenter,
                document,
            },
        }));

        setup_input_handlers(app.clone());
        request_animation_frame(app);

        log::info!("Data Bones running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().host.keys.press(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().host.keys.release(&event.key());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Losing focus swallows key-up events; forget everything held
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().host.keys.clear();
                log::info!("Window blurred, released all keys");
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        {
            let mut guard = app.borrow_mut();
            let App { game, host } = &mut *guard;
            game.run_frame(host);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Data Bones (native) starting...");
    log::info!("Native mode runs a headless scripted session - serve the wasm build to play");

    let summary = headless::run(0xB0E5, headless::FRAMES);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not encode session summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use serde::Serialize;

    use data_bones::game::SessionStats;
    use data_bones::platform::{HeldKeys, ScriptedHost};
    use data_bones::{Game, Tuning};

    /// Ten seconds at 60 FPS
    pub const FRAMES: usize = 600;

    #[derive(Debug, Serialize)]
    pub struct Summary {
        pub seed: u64,
        pub stats: SessionStats,
        pub final_score: u64,
        pub hud_text: String,
        pub message: Option<String>,
        pub draw_commands: usize,
    }

    /// Keys for frame `n` of the demo: run back and forth, hop, and use
    /// both modes now and then
    fn demo_keys(n: usize) -> HeldKeys {
        let mut names = Vec::new();
        names.push(if (n / 120) % 2 == 0 { "ArrowRight" } else { "ArrowLeft" });
        if n % 45 < 3 {
            names.push(" ");
        }
        if (200..260).contains(&n) {
            names.push("d");
        }
        if n % 300 == 150 {
            names.push("t");
        }
        names.into_iter().collect()
    }

    pub fn run(seed: u64, frames: usize) -> Summary {
        let mut game = Game::new(seed, Tuning::load());
        let mut host = ScriptedHost::new((0..frames).map(demo_keys).collect());

        while host.remaining() > 0 {
            game.run_frame(&mut host);
        }

        let stats = game.stats().clone();
        log::info!(
            "Session over: {} frames, {} bones, {} hits",
            stats.frames,
            stats.bones_collected,
            stats.hits
        );

        let frame = host.last_frame();
        Summary {
            seed,
            stats,
            final_score: game.state().score,
            hud_text: frame.map(|f| f.hud_text.clone()).unwrap_or_default(),
            message: frame.and_then(|f| f.message.clone()),
            draw_commands: frame.map_or(0, |f| f.commands.len()),
        }
    }
}
