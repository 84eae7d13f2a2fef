//! Client application and wasm bindings
//!
//! Owns the simulation state and drives it from the page's
//! requestAnimationFrame callback. The host page wires its buttons and
//! keyboard listeners to the exported functions and provides two text
//! elements for the score.

use std::cell::RefCell;

use hecs::World;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use game_core::{
    setup_world, step, Ball, Config, Events, GameRng, InputSnapshot, Score, Time,
};

use crate::fsm::{GameAction, GameFsm, GamePhase};
use crate::input;
use crate::renderer::Renderer;

const LEFT_SCORE_ID: &str = "playerScore";
const RIGHT_SCORE_ID: &str = "aiScore";

struct App {
    world: World,
    time: Time,
    config: Config,
    score: Score,
    events: Events,
    rng: GameRng,
    input: InputSnapshot,
    fsm: GameFsm,
    renderer: Renderer,
    last_frame_ms: Option<f64>,
}

impl App {
    fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let config = Config::new();
        let mut world = World::new();
        setup_world(&mut world, &config);
        let renderer = Renderer::new(&canvas)?;

        Ok(Self {
            world,
            time: Time::default(),
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::from_entropy(),
            input: InputSnapshot::new(),
            fsm: GameFsm::new(),
            renderer,
            last_frame_ms: None,
        })
    }

    /// One animation frame: step when running, then render.
    fn frame(&mut self, now_ms: f64) -> Result<(), JsValue> {
        let dt = match self.last_frame_ms {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);

        if self.fsm.is_running() && dt > 0.0 {
            self.time.dt = dt;
            step(
                &mut self.world,
                &mut self.time,
                &self.config,
                &self.input,
                &mut self.score,
                &mut self.events,
                &mut self.rng,
            );
            if self.events.left_scored || self.events.right_scored {
                self.update_score_display();
            }
        }

        self.renderer.draw(&self.world, &self.config)
    }

    fn start(&mut self) {
        match self.fsm.phase() {
            GamePhase::Idle => {
                if self.fsm.transition(GameAction::Start) {
                    setup_world(&mut self.world, &self.config);
                    self.score.reset();
                    self.serve_opening_ball();
                    self.update_score_display();
                    self.last_frame_ms = None;
                }
            }
            // Start while paused behaves like resume, as in the original.
            GamePhase::Paused => {
                self.fsm.transition(GameAction::Resume);
            }
            GamePhase::Running => {}
        }
    }

    fn toggle_pause(&mut self) -> bool {
        match self.fsm.phase() {
            GamePhase::Running => self.fsm.transition(GameAction::Pause),
            GamePhase::Paused => self.fsm.transition(GameAction::Resume),
            GamePhase::Idle => false,
        }
    }

    fn reset(&mut self) -> Result<(), JsValue> {
        self.fsm.transition(GameAction::Reset);
        setup_world(&mut self.world, &self.config);
        self.score.reset();
        self.input = InputSnapshot::new();
        self.last_frame_ms = None;
        self.update_score_display();
        // Show the fresh stage even though stepping has stopped.
        self.renderer.draw(&self.world, &self.config)
    }

    /// Opening serve: random angle, random side.
    fn serve_opening_ball(&mut self) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.serve(&self.config, None, &mut self.rng);
        }
    }

    fn key_down(&mut self, key: &str) {
        if input::is_pause_key(key) {
            self.toggle_pause();
        } else {
            self.input.dir = input::handle_key_down(key, self.input.dir);
        }
    }

    fn key_up(&mut self, key: &str) {
        self.input.dir = input::handle_key_up(key, self.input.dir);
    }

    fn update_score_display(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        for (id, value) in [
            (LEFT_SCORE_ID, self.score.left),
            (RIGHT_SCORE_ID, self.score.right),
        ] {
            if let Some(element) = document.get_element_by_id(id) {
                element.set_text_content(Some(&value.to_string()));
            }
        }
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn with_app<R>(f: impl FnOnce(&mut App) -> Result<R, JsValue>) -> Result<R, JsValue> {
    APP.with(|slot| {
        let mut slot = slot.borrow_mut();
        let app = slot
            .as_mut()
            .ok_or_else(|| JsValue::from_str("Client not initialized"))?;
        f(app)
    })
}

/// Initialize the client against a canvas and render the idle stage.
#[wasm_bindgen]
pub fn init(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let app = App::new(canvas)?;
    app.update_score_display();
    app.renderer.draw(&app.world, &app.config)?;
    APP.with(|slot| slot.replace(Some(app)));
    web_sys::console::log_1(&"pong client initialized".into());
    Ok(())
}

/// Drive one frame; `now_ms` is the requestAnimationFrame timestamp.
#[wasm_bindgen]
pub fn frame(now_ms: f64) -> Result<(), JsValue> {
    with_app(|app| app.frame(now_ms))
}

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    with_app(|app| {
        app.start();
        Ok(())
    })
}

/// Toggle pause; returns whether the game is now paused.
#[wasm_bindgen]
pub fn toggle_pause() -> Result<bool, JsValue> {
    with_app(|app| {
        app.toggle_pause();
        Ok(app.fsm.phase() == GamePhase::Paused)
    })
}

#[wasm_bindgen]
pub fn reset_game() -> Result<(), JsValue> {
    with_app(|app| app.reset())
}

#[wasm_bindgen]
pub fn key_down(key: &str) -> Result<(), JsValue> {
    with_app(|app| {
        app.key_down(key);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn key_up(key: &str) -> Result<(), JsValue> {
    with_app(|app| {
        app.key_up(key);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn is_running() -> Result<bool, JsValue> {
    with_app(|app| Ok(app.fsm.is_running()))
}
