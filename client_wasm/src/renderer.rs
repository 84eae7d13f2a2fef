//! Canvas 2D rendering
//!
//! Draws the net, paddles, and ball from the current world state. Pure
//! consumer; nothing here feeds back into the simulation.

use game_core::{Ball, Config, Paddle};
use hecs::World;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const PADDLE_COLOR: &str = "#e6e6e6";
const BALL_COLOR: &str = "#ffffff";
const NET_COLOR: &str = "rgba(255,255,255,0.06)";
const NET_STEP: f64 = 18.0;

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    pub fn draw(&self, world: &World, config: &Config) -> Result<(), JsValue> {
        let width = config.stage_width as f64;
        let height = config.stage_height as f64;
        self.ctx.clear_rect(0.0, 0.0, width, height);

        self.draw_net(width, height);

        self.ctx.set_fill_style_str(PADDLE_COLOR);
        let half_w = (config.paddle_width / 2.0) as f64;
        let half_h = (config.paddle_height / 2.0) as f64;
        for (_entity, paddle) in world.query::<&Paddle>().iter() {
            let x = config.paddle_x(paddle.side) as f64;
            self.ctx.fill_rect(
                x - half_w,
                paddle.y as f64 - half_h,
                config.paddle_width as f64,
                config.paddle_height as f64,
            );
        }

        self.ctx.set_fill_style_str(BALL_COLOR);
        for (_entity, ball) in world.query::<&Ball>().iter() {
            self.ctx.begin_path();
            self.ctx.arc(
                ball.pos.x as f64,
                ball.pos.y as f64,
                config.ball_radius as f64,
                0.0,
                std::f64::consts::TAU,
            )?;
            self.ctx.fill();
        }

        Ok(())
    }

    /// Dashed vertical line down the middle of the stage.
    fn draw_net(&self, width: f64, height: f64) {
        self.ctx.set_stroke_style_str(NET_COLOR);
        self.ctx.set_line_width(2.0);
        let x = width / 2.0;
        let mut y = 10.0;
        while y < height {
            self.ctx.begin_path();
            self.ctx.move_to(x, y);
            self.ctx.line_to(x, y + NET_STEP / 2.0);
            self.ctx.stroke();
            y += NET_STEP;
        }
    }
}
