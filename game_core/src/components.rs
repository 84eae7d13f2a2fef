use glam::Vec2;

use crate::{Config, GameRng};

/// Which half of the stage a paddle defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Unit x direction pointing away from this side's paddle, into the field.
    pub fn outward_x(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    /// Unit x direction pointing from the center toward this side.
    pub fn toward_x(self) -> f32 {
        -self.outward_x()
    }
}

/// Paddle component. X is fixed per side (see `Config::paddle_x`); only the
/// vertical center moves, clamped to the stage.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Movement intent for the human paddle.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Marker for the paddle driven by the tracking opponent.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuPaddle;

/// The pong ball. `speed` is the scalar magnitude of `vel`; the two are kept
/// in sync by every operation that touches the velocity.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            speed: vel.length(),
        }
    }

    /// Place the ball at the stage center with base speed and an exact launch
    /// angle. The random serve funnels through here so tests can pin the angle.
    pub fn serve_at(&mut self, config: &Config, toward: Side, angle: f32) {
        self.pos = config.ball_spawn();
        self.speed = config.ball_speed_base;
        self.vel = Vec2::new(
            angle.cos() * self.speed * toward.toward_x(),
            angle.sin() * self.speed,
        );
    }

    /// Re-serve with a random launch angle within the configured spread.
    /// `toward` is explicit after a point; the opening serve picks a side at
    /// random.
    pub fn serve(&mut self, config: &Config, toward: Option<Side>, rng: &mut GameRng) {
        use rand::Rng;
        let spread = config.serve_angle_spread;
        let angle = rng.0.gen_range(-spread..spread);
        let toward = toward.unwrap_or_else(|| {
            if rng.0.gen_bool(0.5) {
                Side::Right
            } else {
                Side::Left
            }
        });
        self.serve_at(config, toward, angle);
    }
}
