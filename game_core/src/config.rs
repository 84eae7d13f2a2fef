use glam::Vec2;

use crate::Side;

/// Game tuning parameters. Distances are in stage pixels, rates per second.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Stage
    pub const STAGE_WIDTH: f32 = 800.0;
    pub const STAGE_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_SPEED: f32 = 360.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // gap between stage edge and paddle face

    // Tracking opponent
    pub const CPU_GAIN: f32 = 7.2; // proportional rate per unit of offset, 1/s
    pub const CPU_MAX_SPEED: f32 = 270.0;

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED_BASE: f32 = 240.0;
    pub const BALL_SPEED_INCREMENT: f32 = 12.0; // added on each paddle hit
    pub const BALL_SPEED_MAX: f32 = 720.0;
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3; // 60 deg
    pub const SERVE_ANGLE_SPREAD: f32 = std::f32::consts::FRAC_PI_8; // +/- 22.5 deg

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.04; // clamp frame deltas after tab stalls
}

/// Runtime configuration, defaulting from `Params`.
#[derive(Debug, Clone)]
pub struct Config {
    pub stage_width: f32,
    pub stage_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub cpu_gain: f32,
    pub cpu_max_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_base: f32,
    pub ball_speed_increment: f32,
    pub ball_speed_max: f32,
    pub max_bounce_angle: f32,
    pub serve_angle_spread: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stage_width: Params::STAGE_WIDTH,
            stage_height: Params::STAGE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            cpu_gain: Params::CPU_GAIN,
            cpu_max_speed: Params::CPU_MAX_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_base: Params::BALL_SPEED_BASE,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            ball_speed_max: Params::BALL_SPEED_MAX,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            serve_angle_spread: Params::SERVE_ANGLE_SPREAD,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position of a paddle's center.
    pub fn paddle_x(&self, side: Side) -> f32 {
        let offset = self.paddle_margin + self.paddle_width / 2.0;
        match side {
            Side::Left => offset,
            Side::Right => self.stage_width - offset,
        }
    }

    /// Clamp a paddle center so the whole paddle stays on the stage.
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, self.stage_height - half_height)
    }

    /// Where the ball is (re)served from.
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.stage_width / 2.0, self.stage_height / 2.0)
    }
}
