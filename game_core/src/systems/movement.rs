use hecs::World;

use crate::{Ball, Config, Paddle, PaddleIntent};

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, dt: f32, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.y += intent.dir as f32 * config.paddle_speed * dt;
            paddle.y = config.clamp_paddle_y(paddle.y);
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, dt: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * dt;
    }
}
