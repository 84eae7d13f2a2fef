use hecs::World;

use crate::{Ball, Config, Events, Paddle};

/// Check ball collisions with walls and paddles. Walls are resolved first so
/// a corner hit cannot carry the ball through a paddle in the same step.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let snapshot = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| *ball)
    };

    let Some(mut ball) = snapshot else {
        return; // No ball in world
    };

    let radius = config.ball_radius;

    // Top/bottom walls: clamp to the boundary and flip vy. Speed unchanged.
    if ball.pos.y - radius < 0.0 {
        ball.pos.y = radius;
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    } else if ball.pos.y + radius > config.stage_height {
        ball.pos.y = config.stage_height - radius;
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }

    let paddles: Vec<(crate::Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();

    let half_width = config.paddle_width / 2.0;
    let half_height = config.paddle_height / 2.0;

    for (side, paddle_y) in paddles {
        let paddle_x = config.paddle_x(side);

        // AABB test: ball's bounding square against the paddle rectangle.
        let dx = (ball.pos.x - paddle_x).abs();
        let dy = (ball.pos.y - paddle_y).abs();
        if dx >= half_width + radius || dy >= half_height + radius {
            continue;
        }

        // Only deflect a ball moving into the paddle.
        let outward = side.outward_x();
        if ball.vel.x * outward >= 0.0 {
            continue;
        }

        // Push the ball just outside the paddle face so the hit cannot
        // re-trigger next step.
        ball.pos.x = paddle_x + (half_width + radius) * outward;

        let relative_offset = ((ball.pos.y - paddle_y) / half_height).clamp(-1.0, 1.0);
        let bounce_angle = relative_offset * config.max_bounce_angle;

        ball.speed = (ball.speed + config.ball_speed_increment).min(config.ball_speed_max);
        ball.vel.x = bounce_angle.cos() * ball.speed * outward;
        ball.vel.y = bounce_angle.sin() * ball.speed;

        events.ball_hit_paddle = true;
        break;
    }

    for (_entity, b) in world.query_mut::<&mut Ball>() {
        *b = ball;
    }
}
