use hecs::World;

use crate::{Ball, Config, CpuPaddle, Paddle};

/// Proportional tracking for the CPU paddle: move toward the ball's y at a
/// rate scaled by the offset, capped at the opponent's max speed. Stateless
/// beyond the paddle's current position.
pub fn track_ball(world: &mut World, dt: f32, config: &Config) {
    let ball_y = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    let Some(ball_y) = ball_y else {
        return; // No ball in world
    };

    for (_entity, (paddle, _cpu)) in world.query_mut::<(&mut Paddle, &CpuPaddle)>() {
        let diff = ball_y - paddle.y;
        let rate = (diff * config.cpu_gain).clamp(-config.cpu_max_speed, config.cpu_max_speed);
        paddle.y = config.clamp_paddle_y(paddle.y + rate * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_cpu_paddle, Side};
    use glam::Vec2;

    #[test]
    fn test_cpu_paddle_moves_toward_ball() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_cpu_paddle(&mut world, Side::Right, 250.0);
        create_ball(&mut world, Vec2::new(400.0, 400.0), Vec2::new(240.0, 0.0));

        track_ball(&mut world, 1.0 / 60.0, &config);

        let y = world.get::<&Paddle>(entity).unwrap().y;
        assert!(y > 250.0, "Paddle should chase a ball below it, got {}", y);
    }

    #[test]
    fn test_cpu_paddle_speed_capped() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_cpu_paddle(&mut world, Side::Right, 250.0);
        // Huge offset so the raw proportional rate far exceeds the cap.
        create_ball(&mut world, Vec2::new(400.0, 10_000.0), Vec2::new(240.0, 0.0));

        let dt = 1.0 / 60.0;
        track_ball(&mut world, dt, &config);

        let y = world.get::<&Paddle>(entity).unwrap().y;
        assert!(
            y - 250.0 <= config.cpu_max_speed * dt + 1e-4,
            "Per-step move {} exceeds the cap",
            y - 250.0
        );
    }

    #[test]
    fn test_cpu_paddle_stays_on_stage() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_cpu_paddle(&mut world, Side::Right, 250.0);
        create_ball(&mut world, Vec2::new(400.0, 0.0), Vec2::new(240.0, 0.0));

        for _ in 0..600 {
            track_ball(&mut world, 1.0 / 60.0, &config);
        }

        let y = world.get::<&Paddle>(entity).unwrap().y;
        assert_eq!(
            y,
            config.paddle_height / 2.0,
            "Paddle rests against the top edge, never past it"
        );
    }

    #[test]
    fn test_no_ball_is_a_no_op() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_cpu_paddle(&mut world, Side::Right, 250.0);

        track_ball(&mut world, 1.0 / 60.0, &config);

        assert_eq!(world.get::<&Paddle>(entity).unwrap().y, 250.0);
    }
}
