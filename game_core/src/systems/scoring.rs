use hecs::World;

use crate::{Ball, Config, Events, GameRng, Score, Side};

/// Check if the ball's leading edge left the stage. The conceding side's
/// opponent scores and the ball is re-served toward the side that just
/// scored, so a concession on the left launches the next serve rightward.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let radius = config.ball_radius;

        if ball.pos.x - radius < 0.0 {
            score.increment_right();
            events.right_scored = true;
            ball.serve(config, Some(Side::Right), rng);
        } else if ball.pos.x + radius > config.stage_width {
            score.increment_left();
            events.left_scored = true;
            ball.serve(config, Some(Side::Left), rng);
        }
    }
}
