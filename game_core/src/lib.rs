pub mod components;
pub mod config;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one frame of the deterministic Pong simulation.
///
/// The frame delta is clamped to `Params::MAX_DT` so a stalled tab cannot
/// produce one huge unstable step, then consumed in fixed micro-steps.
/// Deterministic except for the random serve angle after a point.
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    input: &InputSnapshot,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let clamped_dt = time.dt.min(Params::MAX_DT);

    // Events accumulate across micro-steps, cleared once per frame.
    events.clear();

    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        // 1. Apply the frame's input snapshot to the human paddle
        apply_input(world, input);

        // 2. Move paddles
        move_paddles(world, step_dt, config);
        track_ball(world, step_dt, config);

        // 3. Move ball
        move_ball(world, step_dt);

        // 4. Resolve collisions (walls before paddles)
        check_collisions(world, config, events);

        // 5. Scoring (ball exited the stage)
        check_scoring(world, config, score, events, rng);
    }

    time.now += clamped_dt;
}

/// Spawn the human paddle
pub fn create_player_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Spawn the tracking opponent's paddle
pub fn create_cpu_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), CpuPaddle))
}

/// Spawn the ball
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// (Re)populate the world with the four fixed entities: player on the left,
/// opponent on the right, ball resting at center. Used at start and reset.
pub fn setup_world(world: &mut World, config: &Config) {
    world.clear();
    let center_y = config.stage_height / 2.0;
    create_player_paddle(world, Side::Left, center_y);
    create_cpu_paddle(world, Side::Right, center_y);
    create_ball(world, config.ball_spawn(), glam::Vec2::ZERO);
}
