use game_core::*;
use glam::Vec2;
use hecs::World;

struct Harness {
    world: World,
    time: Time,
    config: Config,
    input: InputSnapshot,
    score: Score,
    events: Events,
    rng: GameRng,
}

impl Harness {
    fn new() -> Self {
        Self {
            world: World::new(),
            time: Time::default(),
            config: Config::new(),
            input: InputSnapshot::new(),
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(12345),
        }
    }

    fn step_frame(&mut self) {
        self.time.dt = 1.0 / 60.0;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &self.input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
    }

    fn ball(&self) -> Ball {
        let mut query = self.world.query::<&Ball>();
        let (_e, ball) = query.iter().next().expect("ball exists");
        *ball
    }
}

#[test]
fn test_serve_reaches_paddle_and_reverses() {
    let mut h = Harness::new();
    setup_world(&mut h.world, &h.config);

    // Pin the serve: straight right at base speed toward the CPU paddle.
    for (_e, ball) in h.world.query_mut::<&mut Ball>() {
        ball.serve_at(&h.config, Side::Right, 0.0);
    }
    let ball = h.ball();
    assert_eq!(ball.vel, Vec2::new(h.config.ball_speed_base, 0.0));

    // Integrate until the ball meets the right paddle's center.
    let mut hit = false;
    for _ in 0..600 {
        h.step_frame();
        if h.events.ball_hit_paddle {
            hit = true;
            break;
        }
    }
    assert!(hit, "Ball should reach the right paddle");

    let ball = h.ball();
    let expected = h.config.ball_speed_base + h.config.ball_speed_increment;
    assert!(ball.vel.x < 0.0, "Direction reversed after the hit");
    assert!(
        (ball.speed - expected).abs() < 1e-3,
        "Speed ramped by the increment, got {}",
        ball.speed
    );
    assert!(
        ball.vel.y.abs() < 1.0,
        "Center hit keeps the ball nearly level, vy {}",
        ball.vel.y
    );
}

#[test]
fn test_ball_out_right_scores_for_left() {
    let mut h = Harness::new();
    // Only the player paddle; nothing guards the right edge.
    create_player_paddle(&mut h.world, Side::Left, 250.0);
    create_ball(
        &mut h.world,
        Vec2::new(h.config.stage_width - 1.0, 250.0),
        Vec2::new(h.config.ball_speed_base, 0.0),
    );

    h.step_frame();

    assert_eq!(h.score.left, 1, "Left side scores when the ball exits right");
    assert_eq!(h.score.right, 0);
    assert!(h.events.left_scored);

    let ball = h.ball();
    assert_eq!(ball.speed, h.config.ball_speed_base);
    // Re-served from center at most one frame of travel ago.
    let drift = (ball.pos - h.config.ball_spawn()).length();
    assert!(
        drift <= h.config.ball_speed_base * Params::MAX_DT + 1e-3,
        "Ball re-centered on serve, drift {}",
        drift
    );
}

#[test]
fn test_large_frame_delta_is_clamped() {
    let mut h = Harness::new();
    setup_world(&mut h.world, &h.config);
    for (_e, ball) in h.world.query_mut::<&mut Ball>() {
        ball.serve_at(&h.config, Side::Right, 0.0);
    }
    let start_x = h.ball().pos.x;

    // A two-second stall (tab backgrounded) must not advance two seconds.
    h.time.dt = 2.0;
    step(
        &mut h.world,
        &mut h.time,
        &h.config,
        &h.input,
        &mut h.score,
        &mut h.events,
        &mut h.rng,
    );

    let travelled = h.ball().pos.x - start_x;
    assert!(
        travelled <= h.config.ball_speed_base * Params::MAX_DT + 1e-3,
        "Clamped step travelled {}",
        travelled
    );
    assert!((h.time.now - Params::MAX_DT).abs() < 1e-6);
}

#[test]
fn test_invariants_hold_over_long_rally() {
    let mut h = Harness::new();
    setup_world(&mut h.world, &h.config);
    for (_e, ball) in h.world.query_mut::<&mut Ball>() {
        ball.serve(&h.config, None, &mut h.rng);
    }

    let half_height = h.config.paddle_height / 2.0;
    for frame in 0..3600 {
        // Wiggle the player paddle so both entities keep moving.
        h.input.dir = match (frame / 40) % 3 {
            0 => -1,
            1 => 1,
            _ => 0,
        };
        h.step_frame();

        let ball = h.ball();
        assert!(
            (ball.speed - ball.vel.length()).abs() < 1e-2,
            "Frame {}: speed {} out of sync with |vel| {}",
            frame,
            ball.speed,
            ball.vel.length()
        );
        assert!(
            ball.speed <= h.config.ball_speed_max + 1e-3,
            "Frame {}: speed {} above max",
            frame,
            ball.speed
        );
        assert!(
            ball.pos.y >= 0.0 && ball.pos.y <= h.config.stage_height,
            "Frame {}: ball y {} escaped the stage",
            frame,
            ball.pos.y
        );

        for (_e, paddle) in h.world.query::<&Paddle>().iter() {
            assert!(
                paddle.y >= half_height && paddle.y <= h.config.stage_height - half_height,
                "Frame {}: paddle y {} escaped the stage",
                frame,
                paddle.y
            );
        }
    }

    let points = h.score.left + h.score.right;
    assert!(points > 0, "A minute of play should produce at least one point");
}
