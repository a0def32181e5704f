#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{RecordingCanvas, assert_close, assert_vec_close, create_test_params};
use snake_arena::simulation::food::Food;
use snake_arena::simulation::game::WorldView;
use snake_arena::simulation::params::{Color, Params};
use snake_arena::simulation::snake::Snake;
use snake_arena::simulation::spatial::SegmentIndex;
use snake_arena::simulation::vector::Vector2D;

const RED: Color = Color::rgb(255, 0, 0);
const BLUE: Color = Color::rgb(0, 0, 255);

fn snake_at(id: usize, x: f32, y: f32, params: &Params) -> Snake {
    Snake::new(id, RED, Some(Vector2D::new(x, y)), params)
}

/// Runs `think` for `snakes[idx]` against the given food, with every snake in the index.
fn think(snakes: &mut [Snake], idx: usize, foods: &[Food], params: &Params) {
    let index = SegmentIndex::build(snakes);
    let world = WorldView::new(foods, &index, params.width, params.height);
    snakes[idx].think(&world, 16.0, params);
}

fn step(snake: &mut Snake, dt: f32, params: &Params) {
    let index = SegmentIndex::build(std::slice::from_ref(snake));
    let world = WorldView::new(&[], &index, params.width, params.height);
    snake.update(dt, &world, params);
}

#[test]
fn test_reset_state() {
    let params = create_test_params();
    let start = Vector2D::new(123.0, 456.0);
    let mut snake = Snake::new(0, RED, Some(start), &params);
    snake.grow(&params);

    snake.reset(Some(start), &params);

    assert_eq!(snake.len(), 5);
    assert!(snake.segments().all(|s| s == start));
    assert_eq!(snake.score(), 0);
    assert_eq!(snake.growing(), 0);
    assert_close(snake.velocity().length(), params.speed);
    assert_vec_close(snake.velocity().normalize(), Vector2D::new(1.0, 0.0));
}

#[test]
fn test_reset_random_position_within_spawn_margin() {
    let params = create_test_params();
    let mut snake = snake_at(0, 400.0, 300.0, &params);

    for _ in 0..50 {
        snake.reset(None, &params);
        let head = snake.head();
        assert!(head.x >= params.spawn_margin && head.x <= params.width - params.spawn_margin);
        assert!(head.y >= params.spawn_margin && head.y <= params.height - params.spawn_margin);
        assert_eq!(snake.len(), params.initial_length);
    }
}

#[test]
fn test_update_moves_head_along_velocity() {
    let params = create_test_params();
    let mut snake = snake_at(0, 400.0, 300.0, &params);

    step(&mut snake, 16.0, &params);

    // No food: heading stays +x at 0.2 units/ms
    assert_vec_close(snake.head(), Vector2D::new(403.2, 300.0));
    assert_eq!(snake.len(), 5);
}

#[test]
fn test_growth_adds_one_segment_per_credited_tick() {
    let params = create_test_params();
    let mut snake = snake_at(0, 400.0, 300.0, &params);
    snake.grow(&params);

    let before = snake.len();
    for _ in 0..3 {
        step(&mut snake, 10.0, &params);
    }

    assert_eq!(snake.len(), before + 3);
    assert_eq!(snake.growing(), 0);

    // Credit exhausted: length holds
    step(&mut snake, 10.0, &params);
    assert_eq!(snake.len(), before + 3);
}

#[test]
fn test_grow_credits_score_and_growth() {
    let params = create_test_params();
    let mut snake = snake_at(0, 400.0, 300.0, &params);

    snake.grow(&params);
    assert_eq!(snake.score(), 10);
    assert_eq!(snake.growing(), 3);

    snake.grow(&params);
    assert_eq!(snake.score(), 20);
    assert_eq!(snake.growing(), 6);
}

#[test]
fn test_think_targets_nearest_food_when_safe() {
    let params = create_test_params();
    let mut snakes = vec![snake_at(0, 400.0, 300.0, &params)];
    let foods = [
        Food::new(Vector2D::new(700.0, 300.0)),
        Food::new(Vector2D::new(400.0, 400.0)),
    ];

    think(&mut snakes, 0, &foods, &params);

    assert_vec_close(snakes[0].target_direction(), Vector2D::new(0.0, 1.0));
    // Turned 10% of the way towards the target, at full speed
    let expected = Vector2D::new(0.18, 0.1).normalize() * params.speed;
    assert_vec_close(snakes[0].velocity(), expected);
}

#[test]
fn test_think_ties_go_to_first_food() {
    let params = create_test_params();
    let mut snakes = vec![snake_at(0, 400.0, 300.0, &params)];
    let foods = [
        Food::new(Vector2D::new(400.0, 200.0)),
        Food::new(Vector2D::new(400.0, 400.0)),
    ];

    think(&mut snakes, 0, &foods, &params);

    assert_vec_close(snakes[0].target_direction(), Vector2D::new(0.0, -1.0));
}

#[test]
fn test_think_without_food_keeps_heading() {
    let params = create_test_params();
    let mut snakes = vec![snake_at(0, 400.0, 300.0, &params)];

    think(&mut snakes, 0, &[], &params);

    assert_vec_close(snakes[0].target_direction(), Vector2D::new(1.0, 0.0));
    assert_vec_close(snakes[0].velocity(), Vector2D::new(params.speed, 0.0));
}

#[test]
fn test_think_swerves_near_wall() {
    let params = create_test_params();
    let mut snakes = vec![snake_at(0, 15.0, 300.0, &params)];
    // Look-ahead lands at x = -5, inside the wall margin
    let foods = [Food::new(Vector2D::new(5.0, 300.0))];

    for _ in 0..20 {
        think(&mut snakes, 0, &foods, &params);
        assert_close(snakes[0].target_direction().length(), 1.0);
        assert_close(snakes[0].velocity().length(), params.speed);
    }
}

#[test]
fn test_think_swerves_near_other_snake() {
    let params = create_test_params();
    let mut snakes = vec![
        snake_at(0, 400.0, 300.0, &params),
        Snake::new(1, BLUE, Some(Vector2D::new(425.0, 300.0)), &params),
    ];
    // Look-ahead at (420, 300) is 5 units from the other snake
    let foods = [Food::new(Vector2D::new(600.0, 300.0))];

    think(&mut snakes, 0, &foods, &params);

    assert_close(snakes[0].target_direction().length(), 1.0);
}

#[test]
fn test_think_ignores_own_segments() {
    let params = create_test_params();
    let mut snakes = vec![snake_at(0, 400.0, 300.0, &params)];
    // Own segments sit right on the head, which must not count as danger
    let foods = [Food::new(Vector2D::new(400.0, 200.0))];

    think(&mut snakes, 0, &foods, &params);

    assert_vec_close(snakes[0].target_direction(), Vector2D::new(0.0, -1.0));
}

#[test]
fn test_frame_rate_independent_steering() {
    let mut params = create_test_params();
    params.frame_rate_independent_steering = true;

    let mut snakes = vec![snake_at(0, 400.0, 300.0, &params)];
    let foods = [Food::new(Vector2D::new(400.0, 400.0))];
    let index = SegmentIndex::build(&snakes);
    let world = WorldView::new(&foods, &index, params.width, params.height);

    // A zero-length frame does not turn at all
    snakes[0].think(&world, 0.0, &params);
    assert_vec_close(snakes[0].velocity(), Vector2D::new(params.speed, 0.0));

    // One reference frame turns by exactly the configured rate
    snakes[0].think(&world, params.reference_frame_ms, &params);
    let expected = Vector2D::new(0.18, 0.1).normalize() * params.speed;
    assert_vec_close(snakes[0].velocity(), expected);
}

#[test]
fn test_wall_collision() {
    let params = create_test_params();
    let (w, h) = (params.width, params.height);

    assert!(!snake_at(0, 400.0, 300.0, &params).check_wall_collision(w, h));
    assert!(!snake_at(0, 0.0, 0.0, &params).check_wall_collision(w, h));
    assert!(!snake_at(0, w, h, &params).check_wall_collision(w, h));
    assert!(snake_at(0, -0.5, 300.0, &params).check_wall_collision(w, h));
    assert!(snake_at(0, 400.0, h + 0.5, &params).check_wall_collision(w, h));
}

#[test]
fn test_snake_collision() {
    let params = create_test_params();
    let a = snake_at(0, 400.0, 300.0, &params);

    let close = snake_at(1, 411.9, 300.0, &params);
    let touching = snake_at(1, 412.0, 300.0, &params);

    assert!(a.check_snake_collision(&close, &params));
    assert!(!a.check_snake_collision(&touching, &params));
}

#[test]
fn test_render_draws_head_larger() {
    let params = create_test_params();
    let snake = snake_at(0, 100.0, 100.0, &params);
    let mut canvas = RecordingCanvas::new(params.width, params.height);

    snake.render(&mut canvas, &params);

    let circles = canvas.circles();
    assert_eq!(circles.len(), 5);
    assert_eq!(circles[0].1, params.head_radius);
    assert!(circles[1..].iter().all(|c| c.1 == params.body_radius));
    assert!(circles.iter().all(|c| c.2 == RED));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "at least one segment")]
fn test_zero_initial_length_is_rejected() {
    let params = Params {
        initial_length: 0,
        ..create_test_params()
    };
    let _ = snake_at(0, 400.0, 300.0, &params);
}
