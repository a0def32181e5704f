//! Snake agents: segment chain, steering, growth and collision tests.
//!
//! A snake never holds references to the rest of the world. Each tick the
//! simulation hands it a [`WorldView`] to read food and other snakes from.

use std::collections::VecDeque;

use super::canvas::Canvas;
use super::food::Food;
use super::game::WorldView;
use super::params::{Color, Params};
use super::vector::Vector2D;

/// An autonomous snake.
///
/// Snakes can:
/// - Steer towards the nearest food, swerving randomly when the path looks dangerous
/// - Grow by one segment per pending growth tick
/// - Die on hitting a wall or another snake, which resets them
#[derive(Debug, Clone)]
pub struct Snake {
    /// Index of this snake in the simulation's collection.
    pub id: usize,
    /// Display color.
    pub color: Color,
    /// Body positions, head first.
    segments: VecDeque<Vector2D>,
    /// Displacement per millisecond; its length is always the configured speed.
    velocity: Vector2D,
    /// Heading the velocity is being steered towards.
    target_direction: Vector2D,
    /// Pending ticks during which the tail is kept.
    growing: u32,
    score: u32,
}

impl Snake {
    /// Creates a snake and resets it to `start`, or to a random position if `None`.
    ///
    /// `params.initial_length` must be at least 1; [`Params::validate`] checks this.
    pub fn new(id: usize, color: Color, start: Option<Vector2D>, params: &Params) -> Self {
        let mut snake = Self {
            id,
            color,
            segments: VecDeque::with_capacity(params.initial_length),
            velocity: Vector2D::ZERO,
            target_direction: Vector2D::ZERO,
            growing: 0,
            score: 0,
        };
        snake.reset(start, params);
        snake
    }

    /// Reinitializes the snake after death or at creation.
    ///
    /// All `initial_length` segments coincide at `start` (or at a random
    /// position inset by `spawn_margin`), the snake faces +x at full speed,
    /// and score and pending growth are cleared.
    pub fn reset(&mut self, start: Option<Vector2D>, params: &Params) {
        debug_assert!(params.initial_length > 0, "snakes need at least one segment");
        let start = start.unwrap_or_else(|| {
            Vector2D::random_in(params.width, params.height, params.spawn_margin)
        });

        self.segments.clear();
        self.segments
            .extend(std::iter::repeat_n(start, params.initial_length));

        self.velocity = Vector2D::new(params.speed, 0.0);
        self.target_direction = Vector2D::new(1.0, 0.0);
        self.growing = 0;
        self.score = 0;
    }

    /// Runs one tick: decide on a heading, then advance the head by `velocity * dt`.
    ///
    /// The tail is dropped unless growth is pending, in which case one growth
    /// tick is spent and the snake ends the tick one segment longer.
    pub fn update(&mut self, dt: f32, world: &WorldView<'_>, params: &Params) {
        self.think(world, dt, params);

        let new_head = self.head() + self.velocity * dt;
        self.segments.push_front(new_head);

        if self.growing > 0 {
            self.growing -= 1;
        } else {
            self.segments.pop_back();
        }
    }

    /// Reactive steering step.
    ///
    /// Heads for the nearest food unless the point `look_ahead` units along
    /// that heading is near a wall or another snake, in which case a random
    /// direction is picked instead. With no food the target is kept. The
    /// velocity then turns a fraction of the way towards the target.
    pub fn think(&mut self, world: &WorldView<'_>, dt: f32, params: &Params) {
        let head = self.head();

        if let Some(food) = nearest_food(world.foods, head) {
            let direction_to_food = (food.position - head).normalize();
            let look_ahead = head + direction_to_food * params.look_ahead;

            self.target_direction = if world.is_dangerous(look_ahead, self.id, params) {
                Vector2D::random_unit()
            } else {
                direction_to_food
            };
        }

        let rate = steering_rate(dt, params);
        self.velocity = self
            .velocity
            .lerp(self.target_direction, rate)
            .normalize()
            * params.speed;
    }

    /// Credits growth and score for one eaten food item.
    pub fn grow(&mut self, params: &Params) {
        self.growing += params.growth_per_food;
        self.score += params.score_per_food;
    }

    /// Returns `true` if the head lies outside `[0, width] x [0, height]`.
    pub fn check_wall_collision(&self, width: f32, height: f32) -> bool {
        let head = self.head();
        head.x < 0.0 || head.x > width || head.y < 0.0 || head.y > height
    }

    /// Returns `true` if this snake's head is within `collision_radius` of any segment of `other`.
    ///
    /// Passing the snake itself always reports a hit; callers compare distinct snakes.
    pub fn check_snake_collision(&self, other: &Snake, params: &Params) -> bool {
        let head = self.head();
        other
            .segments
            .iter()
            .any(|segment| segment.distance(head) < params.collision_radius)
    }

    /// Draws every segment as a filled circle, the head larger than the body.
    pub fn render(&self, canvas: &mut dyn Canvas, params: &Params) {
        for (i, &segment) in self.segments.iter().enumerate() {
            let radius = if i == 0 {
                params.head_radius
            } else {
                params.body_radius
            };
            canvas.fill_circle(segment, radius, self.color);
        }
    }

    /// Position of the head segment.
    pub fn head(&self) -> Vector2D {
        self.segments[0]
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the snake has no segments, which never holds after a reset.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Body positions, head first.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Vector2D> + '_ {
        self.segments.iter().copied()
    }

    /// Current velocity.
    pub fn velocity(&self) -> Vector2D {
        self.velocity
    }

    /// Heading the snake is currently steering towards.
    pub fn target_direction(&self) -> Vector2D {
        self.target_direction
    }

    /// Remaining growth ticks.
    pub fn growing(&self) -> u32 {
        self.growing
    }
}

/// Nearest food to `head`; the first one wins ties.
fn nearest_food(foods: &[Food], head: Vector2D) -> Option<&Food> {
    let mut closest: Option<(f32, &Food)> = None;
    for food in foods {
        let dist = food.position.distance(head);
        if closest.is_none_or(|(best, _)| dist < best) {
            closest = Some((dist, food));
        }
    }
    closest.map(|(_, food)| food)
}

/// Per-tick steering fraction, optionally rescaled to the frame length.
fn steering_rate(dt: f32, params: &Params) -> f32 {
    if params.frame_rate_independent_steering {
        1.0 - (1.0 - params.steering_rate).powf(dt / params.reference_frame_ms)
    } else {
        params.steering_rate
    }
}
