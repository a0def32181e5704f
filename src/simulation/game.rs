//! The simulation: owns every snake and food item and runs the per-tick pipeline.
//!
//! One tick is:
//! 1. Update every snake in collection order, each against a [`SegmentIndex`]
//!    of the segments as they stand when it thinks
//! 2. Resolve collisions (food, then walls and other snakes)
//! 3. Top food back up to the floor
//! 4. Refresh the published [`AgentStats`]

use super::canvas::Canvas;
use super::error::SimulationError;
use super::event_log::{EventKind, EventLog};
use super::food::Food;
use super::params::Params;
use super::snake::Snake;
use super::spatial::SegmentIndex;
use super::stats::AgentStats;
use super::vector::Vector2D;

/// Read-only view of the world handed to a snake while it thinks.
///
/// This is the only channel through which a snake observes food, other
/// snakes and the play-area bounds.
#[derive(Clone, Copy)]
pub struct WorldView<'a> {
    /// Current food items.
    pub foods: &'a [Food],
    /// All snakes' segments as of this think.
    pub segments: &'a SegmentIndex,
    /// Play-area width.
    pub width: f32,
    /// Play-area height.
    pub height: f32,
}

impl<'a> WorldView<'a> {
    /// Creates a view over the given food and segment index.
    pub fn new(foods: &'a [Food], segments: &'a SegmentIndex, width: f32, height: f32) -> Self {
        Self {
            foods,
            segments,
            width,
            height,
        }
    }

    /// Returns `true` if `point` is within the wall danger margin of an edge,
    /// or within the danger radius of a segment belonging to a snake other than `owner`.
    pub fn is_dangerous(&self, point: Vector2D, owner: usize, params: &Params) -> bool {
        let margin = params.wall_danger_margin;
        let near_wall = point.x < margin
            || point.x > self.width - margin
            || point.y < margin
            || point.y > self.height - margin;

        near_wall
            || self
                .segments
                .any_foreign_within(point, params.agent_danger_radius, owner)
    }
}

/// The main simulation state.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Parameters the simulation was created with.
    pub params: Params,
    /// All snakes; a snake's `id` is its index here.
    pub snakes: Vec<Snake>,
    /// Food items currently on the play area.
    pub foods: Vec<Food>,
    /// Stats as of the end of the last tick.
    pub stats: Vec<AgentStats>,
    /// Recent meals and deaths.
    pub events: EventLog,
    /// Total simulated time in milliseconds.
    pub time: f64,
    /// Number of completed ticks.
    pub ticks: u64,
}

impl Simulation {
    /// Creates a simulation with randomly placed snakes and an initial food pool.
    pub fn new(params: Params) -> Result<Self, SimulationError> {
        params.validate()?;

        let snakes = (0..params.agent_count)
            .map(|id| Snake::new(id, params.color_for(id), None, &params))
            .collect();
        let foods = (0..params.food_floor)
            .map(|_| Food::new_random(&params))
            .collect();

        log::info!(
            "starting simulation: {} snakes, {} food, {}x{} arena",
            params.agent_count,
            params.food_floor,
            params.width,
            params.height
        );

        let mut simulation = Self {
            events: EventLog::new(params.event_log_size),
            params,
            snakes,
            foods,
            stats: Vec::new(),
            time: 0.0,
            ticks: 0,
        };
        simulation.refresh_stats();
        Ok(simulation)
    }

    /// Advances the simulation by `dt` milliseconds.
    ///
    /// Negative or non-finite deltas are treated as zero.
    pub fn update(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.time += f64::from(dt);
        self.ticks += 1;

        // Later snakes see where earlier ones moved this tick.
        for i in 0..self.snakes.len() {
            let index = SegmentIndex::build(&self.snakes);
            let world = WorldView::new(&self.foods, &index, self.params.width, self.params.height);
            self.snakes[i].update(dt, &world, &self.params);
        }

        self.resolve_collisions();
        self.replenish_food();
        self.refresh_stats();
    }

    /// Runs one collision pass over the current positions.
    ///
    /// Food is handed out first, snake by snake in collection order, so the
    /// earlier snake wins a contested item and one snake may eat several.
    /// Wall and snake deaths are then decided together against the
    /// post-meal positions and applied at once, so two snakes touching each
    /// other both reset.
    pub fn resolve_collisions(&mut self) {
        self.consume_food();
        self.resolve_deaths();
    }

    fn consume_food(&mut self) {
        let pickup_radius = self.params.pickup_radius;

        for snake in &mut self.snakes {
            let head = snake.head();
            let before = self.foods.len();
            self.foods.retain(|food| {
                let eaten = food.position.distance(head) < pickup_radius;
                !eaten
            });

            for _ in 0..before - self.foods.len() {
                snake.grow(&self.params);
                self.events.log(
                    self.time,
                    format!("Snake {} ate (score {})", snake.id + 1, snake.score()),
                    EventKind::Food,
                );
            }
        }
    }

    fn resolve_deaths(&mut self) {
        let (width, height) = self.dimensions();

        let deaths: Vec<(usize, EventKind, String)> = self
            .snakes
            .iter()
            .filter_map(|snake| {
                if snake.check_wall_collision(width, height) {
                    return Some((
                        snake.id,
                        EventKind::Wall,
                        format!("Snake {} hit the wall", snake.id + 1),
                    ));
                }
                self.snakes
                    .iter()
                    .find(|other| {
                        other.id != snake.id && snake.check_snake_collision(other, &self.params)
                    })
                    .map(|other| {
                        (
                            snake.id,
                            EventKind::Collision,
                            format!("Snake {} ran into snake {}", snake.id + 1, other.id + 1),
                        )
                    })
            })
            .collect();

        for (id, kind, description) in deaths {
            let snake = &mut self.snakes[id];
            log::debug!(
                "snake {} died at length {} with score {}",
                id + 1,
                snake.len(),
                snake.score()
            );
            snake.reset(None, &self.params);
            self.events.log(self.time, description, kind);
        }
    }

    /// Adds random food until the floor is reached.
    fn replenish_food(&mut self) {
        while self.foods.len() < self.params.food_floor {
            self.foods.push(Food::new_random(&self.params));
        }
    }

    fn refresh_stats(&mut self) {
        self.stats.clear();
        self.stats.extend(self.snakes.iter().map(AgentStats::of));
    }

    /// Clears the surface, then draws food, then snakes.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        let (width, height) = (canvas.width(), canvas.height());
        canvas.fill_rect(0.0, 0.0, width, height, self.params.background_color);

        for food in &self.foods {
            food.render(canvas, &self.params);
        }
        for snake in &self.snakes {
            snake.render(canvas, &self.params);
        }
    }

    /// Current food items.
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    /// All snakes.
    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    /// Play-area width and height.
    pub fn dimensions(&self) -> (f32, f32) {
        (self.params.width, self.params.height)
    }

    /// Stats as of the end of the last tick.
    pub fn stats(&self) -> &[AgentStats] {
        &self.stats
    }
}
