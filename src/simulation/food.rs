//! Food pellets that snakes eat to grow.

use serde::{Deserialize, Serialize};

use super::canvas::Canvas;
use super::params::Params;
use super::vector::Vector2D;

/// A food pellet. Its lifetime is owned by the simulation's food collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// Position on the play area.
    pub position: Vector2D,
}

impl Food {
    /// Creates a food item at `position`.
    pub fn new(position: Vector2D) -> Self {
        Self { position }
    }

    /// Creates a food item at a random position inset by `params.food_margin`.
    pub fn new_random(params: &Params) -> Self {
        Self::new(Vector2D::random_in(
            params.width,
            params.height,
            params.food_margin,
        ))
    }

    /// Draws the pellet as a filled circle.
    pub fn render(&self, canvas: &mut dyn Canvas, params: &Params) {
        canvas.fill_circle(self.position, params.food_radius, params.food_color);
    }
}
