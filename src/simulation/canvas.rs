//! Drawing surface the simulation renders into.
//!
//! The core only ever clears rectangles and fills circles, so any 2D backend
//! (a window, an image buffer, a test recorder) can sit behind this trait.

use super::params::Color;
use super::vector::Vector2D;

/// A 2D drawing surface in play-area coordinates.
pub trait Canvas {
    /// Width of the surface.
    fn width(&self) -> f32;

    /// Height of the surface.
    fn height(&self) -> f32;

    /// Fills an axis-aligned rectangle with its top-left corner at `(x, y)`.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Fills a circle.
    fn fill_circle(&mut self, center: Vector2D, radius: f32, color: Color);
}
