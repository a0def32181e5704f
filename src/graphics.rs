use macroquad::prelude::*;
use snake_arena::simulation::canvas::Canvas;
use snake_arena::simulation::params::Color as ArenaColor;
use snake_arena::simulation::vector::Vector2D;

/// Maps play-area coordinates onto the window region left of the stats panel.
pub struct ScreenCanvas {
    width: f32,
    height: f32,
    scale: f32,
}

impl ScreenCanvas {
    pub fn new(width: f32, height: f32, panel_width: f32) -> Self {
        let available_w = (screen_width() - panel_width).max(1.0);
        let scale = (available_w / width).min(screen_height() / height);
        Self {
            width,
            height,
            scale,
        }
    }
}

trait ToScreen {
    type Output;
    fn to_screen(&self, scale: f32) -> Self::Output;
}

impl ToScreen for Vector2D {
    type Output = Vec2;
    fn to_screen(&self, scale: f32) -> Vec2 {
        vec2(self.x * scale, self.y * scale)
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, scale: f32) -> f32 {
        self * scale
    }
}

impl ToScreen for ArenaColor {
    type Output = Color;
    fn to_screen(&self, _scale: f32) -> Color {
        Color::from_rgba(self.r, self.g, self.b, 255)
    }
}

impl Canvas for ScreenCanvas {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: ArenaColor) {
        draw_rectangle(
            x.to_screen(self.scale),
            y.to_screen(self.scale),
            width.to_screen(self.scale),
            height.to_screen(self.scale),
            color.to_screen(self.scale),
        );
    }

    fn fill_circle(&mut self, center: Vector2D, radius: f32, color: ArenaColor) {
        let pos = center.to_screen(self.scale);
        draw_circle(
            pos.x,
            pos.y,
            radius.to_screen(self.scale),
            color.to_screen(self.scale),
        );
    }
}
