#![allow(dead_code)]

use snake_arena::simulation::canvas::Canvas;
use snake_arena::simulation::params::{Color, Params};
use snake_arena::simulation::vector::Vector2D;

/// One primitive drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Circle {
        center: Vector2D,
        radius: f32,
        color: Color,
    },
}

/// Canvas that records every call instead of drawing.
pub struct RecordingCanvas {
    pub width: f32,
    pub height: f32,
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn circles(&self) -> Vec<(Vector2D, f32, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::Circle {
                    center,
                    radius,
                    color,
                } => Some((center, radius, color)),
                DrawOp::Rect { .. } => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vector2D, radius: f32, color: Color) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }
}

pub fn create_test_params() -> Params {
    Params::default()
}

pub fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-4, "expected {} to be close to {}", a, b);
}

pub fn assert_vec_close(a: Vector2D, b: Vector2D) {
    assert!(
        a.distance(b) < 1e-4,
        "expected {:?} to be close to {:?}",
        a,
        b
    );
}
