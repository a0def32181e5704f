//! # Snake Arena - Multi-Agent Snake Simulation
//!
//! Several autonomous snakes move continuously on a bounded plane, steer
//! towards food, grow when they eat, and reset when they hit a wall or
//! another snake.
//!
//! ## Features
//!
//! - Reactive steering with look-ahead danger checks
//! - Continuous-time movement and growth by tail retention
//! - Food, wall and snake-vs-snake collision resolution
//! - Rendering through an abstract [`simulation::canvas::Canvas`]
//! - JSON-configurable parameters
//!
//! ## Core Modules
//!
//! - [`simulation::snake`] - Snake behavior and state
//! - [`simulation::game`] - Main simulation logic
//! - [`simulation::food`] - Food items for snakes
//! - [`simulation::clock`] - Frame-driven tick source

/// Core simulation logic and data structures.
pub mod simulation {
    /// Drawing surface abstraction.
    pub mod canvas;
    /// Timestamp-to-delta conversion and the frame loop body.
    pub mod clock;
    /// Configuration errors.
    pub mod error;
    /// Recent meals and deaths for display.
    pub mod event_log;
    /// Food items that snakes can eat.
    pub mod food;
    /// The simulation and the world view snakes think against.
    pub mod game;
    /// Simulation parameters.
    pub mod params;
    /// Snake behavior, state, and lifecycle.
    pub mod snake;
    /// KD-tree snapshot of snake segments.
    pub mod spatial;
    /// Per-snake stats published each tick.
    pub mod stats;
    /// 2D vector math.
    pub mod vector;
}
