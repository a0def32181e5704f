//! Simulation parameters with the reference arena's defaults.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::error::SimulationError;

/// An opaque RGB display color.
///
/// Serialized as a `#RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Creates a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SimulationError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Simulation parameters. Distances are in play-area units, times in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Play-area width.
    pub width: f32,
    /// Play-area height.
    pub height: f32,
    /// Number of snakes created at startup.
    pub agent_count: usize,
    /// Display color per snake, indexed by snake id.
    pub colors: Vec<Color>,
    /// Minimum number of food items present after every tick.
    pub food_floor: usize,
    /// Segment count after a reset.
    pub initial_length: usize,
    /// Movement speed in units per millisecond.
    pub speed: f32,
    /// A head closer than this to a food item eats it.
    pub pickup_radius: f32,
    /// Growth ticks credited per food item.
    pub growth_per_food: u32,
    /// Score awarded per food item.
    pub score_per_food: u32,
    /// Inset from the edges for random snake start positions.
    pub spawn_margin: f32,
    /// Inset from the edges for random food positions.
    pub food_margin: f32,
    /// Distance of the look-ahead point used by the danger check.
    pub look_ahead: f32,
    /// A look-ahead point this close to an edge is dangerous.
    pub wall_danger_margin: f32,
    /// A look-ahead point this close to another snake's segment is dangerous.
    pub agent_danger_radius: f32,
    /// A head closer than this to another snake's segment dies.
    pub collision_radius: f32,
    /// Fraction of the remaining heading error closed per tick.
    pub steering_rate: f32,
    /// Scale the steering rate by the frame delta instead of applying it per tick.
    pub frame_rate_independent_steering: bool,
    /// Frame length the steering rate is calibrated against when scaling is enabled.
    pub reference_frame_ms: f32,
    /// Drawn radius of a snake head.
    pub head_radius: f32,
    /// Drawn radius of a body segment.
    pub body_radius: f32,
    /// Drawn radius of a food item.
    pub food_radius: f32,
    /// Food color.
    pub food_color: Color,
    /// Background color.
    pub background_color: Color,
    /// Number of entries kept in the event log.
    pub event_log_size: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            agent_count: 4,
            colors: vec![
                Color::rgb(0xFF, 0x00, 0x00),
                Color::rgb(0x00, 0xFF, 0x00),
                Color::rgb(0x00, 0x00, 0xFF),
                Color::rgb(0xFF, 0xFF, 0x00),
            ],
            food_floor: 10,
            initial_length: 5,
            speed: 0.2,
            pickup_radius: 15.0,
            growth_per_food: 3,
            score_per_food: 10,
            spawn_margin: 50.0,
            food_margin: 10.0,
            look_ahead: 20.0,
            wall_danger_margin: 10.0,
            agent_danger_radius: 20.0,
            collision_radius: 12.0,
            steering_rate: 0.1,
            frame_rate_independent_steering: false,
            reference_frame_ms: 1000.0 / 60.0,
            head_radius: 15.0,
            body_radius: 12.0,
            food_radius: 8.0,
            food_color: Color::rgb(0xFF, 0x44, 0x44),
            background_color: Color::rgb(0x1A, 0x1A, 0x1A),
            event_log_size: 20,
        }
    }
}

impl Params {
    /// Checks that the parameters describe a playable arena.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let invalid = |msg: &str| Err(SimulationError::InvalidParams(msg.to_string()));

        if !is_positive(self.width) || !is_positive(self.height) {
            return invalid("play area must have positive width and height");
        }
        let min_side = self.width.min(self.height);
        if self.spawn_margin < 0.0 || 2.0 * self.spawn_margin >= min_side {
            return invalid("spawn margin leaves no room to place snakes");
        }
        if self.food_margin < 0.0 || 2.0 * self.food_margin >= min_side {
            return invalid("food margin leaves no room to place food");
        }
        if self.initial_length == 0 {
            return invalid("initial length must be at least 1");
        }
        if !is_positive(self.speed) {
            return invalid("speed must be positive");
        }
        if !is_positive(self.steering_rate) || self.steering_rate > 1.0 {
            return invalid("steering rate must be in (0, 1]");
        }
        if self.frame_rate_independent_steering && !is_positive(self.reference_frame_ms) {
            return invalid("reference frame length must be positive");
        }
        if self.colors.len() < self.agent_count {
            return Err(SimulationError::InvalidParams(format!(
                "{} snakes need {} colors, got {}",
                self.agent_count,
                self.agent_count,
                self.colors.len()
            )));
        }
        Ok(())
    }

    /// Loads parameters from a JSON file. Missing fields take their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Saves the parameters as pretty-printed JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SimulationError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Color for the snake with the given id.
    pub fn color_for(&self, id: usize) -> Color {
        self.colors[id % self.colors.len()]
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
