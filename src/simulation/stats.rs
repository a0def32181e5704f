//! Per-snake statistics published after every tick.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::params::Color;
use super::snake::Snake;

/// Display line for one snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStats {
    /// Snake index.
    pub id: usize,
    /// Snake color.
    pub color: Color,
    /// Segment count.
    pub length: usize,
    /// Current score.
    pub score: u32,
}

impl AgentStats {
    /// Captures the current stats of `snake`.
    pub fn of(snake: &Snake) -> Self {
        Self {
            id: snake.id,
            color: snake.color,
            length: snake.len(),
            score: snake.score(),
        }
    }
}

impl fmt::Display for AgentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Snake {}: Length {} | Score {}",
            self.id + 1,
            self.length,
            self.score
        )
    }
}
