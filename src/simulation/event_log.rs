//! Event log of recent meals and deaths for display.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A logged event for display in the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Simulation time in milliseconds when the event occurred
    pub time: f64,
    /// Human-readable description of the event
    pub description: String,
    /// What happened
    pub kind: EventKind,
}

/// Event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A snake ate a food item
    Food,
    /// A snake left the play area
    Wall,
    /// A snake ran into another snake
    Collision,
}

/// Event log that tracks recent simulation events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    /// Recent events, newest first
    events: VecDeque<LoggedEvent>,
    /// Maximum number of events to keep
    max_events: usize,
}

impl EventLog {
    /// Creates a new event log with specified capacity
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Adds a new event to the log and forwards it to the `log` facade
    pub fn log(&mut self, time: f64, description: String, kind: EventKind) {
        log::debug!("[{:.0}ms] {}", time, description);

        self.events.push_front(LoggedEvent {
            time,
            description,
            kind,
        });

        while self.events.len() > self.max_events {
            self.events.pop_back();
        }
    }

    /// Returns all events, newest first
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.events
    }

    /// Number of events currently held
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if no events are held
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
