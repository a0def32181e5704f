// UI module - stats sink and controls drawn with egui

mod events;
mod stats;
mod ui;

// Re-export the public interface
pub use ui::{UIState, draw_ui, process_egui};
