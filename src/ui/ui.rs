use egui_macroquad::egui;
use snake_arena::simulation::game::Simulation;
use std::collections::VecDeque;

const MAX_HISTORY_POINTS: usize = 500;

pub struct UIState {
    pub stats_panel_width: f32,
    /// One (seconds, score) series per snake.
    pub score_histories: Vec<VecDeque<(f64, f64)>>,
    last_update_time: f64,
    update_interval: f64,
    pub paused: bool,
    pub quit_requested: bool,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            stats_panel_width: 300.0,
            score_histories: Vec::new(),
            last_update_time: 0.0,
            update_interval: 500.0, // Sample every 0.5 seconds of simulated time
            paused: false,
            quit_requested: false,
        }
    }

    pub fn update_history(&mut self, simulation: &Simulation) {
        if simulation.time - self.last_update_time < self.update_interval {
            return;
        }
        self.last_update_time = simulation.time;

        while self.score_histories.len() < simulation.stats.len() {
            self.score_histories.push(VecDeque::new());
        }

        let seconds = simulation.time / 1000.0;
        for (history, stats) in self.score_histories.iter_mut().zip(&simulation.stats) {
            history.push_back((seconds, f64::from(stats.score)));
            if history.len() > MAX_HISTORY_POINTS {
                history.pop_front();
            }
        }
    }
}

pub fn draw_ui(state: &mut UIState, simulation: &Simulation) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        egui_ctx.set_visuals(visuals);

        super::stats::draw_stats_panel(egui_ctx, state, simulation);
        super::events::draw_events_window(egui_ctx, simulation);
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
