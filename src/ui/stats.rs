use egui_macroquad::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use snake_arena::simulation::game::Simulation;
use snake_arena::simulation::params::Color;

use super::ui::UIState;

pub(super) fn to_egui(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

pub(super) fn draw_stats_panel(
    egui_ctx: &egui::Context,
    state: &mut UIState,
    simulation: &Simulation,
) {
    egui::SidePanel::right("stats_panel")
        .exact_width(state.stats_panel_width)
        .resizable(false)
        .show(egui_ctx, |ui| {
            ui.heading("Battle Stats");
            ui.separator();

            for stats in simulation.stats() {
                ui.colored_label(to_egui(stats.color), stats.to_string());
            }

            ui.separator();

            ui.horizontal(|ui| {
                let pause_text = if state.paused { "▶ Resume" } else { "⏸ Pause" };
                if ui.button(pause_text).clicked() {
                    state.paused = !state.paused;
                }
                if ui.button("⏹ Quit").clicked() {
                    state.quit_requested = true;
                }
            });

            ui.label(format!("Time: {:.1}s", simulation.time / 1000.0));
            ui.label(format!("Ticks: {}", simulation.ticks));
            ui.label(format!("Food: {}", simulation.foods().len()));

            ui.separator();
            ui.label("Score");
            draw_score_plot(ui, state, simulation);
        });
}

fn draw_score_plot(ui: &mut egui::Ui, state: &UIState, simulation: &Simulation) {
    if state.score_histories.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("score_plot")
        .height(200.0)
        .show_axes([true, true])
        .legend(Legend::default())
        .label_formatter(|name, value| {
            format!("{}\nTime: {:.1}s\nScore: {:.0}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            for (history, stats) in state.score_histories.iter().zip(simulation.stats()) {
                let points: PlotPoints = history.iter().map(|&(x, y)| [x, y]).collect();
                let line = Line::new(points)
                    .color(to_egui(stats.color))
                    .name(format!("Snake {}", stats.id + 1));
                plot_ui.line(line);
            }
        });
}
