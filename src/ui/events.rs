use egui_macroquad::egui;
use snake_arena::simulation::event_log::EventKind;
use snake_arena::simulation::game::Simulation;

/// Draws a transparent window listing recent meals and deaths
pub(super) fn draw_events_window(egui_ctx: &egui::Context, simulation: &Simulation) {
    let screen_height = egui_ctx.screen_rect().height();
    let panel_height = 220.0;

    egui::Window::new("Recent Events")
        .fixed_pos(egui::pos2(10.0, screen_height - panel_height - 10.0))
        .fixed_size(egui::vec2(260.0, panel_height))
        .frame(
            egui::Frame::window(&egui_ctx.style())
                .fill(egui::Color32::from_rgba_premultiplied(20, 20, 30, 200)),
        )
        .show(egui_ctx, |ui| {
            let events = simulation.events.events();

            if events.is_empty() {
                ui.label(
                    egui::RichText::new("No events yet...")
                        .color(egui::Color32::from_rgb(150, 150, 150))
                        .size(12.0),
                );
                return;
            }

            for event in events {
                let color = match event.kind {
                    EventKind::Food => egui::Color32::from_rgb(255, 200, 100),
                    EventKind::Wall => egui::Color32::from_rgb(150, 150, 150),
                    EventKind::Collision => egui::Color32::from_rgb(255, 100, 100),
                };

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("[{:.1}s]", event.time / 1000.0))
                            .color(egui::Color32::from_rgb(180, 180, 200))
                            .size(11.0)
                            .monospace(),
                    );
                    ui.label(egui::RichText::new(&event.description).color(color).size(11.0));
                });
            }
        });
}
