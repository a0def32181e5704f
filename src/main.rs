use macroquad::prelude::*;
use macroquad::window::Conf;
use snake_arena::simulation::clock::FrameLoop;
use snake_arena::simulation::game::Simulation;
use snake_arena::simulation::params::Params;
use std::path::Path;

mod graphics;
mod ui;

const CONFIG_ENV: &str = "SNAKE_ARENA_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "snake_arena.json";
const STATS_PANEL_WIDTH: i32 = 300;

fn window_conf() -> Conf {
    let params = Params::default();
    Conf {
        window_title: "Snake Arena".to_owned(),
        window_width: params.width as i32 + STATS_PANEL_WIDTH,
        window_height: params.height as i32,
        ..Default::default()
    }
}

/// Reads parameters from `$SNAKE_ARENA_CONFIG` or `./snake_arena.json`, falling back to defaults.
fn load_params() -> Params {
    let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
    if !Path::new(&path).exists() {
        log::info!("no config at {}, using defaults", path);
        return Params::default();
    }

    match Params::load_from_file(&path) {
        Ok(params) => {
            log::info!("loaded config from {}", path);
            params
        }
        Err(e) => {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            Params::default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Starting Snake Arena");

    let params = load_params();
    let (width, height) = (params.width, params.height);

    let mut simulation = match Simulation::new(params) {
        Ok(simulation) => simulation,
        Err(e) => {
            log::error!("cannot start simulation: {}", e);
            return;
        }
    };

    let mut ui_state = ui::UIState::new();
    ui_state.stats_panel_width = STATS_PANEL_WIDTH as f32;
    let mut frame_loop = FrameLoop::new();

    loop {
        if is_key_pressed(KeyCode::Escape) || ui_state.quit_requested {
            frame_loop.stop();
        }
        if is_key_pressed(KeyCode::Space) {
            ui_state.paused = !ui_state.paused;
        }

        clear_background(BLACK);
        let mut canvas = graphics::ScreenCanvas::new(width, height, ui_state.stats_panel_width);

        let keep_running = if ui_state.paused {
            frame_loop.frame_paused(&simulation, &mut canvas)
        } else {
            frame_loop.frame(get_time() * 1000.0, &mut simulation, &mut canvas)
        };
        if !keep_running {
            break;
        }

        ui_state.update_history(&simulation);
        ui::draw_ui(&mut ui_state, &simulation);
        ui::process_egui();

        next_frame().await;
    }

    for stats in simulation.stats() {
        log::info!("final: {}", stats);
    }
}
