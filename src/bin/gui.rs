// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use dex_view::config::state::GuiState;
use dex_view::gui;
use eframe::egui::ViewportBuilder;

fn main() {
    let gui_defaults = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([gui_defaults.window_w as f32, gui_defaults.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
