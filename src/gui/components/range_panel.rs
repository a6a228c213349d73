// src/gui/components/range_panel.rs
//
// Left panel: named id ranges. Clicking one kicks off a (background) load;
// overlapping clicks are fine, the newest request wins.

use eframe::egui;

use crate::config::consts::GEN_RANGES;
use crate::config::options::IdRange;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Ranges");
    ui.separator();

    for &(name, start, end) in GEN_RANGES {
        let range = IdRange { start, end };
        let selected = app.state.range == range;
        let label = match name {
            "all" => format!("All · {}–{}", start, end),
            n => format!("Gen {} · {}–{}", n, start, end),
        };

        if ui.selectable_label(selected, label).clicked() && !selected {
            logf!("UI: Range → {}..={}", start, end);
            app.request_range(range);
        }
    }

    ui.separator();

    {
        let dex = app.dex.lock().unwrap();
        ui.label(format!("Cached: {} entries", dex.cache().len()));
        if app.legendary_ready {
            ui.label(format!("Legendary ids: {}", dex.legendary().len()));
        } else {
            ui.label("Classifying species…");
        }
    }
}
