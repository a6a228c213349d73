// src/gui/components/filter_bar.rs
//
// Top bar: search box, category toggle, view toggle, reload.
// Every input change re-filters immediately; nothing here touches the cache.

use eframe::egui;

use crate::config::options::{CategoryFilter, ViewMode};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Search:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.filter.query)
                .hint_text("name contains…")
                .desired_width(220.0),
        );
        if resp.changed() {
            logd!("UI: Query → {:?}", app.state.filter.query);
            app.rebuild_view();
        }

        ui.separator();

        ui.label("Show:");
        let before = app.state.filter.category;
        for cat in [CategoryFilter::All, CategoryFilter::Legendary] {
            ui.selectable_value(&mut app.state.filter.category, cat, cat.label());
        }
        if app.state.filter.category != before {
            logf!("UI: Category → {:?}", app.state.filter.category);
            if app.state.filter.category == CategoryFilter::Legendary && !app.legendary_ready {
                app.status("Classification still running; legendary filter is empty until it finishes");
            }
            app.rebuild_view();
        }

        ui.separator();

        for (mode, label) in [(ViewMode::Cards, "Cards"), (ViewMode::Table, "Table")] {
            ui.selectable_value(&mut app.state.gui.view, mode, label);
        }

        ui.separator();

        if ui.button("Reload").clicked() {
            let range = app.state.range;
            logf!("UI: Reload {}..={}", range.start, range.end);
            app.request_range(range);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("{} shown", app.visible.len()));
        });
    });
}
