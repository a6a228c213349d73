// src/gui/components/entry_table.rs
//
// Compact list view of the visible entries. Same data as the cards, no
// sprites; useful when scanning a whole generation.

use std::sync::Arc;

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::dex::Entry;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.visible.is_empty() {
        ui.centered_and_justified(|ui| {
            let msg = if app.running() { "Loading…" } else { "No entries match." };
            ui.label(RichText::new(msg).weak());
        });
        return;
    }

    let rows: Vec<Arc<Entry>> = app.visible.clone();
    // One lock for the whole frame, not one per row
    let legendary: Vec<bool> = {
        let dex = app.dex.lock().unwrap();
        rows.iter().map(|e| dex.legendary().contains(e.id)).collect()
    };

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(50.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::remainder())
        .column(Column::exact(70.0))
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Types");
            });
            header.col(|ui| {
                ui.strong("Legendary");
            });
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let i = row.index();
                let entry = &rows[i];
                row.col(|ui| {
                    ui.label(format!("{:03}", entry.id));
                });
                row.col(|ui| {
                    ui.label(entry.name.to_uppercase());
                });
                row.col(|ui| {
                    ui.label(entry.types.join(" / "));
                });
                row.col(|ui| {
                    if legendary[i] {
                        ui.label("★");
                    }
                });
            });
        });
}
