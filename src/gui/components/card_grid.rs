// src/gui/components/card_grid.rs
//
// Central card grid: one card per visible entry (id, uppercased name,
// sprite, one chip per type). Full replace every frame, no diffing.

use std::sync::Arc;

use eframe::egui::{self, Color32, RichText, Vec2};

use crate::dex::Entry;
use crate::gui::{app::App, sprites::SpriteState};

const CARD_W: f32 = 150.0;
const SPRITE_SIZE: f32 = 96.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.visible.is_empty() {
        ui.centered_and_justified(|ui| {
            let msg = if app.running() { "Loading…" } else { "No entries match." };
            ui.label(RichText::new(msg).weak());
        });
        return;
    }

    // Keep the scroll bar out of the cards
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let entries: Vec<Arc<Entry>> = app.visible.clone();

    egui::ScrollArea::vertical()
        .id_salt("card_grid_scroll")
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = Vec2::new(8.0, 8.0);
                for entry in &entries {
                    card(ui, app, entry);
                }
            });
        });
}

fn card(ui: &mut egui::Ui, app: &mut App, entry: &Entry) {
    app.sprites.request(entry);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_W);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("#{:03} {}", entry.id, entry.name.to_uppercase())).strong(),
            );

            match app.sprites.state(entry.id) {
                Some(SpriteState::Ready(tex)) => {
                    ui.image((tex.id(), Vec2::splat(SPRITE_SIZE)));
                }
                Some(SpriteState::Loading) => {
                    ui.add_sized(Vec2::splat(SPRITE_SIZE), egui::Spinner::new());
                }
                _ => {
                    ui.add_sized(
                        Vec2::splat(SPRITE_SIZE),
                        egui::Label::new(RichText::new("no sprite").weak()),
                    );
                }
            }

            ui.horizontal_wrapped(|ui| {
                for t in &entry.types {
                    type_chip(ui, t);
                }
            });
        });
    });
}

fn type_chip(ui: &mut egui::Ui, name: &str) {
    egui::Frame::new()
        .fill(type_color(name))
        .corner_radius(3)
        .inner_margin(egui::Margin::symmetric(5, 1))
        .show(ui, |ui| {
            ui.label(RichText::new(name).small().color(Color32::WHITE));
        });
}

/// The classic per-type palette; anything unknown renders grey.
fn type_color(name: &str) -> Color32 {
    match name {
        "normal" => Color32::from_rgb(168, 168, 120),
        "fire" => Color32::from_rgb(240, 128, 48),
        "water" => Color32::from_rgb(104, 144, 240),
        "electric" => Color32::from_rgb(248, 176, 48),
        "grass" => Color32::from_rgb(120, 200, 80),
        "ice" => Color32::from_rgb(152, 216, 216),
        "fighting" => Color32::from_rgb(192, 48, 40),
        "poison" => Color32::from_rgb(160, 64, 160),
        "ground" => Color32::from_rgb(224, 192, 104),
        "flying" => Color32::from_rgb(168, 144, 240),
        "psychic" => Color32::from_rgb(248, 88, 136),
        "bug" => Color32::from_rgb(168, 184, 32),
        "rock" => Color32::from_rgb(184, 160, 56),
        "ghost" => Color32::from_rgb(112, 88, 152),
        "dragon" => Color32::from_rgb(112, 56, 248),
        "dark" => Color32::from_rgb(112, 88, 72),
        "steel" => Color32::from_rgb(184, 184, 208),
        _ => Color32::from_rgb(120, 120, 120),
    }
}
