// src/gui/sprites.rs

// Sprite textures, fetched and decoded off the UI thread.
// The UI requests ids as cards come on screen; a single worker fetches the
// PNG, decodes to RGBA, and sends the pixels back. `drain` turns finished
// pixels into egui textures once per frame.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

use crate::core::net;
use crate::dex::Entry;

pub enum SpriteState {
    Loading,
    Ready(TextureHandle),
    Failed,
    /// Upstream has no front sprite for this id.
    Missing,
}

enum Fetched {
    Image { id: u32, size: [usize; 2], rgba: Vec<u8> },
    Failed { id: u32, error: String },
}

pub struct SpriteCache {
    states: HashMap<u32, SpriteState>,
    req_tx: Sender<(u32, String)>,
    res_rx: Receiver<Fetched>,
}

impl SpriteCache {
    pub fn new() -> Result<Self, net::NetError> {
        let client = net::Client::new()?;
        let (req_tx, req_rx) = mpsc::channel::<(u32, String)>();
        let (res_tx, res_rx) = mpsc::channel::<Fetched>();

        thread::spawn(move || {
            while let Ok((id, url)) = req_rx.recv() {
                let msg = match fetch_and_decode(&client, &url) {
                    Ok((size, rgba)) => Fetched::Image { id, size, rgba },
                    Err(e) => Fetched::Failed { id, error: e.to_string() },
                };
                if res_tx.send(msg).is_err() {
                    break; // UI gone
                }
            }
        });

        Ok(Self { states: HashMap::new(), req_tx, res_rx })
    }

    /// Queue a fetch for this entry's sprite unless one is already
    /// resolved or in flight.
    pub fn request(&mut self, entry: &Entry) {
        if self.states.contains_key(&entry.id) {
            return;
        }
        match &entry.sprite {
            Some(url) => {
                let _ = self.req_tx.send((entry.id, url.clone()));
                self.states.insert(entry.id, SpriteState::Loading);
            }
            None => {
                self.states.insert(entry.id, SpriteState::Missing);
            }
        }
    }

    pub fn state(&self, id: u32) -> Option<&SpriteState> {
        self.states.get(&id)
    }

    /// Turn finished downloads into textures. Call once per frame.
    pub fn drain(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.res_rx.try_recv() {
            match msg {
                Fetched::Image { id, size, rgba } => {
                    let img = ColorImage::from_rgba_unmultiplied(size, &rgba);
                    // NEAREST: these are pixel-art sprites, keep them crisp
                    let tex = ctx.load_texture(format!("sprite-{id}"), img, TextureOptions::NEAREST);
                    self.states.insert(id, SpriteState::Ready(tex));
                }
                Fetched::Failed { id, error } => {
                    loge!("Sprite {id}: {error}");
                    self.states.insert(id, SpriteState::Failed);
                }
            }
        }
    }
}

fn fetch_and_decode(client: &net::Client, url: &str) -> Result<([usize; 2], Vec<u8>), net::NetError> {
    let bytes = client.get_bytes(url)?;
    let rgba = image::load_from_memory(&bytes)?.to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(([w as usize, h as usize], rgba.into_raw()))
}
