// src/gui/app.rs
use std::error::Error;
use std::sync::{
    Arc, Mutex,
    mpsc::{self, Receiver, Sender},
};
use std::thread;

use eframe::egui;

use crate::{
    api::source::HttpSource,
    config::{
        options::{IdRange, ViewMode},
        state::AppState,
    },
    dex::{ClassificationReport, Dex, Entry, LoadOutcome, fetch_missing, legendary},
};

use super::{components, progress::GuiProgress, sprites::SpriteCache};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Dex View",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc)?))),
    )?;
    Ok(())
}

/// Results arriving from background threads.
pub enum DexEvent {
    LegendaryReady(ClassificationReport),
    LegendaryFailed(String),
    LoadApplied { count: usize },
    LoadSuperseded,
    LoadFailed(String),
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // pipeline state; background loads lock it briefly at plan/commit time
    pub dex: Arc<Mutex<Dex>>,

    // current filtered view of the loaded sequence
    pub visible: Vec<Arc<Entry>>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub loads_in_flight: usize,
    pub legendary_ready: bool,

    pub sprites: SpriteCache,

    egui_ctx: egui::Context,
    events_tx: Sender<DexEvent>,
    events_rx: Receiver<DexEvent>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let state = AppState::default();
        let source = Arc::new(HttpSource::new()?);
        let dex = Arc::new(Mutex::new(Dex::new(source)));
        let status = Arc::new(Mutex::new(s!("Starting…")));
        let sprites = SpriteCache::new()?;
        let (events_tx, events_rx) = mpsc::channel();

        logf!("Init: default range {}..={}", state.range.start, state.range.end);

        // Startup: classify species once, then load the default range.
        {
            let dex = Arc::clone(&dex);
            let status = Arc::clone(&status);
            let tx = events_tx.clone();
            let ctx = cc.egui_ctx.clone();
            let range = state.range;

            thread::spawn(move || {
                let source = dex.lock().unwrap().source();
                let mut prog = GuiProgress::new(Arc::clone(&status), "species");
                match legendary::build(
                    &source,
                    crate::config::consts::SPECIES_LIST_LIMIT,
                    Some(&mut prog),
                ) {
                    Ok((index, report)) => {
                        dex.lock().unwrap().install_legendary(index);
                        let _ = tx.send(DexEvent::LegendaryReady(report));
                    }
                    Err(e) => {
                        let _ = tx.send(DexEvent::LegendaryFailed(e.to_string()));
                    }
                }
                ctx.request_repaint();

                run_load(&dex, range, &status, &tx, &ctx);
            });
        }

        Ok(Self {
            state,
            dex,
            visible: Vec::new(),
            status,
            loads_in_flight: 1, // the startup load above
            legendary_ready: false,
            sprites,
            egui_ctx: cc.egui_ctx.clone(),
            events_tx,
            events_rx,
        })
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn running(&self) -> bool {
        self.loads_in_flight > 0
    }

    pub fn status(&mut self, msg: impl Into<String>) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Re-run the filter over the loaded sequence and refresh the view.
    /// Loading always implies an immediate re-filter, so every load
    /// completion funnels through here too.
    pub fn rebuild_view(&mut self) {
        let dex = self.dex.lock().unwrap();
        self.visible = dex.filtered(&self.state.filter);
    }

    /// Kick off a background load for `range`. Requests may overlap; the
    /// generation counter inside `Dex` makes the newest one win.
    pub fn request_range(&mut self, range: IdRange) {
        self.state.range = range;
        self.loads_in_flight += 1;
        logf!("Load: Begin {}..={}", range.start, range.end);

        let dex = Arc::clone(&self.dex);
        let status = Arc::clone(&self.status);
        let tx = self.events_tx.clone();
        let ctx = self.egui_ctx.clone();
        thread::spawn(move || {
            run_load(&dex, range, &status, &tx, &ctx);
        });
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                DexEvent::LegendaryReady(report) => {
                    self.legendary_ready = true;
                    logf!("Classify: OK {}", report.summary());
                    self.status(report.summary());
                    self.rebuild_view();
                }
                DexEvent::LegendaryFailed(e) => {
                    loge!("Classify: Error {e}");
                    self.status(format!("Classification failed: {e}"));
                }
                DexEvent::LoadApplied { count } => {
                    self.loads_in_flight = self.loads_in_flight.saturating_sub(1);
                    logf!("Load: OK rows={count}");
                    self.rebuild_view();
                    self.status(format!("Loaded {count} entries"));
                }
                DexEvent::LoadSuperseded => {
                    self.loads_in_flight = self.loads_in_flight.saturating_sub(1);
                    logd!("Load: Superseded result dropped");
                }
                DexEvent::LoadFailed(e) => {
                    self.loads_in_flight = self.loads_in_flight.saturating_sub(1);
                    loge!("Load: Error {e}");
                    self.status(format!("Error: {e}"));
                }
            }
        }
    }
}

/// One full load pass: plan under the lock, fetch without it, commit under
/// the lock again. Stale plans land in the cache but not in the view.
fn run_load(
    dex: &Arc<Mutex<Dex>>,
    range: IdRange,
    status: &Arc<Mutex<String>>,
    tx: &Sender<DexEvent>,
    ctx: &egui::Context,
) {
    let (plan, source) = {
        let mut d = dex.lock().unwrap();
        (d.begin_load(range.start, range.end), d.source())
    };

    let mut prog = GuiProgress::new(Arc::clone(status), "entry");
    let event = match fetch_missing(&source, &plan.misses, Some(&mut prog)) {
        Ok(fetched) => {
            let mut d = dex.lock().unwrap();
            match d.commit_load(plan, fetched) {
                LoadOutcome::Applied(seq) => DexEvent::LoadApplied { count: seq.len() },
                LoadOutcome::Superseded => DexEvent::LoadSuperseded,
            }
        }
        Err(e) => DexEvent::LoadFailed(e.to_string()),
    };

    let _ = tx.send(event);
    ctx.request_repaint();
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();
        self.sprites.drain(ctx);

        egui::TopBottomPanel::top("filter_bar").show(ctx, |ui| {
            components::filter_bar::draw(ui, self);
        });

        egui::SidePanel::left("range_panel")
            .default_width(170.0)
            .show(ctx, |ui| {
                components::range_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.running() {
                    ui.spinner();
                }
                let text = self.status.lock().unwrap().clone();
                ui.label(text);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.gui.view {
            ViewMode::Cards => components::card_grid::draw(ui, self),
            ViewMode::Table => components::entry_table::draw(ui, self),
        });

        // Background fetches update the status line without an input event;
        // keep repainting while any pass is running so counts stay live.
        if self.running() || !self.legendary_ready {
            ctx.request_repaint_after(std::time::Duration::from_millis(150));
        }
    }
}
