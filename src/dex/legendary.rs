// src/dex/legendary.rs

// Legendary classification: one listing call, then a dependent lookup per
// listed species. The lookups fan out over a small worker pool; result order
// is irrelevant since the destination is a set.

use std::collections::HashSet;
use std::sync::{
    Arc, mpsc,
    atomic::{AtomicUsize, Ordering},
};
use std::thread;
use std::time::Duration;

use crate::api::source::DexSource;
use crate::config::consts::{JITTER_MS, REQUEST_PAUSE_MS, WORKERS};
use crate::core::net::NetError;
use crate::progress::Progress;

/// Ids flagged `is_legendary` by the species endpoint.
/// Either empty (not yet built, or the listing call failed) or the product of
/// a complete classification pass; per-item gaps show up in the
/// [`ClassificationReport`], never as a silently partial index.
#[derive(Clone, Debug, Default)]
pub struct LegendaryIndex {
    ids: HashSet<u32>,
}

impl LegendaryIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_ids<I: IntoIterator<Item = u32>>(ids: I) -> Self {
        Self { ids: ids.into_iter().collect() }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Per-item outcome of one classification pass. A failed lookup excludes the
/// species from the index, but the failure is recorded here so callers can
/// tell an incomplete pass from a genuinely empty one.
#[derive(Clone, Debug)]
pub struct ClassificationReport {
    /// Species listed upstream.
    pub total: usize,
    /// Ids flagged legendary.
    pub legendary: usize,
    /// (species name, error) per failed lookup.
    pub failures: Vec<(String, String)>,
}

impl ClassificationReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.failures.is_empty() {
            format!("Classified {} species: {} legendary", self.total, self.legendary)
        } else {
            format!(
                "Classified {} species: {} legendary ({} lookups failed)",
                self.total,
                self.legendary,
                self.failures.len()
            )
        }
    }
}

/// Build the index: list every species, then resolve each one's
/// `is_legendary` flag. Fails outright only if the listing call fails.
pub fn build(
    source: &Arc<dyn DexSource>,
    limit: u32,
    mut progress: Option<&mut dyn Progress>,
) -> Result<(LegendaryIndex, ClassificationReport), NetError> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Listing species…");
    }
    let species = source.list_species(limit)?;
    let total = species.len();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    // Concurrency
    type ClassifyOk = (u32, bool);
    type ClassifyErr = (String, String);

    let species_arc = Arc::new(species);
    let cursor = Arc::new(AtomicUsize::new(0));
    let (tx, rx) = mpsc::channel::<Result<ClassifyOk, ClassifyErr>>();

    let workers = WORKERS.min(total).max(1);

    for _ in 0..workers {
        let species = Arc::clone(&species_arc);
        let cursor = Arc::clone(&cursor);
        let tx = tx.clone();
        let source = Arc::clone(source);

        thread::spawn(move || {
            loop {
                let i = cursor.fetch_add(1, Ordering::Relaxed);
                if i >= species.len() {
                    break;
                }
                let sp = &species[i];
                let result = match source.fetch_species(sp) {
                    Ok(data) => Ok((data.id, data.is_legendary)),
                    Err(e) => Err((sp.name.clone(), e.to_string())),
                };
                let _ = tx.send(result);
                let jitter = (i as u64) % JITTER_MS;
                thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
            }
        });
    }
    drop(tx); // main thread is sole receiver now

    // Aggregate results
    let mut ids: HashSet<u32> = HashSet::new();
    let mut failures: Vec<(String, String)> = Vec::new();

    for _ in 0..total {
        match rx.recv() {
            Ok(Ok((id, is_legendary))) => {
                if is_legendary {
                    ids.insert(id);
                }
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(id);
                }
            }
            Ok(Err((name, msg))) => {
                loge!("Species {name}: {msg}");
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Lookup failed: {name}"));
                }
                failures.push((name, msg));
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let report = ClassificationReport { total, legendary: ids.len(), failures };
    Ok((LegendaryIndex { ids }, report))
}
