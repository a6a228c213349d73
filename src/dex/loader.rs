// src/dex/loader.rs

// Range loading around the entry cache. `Dex` is the coordinating context:
// it owns the cache, the legendary index and the currently loaded sequence,
// so frontends and tests each get an independent instance.

use std::sync::{
    Arc, mpsc,
    atomic::{AtomicUsize, Ordering},
};
use std::thread;
use std::time::Duration;

use crate::api::source::DexSource;
use crate::config::consts::{JITTER_MS, REQUEST_PAUSE_MS, SPECIES_LIST_LIMIT, WORKERS};
use crate::config::options::FilterCriteria;
use crate::core::net::NetError;
use crate::progress::Progress;

use super::cache::EntryCache;
use super::entry::Entry;
use super::filter;
use super::legendary::{self, ClassificationReport, LegendaryIndex};

/// An issued load: generation ticket plus the cache misses to fetch.
/// Only the newest generation may replace the loaded sequence; older plans
/// commit into the cache but their result is discarded.
#[derive(Debug)]
pub struct LoadPlan {
    generation: u64,
    pub start: u32,
    pub end: u32,
    /// Ids in `[start, end]` absent from the cache, ascending.
    pub misses: Vec<u32>,
}

#[derive(Debug)]
pub enum LoadOutcome {
    /// The load replaced the loaded sequence; here it is, ascending by id.
    Applied(Vec<Arc<Entry>>),
    /// A newer load was issued before this one committed; its entries went
    /// to the cache (valid by id) but the loaded sequence was left alone.
    Superseded,
}

pub struct Dex {
    source: Arc<dyn DexSource>,
    cache: EntryCache,
    legendary: LegendaryIndex,
    loaded: Vec<Arc<Entry>>,
    generation: u64,
}

impl Dex {
    pub fn new(source: Arc<dyn DexSource>) -> Self {
        Self {
            source,
            cache: EntryCache::new(),
            legendary: LegendaryIndex::empty(),
            loaded: Vec::new(),
            generation: 0,
        }
    }

    pub fn source(&self) -> Arc<dyn DexSource> {
        Arc::clone(&self.source)
    }

    pub fn cache(&self) -> &EntryCache {
        &self.cache
    }

    pub fn legendary(&self) -> &LegendaryIndex {
        &self.legendary
    }

    /// The most recently committed load, ascending by id.
    pub fn loaded(&self) -> &[Arc<Entry>] {
        &self.loaded
    }

    /// Issue a load. Bumps the generation, so any load still in flight
    /// becomes stale the moment this returns.
    pub fn begin_load(&mut self, start: u32, end: u32) -> LoadPlan {
        debug_assert!(start <= end, "inverted id range");
        self.generation += 1;
        let misses = (start..=end).filter(|&id| !self.cache.contains(id)).collect();
        LoadPlan { generation: self.generation, start, end, misses }
    }

    /// Commit fetched entries. Cache insertion happens unconditionally (an
    /// entry is valid by id no matter which load fetched it); the loaded
    /// sequence is replaced only if this plan is still the newest.
    pub fn commit_load(&mut self, plan: LoadPlan, fetched: Vec<Entry>) -> LoadOutcome {
        for entry in fetched {
            self.cache.put(entry);
        }

        if plan.generation != self.generation {
            logd!("Load {}..={} superseded, result discarded", plan.start, plan.end);
            return LoadOutcome::Superseded;
        }

        let mut seq = Vec::with_capacity((plan.end - plan.start + 1) as usize);
        for id in plan.start..=plan.end {
            if let Some(entry) = self.cache.get(id) {
                seq.push(entry);
            }
        }
        self.loaded = seq.clone();
        LoadOutcome::Applied(seq)
    }

    /// Synchronous load: plan, fetch all misses concurrently, commit.
    /// All or nothing; one failed fetch fails the whole call and leaves the
    /// loaded sequence untouched.
    pub fn load_range(
        &mut self,
        start: u32,
        end: u32,
        progress: Option<&mut dyn Progress>,
    ) -> Result<LoadOutcome, NetError> {
        let plan = self.begin_load(start, end);
        let fetched = fetch_missing(&self.source, &plan.misses, progress)?;
        Ok(self.commit_load(plan, fetched))
    }

    /// Build and install the legendary index. One call per instance is the
    /// intended use; a rebuild replaces the index wholesale.
    pub fn build_legendary(
        &mut self,
        progress: Option<&mut dyn Progress>,
    ) -> Result<ClassificationReport, NetError> {
        let (index, report) = legendary::build(&self.source, SPECIES_LIST_LIMIT, progress)?;
        self.legendary = index;
        Ok(report)
    }

    /// Install an index built elsewhere (e.g. on a background thread).
    pub fn install_legendary(&mut self, index: LegendaryIndex) {
        self.legendary = index;
    }

    /// Filter pass over the loaded sequence with the current criteria.
    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<Arc<Entry>> {
        filter::apply(&self.loaded, criteria, &self.legendary)
    }
}

/// Fetch `ids` over the worker pool. Every miss is launched before any result
/// is collected, so network I/O overlaps; assembly order is the caller's
/// problem (the cache is keyed by id).
pub fn fetch_missing(
    source: &Arc<dyn DexSource>,
    ids: &[u32],
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Entry>, NetError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
    }

    // Concurrency
    type FetchErr = (u32, String);

    let ids_arc = Arc::new(ids.to_vec());
    let cursor = Arc::new(AtomicUsize::new(0));
    let (tx, rx) = mpsc::channel::<Result<Entry, FetchErr>>();

    let workers = WORKERS.min(ids.len()).max(1);

    for _ in 0..workers {
        let ids = Arc::clone(&ids_arc);
        let cursor = Arc::clone(&cursor);
        let tx = tx.clone();
        let source = Arc::clone(source);

        thread::spawn(move || {
            loop {
                let i = cursor.fetch_add(1, Ordering::Relaxed);
                if i >= ids.len() {
                    break;
                }
                let id = ids[i];
                let result = match source.fetch_entry(id) {
                    Ok(raw) => Ok(Entry::from(raw)),
                    Err(e) => Err((id, e.to_string())),
                };
                let _ = tx.send(result);
                let jitter = (id as u64) % JITTER_MS;
                thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
            }
        });
    }
    drop(tx); // main thread is sole receiver now

    // Aggregate results; drain everything even after a failure so the pool
    // winds down, then report the first error.
    let mut fetched = Vec::with_capacity(ids.len());
    let mut first_err: Option<FetchErr> = None;

    for _ in 0..ids_arc.len() {
        match rx.recv() {
            Ok(Ok(entry)) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(entry.id);
                }
                fetched.push(entry);
            }
            Ok(Err((id, msg))) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(id);
                }
                loge!("Entry {id}: {msg}");
                if first_err.is_none() {
                    first_err = Some((id, msg));
                }
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    if let Some((id, msg)) = first_err {
        return Err(format!("Entry {} fetch failed: {}", id, msg).into());
    }
    Ok(fetched)
}
