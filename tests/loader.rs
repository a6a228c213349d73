// tests/loader.rs
//
// Range loading against a fake source: call counting for cache behavior,
// artificial latency so network completion order is scrambled.
//
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use dex_view::api::models::{NamedRef, PokemonData, SpeciesData, SpeciesRef, Sprites, TypeSlot};
use dex_view::api::source::DexSource;
use dex_view::core::net::NetError;
use dex_view::dex::{Dex, LoadOutcome, fetch_missing};

struct FakeSource {
    entry_calls: AtomicUsize,
    fail_ids: HashSet<u32>,
    scramble: bool,
}

impl FakeSource {
    fn new() -> Self {
        Self {
            entry_calls: AtomicUsize::new(0),
            fail_ids: HashSet::new(),
            scramble: false,
        }
    }

    fn scrambled() -> Self {
        Self { scramble: true, ..Self::new() }
    }

    fn failing(ids: impl IntoIterator<Item = u32>) -> Self {
        Self { fail_ids: ids.into_iter().collect(), ..Self::new() }
    }

    fn calls(&self) -> usize {
        self.entry_calls.load(Ordering::Relaxed)
    }
}

fn pokemon(id: u32) -> PokemonData {
    PokemonData {
        id,
        name: format!("entry-{id}"),
        types: vec![TypeSlot { kind: NamedRef { name: "normal".into() } }],
        sprites: Sprites { front_default: None },
    }
}

impl DexSource for FakeSource {
    fn fetch_entry(&self, id: u32) -> Result<PokemonData, NetError> {
        self.entry_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_ids.contains(&id) {
            return Err(format!("injected failure for {id}").into());
        }
        if self.scramble {
            // pseudo-random per-id delay; adjacent ids land far apart
            thread::sleep(Duration::from_millis(((id * 7919) % 23) as u64));
        }
        Ok(pokemon(id))
    }

    fn list_species(&self, _limit: u32) -> Result<Vec<SpeciesRef>, NetError> {
        Err("not used in these tests".into())
    }

    fn fetch_species(&self, _species: &SpeciesRef) -> Result<SpeciesData, NetError> {
        Err("not used in these tests".into())
    }
}

fn dex_with(source: FakeSource) -> (Arc<FakeSource>, Dex) {
    let source = Arc::new(source);
    let dex = Dex::new(Arc::clone(&source) as Arc<dyn DexSource>);
    (source, dex)
}

fn ids_of(seq: &[Arc<dex_view::dex::Entry>]) -> Vec<u32> {
    seq.iter().map(|e| e.id).collect()
}

#[test]
fn load_returns_full_range_ascending_despite_completion_order() {
    let (_, mut dex) = dex_with(FakeSource::scrambled());

    let seq = match dex.load_range(10, 40, None).unwrap() {
        LoadOutcome::Applied(seq) => seq,
        LoadOutcome::Superseded => panic!("single load cannot be superseded"),
    };

    assert_eq!(seq.len(), 31);
    let expected: Vec<u32> = (10..=40).collect();
    assert_eq!(ids_of(&seq), expected);
}

#[test]
fn cached_ids_are_not_refetched() {
    let (source, mut dex) = dex_with(FakeSource::new());

    dex.load_range(1, 20, None).unwrap();
    assert_eq!(source.calls(), 20);

    // Overlapping range: only 21..=30 are misses
    dex.load_range(11, 30, None).unwrap();
    assert_eq!(source.calls(), 30);
}

#[test]
fn repeat_load_is_idempotent_and_fetch_free() {
    let (source, mut dex) = dex_with(FakeSource::new());

    let first = match dex.load_range(1, 15, None).unwrap() {
        LoadOutcome::Applied(seq) => seq,
        LoadOutcome::Superseded => unreachable!(),
    };
    assert_eq!(source.calls(), 15);

    let second = match dex.load_range(1, 15, None).unwrap() {
        LoadOutcome::Applied(seq) => seq,
        LoadOutcome::Superseded => unreachable!(),
    };
    assert_eq!(source.calls(), 15, "second identical load must not touch the network");
    assert_eq!(first, second);
}

#[test]
fn failed_fetch_fails_whole_load_and_keeps_previous_sequence() {
    let (_, mut dex) = dex_with(FakeSource::failing([17]));

    dex.load_range(1, 10, None).unwrap();
    assert_eq!(ids_of(dex.loaded()), (1..=10).collect::<Vec<_>>());

    let err = dex.load_range(11, 20, None);
    assert!(err.is_err());

    // No partial range; the previous sequence stays on display
    assert_eq!(ids_of(dex.loaded()), (1..=10).collect::<Vec<_>>());
}

#[test]
fn stale_plan_lands_in_cache_but_not_in_view() {
    let (_, mut dex) = dex_with(FakeSource::new());

    let old_plan = dex.begin_load(1, 3);
    let new_plan = dex.begin_load(4, 6);

    let old_fetched = fetch_missing(&dex.source(), &old_plan.misses, None).unwrap();
    let new_fetched = fetch_missing(&dex.source(), &new_plan.misses, None).unwrap();

    match dex.commit_load(new_plan, new_fetched) {
        LoadOutcome::Applied(seq) => assert_eq!(ids_of(&seq), [4, 5, 6]),
        LoadOutcome::Superseded => panic!("newest plan must apply"),
    }
    match dex.commit_load(old_plan, old_fetched) {
        LoadOutcome::Superseded => {}
        LoadOutcome::Applied(_) => panic!("stale plan must be discarded"),
    }

    assert_eq!(ids_of(dex.loaded()), [4, 5, 6]);
    // The stale fetch is still good data, keyed by id
    assert!(dex.cache().contains(1));
    assert!(dex.cache().contains(3));
    assert_eq!(dex.cache().len(), 6);
}

#[test]
fn plan_lists_only_cache_misses() {
    let (_, mut dex) = dex_with(FakeSource::new());

    dex.load_range(1, 5, None).unwrap();

    let plan = dex.begin_load(3, 8);
    assert_eq!(plan.misses, [6, 7, 8]);
}
