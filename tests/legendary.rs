// tests/legendary.rs
//
// Classification pass against a fake species endpoint: the happy path, a
// failed per-species lookup, and a failed listing call.
//
use std::sync::Arc;

use dex_view::api::models::{PokemonData, SpeciesData, SpeciesRef};
use dex_view::api::source::DexSource;
use dex_view::core::net::NetError;
use dex_view::dex::{Dex, legendary};
use dex_view::progress::NullProgress;

const SPECIES: &[(&str, u32, bool)] = &[
    ("bulbasaur", 1, false),
    ("articuno", 144, true),
    ("squirtle", 7, false),
];

struct FakeSpecies {
    listing_fails: bool,
    fail_name: Option<&'static str>,
}

impl FakeSpecies {
    fn new() -> Self {
        Self { listing_fails: false, fail_name: None }
    }
}

impl DexSource for FakeSpecies {
    fn fetch_entry(&self, _id: u32) -> Result<PokemonData, NetError> {
        Err("not used in these tests".into())
    }

    fn list_species(&self, _limit: u32) -> Result<Vec<SpeciesRef>, NetError> {
        if self.listing_fails {
            return Err("listing unavailable".into());
        }
        Ok(SPECIES
            .iter()
            .map(|&(name, id, _)| SpeciesRef {
                name: name.into(),
                url: format!("https://dex.test/species/{id}"),
            })
            .collect())
    }

    fn fetch_species(&self, species: &SpeciesRef) -> Result<SpeciesData, NetError> {
        if self.fail_name == Some(species.name.as_str()) {
            return Err(format!("injected failure for {}", species.name).into());
        }
        let id: u32 = species
            .url
            .rsplit('/')
            .next()
            .unwrap()
            .parse()
            .unwrap();
        let is_legendary = SPECIES.iter().any(|&(_, sid, flag)| sid == id && flag);
        Ok(SpeciesData { id, is_legendary })
    }
}

fn source(fake: FakeSpecies) -> Arc<dyn DexSource> {
    Arc::new(fake)
}

#[test]
fn one_legendary_among_three_species() {
    let src = source(FakeSpecies::new());
    let mut prog = NullProgress;
    let (index, report) = legendary::build(&src, 2000, Some(&mut prog)).unwrap();

    assert_eq!(index.len(), 1);
    assert!(index.contains(144));
    assert!(!index.contains(1));

    assert_eq!(report.total, 3);
    assert_eq!(report.legendary, 1);
    assert!(report.is_complete());
}

#[test]
fn failed_lookup_is_reported_and_excluded() {
    let src = source(FakeSpecies { fail_name: Some("bulbasaur"), ..FakeSpecies::new() });
    let (index, report) = legendary::build(&src, 2000, None).unwrap();

    // The pass still completes; the gap is visible, not silent
    assert_eq!(index.len(), 1);
    assert!(index.contains(144));

    assert_eq!(report.total, 3);
    assert!(!report.is_complete());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].0, "bulbasaur");
    assert!(report.summary().contains("1 lookups failed"));
}

#[test]
fn listing_failure_aborts_and_leaves_index_empty() {
    let src = source(FakeSpecies { listing_fails: true, ..FakeSpecies::new() });
    assert!(legendary::build(&src, 2000, None).is_err());

    let mut dex = Dex::new(source(FakeSpecies { listing_fails: true, ..FakeSpecies::new() }));
    assert!(dex.build_legendary(None).is_err());
    assert!(dex.legendary().is_empty());
}
