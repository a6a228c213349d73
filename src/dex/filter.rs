// src/dex/filter.rs

use std::sync::Arc;

use crate::config::options::{CategoryFilter, FilterCriteria};

use super::entry::Entry;
use super::legendary::LegendaryIndex;

/// Filter pass over the loaded sequence. Pure: no cache access, order
/// preserved, both criteria compose by intersection.
///
/// The query is trimmed and case-folded, then matched as a plain substring of
/// the case-folded display name. An empty (or all-whitespace) query keeps
/// everything; the `All` category keeps everything.
pub fn apply(
    loaded: &[Arc<Entry>],
    criteria: &FilterCriteria,
    legendary: &LegendaryIndex,
) -> Vec<Arc<Entry>> {
    let query = criteria.query.trim().to_lowercase();

    let mut out = Vec::with_capacity(loaded.len());
    for entry in loaded {
        if !query.is_empty() && !entry.name.to_lowercase().contains(&query) {
            continue;
        }
        if criteria.category == CategoryFilter::Legendary && !legendary.contains(entry.id) {
            continue;
        }
        out.push(Arc::clone(entry));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, name: &str) -> Arc<Entry> {
        Arc::new(Entry {
            id,
            name: name.into(),
            types: vec![s!("normal")],
            sprite: None,
        })
    }

    fn criteria(query: &str, category: CategoryFilter) -> FilterCriteria {
        FilterCriteria { query: s!(query), category }
    }

    #[test]
    fn empty_query_and_all_category_is_identity() {
        let loaded = vec![entry(1, "bulbasaur"), entry(2, "ivysaur"), entry(3, "venusaur")];
        let out = apply(&loaded, &FilterCriteria::default(), &LegendaryIndex::empty());
        assert_eq!(out, loaded);
    }

    #[test]
    fn query_is_substring_on_folded_name() {
        let loaded = vec![
            entry(4, "Charmander"),
            entry(6, "Charizard"),
            entry(7, "Squirtle"),
        ];
        let out = apply(&loaded, &criteria("char", CategoryFilter::All), &LegendaryIndex::empty());
        let names: Vec<&str> = out.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Charmander", "Charizard"]);
    }

    #[test]
    fn query_is_trimmed_and_case_folded() {
        let loaded = vec![entry(4, "Charmander"), entry(7, "Squirtle")];
        let out = apply(&loaded, &criteria("  CHAR \t", CategoryFilter::All), &LegendaryIndex::empty());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 4);
    }

    #[test]
    fn legendary_category_keeps_only_index_members() {
        let loaded: Vec<_> = (1..=151).map(|id| entry(id, &format!("entry-{id}"))).collect();
        let index = LegendaryIndex::from_ids([150, 144]);
        let out = apply(&loaded, &criteria("", CategoryFilter::Legendary), &index);
        let ids: Vec<u32> = out.iter().map(|e| e.id).collect();
        assert_eq!(ids, [144, 150]);
    }

    #[test]
    fn both_filters_intersect() {
        let loaded = vec![
            entry(4, "Charmander"),
            entry(6, "Charizard"),
            entry(144, "Articuno"),
            entry(7, "Squirtle"),
        ];
        let index = LegendaryIndex::from_ids([6, 144]);
        let out = apply(&loaded, &criteria("ar", CategoryFilter::Legendary), &index);
        let ids: Vec<u32> = out.iter().map(|e| e.id).collect();
        // "ar" matches Charmander, Charizard, Articuno; the index keeps 6 and 144.
        assert_eq!(ids, [6, 144]);
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let loaded = vec![entry(7, "Squirtle")];
        let out = apply(&loaded, &criteria("zzz", CategoryFilter::All), &LegendaryIndex::empty());
        assert!(out.is_empty());
    }
}
