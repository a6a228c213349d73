// src/dex/entry.rs
use crate::api::models::PokemonData;

/// One catalog record. Immutable once fetched; the cache owns it behind an
/// `Arc`, loaded and filtered sequences hold clones of that handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub id: u32,
    pub name: String,
    /// Type labels in upstream slot order.
    pub types: Vec<String>,
    /// Front sprite URI; upstream is nullable for a handful of ids.
    pub sprite: Option<String>,
}

impl From<PokemonData> for Entry {
    fn from(raw: PokemonData) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            types: raw.types.into_iter().map(|t| t.kind.name).collect(),
            sprite: raw.sprites.front_default,
        }
    }
}
