// src/api/models.rs

// Wire shapes of the three upstream endpoints, nothing more.
// Unused response fields are simply not modeled; serde skips them.

use serde::Deserialize;

/// `GET {base}/pokemon/{id}`
#[derive(Clone, Debug, Deserialize)]
pub struct PokemonData {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Sprites {
    /// Nullable upstream; some ids ship no front sprite.
    pub front_default: Option<String>,
}

/// `GET {base}/pokemon-species?limit=L`
#[derive(Clone, Debug, Deserialize)]
pub struct SpeciesPage {
    pub results: Vec<SpeciesRef>,
}

/// One listing row; `url` is absolute and fetched as-is.
#[derive(Clone, Debug, Deserialize)]
pub struct SpeciesRef {
    pub name: String,
    pub url: String,
}

/// `GET <species url>`
#[derive(Clone, Debug, Deserialize)]
pub struct SpeciesData {
    pub id: u32,
    pub is_legendary: bool,
}
