// src/api/source.rs

use crate::api::models::{PokemonData, SpeciesData, SpeciesPage, SpeciesRef};
use crate::config::consts::API_BASE;
use crate::core::net::{Client, NetError};

/// The upstream data source, as a seam.
/// Production talks to PokéAPI; tests inject fakes with call counting,
/// artificial latency, or injected failures.
pub trait DexSource: Send + Sync {
    /// `GET {base}/pokemon/{id}`
    fn fetch_entry(&self, id: u32) -> Result<PokemonData, NetError>;

    /// `GET {base}/pokemon-species?limit={limit}` → listing rows.
    fn list_species(&self, limit: u32) -> Result<Vec<SpeciesRef>, NetError>;

    /// Dependent per-species lookup via the listing row's own url.
    fn fetch_species(&self, species: &SpeciesRef) -> Result<SpeciesData, NetError>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self, NetError> {
        Ok(Self { client: Client::new()? })
    }
}

impl DexSource for HttpSource {
    fn fetch_entry(&self, id: u32) -> Result<PokemonData, NetError> {
        self.client.get_json(&format!("{}/pokemon/{}", API_BASE, id))
    }

    fn list_species(&self, limit: u32) -> Result<Vec<SpeciesRef>, NetError> {
        let page: SpeciesPage = self
            .client
            .get_json(&format!("{}/pokemon-species?limit={}", API_BASE, limit))?;
        Ok(page.results)
    }

    fn fetch_species(&self, species: &SpeciesRef) -> Result<SpeciesData, NetError> {
        self.client.get_json(&species.url)
    }
}
