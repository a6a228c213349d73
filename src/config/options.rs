// src/config/options.rs
use super::consts::GEN_RANGES;

/// Inclusive id range to load and display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdRange {
    pub start: u32,
    pub end: u32,
}

impl IdRange {
    /// Resolve a named range ("1".."4", "all").
    pub fn named(name: &str) -> Option<Self> {
        GEN_RANGES
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|&(_, start, end)| Self { start, end })
    }
}

impl Default for IdRange {
    fn default() -> Self {
        Self { start: 1, end: 151 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Legendary,
}

impl CategoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Legendary => "Legendary",
        }
    }
}

/// Transient filter inputs; recomputed from live input state on every pass.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub query: String,
    pub category: CategoryFilter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}
