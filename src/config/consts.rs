// src/config/consts.rs

// Net config
pub const API_BASE: &str = "https://pokeapi.co/api/v2";
pub const USER_AGENT: &str = "dex_view/0.3";
pub const TIMEOUT_SECS: u64 = 15;

// Id universe
pub const DEX_MAX: u32 = 493;             // highest id the viewer displays
pub const SPECIES_LIST_LIMIT: u32 = 2000; // listing page size; must cover the full universe

// Named ranges: (name, first id, last id)
pub const GEN_RANGES: &[(&str, u32, u32)] = &[
    ("1", 1, 151),
    ("2", 152, 251),
    ("3", 252, 386),
    ("4", 387, 493),
    ("all", 1, 493),
];

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50;        // extra 0..50 ms
