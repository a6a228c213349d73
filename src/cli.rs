// src/cli.rs
use std::env;
use std::error::Error;
use std::sync::Arc;

use crate::api::source::HttpSource;
use crate::config::consts::{DEX_MAX, GEN_RANGES};
use crate::config::options::{CategoryFilter, FilterCriteria, IdRange};
use crate::dex::{Dex, LoadOutcome, filter};
use crate::progress::Progress;

pub struct Params {
    pub range: IdRange,          // which ids to load
    pub query: Option<String>,   // substring filter on names
    pub legendary: bool,         // classify first, show legendaries only
    pub list_ranges: bool,       // list named ranges then exit
    pub show_sprites: bool,      // include sprite URLs in the output
}

impl Params {
    pub fn new() -> Self {
        Self {
            range: IdRange::default(),
            query: None,
            legendary: false,
            list_ranges: false,
            show_sprites: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run() -> Result<(), Box<dyn Error + Send + Sync>> {
    let params = parse_cli()?;

    if params.list_ranges {
        for (name, start, end) in GEN_RANGES {
            println!("{}\t{}-{}", name, start, end);
        }
        return Ok(());
    }

    let source = Arc::new(HttpSource::new()?);
    let mut dex = Dex::new(source);

    // The classification pass is ~2000 upstream calls; only pay for it when
    // the legendary filter is actually requested.
    if params.legendary {
        let mut prog = CliProgress::new("species");
        let report = dex.build_legendary(Some(&mut prog))?;
        eprintln!("{}", report.summary());
    }

    let mut prog = CliProgress::new("entry");
    let loaded = match dex.load_range(params.range.start, params.range.end, Some(&mut prog))? {
        LoadOutcome::Applied(seq) => seq,
        // A single sequential load cannot be superseded.
        LoadOutcome::Superseded => Vec::new(),
    };

    let criteria = FilterCriteria {
        query: params.query.unwrap_or_default(),
        category: if params.legendary { CategoryFilter::Legendary } else { CategoryFilter::All },
    };
    let view = filter::apply(&loaded, &criteria, dex.legendary());

    for entry in &view {
        if params.show_sprites {
            println!(
                "#{:03} {:<14} {:<18} {}",
                entry.id,
                entry.name.to_uppercase(),
                entry.types.join("/"),
                entry.sprite.as_deref().unwrap_or("-"),
            );
        } else {
            println!(
                "#{:03} {:<14} {}",
                entry.id,
                entry.name.to_uppercase(),
                entry.types.join("/"),
            );
        }
    }
    eprintln!("{} of {} entries shown", view.len(), loaded.len());
    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn Error + Send + Sync>> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-r" | "--range" => {
                let v = args.next().ok_or("Missing value for --range")?;
                params.range = parse_range(&v)?;}
            "-s" | "--search" => {
                params.query = Some(args.next().ok_or("Missing value for --search")?);}
            "-l" | "--legendary" => params.legendary = true,
            "--sprites" => params.show_sprites = true,
            "--list-ranges" => params.list_ranges = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}

/// A range is either a name from the fixed table or an explicit `a-b` pair
/// within the displayed id universe.
fn parse_range(s: &str) -> Result<IdRange, Box<dyn Error + Send + Sync>> {
    if let Some(range) = IdRange::named(s) {
        return Ok(range);
    }
    if let Some(dash) = s.find('-') {
        let a: u32 = s[..dash].trim().parse()?;
        let b: u32 = s[dash + 1..].trim().parse()?;
        if a == 0 || b > DEX_MAX {
            return Err(format!("Range out of bounds (1..{}): {}", DEX_MAX, s).into());
        }
        if a > b {
            return Err(format!("Invalid range: {}", s).into());
        }
        return Ok(IdRange { start: a, end: b });
    }
    Err(format!("Unknown range: {} (try --list-ranges)", s).into())
}

/// Progress sink that prints lines to stderr.
struct CliProgress {
    noun: &'static str,
    done: usize,
    failed: usize,
    total: usize,
}

impl CliProgress {
    fn new(noun: &'static str) -> Self {
        Self { noun, done: 0, failed: 0, total: 0 }
    }
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        if total > 0 {
            eprintln!("Fetching {} {} records…", total, self.noun);
        }
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
    fn item_done(&mut self, _id: u32) {
        self.done += 1;
        // One line per item would drown the terminal on a full pass.
        if self.done % 50 == 0 || self.done + self.failed == self.total {
            eprintln!("  {}/{}", self.done + self.failed, self.total);
        }
    }
    fn item_failed(&mut self, id: u32) {
        self.failed += 1;
        eprintln!("  {} {} failed", self.noun, id);
    }
    fn finish(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_ranges_resolve() {
        assert_eq!(parse_range("1").unwrap(), IdRange { start: 1, end: 151 });
        assert_eq!(parse_range("4").unwrap(), IdRange { start: 387, end: 493 });
        assert_eq!(parse_range("all").unwrap(), IdRange { start: 1, end: 493 });
    }

    #[test]
    fn explicit_ranges_parse_and_validate() {
        assert_eq!(parse_range("10-20").unwrap(), IdRange { start: 10, end: 20 });
        assert!(parse_range("20-10").is_err());
        assert!(parse_range("0-5").is_err());
        assert!(parse_range("1-9999").is_err());
        assert!(parse_range("gen-one").is_err());
    }
}
