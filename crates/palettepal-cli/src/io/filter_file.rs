// crates/palettepal-cli/src/io/filter_file.rs

use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use palettepal_core::sieve::{LoadStats, Sieve, SieveConfig};

/// Open a filter CSV and build the sieve: seeds first, then admitted rows.
/// An unknown rank label or an unopenable file is fatal; malformed rows are skipped.
pub fn load_sieve(path: &str, cfg: &SieveConfig) -> anyhow::Result<(Sieve, LoadStats)> {
    cfg.scheme.threshold(&cfg.threshold_label)?;
    let fd = File::open(path).with_context(|| format!("open filter csv {path}"))?;
    let loaded =
        Sieve::load(cfg, BufReader::new(fd)).with_context(|| format!("read filter csv {path}"))?;
    Ok(loaded)
}
