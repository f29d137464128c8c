// crates/palettepal-cli/src/cmd/filter_args.rs

use clap::Args;
use palettepal_core::sieve::{
    LoadStats, RankScheme, Sieve, SieveConfig, DEFAULT_RANK_LABEL, DEFAULT_SEED_CODES,
};
use palettepal_core::vps::CompoundCode;

use crate::io::filter_file;

/// Filter source options shared by `search` and `appraise`.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Filter CSV: rows of <hex code>,<rank label>
    #[arg(long)]
    pub filter: String,

    /// Admit rows ranked at or below this label (green=4, yellow=6)
    #[arg(long, default_value = DEFAULT_RANK_LABEL)]
    pub rank: String,

    /// Add or override a rank label weight, e.g. red=9 (repeatable)
    #[arg(long = "rank-weight", value_parser = parse_rank_weight)]
    pub rank_weights: Vec<(String, u8)>,

    /// Code always present in the filter (hex, repeatable). Replaces the built-in seeds.
    #[arg(long = "seed-code", value_parser = parse_code)]
    pub seed_codes: Vec<CompoundCode>,

    /// Do not inject any seed codes
    #[arg(long, default_value_t = false)]
    pub no_seed_codes: bool,
}

impl FilterArgs {
    pub fn seeds(&self) -> Vec<CompoundCode> {
        if self.no_seed_codes {
            Vec::new()
        } else if self.seed_codes.is_empty() {
            DEFAULT_SEED_CODES.to_vec()
        } else {
            self.seed_codes.clone()
        }
    }

    pub fn sieve_config(&self) -> SieveConfig {
        let scheme = self
            .rank_weights
            .iter()
            .fold(RankScheme::default(), |s, (label, w)| s.with_rank(label, *w));
        SieveConfig {
            scheme,
            threshold_label: self.rank.clone(),
            seed_codes: self.seeds(),
        }
    }

    pub fn load(&self) -> anyhow::Result<(Sieve, LoadStats)> {
        filter_file::load_sieve(&self.filter, &self.sieve_config())
    }
}

fn parse_rank_weight(s: &str) -> Result<(String, u8), String> {
    let (label, weight) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=WEIGHT, got '{s}'"))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(format!("empty rank label in '{s}'"));
    }
    let weight = weight
        .trim()
        .parse::<u8>()
        .map_err(|e| format!("invalid weight in '{s}': {e}"))?;
    Ok((label.to_string(), weight))
}

pub fn parse_code(s: &str) -> Result<CompoundCode, String> {
    let t = s.trim();
    let t = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")).unwrap_or(t);
    if t.is_empty() || !t.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("expected a hex code, got '{s}'"));
    }
    u16::from_str_radix(t, 16).map_err(|e| format!("code '{s}' does not fit 16 bits: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_code_forms() {
        assert_eq!(parse_code("0921"), Ok(0x0921));
        assert_eq!(parse_code("0x0a05"), Ok(0x0A05));
        assert!(parse_code("").is_err());
        assert_eq!(parse_code("00921"), Ok(0x0921));
        assert!(parse_code("10000").is_err());
        assert!(parse_code("+1").is_err());
    }

    #[test]
    fn seed_selection() {
        let mut a = FilterArgs {
            filter: String::new(),
            rank: "yellow".into(),
            rank_weights: vec![],
            seed_codes: vec![],
            no_seed_codes: false,
        };
        assert_eq!(a.seeds(), DEFAULT_SEED_CODES.to_vec());
        a.seed_codes = vec![0x0101];
        assert_eq!(a.seeds(), vec![0x0101]);
        a.no_seed_codes = true;
        assert!(a.seeds().is_empty());
    }

    #[test]
    fn rank_weights_feed_the_scheme() {
        assert_eq!(parse_rank_weight("Red=9"), Ok(("Red".to_string(), 9)));
        assert!(parse_rank_weight("red").is_err());
        assert!(parse_rank_weight("=3").is_err());
        assert!(parse_rank_weight("red=300").is_err());

        let a = FilterArgs {
            filter: String::new(),
            rank: "red".into(),
            rank_weights: vec![("Red".into(), 9), ("green".into(), 1)],
            seed_codes: vec![],
            no_seed_codes: false,
        };
        let cfg = a.sieve_config();
        assert_eq!(cfg.threshold_label, "red");
        assert_eq!(cfg.scheme.threshold("red").unwrap(), 9);
        assert_eq!(cfg.scheme.weight("green"), 1);
        assert_eq!(cfg.scheme.weight("yellow"), 6);
        assert_eq!(cfg.seed_codes, DEFAULT_SEED_CODES.to_vec());
    }
}
