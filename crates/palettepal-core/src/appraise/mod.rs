// crates/palettepal-core/src/appraise/mod.rs
//
// Scoring a phase pair against the sieve.
//
// Distinct:    each distinct code of the VPS is examined once; a member code
//              counts once however many cells produce it.
// Occurrences: every one of the 256 cells is checked, duplicates included.

use serde::Serialize;

use crate::error::{PalError, Result};
use crate::phase::array::PhaseArray;
use crate::sieve::Sieve;
use crate::vps::{expand, Vps};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScoringMode {
    #[default]
    Distinct,
    Occurrences,
}

impl ScoringMode {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distinct" | "unique" => Ok(ScoringMode::Distinct),
            "occurrences" | "all" | "cells" => Ok(ScoringMode::Occurrences),
            _ => Err(PalError::Validation(format!("unknown scoring mode: {s}"))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScoringMode::Distinct => "distinct",
            ScoringMode::Occurrences => "occurrences",
        }
    }
}

/// Score map. `max_vp_size` and `contrast_amount` are reserved and stay 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub color_count: u32,
    pub max_vp_size: u32,
    pub contrast_amount: u32,
}

impl Score {
    pub const METRICS: [&'static str; 3] = ["color_count", "max_vp_size", "contrast_amount"];

    pub fn get(&self, metric: &str) -> Option<u32> {
        match metric {
            "color_count" => Some(self.color_count),
            "max_vp_size" => Some(self.max_vp_size),
            "contrast_amount" => Some(self.contrast_amount),
            _ => None,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        Self::METRICS
            .into_iter()
            .map(move |m| (m, self.get(m).unwrap_or(0)))
    }
}

/// Count sieve members in an already-expanded VPS.
pub fn count_members(vps: &Vps, sieve: &Sieve, mode: ScoringMode) -> u32 {
    match mode {
        ScoringMode::Occurrences => vps.iter().filter(|&&c| sieve.contains(c)).count() as u32,
        ScoringMode::Distinct => {
            let mut seen = *vps;
            seen.sort_unstable();
            let mut count = 0u32;
            let mut prev: Option<u16> = None;
            for &c in seen.iter() {
                if prev == Some(c) {
                    continue;
                }
                prev = Some(c);
                if sieve.contains(c) {
                    count += 1;
                }
            }
            count
        }
    }
}

pub fn appraise(a: &PhaseArray, b: &PhaseArray, sieve: &Sieve, mode: ScoringMode) -> Score {
    let vps = expand(a, b);
    Score {
        color_count: count_members(&vps, sieve, mode),
        ..Score::default()
    }
}
