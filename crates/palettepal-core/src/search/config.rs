// crates/palettepal-core/src/search/config.rs

use serde::Serialize;

use crate::appraise::ScoringMode;
use crate::phase::sampler::SamplingMode;

/// What to do when the sink rejects an accepted specimen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SinkFailurePolicy {
    /// Log, count, keep sampling.
    #[default]
    Continue,
    /// Stop the run with an error.
    Abort,
}

#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub rounds: u64,
    pub workers: usize,
    pub seed: u64,

    pub sampling: SamplingMode,
    /// Positions copied from position 0 in anchored mode.
    pub anchors: Vec<usize>,

    pub scoring: ScoringMode,
    /// Worthy iff color_count > threshold.
    pub threshold: u32,

    /// Rounds evaluated per parallel batch before accepted specimens are
    /// forwarded to the sink.
    pub batch: usize,
    pub on_sink_error: SinkFailurePolicy,
}

/// Free-text provenance supplied by the caller.
#[derive(Clone, Debug, Default)]
pub struct Provenance {
    pub filter_desc: String,
    pub target_desc: String,
    pub rank_label: String,
}

/// Metadata attached to every accepted specimen of a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunMeta {
    pub run_id: String,
    pub seed: u64,
    pub filter_digest: String,
    pub filter_desc: String,
    pub target_desc: String,
    pub rank_label: String,
    pub sampling: &'static str,
    pub scoring: &'static str,
    pub threshold: u32,
}
