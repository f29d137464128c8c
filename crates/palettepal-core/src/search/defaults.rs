// crates/palettepal-core/src/search/defaults.rs

use crate::adjudicate::DEFAULT_THRESHOLD;
use crate::appraise::ScoringMode;
use crate::phase::sampler::{SamplingMode, DEFAULT_ANCHORS};
use crate::search::config::{SearchConfig, SinkFailurePolicy};

pub const DEFAULT_ROUNDS: u64 = 10_000;
pub const DEFAULT_BATCH: usize = 4096;
pub const DEFAULT_SEED: u64 = 0x9A1E_77E5_0921_0A05;

pub fn default_search_config() -> SearchConfig {
    SearchConfig {
        rounds: DEFAULT_ROUNDS,
        workers: 1,
        seed: DEFAULT_SEED,

        sampling: SamplingMode::Independent,
        anchors: DEFAULT_ANCHORS.to_vec(),

        scoring: ScoringMode::Distinct,
        threshold: DEFAULT_THRESHOLD,

        batch: DEFAULT_BATCH,
        on_sink_error: SinkFailurePolicy::Continue,
    }
}
