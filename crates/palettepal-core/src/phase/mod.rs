// crates/palettepal-core/src/phase/mod.rs

pub mod array;
pub mod sampler;

pub use array::{ensemble_id, parse_ensemble, render_phase_pair, PhaseArray, PHASE_LEN};
pub use sampler::{entropy_seed, round_rng, PhaseSampler, SamplingMode, DEFAULT_ANCHORS};
