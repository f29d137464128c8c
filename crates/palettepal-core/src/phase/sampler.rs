// crates/palettepal-core/src/phase/sampler.rs
//
// Phase-pair sampling.
//
// Independent: 16 uniform draws per array.
// Anchored:    positions in `anchors` copy position 0 of the same array,
//              so only 16 - anchors.len() draws are made per array.
//
// Every round gets its own ChaCha8 stream (seed, round), so outcomes do not
// depend on how rounds are scheduled across workers.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{PalError, Result};
use crate::phase::array::{PhaseArray, PHASE_LEN};

pub const DEFAULT_ANCHORS: [usize; 3] = [4, 8, 12];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SamplingMode {
    Independent,
    Anchored,
}

impl SamplingMode {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "independent" | "indep" | "free" => Ok(SamplingMode::Independent),
            "anchored" | "anchor" => Ok(SamplingMode::Anchored),
            _ => Err(PalError::Validation(format!("unknown sampling mode: {s}"))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SamplingMode::Independent => "independent",
            SamplingMode::Anchored => "anchored",
        }
    }
}

#[derive(Clone, Debug)]
pub struct PhaseSampler {
    mode: SamplingMode,
    anchors: Vec<usize>,
    palette_size: u8,
}

impl PhaseSampler {
    /// `palette_size` must be in 1..=255; anchors must lie in 1..16.
    pub fn new(mode: SamplingMode, anchors: &[usize], palette_size: usize) -> Result<Self> {
        if palette_size == 0 || palette_size > u8::MAX as usize {
            return Err(PalError::Validation(format!(
                "palette size must be in 1..=255, got {palette_size}"
            )));
        }
        if let Some(&bad) = anchors.iter().find(|&&p| p == 0 || p >= PHASE_LEN) {
            return Err(PalError::Validation(format!(
                "anchor position {bad} outside 1..{PHASE_LEN}"
            )));
        }
        Ok(Self {
            mode,
            anchors: anchors.to_vec(),
            palette_size: palette_size as u8,
        })
    }

    pub fn mode(&self) -> SamplingMode {
        self.mode
    }

    pub fn sample_array<R: Rng + ?Sized>(&self, rng: &mut R) -> PhaseArray {
        let mut out = [0u8; PHASE_LEN];
        for i in 0..PHASE_LEN {
            out[i] = match self.mode {
                SamplingMode::Anchored if self.anchors.contains(&i) => out[0],
                _ => rng.gen_range(0..self.palette_size),
            };
        }
        PhaseArray(out)
    }

    /// A first, then B, from the same source.
    pub fn sample_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> (PhaseArray, PhaseArray) {
        let a = self.sample_array(rng);
        let b = self.sample_array(rng);
        (a, b)
    }
}

/// A fresh run seed from OS entropy, for runs started without `--seed`.
pub fn entropy_seed() -> u64 {
    rand::random()
}

/// Per-round generator: stream `round` of the run seed.
pub fn round_rng(seed: u64, round: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(round);
    rng
}
