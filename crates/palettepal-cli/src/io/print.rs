// crates/palettepal-cli/src/io/print.rs
//
// Terminal rendering of accepted specimens on stdout.

use std::io::Write;

use palettepal_core::color::BlendMatrix;
use palettepal_core::error::Result;
use palettepal_core::phase::{render_phase_pair, PhaseArray, PHASE_LEN};
use palettepal_core::search::{Accepted, SpecimenSink};

pub struct PrintSink<'a> {
    blend: Option<&'a BlendMatrix>,
}

impl<'a> PrintSink<'a> {
    pub fn new(blend: Option<&'a BlendMatrix>) -> Self {
        Self { blend }
    }
}

/// Blend of A[k] with B[k] for each position, as "#RRGGBB".
pub fn blend_line(m: &BlendMatrix, a: &PhaseArray, b: &PhaseArray) -> String {
    (0..PHASE_LEN)
        .map(|k| m.get(a.get(k) as usize, b.get(k) as usize).to_hex())
        .collect::<Vec<_>>()
        .join(" ")
}

impl SpecimenSink for PrintSink<'_> {
    fn submit(&mut self, accepted: &Accepted<'_>) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(out)?;
        write!(out, "{}", render_phase_pair(accepted.phase_a, accepted.phase_b))?;
        writeln!(
            out,
            " round={} ensemble={} color_count={}",
            accepted.round, accepted.ensemble, accepted.score.color_count
        )?;
        if let Some(m) = self.blend {
            writeln!(out, " blend: {}", blend_line(m, accepted.phase_a, accepted.phase_b))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }
}
