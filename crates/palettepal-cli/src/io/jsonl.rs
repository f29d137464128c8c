// crates/palettepal-cli/src/io/jsonl.rs

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::Context;
use palettepal_core::error::{PalError, Result};
use palettepal_core::search::{Accepted, SpecimenSink};

/// Accepted specimens as JSON lines, one object per specimen:
/// {"round":N,"ensemble":"..","phase_a":[..],"phase_b":[..],"score":{..},"meta":{..}}
///
/// Each line reaches the writer in a single `write_all`, so a failed submit
/// never leaves a partial record buffered ahead of the next one.
pub struct JsonlSink<W: Write = BufWriter<File>> {
    path: String,
    out: W,
    written: u64,
}

impl JsonlSink {
    pub fn create(path: &str, append: bool) -> anyhow::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)
            .with_context(|| format!("open specimen jsonl {path}"))?;
        Ok(Self::from_writer(path, BufWriter::new(file)))
    }
}

impl<W: Write> JsonlSink<W> {
    pub fn from_writer(path: &str, out: W) -> Self {
        Self {
            path: path.to_string(),
            out,
            written: 0,
        }
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SpecimenSink for JsonlSink<W> {
    fn submit(&mut self, accepted: &Accepted<'_>) -> Result<()> {
        let mut line = serde_json::to_vec(accepted)
            .map_err(|e| PalError::Sink(format!("encode {}: {e}", self.path)))?;
        line.push(b'\n');
        self.out
            .write_all(&line)
            .map_err(|e| PalError::Sink(format!("write {}: {e}", self.path)))?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
