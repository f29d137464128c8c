// crates/palettepal-core/src/sieve/load.rs
//
// Filter source rows: "<hex code>,<rank label>[,...]"
//
// Malformed rows (bad hex, missing label, blank) are skipped and counted.
// A failing reader is fatal: the search has no acceptance criterion without it.

use std::io::BufRead;

use tracing::debug;

use crate::error::Result;
use crate::sieve::{rank::RankScheme, Sieve};
use crate::vps::CompoundCode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub rows: usize,
    pub admitted: usize,
    pub rejected_rank: usize,
    pub malformed: usize,
}

fn unquote(field: &str) -> &str {
    let t = field.trim();
    t.strip_prefix('"')
        .and_then(|x| x.strip_suffix('"'))
        .unwrap_or(t)
        .trim()
}

/// Parse one row into (code, label). `None` for anything that is not a
/// hex code fitting 16 bits (leading zeros allowed) followed by a non-empty label.
///
/// Fields are split on every comma; a quoted field containing a comma is not supported.
pub fn parse_row(line: &str) -> Option<(CompoundCode, &str)> {
    let mut fields = line.split(',');
    let code = unquote(fields.next()?);
    let label = unquote(fields.next()?);

    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    if label.is_empty() {
        return None;
    }
    let cc = u16::from_str_radix(code, 16).ok()?;
    Some((cc, label))
}

impl Sieve {
    /// Admit rows whose rank weight is <= `threshold_weight`.
    pub fn load_rows<R: BufRead>(
        &mut self,
        mut reader: R,
        scheme: &RankScheme,
        threshold_weight: u8,
    ) -> Result<LoadStats> {
        let mut stats = LoadStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() {
                continue;
            }
            stats.rows += 1;

            match parse_row(line) {
                Some((cc, label)) => {
                    if scheme.admits(label, threshold_weight) {
                        self.insert(cc);
                        stats.admitted += 1;
                    } else {
                        stats.rejected_rank += 1;
                    }
                }
                None => stats.malformed += 1,
            }
        }

        debug!(
            rows = stats.rows,
            admitted = stats.admitted,
            rejected_rank = stats.rejected_rank,
            malformed = stats.malformed,
            sieve_len = self.len(),
            "filter rows loaded"
        );
        Ok(stats)
    }
}
