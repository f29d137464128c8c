// crates/palettepal-core/src/phase/array.rs

use serde::Serialize;
use std::fmt::Write as _;

use crate::error::{PalError, Result};

pub const PHASE_LEN: usize = 16;

/// One half of a specimen: 16 indices into the palette.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhaseArray(pub [u8; PHASE_LEN]);

impl PhaseArray {
    #[inline]
    pub fn get(&self, i: usize) -> u8 {
        self.0[i]
    }

    /// Every index is < `palette_size`.
    pub fn fits(&self, palette_size: usize) -> bool {
        self.0.iter().all(|&v| (v as usize) < palette_size)
    }

    fn push_hex(&self, out: &mut String) {
        for v in self.0 {
            let _ = write!(out, "{:02X}", v);
        }
    }
}

/// Deterministic specimen identifier: uppercase hex of A followed by B (two digits per index, 64 chars).
pub fn ensemble_id(a: &PhaseArray, b: &PhaseArray) -> String {
    let mut s = String::with_capacity(PHASE_LEN * 4);
    a.push_hex(&mut s);
    b.push_hex(&mut s);
    s
}

/// Inverse of [`ensemble_id`]. Case-insensitive; every index must fit the palette.
pub fn parse_ensemble(s: &str, palette_size: usize) -> Result<(PhaseArray, PhaseArray)> {
    let t = s.trim();
    if t.len() != PHASE_LEN * 4 {
        return Err(PalError::Validation(format!(
            "ensemble must be {} hex chars, got {}",
            PHASE_LEN * 4,
            t.len()
        )));
    }
    if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PalError::Validation(format!("ensemble is not hex: {t}")));
    }

    let mut vals = [0u8; PHASE_LEN * 2];
    for (i, v) in vals.iter_mut().enumerate() {
        *v = u8::from_str_radix(&t[i * 2..i * 2 + 2], 16)
            .map_err(|e| PalError::Validation(format!("ensemble byte {i}: {e}")))?;
    }

    let mut a = [0u8; PHASE_LEN];
    let mut b = [0u8; PHASE_LEN];
    a.copy_from_slice(&vals[..PHASE_LEN]);
    b.copy_from_slice(&vals[PHASE_LEN..]);
    let (a, b) = (PhaseArray(a), PhaseArray(b));

    if !a.fits(palette_size) || !b.fits(palette_size) {
        return Err(PalError::Validation(format!(
            "ensemble has an index outside palette of size {palette_size}"
        )));
    }
    Ok((a, b))
}

/// A 4x4 beside B 4x4, two hex digits per index.
pub fn render_phase_pair(a: &PhaseArray, b: &PhaseArray) -> String {
    let mut s = String::new();
    for row in 0..4 {
        s.push_str(if row == 0 { " A:" } else { "   " });
        for col in 0..4 {
            let _ = write!(s, " {:02x}", a.get(row * 4 + col));
        }
        s.push_str(if row == 0 { "   B:" } else { "     " });
        for col in 0..4 {
            let _ = write!(s, " {:02x}", b.get(row * 4 + col));
        }
        s.push('\n');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq() -> PhaseArray {
        let mut a = [0u8; PHASE_LEN];
        for (i, v) in a.iter_mut().enumerate() {
            *v = (i * 4) as u8;
        }
        PhaseArray(a)
    }

    #[test]
    fn ensemble_is_uppercase_32_chars() {
        let a = seq();
        let b = PhaseArray([0x3F; PHASE_LEN]);
        let id = ensemble_id(&a, &b);
        assert_eq!(id.len(), 64);
        assert!(id.starts_with("0004080C1014181C"));
        assert!(id.ends_with("3F3F"));
        assert_eq!(id, id.to_ascii_uppercase());
    }

    #[test]
    fn parse_accepts_lowercase() {
        let a = seq();
        let b = PhaseArray([1; PHASE_LEN]);
        let id = ensemble_id(&a, &b).to_ascii_lowercase();
        let (pa, pb) = parse_ensemble(&id, 64).unwrap();
        assert_eq!(pa, a);
        assert_eq!(pb, b);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(parse_ensemble("00", 64).is_err());
        let zz = "Z".repeat(64);
        assert!(parse_ensemble(&zz, 64).is_err());
        let big = "40".repeat(32);
        assert!(parse_ensemble(&big, 64).is_err());
    }

    #[test]
    fn render_four_rows() {
        let r = render_phase_pair(&seq(), &seq());
        assert_eq!(r.lines().count(), 4);
        assert!(r.starts_with(" A: 00 04 08 0c   B: 00 04 08 0c"));
    }
}
