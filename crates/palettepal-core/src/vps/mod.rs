// crates/palettepal-core/src/vps/mod.rs
//
// Virtual palette set (VPS): the 16x16 product of a phase pair.
//   code[i*16 + j] = (a[i] << 8) | b[j]
// Enumeration order is i outer, j inner.

use std::fmt::Write as _;

use crate::phase::array::{PhaseArray, PHASE_LEN};

pub const VPS_LEN: usize = PHASE_LEN * PHASE_LEN;

/// 16-bit packed (indexA, indexB).
pub type CompoundCode = u16;

pub type Vps = [CompoundCode; VPS_LEN];

#[inline]
pub fn compound(a: u8, b: u8) -> CompoundCode {
    (u16::from(a) << 8) | u16::from(b)
}

#[inline]
pub fn split(code: CompoundCode) -> (u8, u8) {
    ((code >> 8) as u8, (code & 0xFF) as u8)
}

pub fn expand(a: &PhaseArray, b: &PhaseArray) -> Vps {
    let mut vps = [0u16; VPS_LEN];
    for i in 0..PHASE_LEN {
        for j in 0..PHASE_LEN {
            vps[i * PHASE_LEN + j] = compound(a.get(i), b.get(j));
        }
    }
    vps
}

/// 16 rows of 16 four-digit hex codes.
pub fn render_vps(vps: &Vps) -> String {
    let mut s = String::new();
    for row in vps.chunks(PHASE_LEN) {
        for (j, code) in row.iter().enumerate() {
            if j > 0 {
                s.push(' ');
            }
            let _ = write!(s, "{:04x}", code);
        }
        s.push('\n');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_split_inverse() {
        assert_eq!(compound(0x09, 0x21), 0x0921);
        assert_eq!(split(0x0A05), (0x0A, 0x05));
    }

    #[test]
    fn render_is_16_by_16() {
        let a = PhaseArray([1; PHASE_LEN]);
        let b = PhaseArray([2; PHASE_LEN]);
        let r = render_vps(&expand(&a, &b));
        let lines: Vec<&str> = r.lines().collect();
        assert_eq!(lines.len(), 16);
        assert!(lines.iter().all(|l| l.split(' ').count() == 16));
        assert!(lines[0].starts_with("0102 0102"));
    }
}
