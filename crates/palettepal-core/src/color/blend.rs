// crates/palettepal-core/src/color/blend.rs
//
// Root-mean-square blending of two colors, channel-wise:
//   out = round(sqrt((p^2 + q^2) / 2))
//
// Inputs are 8-bit, so the result never leaves [0, 255].
//
// The blend matrix is an inspection artifact. Scoring works on raw palette
// indices and never reads it.

use crate::color::rgb::Rgb;

#[inline]
fn rms(x: u8, y: u8) -> u8 {
    let xf = f64::from(x);
    let yf = f64::from(y);
    ((xf * xf + yf * yf) / 2.0).sqrt().round() as u8
}

/// Pairwise RMS blend of two colors.
#[inline]
pub fn blend(p: Rgb, q: Rgb) -> Rgb {
    Rgb::new(rms(p.r, q.r), rms(p.g, q.g), rms(p.b, q.b))
}

/// n×n grid where `get(i, j) == blend(palette[i], palette[j])`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlendMatrix {
    n: usize,
    cells: Vec<Rgb>,
}

impl BlendMatrix {
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Panics if `i` or `j` is outside the source palette.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Rgb {
        assert!(i < self.n && j < self.n, "blend index out of range");
        self.cells[i * self.n + j]
    }

    pub fn row(&self, i: usize) -> &[Rgb] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }
}

/// Blend every ordered pair of the palette once (n^2 blends).
pub fn build_blend_matrix(palette: &[Rgb]) -> BlendMatrix {
    let n = palette.len();
    let mut cells = Vec::with_capacity(n * n);
    for &ci in palette {
        for &cj in palette {
            cells.push(blend(ci, cj));
        }
    }
    BlendMatrix { n, cells }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rms_reference_values() {
        assert_eq!(rms(0, 255), 180); // sqrt(32512.5) = 180.31
        assert_eq!(rms(0, 0), 0);
        assert_eq!(rms(255, 255), 255);
        assert_eq!(rms(3, 4), 4); // sqrt(12.5) = 3.54
    }

    #[test]
    fn black_white_blend() {
        let out = blend(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
        assert_eq!(out, Rgb::new(180, 180, 180));
    }

    #[test]
    fn row_matches_get() {
        let pal = [Rgb::new(10, 20, 30), Rgb::new(200, 100, 0), Rgb::new(1, 2, 3)];
        let m = build_blend_matrix(&pal);
        for i in 0..3 {
            for (j, c) in m.row(i).iter().enumerate() {
                assert_eq!(*c, m.get(i, j));
            }
        }
    }
}
