// crates/palettepal-core/src/digest.rs

use std::fmt::Write as _;

pub fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let hash = blake3::hash(bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

pub fn hex_lower(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{:02x}", b);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blake3_16_is_prefix_of_full_hash() {
        let full = blake3::hash(b"palettepal");
        assert_eq!(&blake3_16(b"palettepal")[..], &full.as_bytes()[..16]);
    }

    #[test]
    fn hex_lower_pads() {
        assert_eq!(hex_lower(&[0x00, 0x0a, 0xff]), "000aff");
    }
}
