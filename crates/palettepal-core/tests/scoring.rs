use std::io::Cursor;

use palettepal_core::appraise::{appraise, ScoringMode};
use palettepal_core::color::Rgb;
use palettepal_core::phase::{round_rng, PhaseArray, PhaseSampler, SamplingMode, PHASE_LEN};
use palettepal_core::sieve::{RankScheme, Sieve};
use palettepal_core::vps::expand;
use palettepal_core::{Adjudicator, Specimen};

fn alternating() -> PhaseArray {
    let mut a = [0u8; PHASE_LEN];
    for (i, v) in a.iter_mut().enumerate() {
        *v = (i % 2) as u8;
    }
    PhaseArray(a)
}

#[test]
fn duplicate_member_code_counts_once() {
    // Two cells produce 0x0102: (a[0], b[0]) and (a[1], b[0]).
    let mut a = [0x3Fu8; PHASE_LEN];
    a[0] = 0x01;
    a[1] = 0x01;
    let mut b = [0x3Eu8; PHASE_LEN];
    b[0] = 0x02;
    let (a, b) = (PhaseArray(a), PhaseArray(b));

    let sieve = Sieve::with_seeds(&[0x0102]);
    assert_eq!(appraise(&a, &b, &sieve, ScoringMode::Distinct).color_count, 1);
    assert_eq!(appraise(&a, &b, &sieve, ScoringMode::Occurrences).color_count, 2);
}

#[test]
fn two_color_palette_end_to_end() {
    let palette = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
    let sieve = Sieve::with_seeds(&[0x0001, 0x0100]);

    let a = alternating();
    let b = alternating();
    let vps = expand(&a, &b);
    let cells = vps.iter().filter(|&&c| c == 0x0001 || c == 0x0100).count();
    assert_eq!(cells, 128);

    assert_eq!(appraise(&a, &b, &sieve, ScoringMode::Distinct).color_count, 2);
    assert_eq!(appraise(&a, &b, &sieve, ScoringMode::Occurrences).color_count, 128);

    // Any arrangement drawn from the two-entry palette scores the distinct member codes present.
    let sampler = PhaseSampler::new(SamplingMode::Independent, &[], palette.len()).unwrap();
    let mut rng = round_rng(11, 0);
    for _ in 0..50 {
        let (a, b) = sampler.sample_pair(&mut rng);
        let vps = expand(&a, &b);
        let expect = [0x0001u16, 0x0100]
            .iter()
            .filter(|c| vps.contains(c))
            .count() as u32;
        assert_eq!(appraise(&a, &b, &sieve, ScoringMode::Distinct).color_count, expect);
    }
}

#[test]
fn yellow_row_admission_depends_on_threshold() {
    let scheme = RankScheme::default();

    let mut loose = Sieve::new();
    loose
        .load_rows(Cursor::new("0921,yellow\n"), &scheme, scheme.threshold("yellow").unwrap())
        .unwrap();
    assert!(loose.contains(0x0921));

    let mut strict = Sieve::new();
    strict
        .load_rows(Cursor::new("0921,YELLOW\n"), &scheme, scheme.threshold("green").unwrap())
        .unwrap();
    assert!(!strict.contains(0x0921));
}

#[test]
fn worthy_boundary_on_scored_specimen() {
    // a = 0..16, b = [0; 16] -> 16 distinct codes (i << 8).
    let mut a = [0u8; PHASE_LEN];
    for (i, v) in a.iter_mut().enumerate() {
        *v = i as u8;
    }
    let mut s = Specimen::new(PhaseArray(a), PhaseArray([0; PHASE_LEN]));
    let sieve: Sieve = (0..16u16).map(|i| i << 8).collect();
    s.appraise(&sieve, ScoringMode::Distinct);
    assert_eq!(s.score.color_count, 16);
    assert!(Adjudicator::new(15).is_worthy(&s.score));
    assert!(!Adjudicator::new(16).is_worthy(&s.score));
}
