//! Invariants of luminance, contrast evaluation and accent selection.
//!
//! 1. Luminance is non-decreasing in each channel with the others fixed.
//! 2. Luminance stays in [0, 1]; both ratios stay in [1, 21].
//! 3. `which` always names the larger ratio, `enough` follows the threshold.
//! 4. Every selected accent passes both checks.
//! 5. Selection terminates quickly: p99 attempts over 10 000 picks < 50.

use cv_color::Color;
use cv_contrast::contrast::{MIN_CONTRAST_RATIO, TextColour, evaluate_contrast, relative_luminance};
use cv_contrast::selector::AccentSelector;
use cv_contrast::whitish::colour_is_too_whitish;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

const EPS: f64 = 1e-9;

proptest! {
    #[test]
    fn luminance_monotone_in_red(r in 0u8..255, g: u8, b: u8) {
        prop_assert!(relative_luminance(Color::rgb(r + 1, g, b)) >= relative_luminance(Color::rgb(r, g, b)));
    }

    #[test]
    fn luminance_monotone_in_green(r: u8, g in 0u8..255, b: u8) {
        prop_assert!(relative_luminance(Color::rgb(r, g + 1, b)) >= relative_luminance(Color::rgb(r, g, b)));
    }

    #[test]
    fn luminance_monotone_in_blue(r: u8, g: u8, b in 0u8..255) {
        prop_assert!(relative_luminance(Color::rgb(r, g, b + 1)) >= relative_luminance(Color::rgb(r, g, b)));
    }

    #[test]
    fn ratios_are_bounded(r: u8, g: u8, b: u8) {
        let color = Color::rgb(r, g, b);
        let l = relative_luminance(color);
        prop_assert!((-EPS..=1.0 + EPS).contains(&l));

        let report = evaluate_contrast(color);
        prop_assert!((1.0 - EPS..=21.0 + EPS).contains(&report.white_ratio));
        prop_assert!((1.0 - EPS..=21.0 + EPS).contains(&report.black_ratio));
    }

    #[test]
    fn which_names_the_larger_ratio(r: u8, g: u8, b: u8) {
        let report = evaluate_contrast(Color::rgb(r, g, b));
        match report.which {
            TextColour::White => prop_assert!(report.white_ratio > report.black_ratio),
            TextColour::Black => prop_assert!(report.black_ratio >= report.white_ratio),
        }
        prop_assert_eq!(report.enough, report.best_ratio() >= MIN_CONTRAST_RATIO);
    }

    #[test]
    fn selection_passes_both_checks(seed: u64) {
        let selection = AccentSelector::default().pick(&mut StdRng::seed_from_u64(seed));
        prop_assert!(!selection.exhausted);

        let report = evaluate_contrast(selection.pair.accent);
        prop_assert!(report.enough);
        prop_assert_eq!(report.which, selection.pair.text);
        prop_assert!(!colour_is_too_whitish(selection.pair.accent));
    }
}

#[test]
fn ten_thousand_picks_terminate_quickly() {
    let selector = AccentSelector::default();
    let mut rng = StdRng::seed_from_u64(0x00c0_ffee);

    let mut attempts: Vec<u32> = (0..10_000)
        .map(|_| {
            let selection = selector.pick(&mut rng);
            assert!(!selection.exhausted);
            assert!(evaluate_contrast(selection.pair.accent).enough);
            assert!(!colour_is_too_whitish(selection.pair.accent));
            selection.attempts
        })
        .collect();

    attempts.sort_unstable();
    let p99 = attempts[attempts.len() * 99 / 100];
    assert!(p99 < 50, "p99 attempts: {p99}");
}
