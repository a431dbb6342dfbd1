//! WCAG relative luminance and white/black text contrast.
//!
//! The acceptance threshold is 7:1, the WCAG AAA level for normal text,
//! rather than the 4.5:1 AA level. At that height a luminance-only check
//! is a good enough stand-in for "the letters are clearly different from
//! the background" without bringing hue into it, which also keeps the
//! judgement stable for colour-blind readers.
//!
//! The sRGB linearisation threshold is the 0.03928 printed in WCAG 2.0
//! (G17), not the 0.04045 of the sRGB standard. For 8-bit inputs the two
//! agree on every value.

use std::fmt;

use cv_color::Color;

/// Minimum contrast ratio for the chosen text colour.
pub const MIN_CONTRAST_RATIO: f64 = 7.0;

// ─── Text colour ─────────────────────────────────────────────────────────────

/// The two text colours an accent can be paired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColour {
    White,
    Black,
}

impl TextColour {
    /// The CSS keyword for this colour.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    #[must_use]
    pub const fn to_color(self) -> Color {
        match self {
            Self::White => Color::WHITE,
            Self::Black => Color::BLACK,
        }
    }
}

impl fmt::Display for TextColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Luminance ───────────────────────────────────────────────────────────────

/// Linearise one 8-bit sRGB channel.
fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.039_28 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.0.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white. Alpha
/// is ignored.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let r = srgb_to_linear(color.r);
    let g = srgb_to_linear(color.g);
    let b = srgb_to_linear(color.b);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// Contrast ratio `(l1 + 0.05) / (l2 + 0.05)`.
///
/// Directional: `l1` is expected to be the lighter luminance. Swapping the
/// arguments yields the reciprocal, not the same value.
#[must_use]
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    (l1 + 0.05) / (l2 + 0.05)
}

// ─── Evaluation ──────────────────────────────────────────────────────────────

/// How white and black text fare against one background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastReport {
    /// Whether the better of the two ratios reaches the threshold.
    pub enough: bool,

    /// The text colour with the higher ratio. Ties go to black.
    pub which: TextColour,

    /// White text over the background.
    pub white_ratio: f64,

    /// The background over black text.
    pub black_ratio: f64,
}

impl ContrastReport {
    /// The ratio of the chosen text colour.
    #[must_use]
    pub const fn best_ratio(&self) -> f64 {
        match self.which {
            TextColour::White => self.white_ratio,
            TextColour::Black => self.black_ratio,
        }
    }
}

/// Evaluate `background` against white and black text at the 7:1 threshold.
#[must_use]
pub fn evaluate_contrast(background: Color) -> ContrastReport {
    evaluate_contrast_with(background, MIN_CONTRAST_RATIO)
}

/// Evaluate `background` against white and black text at `min_ratio`.
#[must_use]
pub fn evaluate_contrast_with(background: Color, min_ratio: f64) -> ContrastReport {
    let l_bg = relative_luminance(background);

    let white_ratio = contrast_ratio(relative_luminance(Color::WHITE), l_bg);
    let black_ratio = contrast_ratio(l_bg, relative_luminance(Color::BLACK));

    let (which, best) = if white_ratio > black_ratio {
        (TextColour::White, white_ratio)
    } else {
        (TextColour::Black, black_ratio)
    };

    ContrastReport {
        enough: best >= min_ratio,
        which,
        white_ratio,
        black_ratio,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
