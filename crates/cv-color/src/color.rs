// SPDX-License-Identifier: MIT
//
// Colour value type — an 8-bit sRGB triple with an optional alpha.
//
// Alpha is carried so that colours read back from a stylesheet survive a
// parse → format round trip, but nothing in the contrast engine looks at
// it. Browsers report alpha either as a byte or as a 0–1 fraction, so
// both forms are kept verbatim rather than normalised.

use std::fmt;
use std::str::FromStr;

use crate::parse::{self, ParseColorError};

// ─── Alpha ───────────────────────────────────────────────────────────────────

/// The alpha channel exactly as it was written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alpha {
    /// Integer alpha, 0 (transparent) to 255 (opaque).
    Byte(u8),

    /// Fractional alpha, 0.0 (transparent) to 1.0 (opaque).
    Fraction(f32),
}

impl Alpha {
    /// Alpha as a 0.0–1.0 opacity, whichever form it was written in.
    #[must_use]
    pub fn to_fraction(self) -> f32 {
        match self {
            Self::Byte(a) => f32::from(a) / 255.0,
            Self::Fraction(a) => a,
        }
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Byte(a) => write!(f, "{a}"),
            // Keep a decimal point so `1.0` doesn't come back as `Byte(1)`.
            Self::Fraction(a) if a.fract() == 0.0 => write!(f, "{a:.1}"),
            Self::Fraction(a) => write!(f, "{a}"),
        }
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An 8-bit sRGB colour.
///
/// Channels are `u8`, so every value is inside the 0–255 domain the
/// luminance formula is defined over.
///
/// # Examples
///
/// ```
/// use cv_color::Color;
///
/// let teal: Color = "rgb(0, 128, 128)".parse().unwrap();
/// assert_eq!(teal.channels(), (0, 128, 128));
/// assert_eq!(teal.to_string(), "rgb(0 128 128)");
/// assert_eq!(teal.to_hex(), "#008080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,

    /// `None` for colours written without an alpha component.
    pub alpha: Option<Alpha>,
}

impl Color {
    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Create an opaque colour from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: None,
        }
    }

    /// Create a colour with an explicit alpha.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, alpha: Alpha) -> Self {
        Self {
            r,
            g,
            b,
            alpha: Some(alpha),
        }
    }

    /// Return a copy with the given alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: Alpha) -> Self {
        Self {
            alpha: Some(alpha),
            ..self
        }
    }

    /// Return a copy with the alpha dropped.
    #[inline]
    #[must_use]
    pub const fn without_alpha(self) -> Self {
        Self {
            alpha: None,
            ..self
        }
    }

    /// The `(r, g, b)` channels.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Whether the colour was written without alpha or with full opacity.
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha.is_none_or(|a| a.to_fraction() >= 1.0)
    }

    /// `#rrggbb`. Alpha is not encoded.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    /// `rgb(R G B)` without alpha, `rgba(R, G, B, A)` with it.
    ///
    /// Both forms parse back through [`Color::from_str`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alpha {
            None => write!(f, "rgb({} {} {})", self.r, self.g, self.b),
            Some(a) => write!(f, "rgba({}, {}, {}, {a})", self.r, self.g, self.b),
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_color(s)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_opaque_uses_space_separated_rgb() {
        assert_eq!(Color::rgb(12, 34, 56).to_string(), "rgb(12 34 56)");
    }

    #[test]
    fn display_with_byte_alpha() {
        let c = Color::rgba(1, 2, 3, Alpha::Byte(128));
        assert_eq!(c.to_string(), "rgba(1, 2, 3, 128)");
    }

    #[test]
    fn display_with_fraction_alpha() {
        let c = Color::rgba(1, 2, 3, Alpha::Fraction(0.5));
        assert_eq!(c.to_string(), "rgba(1, 2, 3, 0.5)");
    }

    #[test]
    fn whole_fraction_keeps_decimal_point() {
        assert_eq!(Alpha::Fraction(1.0).to_string(), "1.0");
        assert_eq!(Alpha::Fraction(0.0).to_string(), "0.0");
    }

    #[test]
    fn hex_is_lowercase_rrggbb() {
        assert_eq!(Color::rgb(200, 100, 50).to_hex(), "#c86432");
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn opacity() {
        assert!(Color::BLACK.is_opaque());
        assert!(Color::BLACK.with_alpha(Alpha::Byte(255)).is_opaque());
        assert!(Color::BLACK.with_alpha(Alpha::Fraction(1.0)).is_opaque());
        assert!(!Color::BLACK.with_alpha(Alpha::Fraction(0.5)).is_opaque());
        assert!(!Color::BLACK.with_alpha(Alpha::Byte(0)).is_opaque());
    }

    #[test]
    fn alpha_fraction_of_byte() {
        assert!((Alpha::Byte(255).to_fraction() - 1.0).abs() < f32::EPSILON);
        assert!(Alpha::Byte(0).to_fraction().abs() < f32::EPSILON);
    }

    #[test]
    fn without_alpha_strips() {
        let c = Color::rgba(9, 8, 7, Alpha::Byte(1)).without_alpha();
        assert_eq!(c, Color::rgb(9, 8, 7));
    }
}
