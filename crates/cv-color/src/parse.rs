// SPDX-License-Identifier: MIT
//
// Colour text → `Color`.
//
// Accepted forms:
//
//   rgb(R G B)            rgb(R, G, B)          rgba(R, G, B, A)
//   rgb(R G B / A)        #RGB  #RRGGBB         white  black
//
// Hex needs its `#`; bare digits would turn words like `bad` into colours.
//
// Separators between channels may be commas, whitespace, or both; that
// covers what `getComputedStyle` reports (always commas) and what a custom
// property reads back as (no commas). Alpha is either an integer byte or
// a decimal fraction such as `0.25` or `.25`.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::color::{Alpha, Color};

static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        ^rgba?\(\s*
        (?<r>\d+) (?:\s*,\s*|\s+)
        (?<g>\d+) (?:\s*,\s*|\s+)
        (?<b>\d+)
        (?: (?:\s*[,/]\s*|\s+) (?<a>\d*\.\d+|\d+) )?
        \s*\)$",
    )
    .expect("rgb() grammar is a valid regex")
});

/// Why a colour string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The text matches none of the accepted forms.
    #[error("unrecognised colour syntax: {0:?}")]
    Syntax(String),

    /// A channel parsed as an integer but does not fit in 0–255.
    #[error("{channel} channel value {value} is outside 0..=255")]
    ChannelOutOfRange { channel: char, value: String },

    /// Alpha is above 255 (byte form) or above 1.0 (fraction form).
    #[error("alpha value {0} is outside 0..=255 (or 0.0..=1.0 as a fraction)")]
    AlphaOutOfRange(String),
}

/// Parse any accepted colour form.
///
/// # Errors
///
/// Returns [`ParseColorError`] when the text is not a colour or a
/// component is out of range.
pub fn parse_color(s: &str) -> Result<Color, ParseColorError> {
    let s = s.trim();

    if s.eq_ignore_ascii_case("white") {
        return Ok(Color::WHITE);
    }
    if s.eq_ignore_ascii_case("black") {
        return Ok(Color::BLACK);
    }
    if let Some(digits) = s.strip_prefix('#') {
        return parse_hex(digits).ok_or_else(|| ParseColorError::Syntax(s.to_owned()));
    }

    parse_rgb(s)
}

/// Parse the `rgb(...)` / `rgba(...)` functional notation only.
///
/// # Errors
///
/// See [`parse_color`].
pub fn parse_rgb(s: &str) -> Result<Color, ParseColorError> {
    let caps = RGB_FUNCTION
        .captures(s.trim())
        .ok_or_else(|| ParseColorError::Syntax(s.to_owned()))?;

    let r = parse_channel('R', &caps["r"])?;
    let g = parse_channel('G', &caps["g"])?;
    let b = parse_channel('B', &caps["b"])?;

    let mut color = Color::rgb(r, g, b);
    if let Some(a) = caps.name("a") {
        color = color.with_alpha(parse_alpha(a.as_str())?);
    }

    Ok(color)
}

fn parse_channel(channel: char, digits: &str) -> Result<u8, ParseColorError> {
    digits
        .parse::<u8>()
        .map_err(|_| ParseColorError::ChannelOutOfRange {
            channel,
            value: digits.to_owned(),
        })
}

fn parse_alpha(text: &str) -> Result<Alpha, ParseColorError> {
    let out_of_range = || ParseColorError::AlphaOutOfRange(text.to_owned());

    if text.contains('.') {
        let a: f32 = text.parse().map_err(|_| out_of_range())?;
        if (0.0..=1.0).contains(&a) {
            Ok(Alpha::Fraction(a))
        } else {
            Err(out_of_range())
        }
    } else {
        text.parse::<u8>().map(Alpha::Byte).map_err(|_| out_of_range())
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// The digits of `#RGB` or `#RRGGBB`, after the `#`.
fn parse_hex(digits: &str) -> Option<Color> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();

    match digits.len() {
        // Each short digit is doubled: `f` → `ff`.
        3 => {
            let short = |i: usize| channel(i..i + 1).map(|d| d * 17);
            Some(Color::rgb(short(0)?, short(1)?, short(2)?))
        }
        6 => Some(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
