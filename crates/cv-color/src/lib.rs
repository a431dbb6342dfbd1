// SPDX-License-Identifier: MIT
//
// cv-color — the colour value type for cv-accent.
//
// Everything downstream (luminance, contrast, accent selection) works on
// plain 8-bit sRGB triples. This crate owns that triple, its optional
// alpha channel, and the text forms it travels in: the `rgb(...)` /
// `rgba(...)` strings a browser hands back from computed styles, short
// and long hex, and the `white` / `black` keywords.

pub mod color;
pub mod parse;

pub use color::{Alpha, Color};
pub use parse::ParseColorError;
