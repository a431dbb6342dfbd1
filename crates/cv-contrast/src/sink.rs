//! Where accent pairs end up.
//!
//! The page applies a pair as two custom properties on `:root`. The core
//! only knows the property names and the text forms; how they are
//! rendered is the sink's business.

use std::fmt;

use crate::selector::AccentPair;

pub const ACCENT_COLOUR_VAR: &str = "--accent-colour";
pub const ACCENT_CONTRAST_COLOUR_VAR: &str = "--accent-contrast-colour";

/// Receives named style values.
pub trait StyleSink {
    fn set_property(&mut self, name: &str, value: &str);
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }
}

/// Write `pair` as `--accent-colour: rgb(R G B)` and
/// `--accent-contrast-colour: white|black`.
pub fn set_accent_colours<S: StyleSink + ?Sized>(sink: &mut S, pair: AccentPair) {
    sink.set_property(ACCENT_COLOUR_VAR, &pair.accent.to_string());
    sink.set_property(ACCENT_CONTRAST_COLOUR_VAR, pair.text.as_str());
}

// ─── CssVariables ────────────────────────────────────────────────────────────

/// An ordered set of custom-property declarations.
///
/// Setting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssVariables {
    declarations: Vec<(String, String)>,
}

impl CssVariables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// The declarations wrapped in a `:root { ... }` rule.
    #[must_use]
    pub fn to_root_rule(&self) -> String {
        let mut out = String::from(":root {\n");
        for (name, value) in self.iter() {
            out.push_str("    ");
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
        out.push('}');
        out
    }
}

impl StyleSink for CssVariables {
    fn set_property(&mut self, name: &str, value: &str) {
        match self.declarations.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => value.clone_into(v),
            None => self.declarations.push((name.to_owned(), value.to_owned())),
        }
    }
}

impl fmt::Display for CssVariables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "{name}: {value};")?;
        }
        Ok(())
    }
}
