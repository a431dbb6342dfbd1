//! Random accent selection by rejection sampling.
//!
//! Draw a uniform RGB triple, keep it if its best text colour reaches the
//! contrast threshold and it isn't whitish, otherwise draw again. With the
//! default thresholds about 60% of the cube is accepted, so a pick takes
//! one or two draws and almost never more than ten.
//!
//! The loop is capped by [`AccentConfig::max_attempts`]. When the cap is
//! hit the last candidate is returned with its best text colour and the
//! [`Selection`] is flagged as exhausted; nothing in the default
//! configuration gets there.

use rand::Rng;
use tracing::{debug, warn};

use cv_color::Color;

use crate::config::AccentConfig;
use crate::contrast::{ContrastReport, TextColour, evaluate_contrast_with};

/// An accent colour and the text colour to put on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentPair {
    pub accent: Color,
    pub text: TextColour,
}

impl AccentPair {
    #[must_use]
    pub const fn new(accent: Color, text: TextColour) -> Self {
        Self { accent, text }
    }
}

/// The outcome of one [`AccentSelector::pick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub pair: AccentPair,

    /// Draws made, including the accepted one.
    pub attempts: u32,

    /// `true` when the cap was hit and `pair` did not pass the checks.
    pub exhausted: bool,
}

/// Three independent uniform draws in 0..=255. Always opaque.
pub fn generate_colour<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::rgb(rng.random(), rng.random(), rng.random())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AccentSelector {
    config: AccentConfig,
}

impl AccentSelector {
    #[must_use]
    pub const fn new(config: AccentConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &AccentConfig {
        &self.config
    }

    /// Contrast report for `color` if it is an acceptable accent.
    #[must_use]
    pub fn accepts(&self, color: Color) -> Option<ContrastReport> {
        let report = evaluate_contrast_with(color, self.config.min_contrast);
        (report.enough && !self.config.whitish.is_too_whitish(color)).then_some(report)
    }

    /// Draw until a colour is accepted or the attempt cap is reached.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Selection {
        let mut attempts = 0;

        loop {
            attempts += 1;
            let candidate = generate_colour(rng);

            if let Some(report) = self.accepts(candidate) {
                debug!(
                    accent = %candidate,
                    text = %report.which,
                    ratio = report.best_ratio(),
                    attempts,
                    "accent colour accepted"
                );
                return Selection {
                    pair: AccentPair::new(candidate, report.which),
                    attempts,
                    exhausted: false,
                };
            }

            if attempts >= self.config.max_attempts {
                let report = evaluate_contrast_with(candidate, self.config.min_contrast);
                warn!(
                    accent = %candidate,
                    attempts,
                    "no acceptable accent colour found, using last candidate"
                );
                return Selection {
                    pair: AccentPair::new(candidate, report.which),
                    attempts,
                    exhausted: true,
                };
            }
        }
    }
}

/// Pick a random accent pair with the default configuration.
#[must_use]
pub fn generate_accent_colour_pair() -> AccentPair {
    AccentSelector::default().pick(&mut rand::rng()).pair
}
