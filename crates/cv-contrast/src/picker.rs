//! Colour-picker glue: events in, accent pairs out to a [`StyleSink`].
//!
//! The page offers three kinds of picker swatch:
//!
//! | Target        | On activation                                          |
//! |---------------|--------------------------------------------------------|
//! | `Random`      | pick a fresh random pair                               |
//! | `Preset`      | use the swatch colour, best text colour for it         |
//! | `Ondulating`  | follow an animated background every frame until the    |
//! |               | next activation                                        |
//!
//! Swatches activate on click or on key-up of `Enter`; other keys are
//! ignored. Every activation first cancels the frame an ondulating swatch
//! left scheduled. The handle for that frame is owned by the picker and
//! handed back to the [`FrameScheduler`] on cancel, so there is no
//! process-wide animation state.
//!
//! Preset and forced colours are applied even when neither text colour
//! reaches the threshold: a brand colour may be wanted regardless. The
//! shortfall is logged.

use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{info, warn};

use cv_color::{Color, ParseColorError};

use crate::config::AccentConfig;
use crate::contrast::{ContrastReport, evaluate_contrast_with};
use crate::selector::{AccentPair, AccentSelector};
use crate::sink::{StyleSink, set_accent_colours};

// ─── Forced colours ──────────────────────────────────────────────────────────

/// Apply a fixed accent colour with its best text colour.
///
/// Logs at `info` when the contrast is below `min_contrast` and applies
/// the colour anyway.
pub fn force_company_colour<S: StyleSink + ?Sized>(
    sink: &mut S,
    color: Color,
    min_contrast: f64,
) -> ContrastReport {
    let report = evaluate_contrast_with(color, min_contrast);
    if !report.enough {
        info!(
            accent = %color,
            text = %report.which,
            ratio = report.best_ratio(),
            "contrast between {color} and {} is only {:.2} (should be >= {min_contrast})",
            report.which,
            report.best_ratio(),
        );
    }
    set_accent_colours(sink, AccentPair::new(color, report.which));
    report
}

/// [`force_company_colour`] for colour text.
///
/// # Errors
///
/// Returns the parse error without touching the sink.
pub fn force_company_colour_str<S: StyleSink + ?Sized>(
    sink: &mut S,
    text: &str,
    min_contrast: f64,
) -> Result<ContrastReport, ParseColorError> {
    let color: Color = text.parse()?;
    Ok(force_company_colour(sink, color, min_contrast))
}

// ─── Frames ──────────────────────────────────────────────────────────────────

/// Identifies one scheduled animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Host frame scheduling (`requestAnimationFrame` and friends).
pub trait FrameScheduler {
    /// Schedule one callback; the host later calls
    /// [`ColourPicker::on_frame`] with the returned handle.
    fn request_frame(&mut self) -> FrameHandle;

    fn cancel_frame(&mut self, handle: FrameHandle);
}

// ─── Events ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickTrigger {
    Click,

    /// Key released, with the DOM key name (`"Enter"`, `"a"`, ...).
    KeyUp(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickTarget {
    Random,
    Preset(Color),
    Ondulating,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickEvent {
    pub trigger: PickTrigger,
    pub target: PickTarget,
}

impl PickEvent {
    #[must_use]
    pub const fn click(target: PickTarget) -> Self {
        Self {
            trigger: PickTrigger::Click,
            target,
        }
    }

    #[must_use]
    pub fn key_up(key: impl Into<String>, target: PickTarget) -> Self {
        Self {
            trigger: PickTrigger::KeyUp(key.into()),
            target,
        }
    }

    /// Clicks and `Enter` activate a swatch; other keys don't.
    #[must_use]
    pub fn activates(&self) -> bool {
        match &self.trigger {
            PickTrigger::Click => true,
            PickTrigger::KeyUp(key) => key == "Enter",
        }
    }
}

// ─── ColourPicker ────────────────────────────────────────────────────────────

pub struct ColourPicker<S, F, R = ThreadRng> {
    sink: S,
    scheduler: F,
    rng: R,
    selector: AccentSelector,
    in_flight: Option<FrameHandle>,
}

impl<S: StyleSink, F: FrameScheduler> ColourPicker<S, F> {
    /// A picker drawing from the thread-local RNG.
    #[must_use]
    pub fn new(sink: S, scheduler: F, config: AccentConfig) -> Self {
        Self::with_rng(sink, scheduler, config, rand::rng())
    }
}

impl<S: StyleSink, F: FrameScheduler, R: Rng> ColourPicker<S, F, R> {
    #[must_use]
    pub const fn with_rng(sink: S, scheduler: F, config: AccentConfig, rng: R) -> Self {
        Self {
            sink,
            scheduler,
            rng,
            selector: AccentSelector::new(config),
            in_flight: None,
        }
    }

    /// Pick and apply a random pair. Called once on page load and for the
    /// random swatch.
    pub fn apply_random(&mut self) -> AccentPair {
        let selection = self.selector.pick(&mut self.rng);
        set_accent_colours(&mut self.sink, selection.pair);
        selection.pair
    }

    /// Handle a swatch event.
    ///
    /// Returns the applied pair, or `None` when the event was ignored or
    /// started an ondulation (pairs then arrive through
    /// [`on_frame`](Self::on_frame)).
    pub fn handle(&mut self, event: &PickEvent) -> Option<AccentPair> {
        if !event.activates() {
            return None;
        }

        self.cancel();

        match event.target {
            PickTarget::Random => Some(self.apply_random()),
            PickTarget::Preset(color) => Some(self.apply_preset(color)),
            PickTarget::Ondulating => {
                self.in_flight = Some(self.scheduler.request_frame());
                None
            }
        }
    }

    fn apply_preset(&mut self, color: Color) -> AccentPair {
        let report = evaluate_contrast_with(color, self.selector.config().min_contrast);
        if !report.enough {
            warn!(
                accent = %color,
                ratio = report.best_ratio(),
                "pre-defined accent colour {color} does not contrast enough with either text colour"
            );
        }

        let pair = AccentPair::new(color, report.which);
        set_accent_colours(&mut self.sink, pair);
        pair
    }

    /// One ondulation frame: apply `background` (the swatch's current
    /// rendered colour) and schedule the next frame.
    ///
    /// Frames whose handle is no longer in flight are stale and ignored.
    pub fn on_frame(&mut self, handle: FrameHandle, background: Color) -> Option<AccentPair> {
        if self.in_flight != Some(handle) {
            return None;
        }

        let report = evaluate_contrast_with(background, self.selector.config().min_contrast);
        let pair = AccentPair::new(background, report.which);
        set_accent_colours(&mut self.sink, pair);

        self.in_flight = Some(self.scheduler.request_frame());
        Some(pair)
    }

    /// Stop any running ondulation.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    /// Apply a fixed colour, stopping any ondulation first.
    pub fn force(&mut self, color: Color) -> ContrastReport {
        self.cancel();
        force_company_colour(&mut self.sink, color, self.selector.config().min_contrast)
    }

    #[must_use]
    pub const fn in_flight(&self) -> Option<FrameHandle> {
        self.in_flight
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub const fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::TextColour;
    use crate::sink::{ACCENT_COLOUR_VAR, ACCENT_CONTRAST_COLOUR_VAR, CssVariables};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tracing_test::traced_test;

    #[derive(Debug, Default)]
    struct RecordingScheduler {
        next: u64,
        requested: Vec<FrameHandle>,
        cancelled: Vec<FrameHandle>,
    }

    impl FrameScheduler for RecordingScheduler {
        fn request_frame(&mut self) -> FrameHandle {
            self.next += 1;
            let handle = FrameHandle(self.next);
            self.requested.push(handle);
            handle
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            self.cancelled.push(handle);
        }
    }

    fn picker() -> ColourPicker<CssVariables, RecordingScheduler, StdRng> {
        ColourPicker::with_rng(
            CssVariables::new(),
            RecordingScheduler::default(),
            AccentConfig::default(),
            StdRng::seed_from_u64(3),
        )
    }

    const NAVY: Color = Color::rgb(0, 0, 128);
    const GRAY: Color = Color::rgb(128, 128, 128);

    #[test]
    fn click_random_applies_a_pair() {
        let mut p = picker();
        let pair = p.handle(&PickEvent::click(PickTarget::Random)).unwrap();
        assert_eq!(p.sink().get(ACCENT_COLOUR_VAR), Some(pair.accent.to_string().as_str()));
        assert_eq!(p.sink().get(ACCENT_CONTRAST_COLOUR_VAR), Some(pair.text.as_str()));
    }

    #[test]
    fn only_enter_activates_on_key_up() {
        let mut p = picker();
        assert_eq!(p.handle(&PickEvent::key_up("a", PickTarget::Preset(NAVY))), None);
        assert!(p.sink().is_empty());

        let pair = p.handle(&PickEvent::key_up("Enter", PickTarget::Preset(NAVY)));
        assert_eq!(pair, Some(AccentPair::new(NAVY, TextColour::White)));
    }

    #[test]
    #[traced_test]
    fn low_contrast_preset_is_applied_with_warning() {
        let mut p = picker();
        let pair = p.handle(&PickEvent::click(PickTarget::Preset(GRAY))).unwrap();
        assert_eq!(pair, AccentPair::new(GRAY, TextColour::Black));
        assert_eq!(p.sink().get(ACCENT_COLOUR_VAR), Some("rgb(128 128 128)"));
        assert!(logs_contain("does not contrast enough"));
    }

    #[test]
    fn ondulation_follows_frames_until_cancelled() {
        let mut p = picker();
        assert_eq!(p.handle(&PickEvent::click(PickTarget::Ondulating)), None);
        let first = p.in_flight().unwrap();

        let pair = p.on_frame(first, Color::rgb(250, 240, 10)).unwrap();
        assert_eq!(pair.text, TextColour::Black);
        let second = p.in_flight().unwrap();
        assert_ne!(first, second);

        let pair = p.on_frame(second, NAVY).unwrap();
        assert_eq!(pair.text, TextColour::White);
        assert_eq!(p.sink().get(ACCENT_CONTRAST_COLOUR_VAR), Some("white"));

        let third = p.in_flight().unwrap();
        p.cancel();
        assert_eq!(p.in_flight(), None);
        assert_eq!(p.scheduler().cancelled, vec![third]);
    }

    #[test]
    fn stale_frames_are_ignored() {
        let mut p = picker();
        p.handle(&PickEvent::click(PickTarget::Ondulating));
        let handle = p.in_flight().unwrap();
        p.handle(&PickEvent::click(PickTarget::Preset(NAVY)));

        assert_eq!(p.on_frame(handle, GRAY), None);
        assert_eq!(p.sink().get(ACCENT_COLOUR_VAR), Some("rgb(0 0 128)"));
        assert_eq!(p.scheduler().cancelled, vec![handle]);
    }

    #[test]
    fn ignored_key_does_not_cancel_ondulation() {
        let mut p = picker();
        p.handle(&PickEvent::click(PickTarget::Ondulating));
        let handle = p.in_flight();
        p.handle(&PickEvent::key_up("Escape", PickTarget::Random));
        assert_eq!(p.in_flight(), handle);
        assert!(p.scheduler().cancelled.is_empty());
    }

    #[test]
    #[traced_test]
    fn forced_colour_logs_shortfall() {
        let mut vars = CssVariables::new();
        let report = force_company_colour(&mut vars, GRAY, 7.0);
        assert!(!report.enough);
        assert_eq!(vars.get(ACCENT_CONTRAST_COLOUR_VAR), Some("black"));
        assert!(logs_contain("should be >= 7"));
    }

    #[test]
    #[traced_test]
    fn forced_colour_with_enough_contrast_is_quiet() {
        let mut vars = CssVariables::new();
        let report = force_company_colour(&mut vars, NAVY, 7.0);
        assert!(report.enough);
        assert!(!logs_contain("should be >="));
    }

    #[test]
    fn forced_colour_from_text() {
        let mut vars = CssVariables::new();
        let report = force_company_colour_str(&mut vars, "rgb(0, 0, 128)", 7.0).unwrap();
        assert_eq!(report.which, TextColour::White);
        assert_eq!(vars.get(ACCENT_COLOUR_VAR), Some("rgb(0 0 128)"));
    }

    #[test]
    fn forced_colour_parse_error_leaves_sink_alone() {
        let mut vars = CssVariables::new();
        assert!(force_company_colour_str(&mut vars, "not a colour", 7.0).is_err());
        assert!(vars.is_empty());
    }

    #[test]
    fn force_stops_ondulation() {
        let mut p = picker();
        p.handle(&PickEvent::click(PickTarget::Ondulating));
        p.force(NAVY);
        assert_eq!(p.in_flight(), None);
        assert_eq!(p.into_sink().get(ACCENT_COLOUR_VAR), Some("rgb(0 0 128)"));
    }
}
