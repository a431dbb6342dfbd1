//! "Too close to white" rejection for accent colours.
//!
//! The page body is 10% accent mixed into 90% white, so a pale accent
//! bleeds into it and section titles lose their edges. Contrast ratios
//! don't catch this: cyan scores further from white than yellow does, yet
//! reads as the closer of the two.
//!
//! A proper colour-difference metric (CIELAB + Delta E 76 against the
//! mixed body colour) would answer the question directly. These two linear
//! rules were tuned by eye instead, starting from white and lowering
//! channels until the accent stood apart:
//!
//! - **Rule A**: `R + G + B > 735`. Near-white on every channel.
//! - **Rule B**: `G + B > 470 && R > 110`. Bright green+blue reads as pale
//!   even with only moderate red; red contributes least to how light the
//!   colour feels.
//!
//! With these numbers Rule B already covers every colour Rule A rejects
//! (a sum above 735 forces `R > 110` and `G + B > 470`). Rule A only
//! decides on its own under custom thresholds.
//!
//! The numbers are empirical. Change them only as a deliberate redesign.

use cv_color::Color;

/// Rule A limit, `255 * 3 - 30`.
pub const CHANNEL_SUM_LIMIT: u16 = 255 * 3 - 30;

/// Rule B green+blue limit, `255 * 2 - 40`.
pub const GREEN_BLUE_SUM_LIMIT: u16 = 255 * 2 - 40;

/// Rule B red limit.
pub const RED_LIMIT: u8 = 110;

/// Thresholds for both whitish rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WhitishThresholds {
    /// Rule A: reject when `R + G + B` exceeds this.
    pub channel_sum: u16,

    /// Rule B: reject when `G + B` exceeds this...
    pub green_blue_sum: u16,

    /// ...and `R` exceeds this.
    pub red: u8,
}

impl WhitishThresholds {
    /// 735 / 470 / 110.
    pub const DEFAULT: Self = Self {
        channel_sum: CHANNEL_SUM_LIMIT,
        green_blue_sum: GREEN_BLUE_SUM_LIMIT,
        red: RED_LIMIT,
    };

    /// Whether `color` is too pale to use as an accent.
    #[must_use]
    pub fn is_too_whitish(self, color: Color) -> bool {
        let (r, g, b) = (u16::from(color.r), u16::from(color.g), u16::from(color.b));

        if r + g + b > self.channel_sum {
            return true;
        }

        g + b > self.green_blue_sum && color.r > self.red
    }
}

impl Default for WhitishThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// [`WhitishThresholds::is_too_whitish`] with the default thresholds.
#[must_use]
pub fn colour_is_too_whitish(color: Color) -> bool {
    WhitishThresholds::DEFAULT.is_too_whitish(color)
}
