//! # cv-contrast — accent colour selection with a contrast guarantee
//!
//! Picks the accent colour for the résumé page and the text colour that
//! sits on top of it. A random accent is only accepted when white or black
//! text on it clears a 7:1 contrast ratio *and* the accent is not so pale
//! that it disappears into the page's near-white body.
//!
//! # Architecture
//!
//! ```text
//! rand::Rng
//!     │
//!     ▼
//! selector.rs: draw uniform RGB, reject, redraw (capped)
//!     │            │
//!     │            ├── contrast.rs: WCAG luminance → white/black ratios
//!     │            └── whitish.rs:  linear "too close to white" rules
//!     ▼
//! AccentPair (accent colour, text colour)
//!     │
//!     ▼
//! picker.rs:   click/key events, preset & forced colours, ondulation frames
//!     │
//!     ▼
//! sink.rs:     --accent-colour / --accent-contrast-colour
//! ```
//!
//! Everything above the sink is pure and synchronous. The only state that
//! outlives a call is the picker's in-flight frame handle.

pub mod config;
pub mod contrast;
pub mod picker;
pub mod selector;
pub mod sink;
pub mod whitish;

pub use config::{AccentConfig, ConfigError};
pub use contrast::{ContrastReport, TextColour, evaluate_contrast, relative_luminance};
pub use picker::{ColourPicker, FrameHandle, FrameScheduler, PickEvent, PickTarget, PickTrigger};
pub use selector::{AccentPair, AccentSelector, generate_accent_colour_pair};
pub use sink::{CssVariables, StyleSink};
pub use whitish::colour_is_too_whitish;
