//! Render-parameter engine for circular progress rings that overshoot.
//!
//! A ring shows progress as an arc; values past `1.0` keep going, lap after
//! lap, with a completed ring drawn underneath. The engine turns a raw
//! progress value and a color configuration into the numbers a renderer
//! needs. It never draws anything itself.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`paint`] | `Color`, `Hsba`, `GradientStops`, `ConicGradient`, `Paint`, palettes |
//! | [`progress`] | `LapPolicy`, `LapState`, `normalize` |
//! | [`resolve`] | `ColorConfig`, `ResolvedColor`, `resolve_color` |
//! | [`compose`] | `ComposeOptions`, `RenderParams`, `compose` |
//! | [`logging`] | `init_logging` |
//!
//! Every evaluation is a pure function of its inputs; call it as often as
//! the host redraws.
//!
//! # Quick start
//!
//! ```rust
//! use lapring_engine::{compose, ColorConfig, ComposeOptions};
//!
//! let params = compose(2.25, &ColorConfig::surf(), &ComposeOptions::default());
//! assert!(params.lap.lap_complete);
//! assert_eq!(params.primary_arc_fraction(), 0.25);
//! ```

pub mod compose;
pub mod logging;
pub mod paint;
pub mod progress;
pub mod resolve;

pub use compose::{compose, compose_lap, ArcFill, ComposeOptions, FullLapFill, RenderParams};
pub use paint::{Color, GradientStops, Paint};
pub use progress::{normalize, LapPolicy, LapState};
pub use resolve::{resolve_color, ColorConfig, ResolvedColor};
