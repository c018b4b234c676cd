//! Paint model handed from the engine to renderers.
//!
//! Scope:
//! - color representation (straight-alpha RGBA, HSB view)
//! - gradient stop lists and angular sweeps
//! - constant palettes

pub mod color;
pub mod gradient;
pub mod palette;

pub use color::{Color, ColorParseError, Hsba};
pub use gradient::{sample, ColorStop, ConicGradient, GradientStops, FALLBACK_COLOR};

/// Stroke source for an arc or ring.
///
/// Renderers that cannot draw angular gradients may fall back to
/// [`Paint::color_at`] with the arc's end position.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Conic(ConicGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Color at `position` in `[0, 1]` along the paint's sweep.
    pub fn color_at(&self, position: f32) -> Color {
        match self {
            Paint::Solid(c) => *c,
            Paint::Conic(g) => g.stops.color_at(position),
        }
    }
}
