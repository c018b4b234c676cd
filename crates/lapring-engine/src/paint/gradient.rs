use super::{palette, Color};

/// Color returned when a gradient has no stops at all.
pub const FALLBACK_COLOR: Color = palette::GREEN;

/// A single gradient stop with its explicit position.
///
/// `GradientStops` keeps stops implicitly evenly spaced; this is the form
/// handed to renderers that want explicit positions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Ordered color stops spread over `[0, 1]` in equal-width segments.
///
/// With `n + 1` stops there are `n` segments; stop `k` sits exactly at
/// position `k / n`. Insertion order is interpolation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradientStops {
    colors: Vec<Color>,
}

impl GradientStops {
    pub fn new(colors: impl Into<Vec<Color>>) -> Self {
        Self { colors: colors.into() }
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Evaluates the ramp at `position`; see [`sample`].
    #[inline]
    pub fn color_at(&self, position: f32) -> Color {
        sample(&self.colors, position)
    }

    /// Explicitly positioned stops (`k / n` for stop `k`).
    pub fn positioned(&self) -> Vec<ColorStop> {
        match self.colors.len() {
            0 => vec![ColorStop::new(0.0, FALLBACK_COLOR)],
            1 => vec![ColorStop::new(0.0, self.colors[0])],
            len => {
                let segments = (len - 1) as f32;
                self.colors
                    .iter()
                    .enumerate()
                    .map(|(k, c)| ColorStop::new(k as f32 / segments, *c))
                    .collect()
            }
        }
    }
}

impl From<Vec<Color>> for GradientStops {
    fn from(colors: Vec<Color>) -> Self {
        Self { colors }
    }
}

impl From<&[Color]> for GradientStops {
    fn from(colors: &[Color]) -> Self {
        Self { colors: colors.to_vec() }
    }
}

/// Evaluates evenly spaced `stops` at `position`.
///
/// `position` is clamped to `[0, 1]` (NaN reads as `0`). An empty slice
/// yields [`FALLBACK_COLOR`]; a single stop is returned for any position.
/// Positions that are exactly a stop boundary (`k / n`) return `stops[k]`
/// untouched.
pub fn sample(stops: &[Color], position: f32) -> Color {
    match stops {
        [] => {
            log::debug!("empty gradient; using fallback color");
            FALLBACK_COLOR
        }
        [only] => *only,
        stops => {
            let segments = stops.len() - 1;
            let n = segments as f32;
            let t = if position.is_nan() { 0.0 } else { position.clamp(0.0, 1.0) };

            let scaled = t * n;
            let nearest = scaled.round();
            if nearest / n == t {
                return stops[nearest as usize];
            }

            let lower = (scaled.floor() as usize).min(segments - 1);
            let local = scaled - lower as f32;

            Color::interpolate(stops[lower], stops[lower + 1], local)
        }
    }
}

/// Angular gradient swept around the ring's center.
///
/// Semantics:
/// - angles are in degrees, `0°` at 3 o'clock, growing clockwise
///   (screen space, +Y down).
/// - position `0` of `stops` maps to `start_degrees`, position `1` to
///   `end_degrees`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConicGradient {
    pub stops: GradientStops,
    pub start_degrees: f32,
    pub end_degrees: f32,
}

impl ConicGradient {
    pub fn new(stops: GradientStops, start_degrees: f32, end_degrees: f32) -> Self {
        Self { stops, start_degrees, end_degrees }
    }

    /// A full-turn sweep starting at `start_degrees`.
    pub fn full_turn(stops: GradientStops, start_degrees: f32) -> Self {
        Self::new(stops, start_degrees, start_degrees + 360.0)
    }
}
