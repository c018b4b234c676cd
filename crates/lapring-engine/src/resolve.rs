//! Color configuration → color at a position.

use crate::paint::{gradient, palette, Color, GradientStops};
use crate::progress::LapState;

/// Which scalar a color configuration is keyed by.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PositionKey {
    /// Position within the current lap; the ramp restarts every lap.
    LapFraction,
    /// Raw progress clamped to `[0, 1]`; the color freezes once the first
    /// lap completes.
    RawProgress,
}

/// How the arc is colored.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorConfig {
    /// One color for every position.
    Solid(Color),
    /// Cyclic gauge-style ramp over the stops, restarting each lap.
    GradientStops(GradientStops),
    /// Goal-style red → yellow → green ramp keyed by raw progress.
    ProceduralRamp,
}

impl ColorConfig {
    /// The surf palette as a cyclic gradient.
    pub fn surf() -> Self {
        ColorConfig::GradientStops(GradientStops::from(&palette::SURF_PROGRESS_GRADIENT[..]))
    }

    pub fn gradient(colors: impl Into<Vec<Color>>) -> Self {
        ColorConfig::GradientStops(GradientStops::new(colors))
    }

    pub fn position_key(&self) -> PositionKey {
        match self {
            ColorConfig::ProceduralRamp => PositionKey::RawProgress,
            ColorConfig::Solid(_) | ColorConfig::GradientStops(_) => PositionKey::LapFraction,
        }
    }

    /// The scalar this configuration is evaluated at for `lap`.
    pub fn position_for(&self, lap: &LapState) -> f32 {
        match self.position_key() {
            PositionKey::LapFraction => lap.fraction_in_lap,
            PositionKey::RawProgress => lap.progress.clamp(0.0, 1.0),
        }
    }

    /// Stops that describe the whole configuration, for sweep fills.
    pub fn stops(&self) -> GradientStops {
        match self {
            ColorConfig::Solid(c) => GradientStops::new(vec![*c]),
            ColorConfig::GradientStops(g) => g.clone(),
            ColorConfig::ProceduralRamp => GradientStops::from(&palette::GOAL_RAMP[..]),
        }
    }

    /// Color at an explicit position in `[0, 1]`.
    pub fn color_at(&self, position: f32) -> Color {
        match self {
            ColorConfig::Solid(c) => *c,
            ColorConfig::GradientStops(g) => g.color_at(position),
            ColorConfig::ProceduralRamp => gradient::sample(&palette::GOAL_RAMP, position),
        }
    }

    /// Color for the current lap, honoring [`ColorConfig::position_key`].
    pub fn resolve(&self, lap: &LapState) -> Color {
        self.color_at(self.position_for(lap))
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        ColorConfig::Solid(palette::GREEN)
    }
}

/// The colors one evaluation needs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResolvedColor {
    /// Color at the arc's leading edge.
    pub current: Color,
    /// `current` lightened, for the tip and halo.
    pub accent: Color,
    /// Color at the end of a lap, for the completed ring.
    pub lap_end: Color,
}

impl ResolvedColor {
    pub fn new(config: &ColorConfig, lap: &LapState, lighten_amount: f32) -> Self {
        let current = config.resolve(lap);
        Self {
            current,
            accent: current.lighten(lighten_amount),
            lap_end: config.color_at(1.0),
        }
    }
}

/// Color of `config` at `position`.
#[inline]
pub fn resolve_color(config: &ColorConfig, position: f32) -> Color {
    config.color_at(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::FALLBACK_COLOR;
    use crate::progress::{normalize, LapPolicy};

    const RED: Color = palette::RED;
    const GREEN: Color = palette::GREEN;

    fn close(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-5
            && (a.g - b.g).abs() < 1e-5
            && (a.b - b.b).abs() < 1e-5
            && (a.a - b.a).abs() < 1e-5
    }

    // ── resolve_color ─────────────────────────────────────────────────────

    #[test]
    fn solid_ignores_position() {
        let c = ColorConfig::Solid(palette::SURF_CORAL);
        assert_eq!(resolve_color(&c, 0.0), palette::SURF_CORAL);
        assert_eq!(resolve_color(&c, 0.6), palette::SURF_CORAL);
    }

    #[test]
    fn gradient_endpoints() {
        let c = ColorConfig::gradient(vec![RED, GREEN]);
        assert_eq!(resolve_color(&c, 0.0), RED);
        assert_eq!(resolve_color(&c, 1.0), GREEN);
    }

    #[test]
    fn empty_gradient_falls_back() {
        let c = ColorConfig::gradient(Vec::new());
        assert_eq!(resolve_color(&c, 0.3), FALLBACK_COLOR);
    }

    #[test]
    fn ramp_matches_three_stop_gradient() {
        let ramp = ColorConfig::ProceduralRamp;
        let stops = ColorConfig::gradient(palette::GOAL_RAMP.to_vec());
        for t in [0.0, 0.1, 0.25, 0.5, 0.6, 0.9, 1.0] {
            assert_eq!(resolve_color(&ramp, t), resolve_color(&stops, t), "t {t}");
        }
        assert_eq!(resolve_color(&ramp, 0.5), palette::YELLOW);
    }

    // ── resolve (lap-aware) ───────────────────────────────────────────────

    #[test]
    fn gradient_cycles_per_lap() {
        let c = ColorConfig::gradient(vec![RED, GREEN]);
        let first = c.resolve(&normalize(0.25, LapPolicy::STRICT));
        let third = c.resolve(&normalize(2.25, LapPolicy::STRICT));
        assert!(close(first, third));
    }

    #[test]
    fn ramp_freezes_after_first_lap() {
        let c = ColorConfig::ProceduralRamp;
        assert_eq!(c.resolve(&normalize(1.0, LapPolicy::STRICT)), GREEN);
        assert_eq!(c.resolve(&normalize(1.4, LapPolicy::STRICT)), GREEN);
        assert_eq!(c.resolve(&normalize(7.9, LapPolicy::STRICT)), GREEN);
        assert_eq!(c.resolve(&normalize(-1.0, LapPolicy::STRICT)), RED);
    }

    #[test]
    fn position_keys() {
        assert_eq!(ColorConfig::ProceduralRamp.position_key(), PositionKey::RawProgress);
        assert_eq!(ColorConfig::surf().position_key(), PositionKey::LapFraction);
        assert_eq!(ColorConfig::default().position_key(), PositionKey::LapFraction);
    }

    #[test]
    fn resolved_color_accent_is_lighter() {
        let c = ColorConfig::Solid(Color::new(0.4, 0.2, 0.1, 1.0));
        let r = ResolvedColor::new(&c, &normalize(0.5, LapPolicy::STRICT), 0.2);
        assert!(r.accent.to_hsba().unwrap().brightness > r.current.to_hsba().unwrap().brightness);
        assert_eq!(r.lap_end, r.current);
    }

    #[test]
    fn resolved_color_lap_end_is_last_stop() {
        let c = ColorConfig::surf();
        let r = ResolvedColor::new(&c, &normalize(0.1, LapPolicy::STRICT), 0.0);
        assert_eq!(r.lap_end, palette::SURF_PACIFIC);
        assert_eq!(r.accent, r.current);
    }

    #[test]
    fn stops_describe_config() {
        assert_eq!(ColorConfig::Solid(RED).stops().colors(), &[RED]);
        assert_eq!(ColorConfig::ProceduralRamp.stops().len(), 3);
        assert_eq!(ColorConfig::surf().stops().len(), 5);
    }
}
