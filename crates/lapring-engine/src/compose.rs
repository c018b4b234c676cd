//! Lap state + colors → everything a renderer needs to draw the ring.
//!
//! Angle convention:
//! - `0°` is 3 o'clock, angles grow clockwise (screen space, +Y down).
//! - every arc is anchored at [`ROTATION_OFFSET_DEGREES`] (12 o'clock).
//! - fractions are turns in `[0, 1]` measured from that anchor.
//!
//! The frame resets every lap; overshoot never adds rotation.

use crate::paint::{palette, Color, ConicGradient, Paint};
use crate::progress::{normalize, LapPolicy, LapState};
use crate::resolve::{ColorConfig, ResolvedColor};

/// Rotation that moves the zero angle from 3 o'clock to 12 o'clock.
pub const ROTATION_OFFSET_DEGREES: f32 = -90.0;

/// Angular width of the tip, 0.05% of a turn.
pub const DEFAULT_TIP_WIDTH_DEGREES: f32 = 0.18;

pub const DEFAULT_LIGHTEN_AMOUNT: f32 = 0.2;

pub const DEFAULT_TRACK_OPACITY: f32 = 0.3;

/// Fill of the primary arc.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ArcFill {
    /// Solid, in the color resolved at the leading edge.
    #[default]
    Resolved,
    /// Angular gradient spreading the stops over one full turn.
    Sweep,
}

/// Fill of the ring drawn under the arc once a lap is complete.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum FullLapFill {
    /// Solid, in the color at position `1`.
    #[default]
    EndColor,
    /// Angular gradient spreading the stops over one full turn.
    Sweep,
}

/// Evaluation options.
///
/// # Example
/// ```rust
/// use lapring_engine::compose::ComposeOptions;
/// use lapring_engine::progress::LapPolicy;
///
/// let options = ComposeOptions::new()
///     .lap_policy(LapPolicy::NEAR)
///     .enable_glow(false)
///     .lighten_amount(0.3);
/// assert_eq!(options.lap_policy.threshold(), 0.98);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeOptions {
    pub lap_policy: LapPolicy,
    pub tip_width_degrees: f32,
    pub lighten_amount: f32,
    pub enable_glow: bool,
    /// Draw the tip in the lightened color instead of the arc color.
    pub enable_lighter_tail: bool,
    pub track_color: Color,
    pub track_opacity: f32,
    pub arc_fill: ArcFill,
    pub full_lap_fill: FullLapFill,
}

impl ComposeOptions {
    pub fn new() -> Self {
        Self {
            lap_policy: LapPolicy::STRICT,
            tip_width_degrees: DEFAULT_TIP_WIDTH_DEGREES,
            lighten_amount: DEFAULT_LIGHTEN_AMOUNT,
            enable_glow: true,
            enable_lighter_tail: true,
            track_color: palette::TRACK_GRAY,
            track_opacity: DEFAULT_TRACK_OPACITY,
            arc_fill: ArcFill::Resolved,
            full_lap_fill: FullLapFill::EndColor,
        }
    }

    pub fn lap_policy(mut self, v: LapPolicy) -> Self { self.lap_policy = v; self }
    pub fn tip_width_degrees(mut self, v: f32) -> Self { self.tip_width_degrees = v; self }
    pub fn lighten_amount(mut self, v: f32) -> Self { self.lighten_amount = v; self }
    pub fn enable_glow(mut self, v: bool) -> Self { self.enable_glow = v; self }
    pub fn enable_lighter_tail(mut self, v: bool) -> Self { self.enable_lighter_tail = v; self }
    pub fn track_color(mut self, v: Color) -> Self { self.track_color = v; self }
    pub fn track_opacity(mut self, v: f32) -> Self { self.track_opacity = v; self }
    pub fn arc_fill(mut self, v: ArcFill) -> Self { self.arc_fill = v; self }
    pub fn full_lap_fill(mut self, v: FullLapFill) -> Self { self.full_lap_fill = v; self }

    /// Tip width as a fraction of a turn, clamped to `[0, 1]`.
    fn tip_width_turns(&self) -> f32 {
        let w = self.tip_width_degrees;
        if !w.is_finite() {
            log::debug!("non-finite tip width {w}; using default");
            return DEFAULT_TIP_WIDTH_DEGREES / 360.0;
        }
        w.clamp(0.0, 360.0) / 360.0
    }

    fn sanitized_lighten_amount(&self) -> f32 {
        let v = self.lighten_amount;
        if v.is_finite() { v.max(0.0) } else { 0.0 }
    }

    fn sanitized_track_opacity(&self) -> f32 {
        let v = self.track_opacity;
        if v.is_finite() { v.clamp(0.0, 1.0) } else { DEFAULT_TRACK_OPACITY }
    }
}

impl Default for ComposeOptions {
    fn default() -> Self { Self::new() }
}

/// Background track, always drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrackParams {
    pub color: Color,
    pub opacity: f32,
}

/// An arc from `start_fraction` to `end_fraction` of a turn.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcParams {
    pub start_fraction: f32,
    pub end_fraction: f32,
    pub paint: Paint,
}

impl ArcParams {
    #[inline]
    pub fn start_degrees(&self) -> f32 {
        ROTATION_OFFSET_DEGREES + self.start_fraction * 360.0
    }

    #[inline]
    pub fn sweep_degrees(&self) -> f32 {
        (self.end_fraction - self.start_fraction) * 360.0
    }
}

/// The bright cap at the arc's leading edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TipParams {
    pub start_fraction: f32,
    pub end_fraction: f32,
    pub color: Color,
    /// Shadow color when glow is enabled. Blur radius is up to the renderer.
    pub glow: Option<Color>,
}

impl TipParams {
    /// Absolute angle of the leading edge.
    #[inline]
    pub fn angle_degrees(&self) -> f32 {
        ROTATION_OFFSET_DEGREES + self.end_fraction * 360.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end_fraction <= self.start_fraction
    }
}

/// Output of one evaluation. Recomputed from scratch every time.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    pub lap: LapState,
    pub track: TrackParams,
    /// Present only once a lap is complete.
    pub full_lap: Option<Paint>,
    pub primary_arc: ArcParams,
    pub tip: TipParams,
    pub rotation_degrees: f32,
}

impl RenderParams {
    #[inline]
    pub fn primary_arc_fraction(&self) -> f32 {
        self.primary_arc.end_fraction
    }
}

/// Evaluates `progress` end to end.
pub fn compose(progress: f32, config: &ColorConfig, options: &ComposeOptions) -> RenderParams {
    compose_lap(&normalize(progress, options.lap_policy), config, options)
}

/// Builds render parameters for an already normalized lap.
pub fn compose_lap(lap: &LapState, config: &ColorConfig, options: &ComposeOptions) -> RenderParams {
    let colors = ResolvedColor::new(config, lap, options.sanitized_lighten_amount());
    let fraction = lap.fraction_in_lap.clamp(0.0, 1.0);

    let full_lap = lap.lap_complete.then(|| match options.full_lap_fill {
        FullLapFill::EndColor => Paint::solid(colors.lap_end),
        FullLapFill::Sweep => sweep_paint(config),
    });

    let primary_arc = ArcParams {
        start_fraction: 0.0,
        end_fraction: fraction,
        paint: match options.arc_fill {
            ArcFill::Resolved => Paint::solid(colors.current),
            ArcFill::Sweep => sweep_paint(config),
        },
    };

    let tip = TipParams {
        start_fraction: (fraction - options.tip_width_turns()).max(0.0),
        end_fraction: fraction,
        color: if options.enable_lighter_tail { colors.accent } else { colors.current },
        glow: options.enable_glow.then_some(palette::GLOW_SHADOW),
    };

    log::trace!(
        "compose: progress={} fraction={} lap_complete={} laps={}",
        lap.progress,
        fraction,
        lap.lap_complete,
        lap.completed_laps
    );

    RenderParams {
        lap: *lap,
        track: TrackParams {
            color: options.track_color,
            opacity: options.sanitized_track_opacity(),
        },
        full_lap,
        primary_arc,
        tip,
        rotation_degrees: ROTATION_OFFSET_DEGREES,
    }
}

/// Single-stop configurations stay solid; anything else becomes a full-turn sweep.
fn sweep_paint(config: &ColorConfig) -> Paint {
    let stops = config.stops();
    match stops.colors() {
        [] | [_] => Paint::Solid(stops.color_at(0.0)),
        _ => Paint::Conic(ConicGradient::full_turn(stops, ROTATION_OFFSET_DEGREES)),
    }
}
