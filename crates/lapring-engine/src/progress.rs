//! Raw progress → position within the current lap.
//!
//! Progress is unbounded above: `1.0` is one full lap, `2.5` is two full
//! laps plus half of the third.

/// When the "lap complete" ring starts showing.
///
/// `lap_complete` is `progress >= threshold`. Two thresholds are in common
/// use: [`LapPolicy::STRICT`] flips exactly at 100%, [`LapPolicy::NEAR`] a
/// touch earlier so the completed ring fades in before the arc closes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LapPolicy {
    threshold: f32,
}

impl LapPolicy {
    pub const STRICT: Self = Self { threshold: 1.0 };
    pub const NEAR: Self = Self { threshold: 0.98 };

    /// Custom threshold. Non-finite values fall back to [`LapPolicy::STRICT`].
    pub fn new(threshold: f32) -> Self {
        if threshold.is_finite() {
            Self { threshold }
        } else {
            log::debug!("non-finite lap threshold {threshold}; using strict policy");
            Self::STRICT
        }
    }

    #[inline]
    pub fn threshold(self) -> f32 {
        self.threshold
    }

    /// Zero and negative progress never count as a completed lap, whatever
    /// the threshold.
    #[inline]
    pub fn is_lap_complete(self, progress: f32) -> bool {
        progress > 0.0 && progress >= self.threshold
    }
}

impl Default for LapPolicy {
    fn default() -> Self {
        Self::STRICT
    }
}

/// The two states a ring can be drawn in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LapPhase {
    /// First lap, nothing underneath the arc.
    InProgress,
    /// At least one lap done; the full ring is drawn under the arc.
    LapComplete,
}

/// Derived per evaluation, never stored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LapState {
    /// The sanitized raw progress (non-finite input reads as `0`).
    pub progress: f32,
    /// Position within the current lap, in `[0, 1]`.
    pub fraction_in_lap: f32,
    pub lap_complete: bool,
    /// Whole laps finished so far.
    pub completed_laps: u32,
}

impl LapState {
    #[inline]
    pub fn phase(&self) -> LapPhase {
        if self.lap_complete { LapPhase::LapComplete } else { LapPhase::InProgress }
    }
}

/// Position within the current lap.
///
/// - `progress <= 0` → `0`
/// - whole numbers `>= 1` → `1` (a just-finished lap is a full ring, not an empty one)
/// - otherwise the fractional remainder
pub fn fraction_in_lap(progress: f32) -> f32 {
    if !progress.is_finite() || progress <= 0.0 {
        return 0.0;
    }
    let rem = progress.fract();
    if rem == 0.0 { 1.0 } else { rem }
}

/// Splits `progress` into lap position, lap flag and lap count.
pub fn normalize(progress: f32, policy: LapPolicy) -> LapState {
    let progress = if progress.is_finite() {
        progress
    } else {
        log::debug!("non-finite progress {progress}; treating as 0");
        0.0
    };

    let completed_laps = if progress > 0.0 { progress.floor() as u32 } else { 0 };

    LapState {
        progress,
        fraction_in_lap: fraction_in_lap(progress),
        lap_complete: policy.is_lap_complete(progress),
        completed_laps,
    }
}
