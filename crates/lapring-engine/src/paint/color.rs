use std::fmt;

/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// Invariant:
/// - channels are *not* premultiplied; interpolation runs on each channel
///   independently, alpha included.
///
/// The layout is `#[repr(C)]` and `Pod` so renderers can upload colors
/// (or whole stop tables) as `[f32; 4]` without copying field by field.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Creates an opaque color from sRGB bytes (`0`–`255`).
    ///
    /// `const` so palette tables can be declared as plain constants.
    #[inline]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    #[inline]
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Parses `#rrggbb`, `rrggbb`, `#rrggbbaa` or `rrggbbaa`.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::new(
                format!("expected 6 or 8 hex digits, found {}", digits.len()),
                input,
            ));
        }
        if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::new("non-hex character", input));
        }

        let byte = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| ColorParseError::new(e.to_string(), input))
        };

        let r = byte(0)?;
        let g = byte(2)?;
        let b = byte(4)?;
        let a = if digits.len() == 8 { byte(6)? } else { 255 };

        Ok(Self::from_rgba_u8(r, g, b, a))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps all channels to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        bytemuck::cast(self)
    }

    /// Linear per-channel interpolation from `from` to `to`.
    ///
    /// `fraction` is clamped to `[0, 1]`. The endpoints are reproduced exactly:
    /// `fraction == 0` yields `from`, `fraction == 1` yields `to`, and a color
    /// interpolated with itself is unchanged.
    pub fn interpolate(from: Color, to: Color, fraction: f32) -> Color {
        let f = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        if f >= 1.0 {
            return to;
        }
        Color::new(
            from.r + (to.r - from.r) * f,
            from.g + (to.g - from.g) * f,
            from.b + (to.b - from.b) * f,
            from.a + (to.a - from.a) * f,
        )
    }

    /// Decomposes into hue/saturation/brightness.
    ///
    /// Returns `None` for colors with non-finite channels.
    pub fn to_hsba(self) -> Option<Hsba> {
        if !self.is_finite() {
            return None;
        }
        let Color { r, g, b, a } = self.clamped();

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max > 0.0 { delta / max } else { 0.0 };
        let hue = if delta <= 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta).rem_euclid(6.0) / 6.0
        } else if max == g {
            ((b - r) / delta + 2.0) / 6.0
        } else {
            ((r - g) / delta + 4.0) / 6.0
        };

        Some(Hsba { hue, saturation, brightness: max, alpha: a })
    }

    /// Brightness boost in HSB space, used for tip and halo accents.
    ///
    /// Hue, saturation and alpha are preserved; brightness saturates at `1.0`.
    /// A zero (or negative) amount returns the color unchanged, and so does a
    /// color that cannot be decomposed.
    pub fn lighten(self, amount: f32) -> Color {
        if amount.is_nan() || amount <= 0.0 {
            return self;
        }
        match self.to_hsba() {
            Some(hsba) => hsba.brighten(amount).to_color(),
            None => {
                log::debug!("lighten: cannot decompose {self:?} into HSB; returning it unchanged");
                self
            }
        }
    }
}

/// Hue/saturation/brightness/alpha, all components in `[0, 1]`.
///
/// `hue` is a fraction of a full turn (`0.5` is cyan), matching the
/// convention of most platform color pickers.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsba {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub alpha: f32,
}

impl Hsba {
    #[inline]
    pub fn brighten(self, amount: f32) -> Self {
        Self { brightness: (self.brightness + amount).min(1.0), ..self }
    }

    pub fn to_color(self) -> Color {
        let v = self.brightness.clamp(0.0, 1.0);
        let s = self.saturation.clamp(0.0, 1.0);
        let a = self.alpha.clamp(0.0, 1.0);

        if s <= 0.0 {
            return Color::new(v, v, v, a);
        }

        let h6 = self.hue.rem_euclid(1.0) * 6.0;
        let sector = h6.floor();
        let f = h6 - sector;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as u32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Color::new(r, g, b, a)
    }
}

/// A color literal that could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError {
    pub message: String,
    /// The literal as it was given.
    pub input: String,
}

impl ColorParseError {
    pub(crate) fn new(msg: impl Into<String>, input: &str) -> Self {
        Self { message: msg.into(), input: input.to_owned() }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color '{}': {}", self.input, self.message)
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-5
            && (a.g - b.g).abs() < 1e-5
            && (a.b - b.b).abs() < 1e-5
            && (a.a - b.a).abs() < 1e-5
    }

    const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

    // ── from_hex ──────────────────────────────────────────────────────────

    #[test]
    fn hex_with_hash() {
        assert_eq!(Color::from_hex("#ff0000").unwrap(), RED);
    }

    #[test]
    fn hex_without_hash_and_with_alpha() {
        let c = Color::from_hex("00ff0080").unwrap();
        assert_eq!(c.g, 1.0);
        assert_eq!(c.a, 128.0 / 255.0);
    }

    #[test]
    fn hex_matches_byte_constructor() {
        assert_eq!(Color::from_hex("#E86A5B").unwrap(), Color::from_rgb_u8(0xE8, 0x6A, 0x5B));
    }

    #[test]
    fn hex_wrong_length() {
        let err = Color::from_hex("#fff").unwrap_err();
        assert_eq!(err.input, "#fff");
        assert!(err.to_string().contains("6 or 8"));
    }

    #[test]
    fn hex_bad_digit() {
        assert!(Color::from_hex("#gg0000").is_err());
    }

    // ── interpolate ───────────────────────────────────────────────────────

    #[test]
    fn interpolate_endpoints_exact() {
        let a = Color::new(0.1, 0.7, 0.3, 0.9);
        let b = Color::new(0.8, 0.2, 0.6, 0.4);
        assert_eq!(Color::interpolate(a, b, 0.0), a);
        assert_eq!(Color::interpolate(a, b, 1.0), b);
    }

    #[test]
    fn interpolate_same_color_is_stable() {
        let c = Color::new(0.91, 0.59, 0.37, 0.83);
        for i in 0..=1000 {
            let f = i as f32 / 1000.0;
            assert_eq!(Color::interpolate(c, c, f), c, "fraction {f}");
        }
    }

    #[test]
    fn interpolate_midpoint() {
        let mid = Color::interpolate(RED, GREEN, 0.5);
        assert!(approx(mid, Color::new(0.5, 0.5, 0.0, 1.0)));
    }

    #[test]
    fn interpolate_clamps_fraction() {
        assert_eq!(Color::interpolate(RED, GREEN, -3.0), RED);
        assert_eq!(Color::interpolate(RED, GREEN, 7.0), GREEN);
        assert_eq!(Color::interpolate(RED, GREEN, f32::NAN), RED);
    }

    #[test]
    fn interpolate_alpha_channel() {
        let clear = RED.with_alpha(0.0);
        assert!((Color::interpolate(clear, RED, 0.25).a - 0.25).abs() < 1e-6);
    }

    #[test]
    fn interpolate_reversal_symmetry() {
        let a = Color::new(0.2, 0.4, 0.9, 1.0);
        let b = Color::new(0.9, 0.1, 0.3, 0.5);
        for f in [0.0, 0.125, 0.25, 0.5, 0.75, 1.0] {
            assert!(approx(Color::interpolate(a, b, f), Color::interpolate(b, a, 1.0 - f)));
        }
    }

    // ── HSB ───────────────────────────────────────────────────────────────

    #[test]
    fn hsba_primary_hues() {
        assert_eq!(RED.to_hsba().unwrap().hue, 0.0);
        assert!((GREEN.to_hsba().unwrap().hue - 1.0 / 3.0).abs() < 1e-6);
        let blue = Color::new(0.0, 0.0, 1.0, 1.0).to_hsba().unwrap();
        assert!((blue.hue - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn hsba_round_trip() {
        let c = Color::new(0.3, 0.6, 0.9, 0.75);
        assert!(approx(c.to_hsba().unwrap().to_color(), c));
        let gray = Color::new(0.4, 0.4, 0.4, 1.0);
        assert!(approx(gray.to_hsba().unwrap().to_color(), gray));
    }

    #[test]
    fn hsba_rejects_non_finite() {
        assert!(Color::new(f32::NAN, 0.0, 0.0, 1.0).to_hsba().is_none());
    }

    // ── lighten ───────────────────────────────────────────────────────────

    #[test]
    fn lighten_zero_is_identity() {
        let c = Color::new(0.3, 0.6, 0.9, 0.75);
        assert_eq!(c.lighten(0.0), c);
    }

    #[test]
    fn lighten_raises_brightness_and_keeps_hue() {
        let c = Color::new(0.4, 0.2, 0.1, 1.0);
        let before = c.to_hsba().unwrap();
        let after = c.lighten(0.2).to_hsba().unwrap();
        assert!((after.brightness - 0.6).abs() < 1e-5);
        assert!((after.hue - before.hue).abs() < 1e-5);
        assert!((after.saturation - before.saturation).abs() < 1e-5);
    }

    #[test]
    fn lighten_saturates_at_one() {
        for amount in [0.2, 1.0, 50.0] {
            let b = Color::new(0.9, 0.5, 0.1, 0.6).lighten(amount).to_hsba().unwrap();
            assert!(b.brightness <= 1.0);
            assert_eq!(b.alpha, 0.6);
        }
    }

    #[test]
    fn lighten_black_goes_gray() {
        assert!(approx(Color::black().lighten(0.2), Color::new(0.2, 0.2, 0.2, 1.0)));
    }

    #[test]
    fn lighten_undecomposable_returns_input() {
        let bad = Color::new(f32::INFINITY, 0.0, 0.0, 1.0);
        assert_eq!(bad.lighten(0.2).r, f32::INFINITY);
    }

    #[test]
    fn to_array_layout() {
        assert_eq!(Color::new(0.1, 0.2, 0.3, 0.4).to_array(), [0.1, 0.2, 0.3, 0.4]);
    }
}
