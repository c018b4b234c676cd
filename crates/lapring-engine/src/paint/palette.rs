//! Fixed color tables.
//!
//! Everything here is `const`; nothing is ever mutated at runtime.

use super::Color;

pub const SURF_CORAL: Color = Color::from_rgb_u8(0xE8, 0x6A, 0x5B);
pub const SURF_ORANGE: Color = Color::from_rgb_u8(0xFF, 0x7E, 0x3E);
pub const SURF_SAND: Color = Color::from_rgb_u8(0xF4, 0xD2, 0x7A);
pub const SURF_PALM: Color = Color::from_rgb_u8(0x6D, 0xAA, 0x6E);
pub const SURF_PACIFIC: Color = Color::from_rgb_u8(0x1C, 0x9C, 0xA6);

/// Warm-to-cool progress gradient, coral through pacific.
pub const SURF_PROGRESS_GRADIENT: [Color; 5] =
    [SURF_CORAL, SURF_ORANGE, SURF_SAND, SURF_PALM, SURF_PACIFIC];

pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Red → yellow → green, the goal-completion ramp.
pub const GOAL_RAMP: [Color; 3] = [RED, YELLOW, GREEN];

/// Neutral gray used for the background track.
pub const TRACK_GRAY: Color = Color::from_rgb_u8(0xC7, 0xC7, 0xCC);

/// Tip glow shadow.
pub const GLOW_SHADOW: Color = Color::black();
