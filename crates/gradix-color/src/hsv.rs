// SPDX-License-Identifier: MIT
//
// Hue/saturation/value color — the space gradients interpolate in.
//
// Interpolating in HSV walks the hue circle instead of cutting across the
// RGB cube, which keeps intermediate colors saturated: red→blue passes
// through yellow, green, and cyan rather than washed-out gray-purple.

use gradix_gradient::interpolate::lerp;

/// A color in HSV space.
///
/// Hue is an angle in degrees (`0.0..360.0`); saturation and value are
/// fractions in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Create a color from raw HSV components.
    #[inline]
    #[must_use]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Interpolate between two HSV colors at `t`.
    ///
    /// Equal endpoints short-circuit to `start`, so constant gradient
    /// segments cannot drift through float error (and degenerate brackets
    /// resolve to the boundary color).
    ///
    /// Hue interpolates linearly and is reduced modulo 360 — deliberately
    /// *not* shortest-path: blending 350° toward 10° at `t = 0.5` yields
    /// 180°, straight through the far side of the wheel. Saturation and
    /// value interpolate linearly and are clamped to `[0, 1]` to absorb
    /// floating-point overshoot.
    #[must_use]
    pub fn lerp(t: f64, start: &Self, end: &Self) -> Self {
        if start == end {
            return *start;
        }
        Self {
            h: (lerp(f64::from(start.h), f64::from(end.h), t) % 360.0) as f32,
            s: lerp(f64::from(start.s), f64::from(end.s), t).clamp(0.0, 1.0) as f32,
            v: lerp(f64::from(start.v), f64::from(end.v), t).clamp(0.0, 1.0) as f32,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
