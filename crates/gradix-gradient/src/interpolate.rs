//! Building blocks for interpolators.
//!
//! The engine never blends colors itself — callers supply a function
//! `(t, start, end) -> color` with `t ∈ [0, 1]`. The helpers here cover
//! the per-component arithmetic those functions are usually built from.
//!
//! Interpolators should return `start` unchanged when `start == end`:
//! besides avoiding floating-point drift on constant segments, this is
//! what absorbs the degenerate bracket cases described on
//! [`ColorGenerator::color_at`](crate::ColorGenerator::color_at).

/// Linear interpolation: `a` at `t = 0`, `b` at `t = 1`.
#[inline]
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a.mul_add(1.0 - t, b * t)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(lerp(3.0, 9.0, 0.0), 3.0);
        assert_eq!(lerp(3.0, 9.0, 1.0), 9.0);
    }

    #[test]
    fn midpoint() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(350.0, 10.0, 0.5), 180.0);
    }
}
