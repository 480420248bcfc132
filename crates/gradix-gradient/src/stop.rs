//! Gradient stops — the (location, color) anchor points of a gradient.

use crate::gradient::GradientError;

/// An immutable (location, color) pair anchoring a gradient.
///
/// The location is a normalized coordinate along the gradient: 0 is the
/// start, 1 is the end. Locations outside `[0, 1]` are rejected at
/// construction time.
///
/// Stops compare by `(location, color)`, in that order.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct GradientStop<C> {
    location: f64,
    color: C,
}

impl<C> GradientStop<C> {
    /// Create a stop at an arbitrary location.
    ///
    /// # Errors
    ///
    /// Returns [`GradientError::LocationOutOfRange`] if `location` is not
    /// within `[0, 1]` (inclusive).
    pub fn new(location: f64, color: C) -> Result<Self, GradientError> {
        if !(0.0..=1.0).contains(&location) {
            return Err(GradientError::LocationOutOfRange(location));
        }
        Ok(Self { location, color })
    }

    /// Create a stop pinned to the start of the gradient (location 0).
    #[inline]
    pub const fn start(color: C) -> Self {
        Self { location: 0.0, color }
    }

    /// Create a stop pinned to the end of the gradient (location 1).
    #[inline]
    pub const fn end(color: C) -> Self {
        Self { location: 1.0, color }
    }

    /// Construct without the range check. Callers must guarantee
    /// `location ∈ [0, 1]`.
    #[inline]
    pub(crate) const fn new_unchecked(location: f64, color: C) -> Self {
        Self { location, color }
    }

    /// The stop's position along the gradient, in `[0, 1]`.
    #[inline]
    #[must_use]
    pub const fn location(&self) -> f64 {
        self.location
    }

    /// The stop's color.
    #[inline]
    pub const fn color(&self) -> &C {
        &self.color
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
