//! The [`Gradient`] type and its factory family.

use std::error::Error;
use std::fmt;

use crate::generator::ColorGenerator;
use crate::stop::GradientStop;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Errors raised when constructing gradients or stops.
///
/// All of these are construction-time failures: they surface at the call
/// that violates the invariant, never lazily during sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientError {
    /// A stop location was outside `[0, 1]`.
    LocationOutOfRange(f64),
    /// Fewer than two stops (or colors) were supplied.
    TooFewStops(usize),
    /// The first stop is not at location 0 or the last is not at location 1.
    UnanchoredEndpoints { first: f64, last: f64 },
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocationOutOfRange(location) => write!(
                f,
                "gradient stop location ({location}) must be within the required range [0, 1]"
            ),
            Self::TooFewStops(count) => {
                write!(f, "a gradient needs at least two stops, got {count}")
            }
            Self::UnanchoredEndpoints { first, last } => write!(
                f,
                "gradient stops must begin at location 0 and end at location 1 \
                 (got {first} and {last})"
            ),
        }
    }
}

impl Error for GradientError {}

// ─── Gradient ────────────────────────────────────────────────────────────────

/// An ordered collection of gradient stops.
///
/// Invariants, enforced at construction and frozen afterwards:
///
/// - at least two stops;
/// - the first stop sits at location 0, the last at location 1.
///
/// Interior stops may appear in any order and may share locations — the
/// sampling algorithm treats them as an unordered set of candidate bracket
/// points. The stop list is owned, so mutating whatever collection it was
/// built from cannot affect an existing gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient<C> {
    stops: Vec<GradientStop<C>>,
}

impl<C> Gradient<C> {
    /// A two-stop gradient from `start` to `end`.
    pub fn between(start: C, end: C) -> Self {
        Self {
            stops: vec![GradientStop::start(start), GradientStop::end(end)],
        }
    }

    /// A gradient with pinned endpoints and arbitrary interior stops.
    pub fn with_interior(
        start: C,
        interior: impl IntoIterator<Item = GradientStop<C>>,
        end: C,
    ) -> Self {
        let mut stops = vec![GradientStop::start(start)];
        stops.extend(interior);
        stops.push(GradientStop::end(end));
        Self { stops }
    }

    /// A gradient from a pre-built stop list.
    ///
    /// # Errors
    ///
    /// Returns [`GradientError::TooFewStops`] for lists shorter than two,
    /// and [`GradientError::UnanchoredEndpoints`] when the first stop is
    /// not at location 0 or the last is not at location 1.
    pub fn from_stops(stops: Vec<GradientStop<C>>) -> Result<Self, GradientError> {
        if stops.len() < 2 {
            return Err(GradientError::TooFewStops(stops.len()));
        }
        let first = stops[0].location();
        let last = stops[stops.len() - 1].location();
        if first != 0.0 || last != 1.0 {
            return Err(GradientError::UnanchoredEndpoints { first, last });
        }
        Ok(Self { stops })
    }

    /// A gradient with the given colors spread evenly: color `i` lands at
    /// location `i / (len - 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`GradientError::TooFewStops`] for fewer than two colors.
    pub fn across(colors: Vec<C>) -> Result<Self, GradientError> {
        if colors.len() < 2 {
            return Err(GradientError::TooFewStops(colors.len()));
        }
        let span = (colors.len() - 1) as f64;
        let stops = colors
            .into_iter()
            .enumerate()
            .map(|(i, color)| GradientStop::new_unchecked(i as f64 / span, color))
            .collect();
        Ok(Self { stops })
    }

    /// The stop at location 0.
    #[inline]
    pub fn start(&self) -> &GradientStop<C> {
        &self.stops[0]
    }

    /// The stop at location 1.
    #[inline]
    pub fn end(&self) -> &GradientStop<C> {
        &self.stops[self.stops.len() - 1]
    }

    /// All stops, in construction order.
    #[inline]
    pub fn stops(&self) -> &[GradientStop<C>] {
        &self.stops
    }

    /// Build a generator producing `steps` evenly spaced samples through
    /// `interpolator`. The generator borrows this gradient's stops; it is
    /// cheap to discard and recreate.
    pub fn generator<F>(&self, steps: usize, interpolator: F) -> ColorGenerator<'_, C, F>
    where
        F: Fn(f64, &C, &C) -> C,
    {
        ColorGenerator::new(steps, interpolator, &self.stops)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn between_pins_endpoints() {
        let gradient = Gradient::between('a', 'b');
        assert_eq!(gradient.start().location(), 0.0);
        assert_eq!(gradient.end().location(), 1.0);
        assert_eq!(gradient.stops().len(), 2);
    }

    #[test]
    fn with_interior_keeps_interior_order() {
        let gradient = Gradient::with_interior(
            'a',
            [
                GradientStop::new(0.75, 'x').unwrap(),
                GradientStop::new(0.25, 'y').unwrap(),
            ],
            'b',
        );
        assert_eq!(gradient.stops().len(), 4);
        assert_eq!(gradient.stops()[1].location(), 0.75);
        assert_eq!(gradient.stops()[2].location(), 0.25);
        assert_eq!(*gradient.end().color(), 'b');
    }

    #[test]
    fn from_stops_rejects_short_lists() {
        let one = vec![GradientStop::start('a')];
        assert_eq!(
            Gradient::from_stops(one).unwrap_err(),
            GradientError::TooFewStops(1)
        );
        assert_eq!(
            Gradient::<char>::from_stops(Vec::new()).unwrap_err(),
            GradientError::TooFewStops(0)
        );
    }

    #[test]
    fn from_stops_rejects_unanchored_endpoints() {
        let stops = vec![
            GradientStop::new(0.1, 'a').unwrap(),
            GradientStop::end('b'),
        ];
        assert!(matches!(
            Gradient::from_stops(stops),
            Err(GradientError::UnanchoredEndpoints { .. })
        ));
    }

    #[test]
    fn across_spreads_colors_evenly() {
        let gradient = Gradient::across(vec!['a', 'b', 'c']).unwrap();
        let locations: Vec<f64> = gradient.stops().iter().map(GradientStop::location).collect();
        assert_eq!(locations, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn across_rejects_single_color() {
        assert_eq!(
            Gradient::across(vec!['a']).unwrap_err(),
            GradientError::TooFewStops(1)
        );
    }
}
