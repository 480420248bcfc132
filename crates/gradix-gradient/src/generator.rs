//! Point sampling and discrete sample sequences over a gradient.

use crate::stop::GradientStop;

/// Samples colors from a gradient's stop list through an interpolator.
///
/// Built by [`Gradient::generator`](crate::Gradient::generator). Stateless
/// beyond its construction parameters: every [`color_at`](Self::color_at)
/// call is independent, and [`iter`](Self::iter) recomputes its samples
/// from scratch each time it is restarted.
#[derive(Debug, Clone)]
pub struct ColorGenerator<'g, C, F> {
    steps: usize,
    interpolator: F,
    stops: &'g [GradientStop<C>],
}

impl<'g, C, F> ColorGenerator<'g, C, F>
where
    F: Fn(f64, &C, &C) -> C,
{
    pub(crate) fn new(steps: usize, interpolator: F, stops: &'g [GradientStop<C>]) -> Self {
        Self {
            steps,
            interpolator,
            stops,
        }
    }

    /// The number of samples [`iter`](Self::iter) produces.
    #[inline]
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Sample the gradient at `location`, clamped to `[0, 1]`.
    ///
    /// The bracketing stops are found by a single linear scan: `start` is
    /// the stop with the largest location strictly below `location`
    /// (default: the first stop), `end` the stop with the smallest location
    /// strictly above it (default: the last stop). Stop counts are small,
    /// so O(n) per call is fine.
    ///
    /// The strict inequalities are contractual: a sample landing exactly on
    /// an interior stop's location brackets between that stop's strictly
    /// lower and strictly higher neighbors, not the stop itself. Likewise
    /// the scan compares against the *unclamped* location, so for inputs
    /// outside `[0, 1]` both brackets collapse onto the same boundary stop
    /// and the local parameter degenerates to NaN — interpolators are
    /// expected to short-circuit equal endpoints, which turns that case
    /// into "return the boundary color".
    pub fn color_at(&self, location: f64) -> C {
        let bounded = location.clamp(0.0, 1.0);
        let mut start = &self.stops[0];
        let mut end = &self.stops[self.stops.len() - 1];
        for stop in self.stops {
            if stop.location() < location {
                if start.location() <= stop.location() {
                    start = stop;
                }
            } else if stop.location() > location && end.location() >= stop.location() {
                end = stop;
            }
        }
        let t = (bounded - start.location()) / (end.location() - start.location());
        (self.interpolator)(t, start.color(), end.color())
    }

    /// A finite, restartable sequence of `steps` evenly spaced samples.
    ///
    /// - 0 steps: empty.
    /// - 1 step: exactly the first stop's color, verbatim — not a sample.
    /// - n ≥ 2 steps: [`color_at`](Self::color_at) of `i / (n - 1)` for
    ///   each `i`, so the endpoints are always included.
    pub fn iter(&self) -> Steps<'_, 'g, C, F> {
        Steps {
            generator: self,
            index: 0,
        }
    }
}

/// Iterator over a generator's evenly spaced samples.
#[derive(Debug)]
pub struct Steps<'a, 'g, C, F> {
    generator: &'a ColorGenerator<'g, C, F>,
    index: usize,
}

impl<C, F> Iterator for Steps<'_, '_, C, F>
where
    C: Clone,
    F: Fn(f64, &C, &C) -> C,
{
    type Item = C;

    fn next(&mut self) -> Option<C> {
        let steps = self.generator.steps;
        if self.index >= steps {
            return None;
        }
        let index = self.index;
        self.index += 1;
        if steps == 1 {
            // Special-cased: the single sample is the first stop itself.
            return Some(self.generator.stops[0].color().clone());
        }
        Some(self.generator.color_at(index as f64 / (steps - 1) as f64))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.generator.steps - self.index;
        (remaining, Some(remaining))
    }
}

impl<C, F> ExactSizeIterator for Steps<'_, '_, C, F>
where
    C: Clone,
    F: Fn(f64, &C, &C) -> C,
{
}

impl<'a, 'g, C, F> IntoIterator for &'a ColorGenerator<'g, C, F>
where
    C: Clone,
    F: Fn(f64, &C, &C) -> C,
{
    type Item = C;
    type IntoIter = Steps<'a, 'g, C, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use crate::Gradient;
    use crate::interpolate::lerp;
    use pretty_assertions::assert_eq;

    // An f64 "color space" with the usual equal-endpoint short-circuit.
    fn identity(t: f64, start: &f64, end: &f64) -> f64 {
        if (start - end).abs() < f64::EPSILON {
            return *start;
        }
        lerp(*start, *end, t)
    }

    #[test]
    fn zero_steps_is_empty() {
        let gradient = Gradient::between(0.0, 1.0);
        let generator = gradient.generator(0, identity);
        assert_eq!(generator.iter().count(), 0);
    }

    #[test]
    fn one_step_is_the_first_stop_verbatim() {
        let gradient = Gradient::between(7.0, 1.0);
        let generator = gradient.generator(1, identity);
        let samples: Vec<f64> = generator.iter().collect();
        assert_eq!(samples, vec![7.0]);
    }

    #[test]
    fn endpoints_are_sampled_exactly() {
        let gradient = Gradient::between(2.0, 5.0);
        let generator = gradient.generator(4, identity);
        let samples: Vec<f64> = generator.iter().collect();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0], 2.0);
        assert_eq!(samples[3], 5.0);
        assert_eq!(samples[0], generator.color_at(0.0));
        assert_eq!(samples[3], generator.color_at(1.0));
    }

    #[test]
    fn two_stop_sampling_is_the_identity_lerp() {
        let gradient = Gradient::between(0.0, 1.0);
        let generator = gradient.generator(2, identity);
        for i in 0..=100 {
            let location = f64::from(i) / 100.0;
            assert_eq!(generator.color_at(location), lerp(0.0, 1.0, location));
        }
    }

    #[test]
    fn out_of_range_locations_clamp() {
        let gradient = Gradient::between(3.0, 9.0);
        let generator = gradient.generator(2, identity);
        assert_eq!(generator.color_at(-0.5), generator.color_at(0.0));
        assert_eq!(generator.color_at(1.5), generator.color_at(1.0));
    }

    #[test]
    fn interior_stop_is_bracketed_by_strict_neighbors() {
        // Sampling exactly on an interior stop does not snap to that stop:
        // the strict inequalities bracket it between its neighbors.
        let gradient = Gradient::across(vec![0.0, 100.0, 1.0]).unwrap();
        let generator = gradient.generator(2, identity);
        // At 0.5 the 100.0 stop is neither start nor end: t = 0.5 over the
        // outer stops.
        assert_eq!(generator.color_at(0.5), 0.5);
        // Just off the stop it participates normally.
        assert_eq!(generator.color_at(0.4), lerp(0.0, 100.0, 0.8));
        assert_eq!(generator.color_at(0.6), lerp(100.0, 1.0, 0.2));
    }

    #[test]
    fn duplicate_interior_locations_are_legal() {
        use crate::stop::GradientStop;
        let gradient = Gradient::with_interior(
            0.0,
            [
                GradientStop::new(0.5, 10.0).unwrap(),
                GradientStop::new(0.5, 20.0).unwrap(),
            ],
            1.0,
        );
        let generator = gradient.generator(2, identity);
        // Below the pair, the later duplicate wins the end bracket.
        assert_eq!(generator.color_at(0.25), lerp(0.0, 20.0, 0.5));
        // Above the pair, the later duplicate wins the start bracket.
        assert_eq!(generator.color_at(0.75), lerp(20.0, 1.0, 0.5));
    }

    #[test]
    fn iteration_is_restartable() {
        let gradient = Gradient::between(0.0, 1.0);
        let generator = gradient.generator(5, identity);
        let first: Vec<f64> = generator.iter().collect();
        let second: Vec<f64> = (&generator).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn exact_size_iteration() {
        let gradient = Gradient::between(0.0, 1.0);
        let generator = gradient.generator(7, identity);
        let mut steps = generator.iter();
        assert_eq!(steps.len(), 7);
        steps.next();
        assert_eq!(steps.len(), 6);
    }
}
