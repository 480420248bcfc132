//! # gradix-gradient — the gradient interpolation engine
//!
//! Computes colors along a multi-stop gradient. The engine is generic over
//! the color representation: it never inspects a color's components, it
//! only hands pairs of colors to a caller-supplied interpolator together
//! with a fractional position between them.
//!
//! # Architecture
//!
//! ```text
//! GradientStop<C>   (location, color) anchor, location ∈ [0, 1]
//!     │
//!     ▼
//! Gradient<C>       ordered stop list, first pinned at 0, last at 1
//!     │
//!     ▼
//! ColorGenerator    point sampling (color_at) + a finite, restartable
//!                   sequence of evenly spaced samples (iter)
//! ```
//!
//! All math is pure; gradients and generators are freely reusable and
//! shareable. The only state a generator carries is its construction
//! parameters — every `color_at` call is independent.

// Step counts and stop indices are small; the f64 conversions are exact.
#![allow(clippy::cast_precision_loss)]

pub mod generator;
pub mod gradient;
pub mod interpolate;
pub mod stop;

pub use generator::ColorGenerator;
pub use gradient::{Gradient, GradientError};
pub use stop::GradientStop;
