// SPDX-License-Identifier: MIT
//
// gradix-color — the concrete color layer for the gradix crates.
//
// The gradient engine is generic over its color representation; this crate
// provides the two representations the rest of the workspace actually uses
// (sRGB bytes and hue/saturation/value), the interpolators that blend them,
// name/hex parsing for user-supplied colors, and truecolor ANSI output.
//
// Single-character variable names (r, g, b, h, s, v, c, x, m) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
// Hue math intermediates are f64 and narrow back to f32 component storage.
#![allow(clippy::cast_possible_truncation)]
// Exact component comparisons pick conversion branches; epsilon fuzz here
// would change which branch handles the boundary.
#![allow(clippy::float_cmp)]

pub mod ansi;
pub mod hsv;
pub mod named;
pub mod rgb;

pub use hsv::Hsv;
pub use rgb::Rgb;
