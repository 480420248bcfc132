//! # gradix-text — gradient color distribution over styled text
//!
//! Takes a styled-text tree and a gradient, and rewrites the tree so each
//! character carries its own gradient-sampled color — without disturbing
//! spans that already have an explicit color.
//!
//! # Architecture
//!
//! ```text
//! args.rs:    "red", "#00ff00", "0.25"  →  GradientTag (colors + phase)
//!     │
//!     ▼
//! tag.rs:     two-pass distribution
//!               pass 1   measure the tree's character count
//!               pass 1.5 size a generator to it, scale the phase
//!               pass 2   rewrite depth-first, one color per character
//!     │
//!     ▼
//! node.rs:    the styled tree being measured and rewritten
//! flatten.rs: textual rendering of insertable content (for pass 1)
//! render.rs:  ANSI output of the finished tree
//! ```
//!
//! A [`GradientTag`] is single-use: [`apply`](GradientTag::apply) consumes
//! it, so the measure-then-rewrite protocol cannot be replayed against a
//! second tree. Everything is synchronous and pure.

// Character counts and stop indices are small; the f64 conversions are exact.
#![allow(clippy::cast_precision_loss)]

pub mod args;
pub mod flatten;
pub mod node;
pub mod render;
pub mod tag;

pub use args::parse_args;
pub use flatten::{flatten, measure};
pub use node::{Attr, Kind, Node, Style};
pub use render::{render, render_to_string};
pub use tag::{GradientTag, TagError};
