//! Tag-argument parsing: a color list with an optional trailing phase.
//!
//! Arguments arrive as the already-split pieces of a tag, e.g.
//! `["red", "#00ff00", "0.25"]`. Every argument must name a color, except
//! that the *last* one may instead be a number — the phase. A number
//! anywhere else is treated (and rejected) as a color, which is exactly
//! what lets `"0.25"` still be a hex-less color error rather than a
//! silently-swallowed phase.

use gradix_color::named;

use crate::tag::{GradientTag, TagError};

/// Parse tag arguments into a ready-to-apply [`GradientTag`].
///
/// No arguments at all yields the default white→black gradient.
///
/// # Errors
///
/// [`TagError::UnknownColor`] for an argument that is neither a color nor
/// a trailing phase; [`TagError::PhaseOutOfRange`] and
/// [`TagError::NotEnoughColors`] as raised by [`GradientTag::new`].
pub fn parse_args(args: &[&str]) -> Result<GradientTag, TagError> {
    let mut phase = 0.0;
    let mut colors = Vec::with_capacity(args.len());

    let mut iter = args.iter().peekable();
    while let Some(arg) = iter.next() {
        // Last argument? Maybe this is the phase.
        if iter.peek().is_none() {
            if let Ok(parsed) = arg.parse::<f64>() {
                phase = parsed;
                break;
            }
        }
        let color =
            named::parse(arg).ok_or_else(|| TagError::UnknownColor((*arg).to_string()))?;
        colors.push(color);
    }

    GradientTag::new(colors, phase)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
