// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation for truecolor output.
//
// Pure functions that write escape sequences to any `impl Write`; no state.
// All functions return `io::Result` propagated from the underlying writer.

use std::io::{self, Write};

use crate::rgb::Rgb;

/// Set the foreground (text) color using a 24-bit `TrueColor` SGR sequence.
#[inline]
pub fn fg(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
