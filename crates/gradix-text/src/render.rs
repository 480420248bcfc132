//! ANSI rendering of a styled tree.
//!
//! Walks the tree depth-first with style inheritance (a child's unset
//! fields resolve against its ancestors) and writes truecolor escape
//! sequences to any `impl Write`. Each styled run is reset afterwards, so
//! output composes safely with whatever surrounds it.

use std::io::{self, Write};

use gradix_color::ansi;

use crate::node::{Attr, Kind, Node, Style};

/// Render a tree as ANSI-colored text.
///
/// # Errors
///
/// Propagates I/O errors from the underlying writer.
pub fn render(w: &mut impl Write, node: &Node) -> io::Result<()> {
    render_with(w, node, Style::default())
}

/// Render a tree into a `String` (for tests and capture).
///
/// # Panics
///
/// Panics if rendering produces invalid UTF-8, which the escape-sequence
/// encoding never does.
#[must_use]
pub fn render_to_string(node: &Node) -> String {
    let mut out = Vec::new();
    render(&mut out, node).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("ANSI output is valid UTF-8")
}

fn render_with(w: &mut impl Write, node: &Node, inherited: Style) -> io::Result<()> {
    let style = node.style.merge_over(inherited);
    match &node.kind {
        Kind::Text(content) if !content.is_empty() => emit_run(w, content, style)?,
        Kind::Insert(inner) => render_with(w, inner, style)?,
        Kind::Opaque(_) => emit_run(w, "_", style)?,
        Kind::Text(_) | Kind::Group => {}
    }
    for child in &node.children {
        render_with(w, child, style)?;
    }
    Ok(())
}

/// Write one styled run: SGR codes, the text, then a reset if any code
/// was emitted.
fn emit_run(w: &mut impl Write, content: &str, style: Style) -> io::Result<()> {
    let mut styled = false;
    if let Some(color) = style.color {
        ansi::fg(w, color)?;
        styled = true;
    }
    if !style.attrs.is_empty() {
        emit_attrs(w, style.attrs)?;
        styled = true;
    }
    w.write_all(content.as_bytes())?;
    if styled {
        ansi::reset(w)?;
    }
    Ok(())
}

/// Emit SGR codes for text attributes as a single CSI sequence,
/// semicolon-separated: `\x1b[1;3m` for bold + italic.
fn emit_attrs(w: &mut impl Write, attrs: Attr) -> io::Result<()> {
    let mut codes: Vec<u8> = Vec::with_capacity(4);
    if attrs.contains(Attr::BOLD) {
        codes.push(1);
    }
    if attrs.contains(Attr::ITALIC) {
        codes.push(3);
    }
    if attrs.contains(Attr::UNDERLINE) {
        codes.push(4);
    }
    if attrs.contains(Attr::STRIKETHROUGH) {
        codes.push(9);
    }
    w.write_all(b"\x1b[")?;
    for (i, code) in codes.iter().enumerate() {
        if i > 0 {
            w.write_all(b";")?;
        }
        write!(w, "{code}")?;
    }
    w.write_all(b"m")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
