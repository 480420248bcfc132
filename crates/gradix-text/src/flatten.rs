//! Flattening and measurement — pass 1 of the distribution.
//!
//! The distributor needs to know, before assigning any color, how many
//! characters the tree will display. Literal text is counted in Unicode
//! scalar values (code points). Insertable content is flattened to its
//! textual rendering and counted the same way. Opaque content gets a
//! single placeholder character — we cannot see inside it, so one color
//! slot is the best approximation.

use crate::node::{Kind, Node};

/// The stand-in rendering for content we cannot inspect.
const OPAQUE_PLACEHOLDER: &str = "_";

/// Flatten a subtree to the text it would display.
#[must_use]
pub fn flatten(node: &Node) -> String {
    let mut out = String::new();
    flatten_into(node, &mut out);
    out
}

fn flatten_into(node: &Node, out: &mut String) {
    match &node.kind {
        Kind::Text(content) => out.push_str(content),
        Kind::Insert(inner) => flatten_into(inner, out),
        Kind::Opaque(_) => out.push_str(OPAQUE_PLACEHOLDER),
        Kind::Group => {}
    }
    for child in &node.children {
        flatten_into(child, out);
    }
}

/// Count the characters the tree contributes to the gradient, in document
/// order: code points for literal text, the flattened rendering's code
/// points for insertable content, one for anything opaque, nothing for
/// bare containers.
#[must_use]
pub fn measure(node: &Node) -> usize {
    let own = match &node.kind {
        Kind::Text(content) => content.chars().count(),
        Kind::Insert(inner) => flatten(inner).chars().count(),
        Kind::Opaque(_) => 1,
        Kind::Group => 0,
    };
    own + node.children.iter().map(measure).sum::<usize>()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
