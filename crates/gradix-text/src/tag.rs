//! The gradient distributor — a single-use, two-pass tree rewrite.
//!
//! Pass 1 measures the tree's character count. Pass 1.5 sizes a color
//! generator to it and rescales the phase. Pass 2 walks the tree again,
//! splitting literal text into one node per code point and assigning each
//! its gradient color, while a suppression marker keeps explicitly-colored
//! subtrees untouched without losing index alignment for their siblings.
//!
//! A [`GradientTag`] is consumed by [`apply`](GradientTag::apply): reusing
//! one distribution for a second tree is a type error, not a runtime check.

use std::error::Error;
use std::fmt;

use gradix_color::{Hsv, Rgb};
use gradix_gradient::{ColorGenerator, Gradient};

use crate::flatten::measure;
use crate::node::{Kind, Node, Style};

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Errors from building a gradient tag out of user-supplied arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum TagError {
    /// An argument was neither a known color name nor a hex color.
    UnknownColor(String),
    /// The trailing phase argument was outside `[-1, 1]`.
    PhaseOutOfRange(f64),
    /// Exactly one color was supplied; a gradient needs at least two.
    NotEnoughColors,
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColor(input) => write!(
                f,
                "unable to parse a color from '{input}'; use named colors or hex (#RRGGBB) colors"
            ),
            Self::PhaseOutOfRange(phase) => write!(
                f,
                "gradient phase is out of range ({phase}); must be in the range [-1.0, 1.0] (inclusive)"
            ),
            Self::NotEnoughColors => write!(
                f,
                "invalid gradient, not enough colors; gradients must have at least two colors"
            ),
        }
    }
}

impl Error for TagError {}

// ─── GradientTag ─────────────────────────────────────────────────────────────

type HsvLerp = fn(f64, &Hsv, &Hsv) -> Hsv;

/// A configured gradient distribution, ready to apply to one tree.
#[derive(Debug, Clone)]
pub struct GradientTag {
    gradient: Gradient<Hsv>,
    color_count: usize,
    phase: f64,
}

impl GradientTag {
    /// Build a distribution from colors and a phase.
    ///
    /// An empty color list falls back to white→black. A negative phase is
    /// reinterpreted: `[-1, 0)` maps to `[0, 1)` with the color order
    /// reversed, so `-0.25` means "a quarter turn the other way".
    ///
    /// # Errors
    ///
    /// [`TagError::PhaseOutOfRange`] for phases outside `[-1, 1]`, and
    /// [`TagError::NotEnoughColors`] when exactly one color is supplied.
    pub fn new(colors: Vec<Rgb>, phase: f64) -> Result<Self, TagError> {
        if !(-1.0..=1.0).contains(&phase) {
            return Err(TagError::PhaseOutOfRange(phase));
        }
        if colors.len() == 1 {
            return Err(TagError::NotEnoughColors);
        }
        let mut colors = if colors.is_empty() {
            vec![Rgb::WHITE, Rgb::BLACK]
        } else {
            colors
        };
        let phase = if phase < 0.0 {
            colors.reverse();
            1.0 + phase
        } else {
            phase
        };

        let color_count = colors.len();
        let hsv: Vec<Hsv> = colors.iter().copied().map(Rgb::to_hsv).collect();
        let gradient = Gradient::across(hsv).map_err(|_| TagError::NotEnoughColors)?;

        Ok(Self {
            gradient,
            color_count,
            phase,
        })
    }

    /// Distribute the gradient over `root`, returning the rewritten tree.
    ///
    /// Consumes the tag: each distribution is single-use.
    #[must_use]
    pub fn apply(self, root: &Node) -> Node {
        let Self {
            gradient,
            color_count,
            phase,
        } = self;

        // Pass 1 — measure.
        let size = measure(root);

        // Pass 1.5 — scale character indices so the last one maps to the
        // last color, and rescale the phase into the same index space.
        let multiplier = if size > 1 {
            (color_count - 1) as f64 / (size - 1) as f64
        } else {
            0.0
        };
        let mut distribution = Distribution {
            generator: gradient.generator(size, Hsv::lerp as HsvLerp),
            index: 0,
            multiplier,
            phase: phase * (color_count - 1) as f64,
        };

        // Pass 2 — rewrite.
        distribution.rewrite(root, 0, None)
    }
}

// ─── Pass 2 traversal state ──────────────────────────────────────────────────

struct Distribution<'g> {
    generator: ColorGenerator<'g, Hsv, HsvLerp>,
    /// Shared character counter across the whole traversal.
    index: usize,
    multiplier: f64,
    phase: f64,
}

impl Distribution<'_> {
    /// The color for the current character index, without side effects.
    ///
    /// The position is handed to the sampler unclamped; indices past the
    /// last color resolve to the final stop through the sampler's own
    /// clamping and the interpolator's equal-endpoint short-circuit.
    fn color(&self) -> Rgb {
        let position = self.index as f64 * self.multiplier + self.phase;
        Rgb::from_hsv(self.generator.color_at(position))
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    /// Rewrite one node. `suppress` carries the shallowest depth at which
    /// an ancestor's explicit color disabled coloring; it is threaded down
    /// the recursion and restored for siblings by the caller's frame.
    fn rewrite(&mut self, node: &Node, depth: usize, suppress: Option<usize>) -> Node {
        let inside_override = matches!(suppress, Some(d) if depth > d);
        if inside_override || node.has_explicit_color() {
            // This subtree has its own color, which overrides ours. Keep
            // counting characters so siblings that resume coloring stay
            // aligned with the measured positions.
            let suppress = match suppress {
                Some(d) if d < depth => Some(d),
                _ => Some(depth),
            };
            if let Kind::Text(content) = &node.kind {
                for _ in content.chars() {
                    self.advance();
                }
            }
            return Node {
                kind: node.kind.clone(),
                style: node.style,
                children: self.rewrite_children(node, depth, suppress),
            };
        }

        match &node.kind {
            Kind::Text(content) if !content.is_empty() => {
                // Split into one node per code point, each with its own
                // sampled color.
                let mut children: Vec<Node> = content
                    .chars()
                    .map(|ch| {
                        let colored = Node {
                            kind: Kind::Text(ch.to_string()),
                            style: Style {
                                color: Some(self.color()),
                                attrs: node.style.attrs,
                            },
                            children: Vec::new(),
                        };
                        self.advance();
                        colored
                    })
                    .collect();
                children.extend(self.rewrite_children(node, depth, None));
                Node {
                    kind: Kind::Group,
                    style: Style::default(),
                    children,
                }
            }
            Kind::Insert(_) | Kind::Opaque(_) => {
                // Not splittable: one color for the whole node, one index
                // step — coarser than what measurement counted for it,
                // intentionally.
                let color = self.color();
                self.advance();
                Node {
                    kind: node.kind.clone(),
                    style: node.style,
                    children: self.rewrite_children(node, depth, None),
                }
                .color_if_absent(color)
            }
            Kind::Text(_) | Kind::Group => Node {
                kind: node.kind.clone(),
                style: node.style,
                children: self.rewrite_children(node, depth, None),
            },
        }
    }

    fn rewrite_children(
        &mut self,
        node: &Node,
        depth: usize,
        suppress: Option<usize>,
    ) -> Vec<Node> {
        node.children
            .iter()
            .map(|child| self.rewrite(child, depth + 1, suppress))
            .collect()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use gradix_color::named;
    use pretty_assertions::assert_eq;

    fn red() -> Rgb {
        named::lookup("red").unwrap()
    }

    fn blue() -> Rgb {
        named::lookup("blue").unwrap()
    }

    /// Collect the colors of all single-character text leaves, in order.
    fn leaf_colors(node: &Node) -> Vec<Option<Rgb>> {
        let mut colors = Vec::new();
        collect_leaf_colors(node, &mut colors);
        colors
    }

    fn collect_leaf_colors(node: &Node, out: &mut Vec<Option<Rgb>>) {
        if let Kind::Text(content) = &node.kind {
            if !content.is_empty() {
                out.push(node.style.color);
            }
        }
        for child in &node.children {
            collect_leaf_colors(child, out);
        }
    }

    #[test]
    fn rejects_out_of_range_phase() {
        assert_eq!(
            GradientTag::new(vec![red(), blue()], 1.5).unwrap_err(),
            TagError::PhaseOutOfRange(1.5)
        );
        assert_eq!(
            GradientTag::new(vec![red(), blue()], -1.01).unwrap_err(),
            TagError::PhaseOutOfRange(-1.01)
        );
    }

    #[test]
    fn rejects_single_color() {
        assert_eq!(
            GradientTag::new(vec![red()], 0.0).unwrap_err(),
            TagError::NotEnoughColors
        );
    }

    #[test]
    fn empty_color_list_defaults_to_white_black() {
        let tag = GradientTag::new(Vec::new(), 0.0).unwrap();
        let out = tag.apply(&Node::text("ab"));
        let colors = leaf_colors(&out);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0], Some(Rgb::WHITE));
        assert_eq!(colors[1], Some(Rgb::BLACK));
    }

    #[test]
    fn five_characters_span_red_to_blue_exactly() {
        // red→blue in HSV walks hue 0°→240°: yellow, green, aqua between.
        let tag = GradientTag::new(vec![red(), blue()], 0.0).unwrap();
        let out = tag.apply(&Node::text("ABCDE"));
        let colors = leaf_colors(&out);
        assert_eq!(
            colors,
            vec![
                named::lookup("red"),
                named::lookup("yellow"),
                named::lookup("green"),
                named::lookup("aqua"),
                named::lookup("blue"),
            ]
        );
    }

    #[test]
    fn explicit_colors_are_kept_and_keep_the_index_aligned() {
        // "A" + explicitly-gold "BC" + "D": four measured characters. B and
        // C keep their override; A and D sit at indices 0 and 3 of 4, i.e.
        // the gradient's endpoints.
        let gold = named::lookup("gold").unwrap();
        let tree = Node::group()
            .with_child(Node::text("A"))
            .with_child(Node::text("BC").with_color(gold))
            .with_child(Node::text("D"));
        let tag = GradientTag::new(vec![red(), blue()], 0.0).unwrap();
        let out = tag.apply(&tree);

        assert_eq!(
            leaf_colors(&out),
            vec![
                named::lookup("red"),
                Some(gold),
                named::lookup("blue"),
            ]
        );
        // The overridden node survives as-is, children intact, unsplit.
        assert_eq!(out.children[1], Node::text("BC").with_color(gold));
    }

    #[test]
    fn suppression_covers_descendants_and_clears_for_siblings() {
        let gold = named::lookup("gold").unwrap();
        let overridden = Node::text("B")
            .with_color(gold)
            .with_child(Node::text("C"));
        let tree = Node::group()
            .with_child(Node::text("A"))
            .with_child(overridden)
            .with_child(Node::text("D"));
        let tag = GradientTag::new(vec![red(), blue()], 0.0).unwrap();
        let out = tag.apply(&tree);

        // The un-colored descendant of the overridden node is suppressed
        // too: it keeps no color of its own and is not split.
        assert_eq!(out.children[1].children[0], Node::text("C"));
        // Siblings after the overridden subtree resume at the right index:
        // D is the last of four measured characters.
        assert_eq!(leaf_colors(&out).last().copied(), Some(named::lookup("blue")));
    }

    #[test]
    fn insert_nodes_take_one_color_and_one_index_step() {
        // "AB" + insert("xyz") + "CD" measures 7, but the insert consumes a
        // single index slot in the rewrite.
        let tree = Node::group()
            .with_child(Node::text("AB"))
            .with_child(Node::insert(Node::text("xyz")))
            .with_child(Node::text("CD"));
        let tag = GradientTag::new(vec![red(), blue()], 0.0).unwrap();
        let out = tag.apply(&tree);

        let insert_node = &out.children[1];
        assert!(matches!(insert_node.kind, Kind::Insert(_)));
        assert!(insert_node.has_explicit_color());

        // 'D' lands at index 4 of the 7 measured characters.
        let multiplier = 1.0 / 6.0;
        let expected = Rgb::from_hsv(Hsv::lerp(
            4.0 * multiplier,
            &red().to_hsv(),
            &blue().to_hsv(),
        ));
        assert_eq!(leaf_colors(&out).last().copied(), Some(Some(expected)));
    }

    #[test]
    fn positive_phase_matches_negative_phase_with_reversed_colors() {
        let text = Node::text("phase equivalence");
        let forward = GradientTag::new(vec![red(), blue()], 0.5).unwrap();
        let backward = GradientTag::new(vec![blue(), red()], -0.5).unwrap();
        assert_eq!(forward.apply(&text), backward.apply(&text));
    }

    #[test]
    fn single_character_gets_the_start_color() {
        let tag = GradientTag::new(vec![red(), blue()], 0.0).unwrap();
        let out = tag.apply(&Node::text("A"));
        assert_eq!(leaf_colors(&out), vec![named::lookup("red")]);
    }

    #[test]
    fn empty_tree_survives() {
        let tag = GradientTag::new(vec![red(), blue()], 0.0).unwrap();
        let out = tag.apply(&Node::group());
        assert_eq!(out, Node::group());
    }

    #[test]
    fn attributes_survive_the_split() {
        use crate::node::Attr;
        let tag = GradientTag::new(vec![red(), blue()], 0.0).unwrap();
        let out = tag.apply(&Node::text("ok").with_attrs(Attr::BOLD));
        for leaf in &out.children {
            assert_eq!(leaf.style.attrs, Attr::BOLD);
        }
    }
}
