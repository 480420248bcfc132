//! The styled-text tree.
//!
//! A document is a tree of [`Node`]s: literal text at the leaves, containers
//! and insertable content in between. Styles cascade — a node's unset fields
//! inherit from its ancestors at render time, so an explicit color on a node
//! overrides anything a gradient would assign to its subtree.

use gradix_color::Rgb;

// ─── Text Attributes ─────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// Text attributes stored as a compact bitfield.
    ///
    /// These map directly to SGR (Select Graphic Rendition) parameters.
    /// Combine with bitwise OR:
    ///
    /// ```
    /// use gradix_text::Attr;
    ///
    /// let style = Attr::BOLD | Attr::ITALIC;
    /// assert!(style.contains(Attr::BOLD));
    /// assert!(!style.contains(Attr::UNDERLINE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1 — increased intensity.
        const BOLD          = 1 << 0;
        /// SGR 3 — italic or oblique.
        const ITALIC        = 1 << 1;
        /// SGR 4 — straight underline.
        const UNDERLINE     = 1 << 2;
        /// SGR 9 — crossed-out text.
        const STRIKETHROUGH = 1 << 3;
    }
}

// ─── Style ───────────────────────────────────────────────────────────────────

/// Styling carried by a node: an optional foreground color plus attributes.
///
/// `color: None` means "inherit" — the distributor only ever colors nodes
/// whose color is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: Option<Rgb>,
    pub attrs: Attr,
}

impl Style {
    /// Resolve this style against an inherited one: set fields win,
    /// attributes accumulate.
    #[must_use]
    pub fn merge_over(self, inherited: Self) -> Self {
        Self {
            color: self.color.or(inherited.color),
            attrs: self.attrs | inherited.attrs,
        }
    }
}

// ─── Node ────────────────────────────────────────────────────────────────────

/// What a node holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// A literal text leaf.
    Text(String),
    /// Insertable pre-rendered content: a value substituted into the
    /// document (a placeholder expansion, for example). Its textual
    /// rendering is known, but it is colored as a unit.
    Insert(Box<Node>),
    /// Content whose textual rendering is not known to this process
    /// (resolved client-side). Flattens to a single placeholder character.
    Opaque(String),
    /// A pure container with no content of its own.
    Group,
}

/// A node in the styled-text tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: Kind,
    pub style: Style,
    pub children: Vec<Node>,
}

impl Node {
    /// A literal text leaf.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: Kind::Text(content.into()),
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// An empty container.
    #[must_use]
    pub fn group() -> Self {
        Self {
            kind: Kind::Group,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// Insertable content wrapping an already-built subtree.
    #[must_use]
    pub fn insert(content: Self) -> Self {
        Self {
            kind: Kind::Insert(Box::new(content)),
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// Opaque content identified by `name` (a keybind, a selector, ...).
    #[must_use]
    pub fn opaque(name: impl Into<String>) -> Self {
        Self {
            kind: Kind::Opaque(name.into()),
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// Set an explicit foreground color.
    #[must_use]
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.style.color = Some(color);
        self
    }

    /// Set an explicit color only if none is present.
    #[must_use]
    pub fn color_if_absent(mut self, color: Rgb) -> Self {
        if self.style.color.is_none() {
            self.style.color = Some(color);
        }
        self
    }

    /// Set text attributes.
    #[must_use]
    pub fn with_attrs(mut self, attrs: Attr) -> Self {
        self.style.attrs = attrs;
        self
    }

    /// Replace the child list.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    /// Append a single child.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Whether this node carries an explicit color of its own.
    #[inline]
    #[must_use]
    pub const fn has_explicit_color(&self) -> bool {
        self.style.color.is_some()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
