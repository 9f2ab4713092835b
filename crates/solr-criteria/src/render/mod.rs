//! Module: render
//! Responsibility: serialize an expression tree into query text.
//! Does not own: token formatting; tokens are stored pre-formatted.
//! Boundary: read-only over `Tree`; rendering never mutates the expression.


use crate::{
    criteria::Criteria,
    tree::{Combinator, GroupId, Leaf, Node, Tree},
    value::format::MATCH_ALL,
};
use std::fmt::{self, Display, Write};

impl Criteria {
    /// Render the whole expression as query text.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.to_string()
    }

    /// Alias of [`Self::to_query_string`].
    #[must_use]
    pub fn query(&self) -> String {
        self.to_string()
    }
}

impl Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree();

        Renderer { tree }.group(f, tree.root())
    }
}

///
/// Renderer
///
/// Depth-first walk from the overall root. Only that root is exempt from
/// brackets; injected subtrees render like any other inner group.
///

struct Renderer<'a> {
    tree: &'a Tree,
}

impl Renderer<'_> {
    fn node(&self, f: &mut impl Write, edge: Combinator, node: Node) -> fmt::Result {
        if edge != Combinator::Blank {
            write!(f, " {edge} ")?;
        }

        match node {
            Node::Leaf(id) => Self::leaf(f, self.tree.leaf(id)),
            Node::Group(id) => self.group(f, id),
        }
    }

    fn group(&self, f: &mut impl Write, id: GroupId) -> fmt::Result {
        let group = self.tree.group(id);
        let is_root = id == self.tree.root();

        // `-` in front of a child that already brackets itself needs no
        // extra pair: `-(a OR b)`, not `-((a OR b))`.
        let collapses = group.negate_all
            && matches!(group.children.as_slice(), [(_, only)] if self.brackets_itself(*only));
        let brackets =
            !collapses && (group.negate_all || (!is_root && group.children.len() > 1));

        if group.negate_all {
            f.write_char('-')?;
        }
        if brackets {
            f.write_char('(')?;
        }
        for &(edge, child) in &group.children {
            self.node(f, edge, child)?;
        }
        if brackets {
            f.write_char(')')?;
        }

        Ok(())
    }

    fn leaf(f: &mut impl Write, leaf: &Leaf) -> fmt::Result {
        if leaf.negated {
            f.write_char('-')?;
        }
        if !leaf.hides_field {
            write!(f, "{}:", leaf.field)?;
        }

        match leaf.predicates.as_slice() {
            [] => f.write_str(MATCH_ALL)?,
            [single] => f.write_str(single)?,
            many => write!(f, "({})", many.join(" "))?,
        }

        if let Some(boost) = &leaf.boost {
            write!(f, "^{boost}")?;
        }

        Ok(())
    }

    // True when `node` renders wrapped in one outer bracket pair with no
    // leading `-`. Never true for a leaf or for the root.
    fn brackets_itself(&self, node: Node) -> bool {
        let Node::Group(id) = node else {
            return false;
        };
        let group = self.tree.group(id);

        if group.negate_all || id == self.tree.root() {
            return false;
        }

        match group.children.as_slice() {
            [(_, only)] => self.brackets_itself(*only),
            children => children.len() > 1,
        }
    }
}
