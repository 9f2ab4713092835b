use crate::tree::Leaf;

///
/// LeafView
///
/// Read-only view of one leaf of an expression.
///
/// `predicates` lists the stored tokens only; a leaf without predicates
/// still renders as `[* TO *]`, but nothing is stored for it.
///

#[derive(Clone, Copy, Debug)]
pub struct LeafView<'a> {
    leaf: &'a Leaf,
}

impl<'a> LeafView<'a> {
    pub(crate) const fn new(leaf: &'a Leaf) -> Self {
        Self { leaf }
    }

    #[must_use]
    pub fn field(&self) -> &'a str {
        &self.leaf.field
    }

    /// Formatted predicate tokens in insertion order.
    #[must_use]
    pub fn predicates(&self) -> &'a [String] {
        &self.leaf.predicates
    }

    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.leaf.negated
    }

    /// Formatted boost factor, e.g. `"2.0"`.
    #[must_use]
    pub fn boost(&self) -> Option<&'a str> {
        self.leaf.boost.as_deref()
    }

    /// True for geo filters, which name the field inside their own syntax.
    #[must_use]
    pub const fn hides_field(&self) -> bool {
        self.leaf.hides_field
    }
}
