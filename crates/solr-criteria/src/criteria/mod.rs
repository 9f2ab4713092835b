//! Module: criteria
//! Responsibility: fluent builder facade over the expression tree.
//! Does not own: token formatting (value::format) or rendering (render).
//! Boundary: the only public way to create and mutate an expression.

mod inspect;
mod predicate;

#[cfg(test)]
mod tests;

pub use inspect::LeafView;

use crate::{
    error::{CriteriaError, Result},
    tree::{Combinator, Leaf, LeafId, Tree},
};

///
/// Criteria
///
/// One query expression plus a cursor on its focused leaf.
///
/// Predicate calls mutate the focused leaf. `and_where`, `or_where`,
/// `connect` and `not_operator` always act on the root group of the whole
/// expression, whichever leaf is focused.
///
/// Injecting one `Criteria` into another moves it; the injected expression
/// cannot be mutated independently afterwards. Clone it first to reuse it.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Criteria {
    tree: Tree,
    cursor: LeafId,
}

impl Criteria {
    /// Start a new expression on `field`.
    pub fn r#where(field: impl Into<String>) -> Result<Self> {
        let leaf = new_leaf(field)?;
        let (tree, cursor) = Tree::new(leaf);

        Ok(Self { tree, cursor })
    }

    // ------------------------------------------------------------------
    // Combination
    // ------------------------------------------------------------------

    /// Combine with a new field or a whole expression using AND.
    pub fn and_where(self, target: impl Into<Target>) -> Result<Self> {
        self.combine(Combinator::And, target.into())
    }

    /// Combine with a new field or a whole expression using OR.
    pub fn or_where(self, target: impl Into<Target>) -> Result<Self> {
        self.combine(Combinator::Or, target.into())
    }

    fn combine(mut self, op: Combinator, target: Target) -> Result<Self> {
        match target {
            Target::Field(field) => {
                let leaf = new_leaf(field).map_err(|err| self.rejected(err))?;
                tracing::trace!(field = %leaf.field, %op, "criteria leaf appended");

                self.cursor = self.tree.append_leaf(op, leaf);
            }
            Target::Expression(other) => {
                let Self { tree, .. } = *other;
                tracing::trace!(leaves = tree.leaf_count(), %op, "criteria expression injected");

                if let Some(focus) = self.tree.inject(op, tree) {
                    self.cursor = focus;
                }
            }
        }

        Ok(self)
    }

    /// Bracket everything built so far, so the next combination treats it
    /// as a single operand.
    #[must_use]
    pub fn connect(mut self) -> Self {
        tracing::trace!(field = %self.field(), "criteria connected");
        self.tree.connect();
        self
    }

    /// Negate the whole expression: `-( ... )`.
    #[must_use]
    pub fn not_operator(mut self) -> Self {
        tracing::trace!(field = %self.field(), "criteria negated as a whole");
        self.tree.negate_all();
        self
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    /// Field of the focused leaf.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.focused().field
    }

    /// Read-only view of the focused leaf.
    #[must_use]
    pub fn leaf(&self) -> LeafView<'_> {
        LeafView::new(self.focused())
    }

    /// Views of every leaf in creation order, injected expressions included.
    pub fn leaves(&self) -> impl Iterator<Item = LeafView<'_>> {
        self.tree.leaves().map(LeafView::new)
    }

    /// Number of leaves in the whole expression.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.tree.leaf_count()
    }

    pub(crate) const fn tree(&self) -> &Tree {
        &self.tree
    }

    fn focused(&self) -> &Leaf {
        self.tree.leaf(self.cursor)
    }

    fn focused_mut(&mut self) -> &mut Leaf {
        self.tree.leaf_mut(self.cursor)
    }

    // Log a validation failure against the focused field and hand it back.
    fn rejected(&self, err: CriteriaError) -> CriteriaError {
        tracing::debug!(field = %self.field(), kind = err.kind(), "criteria call rejected: {err}");
        err
    }
}

fn new_leaf(field: impl Into<String>) -> Result<Leaf> {
    let field = field.into();
    if field.is_empty() {
        return Err(CriteriaError::EmptyField);
    }

    Ok(Leaf::new(field))
}

///
/// Target
///
/// Right-hand side of `and_where` / `or_where`: a new field, or a complete
/// expression spliced in as one bracketed operand.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    Field(String),
    Expression(Box<Criteria>),
}

impl From<&str> for Target {
    fn from(field: &str) -> Self {
        Self::Field(field.to_string())
    }
}

impl From<String> for Target {
    fn from(field: String) -> Self {
        Self::Field(field)
    }
}

impl From<&String> for Target {
    fn from(field: &String) -> Self {
        Self::Field(field.clone())
    }
}

impl From<Criteria> for Target {
    fn from(criteria: Criteria) -> Self {
        Self::Expression(Box::new(criteria))
    }
}
