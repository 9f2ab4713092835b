//! Module: tree
//! Responsibility: arena-backed expression tree (leaves, groups, combinators).
//! Does not own: value formatting or text rendering.
//! Boundary: mutated only through `Criteria`; read by `render`.


use derive_more::Display;

///
/// LeafId / GroupId
///
/// Typed indices into the arena. A `LeafId` can only ever address a leaf,
/// so the builder cursor never needs a runtime "is this a leaf" check.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct LeafId(usize);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct GroupId(usize);

///
/// Combinator
///
/// Edge label placed in front of a child when rendering.
/// The first child of every group is always `Blank`.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub(crate) enum Combinator {
    #[display("")]
    Blank,
    #[display("AND")]
    And,
    #[display("OR")]
    Or,
}

///
/// Node
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Node {
    Leaf(LeafId),
    Group(GroupId),
}

///
/// Leaf
///
/// One field and its ordered predicate tokens.
/// Tokens are stored already escaped/quoted; the field never changes.
///

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Leaf {
    pub field: String,
    pub predicates: Vec<String>,
    pub negated: bool,
    pub boost: Option<String>,
    pub hides_field: bool,
}

impl Leaf {
    pub(crate) const fn new(field: String) -> Self {
        Self {
            field,
            predicates: Vec::new(),
            negated: false,
            boost: None,
            hides_field: false,
        }
    }
}

///
/// Group
///

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Group {
    pub children: Vec<(Combinator, Node)>,
    pub negate_all: bool,
    pub most_recent: Option<LeafId>,
}

///
/// Tree
///
/// Owns every node of one expression. Membership is append-only: children
/// are never removed or reordered, only re-parented by `connect`.
///

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Tree {
    leaves: Vec<Leaf>,
    groups: Vec<Group>,
    root: GroupId,
}

impl Tree {
    /// Start a tree whose root group holds a single leaf.
    pub(crate) fn new(leaf: Leaf) -> (Self, LeafId) {
        let mut tree = Self {
            leaves: Vec::new(),
            groups: vec![Group::default()],
            root: GroupId(0),
        };
        let id = tree.append_leaf(Combinator::Blank, leaf);

        (tree, id)
    }

    // ------------------------------------------------------------------
    // Access
    // ------------------------------------------------------------------

    pub(crate) const fn root(&self) -> GroupId {
        self.root
    }

    pub(crate) fn leaf(&self, id: LeafId) -> &Leaf {
        &self.leaves[id.0]
    }

    pub(crate) fn leaf_mut(&mut self, id: LeafId) -> &mut Leaf {
        &mut self.leaves[id.0]
    }

    pub(crate) fn group(&self, id: GroupId) -> &Group {
        &self.groups[id.0]
    }

    fn group_mut(&mut self, id: GroupId) -> &mut Group {
        &mut self.groups[id.0]
    }

    #[cfg(test)]
    pub(crate) fn root_group(&self) -> &Group {
        self.group(self.root)
    }

    pub(crate) fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    pub(crate) fn leaves(&self) -> impl Iterator<Item = &Leaf> {
        self.leaves.iter()
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Append a new leaf under the root and make it the root's most recent leaf.
    pub(crate) fn append_leaf(&mut self, op: Combinator, leaf: Leaf) -> LeafId {
        let id = LeafId(self.leaves.len());
        self.leaves.push(leaf);

        let root = self.root;
        let group = self.group_mut(root);
        group.children.push((Self::edge(&group.children, op), Node::Leaf(id)));
        group.most_recent = Some(id);

        id
    }

    /// Move `other` into this arena and append its root as one subtree of
    /// this root. Returns the injected root's most recent leaf.
    pub(crate) fn inject(&mut self, op: Combinator, other: Self) -> Option<LeafId> {
        let leaf_offset = self.leaves.len();
        let group_offset = self.groups.len();
        let shift_leaf = |id: LeafId| LeafId(id.0 + leaf_offset);
        let shift_group = |id: GroupId| GroupId(id.0 + group_offset);

        let Self {
            leaves,
            groups,
            root,
        } = other;

        self.leaves.extend(leaves);
        self.groups.extend(groups.into_iter().map(|group| Group {
            children: group
                .children
                .into_iter()
                .map(|(edge, node)| {
                    let node = match node {
                        Node::Leaf(id) => Node::Leaf(shift_leaf(id)),
                        Node::Group(id) => Node::Group(shift_group(id)),
                    };
                    (edge, node)
                })
                .collect(),
            negate_all: group.negate_all,
            most_recent: group.most_recent.map(shift_leaf),
        }));

        let injected = shift_group(root);
        let root = self.root;
        let group = self.group_mut(root);
        group
            .children
            .push((Self::edge(&group.children, op), Node::Group(injected)));

        self.group(injected).most_recent
    }

    /// Re-parent every root child under one new inner group, carrying the
    /// root's negation flag down with them.
    pub(crate) fn connect(&mut self) {
        let inner = GroupId(self.groups.len());
        let root = self.root;
        let group = self.group_mut(root);

        let moved = Group {
            children: std::mem::take(&mut group.children),
            negate_all: std::mem::replace(&mut group.negate_all, false),
            most_recent: None,
        };
        group.children.push((Combinator::Blank, Node::Group(inner)));

        self.groups.push(moved);
    }

    /// Negate the whole root group.
    pub(crate) fn negate_all(&mut self) {
        let root = self.root;
        self.group_mut(root).negate_all = true;
    }

    // The first child of a group never carries a combinator.
    const fn edge(children: &[(Combinator, Node)], op: Combinator) -> Combinator {
        if children.is_empty() {
            Combinator::Blank
        } else {
            op
        }
    }
}
