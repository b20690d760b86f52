use crate::edge::node::EdgeIx;
use crate::edge::{EdgeId, EdgeNode};
use crate::tree::HorizonTree;

use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// A borrowed view of one [`EdgeNode`] within its tree.
///
/// Handles are cheap to copy and dereference to the underlying node,
/// so attributes are read directly (`edge.metadata.length`), while
/// topology is walked through [`Edge::parent`] and [`Edge::children`].
#[derive(Clone, Copy)]
pub struct Edge<'a> {
    tree: &'a HorizonTree,
    index: EdgeIx,
}

impl<'a> Edge<'a> {
    #[inline]
    pub(crate) fn new(tree: &'a HorizonTree, index: EdgeIx) -> Self {
        Self { tree, index }
    }

    #[inline]
    pub(crate) fn index(&self) -> EdgeIx {
        self.index
    }

    /// The tree this edge belongs to.
    #[inline]
    pub fn tree(&self) -> &'a HorizonTree {
        self.tree
    }

    #[inline]
    pub fn node(&self) -> &'a EdgeNode {
        self.tree.node(self.index)
    }

    /// The edge leading onto this one, `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<Edge<'a>> {
        self.node().parent.map(|index| Edge::new(self.tree, index))
    }

    /// Every edge reachable immediately after this one, in input order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = Edge<'a>> + 'a {
        let tree = self.tree;
        self.node()
            .children
            .iter()
            .map(move |index| Edge::new(tree, *index))
    }

    /// The children continuing the most probable path.
    pub fn mpp_children(&self) -> impl DoubleEndedIterator<Item = Edge<'a>> + 'a {
        self.children().filter(|child| child.is_mpp())
    }

    /// Walks the parent back-edges up to, and including, the root.
    pub fn ancestors(&self) -> impl Iterator<Item = Edge<'a>> + 'a {
        std::iter::successors(self.parent(), |edge| edge.parent())
    }

    /// Number of edges between this one and the root.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// All most probable paths beginning at this edge.
    ///
    /// See [`HorizonTree::mpp`] for the traversal rules.
    pub fn mpp(&self) -> Vec<Vec<Edge<'a>>> {
        self.tree.mpp_at(self.index)
    }
}

impl Deref for Edge<'_> {
    type Target = EdgeNode;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.node()
    }
}

impl Debug for Edge<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Topology is printed as ids, walking it would print the whole tree.
        f.debug_struct("Edge")
            .field("id", &self.id)
            .field("level", &self.level)
            .field("probability", &self.probability)
            .field("parent", &self.parent().map(|parent| parent.id))
            .field(
                "children",
                &self.children().map(|child| child.id).collect::<Vec<EdgeId>>(),
            )
            .finish()
    }
}

/// Two edges are equal when their attributes match, their parents share
/// an id, and their subtrees are pairwise equal. Ancestors are never
/// compared beyond the parent id.
impl<'b> PartialEq<Edge<'b>> for Edge<'_> {
    fn eq(&self, other: &Edge<'b>) -> bool {
        if self.parent().map(|parent| parent.id) != other.parent().map(|parent| parent.id) {
            return false;
        }

        let mut stack = vec![(*self, *other)];
        while let Some((left, right)) = stack.pop() {
            if !left.same_attributes(&right) || left.child_count() != right.child_count() {
                return false;
            }

            stack.extend(left.children().zip(right.children()));
        }

        true
    }
}

impl Hash for Edge<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.level.hash(state);
        self.child_count().hash(state);
    }
}
