use crate::edge::node::EdgeIx;
use crate::edge::{Edge, EdgeId, EdgeNode};
use crate::error::BuildError;
use crate::tree::{RawEdge, TreeBuilder};

use indexmap::IndexMap;
use rustc_hash::FxHasher;
use std::fmt::{Debug, Formatter};
use std::hash::BuildHasherDefault;

pub(crate) type Arena = IndexMap<EdgeId, EdgeNode, BuildHasherDefault<FxHasher>>;

/// An immutable snapshot of the road network ahead of the vehicle.
///
/// Edges live in an insertion-ordered arena keyed by their id, and refer
/// to one another by arena index. The tree is never edited once built;
/// a new horizon replaces the whole structure.
///
/// ### Example
///
/// ```rust
/// use horizon::{GraphPosition, HorizonTree, RawEdge};
///
/// let tree = HorizonTree::from_records([
///     RawEdge::new(1, None, 0),
///     RawEdge::new(2, Some(1), 0).with_probability(0.8),
///     RawEdge::new(3, Some(1), 1).with_probability(0.2),
/// ])?;
///
/// let current = tree.current(&GraphPosition::at_start(2))?;
/// assert_eq!(current.parent().map(|edge| edge.id), Some(1));
/// # Ok::<(), horizon::Error>(())
/// ```
#[derive(Clone)]
pub struct HorizonTree {
    pub(crate) arena: Arena,
    pub(crate) root: EdgeIx,
}

impl Debug for HorizonTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HorizonTree with Edges: {} (root: {})",
            self.arena.len(),
            self.root().id
        )
    }
}

impl PartialEq for HorizonTree {
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root()
    }
}

impl HorizonTree {
    /// Builds a tree from raw edges using the default [`BuildOptions`](crate::BuildOptions).
    pub fn from_records(records: impl IntoIterator<Item = RawEdge>) -> Result<Self, BuildError> {
        TreeBuilder::default().extend(records).build()
    }

    #[inline]
    pub(crate) fn node(&self, index: EdgeIx) -> &EdgeNode {
        &self.arena[index]
    }

    #[inline]
    pub fn root(&self) -> Edge<'_> {
        Edge::new(self, self.root)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// A built tree always holds its root, so this is only `false`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Looks up any edge by id, regardless of its level.
    #[inline]
    pub fn get(&self, id: EdgeId) -> Option<Edge<'_>> {
        self.arena
            .get_index_of(&id)
            .map(|index| Edge::new(self, index))
    }

    /// Every edge, in the order they were supplied.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = Edge<'_>> + '_ {
        (0..self.arena.len()).map(move |index| Edge::new(self, index))
    }
}
