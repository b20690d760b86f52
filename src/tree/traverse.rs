use crate::edge::node::EdgeIx;
use crate::edge::Edge;
use crate::error::HorizonError;
use crate::position::GraphPosition;
use crate::tree::HorizonTree;

use log::debug;
#[cfg(feature = "tracing")]
use tracing::Level;

/// An ordered chain of edges, from a start edge down to a tip.
pub type MppPath<'a> = Vec<Edge<'a>>;

impl HorizonTree {
    /// Resolves the edge the vehicle is on.
    ///
    /// Only the most probable path lineage is searched: from the root, a
    /// depth-first walk descends into level-0 children alone. An edge that
    /// exists only beneath an alternative branch is reported as
    /// [`HorizonError::EdgeNotInMpp`], there is no fallback to other levels.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), level = Level::DEBUG))]
    pub fn current(&self, position: &GraphPosition) -> Result<Edge<'_>, HorizonError> {
        let target = position.edge_id();
        let mut stack: Vec<EdgeIx> = vec![self.root];

        while let Some(index) = stack.pop() {
            let node = self.node(index);
            if node.id == target {
                return Ok(Edge::new(self, index));
            }

            stack.extend(
                node.children
                    .iter()
                    .copied()
                    .filter(|child| self.node(*child).is_mpp()),
            );
        }

        debug!("Edge {target} not found on the most probable path");
        Err(HorizonError::EdgeNotInMpp(target))
    }

    /// Every most probable path from the root down to a tip.
    ///
    /// A tip is an edge without level-0 children. In the common case the
    /// result holds exactly one path; ties in the tree yield one path per
    /// tip. A root which is not itself on the most probable path yields
    /// no paths at all.
    ///
    /// A start edge with no level-0 children is itself a tip, so it yields
    /// the single path `[start]` even when alternative children hang off it.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), level = Level::DEBUG))]
    pub fn mpp(&self) -> Vec<MppPath<'_>> {
        self.mpp_at(self.root)
    }

    /// Every most probable path starting at the edge the vehicle is on.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), level = Level::DEBUG))]
    pub fn mpp_from(&self, position: &GraphPosition) -> Result<Vec<MppPath<'_>>, HorizonError> {
        self.current(position).map(|edge| edge.mpp())
    }

    /// Every most probable path starting at `start`.
    ///
    /// An edge handle taken from another tree is resolved here by its id;
    /// if this tree has no such edge there are no paths.
    pub fn mpp_from_edge<'a>(&'a self, start: Edge<'_>) -> Vec<MppPath<'a>> {
        if std::ptr::eq(start.tree(), self) {
            return self.mpp_at(start.index());
        }

        match self.arena.get_index_of(&start.id) {
            Some(index) => self.mpp_at(index),
            None => {
                debug!("Edge {} does not belong to this tree", start.id);
                Vec::new()
            }
        }
    }

    pub(crate) fn mpp_at(&self, start: EdgeIx) -> Vec<MppPath<'_>> {
        let origin = Edge::new(self, start);
        if !origin.is_mpp() {
            return Vec::new();
        }

        // Children are pushed in reverse so the first child is explored first,
        // giving paths in the order their branches were supplied.
        let mut stack: Vec<EdgeIx> = origin.mpp_children().rev().map(|e| e.index()).collect();
        if stack.is_empty() {
            return vec![vec![origin]];
        }

        let mut paths = Vec::new();
        while let Some(index) = stack.pop() {
            let edge = Edge::new(self, index);
            let explored = stack.len();

            stack.extend(edge.mpp_children().rev().map(|e| e.index()));
            if stack.len() == explored {
                paths.push(self.backtrack(start, edge));
            }
        }

        debug!("Found {} most probable path(s)", paths.len());
        paths
    }

    /// Follows parent back-edges from `tip` to `start` (inclusive),
    /// returning the chain in travel order.
    fn backtrack<'a>(&'a self, start: EdgeIx, tip: Edge<'a>) -> MppPath<'a> {
        let mut path = vec![tip];
        let mut cursor = tip;

        while cursor.index() != start {
            match cursor.parent() {
                Some(parent) => {
                    path.push(parent);
                    cursor = parent;
                }
                None => break,
            }
        }

        path.reverse();
        path
    }
}
