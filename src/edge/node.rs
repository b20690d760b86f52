use crate::edge::EdgeMetadata;
use smallvec::SmallVec;

/// Identifier of an edge, stable across horizon updates that
/// do not reset the tree.
pub type EdgeId = i64;

/// Divergence of an edge from the most probable path.
pub type Level = u8;

/// Arena index of an edge within its [`HorizonTree`](crate::HorizonTree).
pub(crate) type EdgeIx = usize;

/// The level held by every edge on the most probable path.
pub const MPP_LEVEL: Level = 0;

/// A directed road segment within the horizon tree.
///
/// Topology is held as arena indices into the owning tree, so a node
/// is only navigable through an [`Edge`](crate::Edge) handle. The
/// parent index is a back-edge and never implies ownership.
#[derive(Debug, Clone)]
pub struct EdgeNode {
    pub id: EdgeId,
    pub level: Level,
    /// Likelihood of transitioning onto this edge from its parent.
    pub probability: f64,
    pub metadata: EdgeMetadata,

    pub(crate) parent: Option<EdgeIx>,
    pub(crate) children: SmallVec<[EdgeIx; 4]>,
}

impl EdgeNode {
    pub(crate) fn new(id: EdgeId, level: Level, probability: f64, metadata: EdgeMetadata) -> Self {
        Self {
            id,
            level,
            probability,
            metadata,
            parent: None,
            children: SmallVec::new(),
        }
    }

    /// Whether the edge lies on the most probable path.
    #[inline]
    pub fn is_mpp(&self) -> bool {
        self.level == MPP_LEVEL
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Compares every scalar attribute, ignoring topology.
    #[inline]
    pub(crate) fn same_attributes(&self, other: &EdgeNode) -> bool {
        self.id == other.id
            && self.level == other.level
            && self.probability == other.probability
            && self.metadata == other.metadata
    }
}
