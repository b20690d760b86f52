//! Publication of horizon snapshots to concurrent readers.
//!
//! Trees are built outside the lock and swapped in as a whole, so a
//! reader holds either the previous or the next snapshot, never a
//! partially assembled one. Reads hand out an [`Arc`] that stays valid
//! after later swaps.


use crate::edge::Edge;
use crate::error::HorizonError;
use crate::position::{GraphPosition, HorizonPosition, UpdateKind};
use crate::tree::{BuildOptions, GraphPath, HorizonTree, HorizonUpdate, MppPath, TreeBuilder};

use log::debug;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Published {
    tree: Option<Arc<HorizonTree>>,
    position: Option<HorizonPosition>,
}

/// Holds the latest horizon and vehicle position.
#[derive(Debug, Default)]
pub struct HorizonStore {
    options: BuildOptions,
    state: RwLock<Published>,
}

impl HorizonStore {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            state: RwLock::new(Published::default()),
        }
    }

    // The guarded value is a pair of references replaced in a single
    // assignment, a panicking writer cannot leave it half-written.
    fn read(&self) -> RwLockReadGuard<'_, Published> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Published> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the published tree, returning the new snapshot.
    ///
    /// Positions refer to edges of the tree they were recorded against, so
    /// the recorded position is cleared. [`HorizonStore::view`] fails with
    /// [`HorizonError::NoHorizon`] until the next [`HorizonStore::apply`].
    pub fn publish(&self, tree: HorizonTree) -> Arc<HorizonTree> {
        let tree = Arc::new(tree);

        let mut state = self.write();
        state.tree = Some(Arc::clone(&tree));
        state.position = None;
        drop(state);

        debug!("Published {tree:?}");
        tree
    }

    /// The latest published tree, if any.
    pub fn snapshot(&self) -> Option<Arc<HorizonTree>> {
        self.read().tree.clone()
    }

    /// The latest recorded position, if any.
    pub fn position(&self) -> Option<HorizonPosition> {
        self.read().position
    }

    /// Applies an update from the ingestion layer.
    ///
    /// An [`UpdateKind::Initial`] update must carry edges; they are built into
    /// a tree which replaces the previous one together with the position.
    /// An [`UpdateKind::Update`] only moves the position, unless it also
    /// carries edges, in which case the tree is replaced as well.
    pub fn apply(&self, update: HorizonUpdate) -> crate::Result<Arc<HorizonTree>> {
        let HorizonUpdate {
            kind,
            position,
            edges,
        } = update;

        let tree = match kind {
            UpdateKind::Update if edges.is_empty() => None,
            _ => Some(Arc::new(
                TreeBuilder::new(self.options).extend(edges).build()?,
            )),
        };

        let position = HorizonPosition { position, kind };
        let mut state = self.write();

        let tree = match tree {
            Some(tree) => {
                state.tree = Some(Arc::clone(&tree));
                tree
            }
            None => state.tree.clone().ok_or(HorizonError::NoHorizon)?,
        };

        state.position = Some(position);
        drop(state);

        debug!("Applied {kind} update at edge {}", position.position.edge_id());
        Ok(tree)
    }

    /// A consistent pairing of the latest tree and position.
    pub fn view(&self) -> Result<HorizonView, HorizonError> {
        let state = self.read();
        match (&state.tree, state.position) {
            (Some(tree), Some(position)) => Ok(HorizonView {
                tree: Arc::clone(tree),
                position,
            }),
            _ => Err(HorizonError::NoHorizon),
        }
    }
}

/// A tree snapshot paired with the position recorded alongside it.
#[derive(Debug, Clone)]
pub struct HorizonView {
    tree: Arc<HorizonTree>,
    position: HorizonPosition,
}

impl HorizonView {
    #[inline]
    pub fn tree(&self) -> &HorizonTree {
        &self.tree
    }

    #[inline]
    pub fn position(&self) -> &GraphPosition {
        &self.position.position
    }

    #[inline]
    pub fn kind(&self) -> UpdateKind {
        self.position.kind
    }

    pub fn current(&self) -> Result<Edge<'_>, HorizonError> {
        self.tree.current(self.position())
    }

    pub fn mpp(&self) -> Result<Vec<MppPath<'_>>, HorizonError> {
        self.tree.mpp_from(self.position())
    }

    pub fn paths_ahead(&self) -> Result<Vec<GraphPath>, HorizonError> {
        self.tree.paths_ahead(self.position())
    }

    pub fn upcoming(&self, distance: f64) -> Result<Vec<Edge<'_>>, HorizonError> {
        self.tree.upcoming(self.position(), distance)
    }
}
