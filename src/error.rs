use crate::edge::EdgeId;
use thiserror::Error;

/// Failures of queries against a published horizon.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HorizonError {
    /// The position and the tree are mutually stale. Callers should wait
    /// for the next horizon or position update rather than retry.
    #[error("edge {0} is not on the most probable path")]
    EdgeNotInMpp(EdgeId),

    #[error("percent along {0} is outside of [0, 1)")]
    InvalidPosition(f64),

    #[error("no horizon and position have been published")]
    NoHorizon,
}

/// Failures while assembling a tree from a batch of raw edges.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("no edges were given")]
    Empty,

    #[error("no root edge, every edge has a parent")]
    NoRoot,

    #[error("edges {0} and {1} both have no parent, a tree has exactly one root")]
    MultipleRoots(EdgeId, EdgeId),

    #[error("edge {0} was given more than once")]
    DuplicateEdge(EdgeId),

    #[error("edge {edge} refers to parent {parent}, which was not given")]
    MissingParent { edge: EdgeId, parent: EdgeId },

    #[error("{0} edges cannot be reached from the root")]
    Unreachable(usize),

    #[error("edge {edge} is on the most probable path but its parent {parent} is not")]
    DetachedMpp { edge: EdgeId, parent: EdgeId },

    #[error("edge {edge} has invalid geometry: {reason}")]
    InvalidGeometry { edge: EdgeId, reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Horizon(#[from] HorizonError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("could not decode horizon update: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("could not read horizon update: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
