use crate::edge::EdgeId;
use crate::error::HorizonError;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Where on the tree the vehicle currently is: an edge, and the
/// fraction of that edge already travelled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PositionRecord")]
pub struct GraphPosition {
    edge_id: EdgeId,
    percent_along: f64,
}

impl GraphPosition {
    /// Creates a position, rejecting a `percent_along` outside of `[0, 1)`.
    pub fn new(edge_id: EdgeId, percent_along: f64) -> Result<Self, HorizonError> {
        if !(0.0..1.0).contains(&percent_along) {
            return Err(HorizonError::InvalidPosition(percent_along));
        }

        Ok(Self {
            edge_id,
            percent_along,
        })
    }

    /// The position at the very beginning of an edge.
    pub const fn at_start(edge_id: EdgeId) -> Self {
        Self {
            edge_id,
            percent_along: 0.0,
        }
    }

    #[inline]
    pub fn edge_id(&self) -> EdgeId {
        self.edge_id
    }

    #[inline]
    pub fn percent_along(&self) -> f64 {
        self.percent_along
    }
}

#[derive(Deserialize)]
struct PositionRecord {
    edge_id: EdgeId,
    #[serde(default)]
    percent_along: f64,
}

impl TryFrom<PositionRecord> for GraphPosition {
    type Error = HorizonError;

    fn try_from(record: PositionRecord) -> Result<Self, Self::Error> {
        GraphPosition::new(record.edge_id, record.percent_along)
    }
}

/// Whether a position arrived together with a freshly built tree.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    /// A new tree replaces the previous one wholesale.
    Initial,
    /// The vehicle moved along the tree already published.
    Update,
}

/// A position together with the kind of update that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonPosition {
    pub position: GraphPosition,
    pub kind: UpdateKind,
}
