use crate::edge::{Edge, EdgeId};
use crate::error::HorizonError;
use crate::position::GraphPosition;
use crate::tree::HorizonTree;

use geo::{Distance, Haversine, InterpolatableLine, LineString, Point};
use itertools::Itertools;
use serde::Serialize;

/// A most probable path expressed from the vehicle's point of view.
///
/// `length` is the distance, in meters, still ahead of the vehicle: the
/// travelled share of the first edge is already deducted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphPath {
    pub edges: Vec<EdgeId>,
    pub percent_along_begin: f64,
    pub percent_along_end: f64,
    pub length: f64,
}

impl GraphPath {
    pub(crate) fn from_edges(edges: &[Edge<'_>], percent_along_begin: f64) -> Self {
        let total = edges.iter().map(|edge| edge.metadata.length).sum::<f64>();
        let travelled = edges
            .first()
            .map_or(0.0, |edge| edge.metadata.length * percent_along_begin);

        Self {
            edges: edges.iter().map(|edge| edge.id).collect(),
            percent_along_begin,
            percent_along_end: 1.0,
            length: total - travelled,
        }
    }

    /// The joined geometry of every edge on the path.
    ///
    /// Returns `None` if any edge on the path carries no geometry. The
    /// shape covers whole edges, it is not clipped at `percent_along_begin`.
    pub fn shape(&self, tree: &HorizonTree) -> Option<LineString<f64>> {
        let shapes = self
            .edges
            .iter()
            .map(|id| tree.edge_shape(*id))
            .collect::<Option<Vec<_>>>()?;

        Some(
            shapes
                .into_iter()
                .flat_map(|shape| shape.coords().copied())
                .dedup()
                .collect::<LineString<f64>>(),
        )
    }
}

impl HorizonTree {
    /// Every most probable path from the vehicle's position, measured
    /// from where the vehicle currently is.
    pub fn paths_ahead(&self, position: &GraphPosition) -> Result<Vec<GraphPath>, HorizonError> {
        Ok(self
            .mpp_from(position)?
            .iter()
            .map(|path| GraphPath::from_edges(path, position.percent_along()))
            .collect())
    }

    /// The edges of the most probable path that begin within `distance`
    /// meters ahead of the vehicle. The current edge is always included.
    ///
    /// When the tree ties between several tips, the first path is used.
    pub fn upcoming(
        &self,
        position: &GraphPosition,
        distance: f64,
    ) -> Result<Vec<Edge<'_>>, HorizonError> {
        let current = self.current(position)?;
        let Some(path) = current.mpp().into_iter().next() else {
            return Ok(Vec::new());
        };

        let mut offset = -current.metadata.length * position.percent_along();
        let mut upcoming = Vec::with_capacity(path.len());

        for edge in path {
            if !upcoming.is_empty() && offset >= distance {
                break;
            }

            offset += edge.metadata.length;
            upcoming.push(edge);
        }

        Ok(upcoming)
    }

    /// The geometry of an edge, if one was supplied.
    #[inline]
    pub fn edge_shape(&self, id: EdgeId) -> Option<&LineString<f64>> {
        self.get(id)
            .and_then(|edge| edge.node().metadata.geometry.as_ref())
    }

    /// Interpolates the position along its edge's geometry.
    ///
    /// Distances along the shape are measured on the great-circle,
    /// so the fraction matches the share of the edge's length.
    pub fn locate(&self, position: &GraphPosition) -> Option<Point<f64>> {
        let shape = self.edge_shape(position.edge_id())?;
        interpolate(shape, position.percent_along())
    }
}

fn interpolate(shape: &LineString<f64>, fraction: f64) -> Option<Point<f64>> {
    let lengths = shape
        .lines()
        .map(|line| Haversine.distance(line.start_point(), line.end_point()))
        .collect::<Vec<_>>();

    let total = lengths.iter().sum::<f64>();
    if total <= 0.0 {
        return shape.points().next();
    }

    let mut remaining = fraction * total;
    for (line, length) in shape.lines().zip(lengths) {
        if remaining <= length {
            let ratio = if length > 0.0 { remaining / length } else { 0.0 };
            return Some(line.point_at_ratio_from_start(&Haversine, ratio));
        }

        remaining -= length;
    }

    shape.points().last()
}
