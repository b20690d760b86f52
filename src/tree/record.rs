//! Flat, serialisable records handed over by the ingestion layer.
//!
//! A horizon arrives as a batch of [`RawEdge`]s, each naming its parent by
//! id. The [`TreeBuilder`](crate::TreeBuilder) wires those ids into the
//! arena-backed [`HorizonTree`](crate::HorizonTree).

use crate::edge::{EdgeId, EdgeMetadata, Level, RoadClass, RoadName};
use crate::error::BuildError;
use crate::position::{GraphPosition, UpdateKind};

use geo::LineString;
use serde::{Deserialize, Serialize};
use std::io::Read;
use wkt::TryFromWkt;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMetadata {
    pub heading: f64,
    pub length: f64,
    pub speed: f64,
    pub speed_limit: Option<f64>,
    pub lane_count: Option<u8>,
    pub mean_elevation: Option<f64>,
    pub curvature: u8,

    pub is_ramp: bool,
    pub is_motorway: bool,
    pub is_bridge: bool,
    pub is_tunnel: bool,
    pub is_toll: bool,
    pub is_one_way: bool,
    pub is_urban: bool,
    pub is_right_hand_traffic: bool,

    pub road_class: RoadClass,
    pub names: Vec<RoadName>,
    pub country_code: Option<String>,
    pub state_code: Option<String>,

    /// Well-Known-Text `LINESTRING`.
    pub geometry: Option<String>,
}

impl RawMetadata {
    pub(crate) fn into_metadata(self, edge: EdgeId) -> Result<EdgeMetadata, BuildError> {
        let geometry = self
            .geometry
            .map(|text| {
                LineString::<f64>::try_from_wkt_str(&text).map_err(|err| {
                    BuildError::InvalidGeometry {
                        edge,
                        reason: err.to_string(),
                    }
                })
            })
            .transpose()?;

        Ok(EdgeMetadata {
            heading: self.heading,
            length: self.length,
            speed: self.speed,
            speed_limit: self.speed_limit,
            lane_count: self.lane_count,
            mean_elevation: self.mean_elevation,
            curvature: self.curvature,
            is_ramp: self.is_ramp,
            is_motorway: self.is_motorway,
            is_bridge: self.is_bridge,
            is_tunnel: self.is_tunnel,
            is_toll: self.is_toll,
            is_one_way: self.is_one_way,
            is_urban: self.is_urban,
            is_right_hand_traffic: self.is_right_hand_traffic,
            road_class: self.road_class,
            names: self.names,
            country_code: self.country_code,
            state_code: self.state_code,
            geometry,
        })
    }
}

fn unit_probability() -> f64 {
    1.0
}

/// One edge of an incoming horizon, before it is wired into a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEdge {
    pub id: EdgeId,
    /// `None` marks the root.
    #[serde(default)]
    pub parent: Option<EdgeId>,
    #[serde(default)]
    pub level: Level,
    #[serde(default = "unit_probability")]
    pub probability: f64,
    #[serde(default)]
    pub metadata: RawMetadata,
}

impl RawEdge {
    pub fn new(id: EdgeId, parent: Option<EdgeId>, level: Level) -> Self {
        Self {
            id,
            parent,
            level,
            probability: unit_probability(),
            metadata: RawMetadata::default(),
        }
    }

    pub fn with_probability(self, probability: f64) -> Self {
        Self {
            probability,
            ..self
        }
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.metadata.length = length;
        self
    }

    pub fn with_geometry(mut self, wkt: impl Into<String>) -> Self {
        self.metadata.geometry = Some(wkt.into());
        self
    }

    pub fn with_metadata(self, metadata: RawMetadata) -> Self {
        Self { metadata, ..self }
    }
}

/// A complete update as emitted by the ingestion layer: the vehicle's
/// position, and for [`UpdateKind::Initial`] the edges of the new tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HorizonUpdate {
    pub kind: UpdateKind,
    pub position: GraphPosition,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
}

impl HorizonUpdate {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}
