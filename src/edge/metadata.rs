use crate::edge::{RoadClass, RoadName};
use geo::LineString;

/// Physical and administrative attributes of a single edge.
///
/// Units follow the provider: headings in degrees clockwise from north,
/// lengths and elevations in meters, speeds in meters per second.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeMetadata {
    pub heading: f64,
    pub length: f64,
    /// Mean observed speed along the edge.
    pub speed: f64,
    pub speed_limit: Option<f64>,
    pub lane_count: Option<u8>,
    pub mean_elevation: Option<f64>,
    /// Provider curvature class, `0` being straight.
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

    /// ISO 3166-1 country code.
    pub country_code: Option<String>,
    pub state_code: Option<String>,

    pub geometry: Option<LineString<f64>>,
}

impl EdgeMetadata {
    /// The first shielded name, falling back to the first plain one.
    pub fn primary_name(&self) -> Option<&RoadName> {
        self.names
            .iter()
            .find(|name| name.shielded)
            .or_else(|| self.names.first())
    }
}
