use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Functional class of the road an edge belongs to, as normalised
/// by the ingestion layer.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum RoadClass {
    /// A restricted access major divided highway, normally with 2 or more
    /// running lanes plus emergency hard shoulder. Equivalent to the Freeway, Autobahn, etc..
    Motorway,

    /// The most important roads in a country's system that aren't motorways.
    /// (Need not necessarily be a divided highway.)
    Trunk,

    /// The next most important roads in a country's system.
    /// (Often link larger towns.)
    Primary,

    /// The next most important roads in a country's system.
    /// (Often link towns.)
    Secondary,

    /// The next most important roads in a country's system.
    /// (Often link smaller towns and villages)
    Tertiary,

    /// The least important through roads in a country's system, of a lower
    /// classification than tertiary but serving a purpose other than access
    /// to properties.
    Unclassified,

    /// Roads which serve as access to housing, without function
    /// of connecting settlements.
    Residential,

    /// Service roads, living streets, tracks and anything the provider
    /// could not place in the classes above.
    #[default]
    ServiceOther,
}

impl RoadClass {
    /// Ranks the class by importance, `0` being the most important.
    #[inline]
    pub const fn importance(&self) -> u8 {
        match self {
            RoadClass::Motorway => 0,
            RoadClass::Trunk => 1,
            RoadClass::Primary => 2,
            RoadClass::Secondary => 3,
            RoadClass::Tertiary => 4,
            RoadClass::Unclassified => 5,
            RoadClass::Residential => 6,
            RoadClass::ServiceOther => 7,
        }
    }
}
