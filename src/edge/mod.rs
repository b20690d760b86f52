//! Edges of the horizon tree: the arena-held [`EdgeNode`] record,
//! the borrowed [`Edge`] handle used to navigate it, and the road
//! attributes attached to every edge.

#[doc(hidden)]
pub mod handle;
#[doc(hidden)]
pub mod metadata;
#[doc(hidden)]
pub mod name;
#[doc(hidden)]
pub mod node;
#[doc(hidden)]
pub mod road_class;
#[cfg(test)]
mod test;

#[doc(inline)]
pub use handle::Edge;
#[doc(inline)]
pub use metadata::EdgeMetadata;
#[doc(inline)]
pub use name::RoadName;
#[doc(inline)]
pub use node::{EdgeId, EdgeNode, Level, MPP_LEVEL};
#[doc(inline)]
pub use road_class::RoadClass;
