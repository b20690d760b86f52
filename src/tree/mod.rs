//! The horizon tree and its two queries: resolving the edge the vehicle
//! is on, and extracting the most probable path(s) ahead of it.

#[doc(hidden)]
pub mod builder;
#[doc(hidden)]
pub mod graph;
#[doc(hidden)]
pub mod path;
#[doc(hidden)]
pub mod record;
#[doc(hidden)]
pub mod traverse;

#[doc(inline)]
pub use builder::{BuildOptions, TreeBuilder};
#[doc(inline)]
pub use graph::HorizonTree;
#[doc(inline)]
pub use path::GraphPath;
#[doc(inline)]
pub use record::{HorizonUpdate, RawEdge, RawMetadata};
#[doc(inline)]
pub use traverse::MppPath;
