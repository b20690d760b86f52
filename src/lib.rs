#![doc = include_str!("../readme.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod edge;
pub mod error;
pub mod position;
pub mod store;
pub mod tree;
pub mod util;

#[doc(inline)]
pub use edge::{Edge, EdgeId, EdgeMetadata, EdgeNode, Level, RoadClass, RoadName, MPP_LEVEL};
#[doc(inline)]
pub use error::{BuildError, Error, HorizonError, Result};
#[doc(inline)]
pub use position::{GraphPosition, HorizonPosition, UpdateKind};
#[doc(inline)]
pub use store::{HorizonStore, HorizonView};
#[doc(inline)]
pub use tree::{
    BuildOptions, GraphPath, HorizonTree, HorizonUpdate, MppPath, RawEdge, RawMetadata,
    TreeBuilder,
};
