//! 图核心模块
//!
//! 定义顶点、边、邻接索引和图的核心数据结构

mod edge;
#[allow(clippy::module_inception)]
mod graph;
mod index;
mod vertex;

pub use edge::{Edge, EdgeRecord, Orientation, DEFAULT_WEIGHT};
pub use graph::{
    AdjacencyGraph, AnyOrientation, DirectedGraph, Graph, GraphKind, OrientationPolicy,
    UndirectedGraph, UndirectedOnly,
};
pub use index::{AdjacencyIndex, EdgeId};
pub use vertex::Vertex;
