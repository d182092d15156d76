//! SimpleGraph - 带权图库
//!
//! 顶点类型由调用方自定义，支持：
//! - 有向图与无向图（有向图中可混合无向边）
//! - Dijkstra 最短路径查询
//! - 对每个顶点应用自定义函数
//! - 读写锁包装的线程安全图

pub mod algorithm;
pub mod error;
pub mod factory;
pub mod graph;
pub mod import;
pub mod sync;

// 重导出常用类型
pub use algorithm::{PathFinder, PathResult};
pub use error::{Error, Result};
pub use factory::{
    graph_factory, synchronized_graph_factory, GraphFactory, SynchronizedGraphFactory,
    UnsynchronizedGraphFactory,
};
pub use graph::{
    AdjacencyGraph, DirectedGraph, Edge, EdgeId, Graph, GraphKind, Orientation, UndirectedGraph,
    Vertex,
};
pub use import::GraphDocument;
pub use sync::SynchronizedGraph;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
