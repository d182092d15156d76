//! 图算法模块
//!
//! 包含 Dijkstra 最短路径算法

mod path_finder;

pub use path_finder::{PathFinder, PathResult};
