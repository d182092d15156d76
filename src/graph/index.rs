//! 邻接索引
//!
//! 顶点到出边 / 入边的内存索引，随加边增量维护

use crate::graph::edge::Edge;
use crate::graph::vertex::Vertex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 边 ID（边在图中插入顺序的位置）
///
/// 图只增不删，所以 ID 一经分配永不失效。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// 邻接索引
///
/// 无向边会被对称登记：两个端点都记为起点，也都记为终点。
/// 这样最短路径算法只需沿出边行走，无需区分边的方向。
#[derive(Debug, Clone)]
pub struct AdjacencyIndex<V> {
    /// 顶点到出边的映射
    outgoing: HashMap<V, Vec<EdgeId>>,
    /// 顶点到入边的映射
    incoming: HashMap<V, Vec<EdgeId>>,
}

impl<V: Vertex> AdjacencyIndex<V> {
    /// 创建新索引
    pub fn new() -> Self {
        Self {
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        }
    }

    /// 登记边；调用方保证同一条边只登记一次
    pub fn add_edge(&mut self, edge_id: EdgeId, edge: &Edge<V>) {
        let src = edge.source();
        let dst = edge.destination();

        // 出边索引
        self.outgoing
            .entry(src.clone())
            .or_insert_with(Vec::new)
            .push(edge_id);

        // 入边索引
        self.incoming
            .entry(dst.clone())
            .or_insert_with(Vec::new)
            .push(edge_id);

        // 可以反向通行的边再登记一遍（自环除外）
        if edge.starts_at(dst) && src != dst {
            self.outgoing
                .entry(dst.clone())
                .or_insert_with(Vec::new)
                .push(edge_id);
            self.incoming
                .entry(src.clone())
                .or_insert_with(Vec::new)
                .push(edge_id);
        }
    }

    /// 获取顶点的出边
    pub fn get_outgoing(&self, vertex: &V) -> &[EdgeId] {
        self.outgoing
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// 获取顶点的入边
    pub fn get_incoming(&self, vertex: &V) -> &[EdgeId] {
        self.incoming
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// 获取顶点的出度
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.get_outgoing(vertex).len()
    }

    /// 获取顶点的入度
    pub fn in_degree(&self, vertex: &V) -> usize {
        self.get_incoming(vertex).len()
    }
}

impl<V: Vertex> Default for AdjacencyIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}
