//! 最短路径算法
//!
//! Dijkstra 算法，在邻接索引上运行，到达终点即提前结束

use crate::graph::{AdjacencyGraph, Edge, Graph, OrientationPolicy, Vertex};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 未知距离
const INFINITY: u64 = u64::MAX;

/// 路径结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult<V> {
    /// 路径上的顶点序列
    pub vertices: Vec<V>,
    /// 路径上的边序列
    pub edges: Vec<Edge<V>>,
    /// 路径长度（边数）
    pub length: usize,
    /// 路径总权重
    pub total_weight: u64,
}

impl<V> PathResult<V> {
    fn with_start(start: V) -> Self {
        Self {
            vertices: vec![start],
            edges: Vec::new(),
            length: 0,
            total_weight: 0,
        }
    }
}

/// 路径查找器
///
/// 选取最小距离顶点用线性扫描，复杂度 O(V² + E)，适合内存中的小图。
pub struct PathFinder<'g, V, P> {
    graph: &'g AdjacencyGraph<V, P>,
}

impl<'g, V: Vertex, P: OrientationPolicy> PathFinder<'g, V, P> {
    /// 创建路径查找器
    pub fn new(graph: &'g AdjacencyGraph<V, P>) -> Self {
        Self { graph }
    }

    /// 最短路径上的边序列，没有路径时为空
    pub fn get_path(&self, source: &V, destination: &V) -> Vec<Edge<V>> {
        if source == destination {
            return Vec::new();
        }
        self.shortest_path(source, destination)
            .map(|path| path.edges)
            .unwrap_or_default()
    }

    /// 计算最短路径
    ///
    /// 任一顶点不在图中或终点不可达时返回 `None`。
    pub fn shortest_path(&self, source: &V, destination: &V) -> Option<PathResult<V>> {
        let source = self.graph.vertex_ref(source)?;
        let destination = self.graph.vertex_ref(destination)?;

        if source == destination {
            return Some(PathResult::with_start(source.clone()));
        }

        tracing::debug!(
            source = ?source,
            destination = ?destination,
            vertices = self.graph.vertex_count(),
            "计算最短路径"
        );

        let previous = self.dijkstra(source, destination);
        let path = self.reconstruct_path(source, destination, &previous);

        match &path {
            Some(p) => tracing::debug!(length = p.length, total_weight = p.total_weight, "找到路径"),
            None => tracing::debug!("终点不可达"),
        }

        path
    }

    /// 判断两点是否连通
    pub fn is_reachable(&self, source: &V, destination: &V) -> bool {
        self.shortest_path(source, destination).is_some()
    }

    /// 运行 Dijkstra，返回前驱表
    fn dijkstra(&self, source: &'g V, destination: &'g V) -> HashMap<&'g V, &'g V> {
        let graph = self.graph;
        let mut distances: HashMap<&'g V, u64> = HashMap::new();
        let mut previous: HashMap<&'g V, &'g V> = HashMap::new();
        let mut unvisited: IndexSet<&'g V> = graph.vertices().collect();

        distances.insert(source, 0);

        loop {
            let Some((current, distance)) = closest_unvisited(&unvisited, &distances) else {
                break;
            };
            // 剩余顶点都不可达
            if distance == INFINITY || current == destination {
                break;
            }
            unvisited.shift_remove(current);

            for neighbour in self.unvisited_neighbours(current, &unvisited) {
                let Some(edge) = graph.shortest_edge_between(current, neighbour) else {
                    continue;
                };
                let alternative = distance + u64::from(edge.weight());
                if alternative < distances.get(neighbour).copied().unwrap_or(INFINITY) {
                    distances.insert(neighbour, alternative);
                    previous.insert(neighbour, current);
                }
            }
        }

        tracing::trace!(distances = ?distances, "Dijkstra 结束");
        previous
    }

    /// 沿出边可达且尚未访问的邻居（去重）
    fn unvisited_neighbours(&self, vertex: &'g V, unvisited: &IndexSet<&'g V>) -> IndexSet<&'g V> {
        self.graph
            .outgoing_edges(vertex)
            .filter_map(|e| e.other_vertex(vertex).ok())
            .filter(|v| unvisited.contains(v))
            .collect()
    }

    /// 重构路径
    fn reconstruct_path(
        &self,
        source: &'g V,
        destination: &'g V,
        previous: &HashMap<&'g V, &'g V>,
    ) -> Option<PathResult<V>> {
        let mut current = destination;
        let mut vertices = vec![destination];

        while let Some(&prev) = previous.get(current) {
            vertices.push(prev);
            current = prev;
        }

        if current != source {
            return None;
        }
        vertices.reverse();

        let edges = vertices
            .windows(2)
            .map(|pair| self.graph.shortest_edge_between(pair[0], pair[1]).cloned())
            .collect::<Option<Vec<_>>>()?;
        let total_weight = edges.iter().map(|e| u64::from(e.weight())).sum();

        Some(PathResult {
            vertices: vertices.into_iter().cloned().collect(),
            length: edges.len(),
            edges,
            total_weight,
        })
    }
}

/// 线性扫描未访问顶点中距离最小的一个（相同距离取先出现者）
fn closest_unvisited<'g, V: Vertex>(
    unvisited: &IndexSet<&'g V>,
    distances: &HashMap<&'g V, u64>,
) -> Option<(&'g V, u64)> {
    unvisited
        .iter()
        .map(|&v| (v, distances.get(v).copied().unwrap_or(INFINITY)))
        .min_by_key(|&(_, d)| d)
}
