//! 图数据结构
//!
//! 基于邻接索引的内存图，方向约束由类型参数决定

use super::edge::{Edge, Orientation};
use super::index::{AdjacencyIndex, EdgeId};
use super::vertex::Vertex;
use crate::algorithm::{PathFinder, PathResult};
use crate::error::{Error, Result};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// 图类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// 有向图（可同时包含有向边和无向边）
    #[default]
    Directed,
    /// 无向图（只能包含无向边）
    Undirected,
}

impl GraphKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphKind::Directed => "directed",
            GraphKind::Undirected => "undirected",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 方向策略：决定图接受哪些方向的边
pub trait OrientationPolicy: fmt::Debug + Clone + Default + Send + Sync + 'static {
    /// 对应的图类型
    const KIND: GraphKind;

    /// 是否接受该方向的边
    fn admits(orientation: Orientation) -> bool;
}

/// 有向图策略：接受任意方向的边，无向边等价于一对双向边
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyOrientation;

impl OrientationPolicy for AnyOrientation {
    const KIND: GraphKind = GraphKind::Directed;

    fn admits(_orientation: Orientation) -> bool {
        true
    }
}

/// 无向图策略：只接受无向边
#[derive(Debug, Clone, Copy, Default)]
pub struct UndirectedOnly;

impl OrientationPolicy for UndirectedOnly {
    const KIND: GraphKind = GraphKind::Undirected;

    fn admits(orientation: Orientation) -> bool {
        orientation == Orientation::Undirected
    }
}

/// 图的基本能力
///
/// 核心图类型和加锁包装都实现这个 trait，工厂据此统一返回。
pub trait Graph {
    /// 顶点类型
    type Vertex: Vertex;

    /// 图类型
    fn kind(&self) -> GraphKind;

    /// 添加顶点，返回是否为新顶点
    fn add_vertex(&mut self, vertex: Self::Vertex) -> bool;

    /// 添加边，返回是否为新边
    ///
    /// 边的两个端点会被隐式加入顶点集。校验失败时图保持不变。
    fn add_edge(&mut self, edge: Edge<Self::Vertex>) -> Result<bool>;

    /// 最短路径上的边序列
    ///
    /// 起点等于终点、顶点不在图中或不可达时返回空序列。
    fn get_path(&self, source: &Self::Vertex, destination: &Self::Vertex)
        -> Vec<Edge<Self::Vertex>>;

    /// 最短路径的完整结果（顶点、边、总权重），不可达时为 `None`
    fn shortest_path(
        &self,
        source: &Self::Vertex,
        destination: &Self::Vertex,
    ) -> Option<PathResult<Self::Vertex>>;

    /// 对每个顶点应用 `f`，每个顶点产生一个结果
    fn traverse<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&Self::Vertex) -> R;

    /// 获取顶点数量
    fn vertex_count(&self) -> usize;

    /// 获取边数量
    fn edge_count(&self) -> usize;

    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    fn contains_edge(&self, edge: &Edge<Self::Vertex>) -> bool;

    /// 判断两点是否连通
    fn is_reachable(&self, source: &Self::Vertex, destination: &Self::Vertex) -> bool {
        self.shortest_path(source, destination).is_some()
    }
}

/// 邻接索引图
///
/// 顶点集与边集保持插入顺序，遍历顺序因此是确定的，但调用方不应依赖它。
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, P = AnyOrientation> {
    /// 顶点集
    vertices: IndexSet<V>,
    /// 边集（位置即 EdgeId）
    edges: IndexSet<Edge<V>>,
    /// 出边 / 入边索引
    index: AdjacencyIndex<V>,
    policy: PhantomData<P>,
}

/// 有向图
pub type DirectedGraph<V> = AdjacencyGraph<V, AnyOrientation>;

/// 无向图
pub type UndirectedGraph<V> = AdjacencyGraph<V, UndirectedOnly>;

impl<V: Vertex, P: OrientationPolicy> AdjacencyGraph<V, P> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
            edges: IndexSet::new(),
            index: AdjacencyIndex::new(),
            policy: PhantomData,
        }
    }

    /// 由初始顶点集和边集构造图，立即建立索引
    ///
    /// 所有边先校验方向，任意一条不被接受则整体失败。
    pub fn with_elements<I, E>(vertices: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = Edge<V>>,
    {
        let edges: Vec<Edge<V>> = edges.into_iter().collect();
        for edge in &edges {
            Self::check_orientation(edge)?;
        }

        let mut graph = Self::new();
        graph.vertices.extend(vertices);
        for edge in edges {
            graph.insert_edge(edge);
        }

        tracing::debug!(
            kind = %P::KIND,
            vertices = graph.vertices.len(),
            edges = graph.edges.len(),
            "初始化图"
        );

        Ok(graph)
    }

    fn check_orientation(edge: &Edge<V>) -> Result<()> {
        if P::admits(edge.orientation()) {
            return Ok(());
        }
        tracing::debug!(kind = %P::KIND, edge = ?edge, "拒绝方向不匹配的边");
        Err(Error::OrientationMismatch(format!(
            "{} 图不能包含 {} 边 ({:?}, {:?})",
            P::KIND,
            edge.orientation(),
            edge.source(),
            edge.destination()
        )))
    }

    /// 写入边集与索引；已存在的相同边不会重复登记
    fn insert_edge(&mut self, edge: Edge<V>) -> bool {
        self.vertices.insert(edge.source().clone());
        self.vertices.insert(edge.destination().clone());

        let (position, inserted) = self.edges.insert_full(edge);
        if inserted {
            self.index.add_edge(EdgeId::new(position), &self.edges[position]);
        }
        inserted
    }

    /// 按 ID 获取边
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<V>> {
        self.edges.get_index(id.as_usize())
    }

    /// 所有顶点（插入顺序）
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// 所有边（插入顺序）
    pub fn edges(&self) -> impl Iterator<Item = &Edge<V>> + '_ {
        self.edges.iter()
    }

    /// 获取顶点的所有出边（无向边在两个端点都算出边）
    pub fn outgoing_edges<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a Edge<V>> + 'a {
        self.index
            .get_outgoing(vertex)
            .iter()
            .map(move |id| &self.edges[id.as_usize()])
    }

    /// 获取顶点的所有入边
    pub fn incoming_edges<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a Edge<V>> + 'a {
        self.index
            .get_incoming(vertex)
            .iter()
            .map(move |id| &self.edges[id.as_usize()])
    }

    /// 获取从 `a` 走到 `b` 的所有边
    pub fn edges_between<'a>(
        &'a self,
        a: &'a V,
        b: &'a V,
    ) -> impl Iterator<Item = &'a Edge<V>> + 'a {
        self.outgoing_edges(a)
            .filter(move |e| e.connects_vertices(a, b))
    }

    /// 获取从 `a` 走到 `b` 权重最小的边（多重边时取最轻的）
    pub fn shortest_edge_between<'a>(&'a self, a: &'a V, b: &'a V) -> Option<&'a Edge<V>> {
        self.edges_between(a, b).min_by_key(|e| e.weight())
    }

    /// 获取顶点的邻居（沿出边可达的顶点，去重）
    pub fn neighbors(&self, vertex: &V) -> Vec<V> {
        self.outgoing_edges(vertex)
            .filter_map(|e| e.other_vertex(vertex).ok())
            .cloned()
            .collect::<IndexSet<V>>()
            .into_iter()
            .collect()
    }

    /// 获取顶点的出度
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.index.out_degree(vertex)
    }

    /// 获取顶点的入度
    pub fn in_degree(&self, vertex: &V) -> usize {
        self.index.in_degree(vertex)
    }

    /// 获取图中保存的顶点引用
    pub fn vertex_ref(&self, vertex: &V) -> Option<&V> {
        self.vertices.get(vertex)
    }

    /// 创建路径查找器
    pub fn path_finder(&self) -> PathFinder<'_, V, P> {
        PathFinder::new(self)
    }
}

impl<V: Vertex, P: OrientationPolicy> Default for AdjacencyGraph<V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, P: OrientationPolicy> Graph for AdjacencyGraph<V, P> {
    type Vertex = V;

    fn kind(&self) -> GraphKind {
        P::KIND
    }

    fn add_vertex(&mut self, vertex: V) -> bool {
        tracing::trace!(vertex = ?vertex, "添加顶点");
        self.vertices.insert(vertex)
    }

    fn add_edge(&mut self, edge: Edge<V>) -> Result<bool> {
        Self::check_orientation(&edge)?;
        tracing::trace!(edge = ?edge, "添加边");
        Ok(self.insert_edge(edge))
    }

    fn get_path(&self, source: &V, destination: &V) -> Vec<Edge<V>> {
        self.path_finder().get_path(source, destination)
    }

    fn shortest_path(&self, source: &V, destination: &V) -> Option<PathResult<V>> {
        self.path_finder().shortest_path(source, destination)
    }

    fn traverse<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&V) -> R,
    {
        self.vertices.iter().map(f).collect()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    fn contains_edge(&self, edge: &Edge<V>) -> bool {
        self.edges.contains(edge)
    }
}
