//! 线程安全图
//!
//! 用一把读写锁包装任意 [`Graph`]：查询持读锁，修改持写锁

use crate::algorithm::PathResult;
use crate::error::Result;
use crate::graph::{Edge, Graph, GraphKind};
use parking_lot::RwLock;

/// 读写锁包装的图
///
/// 方法都只需要 `&self`，可以通过 `Arc` 在线程间共享。
/// 多个读者可以并发执行，写者独占；读者永远看不到执行到一半的修改。
///
/// 锁不可重入：`traverse` 的回调里再次访问同一个实例会死锁。
#[derive(Debug, Default)]
pub struct SynchronizedGraph<G> {
    inner: RwLock<G>,
}

impl<G: Graph> SynchronizedGraph<G> {
    /// 包装一个图
    pub fn new(graph: G) -> Self {
        Self {
            inner: RwLock::new(graph),
        }
    }

    /// 取回被包装的图
    pub fn into_inner(self) -> G {
        self.inner.into_inner()
    }

    /// 持读锁执行一组查询，期间不会有写者插入
    pub fn read_with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&G) -> R,
    {
        f(&self.inner.read())
    }

    /// 图类型
    pub fn kind(&self) -> GraphKind {
        self.inner.read().kind()
    }

    /// 添加顶点（写锁）
    pub fn add_vertex(&self, vertex: G::Vertex) -> bool {
        self.inner.write().add_vertex(vertex)
    }

    /// 添加边（写锁）
    pub fn add_edge(&self, edge: Edge<G::Vertex>) -> Result<bool> {
        self.inner.write().add_edge(edge)
    }

    /// 最短路径上的边序列（读锁）
    pub fn get_path(&self, source: &G::Vertex, destination: &G::Vertex) -> Vec<Edge<G::Vertex>> {
        self.inner.read().get_path(source, destination)
    }

    /// 最短路径的完整结果（读锁）
    pub fn shortest_path(
        &self,
        source: &G::Vertex,
        destination: &G::Vertex,
    ) -> Option<PathResult<G::Vertex>> {
        self.inner.read().shortest_path(source, destination)
    }

    /// 对每个顶点应用 `f`（读锁）
    pub fn traverse<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&G::Vertex) -> R,
    {
        self.inner.read().traverse(f)
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.read().vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.read().edge_count()
    }

    pub fn contains_vertex(&self, vertex: &G::Vertex) -> bool {
        self.inner.read().contains_vertex(vertex)
    }

    pub fn contains_edge(&self, edge: &Edge<G::Vertex>) -> bool {
        self.inner.read().contains_edge(edge)
    }

    /// 判断两点是否连通（读锁）
    pub fn is_reachable(&self, source: &G::Vertex, destination: &G::Vertex) -> bool {
        self.inner.read().is_reachable(source, destination)
    }
}

// 独占借用已经排除了其他访问者，直接用 get_mut 而不必加锁
impl<G: Graph> Graph for SynchronizedGraph<G> {
    type Vertex = G::Vertex;

    fn kind(&self) -> GraphKind {
        self.inner.read().kind()
    }

    fn add_vertex(&mut self, vertex: G::Vertex) -> bool {
        self.inner.get_mut().add_vertex(vertex)
    }

    fn add_edge(&mut self, edge: Edge<G::Vertex>) -> Result<bool> {
        self.inner.get_mut().add_edge(edge)
    }

    fn get_path(&self, source: &G::Vertex, destination: &G::Vertex) -> Vec<Edge<G::Vertex>> {
        self.inner.read().get_path(source, destination)
    }

    fn shortest_path(
        &self,
        source: &G::Vertex,
        destination: &G::Vertex,
    ) -> Option<PathResult<G::Vertex>> {
        self.inner.read().shortest_path(source, destination)
    }

    fn traverse<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&G::Vertex) -> R,
    {
        self.inner.read().traverse(f)
    }

    fn vertex_count(&self) -> usize {
        self.inner.read().vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.inner.read().edge_count()
    }

    fn contains_vertex(&self, vertex: &G::Vertex) -> bool {
        self.inner.read().contains_vertex(vertex)
    }

    fn contains_edge(&self, edge: &Edge<G::Vertex>) -> bool {
        self.inner.read().contains_edge(edge)
    }
}

impl<G: Graph> From<G> for SynchronizedGraph<G> {
    fn from(graph: G) -> Self {
        Self::new(graph)
    }
}
