//! 图工厂
//!
//! 按方向（有向 / 无向）和是否加锁创建四种图

use crate::error::Result;
use crate::graph::{DirectedGraph, Edge, Graph, UndirectedGraph, Vertex};
use crate::sync::SynchronizedGraph;

/// 图工厂
pub trait GraphFactory {
    /// 有向图类型
    type Directed<V: Vertex>: Graph<Vertex = V>;
    /// 无向图类型
    type Undirected<V: Vertex>: Graph<Vertex = V>;

    /// 创建空的有向图
    fn create_directed_graph<V: Vertex>(&self) -> Self::Directed<V>;

    /// 由初始顶点和边创建有向图
    fn create_directed_graph_with<V, I, E>(&self, vertices: I, edges: E) -> Result<Self::Directed<V>>
    where
        V: Vertex,
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = Edge<V>>;

    /// 创建空的无向图
    fn create_undirected_graph<V: Vertex>(&self) -> Self::Undirected<V>;

    /// 由初始顶点和边创建无向图，任一条边不是无向边时失败
    fn create_undirected_graph_with<V, I, E>(
        &self,
        vertices: I,
        edges: E,
    ) -> Result<Self::Undirected<V>>
    where
        V: Vertex,
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = Edge<V>>;
}

/// 创建不加锁的图，只能在单线程内修改
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsynchronizedGraphFactory;

impl GraphFactory for UnsynchronizedGraphFactory {
    type Directed<V: Vertex> = DirectedGraph<V>;
    type Undirected<V: Vertex> = UndirectedGraph<V>;

    fn create_directed_graph<V: Vertex>(&self) -> DirectedGraph<V> {
        DirectedGraph::new()
    }

    fn create_directed_graph_with<V, I, E>(&self, vertices: I, edges: E) -> Result<DirectedGraph<V>>
    where
        V: Vertex,
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = Edge<V>>,
    {
        DirectedGraph::with_elements(vertices, edges)
    }

    fn create_undirected_graph<V: Vertex>(&self) -> UndirectedGraph<V> {
        UndirectedGraph::new()
    }

    fn create_undirected_graph_with<V, I, E>(
        &self,
        vertices: I,
        edges: E,
    ) -> Result<UndirectedGraph<V>>
    where
        V: Vertex,
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = Edge<V>>,
    {
        UndirectedGraph::with_elements(vertices, edges)
    }
}

/// 创建读写锁包装的图，可在线程间共享
#[derive(Debug, Clone, Copy, Default)]
pub struct SynchronizedGraphFactory;

impl GraphFactory for SynchronizedGraphFactory {
    type Directed<V: Vertex> = SynchronizedGraph<DirectedGraph<V>>;
    type Undirected<V: Vertex> = SynchronizedGraph<UndirectedGraph<V>>;

    fn create_directed_graph<V: Vertex>(&self) -> Self::Directed<V> {
        SynchronizedGraph::new(UnsynchronizedGraphFactory.create_directed_graph())
    }

    fn create_directed_graph_with<V, I, E>(&self, vertices: I, edges: E) -> Result<Self::Directed<V>>
    where
        V: Vertex,
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = Edge<V>>,
    {
        UnsynchronizedGraphFactory
            .create_directed_graph_with(vertices, edges)
            .map(SynchronizedGraph::new)
    }

    fn create_undirected_graph<V: Vertex>(&self) -> Self::Undirected<V> {
        SynchronizedGraph::new(UnsynchronizedGraphFactory.create_undirected_graph())
    }

    fn create_undirected_graph_with<V, I, E>(
        &self,
        vertices: I,
        edges: E,
    ) -> Result<Self::Undirected<V>>
    where
        V: Vertex,
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = Edge<V>>,
    {
        UnsynchronizedGraphFactory
            .create_undirected_graph_with(vertices, edges)
            .map(SynchronizedGraph::new)
    }
}

static UNSYNCHRONIZED_FACTORY: UnsynchronizedGraphFactory = UnsynchronizedGraphFactory;

static SYNCHRONIZED_FACTORY: SynchronizedGraphFactory = SynchronizedGraphFactory;

/// 不加锁的图工厂
pub fn graph_factory() -> &'static UnsynchronizedGraphFactory {
    &UNSYNCHRONIZED_FACTORY
}

/// 加锁的图工厂
pub fn synchronized_graph_factory() -> &'static SynchronizedGraphFactory {
    &SYNCHRONIZED_FACTORY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graph::GraphKind;

    #[test]
    fn test_factory_kinds() {
        let directed = graph_factory().create_directed_graph::<&str>();
        let undirected = graph_factory().create_undirected_graph::<&str>();
        let sync_directed = synchronized_graph_factory().create_directed_graph::<&str>();
        let sync_undirected = synchronized_graph_factory().create_undirected_graph::<&str>();

        assert_eq!(directed.kind(), GraphKind::Directed);
        assert_eq!(undirected.kind(), GraphKind::Undirected);
        assert_eq!(sync_directed.kind(), GraphKind::Directed);
        assert_eq!(sync_undirected.kind(), GraphKind::Undirected);
    }

    #[test]
    fn test_factory_seeded_graph() {
        let graph = graph_factory()
            .create_directed_graph_with(
                ["A", "B", "C"],
                [Edge::undirected("A", "B", 10).unwrap()],
            )
            .unwrap();

        assert_eq!(graph.get_path(&"A", &"B"), vec![Edge::undirected("A", "B", 10).unwrap()]);
        assert!(graph.get_path(&"A", &"C").is_empty());
    }

    #[test]
    fn test_factory_rejects_directed_seed_for_undirected() {
        let result = synchronized_graph_factory().create_undirected_graph_with(
            ["A", "B"],
            [Edge::directed_unit("A", "B")],
        );
        assert!(matches!(result, Err(Error::OrientationMismatch(_))));
    }

    #[test]
    fn test_synchronized_factory_seeded_duplicates() {
        let graph = synchronized_graph_factory()
            .create_undirected_graph_with(
                ["A", "B"],
                [Edge::undirected_unit("A", "B"), Edge::undirected_unit("A", "B")],
            )
            .unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.get_path(&"B", &"A"), vec![Edge::undirected_unit("A", "B")]);
    }
}
