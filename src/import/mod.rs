//! 图数据导入模块
//!
//! 从 JSON 文档加载顶点和边，按文档声明的类型构造图

use crate::algorithm::PathResult;
use crate::error::Result;
use crate::factory::GraphFactory;
use crate::graph::{AdjacencyGraph, Edge, Graph, GraphKind, OrientationPolicy, Vertex};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// 图文档
///
/// ```json
/// {
///   "kind": "undirected",
///   "vertices": ["A", "B", "C"],
///   "edges": [{"source": "A", "destination": "B", "weight": 10, "orientation": "undirected"}]
/// }
/// ```
///
/// `weight` 缺省为 1，`orientation` 缺省为有向。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument<V> {
    #[serde(default)]
    pub kind: GraphKind,
    #[serde(default = "Vec::new")]
    pub vertices: Vec<V>,
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<V>>,
}

impl<V: Vertex + DeserializeOwned> GraphDocument<V> {
    /// 从 JSON 字符串解析
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从任意读取器解析
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// 从文件解析
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let document = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(
            path = %path.as_ref().display(),
            kind = %document.kind,
            vertices = document.vertices.len(),
            edges = document.edges.len(),
            "读取图文档"
        );
        Ok(document)
    }
}

impl<V: Vertex> GraphDocument<V> {
    /// 导出图的当前内容
    pub fn from_graph<P: OrientationPolicy>(graph: &AdjacencyGraph<V, P>) -> Self {
        Self {
            kind: P::KIND,
            vertices: graph.vertices().cloned().collect(),
            edges: graph.edges().cloned().collect(),
        }
    }

    /// 用指定工厂构造文档声明类型的图
    pub fn build<F: GraphFactory>(self, factory: &F) -> Result<LoadedGraph<F, V>> {
        match self.kind {
            GraphKind::Directed => factory
                .create_directed_graph_with(self.vertices, self.edges)
                .map(LoadedGraph::Directed),
            GraphKind::Undirected => factory
                .create_undirected_graph_with(self.vertices, self.edges)
                .map(LoadedGraph::Undirected),
        }
    }
}

impl<V: Serialize> GraphDocument<V> {
    /// 序列化为 JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 从文档构造出的图，类型在运行时才确定
pub enum LoadedGraph<F: GraphFactory, V: Vertex> {
    Directed(F::Directed<V>),
    Undirected(F::Undirected<V>),
}

macro_rules! dispatch {
    ($self:expr, $graph:ident => $body:expr) => {
        match $self {
            LoadedGraph::Directed($graph) => $body,
            LoadedGraph::Undirected($graph) => $body,
        }
    };
}

impl<F: GraphFactory, V: Vertex> Graph for LoadedGraph<F, V> {
    type Vertex = V;

    fn kind(&self) -> GraphKind {
        dispatch!(self, g => g.kind())
    }

    fn add_vertex(&mut self, vertex: V) -> bool {
        dispatch!(self, g => g.add_vertex(vertex))
    }

    fn add_edge(&mut self, edge: Edge<V>) -> Result<bool> {
        dispatch!(self, g => g.add_edge(edge))
    }

    fn get_path(&self, source: &V, destination: &V) -> Vec<Edge<V>> {
        dispatch!(self, g => g.get_path(source, destination))
    }

    fn shortest_path(&self, source: &V, destination: &V) -> Option<PathResult<V>> {
        dispatch!(self, g => g.shortest_path(source, destination))
    }

    fn traverse<R, T>(&self, f: T) -> Vec<R>
    where
        T: FnMut(&V) -> R,
    {
        dispatch!(self, g => g.traverse(f))
    }

    fn vertex_count(&self) -> usize {
        dispatch!(self, g => g.vertex_count())
    }

    fn edge_count(&self) -> usize {
        dispatch!(self, g => g.edge_count())
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        dispatch!(self, g => g.contains_vertex(vertex))
    }

    fn contains_edge(&self, edge: &Edge<V>) -> bool {
        dispatch!(self, g => g.contains_edge(edge))
    }
}
