//! 边定义
//!
//! 带权边，分为有向边和无向边两种方向

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 默认边权重
pub const DEFAULT_WEIGHT: u32 = 1;

/// 边方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// 有向边：只能从 source 走向 destination
    #[default]
    Directed,
    /// 无向边：两个端点都可以作为起点
    Undirected,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Directed => "directed",
            Orientation::Undirected => "undirected",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 边
///
/// 构造后不可变。相等性取决于方向：
/// - 有向边在 `(source, destination, weight)` 完全相同时相等；
/// - 无向边在无序端点对与权重都相同时相等，哈希值对两个端点对称。
///
/// 有向边永远不等于无向边。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "EdgeRecord<V>", bound(deserialize = "V: Deserialize<'de>"))]
pub struct Edge<V> {
    /// 源顶点
    source: V,
    /// 目标顶点
    destination: V,
    /// 权重（恒为正）
    weight: u32,
    /// 方向
    orientation: Orientation,
}

/// 边的原始记录形式，经 [`Edge::new`] 校验后才成为边
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeRecord<V> {
    pub source: V,
    pub destination: V,
    #[serde(default = "default_weight")]
    pub weight: u32,
    #[serde(default)]
    pub orientation: Orientation,
}

fn default_weight() -> u32 {
    DEFAULT_WEIGHT
}

impl<V> TryFrom<EdgeRecord<V>> for Edge<V> {
    type Error = Error;

    fn try_from(record: EdgeRecord<V>) -> Result<Self> {
        Edge::new(
            record.source,
            record.destination,
            record.weight,
            record.orientation,
        )
    }
}

impl<V> Edge<V> {
    /// 创建新边，权重为 0 时失败
    pub fn new(source: V, destination: V, weight: u32, orientation: Orientation) -> Result<Self> {
        if weight == 0 {
            return Err(Error::InvalidWeight(weight));
        }
        Ok(Self {
            source,
            destination,
            weight,
            orientation,
        })
    }

    /// 创建有向边
    pub fn directed(source: V, destination: V, weight: u32) -> Result<Self> {
        Self::new(source, destination, weight, Orientation::Directed)
    }

    /// 创建无向边
    pub fn undirected(source: V, destination: V, weight: u32) -> Result<Self> {
        Self::new(source, destination, weight, Orientation::Undirected)
    }

    /// 创建权重为 1 的有向边
    pub fn directed_unit(source: V, destination: V) -> Self {
        Self {
            source,
            destination,
            weight: DEFAULT_WEIGHT,
            orientation: Orientation::Directed,
        }
    }

    /// 创建权重为 1 的无向边
    pub fn undirected_unit(source: V, destination: V) -> Self {
        Self {
            source,
            destination,
            weight: DEFAULT_WEIGHT,
            orientation: Orientation::Undirected,
        }
    }

    /// 获取源顶点
    pub fn source(&self) -> &V {
        &self.source
    }

    /// 获取目标顶点
    pub fn destination(&self) -> &V {
        &self.destination
    }

    /// 获取权重
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// 获取方向
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_directed(&self) -> bool {
        self.orientation == Orientation::Directed
    }

    pub fn is_undirected(&self) -> bool {
        self.orientation == Orientation::Undirected
    }
}

impl<V: PartialEq> Edge<V> {
    /// 是否可以从 `vertex` 出发经过这条边
    pub fn starts_at(&self, vertex: &V) -> bool {
        match self.orientation {
            Orientation::Directed => self.source == *vertex,
            Orientation::Undirected => self.source == *vertex || self.destination == *vertex,
        }
    }

    /// 是否可以经过这条边到达 `vertex`
    pub fn ends_at(&self, vertex: &V) -> bool {
        match self.orientation {
            Orientation::Directed => self.destination == *vertex,
            Orientation::Undirected => self.starts_at(vertex),
        }
    }

    /// 这条边是否把 `a` 连到 `b`（无向边不区分顺序）
    pub fn connects_vertices(&self, a: &V, b: &V) -> bool {
        let forward = self.source == *a && self.destination == *b;
        match self.orientation {
            Orientation::Directed => forward,
            Orientation::Undirected => forward || (self.source == *b && self.destination == *a),
        }
    }

    /// 是否以 `vertex` 为端点（不考虑方向）
    pub fn is_incident(&self, vertex: &V) -> bool {
        self.source == *vertex || self.destination == *vertex
    }
}

impl<V: PartialEq + fmt::Debug> Edge<V> {
    /// 获取边的另一个端点
    pub fn other_vertex(&self, vertex: &V) -> Result<&V> {
        if self.source == *vertex {
            Ok(&self.destination)
        } else if self.destination == *vertex {
            Ok(&self.source)
        } else {
            Err(Error::VertexNotIncident(format!(
                "{:?} 不是边 ({:?}, {:?}) 的端点",
                vertex, self.source, self.destination
            )))
        }
    }
}

impl<V: PartialEq> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        if self.orientation != other.orientation || self.weight != other.weight {
            return false;
        }
        let same = self.source == other.source && self.destination == other.destination;
        match self.orientation {
            Orientation::Directed => same,
            Orientation::Undirected => {
                same || (self.source == other.destination && self.destination == other.source)
            }
        }
    }
}

impl<V: Eq> Eq for Edge<V> {}

impl<V: Hash> Hash for Edge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.orientation.hash(state);
        self.weight.hash(state);
        match self.orientation {
            Orientation::Directed => {
                self.source.hash(state);
                self.destination.hash(state);
            }
            Orientation::Undirected => {
                // 端点各自独立哈希后相加，交换端点结果不变
                let combined =
                    endpoint_hash(&self.source).wrapping_add(endpoint_hash(&self.destination));
                state.write_u64(combined);
            }
        }
    }
}

fn endpoint_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.orientation {
            Orientation::Directed => write!(
                f,
                "[{}]>--{}-->[{}]",
                self.source, self.weight, self.destination
            ),
            Orientation::Undirected => write!(
                f,
                "[{}]---{}---[{}]",
                self.source, self.weight, self.destination
            ),
        }
    }
}
