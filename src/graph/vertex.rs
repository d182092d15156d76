//! 顶点定义
//!
//! 顶点由调用方自定义，只需支持相等比较与稳定哈希

use std::fmt::Debug;
use std::hash::Hash;

/// 顶点类型约束
///
/// 任何满足 `Eq + Hash + Clone + Debug` 的类型都可以直接作为顶点使用，
/// 例如 `&'static str`、`String`、整数或自定义枚举。
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Vertex for T {}
