//! 图算法模块
//!
//! 包含深度优先、广度优先遍历和最短路径长度

mod traversal;

pub use traversal::Traversal;
