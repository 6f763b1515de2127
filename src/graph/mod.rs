//! 图核心模块
//!
//! 定义顶点、顶点存储和图的核心数据结构

mod arena;
mod graph;
mod vertex;

pub use arena::VertexArena;
pub use graph::Graph;
pub use vertex::{Vertex, VertexId};
