//! 错误类型定义

use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 深度优先搜索的起点未注册到图中
    #[error("无效的起始顶点: {0}")]
    InvalidStartVertex(VertexId),

    /// 顶点 ID 不属于本图的顶点存储（例如来自另一个图）
    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    /// 严格成员模式下，顶点未注册到图中
    #[error("顶点未注册到图中: {0}")]
    NotRegistered(VertexId),
}
