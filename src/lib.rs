//! undigraph - 内存无向图
//!
//! 以 ID 标识顶点身份的无向图，支持：
//! - 顶点和边的增删，边以双方邻接集合的互相包含表示
//! - 深度优先遍历、广度优先遍历
//! - 无权最短路径长度（跳数）
//!
//! ```
//! use undigraph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.insert_vertex("A");
//! let b = graph.insert_vertex("B");
//! let c = graph.insert_vertex("C");
//! graph.add_edge(a, b)?;
//! graph.add_edge(b, c)?;
//!
//! assert_eq!(graph.breadth_first_search(a)?, vec!["A", "B", "C"]);
//! assert_eq!(graph.distance_of_shortest_path(a, c)?, Some(2));
//! # Ok::<(), undigraph::Error>(())
//! ```

pub mod algorithm;
pub mod config;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use algorithm::Traversal;
pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{Graph, Vertex, VertexArena, VertexId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
pub(crate) mod test_support {
    use tracing_subscriber::EnvFilter;

    /// 初始化测试日志，可重复调用
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
