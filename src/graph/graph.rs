//! 图数据结构
//!
//! 图拥有一个顶点存储和一个已注册顶点集合。边记录在顶点的邻接集合上，
//! 不要求两端都已注册到图中。

use super::arena::VertexArena;
use super::vertex::{Vertex, VertexId};
use crate::algorithm::Traversal;
use crate::config::GraphConfig;
use crate::error::{Error, Result};
use indexmap::IndexSet;
use tracing::{trace, warn};

/// 无向图
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// 顶点存储（包含未注册和已删除的顶点）
    arena: VertexArena<T>,
    /// 已注册顶点
    nodes: IndexSet<VertexId>,
    /// 配置
    config: GraphConfig,
}

impl<T> Graph<T> {
    /// 创建空图
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// 使用指定配置创建空图
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            arena: VertexArena::new(),
            nodes: IndexSet::new(),
            config,
        }
    }

    /// 获取配置
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    fn ensure_known(&self, id: VertexId) -> Result<()> {
        if self.arena.contains(id) {
            Ok(())
        } else {
            Err(Error::VertexNotFound(id))
        }
    }

    /// 严格成员模式下要求顶点已注册
    fn ensure_registered(&self, id: VertexId) -> Result<()> {
        self.ensure_known(id)?;
        if self.config.strict_membership && !self.nodes.contains(&id) {
            warn!(vertex = %id, "严格成员模式拒绝未注册的顶点");
            return Err(Error::NotRegistered(id));
        }
        Ok(())
    }

    // ==================== 顶点操作 ====================

    /// 创建顶点，但不注册到图中
    pub fn create_vertex(&mut self, value: T) -> VertexId {
        let id = self.arena.create(value);
        trace!(vertex = %id, "创建顶点");
        id
    }

    /// 创建顶点并注册到图中
    pub fn insert_vertex(&mut self, value: T) -> VertexId {
        let id = self.create_vertex(value);
        self.nodes.insert(id);
        id
    }

    /// 注册顶点，已注册时不做任何修改
    pub fn add_vertex(&mut self, id: VertexId) -> Result<()> {
        self.ensure_known(id)?;
        if self.nodes.insert(id) {
            trace!(vertex = %id, "注册顶点");
        }
        Ok(())
    }

    /// 按顺序注册一批顶点
    ///
    /// 遇到不属于本图的 ID 时立即返回错误，之前的顶点保持已注册。
    pub fn add_vertices<I>(&mut self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = VertexId>,
    {
        for id in ids {
            self.add_vertex(id)?;
        }
        Ok(())
    }

    /// 删除顶点
    ///
    /// 先从每个邻居的邻接集合中移除该顶点，再将其从图中注销。
    /// 该顶点自己的邻接集合保持原样（自环除外），通过旧 ID 仍能看到过期的邻居。
    /// 对未注册的顶点同样会清理其邻居。
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<()> {
        let neighbors: Vec<VertexId> = self
            .arena
            .get(id)
            .ok_or(Error::VertexNotFound(id))?
            .adjacent()
            .iter()
            .copied()
            .collect();

        for neighbor in neighbors {
            if let Some(vertex) = self.arena.get_mut(neighbor) {
                vertex.adjacent_mut().shift_remove(&id);
            }
        }

        if self.nodes.shift_remove(&id) {
            trace!(vertex = %id, "删除顶点");
        }
        Ok(())
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.arena.get(id)
    }

    /// 获取顶点值
    pub fn value(&self, id: VertexId) -> Option<&T> {
        self.arena.get(id).map(Vertex::value)
    }

    pub fn value_mut(&mut self, id: VertexId) -> Option<&mut T> {
        self.arena.get_mut(id).map(Vertex::value_mut)
    }

    /// 顶点是否已注册
    pub fn contains(&self, id: VertexId) -> bool {
        self.nodes.contains(&id)
    }

    /// 按注册顺序遍历已注册顶点
    pub fn nodes(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.nodes.iter().copied()
    }

    /// 已注册顶点数量
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 顶点存储中的顶点数量（包含未注册和已删除的顶点）
    pub fn arena_len(&self) -> usize {
        self.arena.len()
    }

    /// 获取顶点存储
    pub fn arena(&self) -> &VertexArena<T> {
        &self.arena
    }

    // ==================== 边操作 ====================

    /// 添加无向边，边已存在时不做任何修改
    ///
    /// 默认不要求两端已注册。
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId) -> Result<()> {
        self.ensure_registered(v1)?;
        self.ensure_registered(v2)?;

        self.arena.link(v1, v2);
        trace!(v1 = %v1, v2 = %v2, "添加边");
        Ok(())
    }

    /// 删除无向边，边不存在时不做任何修改
    pub fn remove_edge(&mut self, v1: VertexId, v2: VertexId) -> Result<()> {
        self.ensure_known(v1)?;
        self.ensure_known(v2)?;

        self.arena.unlink(v1, v2);
        trace!(v1 = %v1, v2 = %v2, "删除边");
        Ok(())
    }

    /// 两点之间是否有边
    pub fn has_edge(&self, v1: VertexId, v2: VertexId) -> bool {
        self.arena
            .get(v1)
            .map(|v| v.is_adjacent_to(v2))
            .unwrap_or(false)
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻居，顺序与邻接集合一致
    pub fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        self.arena
            .get(id)
            .map(|v| v.adjacent().iter().copied().collect())
            .unwrap_or_default()
    }

    /// 获取顶点的度数
    pub fn degree(&self, id: VertexId) -> usize {
        self.arena.get(id).map(Vertex::degree).unwrap_or(0)
    }
}

impl<T: Clone> Graph<T> {
    // ==================== 遍历 ====================

    /// 深度优先搜索，返回先序的值序列
    ///
    /// 起点必须已注册，否则返回 [`Error::InvalidStartVertex`]。
    pub fn depth_first_search(&self, start: VertexId) -> Result<Vec<T>> {
        if !self.nodes.contains(&start) {
            return Err(Error::InvalidStartVertex(start));
        }
        Traversal::new(&self.arena).depth_first(start, None)
    }

    /// 广度优先搜索，返回按层序的值序列
    ///
    /// 默认不校验起点是否已注册。
    pub fn breadth_first_search(&self, start: VertexId) -> Result<Vec<T>> {
        self.ensure_registered(start)?;
        Traversal::new(&self.arena).breadth_first(start)
    }

    /// 最短路径长度（跳数），不可达时返回 `Ok(None)`
    pub fn distance_of_shortest_path(
        &self,
        start: VertexId,
        end: VertexId,
    ) -> Result<Option<usize>> {
        self.ensure_registered(start)?;
        self.ensure_registered(end)?;
        Traversal::new(&self.arena).shortest_distance(start, end)
    }

    /// 判断两点是否连通
    pub fn is_reachable(&self, start: VertexId, end: VertexId) -> Result<bool> {
        Ok(self.distance_of_shortest_path(start, end)?.is_some())
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
