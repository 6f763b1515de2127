//! 顶点存储
//!
//! 按 [`VertexId`] 索引的顶点存储。邻接关系是 ID 到 ID 的集合，
//! 顶点之间没有互相持有的引用。顶点只追加、不回收，已分配的 ID 始终有效。
//!
//! 每个存储在创建时取得一个进程内唯一的标识，写入它分配的每个 ID；
//! 标识不符的 ID 一律视为不存在。克隆出的存储沿用原标识，
//! 原存储分配的 ID 在副本中指向对应的顶点副本。

use super::vertex::{Vertex, VertexId};
use std::sync::atomic::{AtomicU64, Ordering};

/// 下一个顶点存储标识
static NEXT_ARENA_ID: AtomicU64 = AtomicU64::new(1);

/// 顶点存储
#[derive(Debug, Clone)]
pub struct VertexArena<T> {
    /// 存储标识
    tag: u64,
    vertices: Vec<Vertex<T>>,
}

impl<T> VertexArena<T> {
    /// 创建空存储
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tag: NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed),
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// 创建新顶点，返回其 ID
    pub fn create(&mut self, value: T) -> VertexId {
        let id = VertexId::new(self.tag, self.vertices.len());
        self.vertices.push(Vertex::new(id, value));
        id
    }

    /// 获取顶点
    pub fn get(&self, id: VertexId) -> Option<&Vertex<T>> {
        if id.arena() != self.tag {
            return None;
        }
        self.vertices.get(id.index())
    }

    pub fn get_mut(&mut self, id: VertexId) -> Option<&mut Vertex<T>> {
        if id.arena() != self.tag {
            return None;
        }
        self.vertices.get_mut(id.index())
    }

    /// ID 是否由本存储分配
    pub fn contains(&self, id: VertexId) -> bool {
        id.arena() == self.tag && id.index() < self.vertices.len()
    }

    /// 已创建的顶点数量
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 按创建顺序遍历所有顶点
    pub fn iter(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.vertices.iter()
    }

    /// 在两个顶点之间建立无向边
    ///
    /// 两端都必须由本存储分配，否则不做任何修改。
    pub(crate) fn link(&mut self, a: VertexId, b: VertexId) {
        if !self.contains(a) || !self.contains(b) {
            return;
        }
        self.vertices[a.index()].adjacent_mut().insert(b);
        self.vertices[b.index()].adjacent_mut().insert(a);
    }

    /// 删除两个顶点之间的无向边，边不存在时不做任何修改
    pub(crate) fn unlink(&mut self, a: VertexId, b: VertexId) {
        if let Some(v) = self.get_mut(a) {
            v.adjacent_mut().shift_remove(&b);
        }
        if let Some(v) = self.get_mut(b) {
            v.adjacent_mut().shift_remove(&a);
        }
    }
}

impl<T> Default for VertexArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
