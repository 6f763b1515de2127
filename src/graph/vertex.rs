//! 顶点定义
//!
//! 顶点以 [`VertexId`] 标识身份，携带任意值和一个邻接集合。
//! 值相同的两个顶点仍是不同的顶点。

use crate::algorithm::Traversal;
use crate::error::Result;
use crate::graph::arena::VertexArena;
use indexmap::IndexSet;
use std::collections::HashSet;
use std::fmt;

/// 顶点 ID
///
/// 由所属顶点存储的标识和存储内下标组成，只能由顶点存储分配。
/// 来自另一个图的 ID 不会与本图的顶点混淆。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId {
    /// 所属顶点存储的标识
    arena: u64,
    /// 存储内下标
    index: usize,
}

impl VertexId {
    pub(crate) fn new(arena: u64, index: usize) -> Self {
        Self { arena, index }
    }

    /// 存储内下标（按创建顺序从 0 开始）
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn arena(&self) -> u64 {
        self.arena
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}@{}", self.index, self.arena)
    }
}

/// 顶点
///
/// 邻接集合按插入顺序迭代；删除邻居不会打乱其余邻居的相对顺序。
/// 顶点本身不校验邻接对称性，由 [`Graph`](crate::Graph) 的边操作负责维护。
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    /// 顶点 ID
    id: VertexId,
    /// 顶点值
    value: T,
    /// 邻接顶点
    adjacent: IndexSet<VertexId>,
}

impl<T> Vertex<T> {
    /// 创建没有邻居的顶点
    pub(crate) fn new(id: VertexId, value: T) -> Self {
        Self {
            id,
            value,
            adjacent: IndexSet::new(),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取顶点值
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// 获取邻接集合
    pub fn adjacent(&self) -> &IndexSet<VertexId> {
        &self.adjacent
    }

    pub(crate) fn adjacent_mut(&mut self) -> &mut IndexSet<VertexId> {
        &mut self.adjacent
    }

    /// 是否与指定顶点相邻
    pub fn is_adjacent_to(&self, other: VertexId) -> bool {
        self.adjacent.contains(&other)
    }

    /// 获取度数
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }
}

impl<T: Clone> Vertex<T> {
    /// 以本顶点为根的深度优先遍历，返回先序的值序列
    ///
    /// `visited` 为 `None` 时以 `{self}` 开始；由调用方传入时原样使用，
    /// 不会再把本顶点加入其中。遍历共享该集合，已访问的顶点直接跳过。
    pub fn depth_first_traversal(
        &self,
        arena: &VertexArena<T>,
        visited: Option<&mut HashSet<VertexId>>,
    ) -> Result<Vec<T>> {
        Traversal::new(arena).depth_first(self.id, visited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_basic() {
        let mut v = Vertex::new(VertexId::new(0, 3), "a");

        assert_eq!(v.id().index(), 3);
        assert_eq!(v.value(), &"a");
        assert_eq!(v.degree(), 0);

        v.adjacent_mut().insert(VertexId::new(0, 1));
        assert!(v.is_adjacent_to(VertexId::new(0, 1)));
        assert!(!v.is_adjacent_to(VertexId::new(0, 2)));

        *v.value_mut() = "b";
        assert_eq!(v.value(), &"b");
    }

    #[test]
    fn test_vertex_id_display() {
        assert_eq!(VertexId::new(2, 7).to_string(), "v7@2");
        assert_ne!(VertexId::new(1, 7), VertexId::new(2, 7));
    }

    #[test]
    fn test_depth_first_traversal_from_vertex() {
        let mut arena = VertexArena::new();
        let a = arena.create("A");
        let b = arena.create("B");
        let c = arena.create("C");
        arena.link(a, b);
        arena.link(b, c);

        let values = arena
            .get(b)
            .unwrap()
            .depth_first_traversal(&arena, None)
            .unwrap();
        assert_eq!(values, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_depth_first_traversal_shares_visited() {
        let mut arena = VertexArena::new();
        let a = arena.create("A");
        let b = arena.create("B");
        let c = arena.create("C");
        arena.link(a, b);
        arena.link(a, c);

        // B 已被调用方标记，遍历跳过它
        let mut visited = HashSet::from([a, b]);
        let values = arena
            .get(a)
            .unwrap()
            .depth_first_traversal(&arena, Some(&mut visited))
            .unwrap();

        assert_eq!(values, vec!["A", "C"]);
        assert!(visited.contains(&c));
    }

    #[test]
    fn test_depth_first_traversal_rejects_other_arena() {
        let mut arena = VertexArena::new();
        let a = arena.create("A");
        let mut other = VertexArena::new();
        other.create("X");

        let result = arena.get(a).unwrap().depth_first_traversal(&other, None);
        assert_eq!(result, Err(crate::Error::VertexNotFound(a)));
    }
}
