//! 遍历算法
//!
//! 深度优先、广度优先和最短路径（跳数）。邻居按邻接集合的插入顺序访问，
//! 因此相同的加边序列总是得到相同的输出。

use crate::error::{Error, Result};
use crate::graph::{Vertex, VertexArena, VertexId};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// 遍历器
///
/// 借用一个顶点存储，从指定起点沿邻接集合行走。不检查图的成员关系，
/// 成员校验由 [`Graph`](crate::Graph) 负责。
pub struct Traversal<'a, T> {
    arena: &'a VertexArena<T>,
}

impl<'a, T: Clone> Traversal<'a, T> {
    /// 创建遍历器
    pub fn new(arena: &'a VertexArena<T>) -> Self {
        Self { arena }
    }

    fn vertex(&self, id: VertexId) -> Result<&'a Vertex<T>> {
        self.arena.get(id).ok_or(Error::VertexNotFound(id))
    }

    /// 深度优先遍历，返回先序的值序列
    ///
    /// 使用显式栈代替递归：每个栈帧记录顶点和下一个待检查邻居的位置。
    /// 邻居在入栈前标记为已访问，并且只在前一个兄弟的子树走完后才检查，
    /// 输出与递归版本逐项一致。
    ///
    /// `visited` 为 `None` 时以 `{start}` 开始；传入时原样使用，不插入 `start`。
    pub fn depth_first(
        &self,
        start: VertexId,
        visited: Option<&mut HashSet<VertexId>>,
    ) -> Result<Vec<T>> {
        let root = self.vertex(start)?;

        let mut local = HashSet::new();
        let visited = match visited {
            Some(shared) => shared,
            None => {
                local.insert(start);
                &mut local
            }
        };

        let mut values = vec![root.value().clone()];
        let mut stack: Vec<(&'a Vertex<T>, usize)> = vec![(root, 0)];

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.0;
            match vertex.adjacent().get_index(frame.1).copied() {
                Some(neighbor) => {
                    frame.1 += 1;
                    if visited.insert(neighbor) {
                        if let Some(next) = self.arena.get(neighbor) {
                            values.push(next.value().clone());
                            stack.push((next, 0));
                        }
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!(start = %start, visited = values.len(), "深度优先遍历完成");
        Ok(values)
    }

    /// 广度优先遍历，返回按层序的值序列
    ///
    /// 顶点在入队时标记为已访问，同一顶点不会经由两条路径重复入队。
    pub fn breadth_first(&self, start: VertexId) -> Result<Vec<T>> {
        let root = self.vertex(start)?;

        let mut queue = VecDeque::from([root]);
        let mut visited = HashSet::from([start]);
        let mut values = Vec::new();

        while let Some(current) = queue.pop_front() {
            values.push(current.value().clone());

            for &neighbor in current.adjacent() {
                if !visited.contains(&neighbor) {
                    if let Some(next) = self.arena.get(neighbor) {
                        queue.push_back(next);
                    }
                    visited.insert(neighbor);
                }
            }
        }

        debug!(start = %start, visited = values.len(), "广度优先遍历完成");
        Ok(values)
    }

    /// 最短路径长度（跳数）
    ///
    /// 不可达时返回 `Ok(None)`；`start == end` 时返回 `Some(0)`。
    pub fn shortest_distance(&self, start: VertexId, end: VertexId) -> Result<Option<usize>> {
        let root = self.vertex(start)?;
        self.vertex(end)?;

        // (顶点, 深度)
        let mut queue = VecDeque::from([(root, 0usize)]);
        let mut visited = HashSet::from([start]);

        while let Some((current, depth)) = queue.pop_front() {
            if current.id() == end {
                debug!(start = %start, end = %end, distance = depth, "找到最短路径");
                return Ok(Some(depth));
            }

            for &neighbor in current.adjacent() {
                if visited.insert(neighbor) {
                    if let Some(next) = self.arena.get(neighbor) {
                        queue.push_back((next, depth + 1));
                    }
                }
            }
        }

        debug!(start = %start, end = %end, "终点不可达");
        Ok(None)
    }

    /// 判断两点是否连通
    pub fn is_reachable(&self, start: VertexId, end: VertexId) -> Result<bool> {
        Ok(self.shortest_distance(start, end)?.is_some())
    }
}
