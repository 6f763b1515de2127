//! 图配置

/// 图配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    /// 严格成员校验
    ///
    /// 关闭时（默认）：只有深度优先搜索校验起点是否已注册；加边允许未注册的端点，
    /// 广度优先搜索和最短路径也不校验。
    /// 开启时：加边、广度优先搜索和最短路径同样要求顶点已注册，否则返回
    /// [`Error::NotRegistered`](crate::Error::NotRegistered)。
    pub strict_membership: bool,
}

impl GraphConfig {
    /// 默认配置（宽松成员校验）
    pub fn new() -> Self {
        Self::default()
    }

    /// 严格成员校验配置
    pub fn strict() -> Self {
        Self {
            strict_membership: true,
        }
    }

    /// 设置是否启用严格成员校验
    pub fn with_strict_membership(mut self, strict: bool) -> Self {
        self.strict_membership = strict;
        self
    }
}
