// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

/// 重试策略配置
///
/// Webhook 投递使用固定间隔重试：不做指数退避，也不加抖动。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// 最大尝试次数（含首次尝试）
    pub max_attempts: u32,
    /// 失败后到下一次尝试之间的固定间隔
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            retry_delay: Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    /// 创建固定间隔的重试策略
    pub fn fixed(max_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            retry_delay,
        }
    }

    /// 第 `attempt` 次尝试失败后是否还应该重试（`attempt` 从 1 开始）
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// 下一次重试前的等待时间
    pub fn delay(&self) -> Duration {
        self.retry_delay
    }
}
