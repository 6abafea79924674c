// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::NotificationPayload;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 传输层错误类型
///
/// 请求没有得到任何HTTP响应时返回
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// 请求超时
    #[error("request timed out")]
    Timeout,
    /// 连接失败（拒绝连接、DNS解析失败等）
    #[error("connection failed: {0}")]
    Connect(String),
    /// 其他请求错误
    #[error("request failed: {0}")]
    Request(String),
}

/// Webhook传输特质
///
/// 定义向目标地址发送通知的出站接口
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// 以JSON形式POST通知负载
    ///
    /// # 参数
    ///
    /// * `url` - 目标地址
    /// * `payload` - 通知负载
    /// * `timeout` - 单次请求超时
    ///
    /// # 返回值
    ///
    /// * `Ok(u16)` - 远端返回的HTTP状态码（任意状态码）
    /// * `Err(TransportError)` - 未收到响应
    async fn post_json(
        &self,
        url: &str,
        payload: &NotificationPayload,
        timeout: Duration,
    ) -> Result<u16, TransportError>;
}
