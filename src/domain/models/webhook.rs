// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::validators::{validate_target_url, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Webhook实体
///
/// 表示一个已注册的回调地址，触发事件时会收到通知。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Webhook唯一标识符，创建时生成，之后不可变
    pub id: String,
    /// 回调URL，接收通知的目标地址
    pub target_url: String,
    /// 创建时间，仅用于稳定列表顺序
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

impl Webhook {
    /// 创建一个新的Webhook
    ///
    /// # 参数
    ///
    /// * `target_url` - 已校验的回调URL
    ///
    /// # 返回值
    ///
    /// 返回带有新生成的随机ID（128位）和当前时间戳的实例
    pub fn new(target_url: &TargetUrl) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            target_url: target_url.as_str().to_string(),
            created_at: Utc::now(),
        }
    }
}

/// 已通过语法校验的目标URL
///
/// 只能通过 [`TargetUrl::parse`] 构造，注册表只接受该类型，
/// 因此未经校验的URL无法写入存储。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl(String);

impl TargetUrl {
    /// 校验并包装URL字符串
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        validate_target_url(raw)?;
        Ok(Self(raw.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 通知负载
///
/// 发送给每个目标地址的固定JSON结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    /// 触发请求方的IP地址
    pub ip_address: String,
    /// Unix 时间戳（秒）
    pub time_stamp: i64,
}

impl NotificationPayload {
    /// 使用当前时间构造负载
    pub fn now(ip_address: impl Into<String>) -> Self {
        Self {
            ip_address: ip_address.into(),
            time_stamp: Utc::now().timestamp(),
        }
    }
}
