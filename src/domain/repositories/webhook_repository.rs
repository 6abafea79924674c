// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::Webhook;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Webhook仓库特质
///
/// 定义Webhook数据访问接口。更新和删除返回受影响的行数，
/// 由调用方决定零行时的语义。
#[async_trait]
pub trait WebhookRepository: Send + Sync {
    /// 创建Webhook
    async fn create(&self, webhook: &Webhook) -> Result<Webhook, RepositoryError>;
    /// 查询全部Webhook
    async fn find_all(&self) -> Result<Vec<Webhook>, RepositoryError>;
    /// 更新目标URL，返回受影响行数
    async fn update_target_url(&self, id: &str, target_url: &str) -> Result<u64, RepositoryError>;
    /// 按ID删除，返回受影响行数
    async fn delete_by_id(&self, id: &str) -> Result<u64, RepositoryError>;
}
