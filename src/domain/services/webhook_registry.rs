// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::{TargetUrl, Webhook};
use crate::domain::repositories::webhook_repository::{RepositoryError, WebhookRepository};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// 注册表错误类型
#[derive(Error, Debug)]
pub enum RegistryError {
    /// 指定ID的Webhook不存在
    #[error("Invalid ID: no webhook with id {0}")]
    NotFound(String),
    /// 存储层错误
    #[error("Storage error: {0}")]
    Storage(#[from] RepositoryError),
}

/// Webhook注册表
///
/// 在仓库之上提供注册、列出、更新和删除操作，
/// 把"零行受影响"转换为 [`RegistryError::NotFound`]。
pub struct WebhookRegistry<R: WebhookRepository> {
    repo: Arc<R>,
}

impl<R: WebhookRepository> WebhookRegistry<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 注册新的Webhook，返回生成的ID
    pub async fn register(&self, target_url: &TargetUrl) -> Result<String, RegistryError> {
        let webhook = Webhook::new(target_url);
        let created = self.repo.create(&webhook).await?;
        info!("Registered webhook {} -> {}", created.id, created.target_url);
        Ok(created.id)
    }

    /// 列出全部Webhook
    pub async fn list(&self) -> Result<Vec<Webhook>, RegistryError> {
        let webhooks = self.repo.find_all().await?;
        debug!("Loaded {} webhooks", webhooks.len());
        Ok(webhooks)
    }

    /// 更新指定Webhook的目标URL
    pub async fn update(&self, id: &str, new_target_url: &TargetUrl) -> Result<(), RegistryError> {
        let affected = self
            .repo
            .update_target_url(id, new_target_url.as_str())
            .await?;

        if affected == 0 {
            return Err(RegistryError::NotFound(id.to_string()));
        }

        info!("Updated webhook {} -> {}", id, new_target_url);
        Ok(())
    }

    /// 删除指定Webhook
    pub async fn delete(&self, id: &str) -> Result<(), RegistryError> {
        let affected = self.repo.delete_by_id(id).await?;

        if affected == 0 {
            return Err(RegistryError::NotFound(id.to_string()));
        }

        info!("Deleted webhook {}", id);
        Ok(())
    }
}
