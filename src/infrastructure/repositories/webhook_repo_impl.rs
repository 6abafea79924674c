// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::Webhook;
use crate::domain::repositories::webhook_repository::{RepositoryError, WebhookRepository};
use crate::infrastructure::database::entities::webhook;
use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::sync::Arc;

/// Webhook仓库实现
#[derive(Clone)]
pub struct WebhookRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl WebhookRepoImpl {
    /// 创建新的Webhook仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WebhookRepository for WebhookRepoImpl {
    async fn create(&self, webhook: &Webhook) -> Result<Webhook, RepositoryError> {
        let model = webhook::ActiveModel {
            id: Set(webhook.id.clone()),
            target_url: Set(webhook.target_url.clone()),
            created_at: Set(webhook.created_at.into()),
        };

        webhook::Entity::insert(model)
            .exec_without_returning(self.db.as_ref())
            .await?;
        Ok(webhook.clone())
    }

    async fn find_all(&self) -> Result<Vec<Webhook>, RepositoryError> {
        let models = webhook::Entity::find()
            .order_by_asc(webhook::Column::CreatedAt)
            .order_by_asc(webhook::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update_target_url(&self, id: &str, target_url: &str) -> Result<u64, RepositoryError> {
        let result = webhook::Entity::update_many()
            .col_expr(webhook::Column::TargetUrl, Expr::value(target_url))
            .filter(webhook::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64, RepositoryError> {
        let result = webhook::Entity::delete_many()
            .filter(webhook::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected)
    }
}

impl From<webhook::Model> for Webhook {
    fn from(model: webhook::Model) -> Self {
        Self {
            id: model.id,
            target_url: model.target_url,
            created_at: model.created_at.into(),
        }
    }
}
