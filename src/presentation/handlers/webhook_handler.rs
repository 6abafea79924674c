// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::webhook::{TargetUrl, Webhook};
use crate::domain::repositories::webhook_repository::WebhookRepository;
use crate::domain::services::webhook_registry::WebhookRegistry;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::json_body::JsonBody;
use axum::extract::Path;
use axum::{http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterWebhookPayload {
    pub target_url: String,
}

#[derive(Serialize)]
pub struct RegisterWebhookResponse {
    pub id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebhookPayload {
    #[serde(alias = "ID")]
    pub id: String,
    pub new_target_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub id: String,
    pub target_url: String,
}

impl From<Webhook> for WebhookResponse {
    fn from(webhook: Webhook) -> Self {
        Self {
            id: webhook.id,
            target_url: webhook.target_url,
        }
    }
}

/// 注册Webhook
pub async fn register_webhook<R: WebhookRepository>(
    Extension(registry): Extension<Arc<WebhookRegistry<R>>>,
    JsonBody(payload): JsonBody<RegisterWebhookPayload>,
) -> Result<(StatusCode, Json<RegisterWebhookResponse>), AppError> {
    let target_url = TargetUrl::parse(&payload.target_url)?;
    let id = registry.register(&target_url).await?;
    Ok((StatusCode::CREATED, Json(RegisterWebhookResponse { id })))
}

/// 列出全部Webhook
pub async fn list_webhooks<R: WebhookRepository>(
    Extension(registry): Extension<Arc<WebhookRegistry<R>>>,
) -> Result<Json<Vec<WebhookResponse>>, AppError> {
    let webhooks = registry.list().await?;
    Ok(Json(webhooks.into_iter().map(Into::into).collect()))
}

/// 更新Webhook目标URL
pub async fn update_webhook<R: WebhookRepository>(
    Extension(registry): Extension<Arc<WebhookRegistry<R>>>,
    JsonBody(payload): JsonBody<UpdateWebhookPayload>,
) -> Result<StatusCode, AppError> {
    let target_url = TargetUrl::parse(&payload.new_target_url)?;
    registry.update(&payload.id, &target_url).await?;
    Ok(StatusCode::OK)
}

/// 删除Webhook
pub async fn delete_webhook<R: WebhookRepository>(
    Extension(registry): Extension<Arc<WebhookRegistry<R>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    registry.delete(&id).await?;
    Ok(StatusCode::OK)
}
