// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::webhook_repository::WebhookRepository;
use crate::domain::services::webhook_transport::WebhookTransport;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::client_ip::ClientIp;
use crate::workers::dispatch_coordinator::DispatchCoordinator;
use axum::{http::StatusCode, Extension};
use std::sync::Arc;
use tracing::info;

/// 触发Webhook通知
///
/// 投递流在后台运行，回执在此处被丢弃，请求不会等待任何投递完成。
pub async fn trigger_webhooks<R, T>(
    Extension(coordinator): Extension<Arc<DispatchCoordinator<R, T>>>,
    ClientIp(ip): ClientIp,
) -> Result<StatusCode, AppError>
where
    R: WebhookRepository + 'static,
    T: WebhookTransport + 'static,
{
    let receipt = coordinator.trigger(&ip.to_string()).await?;
    info!(
        "Trigger from {} accepted for {} webhooks",
        ip, receipt.webhook_count
    );
    Ok(StatusCode::ACCEPTED)
}
