// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::repositories::webhook_repo_impl::WebhookRepoImpl;
use crate::infrastructure::services::reqwest_webhook_transport::ReqwestWebhookTransport;
use crate::presentation::handlers::{echo_handler, trigger_handler, webhook_handler};
use axum::{
    routing::{delete, get, post, put},
    Router,
};

/// 创建应用路由
///
/// 处理器通过 `Extension` 取得 `Arc<WebhookRegistry<WebhookRepoImpl>>` 和
/// `Arc<DispatchCoordinator<WebhookRepoImpl, ReqwestWebhookTransport>>`，
/// 调用方负责挂载这两个扩展层。
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/testing", post(echo_handler::echo));

    let admin_routes = Router::new()
        .route(
            "/admin/register",
            post(webhook_handler::register_webhook::<WebhookRepoImpl>),
        )
        .route(
            "/admin/list",
            get(webhook_handler::list_webhooks::<WebhookRepoImpl>),
        )
        .route(
            "/admin/update",
            put(webhook_handler::update_webhook::<WebhookRepoImpl>),
        )
        .route(
            "/admin/delete/{id}",
            delete(webhook_handler::delete_webhook::<WebhookRepoImpl>),
        );

    let trigger_routes = Router::new().route(
        "/ip",
        get(trigger_handler::trigger_webhooks::<WebhookRepoImpl, ReqwestWebhookTransport>),
    );

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .merge(trigger_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
