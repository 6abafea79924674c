// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Method, Request, StatusCode},
    Extension, Router,
};
use hookcast::config::settings::DatabaseSettings;
use hookcast::domain::services::webhook_registry::WebhookRegistry;
use hookcast::infrastructure::database::connection;
use hookcast::infrastructure::repositories::webhook_repo_impl::WebhookRepoImpl;
use hookcast::infrastructure::services::reqwest_webhook_transport::ReqwestWebhookTransport;
use hookcast::presentation::routes;
use hookcast::utils::retry_policy::RetryPolicy;
use hookcast::workers::{DeliveryWorker, DispatchCoordinator};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub db_pool: Arc<DatabaseConnection>,
    pub registry: Arc<WebhookRegistry<WebhookRepoImpl>>,
}

/// 创建内存SQLite数据库并执行迁移
pub async fn create_test_db() -> Arc<DatabaseConnection> {
    let db_settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: None,
        min_connections: None,
        connect_timeout: None,
        idle_timeout: None,
    };

    let db_pool = Arc::new(
        connection::create_pool(&db_settings)
            .await
            .expect("Failed to connect to database"),
    );
    Migrator::up(db_pool.as_ref(), None).await.unwrap();
    db_pool
}

pub async fn create_test_app() -> TestApp {
    // Short delay keeps retry-heavy scenarios fast
    create_test_app_with_policy(RetryPolicy::fixed(5, Duration::from_millis(10))).await
}

pub async fn create_test_app_with_policy(policy: RetryPolicy) -> TestApp {
    let db_pool = create_test_db().await;

    let webhook_repository = Arc::new(WebhookRepoImpl::new(db_pool.clone()));
    let registry = Arc::new(WebhookRegistry::new(webhook_repository));

    let transport = Arc::new(ReqwestWebhookTransport::new().unwrap());
    let worker = Arc::new(DeliveryWorker::new(
        transport,
        policy,
        Duration::from_secs(2),
    ));
    let coordinator = Arc::new(DispatchCoordinator::new(registry.clone(), worker, 10));

    let router = routes::routes()
        .layer(Extension(registry.clone()))
        .layer(Extension(coordinator));

    TestApp {
        router,
        db_pool,
        registry,
    }
}

impl TestApp {
    /// 发送一个请求并返回状态码和解析后的JSON体（空体为 `Value::Null`）
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    /// 以指定来源地址调用触发端点
    pub async fn trigger_from(&self, peer: SocketAddr) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/ip")
            .extension(ConnectInfo(peer))
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }
}
