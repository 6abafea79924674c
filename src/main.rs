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

use axum::Extension;
use hookcast::config::settings::Settings;
use hookcast::domain::services::webhook_registry::WebhookRegistry;
use hookcast::infrastructure::database::connection;
use hookcast::infrastructure::repositories::webhook_repo_impl::WebhookRepoImpl;
use hookcast::infrastructure::services::reqwest_webhook_transport::ReqwestWebhookTransport;
use hookcast::presentation::routes;
use hookcast::workers::{DeliveryWorker, DispatchCoordinator};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use hookcast::utils::telemetry;
use migration::{Migrator, MigratorTrait};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting hookcast...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    hookcast::infrastructure::metrics::init_metrics(&settings.metrics)?;

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize Components
    let webhook_repository = Arc::new(WebhookRepoImpl::new(db.clone()));
    let registry = Arc::new(WebhookRegistry::new(webhook_repository));

    let transport = Arc::new(ReqwestWebhookTransport::new()?);
    let worker = Arc::new(DeliveryWorker::new(
        transport,
        settings.dispatch.retry_policy(),
        settings.dispatch.request_timeout(),
    ));
    let coordinator = Arc::new(DispatchCoordinator::new(
        registry.clone(),
        worker,
        settings.dispatch.max_streams,
    ));
    info!(
        "Dispatch configured: {} streams, {} attempts, {}ms retry delay",
        settings.dispatch.max_streams,
        settings.dispatch.max_attempts,
        settings.dispatch.retry_delay_ms
    );

    // 5. Start HTTP server
    let app = routes::routes()
        .layer(Extension(registry))
        .layer(Extension(coordinator))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
