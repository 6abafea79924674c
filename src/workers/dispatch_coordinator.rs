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

use crate::domain::models::webhook::{NotificationPayload, Webhook};
use crate::domain::repositories::webhook_repository::WebhookRepository;
use crate::domain::services::webhook_registry::{RegistryError, WebhookRegistry};
use crate::domain::services::webhook_transport::WebhookTransport;
use crate::workers::delivery_worker::{DeliveryOutcome, DeliveryWorker};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, info_span, Instrument};

/// 分发回执
///
/// 所有投递流启动后立即返回。丢弃回执即让投递流在后台分离运行；
/// 需要等待结果时（例如测试）可以调用 [`DispatchReceipt::join`]。
#[derive(Debug)]
pub struct DispatchReceipt {
    /// 本次快照中的 Webhook 数量
    pub webhook_count: usize,
    streams: Vec<JoinHandle<()>>,
}

impl DispatchReceipt {
    /// 已启动的投递流数量
    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    /// 等待所有投递流结束
    pub async fn join(self) {
        for handle in self.streams {
            if let Err(e) = handle.await {
                error!("Delivery stream terminated abnormally: {}", e);
            }
        }
    }
}

/// 分发协调器
///
/// 读取注册表快照，按批次拆分，每个批次启动一个投递流。
/// 同一时刻在途的投递数量不超过 `max_streams`。
pub struct DispatchCoordinator<R, T>
where
    R: WebhookRepository + 'static,
    T: WebhookTransport + 'static,
{
    registry: Arc<WebhookRegistry<R>>,
    worker: Arc<DeliveryWorker<T>>,
    max_streams: usize,
}

impl<R, T> DispatchCoordinator<R, T>
where
    R: WebhookRepository + 'static,
    T: WebhookTransport + 'static,
{
    pub fn new(
        registry: Arc<WebhookRegistry<R>>,
        worker: Arc<DeliveryWorker<T>>,
        max_streams: usize,
    ) -> Self {
        Self {
            registry,
            worker,
            max_streams: max_streams.max(1),
        }
    }

    /// 触发一次通知
    ///
    /// 只有读取注册表失败时才会返回错误，投递失败不会影响返回值。
    ///
    /// # 参数
    ///
    /// * `ip_address` - 触发请求方的IP地址
    pub async fn trigger(&self, ip_address: &str) -> Result<DispatchReceipt, RegistryError> {
        let snapshot = self.registry.list().await?;
        let webhook_count = snapshot.len();
        let batches = partition(snapshot, self.max_streams);

        let streams: Vec<JoinHandle<()>> = batches
            .into_iter()
            .enumerate()
            .map(|(index, batch)| {
                let span = info_span!("delivery_stream", stream = index, size = batch.len());
                let worker = self.worker.clone();
                let ip_address = ip_address.to_string();
                tokio::spawn(run_stream(worker, batch, ip_address).instrument(span))
            })
            .collect();

        info!(
            "Triggered {} webhooks across {} delivery streams",
            webhook_count,
            streams.len()
        );

        Ok(DispatchReceipt {
            webhook_count,
            streams,
        })
    }
}

/// 将快照拆分为不超过 `max_streams` 个互不相交的批次
///
/// 批次大小为 `ceil(n / max_streams)`，保持快照中的原有顺序。
pub fn partition(webhooks: Vec<Webhook>, max_streams: usize) -> Vec<Vec<Webhook>> {
    if webhooks.is_empty() {
        return Vec::new();
    }

    let batch_size = webhooks.len().div_ceil(max_streams.max(1));
    let mut batches = Vec::new();
    let mut remaining = webhooks.into_iter().peekable();
    while remaining.peek().is_some() {
        batches.push(remaining.by_ref().take(batch_size).collect());
    }
    batches
}

/// 顺序投递一个批次：上一个 Webhook（含重试）结束后才开始下一个
async fn run_stream<T: WebhookTransport>(
    worker: Arc<DeliveryWorker<T>>,
    batch: Vec<Webhook>,
    ip_address: String,
) {
    let mut delivered = 0usize;
    let total = batch.len();

    for webhook in batch {
        let payload = NotificationPayload::now(ip_address.clone());
        if let DeliveryOutcome::Delivered { .. } = worker.deliver(&webhook.target_url, &payload).await
        {
            delivered += 1;
        }
    }

    debug!("Delivery stream finished: {}/{} delivered", delivered, total);
}
