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

use crate::domain::models::webhook::NotificationPayload;
use crate::domain::services::webhook_transport::{TransportError, WebhookTransport};
use crate::utils::retry_policy::RetryPolicy;
use metrics::{counter, histogram};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, error, warn};

/// 单次尝试失败的原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    /// 远端返回了非 200 状态码
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),
    /// 没有收到响应
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// 重试次数耗尽后的投递失败
///
/// 只记录到日志和指标，不会返回给触发方。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("delivery to {target_url} failed after {attempts} attempts: {last_error}")]
pub struct DeliveryFailure {
    pub target_url: String,
    pub attempts: u32,
    pub last_error: AttemptError,
}

/// 单个 Webhook 的投递结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// 第 `attempts` 次尝试收到 200
    Delivered { attempts: u32 },
    /// 所有尝试均失败
    Exhausted(DeliveryFailure),
}

/// 投递工作器
///
/// 负责向单个目标地址投递一条通知，并拥有该目标的重试循环。
pub struct DeliveryWorker<T: WebhookTransport> {
    /// 出站传输
    transport: Arc<T>,
    /// 重试策略
    policy: RetryPolicy,
    /// 单次请求超时
    request_timeout: Duration,
}

impl<T: WebhookTransport> DeliveryWorker<T> {
    /// 创建新的投递工作器实例
    ///
    /// # 参数
    ///
    /// * `transport` - 出站传输
    /// * `policy` - 重试策略
    /// * `request_timeout` - 单次请求超时，超时计为一次失败的尝试
    pub fn new(transport: Arc<T>, policy: RetryPolicy, request_timeout: Duration) -> Self {
        Self {
            transport,
            policy,
            request_timeout,
        }
    }

    /// 投递通知
    ///
    /// 只有 HTTP 200 算作成功。失败后等待固定间隔再试，
    /// 直到达到最大尝试次数。结果永远不会以错误的形式返回。
    pub async fn deliver(&self, target_url: &str, payload: &NotificationPayload) -> DeliveryOutcome {
        let mut attempt = 0;

        loop {
            attempt += 1;
            counter!("webhook_delivery_attempts_total").increment(1);

            let start = Instant::now();
            let result = self
                .transport
                .post_json(target_url, payload, self.request_timeout)
                .await;
            histogram!("webhook_delivery_duration_seconds").record(start.elapsed().as_secs_f64());

            let failure = match result {
                Ok(200) => {
                    debug!("Webhook {} delivered on attempt {}", target_url, attempt);
                    counter!("webhook_delivery_success_total").increment(1);
                    return DeliveryOutcome::Delivered { attempts: attempt };
                }
                Ok(status) => {
                    counter!("webhook_delivery_failed_total", "reason" => "http_error").increment(1);
                    AttemptError::UnexpectedStatus(status)
                }
                Err(e) => {
                    counter!("webhook_delivery_failed_total", "reason" => "network_error")
                        .increment(1);
                    AttemptError::Transport(e)
                }
            };

            warn!("{} has failed {} times: {}", target_url, attempt, failure);

            if !self.policy.should_retry(attempt) {
                let failure = DeliveryFailure {
                    target_url: target_url.to_string(),
                    attempts: attempt,
                    last_error: failure,
                };
                error!("{}", failure);
                counter!("webhook_delivery_exhausted_total").increment(1);
                return DeliveryOutcome::Exhausted(failure);
            }

            sleep(self.policy.delay()).await;
        }
    }
}
