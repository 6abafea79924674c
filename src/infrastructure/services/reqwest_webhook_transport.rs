// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::NotificationPayload;
use crate::domain::services::webhook_transport::{TransportError, WebhookTransport};
use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;

/// 基于 reqwest 的 Webhook 传输实现
///
/// 所有投递共享同一个 HTTP 客户端（连接池）。
#[derive(Clone)]
pub struct ReqwestWebhookTransport {
    /// HTTP 客户端
    client: Client,
}

impl ReqwestWebhookTransport {
    /// 创建新的传输实现
    pub fn new() -> Result<Self, reqwest::Error> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!(
                "hookcast-webhook/",
                env!("CARGO_PKG_VERSION")
            )),
        );
        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl WebhookTransport for ReqwestWebhookTransport {
    async fn post_json(
        &self,
        url: &str,
        payload: &NotificationPayload,
        timeout: Duration,
    ) -> Result<u16, TransportError> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .timeout(timeout)
            .send()
            .await
            .map_err(classify)?;

        Ok(response.status().as_u16())
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Request(err.to_string())
    }
}
