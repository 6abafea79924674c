// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::extractors::json_body::JsonBody;
use axum::Json;
use serde_json::Value;
use tracing::info;

/// 测试接收端
///
/// 记录并原样返回请求体。把 `http://<host>:<port>/testing` 注册为Webhook，
/// 即可在本地观察触发后的投递内容。
pub async fn echo(JsonBody(body): JsonBody<Value>) -> Json<Value> {
    info!("Received webhook notification: {}", body);
    Json(body)
}
