// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::errors::AppError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use thiserror::Error;

/// 请求体无法解析为期望的JSON结构
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid request body: {0}")]
pub struct InvalidBody(pub String);

/// JSON请求体提取器
///
/// 与 `Json<T>` 相同，但解析失败时返回 400 和 `{"error": ...}`，
/// 与其他错误的响应格式保持一致。
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(InvalidBody(rejection.body_text()).into()),
        }
    }
}
