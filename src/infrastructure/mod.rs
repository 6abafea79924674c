// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// 提供外部服务集成：数据库、出站HTTP和指标导出
pub mod database;
pub mod metrics;
pub mod repositories;
pub mod services;
