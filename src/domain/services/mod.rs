// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - Webhook注册表（webhook_registry）：注册、列出、更新和删除Webhook
/// - Webhook传输（webhook_transport）：出站POST的抽象接口
pub mod webhook_registry;
pub mod webhook_transport;
