// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 提供Webhook后台投递功能
/// 包括单目标投递重试和分批并发分发
pub mod delivery_worker;
pub mod dispatch_coordinator;

pub use delivery_worker::DeliveryWorker;
pub use dispatch_coordinator::DispatchCoordinator;
