// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
/// 包括重试策略、遥测初始化和URL校验
pub mod retry_policy;
pub mod telemetry;
pub mod validators;
