// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod echo_handler;
pub mod trigger_handler;
pub mod webhook_handler;
