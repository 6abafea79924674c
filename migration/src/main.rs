// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 主函数
///
/// 数据库迁移工具入口点。未设置 `DATABASE_URL` 时沿用服务本身的
/// `HOOKCAST__DATABASE__URL`，这样两者可以共用同一份环境配置。
#[async_std::main]
async fn main() {
    if std::env::var_os("DATABASE_URL").is_none() {
        if let Ok(url) = std::env::var("HOOKCAST__DATABASE__URL") {
            std::env::set_var("DATABASE_URL", url);
        }
    }

    cli::run_cli(migration::Migrator).await;
}
