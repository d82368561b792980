//! # 图标优化工具：命令行入口
//!
//! 用法：`icon-optimizer`（处理 `assets/arld-logo.png`，无命令行参数）
//!
//! 本文件仅负责日志初始化、配置校验与报告输出。
//! 处理逻辑见 `lib.rs` 架构文档。

use icon_optimizer::error::AppError;
use icon_optimizer::settings::IconConfig;
use icon_optimizer::{batch, report};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = IconConfig::default();
    if let Err(err) = config.validate() {
        log::error!("配置无效: {err}");
        println!("❌ {err}");
        return;
    }

    let source_bytes = match batch::inspect_source(&config) {
        Ok(bytes) => bytes,
        Err(AppError::MissingSource(path)) => {
            println!("❌ 找不到源图: {}", path.display());
            return;
        }
        Err(err) => {
            println!("❌ {err}");
            return;
        }
    };

    for line in report::header_lines(&config.source_path(), source_bytes) {
        println!("{line}");
    }

    let result = batch::run_with_progress(&config, |target| {
        for line in report::target_lines(target) {
            println!("{line}");
        }
    });

    match result {
        Ok(batch_report) => {
            for line in report::summary_lines(&batch_report, &config.targets) {
                println!("{line}");
            }
        }
        Err(err) => println!("❌ {err}"),
    }
}
