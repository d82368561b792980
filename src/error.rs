//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 区分两类失败：
//! - 启动阶段失败（源图缺失、配置无效）：报告一次，不处理任何目标。
//! - 单个目标失败（`TransformError`）：由批处理驱动记录后继续下一个目标。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 单目标的 `TransformError` 留在 `TargetReport` 中，不上升为 `AppError`。
//! - 为 `std::io::Error` 提供 `From` 转换，无需手动 map。

use std::path::PathBuf;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 配置的源图路径不存在
    #[error("找不到源图: {}", .0.display())]
    MissingSource(PathBuf),

    /// 注入的配置未通过校验
    #[error("配置错误: {0}")]
    Config(String),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),
}
