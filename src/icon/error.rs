//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 单个目标图标的整条处理链路（读取 → 解码 → 变换 → 编码 → 写入）只产生一种错误类型。
//! 批处理驱动按目标收集 `Result<_, TransformError>`，失败不会中断后续目标。

/// 单个目标图标处理失败的原因。
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("解码错误：{0}")]
    Decode(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("缩放错误：{0}")]
    Resize(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("目标配置无效：{0}")]
    InvalidTarget(String),
}
