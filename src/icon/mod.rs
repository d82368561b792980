//! # 图标变换模块（icon）
//!
//! ## 设计思路
//!
//! 该模块将“读取源图 → 去透明 → 等比缩放 → 居中填充 → PNG 编码写入”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `config`：缩放滤镜与资源上限
//! - `error`：单目标错误类型
//! - `source`：`PixelFormat`、源图、目标与输出模型
//! - `loader`：文件读取与解码前资源校验
//! - `pipeline`：去透明、等比尺寸计算、缩放、填充
//! - `encoder`：PNG 编码与落盘
//! - `transformer`：统一编排 + 阶段耗时日志
//!
//! ## 调用链
//!
//! ```text
//! batch.rs（逐个目标，失败隔离）
//!    ↓
//! transformer.rs（render_to_file）
//!    ├─ loader.rs（读取 + 体积/像素限制 + 解码）
//!    ├─ pipeline.rs（flatten → fit_within → resample → pad_to）
//!    └─ encoder.rs（PNG Best 压缩 → 覆盖写入）
//!    ↓
//! Result<u64, TransformError>
//! ```

mod config;
mod encoder;
mod error;
mod loader;
mod pipeline;
mod source;
mod transformer;

pub use config::{TransformConfig, resize_filter_name};
pub use error::TransformError;
pub use pipeline::{BACKGROUND, centered_offset, fit_within};
pub use source::{OutputImage, PixelFormat, Placement, SourceImage, TargetSpec};

/// 图标变换器：无状态，按配置把源图渲染为固定尺寸的不透明 PNG。
pub struct IconTransformer {
    config: TransformConfig,
}
