//! # 变换配置模块
//!
//! ## 设计思路
//!
//! 将“可调参数”集中到 `TransformConfig`：重采样滤镜与读取/解码资源上限。
//! 尺寸策略固定（只缩小、不放大，居中填充），不在配置中暴露。
//!
//! ## 实现思路
//!
//! - `Default` 提供高质量缩放（Lanczos3）与保守的资源上限。
//! - `resize_filter_name` 输出滤镜的稳定名称，用于日志。

use image::imageops::FilterType;

/// 单次变换使用的参数。
#[derive(Debug, Clone)]
pub struct TransformConfig {
    /// 缩放滤镜。
    ///
    /// 实际缩放由 `fast_image_resize` 完成，`Gaussian` 没有对应卷积核，按 Mitchell 执行；
    /// 仅在回退到 `image::imageops::resize` 时才是真正的高斯滤镜。
    pub resize_filter: FilterType,
    /// 源文件允许的最大体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 解码阶段允许的预计内存上限（按 RGBA 估算，字节）。
    pub max_decoded_bytes: u64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            resize_filter: FilterType::Lanczos3,
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
            max_decoded_bytes: 160 * 1024 * 1024,
        }
    }
}

/// 滤镜的稳定名称，反映实际使用的卷积核。
pub fn resize_filter_name(filter: FilterType) -> &'static str {
    match filter {
        FilterType::Lanczos3 => "lanczos3",
        FilterType::CatmullRom => "catmull-rom",
        FilterType::Gaussian => "mitchell (gaussian)",
        FilterType::Triangle => "triangle",
        FilterType::Nearest => "nearest",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_lanczos3() {
        let config = TransformConfig::default();
        assert_eq!(config.resize_filter, FilterType::Lanczos3);
        assert_eq!(resize_filter_name(config.resize_filter), "lanczos3");
    }

    #[test]
    fn gaussian_name_reports_mitchell_substitution() {
        assert_eq!(resize_filter_name(FilterType::Gaussian), "mitchell (gaussian)");
    }
}
