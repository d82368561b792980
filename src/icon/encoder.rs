//! # 编码与写入模块
//!
//! ## 设计思路
//!
//! 先在内存中完成 PNG 编码，成功后再覆盖目标文件。
//! 编码失败时磁盘上的旧文件保持原样。
//!
//! ## 实现思路
//!
//! - 使用 `CompressionType::Best` + 自适应行过滤，只影响体积，不影响像素。
//! - 输出固定为 `Rgb8`，保证写出的 PNG 不含 alpha 通道。

use std::path::Path;

use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};

use super::{IconTransformer, OutputImage, TransformError};

impl IconTransformer {
    /// 以最大压缩率将输出画布编码为 PNG 字节。
    pub fn encode_png(output: &OutputImage) -> Result<Vec<u8>, TransformError> {
        let (width, height) = output.dimensions();
        let mut bytes = Vec::new();

        PngEncoder::new_with_quality(&mut bytes, CompressionType::Best, PngFilterType::Adaptive)
            .write_image(output.as_rgb().as_raw(), width, height, ExtendedColorType::Rgb8)
            .map_err(|e| TransformError::Encode(format!("PNG 编码失败：{}", e)))?;

        Ok(bytes)
    }

    /// 将编码好的字节写入目标路径（覆盖已有文件），返回写入的字节数。
    pub(crate) fn write_output(path: &Path, bytes: &[u8]) -> Result<u64, TransformError> {
        std::fs::write(path, bytes).map_err(|e| {
            TransformError::FileSystem(format!("无法写入 {}：{}", path.display(), e))
        })?;

        Ok(bytes.len() as u64)
    }
}
