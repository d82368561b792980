//! # 源图加载模块
//!
//! ## 设计思路
//!
//! 读取源文件并在完整解码前做资源检查：先看文件体积，再读 header 尺寸，
//! 最后才完整解码。降低异常输入触发高内存开销的风险。
//!
//! ## 实现思路
//!
//! 1. 检查文件存在与体积上限
//! 2. 猜测格式并读取 header 尺寸
//! 3. 按像素与内存上限快速拒绝
//! 4. 完整解码并确定 `PixelFormat`

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;

use super::{IconTransformer, SourceImage, TransformConfig, TransformError};

impl IconTransformer {
    /// 从本地路径加载并解码源图。
    pub fn load_source(&self, path: &Path) -> Result<SourceImage, TransformError> {
        log::debug!("📁 读取源图 - 路径: {}", path.display());

        let metadata = std::fs::metadata(path).map_err(|e| {
            TransformError::FileSystem(format!("无法读取文件信息 {}：{}", path.display(), e))
        })?;

        if metadata.len() > self.config.max_file_size {
            return Err(TransformError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                self.config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| TransformError::FileSystem(format!("无法读取图片文件：{}", e)))?;

        self.decode_source(&bytes)
    }

    /// 将内存中的图片字节解码为 `SourceImage`。
    pub fn decode_source(&self, bytes: &[u8]) -> Result<SourceImage, TransformError> {
        let format = image::guess_format(bytes)
            .map_err(|e| TransformError::InvalidFormat(format!("不支持的图片格式：{}", e)))?;

        let (header_width, header_height) = Self::inspect_dimensions(bytes)?;
        Self::validate_pixel_limits(&self.config, header_width, header_height)?;
        Self::validate_decoded_memory_limits(&self.config, header_width, header_height)?;

        let decoded = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| TransformError::Decode(format!("图片解码失败：{}", e)))?;

        let source = SourceImage::new(decoded);
        Self::validate_pixel_limits(&self.config, source.width(), source.height())?;

        log::debug!(
            "✅ 源图解码成功 - 格式: {:?} 尺寸: {}x{} 像素格式: {:?}",
            format,
            source.width(),
            source.height(),
            source.format()
        );

        Ok(source)
    }

    /// 仅通过图片头信息读取宽高。
    fn inspect_dimensions(bytes: &[u8]) -> Result<(u32, u32), TransformError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| TransformError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| TransformError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
    }

    fn validate_pixel_limits(
        config: &TransformConfig,
        width: u32,
        height: u32,
    ) -> Result<(), TransformError> {
        if width == 0 || height == 0 {
            return Err(TransformError::Decode(format!("源图尺寸为空：{}x{}", width, height)));
        }

        let pixels = u64::from(width) * u64::from(height);
        if pixels > config.max_decoded_pixels {
            return Err(TransformError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }

    fn validate_decoded_memory_limits(
        config: &TransformConfig,
        width: u32,
        height: u32,
    ) -> Result<(), TransformError> {
        let estimated = u64::from(width) * u64::from(height) * 4;

        if estimated > config.max_decoded_bytes {
            return Err(TransformError::ResourceLimit(format!(
                "图片解码预计内存过大：{:.2} MB（限制：{:.2} MB）",
                estimated as f64 / 1024.0 / 1024.0,
                config.max_decoded_bytes as f64 / 1024.0 / 1024.0
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::PixelFormat;
    use image::{DynamicImage, ImageBuffer, ImageFormat, LumaA, Rgb, Rgba};

    fn encode_png(image: DynamicImage) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        image
            .write_to(&mut cursor, ImageFormat::Png)
            .expect("failed to encode test image");
        cursor.into_inner()
    }

    #[test]
    fn decode_source_resolves_pixel_format() {
        let transformer = IconTransformer::new(TransformConfig::default());

        let rgb = encode_png(DynamicImage::ImageRgb8(ImageBuffer::from_pixel(
            4,
            3,
            Rgb([1, 2, 3]),
        )));
        let rgba = encode_png(DynamicImage::ImageRgba8(ImageBuffer::from_pixel(
            4,
            3,
            Rgba([1, 2, 3, 4]),
        )));
        let la = encode_png(DynamicImage::ImageLumaA8(ImageBuffer::from_pixel(
            4,
            3,
            LumaA([9, 0]),
        )));

        let rgb = transformer.decode_source(&rgb).expect("decode rgb failed");
        assert_eq!(rgb.format(), PixelFormat::Opaque);
        assert_eq!((rgb.width(), rgb.height()), (4, 3));

        let rgba = transformer.decode_source(&rgba).expect("decode rgba failed");
        assert_eq!(rgba.format(), PixelFormat::AlphaChannel);

        let la = transformer.decode_source(&la).expect("decode la failed");
        assert_eq!(la.format(), PixelFormat::LuminanceAlpha);
    }

    #[test]
    fn decode_source_rejects_non_image_payload() {
        let transformer = IconTransformer::new(TransformConfig::default());
        let result = transformer.decode_source(b"<html><body>not an image</body></html>");

        assert!(matches!(result, Err(TransformError::InvalidFormat(_))));
    }

    #[test]
    fn decode_source_enforces_pixel_limit_before_full_decode() {
        let config = TransformConfig {
            max_decoded_pixels: 100,
            ..TransformConfig::default()
        };
        let transformer = IconTransformer::new(config);
        let png = encode_png(DynamicImage::ImageRgb8(ImageBuffer::from_pixel(
            20,
            20,
            Rgb([0, 0, 0]),
        )));

        assert!(matches!(
            transformer.decode_source(&png),
            Err(TransformError::ResourceLimit(_))
        ));
    }

    #[test]
    fn load_source_reports_missing_file_as_filesystem_error() {
        let transformer = IconTransformer::new(TransformConfig::default());
        let dir = tempfile::tempdir().expect("tempdir failed");

        let result = transformer.load_source(&dir.path().join("missing.png"));

        assert!(matches!(result, Err(TransformError::FileSystem(_))));
    }

    #[test]
    fn load_source_enforces_file_size_limit() {
        let config = TransformConfig {
            max_file_size: 16,
            ..TransformConfig::default()
        };
        let transformer = IconTransformer::new(config);
        let dir = tempfile::tempdir().expect("tempdir failed");
        let path = dir.path().join("logo.png");
        let png = encode_png(DynamicImage::ImageRgb8(ImageBuffer::from_pixel(
            8,
            8,
            Rgb([0, 0, 0]),
        )));
        std::fs::write(&path, png).expect("write failed");

        assert!(matches!(
            transformer.load_source(&path),
            Err(TransformError::ResourceLimit(_))
        ));
    }
}
