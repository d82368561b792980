//! # 变换流水线模块
//!
//! ## 设计思路
//!
//! 把“源图 → 不透明 RGB → 等比缩放 → 居中填充”拆成几个纯函数阶段，
//! 每个阶段只依赖输入与配置，保证相同输入得到逐像素相同的输出。
//!
//! ## 实现思路
//!
//! 1. 按 `PixelFormat` 分派：带 alpha 的源图以 alpha 为蒙版合成到白底
//! 2. 计算落在目标框内的等比尺寸（只缩小，不放大）
//! 3. `fast_image_resize` 卷积缩放，失败时回退 `image::imageops::resize`
//! 4. 尺寸不等于目标时，粘贴到白色画布中央

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{ImageBuffer, Rgb, RgbImage};

use super::{IconTransformer, Placement, PixelFormat, SourceImage, TransformError};

/// 填充与合成使用的背景色。
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// 计算 `(width, height)` 在 `(max_width, max_height)` 框内的等比尺寸。
///
/// 起决定作用的一边恰好等于边界，另一边四舍五入并限制在 `[1, 边界]`。
/// 已经放得下的图片保持原尺寸，从不放大。
///
/// # 示例
/// ```rust
/// use icon_optimizer::icon::fit_within;
///
/// assert_eq!(fit_within((2000, 1000), (1024, 1024)), (1024, 512));
/// assert_eq!(fit_within((32, 16), (64, 64)), (32, 16));
/// ```
pub fn fit_within(source: (u32, u32), bound: (u32, u32)) -> (u32, u32) {
    let (width, height) = source;
    let (max_width, max_height) = bound;

    if width == 0 || height == 0 || max_width == 0 || max_height == 0 {
        return (max_width, max_height);
    }

    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let (w, h) = (u64::from(width), u64::from(height));
    let (bw, bh) = (u64::from(max_width), u64::from(max_height));

    if bw * h <= bh * w {
        let scaled = (2 * h * bw + w) / (2 * w);
        (max_width, scaled.clamp(1, bh) as u32)
    } else {
        let scaled = (2 * w * bh + h) / (2 * h);
        (scaled.clamp(1, bw) as u32, max_height)
    }
}

/// 将 `content` 居中放入 `canvas` 时左上角的偏移（每个轴独立向下取整）。
pub fn centered_offset(canvas: (u32, u32), content: (u32, u32)) -> (u32, u32) {
    (
        canvas.0.saturating_sub(content.0) / 2,
        canvas.1.saturating_sub(content.1) / 2,
    )
}

/// 校验最终画布尺寸等于目标尺寸。
pub(crate) fn ensure_target_size(
    actual: (u32, u32),
    target: (u32, u32),
) -> Result<(), TransformError> {
    if actual != target {
        return Err(TransformError::Resize(format!(
            "输出尺寸异常：{}x{}（期望：{}x{}）",
            actual.0, actual.1, target.0, target.1
        )));
    }
    Ok(())
}

impl IconTransformer {
    /// 去除透明度：带 alpha 的源图合成到白色背景上，其余直接转为 RGB。
    pub(crate) fn flatten(source: &SourceImage) -> RgbImage {
        match source.format() {
            PixelFormat::Opaque => source.image.to_rgb8(),
            PixelFormat::AlphaChannel | PixelFormat::LuminanceAlpha => {
                let rgba = source.image.to_rgba8();
                ImageBuffer::from_fn(rgba.width(), rgba.height(), |x, y| {
                    let [r, g, b, a] = rgba.get_pixel(x, y).0;
                    Rgb([
                        blend_over_background(r, a, BACKGROUND[0]),
                        blend_over_background(g, a, BACKGROUND[1]),
                        blend_over_background(b, a, BACKGROUND[2]),
                    ])
                })
            }
        }
    }

    /// 缩放到指定尺寸；尺寸未变化时原样返回。
    pub(crate) fn resample(
        image: RgbImage,
        target_width: u32,
        target_height: u32,
        filter: FilterType,
    ) -> RgbImage {
        if image.dimensions() == (target_width, target_height) {
            return image;
        }

        match Self::resize_with_fast_image_resize(&image, target_width, target_height, filter) {
            Ok(resized) => resized,
            Err(err) => {
                log::warn!("⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}", err);
                image::imageops::resize(&image, target_width, target_height, filter)
            }
        }
    }

    /// 居中填充到目标尺寸；尺寸已一致时不分配新画布。
    pub(crate) fn pad_to(content: RgbImage, target: (u32, u32)) -> (RgbImage, Placement) {
        let (content_width, content_height) = content.dimensions();
        let (x, y) = centered_offset(target, (content_width, content_height));
        let placement = Placement {
            x,
            y,
            content_width,
            content_height,
        };

        if content.dimensions() == target {
            return (content, placement);
        }

        let mut canvas = RgbImage::from_pixel(target.0, target.1, BACKGROUND);
        image::imageops::overlay(&mut canvas, &content, i64::from(x), i64::from(y));
        (canvas, placement)
    }

    fn resize_with_fast_image_resize(
        image: &RgbImage,
        target_width: u32,
        target_height: u32,
        filter: FilterType,
    ) -> Result<RgbImage, TransformError> {
        let (src_width, src_height) = image.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            image.as_raw().clone(),
            fr::PixelType::U8x3,
        )
        .map_err(|e| TransformError::Resize(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image =
            fr::images::Image::new(target_width, target_height, fr::PixelType::U8x3);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(Self::to_fast_filter(filter)));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| TransformError::Resize(format!("fast_image_resize 执行失败：{}", e)))?;

        ImageBuffer::<Rgb<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
            .ok_or_else(|| {
                TransformError::Resize("fast_image_resize 输出缓冲长度异常".to_string())
            })
    }

    /// `fast_image_resize` 没有高斯核，`Gaussian` 按 Mitchell 执行。
    fn to_fast_filter(filter: FilterType) -> fr::FilterType {
        match filter {
            FilterType::Nearest => fr::FilterType::Box,
            FilterType::Triangle => fr::FilterType::Bilinear,
            FilterType::CatmullRom => fr::FilterType::CatmullRom,
            FilterType::Gaussian => fr::FilterType::Mitchell,
            FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}

/// `channel * a + background * (255 - a)`，按 255 归一并四舍五入。
fn blend_over_background(channel: u8, alpha: u8, background: u8) -> u8 {
    let (c, a, bg) = (u32::from(channel), u32::from(alpha), u32::from(background));
    ((c * a + bg * (255 - a) + 127) / 255) as u8
}
