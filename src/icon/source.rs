//! # 数据模型
//!
//! ## 设计思路
//!
//! 将“输入语义”和“流水线中间结果”解耦：
//! - `SourceImage` 表示已解码的原始图片，只读
//! - `TargetSpec` 表示一个命名的输出尺寸
//! - `OutputImage` 表示填充完成、完全不透明的 RGB 画布

use image::{ColorType, DynamicImage, RgbImage};

use super::TransformError;

/// 源图的像素格式分类，在解码时确定一次。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 无透明通道（RGB、灰度等）。
    Opaque,
    /// 带 alpha 通道的彩色图（RGBA）。
    AlphaChannel,
    /// 带 alpha 通道的灰度图（LA）。
    LuminanceAlpha,
}

impl PixelFormat {
    pub fn from_color_type(color: ColorType) -> Self {
        match color {
            ColorType::La8 | ColorType::La16 => Self::LuminanceAlpha,
            other if other.has_alpha() => Self::AlphaChannel,
            _ => Self::Opaque,
        }
    }
}

/// 已解码的源图。
pub struct SourceImage {
    pub(crate) image: DynamicImage,
    pub(crate) format: PixelFormat,
}

impl SourceImage {
    pub fn new(image: DynamicImage) -> Self {
        let format = PixelFormat::from_color_type(image.color());
        Self { image, format }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }
}

/// 输出目标：文件名 + 画布尺寸。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl TargetSpec {
    /// 创建并校验目标。
    ///
    /// 宽高必须大于 0，文件名必须是不含目录、首尾无空白的 `.png` 文件名。
    ///
    /// # 示例
    /// ```rust
    /// use icon_optimizer::icon::TargetSpec;
    ///
    /// let target = TargetSpec::new("favicon.png", 64, 64)?;
    /// assert_eq!(target.size(), (64, 64));
    /// # Ok::<(), icon_optimizer::icon::TransformError>(())
    /// ```
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Result<Self, TransformError> {
        let target = Self {
            name: name.into(),
            width,
            height,
        };
        target.validate()?;
        Ok(target)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn validate(&self) -> Result<(), TransformError> {
        if self.width == 0 || self.height == 0 {
            return Err(TransformError::InvalidTarget(format!(
                "{} 的尺寸必须大于 0（当前：{}x{}）",
                self.name, self.width, self.height
            )));
        }

        let name = self.name.as_str();
        if name.trim() != name {
            return Err(TransformError::InvalidTarget(format!(
                "文件名首尾不能有空白：{:?}",
                self.name
            )));
        }
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(TransformError::InvalidTarget(format!(
                "文件名只能是不含目录的名称：{:?}",
                self.name
            )));
        }

        if !name.to_ascii_lowercase().ends_with(".png") {
            return Err(TransformError::InvalidTarget(format!(
                "仅支持输出 PNG：{}",
                self.name
            )));
        }

        Ok(())
    }
}

/// 缩放结果在画布中的摆放位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub content_width: u32,
    pub content_height: u32,
}

/// 变换输出：尺寸恰好等于目标尺寸的不透明 RGB 画布。
pub struct OutputImage {
    pub(crate) canvas: RgbImage,
    pub(crate) placement: Placement,
}

impl OutputImage {
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_format_is_resolved_from_color_type() {
        assert_eq!(PixelFormat::from_color_type(ColorType::Rgb8), PixelFormat::Opaque);
        assert_eq!(PixelFormat::from_color_type(ColorType::L16), PixelFormat::Opaque);
        assert_eq!(PixelFormat::from_color_type(ColorType::Rgba8), PixelFormat::AlphaChannel);
        assert_eq!(PixelFormat::from_color_type(ColorType::Rgba32F), PixelFormat::AlphaChannel);
        assert_eq!(PixelFormat::from_color_type(ColorType::La8), PixelFormat::LuminanceAlpha);
        assert_eq!(PixelFormat::from_color_type(ColorType::La16), PixelFormat::LuminanceAlpha);
    }

    #[test]
    fn target_spec_rejects_zero_dimensions() {
        assert!(matches!(
            TargetSpec::new("icon.png", 0, 64),
            Err(TransformError::InvalidTarget(_))
        ));
        assert!(matches!(
            TargetSpec::new("icon.png", 64, 0),
            Err(TransformError::InvalidTarget(_))
        ));
    }

    #[test]
    fn target_spec_rejects_paths_and_non_png_names() {
        assert!(TargetSpec::new("../icon.png", 64, 64).is_err());
        assert!(TargetSpec::new("nested/icon.png", 64, 64).is_err());
        assert!(TargetSpec::new("icon.jpg", 64, 64).is_err());
        assert!(TargetSpec::new("", 64, 64).is_err());
        assert!(TargetSpec::new("Icon.PNG", 64, 64).is_ok());
    }

    #[test]
    fn target_spec_rejects_surrounding_whitespace() {
        for name in [" icon.png", "icon.png ", "\ticon.png", "   "] {
            assert!(
                matches!(TargetSpec::new(name, 64, 64), Err(TransformError::InvalidTarget(_))),
                "{name:?} should be rejected"
            );
        }
        assert!(TargetSpec::new("app icon.png", 64, 64).is_ok());
    }
}
