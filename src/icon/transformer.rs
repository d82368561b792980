//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconTransformer` 只负责流程编排，本身无可变状态，可在多个目标之间复用。
//! 处理链路固定为：
//! 1. 加载并解码源图
//! 2. 去除透明度（白底合成）
//! 3. 等比缩放到目标框内
//! 4. 居中填充到目标尺寸
//! 5. PNG 编码并写入
//!
//! ## 实现思路
//!
//! - `transform` 是纯变换：相同源图与尺寸得到逐像素相同的输出。
//! - `render_to_file` 在单个目标作用域内打开源图，结束时释放，不跨目标共享。
//! - 记录 `load/transform/encode/write/total` 阶段耗时，便于性能诊断。

use std::path::Path;
use std::time::Instant;

use super::{
    IconTransformer, OutputImage, SourceImage, TargetSpec, TransformConfig, TransformError,
    fit_within, resize_filter_name,
};
use super::pipeline::ensure_target_size;

impl IconTransformer {
    /// 根据配置创建变换器。
    ///
    /// # 示例
    /// ```rust
    /// use icon_optimizer::icon::{IconTransformer, TransformConfig};
    ///
    /// let transformer = IconTransformer::new(TransformConfig::default());
    /// assert_eq!(transformer.config().resize_filter, image::imageops::FilterType::Lanczos3);
    /// ```
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// 将源图变换为尺寸恰好为 `target` 的不透明 RGB 画布。
    ///
    /// # 示例
    /// ```rust
    /// use icon_optimizer::icon::{IconTransformer, SourceImage, TransformConfig};
    /// use image::{DynamicImage, Rgba, RgbaImage};
    ///
    /// let source = SourceImage::new(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
    ///     200,
    ///     100,
    ///     Rgba([0, 0, 0, 0]),
    /// )));
    /// let transformer = IconTransformer::new(TransformConfig::default());
    /// let output = transformer.transform(&source, (64, 64))?;
    /// assert_eq!(output.dimensions(), (64, 64));
    /// # Ok::<(), icon_optimizer::icon::TransformError>(())
    /// ```
    pub fn transform(
        &self,
        source: &SourceImage,
        target: (u32, u32),
    ) -> Result<OutputImage, TransformError> {
        let (target_width, target_height) = target;
        if target_width == 0 || target_height == 0 {
            return Err(TransformError::InvalidTarget(format!(
                "目标尺寸必须大于 0（当前：{}x{}）",
                target_width, target_height
            )));
        }

        let flattened = Self::flatten(source);

        let (fit_width, fit_height) = fit_within(flattened.dimensions(), target);

        log::debug!(
            "🧩 缩放：{}x{} -> {}x{}（filter={}）",
            source.width(),
            source.height(),
            fit_width,
            fit_height,
            resize_filter_name(self.config.resize_filter)
        );

        let resized = Self::resample(flattened, fit_width, fit_height, self.config.resize_filter);
        let (canvas, placement) = Self::pad_to(resized, target);

        ensure_target_size(canvas.dimensions(), target)?;

        Ok(OutputImage { canvas, placement })
    }

    /// 处理单个目标：读取源图 → 变换 → 编码 → 写入，返回写入的字节数。
    pub fn render_to_file(
        &self,
        source_path: &Path,
        target: &TargetSpec,
        output_path: &Path,
    ) -> Result<u64, TransformError> {
        target.validate()?;
        let total_start = Instant::now();

        let load_start = Instant::now();
        let source = self.load_source(source_path)?;
        let load_elapsed = load_start.elapsed();

        let transform_start = Instant::now();
        let output = self.transform(&source, target.size())?;
        let transform_elapsed = transform_start.elapsed();
        drop(source);

        let encode_start = Instant::now();
        let bytes = Self::encode_png(&output)?;
        let encode_elapsed = encode_start.elapsed();

        let write_start = Instant::now();
        let written = Self::write_output(output_path, &bytes)?;
        let write_elapsed = write_start.elapsed();

        log::info!(
            "✅ {} 处理完成 - {}x{} 内容区: {}x{}@({},{}) load={}ms transform={}ms encode={}ms write={}ms total={}ms",
            target.name,
            target.width,
            target.height,
            output.placement().content_width,
            output.placement().content_height,
            output.placement().x,
            output.placement().y,
            load_elapsed.as_millis(),
            transform_elapsed.as_millis(),
            encode_elapsed.as_millis(),
            write_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(written)
    }
}
