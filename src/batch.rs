//! 批处理驱动模块
//!
//! # 设计思路
//!
//! 顺序遍历配置中的目标列表，每个目标独立产生 `Result`：
//! 单个目标失败只记录，不影响后续目标；只有源图缺失会在处理前终止。
//!
//! # 实现思路
//!
//! - 处理前记录输出文件的旧体积，处理后计算体积差。
//! - `run_with_progress` 在每个目标结束时回调，便于调用方即时输出。

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::icon::{IconTransformer, TargetSpec, TransformError};
use crate::settings::IconConfig;

/// 单个目标的处理结果。
#[derive(Debug)]
pub struct TargetReport {
    pub target: TargetSpec,
    pub output_path: PathBuf,
    /// 处理前同名文件的体积；`None` 表示新建。
    pub previous_bytes: Option<u64>,
    /// 成功时为写入的字节数。
    pub outcome: Result<u64, TransformError>,
}

impl TargetReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// 节省的字节数（旧体积 − 新体积），新建文件按旧体积 0 计算。
    ///
    /// 失败的目标没有体积变化，返回 `None`。
    pub fn saved_bytes(&self) -> Option<i64> {
        let written = *self.outcome.as_ref().ok()?;
        Some(self.previous_bytes.unwrap_or(0) as i64 - written as i64)
    }
}

/// 一次批处理的完整结果。
#[derive(Debug)]
pub struct BatchReport {
    pub source_path: PathBuf,
    pub source_bytes: u64,
    pub targets: Vec<TargetReport>,
}

impl BatchReport {
    /// 所有成功目标的节省字节数之和（负数表示总体积增加）。
    pub fn total_saved(&self) -> i64 {
        self.targets.iter().filter_map(TargetReport::saved_bytes).sum()
    }

    pub fn succeeded(&self) -> usize {
        self.targets.iter().filter(|t| t.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.targets.len() - self.succeeded()
    }
}

/// 确认源图存在并返回其体积。
pub fn inspect_source(config: &IconConfig) -> Result<u64, AppError> {
    let source_path = config.source_path();
    if !source_path.is_file() {
        return Err(AppError::MissingSource(source_path));
    }

    Ok(fs::metadata(&source_path)?.len())
}

pub fn run(config: &IconConfig) -> Result<BatchReport, AppError> {
    run_with_progress(config, |_| {})
}

/// 执行批处理，每个目标完成（无论成败）后调用 `on_target`。
pub fn run_with_progress<F>(config: &IconConfig, mut on_target: F) -> Result<BatchReport, AppError>
where
    F: FnMut(&TargetReport),
{
    config.validate()?;

    let source_path = config.source_path();
    let source_bytes = match inspect_source(config) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::error!("❌ {}", err);
            return Err(err);
        }
    };

    log::info!(
        "🎨 开始生成图标 - 源图: {} ({} bytes) 目标数: {}",
        source_path.display(),
        source_bytes,
        config.targets.len()
    );

    let transformer = IconTransformer::new(config.transform.clone());
    let mut reports = Vec::with_capacity(config.targets.len());

    for target in &config.targets {
        let report = process_target(&transformer, &source_path, target, config.output_path(target));
        on_target(&report);
        reports.push(report);
    }

    let batch = BatchReport {
        source_path,
        source_bytes,
        targets: reports,
    };

    log::info!(
        "🎉 图标生成结束 - 成功: {} 失败: {} 体积变化: {} bytes",
        batch.succeeded(),
        batch.failed(),
        -batch.total_saved()
    );

    Ok(batch)
}

fn process_target(
    transformer: &IconTransformer,
    source_path: &Path,
    target: &TargetSpec,
    output_path: PathBuf,
) -> TargetReport {
    let previous_bytes = fs::metadata(&output_path)
        .ok()
        .filter(|metadata| metadata.is_file())
        .map(|metadata| metadata.len());

    let outcome = transformer.render_to_file(source_path, target, &output_path);
    if let Err(err) = &outcome {
        log::error!("❌ {} 生成失败: {}", output_path.display(), err);
    }

    TargetReport {
        target: target.clone(),
        output_path,
        previous_bytes,
        outcome,
    }
}
