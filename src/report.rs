//! 控制台报告模块
//!
//! 将批处理结果渲染为面向用户的文本行（非机器可读格式）。
//! 只负责格式化，输出由调用方决定。

use bytesize::ByteSize;

use crate::batch::{BatchReport, TargetReport};
use crate::icon::TargetSpec;

/// `1234567` → `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `12,345 bytes (12.3 KB)`
pub fn format_bytes(bytes: u64) -> String {
    format!("{} bytes ({})", group_thousands(bytes), ByteSize(bytes))
}

pub fn header_lines(source_path: &std::path::Path, source_bytes: u64) -> Vec<String> {
    vec![
        "🎨 图标优化开始...".to_string(),
        String::new(),
        format!("📁 源图: {}", source_path.display()),
        format!("📊 源图大小: {}", format_bytes(source_bytes)),
        String::new(),
    ]
}

/// 单个目标的报告：旧文件、结果、体积差。
pub fn target_lines(report: &TargetReport) -> Vec<String> {
    let mut lines = Vec::new();
    let name = &report.target.name;

    match report.previous_bytes {
        Some(bytes) => lines.push(format!("📋 已有 {}: {}", name, format_bytes(bytes))),
        None => lines.push(format!("📋 新建 {}", name)),
    }

    match &report.outcome {
        Ok(written) => {
            lines.push(format!(
                "✅ {} 生成完成 ({}x{})",
                report.output_path.display(),
                report.target.width,
                report.target.height
            ));
            lines.push(format!("   文件大小: {}", format_bytes(*written)));
        }
        Err(err) => {
            lines.push(format!("❌ {} 生成失败: {}", report.output_path.display(), err));
        }
    }

    match report.saved_bytes() {
        Some(saved) if saved > 0 => {
            lines.push(format!("💾 节省体积: {}", format_bytes(saved.unsigned_abs())));
        }
        Some(saved) if saved < 0 => {
            lines.push(format!("📈 体积增加: {}", format_bytes(saved.unsigned_abs())));
        }
        _ => {}
    }

    lines.push(String::new());
    lines
}

/// 结尾汇总：总体积变化 + 生成清单。
pub fn summary_lines(report: &BatchReport, targets: &[TargetSpec]) -> Vec<String> {
    let mut lines = vec!["🎉 图标优化完成!".to_string()];

    let total = report.total_saved();
    if total > 0 {
        lines.push(format!("💰 总共节省: {}", format_bytes(total.unsigned_abs())));
    } else if total < 0 {
        lines.push(format!("📊 总体积增加: {}", format_bytes(total.unsigned_abs())));
    }

    if report.failed() > 0 {
        lines.push(format!("⚠️ 失败目标: {}/{}", report.failed(), report.targets.len()));
    }

    lines.push(String::new());
    lines.push("📱 生成的图标:".to_string());
    for target in targets {
        lines.push(format!("  • {}: {}x{}px", target.name, target.width, target.height));
    }

    lines
}
