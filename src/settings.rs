//! 配置模块
//!
//! # 设计思路
//!
//! 源图路径与目标列表作为启动时注入的配置值，而不是进程级全局常量，
//! 测试可以替换为临时目录。
//!
//! # 实现思路
//!
//! - `IconConfig::default()` 即生产使用的固定配置，二进制入口直接使用它。
//! - 库调用方可以构造自己的 `IconConfig`，处理前统一经 `validate` 校验。

use std::path::PathBuf;

use crate::error::AppError;
use crate::icon::{TargetSpec, TransformConfig};

pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_SOURCE_FILE: &str = "arld-logo.png";

/// 一次批处理所需的全部配置。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 源图与输出图标所在目录。
    pub assets_dir: PathBuf,
    /// 源图文件名（相对 `assets_dir`）。
    pub source_file: String,
    /// 按顺序处理的输出目标。
    pub targets: Vec<TargetSpec>,
    pub transform: TransformConfig,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            source_file: DEFAULT_SOURCE_FILE.to_string(),
            targets: default_targets(),
            transform: TransformConfig::default(),
        }
    }
}

/// 主应用图标、Android 自适应图标、网页 favicon。
pub fn default_targets() -> Vec<TargetSpec> {
    [
        ("icon.png", 1024, 1024),
        ("adaptive-icon.png", 1024, 1024),
        ("favicon.png", 64, 64),
    ]
    .into_iter()
    .map(|(name, width, height)| TargetSpec {
        name: name.to_string(),
        width,
        height,
    })
    .collect()
}

impl IconConfig {
    pub fn source_path(&self) -> PathBuf {
        self.assets_dir.join(&self.source_file)
    }

    /// 输出文件与源图位于同一目录。
    pub fn output_path(&self, target: &TargetSpec) -> PathBuf {
        self.assets_dir.join(&target.name)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.source_file.trim().is_empty() {
            return Err(AppError::Config("source_file 不能为空".to_string()));
        }
        if self.targets.is_empty() {
            return Err(AppError::Config("至少需要一个输出目标".to_string()));
        }
        for target in &self.targets {
            target
                .validate()
                .map_err(|e| AppError::Config(e.to_string()))?;
            if target.name == self.source_file {
                return Err(AppError::Config(format!(
                    "输出目标 {} 会覆盖源图",
                    target.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn default_config_matches_shipped_targets() {
        let config = IconConfig::default();
        config.validate().expect("default config must be valid");

        let sizes: Vec<_> = config
            .targets
            .iter()
            .map(|t| (t.name.as_str(), t.width, t.height))
            .collect();
        assert_eq!(
            sizes,
            vec![
                ("icon.png", 1024, 1024),
                ("adaptive-icon.png", 1024, 1024),
                ("favicon.png", 64, 64),
            ]
        );
        assert_eq!(config.source_path(), Path::new("assets").join("arld-logo.png"));
    }

    #[test]
    fn outputs_land_next_to_the_source() {
        let config = IconConfig {
            assets_dir: PathBuf::from("/srv/app/assets"),
            ..IconConfig::default()
        };

        assert_eq!(
            config.output_path(&config.targets[2]),
            Path::new("/srv/app/assets/favicon.png")
        );
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let empty = IconConfig {
            targets: Vec::new(),
            ..IconConfig::default()
        };
        assert!(matches!(empty.validate(), Err(AppError::Config(_))));

        let zero = IconConfig {
            targets: vec![TargetSpec {
                name: "icon.png".to_string(),
                width: 0,
                height: 8,
            }],
            ..IconConfig::default()
        };
        assert!(matches!(zero.validate(), Err(AppError::Config(_))));

        let overwrites_source = IconConfig {
            source_file: "icon.png".to_string(),
            ..IconConfig::default()
        };
        assert!(matches!(overwrites_source.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn padded_target_names_are_rejected() {
        let config = IconConfig {
            targets: vec![TargetSpec {
                name: " icon.png".to_string(),
                width: 64,
                height: 64,
            }],
            ..IconConfig::default()
        };

        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }
}
