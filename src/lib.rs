//! # 图标优化工具：库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs ── env_logger 初始化 + 默认配置 + 打印报告        │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ IconConfig
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ settings ─── 默认配置 / 注入 / 校验                    │
//! │  │                                                       │
//! │  ├─ batch ────── 顺序处理目标，单目标失败隔离              │
//! │  │   └─ icon      读取 → 去透明 → 缩放 → 填充 → PNG        │
//! │  │                                                       │
//! │  ├─ report ───── 控制台文本（体积变化、汇总、清单）         │
//! │  └─ error ────── AppError（源图缺失 / 配置 / 变换 / IO）   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError` |
//! | [`settings`] | 源图路径、目标列表与变换参数的注入 |
//! | [`icon`] | 单个目标的确定性图像变换与 PNG 输出 |
//! | [`batch`] | 逐目标执行并记录体积变化 |
//! | [`report`] | 将批处理结果渲染为控制台文本 |

pub mod batch;
pub mod error;
pub mod icon;
pub mod report;
pub mod settings;
