//! HiRes-Check 音频采样率检测工具
//!
//! 通过 ffprobe 探测音频文件的采样率，并按照 44.1kHz CD标准阈值
//! 将文件分类为 HI-RES（>44.1kHz）或 Standard（≤44.1kHz）。
//!
//! ## 核心特性
//! - ffprobe 子进程探测（仅读取流元数据，不解码音频）
//! - 严格大于 44100 Hz 判定为 HI-RES
//! - 单文件检测与文件夹递归批量扫描
//! - 批量扫描汇总统计（有效数、HI-RES数、占比、失败数）
//! - 交互式菜单操作，无命令行参数

pub mod error;
pub mod probe;
pub mod tools;

// 重新导出核心类型
pub use error::{InspectError, InspectResult};
pub use probe::{parse_sample_rate, probe_sample_rate};
pub use tools::classifier::Category;
pub use tools::formatter::ScanSummary;
