//! 工具模块集合
//!
//! 包含常量、分类、扫描、格式化、处理流程和交互菜单，支持main.rs的流程控制。

pub mod classifier;
pub mod constants;
pub mod formatter;
pub mod menu;
pub mod processor;
pub mod scanner;
pub mod utils;

// 重新导出主要的公共接口
pub use classifier::Category;
pub use formatter::{ScanSummary, display_name, format_progress, format_result_line, render_summary};
pub use processor::{process_folder, process_single_file};
pub use scanner::{scan_audio_files, show_scan_warning};
